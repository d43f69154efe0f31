use thiserror::Error;

#[derive(Error,Debug,Clone,PartialEq,Eq)]
pub enum ReconError {
    #[error("size mismatch on the {axis} axis: k-space has {kspace}, sensitivity maps have {sens_maps}")]
    DimensionMismatch {
        axis:&'static str,
        kspace:usize,
        sens_maps:usize,
    },
    #[error("cannot trim {n_lines} read samples from each end of a read axis of length {read_len}")]
    InvalidTrim {
        n_lines:usize,
        read_len:usize,
    },
    #[error("row ranges disagree across echoes; refusing shift of {value} rows in strict mode")]
    InconsistentRowShift {
        value:i32,
    },
}
