use std::path::PathBuf;
use thiserror::Error;

#[derive(Error,Debug)]
pub enum DataError {
    #[error("cannot read {path:?}: {source}")]
    Io {
        path:PathBuf,
        #[source]
        source:std::io::Error,
    },
    #[error("cannot parse {path:?}: {detail}")]
    Parse {
        path:PathBuf,
        detail:String,
    },
    #[error("ragged table in {path:?}: line {line} has {found} samples, expected {expected}")]
    RaggedTable {
        path:PathBuf,
        line:usize,
        expected:usize,
        found:usize,
    },
    #[error("unexpected volume shape {shape:?} in {path:?}")]
    UnexpectedShape {
        path:PathBuf,
        shape:Vec<usize>,
    },
    #[error("motion record in {path:?} is not a JSON object")]
    NotAnObject {
        path:PathBuf,
    },
    #[error("cannot read nifti volume {path:?}: {detail}")]
    Nifti {
        path:PathBuf,
        detail:String,
    },
}
