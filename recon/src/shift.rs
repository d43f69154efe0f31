use crate::error::ReconError;

/// Row shift resolved from the acquisition header. An inconsistent result
/// still carries a usable value (taken from the first echo) so lenient
/// pipelines can proceed, while strict ones can refuse it.
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub struct RowShift {
    value:i32,
    consistent:bool,
}

impl RowShift {
    pub fn value(&self) -> i32 {
        self.value
    }
    pub fn is_consistent(&self) -> bool {
        self.consistent
    }
    /// the shift value, or an error when the header ranges disagreed
    pub fn value_checked(&self) -> Result<i32,ReconError> {
        match self.consistent {
            true => Ok(self.value),
            false => Err(ReconError::InconsistentRowShift { value:self.value }),
        }
    }
}

/// Derive the phase-encode row shift from the header row-range endpoints,
/// one entry per echo. Reconstructed rows are realigned to the scanner's
/// canonical center by rolling the image by this amount.
///
/// The ranges are expected to be identical for every echo of an acquisition.
/// When they are not, the header is corrupt or mis-exported; a warning goes
/// to stderr and the first echo's bounds decide the shift.
pub fn resolve_row_shift(lower_bounds:&[i32],upper_bounds:&[i32]) -> RowShift {
    assert!(!lower_bounds.is_empty() && !upper_bounds.is_empty(),"row ranges cannot be empty");
    let consistent = is_uniform(lower_bounds) && is_uniform(upper_bounds);
    if !consistent {
        eprintln!("warning: row ranges differ between echoes. Using the first echo's bounds");
    }
    // truncating division matches the scanner export convention
    let value = -((lower_bounds[0] + upper_bounds[0])/2);
    RowShift {
        value,
        consistent,
    }
}

fn is_uniform(values:&[i32]) -> bool {
    values.iter().all(|v| *v == values[0])
}
