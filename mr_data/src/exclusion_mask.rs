use std::fs::File;
use std::io::Read;
use std::path::Path;
use ndarray::{Array1, Array2};

use crate::error::DataError;

/// leading timepoints that are always kept after the timing shift
const N_ALWAYS_VALID:usize = 3;

/// Load a per-timepoint exclusion mask from a whitespace-delimited text
/// table, one line per dimension. Mask timing lags the acquisition by three
/// samples, so every row is rolled right by three (circular) and the first
/// three samples are forced valid.
pub fn load_exclusion_mask(path:&Path) -> Result<Array2<f32>,DataError> {
    let mut f = File::open(path).map_err(|source| DataError::Io {
        path:path.to_owned(),
        source,
    })?;
    let mut s = String::new();
    f.read_to_string(&mut s).map_err(|source| DataError::Io {
        path:path.to_owned(),
        source,
    })?;
    let mut mask = parse_table(&s,path)?;
    align_timing(&mut mask);
    Ok(mask)
}

fn parse_table(s:&str,path:&Path) -> Result<Array2<f32>,DataError> {
    let mut rows:Vec<Vec<f32>> = vec![];
    for (line_idx,line) in s.lines().enumerate() {
        if line.trim().is_empty() {
            continue
        }
        let mut row = vec![];
        for token in line.split_ascii_whitespace() {
            let value = token.parse::<f32>().map_err(|_| DataError::Parse {
                path:path.to_owned(),
                detail:format!("bad numeric value '{}' on line {}",token,line_idx + 1),
            })?;
            row.push(value);
        }
        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                return Err(DataError::RaggedTable {
                    path:path.to_owned(),
                    line:line_idx + 1,
                    expected:first.len(),
                    found:row.len(),
                });
            }
        }
        rows.push(row);
    }
    let n_rows = rows.len();
    let n_samples = rows.first().map(|r| r.len()).unwrap_or(0);
    let flat:Vec<f32> = rows.into_iter().flatten().collect();
    Ok(Array2::from_shape_vec((n_rows,n_samples),flat).expect("table rows have equal length"))
}

fn align_timing(mask:&mut Array2<f32>) {
    let n_samples = mask.ncols();
    if n_samples == 0 {
        return
    }
    let roll = N_ALWAYS_VALID % n_samples;
    for mut row in mask.rows_mut() {
        let mut temp = row.to_vec();
        temp.rotate_right(roll);
        for value in temp.iter_mut().take(N_ALWAYS_VALID) {
            *value = 1.0;
        }
        row.assign(&Array1::from(temp));
    }
}
