use ndarray::{s, Array4, Axis};
use num_complex::Complex;

use crate::error::ReconError;

/// Zero-pad the read axis of coil sensitivity maps so they line up with
/// oversampled k-space. Padding is symmetric: each side receives half the
/// size difference, rounded down. An odd difference therefore leaves the
/// result one sample short of the target; the combiner rejects that case
/// rather than realigning it silently.
pub fn pad_read_axis(maps:&Array4<Complex<f32>>,target_read:usize) -> Result<Array4<Complex<f32>>,ReconError> {
    let (n_slice,n_coil,n_phase,n_read) = maps.dim();
    if target_read < n_read {
        return Err(ReconError::DimensionMismatch {
            axis:"read",
            kspace:target_read,
            sens_maps:n_read,
        });
    }
    let pad = (target_read - n_read)/2;
    let mut padded = Array4::<Complex<f32>>::zeros((n_slice,n_coil,n_phase,n_read + 2*pad));
    padded.slice_mut(s![..,..,..,pad..pad + n_read]).assign(maps);
    Ok(padded)
}

/// Scale every coil vector to unit root-sum-of-squares magnitude.
/// Locations with zero combined magnitude (outside every coil profile,
/// including pad regions) map to zero instead of NaN.
pub fn normalize_by_rss(maps:&mut Array4<Complex<f32>>) {
    // "square root of the sum of the squares" over the coil axis
    let rss = maps.mapv(|v| v.norm_sqr()).sum_axis(Axis(1)).mapv(f32::sqrt);
    for mut coil in maps.axis_iter_mut(Axis(1)) {
        coil.iter_mut().zip(rss.iter()).for_each(|(value,denom)| {
            *value = match *denom == 0.0 {
                true => Complex::new(0.0,0.0),
                false => *value/ *denom,
            };
        });
    }
}

/// Pad to the k-space read extent, then normalize. This is the map
/// preparation the combiner runs, exposed for standalone use.
pub fn prepare_sensitivity_maps(maps:&Array4<Complex<f32>>,target_read:usize) -> Result<Array4<Complex<f32>>,ReconError> {
    let mut padded = pad_read_axis(maps,target_read)?;
    normalize_by_rss(&mut padded);
    Ok(padded)
}
