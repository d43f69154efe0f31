use ndarray::{s, Array4, Array5, Axis};
use num_complex::Complex;

use crate::error::ReconError;
use crate::fft::{ifft2c, roll_axis};
use crate::recon_config::ReconSettings;
use crate::sens::prepare_sensitivity_maps;
use crate::shift::RowShift;

/// Reconstruct a coil-combined image volume from raw k-space.
///
/// K-space is indexed [echo,slice,coil,phase,read], sensitivity maps
/// [slice,coil,phase,read] with an unpadded (narrower) read axis. The
/// combination runs the centered inverse transform on every plane, rolls the
/// phase-encode axis by the header row shift, pads and normalizes the maps,
/// and sums conjugate-weighted coil images. The read axis loses a quarter of
/// its extent on each side when oversampling removal is on (the default).
pub fn coil_combined_recon(
    kspace:&Array5<Complex<f32>>,
    sens_maps:&Array4<Complex<f32>>,
    row_shift:RowShift,
    settings:&ReconSettings,
) -> Result<Array4<Complex<f32>>,ReconError> {
    let (n_echo,n_slice,n_coil,n_phase,n_read) = kspace.dim();
    let (s_slice,s_coil,s_phase,s_read) = sens_maps.dim();

    check_extent("slice",n_slice,s_slice)?;
    check_extent("coil",n_coil,s_coil)?;
    check_extent("phase-encode",n_phase,s_phase)?;
    if s_read > n_read {
        return Err(ReconError::DimensionMismatch {
            axis:"read",
            kspace:n_read,
            sens_maps:s_read,
        });
    }

    let shift = match settings.strict_shift_check {
        true => row_shift.value_checked()?,
        false => row_shift.value(),
    };

    // transform every [phase,read] plane into a coil image
    let mut coil_imgs = Array5::<Complex<f32>>::zeros(kspace.dim());
    for e in 0..n_echo {
        for sl in 0..n_slice {
            for c in 0..n_coil {
                let plane = kspace.slice(s![e,sl,c,..,..]).to_owned();
                let img = ifft2c(&plane,settings.fourier_convention);
                coil_imgs.slice_mut(s![e,sl,c,..,..]).assign(&img);
            }
        }
    }

    // realign rows to the canonical center
    roll_axis(&mut coil_imgs,Axis(3),shift);

    let maps = prepare_sensitivity_maps(sens_maps,n_read)?;
    if maps.dim().3 != n_read {
        // odd pad difference: the maps came out one sample short
        return Err(ReconError::DimensionMismatch {
            axis:"read",
            kspace:n_read,
            sens_maps:maps.dim().3,
        });
    }

    // conjugate-weighted sum over the coil axis
    let mut combined = Array4::<Complex<f32>>::zeros((n_echo,n_slice,n_phase,n_read));
    for e in 0..n_echo {
        for c in 0..n_coil {
            let img = coil_imgs.slice(s![e,..,c,..,..]);
            let weight = maps.slice(s![..,c,..,..]);
            let mut target = combined.slice_mut(s![e,..,..,..]);
            target.iter_mut().zip(img.iter().zip(weight.iter())).for_each(|(acc,(v,w))| {
                *acc += v*w.conj();
            });
        }
    }

    match settings.remove_oversampling {
        true => remove_readout_oversampling(&combined,n_read/4),
        false => Ok(combined),
    }
}

/// Crop `n_lines` samples from both ends of the read axis. Oversampled
/// acquisitions sample the readout at twice the anatomical extent, so the
/// combiner trims a quarter of the axis on each side.
pub fn remove_readout_oversampling(data:&Array4<Complex<f32>>,n_lines:usize) -> Result<Array4<Complex<f32>>,ReconError> {
    let n_read = data.dim().3;
    if n_lines == 0 {
        return Ok(data.to_owned());
    }
    if 2*n_lines > n_read {
        return Err(ReconError::InvalidTrim {
            n_lines,
            read_len:n_read,
        });
    }
    Ok(data.slice(s![..,..,..,n_lines..n_read - n_lines]).to_owned())
}

fn check_extent(axis:&'static str,kspace:usize,sens_maps:usize) -> Result<(),ReconError> {
    match kspace == sens_maps {
        true => Ok(()),
        false => Err(ReconError::DimensionMismatch {
            axis,
            kspace,
            sens_maps,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp_volume(n_read:usize) -> Array4<Complex<f32>> {
        Array4::from_shape_fn((1,1,2,n_read),|(_,_,p,r)| {
            Complex::new(r as f32,p as f32)
        })
    }

    #[test]
    fn zero_trim_returns_input_unchanged() {
        let vol = ramp_volume(8);
        let trimmed = remove_readout_oversampling(&vol,0).unwrap();
        assert_eq!(vol,trimmed);
    }

    #[test]
    fn trim_keeps_the_center_region() {
        let vol = ramp_volume(8);
        let trimmed = remove_readout_oversampling(&vol,2).unwrap();
        assert_eq!(trimmed.dim(),(1,1,2,4));
        for p in 0..2 {
            for r in 0..4 {
                assert_eq!(trimmed[[0,0,p,r]],vol[[0,0,p,r + 2]]);
            }
        }
    }

    #[test]
    fn trim_beyond_half_the_axis_is_rejected() {
        let vol = ramp_volume(8);
        let result = remove_readout_oversampling(&vol,5);
        assert_eq!(
            result,
            Err(ReconError::InvalidTrim { n_lines:5,read_len:8 })
        );
    }
}
