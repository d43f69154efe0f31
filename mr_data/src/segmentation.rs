use std::path::Path;
use ndarray::{s, Array3, Axis, Ix3};
use nifti::volume::ndarray::IntoNdArray;
use nifti::{NiftiObject, ReaderOptions};

use crate::error::DataError;

/// slabs dropped from each end of the first axis (edge slices carry no anatomy)
const EDGE_CROP:usize = 10;

/// Load a segmentation volume from a nifti file and bring it into the
/// reconstructed image orientation: crop the edge slabs, invert the first
/// two axes, and move the slice axis to the front. With `binary` set, values
/// are thresholded at 0.5 into exact 0/1.
pub fn load_segmentation(path:&Path,binary:bool) -> Result<Array3<f32>,DataError> {
    let obj = ReaderOptions::new().read_file(path).map_err(|e| DataError::Nifti {
        path:path.to_owned(),
        detail:e.to_string(),
    })?;
    let array = obj.into_volume().into_ndarray::<f32>().map_err(|e| DataError::Nifti {
        path:path.to_owned(),
        detail:e.to_string(),
    })?;
    let shape = array.shape().to_vec();
    if shape.len() != 3 || shape[0] <= 2*EDGE_CROP {
        return Err(DataError::UnexpectedShape {
            path:path.to_owned(),
            shape,
        });
    }
    let volume = array.into_dimensionality::<Ix3>().expect("dimensionality was checked above");
    Ok(reorient(&volume,binary))
}

fn reorient(volume:&Array3<f32>,binary:bool) -> Array3<f32> {
    let n = volume.shape()[0];
    let mut mask = volume.slice(s![EDGE_CROP..n - EDGE_CROP,..,..]).to_owned();
    mask.invert_axis(Axis(0));
    mask.invert_axis(Axis(1));
    // slice axis to the front: [x,y,z] -> [z,x,y]
    let mut mask = mask.permuted_axes([2,0,1]);
    if binary {
        mask.mapv_inplace(|v| match v < 0.5 {
            true => 0.0,
            false => 1.0,
        });
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    fn coordinate_volume(nx:usize,ny:usize,nz:usize) -> Array3<f32> {
        Array3::from_shape_fn((nx,ny,nz),|(x,y,z)| (x*10000 + y*100 + z) as f32)
    }

    #[test]
    fn reorientation_crops_flips_and_reorders() {
        let nx = 24;
        let ny = 3;
        let nz = 2;
        let volume = coordinate_volume(nx,ny,nz);
        let out = reorient(&volume,false);
        // [24,3,2] loses 20 x-slabs and comes back as [z,x,y]
        assert_eq!(out.shape(),&[2,4,3]);
        // out[z,x,y] = volume[crop + flipped x, flipped y, z]
        for z in 0..2 {
            for x in 0..4 {
                for y in 0..3 {
                    let src_x = EDGE_CROP + (3 - x);
                    let src_y = 2 - y;
                    assert_eq!(out[[z,x,y]],volume[[src_x,src_y,z]]);
                }
            }
        }
    }

    #[test]
    fn binarization_thresholds_at_half() {
        let mut volume = Array3::from_elem((22,2,2),0.2f32);
        volume[[10,0,0]] = 0.5;
        volume[[10,1,1]] = 0.9;
        let out = reorient(&volume,true);
        assert_eq!(out.shape(),&[2,2,2]);
        // flipped first axis maps source x=10 to output x=1
        assert_eq!(out[[0,1,1]],1.0);
        assert_eq!(out[[1,1,0]],1.0);
        assert_eq!(out[[0,1,0]],0.0);
        assert_eq!(out[[1,0,0]],0.0);
    }

    #[test]
    fn missing_file_is_an_explicit_error() {
        let result = load_segmentation(Path::new("/nonexistent/seg.nii.gz"),true);
        assert!(matches!(result,Err(DataError::Nifti { .. })));
    }
}
