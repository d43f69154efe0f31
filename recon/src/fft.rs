use ndarray::{Array, ArrayBase, Axis, DataMut, Dimension, Array2};
use num_complex::Complex;
use rustfft::FftPlanner;
use serde::{Deserialize, Serialize};

/// Placement of the zero-frequency sample for the 2D transforms. Centered
/// places DC in the middle of both transformed axes on both sides of the
/// transform; Standard leaves it at the first sample like a plain DFT.
#[derive(Clone,Copy,Debug,PartialEq,Eq,Serialize,Deserialize)]
pub enum FourierConvention {
    Centered,
    Standard,
}

/// inverse 2D transform of a [phase,read] plane with unitary scaling
pub fn ifft2c(slice:&Array2<Complex<f32>>,convention:FourierConvention) -> Array2<Complex<f32>> {
    transform2(slice,convention,false)
}

/// forward 2D transform of a [phase,read] plane with unitary scaling
pub fn fft2c(slice:&Array2<Complex<f32>>,convention:FourierConvention) -> Array2<Complex<f32>> {
    transform2(slice,convention,true)
}

fn transform2(slice:&Array2<Complex<f32>>,convention:FourierConvention,forward:bool) -> Array2<Complex<f32>> {
    let mut slice = slice.clone();
    let mut shape = slice.shape().to_owned();
    shape.reverse();
    let mut fft_planner = FftPlanner::<f32>::new();
    for axis in 0..2 {
        let fft = match forward {
            true => fft_planner.plan_fft_forward(shape[axis]),
            false => fft_planner.plan_fft_inverse(shape[axis]),
        };
        for mut line in slice.axis_iter_mut(Axis(axis)) {
            let mut temp = line.to_vec();
            let n = temp.len();
            if convention == FourierConvention::Centered {
                temp.rotate_left(n/2);
            }
            fft.process(&mut temp);
            // normalize the result
            temp.iter_mut().for_each(|e| *e /= (n as f32).sqrt());
            if convention == FourierConvention::Centered {
                temp.rotate_right(n/2);
            }
            // assign temp back to line
            line.assign(&Array::from_vec(temp));
        }
    }
    slice
}

/// circular shift along an axis by a signed number of samples (wrap-around,
/// no zero-fill). Rolling by s then -s restores the input exactly.
pub fn roll_axis<A,S,D>(data:&mut ArrayBase<S,D>,axis:Axis,shift:i32)
    where A:Clone, S:DataMut<Elem = A>, D:Dimension {
    let n = data.len_of(axis);
    if n == 0 {
        return
    }
    let k = shift.rem_euclid(n as i32) as usize;
    if k == 0 {
        return
    }
    for mut lane in data.lanes_mut(axis) {
        let mut temp = lane.to_vec();
        temp.rotate_right(k);
        lane.assign(&Array::from_vec(temp));
    }
}
