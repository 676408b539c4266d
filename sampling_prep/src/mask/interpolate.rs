use ndarray::{Array4, ArrayView4};
use num_traits::NumCast;

use crate::{ArrayElement, Error};

/// Source sample position and blend weight for one output coordinate.
/// Uses half-pixel centers without corner alignment.
fn source_index<T: ArrayElement>(
    output_index: usize,
    input_len: usize,
    output_len: usize,
) -> Result<(usize, usize, T), Error> {
    let scale = input_len as f64 / output_len as f64;
    let source = ((output_index as f64 + 0.5) * scale - 0.5).max(0.0);
    let lower = <usize as NumCast>::from(source.floor())
        .unwrap_or(0)
        .min(input_len - 1);
    let upper = (lower + 1).min(input_len - 1);
    let weight = (source - lower as f64).clamp(0.0, 1.0);
    let weight = <T as NumCast>::from(weight).ok_or(Error::UnrepresentableValue {
        value: weight,
        data_type: T::data_type(),
    })?;
    Ok((lower, upper, weight))
}

/// Resizes the two trailing dimensions of `input` to `height` x `width`,
/// blending in the element type `T`.
/// Callers guarantee every dimension involved is non-zero.
pub fn interpolate_bilinear<T: ArrayElement>(
    input: ArrayView4<'_, T>,
    height: usize,
    width: usize,
) -> Result<Array4<T>, Error> {
    let (batch, channels, input_height, input_width) = input.dim();
    let rows = (0..height)
        .map(|y| source_index::<T>(y, input_height, height))
        .collect::<Result<Vec<_>, _>>()?;
    let columns = (0..width)
        .map(|x| source_index::<T>(x, input_width, width))
        .collect::<Result<Vec<_>, _>>()?;

    let lerp = |a: T, b: T, weight: T| a + (b - a) * weight;
    Ok(Array4::from_shape_fn(
        (batch, channels, height, width),
        |(n, c, y, x)| {
            let (y0, y1, wy) = rows[y];
            let (x0, x1, wx) = columns[x];
            let sample = |yy: usize, xx: usize| input[[n, c, yy, xx]];
            let top = lerp(sample(y0, x0), sample(y0, x1), wx);
            let bottom = lerp(sample(y1, x0), sample(y1, x1), wx);
            lerp(top, bottom, wy)
        },
    ))
}
