use ndarray::{Array4, ArrayViewD, Axis, concatenate};

use super::{interpolate_bilinear, repeat_to_batch_size};
use crate::{
    ArrayElement, Error,
    device::{Device, DeviceArray},
};

/// Normalizes a noise mask to `shape = [batch, channels, height, width]` on
/// `device`.
///
/// All leading dimensions of the mask are flattened into single-channel
/// samples, resized bilinearly in the mask's own precision, repeated across channels and finally matched
/// to the target batch size.
pub fn prepare_mask<T: ArrayElement>(
    noise_mask: ArrayViewD<'_, T>,
    shape: [usize; 4],
    device: Device,
) -> Result<DeviceArray<T>, Error> {
    let [batch, channels, height, width] = shape;
    let mask_shape = noise_mask.shape();
    if mask_shape.len() < 2 {
        return Err(Error::invalid_shape(
            mask_shape,
            "mask must have at least two dimensions",
        ));
    }
    let (leading, spatial) = mask_shape.split_at(mask_shape.len() - 2);
    let (mask_height, mask_width) = (spatial[0], spatial[1]);
    if mask_height == 0 || mask_width == 0 {
        return Err(Error::invalid_shape(
            mask_shape,
            "mask spatial dimensions must be positive",
        ));
    }
    if height == 0 || width == 0 {
        return Err(Error::invalid_shape(
            &shape,
            "target spatial dimensions must be positive",
        ));
    }
    let samples: usize = leading.iter().product();
    if samples == 0 && batch > 0 {
        return Err(Error::invalid_shape(
            mask_shape,
            "mask has no samples to repeat",
        ));
    }

    let flattened = Array4::from_shape_vec(
        (samples, 1, mask_height, mask_width),
        noise_mask.iter().copied().collect(),
    )
    .map_err(|_| Error::invalid_shape(mask_shape, "mask is not reshapeable"))?;

    let resized = interpolate_bilinear(flattened.view(), height, width)?;
    let per_channel = vec![resized.view(); channels];
    let expanded = concatenate(Axis(1), &per_channel).map_err(|_| {
        Error::invalid_shape(&shape, "channel count must be positive")
    })?;
    let batched = repeat_to_batch_size(expanded, batch);

    Ok(DeviceArray::new(batched.into_dyn(), device))
}
