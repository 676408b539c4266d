use ndarray::{Array4, Axis, concatenate, s};

/// Matches the leading dimension of `array` to `batch_size`.
///
/// Larger inputs are truncated to their first `batch_size` samples. Smaller
/// inputs are tiled whole (`[a, b]` becomes `[a, b, a, b, a]` for a batch of
/// five) and then truncated. An empty input stays empty.
pub fn repeat_to_batch_size<T: Clone>(
    array: Array4<T>,
    batch_size: usize,
) -> Array4<T> {
    let current = array.len_of(Axis(0));
    if current == batch_size || current == 0 {
        return array;
    }
    if current > batch_size {
        return array.slice(s![..batch_size, .., .., ..]).to_owned();
    }

    let repeats = batch_size.div_ceil(current);
    let views = vec![array.view(); repeats];
    match concatenate(Axis(0), &views) {
        Ok(tiled) => tiled.slice(s![..batch_size, .., .., ..]).to_owned(),
        Err(_) => array,
    }
}
