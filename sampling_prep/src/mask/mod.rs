mod interpolate;
mod prepare_mask;
mod repeat;

pub use interpolate::interpolate_bilinear;
pub use prepare_mask::prepare_mask;
pub use repeat::repeat_to_batch_size;
