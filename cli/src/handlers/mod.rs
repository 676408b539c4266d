mod plan;

pub use plan::handle_plan;
