pub mod engine;
pub mod filter_state;

pub use engine::apply_filters;
pub use filter_state::{DateScope, FilterKey, FilterState, FilterTag};
