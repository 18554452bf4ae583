pub mod state;
pub mod view_mode;

pub use state::BrowserState;
pub use view_mode::{ViewMode, ViewTransition};
