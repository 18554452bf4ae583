pub mod header;
pub mod view_switcher;

pub use header::Header;
