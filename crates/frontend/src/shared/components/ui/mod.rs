pub mod badge;
pub mod input;
pub mod select;

pub use badge::Badge;
pub use input::SearchInput;
pub use select::Select;
