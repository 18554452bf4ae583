pub mod card;
pub mod detail;

pub use card::{list_cards, results_summary, sort_for_list, ProgramCard};
pub use detail::ProgramDetail;
