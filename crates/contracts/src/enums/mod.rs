pub mod cost_period;
pub mod indoor_outdoor;
pub mod program_type;

pub use cost_period::CostPeriod;
pub use indoor_outdoor::IndoorOutdoor;
pub use program_type::ProgramType;
