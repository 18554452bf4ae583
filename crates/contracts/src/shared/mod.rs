pub mod catalog;
pub mod config;
pub mod cost;
pub mod dates;
pub mod grades;
