pub mod p900_program_filter;
pub mod p901_program_list;
pub mod p902_program_calendar;
pub mod p903_program_map;
pub mod p904_filter_options;
