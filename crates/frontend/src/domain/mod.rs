pub mod a001_program;
