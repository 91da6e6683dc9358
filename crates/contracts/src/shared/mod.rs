pub mod file_types;
