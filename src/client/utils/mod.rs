pub mod file_info;
