pub mod config;
pub mod error;
pub mod gui;
pub mod models;
pub mod services;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;
