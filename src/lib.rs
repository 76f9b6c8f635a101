// Shared library for the GUI and CLI clients
pub mod client;
