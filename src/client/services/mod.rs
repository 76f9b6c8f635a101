pub mod analysis_api;
pub mod notification;
pub mod pulse;
pub mod query_cache;
pub mod submission;
