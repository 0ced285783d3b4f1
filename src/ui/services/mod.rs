pub mod backend_service;
pub mod fetch_runner;

pub use backend_service::BackendService;
pub use fetch_runner::{Completed, FetchRunner};
