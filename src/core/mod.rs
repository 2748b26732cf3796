pub mod backup;
pub mod billing;
pub mod dashboard;
pub mod summary;
