pub mod add;
pub mod approve;
pub mod backup;
pub mod calendar;
pub mod comment;
pub mod company;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod login;
pub mod user;
