pub mod comment;
pub mod company;
pub mod entry;
pub mod status;
pub mod user;
