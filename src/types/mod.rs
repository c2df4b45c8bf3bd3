pub mod answers;
pub mod config;
pub mod question;
pub mod scoring;
