pub mod check;
pub mod config;
pub mod export;
pub mod grid;
pub mod init;
pub mod list;
pub mod summary;
