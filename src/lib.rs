pub mod config;
pub mod error;
pub mod feed;
pub mod presenter;
pub mod tui;
