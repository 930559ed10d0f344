pub mod app;
pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod parsers;
pub mod presentation;
