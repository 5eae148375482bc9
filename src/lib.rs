#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod project;
pub mod slash;
pub mod utils;
pub mod version;
