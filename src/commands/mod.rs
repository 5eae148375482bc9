pub mod complete;
pub mod config;
pub mod help;
pub mod helpers;
pub mod list;
pub mod run;
pub mod show;
pub mod version;
