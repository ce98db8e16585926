pub mod add;
pub mod clear;
pub mod common;
pub mod completions;
pub mod config;
pub mod delete;
pub mod export;
pub mod list;
pub mod seed;
pub mod settings;
pub mod stats;
