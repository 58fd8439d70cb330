pub mod balance;
pub mod config;
pub mod pipeline;
pub mod pipeline_utils;
pub mod sources;
pub mod swap;
