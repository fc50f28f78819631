// Library crate exposing modules for integration tests

pub mod cli;
pub mod config;
pub mod model;
pub mod report;
pub mod scanner;
pub mod util;
