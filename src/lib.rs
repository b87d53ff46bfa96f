pub mod cli;
pub mod client;
pub mod config;
pub mod encoder;
pub mod error;
pub mod identify;
pub mod logger;
pub mod pipeline;
pub mod renamer;
pub mod scanner;
