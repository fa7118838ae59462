pub mod cli;
pub mod config;
pub mod models;
pub mod seed;
pub mod simulator;
pub mod store;

pub use seed::SeedLoader;
pub use simulator::ScanSimulator;
