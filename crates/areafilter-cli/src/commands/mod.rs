pub mod config;
pub mod filter;
pub mod run;
pub mod stats;
