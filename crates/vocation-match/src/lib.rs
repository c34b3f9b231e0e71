pub mod assessment;
pub mod config;
pub mod error;
pub mod matching;
pub mod telemetry;
pub mod vocations;
