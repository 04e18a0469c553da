pub mod api;
pub mod config;
pub mod domain;
pub mod optimizer;
pub mod state;
pub mod telemetry;
