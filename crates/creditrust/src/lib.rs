//! CrediTrust core: deterministic credit scoring, fixed-rate amortization,
//! and multi-factor risk analysis behind a thin lending service facade.

pub mod config;
pub mod engine;
pub mod error;
pub mod lending;
pub mod telemetry;
