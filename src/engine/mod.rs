//! Upstream engine subsystem.
//!
//! # Data Flow
//! ```text
//! Calculation (effective date/time)
//!     → client.rs (build URL, one GET, read body)
//!     → types.rs (decode EngineResponse)
//!     → back to the relay for rendering
//! ```
//!
//! # Design Decisions
//! - Exactly one attempt per call; failures go straight back to the caller
//! - Transport and decode failures are distinct error variants

pub mod client;
pub mod types;

pub use client::EngineClient;
pub use types::{Calculation, EngineError, EngineResponse, EngineResult};
