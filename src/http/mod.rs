//! HTTP front door.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (assign/propagate request ID)
//!     → handlers.rs (`/` usage text, `/json` relay)
//!     → relay subsystem → engine
//!     → plain-text response to client
//! ```

pub mod handlers;
pub mod request;
pub mod server;

pub use handlers::USAGE;
pub use request::X_REQUEST_ID;
pub use server::{AppState, HttpServer, ServerError};
