//! Configuration type definitions.
//!
//! Responsibilities:
//! - Define the immutable `Config` value handed to the client builder.
//! - Keep the access token wrapped in `secrecy::SecretString`.
//!
//! Does NOT handle:
//! - Loading from the environment or `.env` files (see `loader` module).
//! - Network connections (see client crate).

mod connection;

pub use connection::{AuthConfig, Config, ConnectionConfig};
