//! Testing Utilities
//!
//! In-memory transports for exercising resolvers and the dispatcher without
//! a live RPC node.
//!
//! Enabled with the `testing` feature (always available to unit tests).

pub mod mock_transport;

pub use mock_transport::{MockTransport, MockTransportFactory};
