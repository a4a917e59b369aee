//! Virtual twin CMS API server library.
//!
//! Exposes the building blocks (config, state, error handling, placement,
//! routes) so integration tests and the binary entrypoint can both access
//! them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod placement;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
