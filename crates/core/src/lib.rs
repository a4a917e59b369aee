//! Domain logic for the virtual twin CMS.
//!
//! This crate has no I/O: it defines shared types, the domain error, the
//! positionable entity kinds, and the placement algorithms that the
//! repository and API layers build on.

pub mod coordinates;
pub mod entity_kind;
pub mod error;
pub mod placement;
pub mod resolution;
pub mod types;
