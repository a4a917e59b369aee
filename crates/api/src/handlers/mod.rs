//! Request handlers for scenes and positionable entities.
//!
//! Handlers delegate to the repositories in `vtwin_db` and map errors via
//! [`AppError`](crate::error::AppError).

pub mod entity;
pub mod position;
pub mod scene;
