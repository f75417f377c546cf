//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Entity, request, and envelope types for the resource
//! - `wire.rs` — Request/response shapes, where a resource has many of them
//! - `client.rs` — Sub-client with one method per endpoint

pub mod company;
pub mod health;
pub mod image;
pub mod publication;
pub mod statistics;
pub mod subscription;
