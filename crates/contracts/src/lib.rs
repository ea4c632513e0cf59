//! Shared types for the hotel administration client.
//!
//! - `domain`: wire types and list configuration for every hotel entity
//! - `shared::list_resource`: the generic list-resource controller
//! - `shared::session`, `shared::config`: injected session context and client configuration

pub mod domain;
pub mod shared;
