pub mod config;
pub mod list_resource;
pub mod session;
