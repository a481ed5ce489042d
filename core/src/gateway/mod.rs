//! Gateway module - HTTP surface in front of the conversation provider

pub mod handlers;
pub mod server;

pub use server::{AppState, GatewayServer};
