//! Typed endpoint surface and HTTP gateway.

pub mod client;
pub mod gateway;
pub mod types;

pub use client::TokenClient;
pub use gateway::Gateway;
