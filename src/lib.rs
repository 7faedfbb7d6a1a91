//! Linear ticket tools for agent runtimes.
//!
//! Wraps Linear's GraphQL API as six plain-text tools (create, read, update,
//! assign and list tickets, list users) that a host agent runtime can
//! advertise and invoke. Build a [`ToolRegistry`] with [`registry`] and hand
//! each incoming call to [`ToolRegistry::invoke`]; every outcome, success or
//! failure, comes back as text for the agent.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod tools;

pub use client::{LinearClient, TicketApi};
pub use config::Config;
pub use error::Error;
pub use tools::{registry, registry_with, Tool, ToolRegistry, ToolSpec};
