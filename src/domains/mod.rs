//! Domains module containing business logic organized by bounded contexts.
//!
//! - **partners**: the business partner reference dataset
//! - **tools**: MCP tools that can be executed by clients

pub mod partners;
pub mod tools;
