//! Domains module containing business logic organized by bounded contexts.
//!
//! The dice server has a single domain: the tools exposed to MCP clients.

pub mod tools;
