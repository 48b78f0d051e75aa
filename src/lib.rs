//! MCP server for company documentation.
//!
//! Publishes documentation pages and the architecture decision record index
//! as resources, exposes `search_docs`, `get_adr`, `get_service_info` and
//! `check_naming_convention` as tools, and serves two review prompts, all over
//! JSON-RPC 2.0 stdio transport.

pub mod config;
pub mod handlers;
pub mod knowledge;
pub mod protocol;
pub mod server;

pub mod schema;
