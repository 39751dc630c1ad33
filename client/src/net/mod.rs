//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` holds the authenticated helpers views call, `http` the raw
//! `gloo-net` plumbing, `error` the shared failure type, and `types` the wire
//! schema.

pub mod api;
pub mod error;
pub mod http;
pub mod types;
