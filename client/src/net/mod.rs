//! Networking for the browser build.
//!
//! SYSTEM CONTEXT
//! ==============
//! `browser` adapts `gloo-net` to the catalog `Transport` seam; everything
//! above it (endpoint paths, error normalization) lives in the catalog crate.

pub mod browser;
