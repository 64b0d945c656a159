//! Server-side API edge.
//!
//! The server exposes the `/api` contract the client consumes. It does not
//! score or rank crew: every payload comes from a [`CrewBackend`], which
//! either forwards to an upstream scoring service or serves a pre-scored
//! fixture data set.
//!
//! # Layout
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers and OpenAPI annotations
//! - **Service Layer** (`service/`) - The crew backend and its two sources
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - HTTP client and backend initialization
//! - **Router** (`router`) - Route table, CORS, request tracing and API docs
//!
//! # Feature Gates
//!
//! This module is only available with the `server` feature flag enabled.
//!
//! [`CrewBackend`]: service::backend::CrewBackend

pub mod config;
pub mod controller;
pub mod error;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
