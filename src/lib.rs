//! Snaplink - a local-first URL shortener with click analytics
//!
//! This library provides the core functionality for the Snaplink tool:
//! a file-backed link store, short code allocation, redirect resolution
//! with click tracking, and read-only analytics over the stored links.
//!
//! # Architecture
//! - `store`: the link store, persisted as JSON to a single file slot
//! - `models`: link records and click events
//! - `services`: allocator, resolver, and analytics business logic
//! - `cli`: command-line interface (the presentation surface)
//! - `config`: environment-driven configuration
//! - `system`: logging initialization
//! - `utils`: code generation, URL validation, clock abstraction

pub mod cli;
pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod store;
pub mod system;
pub mod utils;
