//! nscache - A namespaced in-memory cache server
//!
//! Provides bounded-memory, self-expiring storage with TTL expiry and
//! byte-budget LRU eviction, partitioned into namespaces.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::{spawn_sweeper, Sweeper};
