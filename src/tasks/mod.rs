//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Expiry Sweeper: proactively removes expired cache entries at a
//!   configured interval

mod sweeper;

pub use sweeper::{spawn_sweeper, Sweeper};
