//! API Routes
//!
//! Route handlers organized by functionality.

pub mod charts;
pub mod dataset;
pub mod events;
pub mod health;
