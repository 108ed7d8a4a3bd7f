//! Infrastructure layer - Port implementations
//!
//! This module contains concrete implementations of the arbitration core's
//! ports using actual hardware and system resources.

pub mod drivers;
pub mod services;
pub mod tasks;
pub mod types;
