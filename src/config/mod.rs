//! Configuration module for the budget planner
//!
//! This module provides:
//! - Platform path resolution with an environment override
//! - User preference persistence

pub mod paths;
pub mod settings;

pub use paths::PlannerPaths;
pub use settings::Settings;
