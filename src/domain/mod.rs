//! Domain layer for the weatherdash plugin.
//!
//! Core types independent of Zellij APIs and of the HTTP transport: city
//! statistics, backend health, sorting, and the crate error type.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`city`]: City statistics and exact-match lookup
//! - [`health`]: Backend health status
//! - [`sort`]: Column sort configuration and the sort transform

pub mod city;
pub mod error;
pub mod health;
pub mod sort;

pub use city::{find_exact_match, single_city, CityMap, CityStats};
pub use error::{Result, WeatherdashError};
pub use health::{HealthState, HealthStatus};
pub use sort::{sort_cities, SortConfig, SortDirection, SortKey};
