//! Shared types, errors, and configuration for Fundline.
//!
//! This crate provides common types used across all other crates:
//! - Numeric coercion and display rounding for money values
//! - Typed IDs for type-safe entity references
//! - Pagination over in-memory collections
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use self::config::{AppConfig, OutputFormat};
pub use error::{AppError, AppResult};
