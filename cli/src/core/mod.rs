//! # Convmatch Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the infrastructure shared by the matching core and
//! the command-line front end.
//!
//! ## Architecture
//!
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error taxonomy and the application-level `Result` alias
//!
//! ## Usage
//!
//! ```rust
//! use convmatch::core::config; // For loading configuration
//! use convmatch::core::error::{ConvmatchError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
