//! # eco-core
//!
//! Core types, configuration values, and error definitions for macroeco-rs.
//!
//! This crate provides the building blocks shared by every other crate in the
//! workspace: numeric type aliases, the error hierarchy, sample validation,
//! and the typed configuration values consumed by the fitting routines.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `ensure_domain!` / `fail!` macros.
pub mod errors;

/// Validation and summary helpers for empirical samples.
pub mod sample;

/// Configuration values for grid searches and root-finding.
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Alias used for sample sizes and counts.
pub type Size = usize;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{GridRange, SolverSettings};
