//! # wt-core
//!
//! Core types and error definitions for worktime.
//!
//! This crate provides the building blocks shared by the other crates in the
//! workspace: primitive type aliases and the error hierarchy with its
//! `ensure!` macro.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used for fractional hours and days.
pub type Real = f64;

/// Whole elapsed minutes.
pub type Minutes = i64;

/// Calendar year.
pub type Year = u16;

/// Hour of the day (0–23).
pub type Hour = u8;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
