//! Shift reconciliation engine.
//!
//! This crate turns daily attendance records into per-row delay-to-finish and
//! net-hours figures plus an aggregate summary in which overtime and delay
//! are offset against each other.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
