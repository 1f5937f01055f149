//! # Engine Module
//!
//! The machinery of a single decode call.
//!
//! ## Overview
//!
//! - **Configuration** ([`config`]) - Explicit per-call settings such as the diagnostic
//!   verbosity switch and the allocation ceiling.
//! - **Errors** ([`error`]) - The format error taxonomy and the top-level error returned
//!   to callers.
//! - **Allocation** ([`allocation`]) - Shape computation and zero-initialized allocation
//!   of the output arrays, with overflow and ceiling checks.
//! - **Stages** ([`state`]) - The per-call state machine used to attribute failures.
//! - **Progress** ([`progress`]) - Optional callback-based progress reporting.

pub mod allocation;
pub mod config;
pub mod error;
pub mod progress;
pub mod state;
