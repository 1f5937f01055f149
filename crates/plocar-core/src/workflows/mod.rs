//! # Workflows Module
//!
//! High-level entry points that run a complete decode call.
//!
//! - **Read Workflow** ([`read`]) - Opens a PLOCAR file (or takes any reader), parses the
//!   header, allocates the output arrays, streams the ion blocks into them and returns the
//!   parameter bag together with the PLO and Fermi-weight arrays.

pub mod read;
