//! # Core Module
//!
//! Data models and binary I/O for PLOCAR files.
//!
//! ## Overview
//!
//! - **Data Models** ([`models`]) - The file header, the dense arrays that receive the
//!   decoded values, and the caller-facing parameter bag.
//! - **Binary I/O** ([`io`]) - Native-endian primitive readers, the header reader, the
//!   per-ion record decoder and a matching encoder.
//!
//! Nothing in this module owns a file handle; every reader works on an arbitrary
//! [`std::io::Read`] source positioned by the caller.

pub mod io;
pub mod models;
