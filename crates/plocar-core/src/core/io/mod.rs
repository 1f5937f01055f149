//! Provides binary input/output for the PLOCAR file layout.
//!
//! The layout is a fixed seven-field header followed by one block per ion. Every
//! value is stored in the byte order of the machine that wrote the file; files
//! produced on a machine with a different byte order are not supported.

pub mod encode;
pub mod header;
pub(crate) mod primitives;
pub mod records;
