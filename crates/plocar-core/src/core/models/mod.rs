//! Data structures produced and consumed by the PLOCAR decoder.

pub mod array;
pub mod header;
pub mod params;
