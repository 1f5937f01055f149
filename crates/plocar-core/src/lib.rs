//! # PLOCAR Core Library
//!
//! A decoder for the PLOCAR binary format, which carries projected local orbitals (PLOs)
//! and per-band Fermi weights written by an electronic-structure calculation.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout so that the format details, the decode-call
//! machinery and the public entry points stay separate.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Header`, `DenseArray`,
//!   `ParameterBag`) and the binary readers and writers for the file layout.
//!
//! - **[`engine`]: The Decode Machinery.** Configuration, the error taxonomy, array
//!   allocation with size hardening, the per-call stage machine and progress reporting.
//!
//! - **[`workflows`]: The Public API.** Opens the file, sequences header parsing, allocation
//!   and record decoding, and hands a fully populated result to the caller.
//!
//! ```no_run
//! use plocar::engine::config::DecodeConfig;
//! use plocar::engine::progress::ProgressReporter;
//! use plocar::workflows::read::read_plocar;
//!
//! let data = read_plocar(None, &DecodeConfig::default(), &ProgressReporter::new())?;
//! let (params, plo, ferw) = data.into_parts();
//! println!("{} ions, PLO shape {:?}, weights {:?}", params.nion, plo.shape(), ferw.shape());
//! # Ok::<(), plocar::engine::error::PlocarError>(())
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
