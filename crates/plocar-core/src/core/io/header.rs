use super::primitives::read_i32;
use crate::core::models::header::{Header, Precision};
use crate::engine::error::FormatError;
use std::io::Read;

/// Reads the seven-field header from a stream positioned at offset 0.
///
/// Fields are read in file order: precision, nion, ns, nk, nb, nlmmax, nc_flag.
/// Only the precision code is validated here.
pub fn read_header(reader: &mut impl Read) -> Result<Header, FormatError> {
    let code = read_i32(reader, "header field 'precision'")?;
    let nion = read_i32(reader, "header field 'nion'")?;
    let ns = read_i32(reader, "header field 'ns'")?;
    let nk = read_i32(reader, "header field 'nk'")?;
    let nb = read_i32(reader, "header field 'nb'")?;
    let nlmmax = read_i32(reader, "header field 'nlmmax'")?;
    let nc_flag = read_i32(reader, "header field 'nc_flag'")?;

    let precision = Precision::from_code(code).ok_or(FormatError::UnsupportedPrecision(code))?;

    Ok(Header {
        precision,
        nion,
        ns,
        nk,
        nb,
        nlmmax,
        nc_flag,
    })
}
