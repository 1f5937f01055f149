use super::primitives::{read_complex64_into, read_complex128_into, read_f32, read_f64, read_i32};
use crate::core::models::array::{FerwArray, PloArray};
use crate::core::models::header::{Header, Precision};
use crate::engine::error::FormatError;
use crate::engine::progress::{Progress, ProgressReporter};
use nalgebra::Complex;
use std::io::Read;
use tracing::trace;

/// Scratch space for one record's PLO values, sized to the current ion's `nlm`.
enum ValueBuffer {
    Single(Vec<f32>),
    Double(Vec<f64>),
}

impl ValueBuffer {
    fn for_ion(precision: Precision, nlm: usize) -> Self {
        match precision {
            Precision::Single => Self::Single(vec![0.0; 2 * nlm]),
            Precision::Double => Self::Double(vec![0.0; 2 * nlm]),
        }
    }

    /// Reads one record (weight followed by `nlm` complex values) and returns the weight.
    fn read_record(
        &mut self,
        reader: &mut impl Read,
        lane: &mut [Complex<f64>],
    ) -> Result<f64, FormatError> {
        match self {
            Self::Double(scratch) => {
                let weight = read_f64(reader, "Fermi weight")?;
                read_complex128_into(reader, scratch, lane, "PLO values")?;
                Ok(weight)
            }
            Self::Single(scratch) => {
                let weight = read_f32(reader, "Fermi weight")?;
                read_complex64_into(reader, scratch, lane, "PLO values")?;
                Ok(f64::from(weight))
            }
        }
    }
}

/// Streams the per-ion blocks that follow the header into `plo` and `ferw`.
///
/// Each ion block starts with its channel count `nlm`, read once and applied to every
/// `(spin, k-point, band)` record of that ion; the format carries no per-record count.
/// Records are visited in file order (spin, then k-point, then band). Only the first
/// `nlm` entries of each PLO lane are written; the rest keep their zero padding.
///
/// The arrays must have been allocated from the same header. Any short read aborts
/// the whole decode.
pub fn decode_records(
    reader: &mut impl Read,
    header: &Header,
    plo: &mut PloArray,
    ferw: &mut FerwArray,
    reporter: &ProgressReporter,
) -> Result<(), FormatError> {
    let [nion, ns, nk, nb] = ferw.shape();
    let nlmmax = plo.shape()[4];

    reporter.report(Progress::RecordsStart {
        total_ions: nion as u64,
    });

    for ion in 0..nion {
        let raw_nlm = read_i32(reader, "channel count")?;
        let nlm = match usize::try_from(raw_nlm) {
            Ok(nlm) if nlm <= nlmmax => nlm,
            _ => {
                return Err(FormatError::InvalidRecord {
                    ion,
                    nlm: raw_nlm,
                    nlmmax: header.nlmmax,
                });
            }
        };
        trace!("Ion {}: nlm = {}", ion, nlm);

        let mut buffer = ValueBuffer::for_ion(header.precision, nlm);
        for is in 0..ns {
            for ik in 0..nk {
                for ib in 0..nb {
                    let lane = &mut plo.lane_mut(&[ion, is, ik, ib])[..nlm];
                    let weight = buffer.read_record(reader, lane)?;
                    ferw[[ion, is, ik, ib]] = weight;
                }
            }
        }

        reporter.report(Progress::IonDecoded { ion, nlm });
    }

    reporter.report(Progress::RecordsFinish);
    Ok(())
}
