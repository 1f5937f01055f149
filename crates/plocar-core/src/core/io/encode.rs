use crate::core::models::header::{Header, Precision};
use byteorder::{NativeEndian, WriteBytesExt};
use nalgebra::Complex;
use std::io::{self, Write};

/// Writes the header fields in file order.
pub fn write_header(writer: &mut impl Write, header: &Header) -> io::Result<()> {
    for field in [
        header.precision.code(),
        header.nion,
        header.ns,
        header.nk,
        header.nb,
        header.nlmmax,
        header.nc_flag,
    ] {
        writer.write_i32::<NativeEndian>(field)?;
    }
    Ok(())
}

/// Encodes a PLOCAR stream in the native byte order.
///
/// The writer emits exactly what it is given: it checks that each record carries as
/// many values as the current ion's channel count, but it does not validate the
/// count against `nlmmax` nor the number of records against the header, so it can
/// also produce malformed streams.
///
/// In single precision the weight and every value part are narrowed to `f32`.
pub struct PlocarWriter<W: Write> {
    inner: W,
    precision: Precision,
    current_nlm: Option<usize>,
}

impl<W: Write> PlocarWriter<W> {
    /// Creates the writer and emits the header.
    pub fn new(mut inner: W, header: &Header) -> io::Result<Self> {
        write_header(&mut inner, header)?;
        Ok(Self {
            inner,
            precision: header.precision,
            current_nlm: None,
        })
    }

    /// Starts the block of the next ion by writing its channel count.
    pub fn begin_ion(&mut self, nlm: i32) -> io::Result<()> {
        self.inner.write_i32::<NativeEndian>(nlm)?;
        self.current_nlm = usize::try_from(nlm).ok();
        Ok(())
    }

    /// Writes one `(spin, k-point, band)` record of the current ion.
    pub fn write_record(&mut self, weight: f64, values: &[Complex<f64>]) -> io::Result<()> {
        let nlm = self.current_nlm.ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "record written outside of a valid ion block",
            )
        })?;
        if values.len() != nlm {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("expected {} values per record, got {}", nlm, values.len()),
            ));
        }

        match self.precision {
            Precision::Double => {
                self.inner.write_f64::<NativeEndian>(weight)?;
                for v in values {
                    self.inner.write_f64::<NativeEndian>(v.re)?;
                    self.inner.write_f64::<NativeEndian>(v.im)?;
                }
            }
            Precision::Single => {
                self.inner.write_f32::<NativeEndian>(weight as f32)?;
                for v in values {
                    self.inner.write_f32::<NativeEndian>(v.re as f32)?;
                    self.inner.write_f32::<NativeEndian>(v.im as f32)?;
                }
            }
        }
        Ok(())
    }

    /// Flushes and returns the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(precision: Precision) -> Header {
        Header {
            precision,
            nion: 1,
            ns: 1,
            nk: 1,
            nb: 1,
            nlmmax: 3,
            nc_flag: 0,
        }
    }

    #[test]
    fn header_fields_are_native_endian_in_order() {
        let writer = PlocarWriter::new(Vec::new(), &header(Precision::Double)).unwrap();
        let bytes = writer.finish().unwrap();
        let fields: Vec<i32> = bytes
            .chunks_exact(4)
            .map(|c| i32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        assert_eq!(fields, vec![8, 1, 1, 1, 1, 3, 0]);
    }

    #[test]
    fn record_sizes_follow_precision() {
        for (precision, record_len) in [(Precision::Double, 8 + 2 * 16), (Precision::Single, 4 + 2 * 8)] {
            let mut writer = PlocarWriter::new(Vec::new(), &header(precision)).unwrap();
            writer.begin_ion(2).unwrap();
            writer
                .write_record(0.5, &[Complex::new(1.0, 2.0), Complex::new(3.0, -1.0)])
                .unwrap();
            let bytes = writer.finish().unwrap();
            assert_eq!(bytes.len(), Header::ENCODED_LEN + 4 + record_len);
        }
    }

    #[test]
    fn record_length_must_match_channel_count() {
        let mut writer = PlocarWriter::new(Vec::new(), &header(Precision::Double)).unwrap();
        writer.begin_ion(2).unwrap();
        let err = writer.write_record(1.0, &[Complex::new(1.0, 0.0)]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn record_outside_ion_block_is_rejected() {
        let mut writer = PlocarWriter::new(Vec::new(), &header(Precision::Single)).unwrap();
        assert!(writer.write_record(1.0, &[]).is_err());
        writer.begin_ion(-1).unwrap();
        assert!(writer.write_record(1.0, &[]).is_err());
    }
}
