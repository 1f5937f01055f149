use std::fmt;

/// Floating-point width of the weights and PLO values stored in a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    /// `float32` weights and `complex64` values (precision code 4).
    Single,
    /// `float64` weights and `complex128` values (precision code 8).
    Double,
}

impl Precision {
    /// Maps the raw precision code of the header to a precision, if supported.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            4 => Some(Self::Single),
            8 => Some(Self::Double),
            _ => None,
        }
    }

    /// The raw code written in the header (the size in bytes of one real scalar).
    pub fn code(self) -> i32 {
        match self {
            Self::Single => 4,
            Self::Double => 8,
        }
    }

    /// Size in bytes of one weight.
    pub fn weight_size(self) -> usize {
        self.code() as usize
    }

    /// Size in bytes of one complex PLO value.
    pub fn value_size(self) -> usize {
        2 * self.weight_size()
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => f.write_str("single"),
            Self::Double => f.write_str("double"),
        }
    }
}

/// The fixed header at the start of every PLOCAR file.
///
/// Dimensions are kept exactly as read (signed 32-bit); they are validated when
/// the output arrays are allocated, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub precision: Precision,
    pub nion: i32,
    pub ns: i32,
    pub nk: i32,
    pub nb: i32,
    pub nlmmax: i32,
    pub nc_flag: i32,
}

impl Header {
    /// Size of the encoded header in bytes.
    pub const ENCODED_LEN: usize = 7 * 4;

    pub fn is_double(&self) -> bool {
        self.precision == Precision::Double
    }

    /// Number of `(spin, k-point, band)` records stored for each ion.
    ///
    /// Returns `None` if a dimension is negative or the product overflows.
    pub fn records_per_ion(&self) -> Option<usize> {
        let ns = usize::try_from(self.ns).ok()?;
        let nk = usize::try_from(self.nk).ok()?;
        let nb = usize::try_from(self.nb).ok()?;
        ns.checked_mul(nk)?.checked_mul(nb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(precision: Precision) -> Header {
        Header {
            precision,
            nion: 2,
            ns: 2,
            nk: 3,
            nb: 4,
            nlmmax: 9,
            nc_flag: 0,
        }
    }

    #[test]
    fn precision_codes_map_to_supported_variants_only() {
        assert_eq!(Precision::from_code(4), Some(Precision::Single));
        assert_eq!(Precision::from_code(8), Some(Precision::Double));
        assert_eq!(Precision::from_code(2), None);
        assert_eq!(Precision::from_code(16), None);
        assert_eq!(Precision::from_code(-8), None);
    }

    #[test]
    fn precision_sizes_follow_the_code() {
        assert_eq!(Precision::Single.weight_size(), 4);
        assert_eq!(Precision::Single.value_size(), 8);
        assert_eq!(Precision::Double.weight_size(), 8);
        assert_eq!(Precision::Double.value_size(), 16);
    }

    #[test]
    fn is_double_reflects_precision() {
        assert!(header(Precision::Double).is_double());
        assert!(!header(Precision::Single).is_double());
    }

    #[test]
    fn records_per_ion_multiplies_spin_kpoint_and_band_counts() {
        assert_eq!(header(Precision::Double).records_per_ion(), Some(24));
    }

    #[test]
    fn records_per_ion_rejects_negative_dimensions() {
        let mut h = header(Precision::Double);
        h.nk = -1;
        assert_eq!(h.records_per_ion(), None);
    }
}
