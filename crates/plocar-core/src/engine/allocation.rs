use super::error::FormatError;
use crate::core::models::array::{DenseArray, FerwArray, PloArray};
use crate::core::models::header::Header;
use tracing::debug;

/// Validated, non-negative dimensions of the output arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayShape {
    pub nion: usize,
    pub ns: usize,
    pub nk: usize,
    pub nb: usize,
    pub nlmmax: usize,
}

impl ArrayShape {
    /// Validates the header dimensions against positivity, overflow and `max_elements`.
    pub fn from_header(header: &Header, max_elements: usize) -> Result<Self, FormatError> {
        let dims = [
            ("nion", header.nion),
            ("ns", header.ns),
            ("nk", header.nk),
            ("nb", header.nb),
            ("nlmmax", header.nlmmax),
        ];
        let mut sizes = [0usize; 5];
        for (slot, (name, value)) in sizes.iter_mut().zip(dims) {
            if value <= 0 {
                return Err(FormatError::InvalidHeader(format!(
                    "dimension '{}' must be positive (found {})",
                    name, value
                )));
            }
            *slot = value as usize;
        }
        let [nion, ns, nk, nb, nlmmax] = sizes;
        let shape = Self {
            nion,
            ns,
            nk,
            nb,
            nlmmax,
        };

        let total = shape.plo_len().ok_or_else(|| {
            FormatError::InvalidHeader(format!(
                "array size {}x{}x{}x{}x{} overflows",
                nion, ns, nk, nb, nlmmax
            ))
        })?;
        if total > max_elements {
            return Err(FormatError::InvalidHeader(format!(
                "array size {} exceeds the allocation ceiling of {} elements",
                total, max_elements
            )));
        }
        Ok(shape)
    }

    pub fn plo_shape(&self) -> [usize; 5] {
        [self.nion, self.ns, self.nk, self.nb, self.nlmmax]
    }

    pub fn ferw_shape(&self) -> [usize; 4] {
        [self.nion, self.ns, self.nk, self.nb]
    }

    pub fn ferw_len(&self) -> Option<usize> {
        self.nion
            .checked_mul(self.ns)?
            .checked_mul(self.nk)?
            .checked_mul(self.nb)
    }

    pub fn plo_len(&self) -> Option<usize> {
        self.ferw_len()?.checked_mul(self.nlmmax)
    }
}

fn zeroed<T: Clone + Default, const N: usize>(
    shape: [usize; N],
    len: usize,
    what: &str,
) -> Result<DenseArray<T, N>, FormatError> {
    let mut data = Vec::new();
    data.try_reserve_exact(len).map_err(|e| {
        FormatError::InvalidHeader(format!("cannot allocate {} {}: {}", len, what, e))
    })?;
    data.resize(len, T::default());
    DenseArray::from_shape_vec(shape, data).ok_or_else(|| {
        FormatError::InvalidHeader(format!("shape {:?} does not match {} {}", shape, len, what))
    })
}

/// Allocates zero-filled PLO and Fermi-weight arrays sized from the header.
pub fn allocate_arrays(
    header: &Header,
    max_elements: usize,
) -> Result<(PloArray, FerwArray), FormatError> {
    let shape = ArrayShape::from_header(header, max_elements)?;
    let plo_len = shape.plo_len().unwrap_or(usize::MAX);
    let ferw_len = shape.ferw_len().unwrap_or(usize::MAX);
    debug!(
        "Allocating PLO array {:?} ({} elements) and Fermi-weight array {:?}.",
        shape.plo_shape(),
        plo_len,
        shape.ferw_shape()
    );

    let plo = zeroed(shape.plo_shape(), plo_len, "PLO elements")?;
    let ferw = zeroed(shape.ferw_shape(), ferw_len, "Fermi weights")?;
    Ok((plo, ferw))
}
