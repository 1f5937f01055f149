pub use nalgebra::Complex;
use std::ops::{Index, IndexMut};

/// Dense complex tensor of PLOs with shape `[nion, ns, nk, nb, nlmmax]`.
pub type PloArray = DenseArray<Complex<f64>, 5>;

/// Dense real tensor of Fermi weights with shape `[nion, ns, nk, nb]`.
pub type FerwArray = DenseArray<f64, 4>;

/// An owned, row-major, `N`-dimensional array.
///
/// The last axis is contiguous in memory. An element at `[i0, .., iN-1]` lives at
/// `sum(ik * stride[k])`, with `stride[N-1] == 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseArray<T, const N: usize> {
    shape: [usize; N],
    strides: [usize; N],
    data: Vec<T>,
}

fn row_major_strides<const N: usize>(shape: &[usize; N]) -> [usize; N] {
    let mut strides = [1; N];
    for axis in (0..N.saturating_sub(1)).rev() {
        strides[axis] = strides[axis + 1] * shape[axis + 1];
    }
    strides
}

impl<T, const N: usize> DenseArray<T, N> {
    /// Wraps `data` as an array of the given shape.
    ///
    /// Returns `None` when the number of elements does not match the shape.
    pub fn from_shape_vec(shape: [usize; N], data: Vec<T>) -> Option<Self> {
        let expected = shape
            .iter()
            .try_fold(1usize, |acc, &dim| acc.checked_mul(dim))?;
        if expected != data.len() {
            return None;
        }
        Some(Self {
            strides: row_major_strides(&shape),
            shape,
            data,
        })
    }

    pub fn shape(&self) -> [usize; N] {
        self.shape
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    fn offset(&self, index: &[usize]) -> Option<usize> {
        let mut offset = 0;
        for ((&i, &dim), &stride) in index.iter().zip(&self.shape).zip(&self.strides) {
            if i >= dim {
                return None;
            }
            offset += i * stride;
        }
        Some(offset)
    }

    pub fn get(&self, index: [usize; N]) -> Option<&T> {
        self.offset(&index).map(|o| &self.data[o])
    }

    pub fn get_mut(&mut self, index: [usize; N]) -> Option<&mut T> {
        self.offset(&index).map(move |o| &mut self.data[o])
    }

    fn lane_range(&self, prefix: &[usize]) -> Option<std::ops::Range<usize>> {
        if N == 0 || prefix.len() != N - 1 {
            return None;
        }
        let start = self.offset(prefix)?;
        Some(start..start + self.shape[N - 1])
    }

    /// The contiguous run along the last axis addressed by the first `N - 1` indices.
    ///
    /// Returns `None` if `prefix` does not have exactly `N - 1` entries or is out of bounds.
    pub fn get_lane(&self, prefix: &[usize]) -> Option<&[T]> {
        self.lane_range(prefix).map(|r| &self.data[r])
    }

    pub fn get_lane_mut(&mut self, prefix: &[usize]) -> Option<&mut [T]> {
        self.lane_range(prefix).map(move |r| &mut self.data[r])
    }

    /// Like [`get_lane`](Self::get_lane), panicking on an invalid prefix.
    pub fn lane(&self, prefix: &[usize]) -> &[T] {
        match self.get_lane(prefix) {
            Some(lane) => lane,
            None => panic!("lane prefix {:?} invalid for shape {:?}", prefix, self.shape),
        }
    }

    /// Like [`get_lane_mut`](Self::get_lane_mut), panicking on an invalid prefix.
    pub fn lane_mut(&mut self, prefix: &[usize]) -> &mut [T] {
        let shape = self.shape;
        match self.get_lane_mut(prefix) {
            Some(lane) => lane,
            None => panic!("lane prefix {:?} invalid for shape {:?}", prefix, shape),
        }
    }
}

impl<T, const N: usize> Index<[usize; N]> for DenseArray<T, N> {
    type Output = T;

    fn index(&self, index: [usize; N]) -> &T {
        match self.offset(&index) {
            Some(o) => &self.data[o],
            None => panic!("index {:?} out of bounds for shape {:?}", index, self.shape),
        }
    }
}

impl<T, const N: usize> IndexMut<[usize; N]> for DenseArray<T, N> {
    fn index_mut(&mut self, index: [usize; N]) -> &mut T {
        match self.offset(&index) {
            Some(o) => &mut self.data[o],
            None => panic!("index {:?} out of bounds for shape {:?}", index, self.shape),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting(shape: [usize; 3]) -> DenseArray<usize, 3> {
        let len = shape.iter().product();
        DenseArray::from_shape_vec(shape, (0..len).collect()).unwrap()
    }

    #[test]
    fn from_shape_vec_rejects_mismatched_length() {
        assert!(DenseArray::<u8, 2>::from_shape_vec([2, 3], vec![0; 5]).is_none());
        assert!(DenseArray::<u8, 2>::from_shape_vec([2, 3], vec![0; 6]).is_some());
    }

    #[test]
    fn indexing_is_row_major_with_contiguous_last_axis() {
        let a = counting([2, 3, 4]);
        assert_eq!(a[[0, 0, 0]], 0);
        assert_eq!(a[[0, 0, 3]], 3);
        assert_eq!(a[[0, 1, 0]], 4);
        assert_eq!(a[[1, 0, 0]], 12);
        assert_eq!(a[[1, 2, 3]], 23);
    }

    #[test]
    fn get_returns_none_out_of_bounds() {
        let a = counting([2, 3, 4]);
        assert_eq!(a.get([1, 2, 3]), Some(&23));
        assert_eq!(a.get([2, 0, 0]), None);
        assert_eq!(a.get([0, 3, 0]), None);
        assert_eq!(a.get([0, 0, 4]), None);
    }

    #[test]
    fn lanes_cover_the_last_axis() {
        let mut a = counting([2, 3, 4]);
        assert_eq!(a.lane(&[1, 1]), &[16, 17, 18, 19]);
        a.lane_mut(&[0, 2]).copy_from_slice(&[0, 0, 0, 0]);
        assert_eq!(a[[0, 2, 1]], 0);
        assert_eq!(a[[0, 1, 3]], 7);
    }

    #[test]
    fn get_lane_rejects_wrong_prefix_length_or_bounds() {
        let a = counting([2, 3, 4]);
        assert!(a.get_lane(&[0]).is_none());
        assert!(a.get_lane(&[0, 0, 0]).is_none());
        assert!(a.get_lane(&[0, 3]).is_none());
    }

    #[test]
    fn index_mut_writes_single_element() {
        let mut a = counting([2, 3, 4]);
        a[[1, 0, 2]] = 99;
        assert_eq!(a.as_slice()[14], 99);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_panics_out_of_bounds() {
        let a = counting([2, 3, 4]);
        let _value = a[[0, 0, 4]];
    }

    #[test]
    fn zero_sized_axis_yields_empty_array() {
        let a = DenseArray::<f64, 2>::from_shape_vec([0, 5], Vec::new()).unwrap();
        assert!(a.is_empty());
        assert_eq!(a.get([0, 0]), None);
    }
}
