use std::ops;

use crate::core::Dims;

/// Column-major 2D buffer: every column is a contiguous slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Array2D<T> {
    buf: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Array2D<T> {
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(Dims) -> T) -> Self {
        let mut buf = Vec::with_capacity(width * height);
        for pos in Dims::iter_fill(Dims::ZERO, Dims(width as i32, height as i32)) {
            buf.push(f(pos));
        }

        Self { buf, width, height }
    }

    pub fn size(&self) -> Dims {
        Dims(self.width as i32, self.height as i32)
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn dim_to_idx(&self, pos: Dims) -> Option<usize> {
        let Dims(x, y) = pos;
        if x < 0 || y < 0 {
            return None;
        }

        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }

        Some(x * self.height + y)
    }

    pub fn idx_to_dim(&self, idx: usize) -> Option<Dims> {
        if idx >= self.buf.len() {
            return None;
        }

        let x = idx / self.height;
        let y = idx % self.height;

        Some(Dims(x as i32, y as i32))
    }

    pub fn get(&self, pos: Dims) -> Option<&T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get(i))
    }

    pub fn get_mut(&mut self, pos: Dims) -> Option<&mut T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get_mut(i))
    }

    pub fn column(&self, x: usize) -> Option<&[T]> {
        if x >= self.width {
            return None;
        }

        let start = x * self.height;
        Some(&self.buf[start..start + self.height])
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.buf.iter_mut()
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Dims> + '_ {
        (0..self.buf.len()).filter_map(move |i| self.idx_to_dim(i))
    }
}

impl<T: Clone> Array2D<T> {
    pub fn new(item: T, width: usize, height: usize) -> Self {
        Self {
            buf: vec![item; width * height],
            width,
            height,
        }
    }
}

impl<T> ops::Index<Dims> for Array2D<T> {
    type Output = T;

    fn index(&self, index: Dims) -> &Self::Output {
        self.get(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {:?}", index))
    }
}

impl<T> ops::IndexMut<Dims> for Array2D<T> {
    fn index_mut(&mut self, index: Dims) -> &mut Self::Output {
        self.get_mut(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {:?}", index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_mapping() {
        let arr = Array2D::from_fn(3, 2, |pos| pos);
        for pos in arr.iter_pos() {
            assert_eq!(arr[pos], pos);
        }
        assert_eq!(arr.column(1), Some(&[Dims(1, 0), Dims(1, 1)][..]));
        assert_eq!(arr.column(3), None);
        assert_eq!(arr.get(Dims(-1, 0)), None);
        assert_eq!(arr.get(Dims(0, 2)), None);
    }

    #[test]
    fn out_of_bounds_panics() {
        let arr = Array2D::new(0u8, 2, 2);
        let result = std::panic::catch_unwind(|| arr[Dims(2, 0)]);
        assert!(result.is_err());
    }
}
