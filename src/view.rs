//! Bounded view: a non-owning half-open window `[begin, end)` over an `int` buffer
//!
//! The view borrows its buffer, so the buffer cannot change while a view
//! onto it is alive. Bounds are checked once, in [`BoundedView::new`].

use crate::errors::DrillError;

/// Half-open window over a borrowed buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedView<'a> {
    buffer: &'a [i32],
    begin: usize,
    end: usize,
}

impl<'a> BoundedView<'a> {
    /// Create a view over `buffer[begin..end]`, requiring `begin <= end <= buffer.len()`
    pub fn new(buffer: &'a [i32], begin: usize, end: usize) -> Result<Self, DrillError> {
        if begin > end || end > buffer.len() {
            return Err(DrillError::InvalidView {
                begin,
                end,
                len: buffer.len(),
            });
        }
        Ok(BoundedView { buffer, begin, end })
    }

    /// View covering the whole buffer
    pub fn full(buffer: &'a [i32]) -> Self {
        BoundedView {
            buffer,
            begin: 0,
            end: buffer.len(),
        }
    }

    /// Sum of the first element and the element just before `end`.
    ///
    /// An empty view sums to 0. A single-element view counts its element
    /// twice, since the first and last positions coincide.
    pub fn endpoint_sum(&self) -> i64 {
        match (self.as_slice().first(), self.as_slice().last()) {
            (Some(&first), Some(&last)) => i64::from(first) + i64::from(last),
            _ => 0,
        }
    }

    /// Sum of every element in `[begin, end)`
    pub fn range_sum(&self) -> i64 {
        self.as_slice().iter().map(|&v| i64::from(v)).sum()
    }

    /// The elements the view covers
    pub fn as_slice(&self) -> &'a [i32] {
        let buffer: &'a [i32] = self.buffer;
        &buffer[self.begin..self.end]
    }

    pub fn begin(&self) -> usize {
        self.begin
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.begin
    }

    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARR: [i32; 5] = [1, 2, 3, 4, 17];

    #[test]
    fn test_full_range_sums() {
        let view = BoundedView::full(&ARR);
        assert_eq!(view.endpoint_sum(), 18);
        assert_eq!(view.range_sum(), 27);
        assert_eq!(view.len(), 5);
    }

    #[test]
    fn test_empty_view_sums_to_zero() {
        let view = BoundedView::new(&ARR, 3, 3).unwrap();
        assert!(view.is_empty());
        assert_eq!(view.endpoint_sum(), 0);
        assert_eq!(view.range_sum(), 0);

        let empty: [i32; 0] = [];
        assert_eq!(BoundedView::full(&empty).endpoint_sum(), 0);
    }

    #[test]
    fn test_single_element_counts_twice() {
        let view = BoundedView::new(&ARR, 4, 5).unwrap();
        assert_eq!(view.endpoint_sum(), 34);
        assert_eq!(view.range_sum(), 17);
    }

    #[test]
    fn test_inner_window() {
        let view = BoundedView::new(&ARR, 1, 4).unwrap();
        assert_eq!(view.as_slice(), &[2, 3, 4]);
        assert_eq!(view.endpoint_sum(), 6);
        assert_eq!(view.range_sum(), 9);
    }

    #[test]
    fn test_rejects_bad_bounds() {
        assert_eq!(
            BoundedView::new(&ARR, 3, 2),
            Err(DrillError::InvalidView {
                begin: 3,
                end: 2,
                len: 5
            })
        );
        assert!(BoundedView::new(&ARR, 0, 6).is_err());
        assert!(BoundedView::new(&ARR, 5, 5).is_ok());
    }

    #[test]
    fn test_sums_do_not_overflow() {
        let big = [i32::MAX, i32::MAX, i32::MAX];
        let view = BoundedView::full(&big);
        assert_eq!(view.endpoint_sum(), 2 * i64::from(i32::MAX));
        assert_eq!(view.range_sum(), 3 * i64::from(i32::MAX));
    }
}
