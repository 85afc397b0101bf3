//! In-place three-way rotation through mutable references

/// Rotate three cells left: `(a, b, c)` becomes `(b, c, a)`.
///
/// All three values are read before any is written. Distinct `&mut`
/// borrows rule out aliasing between the cells.
pub fn rotate3<T: Copy>(a: &mut T, b: &mut T, c: &mut T) {
    let (a_value, b_value, c_value) = (*a, *b, *c);

    *c = a_value;
    *b = c_value;
    *a = b_value;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate3() {
        let (mut a, mut b, mut c) = (10, -4, 30);
        rotate3(&mut a, &mut b, &mut c);
        assert_eq!((a, b, c), (-4, 30, 10));
    }

    #[test]
    fn test_three_rotations_restore() {
        let (mut a, mut b, mut c) = (1, 2, 3);
        for _ in 0..3 {
            rotate3(&mut a, &mut b, &mut c);
        }
        assert_eq!((a, b, c), (1, 2, 3));
    }

    #[test]
    fn test_rotate3_array_cells() {
        let mut cells = [7, 8, 9];
        let [a, b, c] = &mut cells;
        rotate3(a, b, c);
        assert_eq!(cells, [8, 9, 7]);
    }
}
