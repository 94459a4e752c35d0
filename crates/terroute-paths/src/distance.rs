use terroute_core::Cell;

/// Euclidean (L2) distance between two cells.
#[inline]
pub fn euclidean(a: Cell, b: Cell) -> f64 {
    let dr = f64::from(a.row - b.row);
    let dc = f64::from(a.col - b.col);
    dr.hypot(dc)
}

/// Manhattan (L1) distance between two cells.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

/// Chebyshev (L∞) distance between two cells.
#[inline]
pub fn chebyshev(a: Cell, b: Cell) -> i32 {
    (a.row - b.row).abs().max((a.col - b.col).abs())
}

/// Octile distance: diagonal steps weigh √2, orthogonal steps weigh 1.
#[inline]
pub fn octile(a: Cell, b: Cell) -> f64 {
    let dr = (a.row - b.row).abs();
    let dc = (a.col - b.col).abs();
    let (lo, hi) = if dr < dc { (dr, dc) } else { (dc, dr) };
    f64::from(hi - lo) + f64::from(lo) * std::f64::consts::SQRT_2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        let a = Cell::new(0, 0);
        let b = Cell::new(3, 4);
        assert_eq!(euclidean(a, b), 5.0);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(chebyshev(a, b), 4);
        assert!((octile(a, b) - (1.0 + 3.0 * std::f64::consts::SQRT_2)).abs() < 1e-12);
    }

    #[test]
    fn symmetric_and_zero_on_self() {
        let a = Cell::new(-2, 7);
        let b = Cell::new(5, 1);
        assert_eq!(euclidean(a, b), euclidean(b, a));
        assert_eq!(euclidean(a, a), 0.0);
        assert_eq!(octile(b, b), 0.0);
    }
}
