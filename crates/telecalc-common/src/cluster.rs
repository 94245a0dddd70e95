//! Hexagonal cluster geometry.
//!
//! On a hexagonal cell grid a co-channel cell is reached by moving `i` cells
//! along one axis, turning 60°, and moving `j` cells. The resulting cluster
//! size is `N = i² + ij + j²`, so only N ∈ {1, 3, 4, 7, 9, 12, 13, ...} have
//! an exact hexagonal realisation.

/// Smallest `(i, j)` with `i ≥ j ≥ 0` and `i² + ij + j² = n`.
///
/// Scans `i` upward; the first `i` with an integer `j ≤ i` wins. Returns
/// `None` when `n` has no hexagonal realisation, which is an expected
/// outcome for sizes like 5, 6 or 8.
///
/// For a fixed `i` the only candidate is the non-negative root of
/// `j² + ij + (i² − n) = 0`, so each step is one integer square root and the
/// scan is O(√n).
pub fn hex_move(n: u64) -> Option<(u64, u64)> {
    let n = u128::from(n);
    // j ≤ i forces 3i² ≥ n, so smaller i cannot hit.
    let mut i = (n / 3).isqrt();
    while i * i <= n {
        let disc = 4 * n - 3 * i * i;
        let root = disc.isqrt();
        if root * root == disc && root >= i && (root - i) % 2 == 0 {
            let j = (root - i) / 2;
            if j <= i {
                return Some((i as u64, j as u64));
            }
        }
        i += 1;
    }
    None
}

/// Whether `n` is a valid hexagonal cluster size.
pub fn is_hexagonal(n: u64) -> bool {
    hex_move(n).is_some()
}

/// Render a move as `"i,j"`, or `"n/a"` when none exists.
pub fn format_move(step: Option<(u64, u64)>) -> String {
    match step {
        Some((i, j)) => format!("{i},{j}"),
        None => "n/a".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_reuse_factors() {
        assert_eq!(hex_move(7), Some((2, 1)));
        assert_eq!(hex_move(4), Some((2, 0)));
        assert_eq!(hex_move(3), Some((1, 1)));
        assert_eq!(hex_move(1), Some((1, 0)));
        assert_eq!(hex_move(12), Some((2, 2)));
        assert_eq!(hex_move(13), Some((3, 1)));
        assert_eq!(hex_move(19), Some((3, 2)));
    }

    #[test]
    fn sizes_without_realisation() {
        for n in [2, 5, 6, 8, 10, 11] {
            assert_eq!(hex_move(n), None, "N={n}");
            assert!(!is_hexagonal(n));
        }
    }

    #[test]
    fn ties_prefer_smaller_i() {
        // 49 = 7² + 0 = 5² + 5·3 + 3²; the scan reaches i = 5 first.
        assert_eq!(hex_move(49), Some((5, 3)));
    }

    #[test]
    fn every_hit_satisfies_the_equation() {
        for n in 1..200 {
            if let Some((i, j)) = hex_move(n) {
                assert!(i >= j);
                assert_eq!(i * i + i * j + j * j, n);
            }
        }
    }

    #[test]
    fn format_renders_pairs() {
        assert_eq!(format_move(hex_move(7)), "2,1");
        assert_eq!(format_move(hex_move(5)), "n/a");
    }

    /// Exhaustive `i`, `j` scan, kept as the reference ordering.
    fn scan(n: u64) -> Option<(u64, u64)> {
        let bound = (n as f64).sqrt() as u64 + 1;
        (0..=bound)
            .flat_map(|i| (0..=i).map(move |j| (i, j)))
            .find(|&(i, j)| i * i + i * j + j * j == n)
    }

    #[test]
    fn matches_the_exhaustive_scan() {
        for n in 0..3000 {
            assert_eq!(hex_move(n), scan(n), "N={n}");
        }
    }

    #[test]
    fn large_sizes_finish() {
        // 7·10⁸ = (2·10⁴)² + (2·10⁴)(10⁴) + (10⁴)²
        assert_eq!(hex_move(700_000_000), Some((20_000, 10_000)));
        assert_eq!(hex_move(10_000_000_001), None);
        assert_eq!(hex_move(1_000_000), Some((1000, 0)));
    }
}
