//! Normalizer: folds `x^2 = x` so every square-monomial slot is zero.
//!
//! Over GF(2), `x_v * x_v = x_v`, so a nonzero square coefficient is really a
//! linear contribution in disguise. Folding it once lets the derivative
//! engine assume every diagonal quadratic coefficient is zero.

#![forbid(unsafe_code)]

use crate::coeffs::{linear_idx, square_idx, System};

/// Mutate `system` in place so every `x_v * x_v` coefficient is zero, XORing
/// it into the matching linear coefficient first. Pure and idempotent: a
/// second call is a no-op.
pub fn normalize(system: &mut System) {
    let n = system.n();
    for e in 0..system.m() {
        let row = system.row_mut(e);
        for v in 0..n {
            let sq = row[square_idx(v)];
            row[linear_idx(n, v)] ^= sq;
            row[square_idx(v)] = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_square_term_into_linear_slot() {
        // n=1: x_0^2 + x_0 + 1 -> normalizes to x_0 + x_0 + 1 = 1 (constant).
        let mut s = System::from_rows(1, vec![vec![1, 1, 1]]).unwrap();
        normalize(&mut s);
        assert_eq!(s.row(0), &[0, 0, 1]);
    }

    #[test]
    fn idempotent() {
        let mut s = System::from_rows(2, vec![vec![1, 1, 1, 0, 1, 0]]).unwrap();
        normalize(&mut s);
        let once = s.clone();
        normalize(&mut s);
        assert_eq!(s, once);
    }

    #[test]
    fn leaves_already_normal_system_untouched() {
        let mut s = System::from_rows(2, vec![vec![0, 1, 0, 1, 1, 0]]).unwrap();
        let before = s.clone();
        normalize(&mut s);
        assert_eq!(s, before);
    }
}
