//! Naive verifier: re-evaluates a system from scratch at a candidate
//! assignment. Used both as the enumerator's cross-check and directly in
//! tests that brute-force small systems.

#![forbid(unsafe_code)]

use crate::coeffs::{const_idx, linear_idx, quad_idx, System};

/// Evaluate every equation of `system` at `x` (length `n`) and return
/// whether all of them are zero.
pub fn verify(system: &System, x: &[u8]) -> bool {
    let n = system.n();
    debug_assert_eq!(x.len(), n);

    for e in 0..system.m() {
        let row = system.row(e);
        let mut res = 0u8;
        for a in 0..n {
            for b in a..n {
                if row[quad_idx(a, b)] == 1 {
                    res ^= x[a] & x[b];
                }
            }
        }
        for v in 0..n {
            res ^= x[v] & row[linear_idx(n, v)];
        }
        res ^= row[const_idx(n)];
        if res == 1 {
            return false;
        }
    }
    true
}
