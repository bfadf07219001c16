//! Enumerator: the Gray-code walk over `{0,1}^n` that is the point of this
//! crate. A naive search evaluates all `m` equations from scratch at each of
//! `2^n` points; this one maintains a packed word of first-order partial
//! derivatives and updates the packed function evaluation incrementally,
//! turning the inner loop into a handful of XORs and one trailing-zero-count.
//!
//! ## Invariants
//!
//! - **I1 (function).** `F` equals `f(g(c))` packed across equations,
//!   evaluated at the end of step `c`, where `g(c) = c ^ (c >> 1)` is the
//!   Gray code.
//! - **I2 (derivative).** Immediately before step `c+1`, for the variable
//!   `v` that step `c+1` will toggle (`v = ctz(c+1)`), `DV[v]` equals
//!   `df/dx_v(g(c))`. `DV` for other variables holds a stale value from the
//!   last time they were toggled — which is fine, because `DV[v]` is only
//!   ever read at a step that toggles `v`.
//!
//! The loop runs at most `2^n - 1` times; if `F` is still nonzero when `c`
//! reaches that bound, no root exists.

#![forbid(unsafe_code)]

use crate::coeffs::System;
use crate::deriv::{build_diff_table, build_p, init_dv, init_f};

/// A discovered root, together with the Gray-code step at which it was
/// found (reported for compatibility with tools that key off the step
/// count rather than the decoded assignment).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Gray-code step count `c` at which `f(g(c)) = 0` first held.
    pub steps: u64,
    /// Decoded assignment: `assignment[v] = bit v of g(c)`.
    pub assignment: Vec<u8>,
}

/// Search `system` (assumed already normalized) for a root, walking the
/// Gray code from `0^n`. Returns `None` if the whole space is exhausted
/// without finding one.
///
/// Precondition (checked by the caller, not here): `1 <= n < 64` and
/// `m <= 64`.
pub fn search(system: &System) -> Option<Solution> {
    let n = system.n();

    let d = build_diff_table(system);
    let p = build_p(&d);
    let mut dv = init_dv(&d, system);
    let mut f = init_f(system);

    let mut c: u64 = 0;
    let bound: u64 = (1u64 << n) - 1;

    while f != 0 && c < bound {
        c += 1;
        let fp = c.trailing_zeros() as usize;

        if c & (c - 1) != 0 {
            let pre = (c ^ (1u64 << fp)).trailing_zeros() as usize;
            dv[fp] ^= p.get(fp, pre);
        }

        f ^= dv[fp];
    }

    if f != 0 {
        return None;
    }

    let g = c ^ (c >> 1);
    let assignment = (0..n).map(|v| ((g >> v) & 1) as u8).collect();
    Some(Solution { steps: c, assignment })
}
