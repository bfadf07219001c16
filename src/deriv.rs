//! Derivative Engine: first- and second-order partial derivatives, packed
//! across equations so the enumerator can evaluate all `m` equations at once.
//!
//! For a normalized quadratic `f = sum_{i<=j} a_ij * x_i*x_j + sum_i b_i*x_i + c`
//! (so `a_vv = 0` for every `v`), the first-order partial derivative is
//!
//! ```text
//! df/dx_v = sum_{i<v} a_iv * x_i + sum_{j>v} a_vj * x_j + b_v
//! ```
//!
//! which is affine in the remaining variables. [`DerivTable`] stores, for
//! every equation and variable, the length-`n+1` coefficient vector of this
//! affine form (entries `0..n` are linear coefficients, entry `n` is the
//! constant term). The second-order cross-derivative `d^2f/(dx_i dx_j)` is a
//! GF(2) constant — the `a_ij` coefficient itself — and [`CrossDerivTable`]
//! packs it one bit per equation into a `u64` so the enumerator can apply it
//! to all equations in a single XOR.

#![forbid(unsafe_code)]

use crate::coeffs::{const_idx, linear_idx, quad_idx, System};

/// `D[e][v]`: the coefficient vector of `df_e/dx_v`, length `n+1` per
/// `(e, v)` pair, stored flat for cache locality (`data[(e*n+v)*(n+1)+k]`).
pub struct DerivTable {
    n: usize,
    m: usize,
    data: Vec<u8>,
}

impl DerivTable {
    #[inline]
    fn offset(&self, e: usize, v: usize) -> usize {
        (e * self.n + v) * (self.n + 1)
    }

    /// Coefficient `k` (`k < n`: linear coefficient of `x_k`; `k == n`:
    /// constant term) of `df_e/dx_v`.
    #[inline]
    pub fn get(&self, e: usize, v: usize, k: usize) -> u8 {
        self.data[self.offset(e, v) + k]
    }

    /// The length-`n+1` coefficient row of `df_e/dx_v`.
    #[inline]
    pub fn row(&self, e: usize, v: usize) -> &[u8] {
        let off = self.offset(e, v);
        &self.data[off..off + self.n + 1]
    }
}

/// Compute `df/dx_v` for one equation's coefficient row `f` (length
/// `term_count(n)`), returning the length-`n+1` affine coefficient vector.
pub fn diff(f: &[u8], n: usize, v: usize) -> Vec<u8> {
    let mut d = vec![0u8; n + 1];
    for i in 0..n {
        if i == v {
            continue;
        }
        d[i] = f[quad_idx(i, v)];
    }
    d[n] = f[linear_idx(n, v)];
    d
}

/// Build the full derivative table for every equation and variable. Assumes
/// `system` has already been normalized (diagonal quadratic slots are zero,
/// so `diff` never needs to special-case them).
pub fn build_diff_table(system: &System) -> DerivTable {
    let n = system.n();
    let m = system.m();
    let mut data = vec![0u8; m * n * (n + 1)];
    for e in 0..m {
        let row = system.row(e);
        for v in 0..n {
            let d = diff(row, n, v);
            let off = (e * n + v) * (n + 1);
            data[off..off + n + 1].copy_from_slice(&d);
        }
    }
    DerivTable { n, m, data }
}

/// `P[j][i]`: bit `e` is `d^2 f_e / (dx_i dx_j)`, a GF(2) constant. Flat
/// `n x n` table, symmetric, with a zero diagonal on a normalized system.
pub struct CrossDerivTable {
    n: usize,
    data: Vec<u64>,
}

impl CrossDerivTable {
    /// Packed second-order derivative word for `(j, i)`.
    #[inline]
    pub fn get(&self, j: usize, i: usize) -> u64 {
        self.data[j * self.n + i]
    }
}

/// Derive the packed second-order table from the first-order derivatives:
/// `d^2f_e/(dx_i dx_j)` is the coefficient of `x_i` in `df_e/dx_j` (for
/// `i != j`), which `D` already carries.
pub fn build_p(d: &DerivTable) -> CrossDerivTable {
    let n = d.n;
    let m = d.m;
    let mut data = vec![0u64; n * n];
    for j in 0..n {
        for i in 0..n {
            let mut bits = 0u64;
            for e in 0..m {
                if d.get(e, j, i) == 1 {
                    bits |= 1 << e;
                }
            }
            data[j * n + i] = bits;
        }
    }
    CrossDerivTable { n, data }
}

/// Packed initial first-order evaluations, one `u64` per variable, each bit
/// `e` holding `df_e/dx_v` evaluated at the Gray-code predecessor of the
/// point where `x_v` is first toggled.
///
/// `DV[0]` is just the packed constant term of `df_e/dx_0` (the enumerator's
/// first step toggles `x_0` from the all-zero point). For `v >= 1`, by the
/// time `x_v` is first toggled the Gray-code walk has already set `x_{v-1}`
/// to 1, so the constant term must be corrected by the `x_{v-1}` coefficient.
pub fn init_dv(d: &DerivTable, system: &System) -> Vec<u64> {
    let n = system.n();
    let m = system.m();
    let mut dv = vec![0u64; n];
    for v in 0..n {
        let mut bits = 0u64;
        for e in 0..m {
            let mut t = d.get(e, v, n);
            if v >= 1 {
                t ^= d.get(e, v, v - 1);
            }
            if t == 1 {
                bits |= 1 << e;
            }
        }
        dv[v] = bits;
    }
    dv
}

/// Packed constant-term evaluations `F = f(0^n)`: bit `e` is equation `e`'s
/// constant coefficient.
pub fn init_f(system: &System) -> u64 {
    let n = system.n();
    let mut bits = 0u64;
    for e in 0..system.m() {
        if system.row(e)[const_idx(n)] == 1 {
            bits |= 1 << e;
        }
    }
    bits
}
