//! Coefficient Store: dense per-equation coefficient layout.
//!
//! The canonical monomial ordering for one equation over `n` variables is:
//!
//! 1. degree-2 monomials `x_i * x_j` (`i <= j`), enumerated by increasing `j`
//!    then increasing `i` within `j`. The index of `x_a * x_b` (`a <= b`) is
//!    `b*(b+1)/2 + a`.
//! 2. degree-1 monomials `x_0 .. x_{n-1}`, at indices `n*(n+1)/2 .. n*(n+1)/2 + n - 1`.
//! 3. the constant term, at the final index.
//!
//! One equation's coefficient vector therefore has length
//! `T = n*(n+1)/2 + n + 1`. All `m` equations are packed into a single
//! contiguous row-major buffer rather than a `Vec` of per-equation `Vec`s:
//! one allocation, no pointer chasing, good cache locality for the
//! passes that sweep every coefficient of every equation.

#![forbid(unsafe_code)]

use crate::error::MqError;

/// The native word width `w`: the kernel packs one bit per equation into a
/// `u64`, so it only accepts systems with `m <= 64` equations.
pub const MAX_EQUATIONS: usize = 64;

/// Number of coefficient slots in one equation over `n` variables.
#[inline]
pub fn term_count(n: usize) -> usize {
    n * (n + 1) / 2 + n + 1
}

/// Index of the degree-2 coefficient `x_a * x_b` (order of `a`, `b` does not
/// matter; the canonical pair has `a <= b`).
#[inline]
pub fn quad_idx(a: usize, b: usize) -> usize {
    let (a, b) = if a <= b { (a, b) } else { (b, a) };
    b * (b + 1) / 2 + a
}

/// Index of the degree-2 "square" slot `x_v * x_v`.
#[inline]
pub fn square_idx(v: usize) -> usize {
    quad_idx(v, v)
}

/// Index of the degree-1 coefficient `x_v`, given `n` variables.
#[inline]
pub fn linear_idx(n: usize, v: usize) -> usize {
    n * (n + 1) / 2 + v
}

/// Index of the constant term, given `n` variables.
#[inline]
pub fn const_idx(n: usize) -> usize {
    term_count(n) - 1
}

/// A system of `m` quadratic equations in `n` Boolean variables, stored as a
/// single row-major buffer of GF(2) coefficients (one byte per coefficient,
/// each either `0` or `1`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct System {
    n: usize,
    m: usize,
    t: usize,
    data: Vec<u8>,
}

impl System {
    /// Build an all-zero system of `m` equations in `n` variables.
    pub fn zeroed(n: usize, m: usize) -> Self {
        let t = term_count(n);
        System { n, m, t, data: vec![0u8; m * t] }
    }

    /// Build a system from `m` explicit coefficient rows, each of length
    /// `term_count(n)`. Rejects any row whose length doesn't match, or any
    /// coefficient outside `{0, 1}`.
    pub fn from_rows(n: usize, rows: Vec<Vec<u8>>) -> Result<Self, MqError> {
        let t = term_count(n);
        let m = rows.len();
        let mut data = Vec::with_capacity(m * t);
        for (e, row) in rows.into_iter().enumerate() {
            if row.len() != t {
                return Err(MqError::MalformedInput {
                    reason: format!(
                        "equation {e} has {} coefficients, expected {t}",
                        row.len()
                    ),
                });
            }
            for (k, &c) in row.iter().enumerate() {
                if c > 1 {
                    return Err(MqError::MalformedInput {
                        reason: format!("equation {e} coefficient {k} is {c}, not 0/1"),
                    });
                }
            }
            data.extend_from_slice(&row);
        }
        Ok(System { n, m, t, data })
    }

    /// Number of variables.
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of equations.
    #[inline]
    pub fn m(&self) -> usize {
        self.m
    }

    /// Coefficient-vector length per equation.
    #[inline]
    pub fn t(&self) -> usize {
        self.t
    }

    /// Read-only view of equation `e`'s coefficient vector.
    #[inline]
    pub fn row(&self, e: usize) -> &[u8] {
        &self.data[e * self.t..(e + 1) * self.t]
    }

    /// Mutable view of equation `e`'s coefficient vector.
    #[inline]
    pub fn row_mut(&mut self, e: usize) -> &mut [u8] {
        &mut self.data[e * self.t..(e + 1) * self.t]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_count_matches_spec_layout() {
        // n=2: 3 quadratic slots (x0x0, x0x1, x1x1), 2 linear, 1 constant.
        assert_eq!(term_count(2), 6);
    }

    #[test]
    fn quad_idx_matches_canonical_order() {
        // (x0,x0)=0, (x0,x1)=1, (x1,x1)=2 for n=2, per spec.md scenario 3.
        assert_eq!(quad_idx(0, 0), 0);
        assert_eq!(quad_idx(0, 1), 1);
        assert_eq!(quad_idx(1, 1), 2);
        assert_eq!(quad_idx(1, 0), 1); // order-insensitive
    }

    #[test]
    fn linear_and_const_idx_follow_quadratic_block() {
        let n = 2;
        assert_eq!(linear_idx(n, 0), 3);
        assert_eq!(linear_idx(n, 1), 4);
        assert_eq!(const_idx(n), 5);
    }

    #[test]
    fn from_rows_rejects_wrong_length() {
        let err = System::from_rows(2, vec![vec![0, 1, 0, 1, 0]]).unwrap_err();
        assert!(matches!(err, MqError::MalformedInput { .. }));
    }

    #[test]
    fn from_rows_rejects_non_binary_coefficients() {
        let err = System::from_rows(2, vec![vec![0, 1, 0, 1, 0, 2]]).unwrap_err();
        assert!(matches!(err, MqError::MalformedInput { .. }));
    }
}
