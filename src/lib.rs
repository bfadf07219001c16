//! Crate root: public surface for fast exhaustive search over the Boolean
//! multivariate quadratic (MQ) problem.
//!
//! ## Invariants
//!
//! - **Field.** Every equation is a quadratic polynomial over GF(2); there
//!   is no support for other fields (callers asking for one should be
//!   rejected at the reader boundary, which is how [`reader::read_challenge`]
//!   behaves).
//! - **Word width.** The enumerator packs one bit per equation into a
//!   `u64`, so `m <= `[`coeffs::MAX_EQUATIONS`]. A larger system must be
//!   split or ported to a multi-word packed representation; this crate does
//!   not attempt that.
//! - **Single solution.** [`solve`] reports the first root the Gray-code
//!   walk finds (smallest step count), not every root.
//!
//! The kernel itself ([`normalize`], [`deriv`], [`enumerate`], [`verify`])
//! is pure and single-threaded with no I/O; [`reader`] and the `mq-solve`
//! binary are the only places that touch the filesystem or a logger.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

/// Dense per-equation coefficient layout, canonical monomial ordering.
pub mod coeffs;
/// First- and second-order partial-derivative precomputation, bit-packed.
pub mod deriv;
/// Gray-code enumeration loop over the candidate assignments.
pub mod enumerate;
/// Crate-wide error type.
pub mod error;
/// Folds `x^2 = x` so every square-monomial slot is zero.
pub mod normalize;
/// Parses the line-oriented challenge-file format into a [`coeffs::System`].
pub mod reader;
/// Naive re-evaluation of a system at a candidate assignment.
pub mod verify;

pub use coeffs::{System, MAX_EQUATIONS};
pub use enumerate::Solution;
pub use error::MqError;

/// Check that `system` satisfies the kernel's preconditions: at least one
/// variable, at most [`MAX_EQUATIONS`] equations, and few enough variables
/// that the `u64` step counter and Gray code cannot overflow.
fn check_preconditions(system: &System) -> Result<(), MqError> {
    if system.n() == 0 {
        return Err(MqError::PreconditionViolation {
            reason: "system has zero variables".into(),
        });
    }
    if system.n() >= 64 {
        return Err(MqError::PreconditionViolation {
            reason: format!(
                "{} variables would overflow the 64-bit Gray-code counter",
                system.n()
            ),
        });
    }
    if system.m() > MAX_EQUATIONS {
        return Err(MqError::PreconditionViolation {
            reason: format!(
                "{} equations exceed the {MAX_EQUATIONS}-bit packed word width",
                system.m()
            ),
        });
    }
    Ok(())
}

/// Solve `system` for a root in `{0,1}^n`.
///
/// Normalizes a private copy of `system` (the caller's copy is untouched),
/// runs the Gray-code enumerator, and cross-checks any candidate with the
/// naive verifier before returning it. Returns `Ok(None)` if the search
/// space is exhausted without finding a root — that is an ordinary negative
/// result, not an error. Returns `Err` only for a precondition violation or
/// (should the bookkeeping ever be wrong) a verification mismatch.
pub fn solve(system: &System) -> Result<Option<Solution>, MqError> {
    check_preconditions(system)?;

    let mut normalized = system.clone();
    normalize::normalize(&mut normalized);

    tracing::debug!(n = system.n(), m = system.m(), "entering enumerator");
    let outcome = enumerate::search(&normalized);

    if let Some(sol) = &outcome {
        if !verify::verify(&normalized, &sol.assignment) {
            return Err(MqError::VerificationFailure);
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_variables() {
        let s = System::zeroed(0, 1);
        assert!(matches!(
            solve(&s),
            Err(MqError::PreconditionViolation { .. })
        ));
    }

    #[test]
    fn rejects_too_many_equations() {
        let s = System::zeroed(2, MAX_EQUATIONS + 1);
        assert!(matches!(
            solve(&s),
            Err(MqError::PreconditionViolation { .. })
        ));
    }

    #[test]
    fn end_to_end_scenario_6_planted_root() {
        // n=4, m=3, planted root x* = [1,0,1,1]; build coefficients so each
        // equation zeroes at x*, then confirm solve() finds *some* root that
        // the verifier accepts (not necessarily x* itself, if others exist).
        let planted = [1u8, 0, 1, 1];
        let n = 4;
        let t = coeffs::term_count(n);

        let quad_patterns: [&[u8]; 3] = [
            &[1, 0, 1, 1, 0, 1, 0, 0, 1, 0],
            &[0, 1, 0, 0, 1, 1, 1, 0, 0, 1],
            &[1, 1, 0, 1, 0, 0, 0, 1, 1, 1],
        ];
        let linear_patterns: [&[u8]; 3] =
            [&[1, 0, 1, 0], &[0, 1, 1, 0], &[1, 1, 0, 1]];

        let mut rows = Vec::new();
        for (quad, lin) in quad_patterns.iter().zip(linear_patterns.iter()) {
            let mut row = vec![0u8; t];
            row[..quad.len()].copy_from_slice(quad);
            let lin_start = coeffs::linear_idx(n, 0);
            row[lin_start..lin_start + lin.len()].copy_from_slice(lin);

            // Evaluate the quadratic+linear part at `planted`, then choose
            // the constant term so the whole row vanishes there.
            let mut partial = 0u8;
            for a in 0..n {
                for b in a..n {
                    if row[coeffs::quad_idx(a, b)] == 1 {
                        partial ^= planted[a] & planted[b];
                    }
                }
            }
            for v in 0..n {
                partial ^= planted[v] & row[coeffs::linear_idx(n, v)];
            }
            row[coeffs::const_idx(n)] = partial;
            rows.push(row);
        }

        let system = System::from_rows(n, rows).unwrap();
        let outcome = solve(&system).unwrap();
        let sol = outcome.expect("planted root guarantees at least one solution");

        let mut normalized = system.clone();
        normalize::normalize(&mut normalized);
        assert!(verify::verify(&normalized, &sol.assignment));
    }
}
