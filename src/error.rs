//! Crate-wide error type.
//!
//! One enum covers every fallible boundary in the kernel: the challenge-file
//! reader, the precondition checks ahead of enumeration, and the verifier
//! cross-check. `NoSolution` is deliberately *not* a variant here — an
//! exhausted search is an ordinary negative result, returned as `Ok(None)`.

use thiserror::Error;

/// Errors surfaced by [`crate::solve`] and its collaborators.
#[derive(Debug, Error)]
pub enum MqError {
    /// The challenge file (or an in-memory system built by hand) is not
    /// well-formed: an unparseable header field, an unsupported Galois
    /// field, a wrong token count in an equation row, or an unreadable file.
    #[error("malformed input: {reason}")]
    MalformedInput {
        /// Human-readable description of what failed to parse.
        reason: String,
    },

    /// `m` exceeds the native word width, or `n` is zero (or too large for
    /// the Gray-code counter). Checked before the kernel is entered.
    #[error("precondition violated: {reason}")]
    PreconditionViolation {
        /// Which precondition failed and why.
        reason: String,
    },

    /// The enumerator returned a candidate assignment that the naive
    /// verifier rejects. Unreachable on correctly normalized input; this is
    /// a bug in the derivative bookkeeping, not a user-facing failure mode.
    #[error("enumerator returned a candidate the verifier rejected")]
    VerificationFailure,
}
