//! Challenge Reader: parses the line-oriented challenge-file format into a
//! [`System`], independent of the kernel.
//!
//! Header lines (any order, prefix-matched):
//!
//! ```text
//! Galois Field : GF(2)
//! Number of variables : <n>
//! Number of polynomials : <m>
//! Seed : <int>
//! ```
//!
//! A line whose trimmed content starts with nine or more `*` marks the end
//! of the header; every line after it is one equation, a whitespace- and
//! `;`-separated list of exactly `term_count(n)` `0`/`1` tokens.
//!
//! The seed is accepted as any parseable `i64` and discarded — it is
//! informational only and never consulted by the kernel.

#![forbid(unsafe_code)]

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::coeffs::{term_count, System};
use crate::error::MqError;

const EQUATION_MARKER: &str = "*********";

fn malformed(reason: impl Into<String>) -> MqError {
    MqError::MalformedInput { reason: reason.into() }
}

/// Parse a challenge file at `path` into a [`System`].
pub fn read_challenge(path: &Path) -> Result<System, MqError> {
    let file = File::open(path).map_err(|e| {
        malformed(format!("cannot open {}: {e}", path.display()))
    })?;
    read_challenge_from(BufReader::new(file))
}

/// Parse a challenge file already opened as a [`BufRead`] (exposed
/// separately from [`read_challenge`] so tests can feed an in-memory
/// fixture instead of a real file).
pub fn read_challenge_from(reader: impl BufRead) -> Result<System, MqError> {
    let mut n: Option<usize> = None;
    let mut m: Option<usize> = None;
    let mut gf_seen = false;

    let mut lines = reader.lines();
    let mut rows: Vec<Vec<u8>> = Vec::new();

    loop {
        let line = match lines.next() {
            Some(l) => l.map_err(|e| malformed(format!("read error: {e}")))?,
            None => {
                return Err(malformed("file ended before the equation marker"));
            }
        };
        let trimmed = line.trim();
        if trimmed.starts_with(EQUATION_MARKER) {
            debug!("challenge header parsed, reading equations");
            break;
        }
        if trimmed.is_empty() {
            continue;
        }
        parse_header_line(trimmed, &mut n, &mut m, &mut gf_seen)?;
    }

    if !gf_seen {
        return Err(malformed("missing 'Galois Field' header line"));
    }
    let n = n.ok_or_else(|| malformed("missing 'Number of variables' header line"))?;
    let m = m.ok_or_else(|| malformed("missing 'Number of polynomials' header line"))?;

    let t = term_count(n);
    for line in lines {
        let line = line.map_err(|e| malformed(format!("read error: {e}")))?;
        if line.trim().is_empty() {
            continue;
        }
        rows.push(parse_equation_line(&line, t)?);
    }

    if rows.len() != m {
        return Err(malformed(format!(
            "expected {m} equation lines, found {}",
            rows.len()
        )));
    }

    debug!(n, m, "parsed challenge system");
    System::from_rows(n, rows)
}

fn parse_header_line(
    line: &str,
    n: &mut Option<usize>,
    m: &mut Option<usize>,
    gf_seen: &mut bool,
) -> Result<(), MqError> {
    let (prefix, rest) = match line.split_once(':') {
        Some((p, r)) => (p.trim(), r.trim()),
        None => return Ok(()), // not a recognized header line; ignore
    };

    if prefix.starts_with("Galois Field") {
        if rest != "GF(2)" {
            return Err(malformed(format!("unsupported Galois field: {rest}")));
        }
        *gf_seen = true;
    } else if prefix.starts_with("Number of variables") {
        *n = Some(rest.parse::<usize>().map_err(|_| {
            malformed(format!("cannot parse number of variables: {rest}"))
        })?);
    } else if prefix.starts_with("Number of polynomials") {
        *m = Some(rest.parse::<usize>().map_err(|_| {
            malformed(format!("cannot parse number of polynomials: {rest}"))
        })?);
    } else if prefix.starts_with("Seed") {
        // Accept any parseable 64-bit integer; the value is never consulted.
        rest.parse::<i64>()
            .map_err(|_| malformed(format!("cannot parse seed: {rest}")))?;
    }
    Ok(())
}

fn parse_equation_line(line: &str, t: usize) -> Result<Vec<u8>, MqError> {
    let tokens: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ';')
        .filter(|s| !s.is_empty())
        .collect();
    if tokens.len() != t {
        return Err(malformed(format!(
            "equation line has {} tokens, expected {t}: {line}",
            tokens.len()
        )));
    }
    tokens
        .into_iter()
        .map(|tok| match tok {
            "0" => Ok(0u8),
            "1" => Ok(1u8),
            other => Err(malformed(format!("coefficient token `{other}` is not 0/1"))),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = "\
Galois Field : GF(2)
Number of variables : 2
Number of polynomials : 1
Seed : 1337
*********
0 1 0 1 0 1 ;
";

    #[test]
    fn parses_header_and_single_equation() {
        let s = read_challenge_from(FIXTURE.as_bytes()).unwrap();
        assert_eq!(s.n(), 2);
        assert_eq!(s.m(), 1);
        assert_eq!(s.row(0), &[0, 1, 0, 1, 0, 1]);
    }

    #[test]
    fn rejects_non_gf2_field() {
        let bad = FIXTURE.replace("GF(2)", "GF(3)");
        let err = read_challenge_from(bad.as_bytes()).unwrap_err();
        assert!(matches!(err, MqError::MalformedInput { .. }));
    }

    #[test]
    fn rejects_wrong_token_count() {
        let bad = FIXTURE.replace("0 1 0 1 0 1 ;", "0 1 0 1 ;");
        let err = read_challenge_from(bad.as_bytes()).unwrap_err();
        assert!(matches!(err, MqError::MalformedInput { .. }));
    }

    #[test]
    fn rejects_wrong_equation_count() {
        let bad = FIXTURE.replace("Number of polynomials : 1", "Number of polynomials : 2");
        let err = read_challenge_from(bad.as_bytes()).unwrap_err();
        assert!(matches!(err, MqError::MalformedInput { .. }));
    }

    #[test]
    fn accepts_large_seed_without_truncating() {
        let big_seed = FIXTURE.replace("Seed : 1337", "Seed : 9223372036854775807");
        assert!(read_challenge_from(big_seed.as_bytes()).is_ok());
    }

    #[test]
    fn headers_may_appear_in_any_order() {
        let reordered = "\
Number of polynomials : 1
Seed : 7
Galois Field : GF(2)
Number of variables : 2
*********
0 1 0 1 0 1 ;
";
        let s = read_challenge_from(reordered.as_bytes()).unwrap();
        assert_eq!(s.n(), 2);
        assert_eq!(s.m(), 1);
    }
}
