//! Run-length codec for row token streams.
//!
//! Consecutive identical tokens collapse into `count*token`, single tokens stay bare,
//! groups are joined with `,`. Tokens must not contain `,` or `*`, which row tokens
//! never do.

use crate::{GlyphError, Result};

pub const SEPARATOR: char = ',';
pub const REPEAT: char = '*';

/// Collapse runs of identical tokens
pub fn encode<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut out = String::new();
    let mut iter = tokens.iter().map(AsRef::as_ref);
    let Some(mut current) = iter.next() else {
        return out;
    };
    let mut run = 1usize;

    for token in iter {
        if token == current {
            run += 1;
        } else {
            push_group(&mut out, current, run);
            current = token;
            run = 1;
        }
    }
    push_group(&mut out, current, run);
    out
}

fn push_group(out: &mut String, token: &str, run: usize) {
    if !out.is_empty() {
        out.push(SEPARATOR);
    }
    if run > 1 {
        out.push_str(&run.to_string());
        out.push(REPEAT);
    }
    out.push_str(token);
}

/// Expand a run-length stream back into tokens
///
/// A repeat count too large to expand in memory is `MalformedRunLength`.
pub fn decode(input: &str) -> Result<Vec<String>> {
    decode_limited(input, usize::MAX)
}

/// Expand a run-length stream, rejecting streams that would expand past `max_tokens`
///
/// The whole stream is validated before anything is expanded, so a malformed or
/// oversized stream never allocates its expansion.
pub fn decode_limited(input: &str, max_tokens: usize) -> Result<Vec<String>> {
    if input.is_empty() {
        return Ok(Vec::new());
    }

    let groups = input.split(SEPARATOR).map(parse_group).collect::<Result<Vec<_>>>()?;

    let mut total = 0usize;
    for (count, _) in &groups {
        total = total.checked_add(*count).unwrap_or(usize::MAX);
    }
    if total > max_tokens {
        return Err(GlyphError::InvalidGlyphSize {
            expected: max_tokens,
            actual: total,
        });
    }

    let mut tokens: Vec<String> = Vec::new();
    for (count, token) in groups {
        if tokens.try_reserve(count).is_err() {
            return Err(GlyphError::MalformedRunLength {
                segment: format!("{count}{REPEAT}{token}"),
            });
        }
        tokens.extend(std::iter::repeat(token).take(count).map(str::to_string));
    }
    Ok(tokens)
}

fn parse_group(segment: &str) -> Result<(usize, &str)> {
    let malformed = || GlyphError::MalformedRunLength { segment: segment.to_string() };
    if segment.is_empty() {
        return Err(malformed());
    }
    let Some((count, token)) = segment.split_once(REPEAT) else {
        return Ok((1, segment));
    };
    if token.is_empty() || token.contains(REPEAT) || count.is_empty() || !count.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    match count.parse::<usize>() {
        Ok(n) if n > 0 => Ok((n, token)),
        _ => Err(malformed()),
    }
}
