//! Parser for range API response bodies.
//!
//! A body is zero or more lines of the form `SUFFIX:COUNT`, where `SUFFIX` is
//! the 35 hex characters following the requested prefix and `COUNT` is the
//! number of times that hash was seen in breaches. The live service ends lines
//! with CRLF, so a trailing `\r` is stripped before parsing.

use crate::error::MalformedLine;

/// One `SUFFIX:COUNT` line, borrowed from the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeEntry<'a> {
    pub suffix: &'a str,
    pub count: u64,
}

/// Parses a single line (without its line terminator).
///
/// Returns the reason on failure; [`RangeEntries`] attaches the line number.
pub fn parse_line(line: &str) -> Result<RangeEntry<'_>, &'static str> {
    let (suffix, count) = line.split_once(':').ok_or("missing ':' delimiter")?;

    if count.contains(':') {
        return Err("more than two fields");
    }

    // `u64::from_str` accepts a leading '+', which the wire format never has.
    if count.is_empty() || !count.bytes().all(|b| b.is_ascii_digit()) {
        return Err("count is not a base-10 integer");
    }
    let count = count.parse().map_err(|_| "count out of range")?;

    Ok(RangeEntry { suffix, count })
}

/// Iterator over the entries of a response body, in the order received.
///
/// A single terminator after the last line is allowed; any other empty line
/// is malformed. Each malformed line is yielded as an error and the caller
/// decides whether to stop.
pub struct RangeEntries<'a> {
    lines: std::iter::Enumerate<std::slice::Split<'a, u8, fn(&u8) -> bool>>,
    empty: bool,
}

impl<'a> RangeEntries<'a> {
    pub fn new(body: &'a [u8]) -> Self {
        fn is_newline(b: &u8) -> bool {
            *b == b'\n'
        }

        let body = body
            .strip_suffix(b"\r\n")
            .or_else(|| body.strip_suffix(b"\n"))
            .unwrap_or(body);

        Self {
            lines: body.split(is_newline as fn(&u8) -> bool).enumerate(),
            empty: body.is_empty(),
        }
    }
}

impl<'a> Iterator for RangeEntries<'a> {
    type Item = Result<RangeEntry<'a>, MalformedLine>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.empty {
            return None;
        }

        let (index, raw) = self.lines.next()?;
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);

        let malformed = |reason| MalformedLine {
            line: index + 1,
            content: String::from_utf8_lossy(raw).into_owned(),
            reason,
        };

        let parsed = std::str::from_utf8(raw)
            .map_err(|_| "not valid UTF-8")
            .and_then(parse_line)
            .map_err(malformed);

        Some(parsed)
    }
}

/// Returns the count recorded for `suffix`, or 0 if the body does not list it.
///
/// Matching is exact and case-sensitive. Scanning stops at the first match, so
/// lines after it are never inspected; any malformed line before it is an error.
pub fn find_count(body: &[u8], suffix: &str) -> Result<u64, MalformedLine> {
    for entry in RangeEntries::new(body) {
        let entry = entry?;
        if entry.suffix == suffix {
            return Ok(entry.count);
        }
    }

    Ok(0)
}
