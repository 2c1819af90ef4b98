//! Zero-copy tokenizer for raw protocol lines.
//!
//! A line is split into an ordered sequence of byte tokens:
//!
//! ```text
//! [@tags] [:prefix] command *(middle) [trailing]
//! ```
//!
//! The tag and prefix tokens are emitted verbatim, sigil included; middle
//! parameters are emitted as-is; the trailing token is emitted with its
//! leading `:` removed and its internal spacing intact. All tokens borrow
//! from the input line, so tokenizing allocates only the token vector.
//!
//! Runs of spaces between tokens are redundant spacing, not empty
//! parameters, and are skipped. Inside the trailing parameter they are
//! preserved byte-for-byte.

use crate::error::ProtocolError;

/// Splits one raw line into its wire tokens.
///
/// The line must already be free of its line ending; any trailing `\r` or
/// `\n` bytes that do slip through are stripped first. An empty line (or one
/// made only of spaces) yields an empty vector; see [`split_strict`] for the
/// erroring variant of that policy.
///
/// Never fails and never panics, regardless of input bytes.
///
/// # Examples
///
/// ```
/// use ircline::tokenizer::split;
///
/// let tokens = split(b"@id=123 :nick!user@host PRIVMSG #chan :Hello there");
/// assert_eq!(tokens[0], b"@id=123");
/// assert_eq!(tokens[1], b":nick!user@host");
/// assert_eq!(tokens[2], b"PRIVMSG");
/// assert_eq!(tokens[3], b"#chan");
/// assert_eq!(tokens[4], b"Hello there");
/// ```
///
/// Space runs collapse everywhere except inside the trailing parameter:
///
/// ```
/// use ircline::tokenizer::split;
///
/// assert_eq!(split(b"CMD   a   b"), [&b"CMD"[..], &b"a"[..], &b"b"[..]]);
/// assert_eq!(split(b"CMD a :b  c"), [&b"CMD"[..], &b"a"[..], &b"b  c"[..]]);
/// ```
pub fn split(line: &[u8]) -> Vec<&[u8]> {
    let line = strip_line_ending(line);
    let fields: Vec<&[u8]> = line.split(|&b| b == b' ').collect();
    let n = fields.len();
    let mut parv = Vec::new();
    let mut i = 0;

    // Tag token, verbatim, then the empty-field run behind it.
    if i < n && fields[i].starts_with(b"@") {
        parv.push(fields[i]);
        i += 1;
        while i < n && fields[i].is_empty() {
            i += 1;
        }
    }

    // Prefix token, same treatment.
    if i < n && fields[i].starts_with(b":") {
        parv.push(fields[i]);
        i += 1;
        while i < n && fields[i].is_empty() {
            i += 1;
        }
    }

    // Middle parameters until a field leads with ':'.
    while i < n {
        if fields[i].starts_with(b":") {
            break;
        }
        if !fields[i].is_empty() {
            parv.push(fields[i]);
        }
        i += 1;
    }

    // Everything from the ':' field onward is the trailing parameter. The
    // fields were produced by single-space splitting, so rejoining them with
    // single spaces is exactly the tail of `line`; skip one byte for the ':'.
    if i < n {
        let start: usize = fields[..i].iter().map(|f| f.len() + 1).sum();
        parv.push(&line[start + 1..]);
    }

    parv
}

/// Splits one raw line, treating an empty line as an error.
///
/// Identical to [`split`] except that a line with no tokens is rejected with
/// [`ProtocolError::MalformedLine`] instead of yielding an empty vector.
/// [`Message::parse`](crate::Message::parse) uses the lenient path; this one
/// is for callers that want degenerate input surfaced.
///
/// # Errors
///
/// Returns [`ProtocolError::MalformedLine`] if the line is empty after
/// stripping trailing `\r`/`\n` bytes, or consists only of spaces.
pub fn split_strict(line: &[u8]) -> Result<Vec<&[u8]>, ProtocolError> {
    let parv = split(line);
    if parv.is_empty() {
        return Err(ProtocolError::MalformedLine);
    }
    Ok(parv)
}

fn strip_line_ending(mut line: &[u8]) -> &[u8] {
    while let [rest @ .., b'\r' | b'\n'] = line {
        line = rest;
    }
    line
}
