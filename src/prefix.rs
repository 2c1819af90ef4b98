//! Sender prefix (source) grammar: `nick!user@host` and its abbreviations.
//!
//! A message's sender is at most one token, carried after a leading `:`.
//! Servers identify themselves by hostname alone (`irc.example.net`), users
//! by the full `nick!user@host` triple, and some ancient or broken software
//! by a bare nick. Classification is best-effort and total: any byte string
//! parses to *something*, and what it parses to serializes back to the same
//! bytes.

use std::fmt;

/// The sender identity of a message.
///
/// Either all three fields are present (the full `nick!user@host` form),
/// exactly one of `nick`/`host` is present (abbreviated senders), or all are
/// absent (the empty prefix, which serializes to nothing). Fields are opaque
/// byte strings; no character-set rules are enforced.
///
/// # Examples
///
/// ```
/// use ircline::Prefix;
///
/// let p = Prefix::parse(b"alice!ana@client.example.com");
/// assert_eq!(p.nick.as_deref(), Some(&b"alice"[..]));
/// assert_eq!(p.user.as_deref(), Some(&b"ana"[..]));
/// assert_eq!(p.host.as_deref(), Some(&b"client.example.com"[..]));
///
/// let server = Prefix::parse(b"irc.example.net");
/// assert_eq!(server, Prefix::server("irc.example.net"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Prefix {
    /// Nickname portion, if any.
    pub nick: Option<Vec<u8>>,
    /// Username (ident) portion, if any.
    pub user: Option<Vec<u8>>,
    /// Hostname portion, if any.
    pub host: Option<Vec<u8>>,
}

impl Prefix {
    /// Builds a full `nick!user@host` prefix.
    pub fn full(
        nick: impl Into<Vec<u8>>,
        user: impl Into<Vec<u8>>,
        host: impl Into<Vec<u8>>,
    ) -> Prefix {
        Prefix {
            nick: Some(nick.into()),
            user: Some(user.into()),
            host: Some(host.into()),
        }
    }

    /// Builds a nick-only prefix.
    pub fn nickname(nick: impl Into<Vec<u8>>) -> Prefix {
        Prefix {
            nick: Some(nick.into()),
            ..Prefix::default()
        }
    }

    /// Builds a host-only (server-style) prefix.
    pub fn server(host: impl Into<Vec<u8>>) -> Prefix {
        Prefix {
            host: Some(host.into()),
            ..Prefix::default()
        }
    }

    /// Returns `true` if no field is present.
    pub fn is_empty(&self) -> bool {
        self.nick.is_none() && self.user.is_none() && self.host.is_none()
    }

    /// Classifies a raw sender string (leading `:` already stripped).
    ///
    /// Matches `nick!user@host` with a greedy nick: the split happens at the
    /// last `@`, and at the last `!` before it, so a nick may itself contain
    /// `!` or `@`. The `user` and `host` parts must be non-empty and free of
    /// `!`/`@`. When the full form does not match, input containing a `.` is
    /// classified as host-only, anything else as nick-only.
    ///
    /// Never fails; malformed senders degrade to the fallback classification
    /// rather than erroring.
    ///
    /// # Examples
    ///
    /// ```
    /// use ircline::Prefix;
    ///
    /// assert_eq!(Prefix::parse(b"nick"), Prefix::nickname("nick"));
    /// assert_eq!(Prefix::parse(b"irc.example.net"), Prefix::server("irc.example.net"));
    /// ```
    pub fn parse(raw: &[u8]) -> Prefix {
        if let Some((nick, user, host)) = match_nuh(raw) {
            return Prefix::full(nick, user, host);
        }
        if raw.contains(&b'.') {
            Prefix::server(raw)
        } else {
            Prefix::nickname(raw)
        }
    }

    /// Reassembles the prefix into raw bytes, or `None` if nothing would be
    /// emitted.
    ///
    /// The full form requires all three fields present; otherwise a present,
    /// non-empty `nick` wins, then a present, non-empty `host`. An empty
    /// prefix (and a prefix whose only present field is empty) yields `None`,
    /// and the owning message serializes without a sender token.
    pub fn unparse(&self) -> Option<Vec<u8>> {
        match (&self.nick, &self.user, &self.host) {
            (Some(nick), Some(user), Some(host)) => {
                let mut out = Vec::with_capacity(nick.len() + user.len() + host.len() + 2);
                out.extend_from_slice(nick);
                out.push(b'!');
                out.extend_from_slice(user);
                out.push(b'@');
                out.extend_from_slice(host);
                Some(out)
            }
            _ => self
                .nick
                .as_deref()
                .filter(|nick| !nick.is_empty())
                .or_else(|| self.host.as_deref().filter(|host| !host.is_empty()))
                .map(<[u8]>::to_vec),
        }
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unparse() {
            Some(raw) => f.write_str(&String::from_utf8_lossy(&raw)),
            None => f.write_str("(empty)"),
        }
    }
}

/// Greedy `nick!user@host` split: last `@`, then last `!` before it.
fn match_nuh(raw: &[u8]) -> Option<(&[u8], &[u8], &[u8])> {
    let at = raw.iter().rposition(|&b| b == b'@')?;
    let host = &raw[at + 1..];
    if host.is_empty() || host.contains(&b'!') {
        return None;
    }
    let bang = raw[..at].iter().rposition(|&b| b == b'!')?;
    let user = &raw[bang + 1..at];
    if user.is_empty() || user.contains(&b'@') {
        return None;
    }
    let nick = &raw[..bang];
    if nick.is_empty() {
        return None;
    }
    Some((nick, user, host))
}
