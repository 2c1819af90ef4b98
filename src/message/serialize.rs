//! Serialization of [`Message`] back into wire bytes.
//!
//! The write path assembles the token vector (tag segment, sender, command,
//! arguments), decides whether the final argument must be carried as the
//! `:`-quoted trailing parameter, validates placement in strict mode, and
//! space-joins the result. The line ending is the caller's to append.

use crate::error::{ProtocolError, Violation};
use crate::message::tags;
use crate::message::types::Message;

impl Message {
    /// Renders the message into one wire line, without the line ending.
    ///
    /// Strict mode: fails with [`ProtocolError::ProtocolViolation`] when a
    /// parameter's placement could not be re-tokenized losslessly (a space
    /// outside the trailing parameter, or a `:`-leading parameter outside
    /// the sender and trailing slots).
    ///
    /// # Errors
    ///
    /// [`ProtocolError::MissingCommand`] if `command` is `None`;
    /// [`ProtocolError::ProtocolViolation`] as above.
    ///
    /// # Examples
    ///
    /// ```
    /// use ircline::Message;
    ///
    /// let msg = Message::new("PRIVMSG", &["#chan", "Hello there"]);
    /// assert_eq!(msg.unparse().unwrap(), b"PRIVMSG #chan :Hello there");
    /// ```
    pub fn unparse(&self) -> Result<Vec<u8>, ProtocolError> {
        self.render(true)
    }

    /// Renders without strict placement validation.
    ///
    /// Spaces and stray colons are emitted as-is; the resulting line may not
    /// re-tokenize into the same message. A missing command is still an
    /// error, since there is no line to build without one.
    pub fn unparse_lenient(&self) -> Result<Vec<u8>, ProtocolError> {
        self.render(false)
    }

    fn render(&self, strict: bool) -> Result<Vec<u8>, ProtocolError> {
        let mut parv: Vec<Vec<u8>> = Vec::new();

        if !self.tags.is_empty() {
            let segment = tags::render_segment(&self.tags);
            let mut token = Vec::with_capacity(segment.len() + 1);
            token.push(b'@');
            token.extend_from_slice(segment.as_bytes());
            parv.push(token);
        }

        if let Some(prefix) = &self.prefix {
            if let Some(raw) = prefix.unparse() {
                let mut token = Vec::with_capacity(raw.len() + 1);
                token.push(b':');
                token.extend_from_slice(&raw);
                parv.push(token);
            }
        }

        match &self.command {
            Some(command) => parv.push(command.clone().into_bytes()),
            None => return Err(ProtocolError::MissingCommand),
        }
        parv.extend(self.args.iter().map(|arg| arg.clone().into_bytes()));

        join_tokens(parv, strict)
    }
}

/// Joins caller-supplied parameters into one wire line, strictly.
///
/// The convenience entry point for sending without building a [`Message`]:
/// parameters are UTF-8 encoded and joined under the same trailing and
/// placement rules as [`Message::unparse`]. Tag and sender tokens may be
/// passed in the leading slots with their `@`/`:` sigils.
///
/// # Errors
///
/// [`ProtocolError::MissingCommand`] for an empty parameter list;
/// [`ProtocolError::ProtocolViolation`] for ambiguous placement.
///
/// # Examples
///
/// ```
/// use ircline::join;
///
/// let line = join(&["PRIVMSG", "#chan", "hello there"]).unwrap();
/// assert_eq!(line, b"PRIVMSG #chan :hello there");
/// ```
pub fn join<S: AsRef<str>>(params: &[S]) -> Result<Vec<u8>, ProtocolError> {
    join_tokens(encode_params(params), true)
}

/// Joins caller-supplied parameters without placement validation.
///
/// # Errors
///
/// [`ProtocolError::MissingCommand`] for an empty parameter list.
pub fn join_lenient<S: AsRef<str>>(params: &[S]) -> Result<Vec<u8>, ProtocolError> {
    join_tokens(encode_params(params), false)
}

fn encode_params<S: AsRef<str>>(params: &[S]) -> Vec<Vec<u8>> {
    params
        .iter()
        .map(|param| param.as_ref().as_bytes().to_vec())
        .collect()
}

/// A final parameter must be `:`-quoted if re-tokenizing would otherwise
/// lose it: empty, containing a space, or itself leading with `:`.
fn needs_colon_prefix(param: &[u8]) -> bool {
    param.is_empty() || param.contains(&b' ') || param.starts_with(b":")
}

fn join_tokens(mut parv: Vec<Vec<u8>>, strict: bool) -> Result<Vec<u8>, ProtocolError> {
    if parv.is_empty() {
        return Err(ProtocolError::MissingCommand);
    }

    let trailing = if parv.last().is_some_and(|last| needs_colon_prefix(last)) {
        parv.pop()
    } else {
        None
    };

    if strict {
        if let Some(index) = parv.iter().position(|param| param.contains(&b' ')) {
            return Err(Violation::SpaceInParam(index).into());
        }
        // Tokens before this index are the tag and sender slots, whose
        // sigils are legitimate; a tag token shifts the sender slot by one.
        let sender_slots = if parv.first().is_some_and(|first| first.starts_with(b"@")) {
            2
        } else {
            1
        };
        for (index, param) in parv.iter().enumerate().skip(sender_slots) {
            if param.starts_with(b":") {
                return Err(Violation::ColonInParam(index).into());
            }
        }
    }

    if let Some(trailing) = trailing {
        let mut quoted = Vec::with_capacity(trailing.len() + 1);
        quoted.push(b':');
        quoted.extend_from_slice(&trailing);
        parv.push(quoted);
    }

    Ok(parv.join(&b' '))
}
