//! The structured message model.

use crate::message::tags::{TagValue, Tags};
use crate::prefix::Prefix;

/// One protocol message: tags, sender prefix, command, and arguments.
///
/// A `Message` is built fresh per parsed line (see [`Message::parse`]) or
/// per outbound send (see [`Message::new`]); it owns its prefix and tag
/// mapping and shares nothing.
///
/// # Examples
///
/// ```
/// use ircline::{Message, Prefix};
///
/// let msg = Message::new("PRIVMSG", &["#chan", "Hello there"])
///     .with_prefix(Prefix::full("nick", "user", "host"));
/// assert_eq!(msg.unparse().unwrap(), b":nick!user@host PRIVMSG #chan :Hello there");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    /// IRCv3 tags. Empty means the line carries no tag segment.
    pub tags: Tags,
    /// Sender prefix, if the line carries one.
    pub prefix: Option<Prefix>,
    /// The command verb. Uppercased when parsed from the wire; kept as given
    /// on construction. `None` for a line that carried no command (tag or
    /// prefix segment only), which is a valid, empty message, not an error.
    pub command: Option<String>,
    /// Positional arguments. Only the last may contain spaces or lead with
    /// `:`; the serializer's strict mode enforces this.
    pub args: Vec<String>,
}

impl Message {
    /// Builds an outbound message. The command's case is kept as given.
    ///
    /// # Examples
    ///
    /// ```
    /// use ircline::Message;
    ///
    /// let msg = Message::new("PING", &["irc.example.net"]);
    /// assert_eq!(msg.unparse().unwrap(), b"PING irc.example.net");
    /// ```
    pub fn new(command: impl Into<String>, args: &[&str]) -> Message {
        Message {
            command: Some(command.into()),
            args: args.iter().map(|arg| arg.to_string()).collect(),
            ..Message::default()
        }
    }

    /// Adds one tag; `None` makes it a presence flag.
    pub fn with_tag(mut self, key: impl Into<String>, value: Option<&str>) -> Message {
        let value = match value {
            Some(text) => TagValue::Text(text.to_string()),
            None => TagValue::Flag,
        };
        self.tags.insert(key.into(), value);
        self
    }

    /// Sets the sender prefix.
    pub fn with_prefix(mut self, prefix: Prefix) -> Message {
        self.prefix = Some(prefix);
        self
    }

    /// Returns the text value of a tag, or `None` if the tag is absent or a
    /// presence flag.
    pub fn tag_value(&self, key: &str) -> Option<&str> {
        self.tags.get(key).and_then(TagValue::as_text)
    }

    /// Returns `true` if the tag is present, as text or as a flag.
    pub fn has_tag(&self, key: &str) -> bool {
        self.tags.contains_key(key)
    }
}
