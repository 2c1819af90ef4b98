//! Wire-line parsing into [`Message`].

use crate::message::tags;
use crate::message::types::Message;
use crate::prefix::Prefix;
use crate::tokenizer;

impl Message {
    /// Parses one raw line (line ending already stripped).
    ///
    /// Total: any byte input yields a `Message`. Malformed UTF-8 is repaired
    /// with replacement characters, unrecognized senders degrade to
    /// best-effort classification, and a line with no command yields a
    /// message whose `command` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ircline::Message;
    ///
    /// let msg = Message::parse(b"@id=123;bot PING :hi");
    /// assert_eq!(msg.tag_value("id"), Some("123"));
    /// assert!(msg.has_tag("bot"));
    /// assert_eq!(msg.command.as_deref(), Some("PING"));
    /// assert_eq!(msg.args, ["hi"]);
    /// ```
    pub fn parse(line: &[u8]) -> Message {
        Message::from_tokens(&tokenizer::split(line))
    }

    /// Builds a `Message` from tokenizer output.
    ///
    /// The first token is consumed as the tag segment if it leads with `@`,
    /// the next as the sender if it leads with `:`; the first remaining token
    /// becomes the command (ASCII-uppercased before decoding, so non-ASCII
    /// bytes pass through untouched) and the rest become the arguments.
    pub fn from_tokens(tokens: &[&[u8]]) -> Message {
        let mut message = Message::default();
        let mut rest = tokens;

        if let Some((first, tail)) = rest.split_first() {
            if first.starts_with(b"@") {
                message.tags = tags::parse_segment(&decode(&first[1..]));
                rest = tail;
            }
        }

        if let Some((first, tail)) = rest.split_first() {
            if first.starts_with(b":") {
                message.prefix = Some(Prefix::parse(&first[1..]));
                rest = tail;
            }
        }

        if let Some((command, args)) = rest.split_first() {
            message.command = Some(decode(&command.to_ascii_uppercase()));
            message.args = args.iter().map(|arg| decode(arg)).collect();
        }

        message
    }
}

fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
