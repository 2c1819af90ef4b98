//! # ircline
//!
//! Tokenizer and serializer for the IRC wire format: raw byte lines in,
//! structured messages out, and back again, with IRCv3 message tags and the
//! `nick!user@host` sender-prefix grammar.
//!
//! ## Features
//!
//! - Total, zero-copy line tokenizing: any byte input yields tokens
//! - Message parsing with tags, prefix, command, and arguments
//! - Greedy best-effort sender classification (full / nick-only / server)
//! - Strict serialization that rejects lines which would not re-tokenize
//!   losslessly, with a lenient escape hatch
//! - Permissive UTF-8 handling: malformed text is repaired, never fatal
//! - Optional `serde` support for the message model
//!
//! Transport concerns (sockets, TLS, line buffering, reconnection) are
//! deliberately absent. The crate consumes one line with its ending already
//! stripped and produces one line without an ending.
//!
//! ## Quick Start
//!
//! ### Parsing lines
//!
//! ```rust
//! use ircline::Message;
//!
//! let msg = Message::parse(b"@time=2023-01-01T12:00:00Z :nick!user@host PRIVMSG #chan :Hello!");
//!
//! assert_eq!(msg.command.as_deref(), Some("PRIVMSG"));
//! assert_eq!(msg.args, ["#chan", "Hello!"]);
//! assert_eq!(msg.tag_value("time"), Some("2023-01-01T12:00:00Z"));
//! ```
//!
//! ### Building lines
//!
//! ```rust
//! use ircline::{Message, Prefix};
//!
//! let msg = Message::new("PRIVMSG", &["#chan", "Hello, world!"])
//!     .with_tag("msgid", Some("abc123"))
//!     .with_prefix(Prefix::full("bot", "bot", "example.com"));
//!
//! let line = msg.unparse().unwrap();
//! assert_eq!(line, b"@msgid=abc123 :bot!bot@example.com PRIVMSG #chan :Hello, world!");
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub mod message;
pub mod prefix;
pub mod tokenizer;

pub use self::error::{ProtocolError, Result, Violation};
pub use self::message::{join, join_lenient, Message, TagValue, Tags};
pub use self::prefix::Prefix;
pub use self::tokenizer::{split, split_strict};
