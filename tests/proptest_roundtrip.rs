//! Property-based tests for the wire-format layer.
//!
//! Uses proptest to generate random messages and verify that:
//! 1. Serialized messages re-parse to the same message (roundtrip)
//! 2. The serialized form is a fixed point: reparse + reserialize is stable
//! 3. Parsing never panics, on well-formed or arbitrary bytes

use proptest::prelude::*;

use ircline::{Message, Prefix, TagValue, Tags};

// =============================================================================
// STRATEGIES - Generators for wire-format components
// =============================================================================

/// Nickname: letter or special first, letters/digits/specials after. No dot,
/// so nick-only senders classify back as nicks.
fn nickname_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z\\[\\]\\\\^_`{|}][a-zA-Z0-9\\-\\[\\]\\\\^_`{|}]{0,8}")
        .expect("valid regex")
}

/// Username (ident): alphanumeric, no `@` or `!`.
fn username_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z][a-zA-Z0-9]{0,9}").expect("valid regex")
}

/// Hostname for the full sender form; dots optional there.
fn hostname_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9]+(\\.[a-z0-9]+)*").expect("valid regex")
}

/// Hostname for server-style senders: at least one dot, so the host-only
/// classification survives a roundtrip.
fn dotted_hostname_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9]+(\\.[a-z0-9]+)+").expect("valid regex")
}

/// Command verb: alphabetic or three-digit numeric, already uppercase so the
/// parser's case normalization is the identity.
fn command_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z]{2,10}|[0-9]{3}").expect("valid regex")
}

/// Middle parameter: non-empty, no spaces, no leading ':' (inner ':' is fine).
fn middle_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9#&@+_.-][a-zA-Z0-9#&@+_.:-]{0,15}")
        .expect("valid regex")
}

/// Trailing parameter: printable ASCII, spaces and colons included, may be
/// empty.
fn trailing_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ -~]{0,40}").expect("valid regex")
}

/// Tag key: alphanumeric with hyphens.
fn tag_key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z][a-zA-Z0-9\\-]{0,30}").expect("valid regex")
}

/// Tag value: no spaces or semicolons; '=' is allowed and exercises the
/// first-equals split.
fn tag_value_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9=._\\-]{0,60}").expect("valid regex")
}

/// One tag value side: text or presence flag.
fn tag_entry_strategy() -> impl Strategy<Value = (String, TagValue)> {
    (
        tag_key_strategy(),
        prop::option::of(tag_value_strategy()),
    )
        .prop_map(|(key, value)| {
            let value = match value {
                Some(text) => TagValue::Text(text),
                None => TagValue::Flag,
            };
            (key, value)
        })
}

fn tags_strategy() -> impl Strategy<Value = Tags> {
    prop::collection::vec(tag_entry_strategy(), 0..5)
        .prop_map(|entries| entries.into_iter().collect())
}

fn prefix_strategy() -> impl Strategy<Value = Prefix> {
    prop_oneof![
        dotted_hostname_strategy().prop_map(Prefix::server),
        nickname_strategy().prop_map(Prefix::nickname),
        (nickname_strategy(), username_strategy(), hostname_strategy())
            .prop_map(|(nick, user, host)| Prefix::full(nick, user, host)),
    ]
}

fn message_strategy() -> impl Strategy<Value = Message> {
    (
        tags_strategy(),
        prop::option::of(prefix_strategy()),
        command_strategy(),
        prop::collection::vec(middle_strategy(), 0..3),
        prop::option::of(trailing_strategy()),
    )
        .prop_map(|(tags, prefix, command, middles, trailing)| {
            let mut args = middles;
            if let Some(trailing) = trailing {
                args.push(trailing);
            }
            Message {
                tags,
                prefix,
                command: Some(command),
                args,
            }
        })
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// The fundamental roundtrip property: serialize → parse = identity.
    #[test]
    fn message_roundtrip(msg in message_strategy()) {
        let line = msg.unparse().expect("generated message should serialize");
        let parsed = Message::parse(&line);
        prop_assert_eq!(&msg, &parsed,
            "roundtrip failed for line: {}", String::from_utf8_lossy(&line));
    }

    /// The serialized form is canonical: one more parse/serialize pass
    /// reproduces it byte-for-byte.
    #[test]
    fn serialized_form_is_stable(msg in message_strategy()) {
        let line = msg.unparse().expect("generated message should serialize");
        let again = Message::parse(&line)
            .unparse()
            .expect("reparsed message should serialize");
        prop_assert_eq!(&line, &again,
            "canonical form drifted: {}", String::from_utf8_lossy(&line));
    }

    /// Any sender form survives unparse → parse.
    #[test]
    fn prefix_roundtrip(prefix in prefix_strategy()) {
        let raw = prefix.unparse().expect("generated prefix is non-empty");
        prop_assert_eq!(&prefix, &Prefix::parse(&raw),
            "prefix roundtrip failed for: {}", String::from_utf8_lossy(&raw));
    }

    /// Tag values and flags survive a trip through a full line.
    #[test]
    fn tag_in_message_roundtrip(
        key in tag_key_strategy(),
        value in prop::option::of(tag_value_strategy())
    ) {
        let msg = Message::new("PING", &["x"])
            .with_tag(key.clone(), value.as_deref());

        let line = msg.unparse().expect("tagged message should serialize");
        let parsed = Message::parse(&line);

        prop_assert_eq!(value.as_deref(), parsed.tag_value(&key));
        prop_assert!(parsed.has_tag(&key));
    }

    /// Redundant spacing between tokens never changes the parsed message.
    #[test]
    fn redundant_spacing_collapses(
        command in command_strategy(),
        parts in prop::collection::vec((middle_strategy(), 1usize..4), 0..4)
    ) {
        let mut padded = command.clone().into_bytes();
        let mut canonical = command.into_bytes();
        for (middle, pad) in &parts {
            padded.extend(std::iter::repeat(b' ').take(*pad));
            canonical.push(b' ');
            padded.extend_from_slice(middle.as_bytes());
            canonical.extend_from_slice(middle.as_bytes());
        }
        prop_assert_eq!(Message::parse(&padded), Message::parse(&canonical));
    }

    /// The trailing parameter is preserved verbatim, spacing and colons
    /// included.
    #[test]
    fn trailing_text_is_verbatim(text in trailing_strategy()) {
        let mut line = b"PRIVMSG #chan :".to_vec();
        line.extend_from_slice(text.as_bytes());

        let msg = Message::parse(&line);
        prop_assert_eq!(msg.args.len(), 2);
        prop_assert_eq!(&msg.args[1], &text);
    }
}

// =============================================================================
// TOTALITY TESTS
// =============================================================================

proptest! {
    /// Parsing must never panic, whatever the bytes.
    #[test]
    fn parse_never_panics_on_arbitrary_bytes(
        bytes in prop::collection::vec(any::<u8>(), 0..512)
    ) {
        let msg = Message::parse(&bytes);
        // Serialization of whatever came out must not panic either; it may
        // well return an error.
        let _ = msg.unparse();
        let _ = msg.unparse_lenient();
    }

    /// The tokenizer is total as well, and its tokens always rebuild into
    /// the same message that direct parsing produces.
    #[test]
    fn split_agrees_with_parse(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let tokens = ircline::split(&bytes);
        prop_assert_eq!(Message::from_tokens(&tokens), Message::parse(&bytes));
    }
}
