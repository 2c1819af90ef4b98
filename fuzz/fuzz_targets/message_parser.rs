//! Fuzz target for message parsing
//!
//! Feeds arbitrary bytes to the tokenizer and parser and ensures they never
//! panic. Parsing is total, so every input must produce a message; the
//! serializer may reject it, but must not crash doing so.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Lines longer than the wire allows are uninteresting
    if data.len() > 512 {
        return;
    }

    let tokens = ircline::split(data);
    let msg = ircline::Message::from_tokens(&tokens);

    // Reserialization must not panic in either mode
    let _ = msg.unparse();
    let _ = msg.unparse_lenient();
});
