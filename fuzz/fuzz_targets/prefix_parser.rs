//! Fuzz target for sender prefix parsing
//!
//! Prefix classification is total: any byte string must parse into one of the
//! three sender forms without panicking, and a non-empty result must
//! serialize back without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 256 {
        return;
    }

    let prefix = ircline::Prefix::parse(data);
    if let Some(raw) = prefix.unparse() {
        // Reparsing the serialized form must also be panic-free
        let _ = ircline::Prefix::parse(&raw);
    }
});
