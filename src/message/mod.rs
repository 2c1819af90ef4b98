//! Message model: parsing, serialization, and IRCv3 tags.

mod parse;
mod serialize;
pub mod tags;
mod types;

pub use self::serialize::{join, join_lenient};
pub use self::tags::{TagValue, Tags};
pub use self::types::Message;
