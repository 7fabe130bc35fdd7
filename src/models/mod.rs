pub mod item;

pub use item::{Item, format_timestamp, parse_timestamp};
