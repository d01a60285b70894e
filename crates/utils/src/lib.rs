mod bytes;
pub mod media_types;
pub mod path;

pub use bytes::format_bytes;
