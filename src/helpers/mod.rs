pub mod base64_bytes;
pub mod time;
