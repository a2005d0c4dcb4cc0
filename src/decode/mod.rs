//! Response decoder module
//!
//! # Overview
//!
//! Each page body must be a JSON array of records. The decoder parses it
//! strictly into typed records; re-encoding those records yields the page's
//! canonical fragment, independent of the server's formatting.

mod decoders;
mod types;

pub use decoders::JsonArrayDecoder;
pub use types::Fragment;
