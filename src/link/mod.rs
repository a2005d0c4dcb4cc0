//! RFC 5988 `Link` header parsing
//!
//! Parses `Link: <https://api.example.com/items?page=2>; rel="next", ...`
//! into a [`LinkRelationSet`] so the pagination layer can look up the
//! `next` relation.

mod parser;

pub use parser::{parse_link_header, Link, LinkRelationSet};
