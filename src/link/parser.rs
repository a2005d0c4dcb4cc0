//! Link header parser

use crate::error::{Error, Result};
use std::collections::HashMap;

/// A single link from a `Link` header: target URL plus its parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Target URI reference, exactly as written between `<` and `>`
    pub url: String,
    /// Relation types from the `rel` parameter, lowercased
    pub rels: Vec<String>,
    /// Every other parameter, keyed by lowercased name
    pub params: HashMap<String, String>,
}

impl Link {
    /// Check whether this link carries the given relation type
    pub fn has_rel(&self, rel: &str) -> bool {
        self.rels.iter().any(|r| r.eq_ignore_ascii_case(rel))
    }
}

/// All links parsed from one response's `Link` header(s)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkRelationSet {
    links: Vec<Link>,
}

impl LinkRelationSet {
    /// Parse a `Link` header value
    pub fn parse(header: &str) -> Result<Self> {
        parse_link_header(header)
    }

    /// First link carrying the given relation
    pub fn find(&self, rel: &str) -> Option<&Link> {
        self.links.iter().find(|l| l.has_rel(rel))
    }

    /// The `next` link, if any
    pub fn next_link(&self) -> Option<&Link> {
        self.find("next")
    }

    /// Iterate over all links in header order
    pub fn iter(&self) -> impl Iterator<Item = &Link> {
        self.links.iter()
    }

    /// Number of links
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// True when no links were present
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

/// Parse a `Link` header value into a relation set
///
/// Format: `<url>; rel="next"; title="x", <url>; rel="prev last"`.
/// Empty list elements are skipped; anything else that does not follow the
/// grammar is a [`Error::LinkHeaderParse`].
pub fn parse_link_header(header: &str) -> Result<LinkRelationSet> {
    let fail = |message: &str| Error::link_header(header, message);

    let mut links = Vec::new();
    let mut rest = header;

    loop {
        rest = rest.trim_start_matches(|c: char| c == ',' || c.is_ascii_whitespace());
        if rest.is_empty() {
            break;
        }

        rest = rest
            .strip_prefix('<')
            .ok_or_else(|| fail("expected '<' at start of link"))?;
        let close = rest
            .find('>')
            .ok_or_else(|| fail("unterminated URI reference"))?;
        let url = rest[..close].trim().to_string();
        rest = &rest[close + 1..];

        let mut rels = None;
        let mut params = HashMap::new();

        loop {
            rest = rest.trim_start();
            if rest.is_empty() {
                break;
            }
            if let Some(after) = rest.strip_prefix(',') {
                rest = after;
                break;
            }
            let Some(after) = rest.strip_prefix(';') else {
                return Err(fail("unexpected character after link target"));
            };
            rest = after.trim_start();
            if rest.is_empty() || rest.starts_with(',') {
                continue;
            }

            let (name, after_name) = take_token(rest);
            if name.is_empty() {
                return Err(fail("link parameter without a name"));
            }
            let name = name.to_ascii_lowercase();
            rest = after_name.trim_start();

            let value = if let Some(after_eq) = rest.strip_prefix('=') {
                rest = after_eq.trim_start();
                if rest.starts_with('"') {
                    let (value, after_value) =
                        take_quoted(rest).ok_or_else(|| fail("unterminated quoted string"))?;
                    rest = after_value;
                    value
                } else {
                    let (value, after_value) = take_unquoted(rest);
                    if value.is_empty() {
                        return Err(fail("empty link parameter value"));
                    }
                    rest = after_value;
                    value.to_string()
                }
            } else {
                String::new()
            };

            if name == "rel" {
                // Only the first rel parameter counts
                if rels.is_none() {
                    rels = Some(
                        value
                            .split_ascii_whitespace()
                            .map(str::to_ascii_lowercase)
                            .collect(),
                    );
                }
            } else {
                params.entry(name).or_insert(value);
            }
        }

        links.push(Link {
            url,
            rels: rels.unwrap_or_default(),
            params,
        });
    }

    Ok(LinkRelationSet { links })
}

fn is_token_char(c: char) -> bool {
    c.is_ascii() && !c.is_ascii_control() && c != ' ' && !"()<>@,;:\\\"/[]?={}".contains(c)
}

/// Split a leading token off `input` (possibly empty)
fn take_token(input: &str) -> (&str, &str) {
    let end = input
        .char_indices()
        .find(|&(_, c)| !is_token_char(c))
        .map_or(input.len(), |(idx, _)| idx);
    (&input[..end], &input[end..])
}

/// Split a leading unquoted parameter value off `input`
///
/// Wider than a token so that values such as `type=application/json` parse.
fn take_unquoted(input: &str) -> (&str, &str) {
    let end = input
        .char_indices()
        .find(|&(_, c)| c.is_ascii_whitespace() || matches!(c, ',' | ';' | '"'))
        .map_or(input.len(), |(idx, _)| idx);
    (&input[..end], &input[end..])
}

/// Split a leading quoted-string off `input`, unescaping `\x` pairs
fn take_quoted(input: &str) -> Option<(String, &str)> {
    let mut value = String::new();
    let mut chars = input.char_indices().skip(1);
    while let Some((idx, c)) = chars.next() {
        match c {
            '"' => return Some((value, &input[idx + 1..])),
            '\\' => {
                let (_, escaped) = chars.next()?;
                value.push(escaped);
            }
            _ => value.push(c),
        }
    }
    None
}
