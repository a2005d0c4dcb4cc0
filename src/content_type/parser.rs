//! Media type parser (RFC 2045 / RFC 7231 `Content-Type` grammar)

use std::collections::HashMap;

/// A parsed media type such as `application/json; charset=utf-8`
///
/// The essence (`type/subtype`) and parameter names are lowercased.
/// Parameter values keep their original case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaType {
    essence: String,
    params: HashMap<String, String>,
}

impl MediaType {
    /// Parse a `Content-Type` header value
    ///
    /// Extended parameters (`name*=charset'lang'pct-encoded`, RFC 2231) are
    /// decoded and stored under the plain name.
    ///
    /// Returns `None` when the value does not follow the media type grammar:
    /// missing `/`, characters outside the token set, unterminated quoted
    /// strings, parameters without `=`, duplicate parameter names (including
    /// `name` together with `name*`), parameter continuations, or extended
    /// values that cannot be decoded.
    pub fn parse(input: &str) -> Option<Self> {
        let (head, mut rest) = match input.find(';') {
            Some(idx) => (&input[..idx], &input[idx..]),
            None => (input, ""),
        };

        let head = head.trim();
        let (main, sub) = head.split_once('/')?;
        if !is_token(main) || !is_token(sub) {
            return None;
        }
        let essence = format!("{}/{}", main.to_ascii_lowercase(), sub.to_ascii_lowercase());

        let mut params = HashMap::new();
        loop {
            rest = rest.trim_start();
            if rest.is_empty() {
                break;
            }
            rest = rest.strip_prefix(';')?.trim_start();
            // A trailing `;` with nothing after it is tolerated
            if rest.is_empty() {
                break;
            }

            let (name, after_name) = take_token(rest)?;
            let after_eq = after_name.trim_start().strip_prefix('=')?.trim_start();
            let (value, after_value) = if after_eq.starts_with('"') {
                take_quoted(after_eq)?
            } else {
                let (token, remaining) = take_token(after_eq)?;
                (token.to_string(), remaining)
            };

            let name = name.to_ascii_lowercase();
            let (name, value) = match name.strip_suffix('*') {
                Some(plain) => (plain.to_string(), decode_extended(&value)?),
                None => (name, value),
            };
            // Continuations (`name*0`, `name*1*`) are not supported
            if name.contains('*') {
                return None;
            }
            if params.insert(name, value).is_some() {
                return None;
            }
            rest = after_value;
        }

        Some(Self { essence, params })
    }

    /// The lowercased `type/subtype`
    pub fn essence(&self) -> &str {
        &self.essence
    }

    /// Look up a parameter by (case-insensitive) name
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// The `charset` parameter, if present
    pub fn charset(&self) -> Option<&str> {
        self.param("charset")
    }
}

fn is_token_char(c: char) -> bool {
    c.is_ascii() && !c.is_ascii_control() && c != ' ' && !"()<>@,;:\\\"/[]?=".contains(c)
}

fn is_token(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_token_char)
}

/// Split a leading token off `input`
fn take_token(input: &str) -> Option<(&str, &str)> {
    let end = input
        .char_indices()
        .find(|&(_, c)| !is_token_char(c))
        .map_or(input.len(), |(idx, _)| idx);
    if end == 0 {
        return None;
    }
    Some((&input[..end], &input[end..]))
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

/// Decode an RFC 2231 extended value: `charset'language'percent-encoded`
///
/// Only `utf-8` and `us-ascii` encodings (or none) are understood.
fn decode_extended(value: &str) -> Option<String> {
    let mut parts = value.splitn(3, '\'');
    let encoding = parts.next()?.to_ascii_lowercase();
    let _language = parts.next()?;
    let encoded = parts.next()?;

    let bytes = percent_decode(encoded)?;
    match encoding.as_str() {
        "" | "utf-8" => String::from_utf8(bytes).ok(),
        "us-ascii" if bytes.is_ascii() => String::from_utf8(bytes).ok(),
        _ => None,
    }
}

fn percent_decode(input: &str) -> Option<Vec<u8>> {
    let mut out = Vec::with_capacity(input.len());
    let mut bytes = input.bytes();
    while let Some(b) = bytes.next() {
        if b == b'%' {
            let hi = char::from(bytes.next()?).to_digit(16)?;
            let lo = char::from(bytes.next()?).to_digit(16)?;
            out.push((hi * 16 + lo) as u8);
        } else {
            out.push(b);
        }
    }
    Some(out)
}
