//! Plain-text preparation for the content column.
//!
//! Post bodies arrive as markup: shortcode placeholders first, then whatever
//! HTML the host's content filters produce. The content cell wants a short
//! plain-text excerpt, so bodies pass through [`strip_shortcodes`],
//! [`strip_tags`], [`decode_entities`], and [`trim_words`] in that order.
//! Decoding matters: the excerpt is escaped again when the cell renders, so
//! any entity still encoded here would come out double-escaped.

/// Removes `[tag ...]` and `[/tag]` shortcode markup, keeping surrounding
/// text. Bracketed text that does not look like a shortcode (the name must
/// start with an ASCII letter or underscore) is left alone.
pub fn strip_shortcodes(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find('[') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        let stripped = match after.find(']') {
            Some(end) if is_shortcode(&after[..end]) => {
                rest = &after[end + 1..];
                true
            }
            _ => false,
        };

        if !stripped {
            out.push('[');
            rest = after;
        }
    }

    out.push_str(rest);
    out
}

/// A shortcode body is an optional `/`, a tag name, then optional attributes.
fn is_shortcode(body: &str) -> bool {
    let name = body.strip_prefix('/').unwrap_or(body);
    let name = name
        .split(|c: char| c.is_whitespace() || c == '=')
        .next()
        .unwrap_or("");
    if body.contains('[') {
        return false;
    }
    is_tag_name(name)
}

/// Tag names follow the usual identifier rule: start with a letter or
/// underscore, then letters, digits, underscores, or hyphens.
fn is_tag_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Removes HTML tags, keeping text content. Unterminated tags swallow the
/// rest of the input; a stray `>` outside a tag is kept.
pub fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;
    for ch in input.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

/// Decodes HTML character references to plain text.
///
/// Handles the named entities that survive tag stripping in practice plus
/// numeric references (`&#38;`, `&#x26;`). Anything unrecognized is kept
/// verbatim, ampersand included.
pub fn decode_entities(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        let decoded = after
            .find(';')
            .and_then(|end| decode_entity(&after[..end]).map(|ch| (ch, end)));

        match decoded {
            Some((ch, end)) => {
                out.push(ch);
                rest = &after[end + 1..];
            }
            None => {
                out.push('&');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        "hellip" => Some('\u{2026}'),
        "ndash" => Some('\u{2013}'),
        "mdash" => Some('\u{2014}'),
        _ => {
            let code = if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X"))
            {
                u32::from_str_radix(hex, 16).ok()
            } else if let Some(dec) = name.strip_prefix('#') {
                dec.parse().ok()
            } else {
                None
            };
            code.and_then(char::from_u32)
        }
    }
}

/// Truncates text to at most `limit` whitespace-separated words.
///
/// Returns the excerpt (words rejoined with single spaces) and whether
/// anything was cut. A limit of zero yields an empty excerpt, marked
/// truncated whenever the input had any words.
pub fn trim_words(text: &str, limit: u32) -> (String, bool) {
    let words: Vec<&str> = text.split_whitespace().collect();
    let limit = limit as usize;
    if words.len() > limit {
        (words[..limit].join(" "), true)
    } else {
        (words.join(" "), false)
    }
}
