// ABOUTME: HTML entity decoding for exported document text.
// ABOUTME: Single-pass scanner handling numeric references and a small named-entity table.

/// Named entities the export format actually emits.
const NAMED_ENTITIES: &[(&str, &str)] = &[
    ("nbsp", "\u{a0}"),
    ("amp", "&"),
    ("quot", "\""),
    ("apos", "'"),
    ("lt", "<"),
    ("gt", ">"),
    ("lsquo", "\u{2018}"),
    ("rsquo", "\u{2019}"),
    ("ldquo", "\u{201C}"),
    ("rdquo", "\u{201D}"),
    ("hellip", "\u{2026}"),
    ("ndash", "\u{2013}"),
    ("mdash", "\u{2014}"),
    ("bull", "\u{2022}"),
];

/// Decodes HTML entities in a single left-to-right pass.
///
/// Numeric references (`&#NNN;`, `&#xHH;`) are converted by codepoint;
/// named entities come from a fixed table. Decoded output is never
/// re-scanned, so `&amp;nbsp;` yields the literal text `&nbsp;`.
/// Unrecognized entities pass through unchanged.
pub fn decode_entities(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let bytes = s.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'&' {
            // Copy the whole char, not just the byte.
            let ch = s[i..].chars().next().unwrap();
            result.push(ch);
            i += ch.len_utf8();
            continue;
        }

        match decode_entity_at(&s[i..]) {
            Some((replacement, consumed)) => {
                result.push_str(&replacement);
                i += consumed;
            }
            None => {
                result.push('&');
                i += 1;
            }
        }
    }

    result
}

/// Tries to decode one entity starting at `&`.
/// Returns the replacement text and the number of input bytes consumed.
fn decode_entity_at(s: &str) -> Option<(String, usize)> {
    let semi = s[1..].find(';')? + 1;
    let name = &s[1..semi];
    if name.is_empty() {
        return None;
    }

    if let Some(num) = name.strip_prefix('#') {
        let code = if let Some(hex) = num.strip_prefix('x').or_else(|| num.strip_prefix('X')) {
            u32::from_str_radix(hex, 16).ok()?
        } else {
            num.parse::<u32>().ok()?
        };
        let decoded = char::from_u32(code)?;
        return Some((decoded.to_string(), semi + 1));
    }

    for (entity, replacement) in NAMED_ENTITIES {
        if name == *entity {
            return Some((replacement.to_string(), semi + 1));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_named() {
        assert_eq!(decode_entities("&amp;"), "&");
        assert_eq!(decode_entities("&lt;&gt;"), "<>");
        assert_eq!(decode_entities("&quot;quoted&quot;"), "\"quoted\"");
        assert_eq!(decode_entities("&nbsp;"), "\u{a0}");
        assert_eq!(decode_entities("&mdash;"), "—");
        assert_eq!(decode_entities("&bull; item"), "• item");
    }

    #[test]
    fn test_decode_numeric() {
        assert_eq!(decode_entities("&#38;"), "&");
        assert_eq!(decode_entities("&#x26;"), "&");
        assert_eq!(decode_entities("&#169;"), "©");
        assert_eq!(decode_entities("&#xA9;"), "©");
    }

    #[test]
    fn test_decoded_output_not_rescanned() {
        // &amp; decodes to a literal ampersand; the following "nbsp;" is
        // plain text by then, not a second entity.
        assert_eq!(decode_entities("&amp;nbsp;&lt;b&gt;"), "&nbsp;<b>");
    }

    #[test]
    fn test_unknown_entity_passes_through() {
        assert_eq!(decode_entities("&unknown;"), "&unknown;");
        assert_eq!(decode_entities("&;"), "&;");
        assert_eq!(decode_entities("a & b"), "a & b");
    }

    #[test]
    fn test_malformed_numeric_passes_through() {
        assert_eq!(decode_entities("&#;"), "&#;");
        assert_eq!(decode_entities("&#xZZ;"), "&#xZZ;");
        assert_eq!(decode_entities("&#110000000;"), "&#110000000;");
    }

    #[test]
    fn test_unterminated_entity() {
        assert_eq!(decode_entities("&amp"), "&amp");
        assert_eq!(decode_entities("Tom & Jerry"), "Tom & Jerry");
    }

    #[test]
    fn test_multibyte_text_around_entities() {
        assert_eq!(decode_entities("caf\u{e9} &amp; th\u{e9}"), "café & thé");
    }
}
