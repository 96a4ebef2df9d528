/// Character references the federation sites emit for German names and places,
/// plus the four markup escapes.
const ENTITIES: [(&str, char); 11] = [
    ("&#228;", 'ä'),
    ("&#246;", 'ö'),
    ("&#252;", 'ü'),
    ("&#196;", 'Ä'),
    ("&#214;", 'Ö'),
    ("&#220;", 'Ü'),
    ("&#223;", 'ß'),
    ("&amp;", '&'),
    ("&lt;", '<'),
    ("&gt;", '>'),
    ("&quot;", '"'),
];

/// Decode the fixed entity table in a single left-to-right pass.
///
/// Output of one replacement is never rescanned, so `&amp;lt;` becomes `&lt;`
/// and not `<`. Unknown entities are copied through untouched.
pub fn decode_html_entities(text: &str) -> String {
    let mut decoded = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find('&') {
        decoded.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        match ENTITIES.iter().find(|(entity, _)| tail.starts_with(entity)) {
            Some((entity, ch)) => {
                decoded.push(*ch);
                rest = &tail[entity.len()..];
            }
            None => {
                decoded.push('&');
                rest = &tail[1..];
            }
        }
    }

    decoded.push_str(rest);
    decoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_umlauts_and_markup_escapes() {
        assert_eq!(
            decode_html_entities("M&#252;nchen &amp; F&#252;rth &lt;Gro&#223;&gt; &quot;&#196;&#214;&#220;&#228;&#246;&quot;"),
            "München & Fürth <Groß> \"ÄÖÜäö\""
        );
    }

    #[test]
    fn test_unknown_entities_pass_through() {
        assert_eq!(decode_html_entities("a &nbsp; b &#233; &"), "a &nbsp; b &#233; &");
    }

    #[test]
    fn test_no_double_unescaping() {
        assert_eq!(decode_html_entities("&amp;lt;"), "&lt;");
        assert_eq!(decode_html_entities("&amp;#228;"), "&#228;");
    }

    #[test]
    fn test_idempotent_on_decoded_text() {
        let decoded = decode_html_entities("Stra&#223;e &amp; Platz");
        assert_eq!(decoded, "Straße & Platz");
        assert_eq!(decode_html_entities(&decoded), decoded);

        for text in ["Nürnberg", "Tom & Jerry", "a < b > c", "", "\"quoted\""] {
            assert_eq!(decode_html_entities(text), text);
        }
    }
}
