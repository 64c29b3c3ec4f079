//! Text helpers for notice injection.

/// Trim markup to its first `limit` words.
///
/// Tags are stripped before counting so the word budget applies to visible
/// text. When the input was longer than the budget an `&hellip;` marker is
/// appended.
pub fn trim_words(text: &str, limit: usize) -> String {
    let stripped = strip_tags(text);
    let mut words = stripped.split_whitespace();
    let trimmed: Vec<&str> = words.by_ref().take(limit).collect();
    let mut out = trimmed.join(" ");
    if words.next().is_some() {
        out.push_str("&hellip;");
    }
    out
}

/// Escape text for inclusion in HTML markup.
pub fn esc_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Drop `<...>` tag spans, leaving text content.
fn strip_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    for c in text.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                // Keep adjacent words separated once the tag is gone.
                out.push(' ');
            }
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(trim_words("one two three", 20), "one two three");
    }

    #[test]
    fn long_text_is_trimmed_with_marker() {
        let text = "a b c d e f";
        assert_eq!(trim_words(text, 3), "a b c&hellip;");
    }

    #[test]
    fn trims_words_not_characters() {
        let text = "supercalifragilistic expialidocious words here";
        assert_eq!(trim_words(text, 2), "supercalifragilistic expialidocious&hellip;");
    }

    #[test]
    fn tags_do_not_count_as_words() {
        let text = "<p>alpha <strong>beta</strong> gamma</p>";
        assert_eq!(trim_words(text, 3), "alpha beta gamma");
        assert_eq!(trim_words(text, 2), "alpha beta&hellip;");
    }

    #[test]
    fn escapes_html_entities() {
        assert_eq!(
            esc_html(r#"<a href="x">it's & more</a>"#),
            "&lt;a href=&quot;x&quot;&gt;it&#039;s &amp; more&lt;/a&gt;"
        );
    }
}
