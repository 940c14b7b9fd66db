/// Escape text for insertion between HTML tags or inside a quoted attribute.
///
/// Each character is replaced at most once, so already-escaped input such as
/// `&lt;` comes out as `&amp;lt;` and renders as the literal text it was.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
