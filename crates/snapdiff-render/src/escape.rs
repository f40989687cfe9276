//! Markup escaping for line content.

/// Escape `<` and `>` so line content cannot open or close tags.
///
/// Diffed lines land inside element bodies, never inside attribute
/// values, so the two angle brackets are the characters that matter.
pub fn escape_markup(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}

/// Escape for attribute-value position, e.g. inside `href="..."`.
///
/// Adds `"` to the body set so a path or version name cannot close the
/// quoted attribute it is interpolated into.
pub fn escape_attr(text: &str) -> String {
    escape_markup(text).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_brackets_escaped() {
        assert_eq!(
            escape_markup("<script>alert(1)</script>"),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
    }

    #[test]
    fn plain_text_untouched() {
        assert_eq!(escape_markup("fn main() {}"), "fn main() {}");
    }

    #[test]
    fn empty_string() {
        assert_eq!(escape_markup(""), "");
    }

    #[test]
    fn attr_escapes_quotes_too() {
        assert_eq!(
            escape_attr("v1\" onclick=\"x"),
            "v1&quot; onclick=&quot;x"
        );
        assert_eq!(escape_attr("<a>"), "&lt;a&gt;");
    }
}
