use std::sync::LazyLock;

use regex::Regex;

// Single-line comments go first so anything left for the second pass must
// cross a line break.
static SINGLE_LINE_COMMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<!--[^\r\n]*?-->").expect("SINGLE_LINE_COMMENT: hardcoded regex is valid")
});

static MULTI_LINE_COMMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!--.*?-->").expect("MULTI_LINE_COMMENT: hardcoded regex is valid")
});

/// Replaces all HTML comments with a single space if the comment spans
/// multiple lines, otherwise with an empty string.
///
/// `A<!-- B -->C` becomes `AC`, while a comment that opens on one line and
/// closes on another becomes a single space so the words on either side stay
/// apart. Only newlines inside the comment count. Unterminated comments are
/// left alone.
pub fn strip_comments(html: &str) -> String {
    let single = SINGLE_LINE_COMMENT.replace_all(html, "");
    MULTI_LINE_COMMENT.replace_all(&single, " ").into_owned()
}
