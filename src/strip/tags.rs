use std::sync::LazyLock;

use regex::Regex;

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("TAG: hardcoded regex is valid"));

/// Replaces all HTML tags with an empty string. For example, `A<b>B</b>C`
/// becomes `ABC`. A tag may span several lines; a `<` with no later `>` is
/// kept as is.
pub fn strip_tags(html: &str) -> String {
    TAG.replace_all(html, "").into_owned()
}
