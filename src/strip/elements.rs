use regex::Regex;

use crate::error::{CleanError, CleanResult};

/// Removes one named element, its opening tag through its closing tag, from
/// HTML text.
///
/// Occurrences that stay on one line are replaced with an empty string.
/// Occurrences that cross a line break are replaced with a single space.
/// Nested elements of the same name are not balanced: a match ends at the
/// first closing tag.
#[derive(Debug, Clone)]
pub struct ElementStripper {
    name: String,
    single_line: Regex,
    multi_line: Regex,
}

impl ElementStripper {
    pub fn new(name: &str) -> CleanResult<Self> {
        let invalid_char = |c: char| c.is_whitespace() || matches!(c, '<' | '>' | '/');
        if name.is_empty() || name.contains(invalid_char) {
            return Err(CleanError::InvalidElementName(name.to_string()));
        }

        let escaped = regex::escape(name);
        // `[^\S\r\n]` is any whitespace except a line break.
        let single_line = format!(
            r"<{escaped}(?:(?:[^\S\r\n]|/)[^>\r\n]*)?>[^\r\n]*?</{escaped}[^\S\r\n]*>"
        );
        let multi_line = format!(r"(?s)<{escaped}(?:[\s/][^>]*)?>.*?</{escaped}\s*>");

        Ok(Self {
            name: name.to_string(),
            single_line: compile(name, &single_line)?,
            multi_line: compile(name, &multi_line)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn strip(&self, html: &str) -> String {
        let single = self.single_line.replace_all(html, "");
        self.multi_line.replace_all(&single, " ").into_owned()
    }
}

fn compile(name: &str, pattern: &str) -> CleanResult<Regex> {
    Regex::new(pattern).map_err(|source| CleanError::Pattern {
        name: name.to_string(),
        source,
    })
}
