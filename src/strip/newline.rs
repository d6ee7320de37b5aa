/// Returns true if the provided input has one or more newlines (`\n` or `\r`).
pub fn has_newline(input: &str) -> bool {
    input.contains(['\n', '\r'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_line_breaks() {
        assert!(has_newline("a\nb"));
        assert!(has_newline("a\r\nb\nc"));
        assert!(has_newline("\r"));
        assert!(!has_newline("ab"));
        assert!(!has_newline(""));
    }
}
