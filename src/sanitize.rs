/// Strip form input down to characters that are safe to interpolate into the
/// completion prompt: letters, digits, whitespace, comma, period and hyphen.
/// Everything else is removed outright, not escaped.
pub fn sanitize(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || matches!(c, ',' | '.' | '-'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_markup_and_keeps_allowed_punctuation() {
        assert_eq!(sanitize("Bench<script>1,2-3."), "Benchscript1,2-3.");
    }

    #[test]
    fn strips_quotes_braces_and_control_characters() {
        assert_eq!(sanitize(r#"{"role":"system"}"#), "rolesystem");
        assert_eq!(sanitize("a&b|c;d`e$f"), "abcdef");
    }

    #[test]
    fn keeps_whitespace_intact() {
        assert_eq!(sanitize("4 days\nper week"), "4 days\nper week");
    }

    #[test]
    fn is_idempotent() {
        for input in ["", "plain words", "<h1>x</h1>", "päß 1-2.3,", "a&b|c;d"] {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once);
        }
    }
}
