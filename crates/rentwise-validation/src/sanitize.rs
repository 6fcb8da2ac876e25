//! Minimal free-text scrubbing applied before values leave the client.

/// Strip every `<` and `>` and surrounding whitespace from `text`.
///
/// This only removes angle brackets. Quotes, ampersands, URLs, and script
/// contexts pass through untouched, so it is not an HTML sanitiser.
/// Whitespace is trimmed after the brackets are removed, which keeps the
/// function idempotent for input such as `"< a"`.
#[must_use]
pub fn sanitize_input(text: &str) -> String {
    let stripped: String = text.chars().filter(|ch| !matches!(ch, '<' | '>')).collect();
    stripped.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_angle_brackets_and_trims() {
        assert_eq!(
            sanitize_input("  <script>alert(1)</script> "),
            "scriptalert(1)/script"
        );
        assert_eq!(sanitize_input("Flat 4B"), "Flat 4B");
        assert_eq!(sanitize_input(""), "");
        assert_eq!(sanitize_input("<<>>"), "");
    }

    #[test]
    fn leaves_other_markup_characters() {
        assert_eq!(
            sanitize_input("Tom & \"Jerry\" 'home'"),
            "Tom & \"Jerry\" 'home'"
        );
    }

    #[test]
    fn is_idempotent_when_brackets_hide_whitespace() {
        for input in ["< a", "b >", " <> c <> ", "x<y>z", "\t<\n>\t"] {
            let once = sanitize_input(input);
            assert_eq!(sanitize_input(&once), once, "input {input:?}");
            assert!(!once.contains(['<', '>']));
        }
    }
}
