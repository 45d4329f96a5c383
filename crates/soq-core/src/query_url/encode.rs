//! Space/newline percent-encoding pass.

/// Replaces every space, then every newline, with `%20`.
///
/// Substitutions run sequentially over the whole string in that fixed
/// order. A `%20` inserted earlier contains no literal space, so the pass
/// is idempotent: running it twice yields the same string as once.
///
/// Nothing else is encoded; this is deliberately not a general URL encoder.
pub fn encode_spaces_and_newlines(raw: &str) -> String {
    let mut out = raw.replace(' ', "%20");
    out = out.replace('\n', "%20");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces() {
        assert_eq!(encode_spaces_and_newlines("a b c"), "a%20b%20c");
    }

    #[test]
    fn newlines() {
        assert_eq!(encode_spaces_and_newlines("a\nb\n"), "a%20b%20");
    }

    #[test]
    fn mixed() {
        assert_eq!(encode_spaces_and_newlines(" \n "), "%20%20%20");
    }

    #[test]
    fn idempotent() {
        let once = encode_spaces_and_newlines("SELECT *\nwhere x > 1");
        let twice = encode_spaces_and_newlines(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn leaves_other_chars_alone() {
        assert_eq!(
            encode_spaces_and_newlines("a&b#c%d?e=füü"),
            "a&b#c%d?e=füü"
        );
    }

    #[test]
    fn empty() {
        assert_eq!(encode_spaces_and_newlines(""), "");
    }
}
