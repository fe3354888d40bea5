use super::{error, Result};
use snafu::ensure;

/// Classification of a single newline-stripped input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'source> {
    /// Whitespace-only line
    Blank,
    /// Line whose first non-whitespace character is '#'
    Comment,
    /// `[name]` header with the trimmed section name
    Section(&'source str),
    /// `key = value` assignment, split on the first '=' so values may
    /// themselves contain '='
    KeyValue(&'source str, &'source str),
}

/// Classify one raw line, trimming surrounding whitespace first.
///
/// Blank and comment checks run before the bracket and equals checks so a
/// commented-out header like `# [old]` stays a comment. A line that opens
/// with `[` must close with `]` around a non-empty name; a line containing
/// `=` must have a non-empty key and value after trimming. Anything else is
/// a syntax error.
pub fn classify(raw: &str, line: usize) -> Result<Line<'_>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Line::Blank);
    }
    if trimmed.starts_with('#') {
        return Ok(Line::Comment);
    }
    if let Some(rest) = trimmed.strip_prefix('[') {
        let name = rest.strip_suffix(']').map(str::trim);
        return match name {
            Some(name) if !name.is_empty() => Ok(Line::Section(name)),
            _ => error::MalformedSectionSnafu {
                line,
                text: trimmed,
            }
            .fail(),
        };
    }
    if let Some((key, value)) = trimmed.split_once('=') {
        let (key, value) = (key.trim(), value.trim());
        ensure!(!key.is_empty(), error::MissingKeySnafu { line });
        ensure!(!value.is_empty(), error::MissingValueSnafu { line });
        return Ok(Line::KeyValue(key, value));
    }
    error::SyntaxSnafu {
        line,
        text: trimmed,
    }
    .fail()
}

#[cfg(test)]
mod test {
    use super::{classify, Line};
    use crate::syn::error::Error;
    use assert_matches::assert_matches;

    #[test]
    fn recognized_lines() {
        for (case, expected) in [
            ("", Line::Blank),
            ("   \t ", Line::Blank),
            ("# a comment", Line::Comment),
            ("   # indented comment", Line::Comment),
            ("# [old]", Line::Comment),
            ("#key = value", Line::Comment),
            ("[Profile]", Line::Section("Profile")),
            ("  [Profile]  ", Line::Section("Profile")),
            ("[ spaced name ]", Line::Section("spaced name")),
            ("key = value", Line::KeyValue("key", "value")),
            ("key=value", Line::KeyValue("key", "value")),
            ("  key =   value  ", Line::KeyValue("key", "value")),
            ("url = http://x?a=b", Line::KeyValue("url", "http://x?a=b")),
            ("eq = a=b=c", Line::KeyValue("eq", "a=b=c")),
        ] {
            assert_eq!(classify(case, 1).unwrap(), expected, "case: {case:?}");
        }
    }

    #[test]
    fn malformed_sections() {
        for case in ["[Profile", "[]", "[  ]", "[Profile] trailing", "["] {
            assert_matches!(
                classify(case, 3),
                Err(Error::MalformedSection { line: 3, .. }),
                "case: {case:?}"
            );
        }
    }

    #[test]
    fn missing_key_and_value() {
        assert_matches!(classify(" = value", 2), Err(Error::MissingKey { line: 2 }));
        assert_matches!(classify("=value", 2), Err(Error::MissingKey { line: 2 }));
        assert_matches!(classify("key = ", 4), Err(Error::MissingValue { line: 4 }));
        assert_matches!(classify("key =", 4), Err(Error::MissingValue { line: 4 }));
        // The key side is checked first when both are empty
        assert_matches!(classify("=", 5), Err(Error::MissingKey { line: 5 }));
    }

    #[test]
    fn unrecognized_syntax() {
        for case in ["free text", "no-equals-here", "]backwards["] {
            assert_matches!(
                classify(case, 7),
                Err(Error::Syntax { line: 7, .. }),
                "case: {case:?}"
            );
        }
    }
}
