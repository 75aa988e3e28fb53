//! Record splitting and rejoining
//!
//! Input text is treated as a flat sequence of records separated by a single
//! delimiter. Newline wins when it produces more than one record; otherwise
//! the text is split on periods, whatever that yields.

/// Delimiter used to split input into records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// Records are lines
    Newline,

    /// Records are sentences (fallback)
    Period,
}

impl Delimiter {
    /// The literal separator this delimiter splits and joins on
    pub fn as_str(&self) -> &'static str {
        match self {
            Delimiter::Newline => "\n",
            Delimiter::Period => ".",
        }
    }

    fn as_char(&self) -> char {
        match self {
            Delimiter::Newline => '\n',
            Delimiter::Period => '.',
        }
    }
}

/// Split `text` into records, reporting which delimiter was used.
///
/// Never fails: empty input yields a single empty record under the period
/// fallback.
pub fn split(text: &str) -> (Vec<&str>, Delimiter) {
    let records: Vec<&str> = text.split(Delimiter::Newline.as_char()).collect();
    if records.len() > 1 {
        return (records, Delimiter::Newline);
    }

    let records: Vec<&str> = text.split(Delimiter::Period.as_char()).collect();
    (records, Delimiter::Period)
}

/// Rejoin records with the delimiter chosen at split time.
///
/// Exactly inverts [`split`] when no record content was mutated.
pub fn join<S: AsRef<str>>(records: &[S], delimiter: Delimiter) -> String {
    records
        .iter()
        .map(|r| r.as_ref())
        .collect::<Vec<_>>()
        .join(delimiter.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_prefers_newline() {
        let (records, delimiter) = split("a\nb\nc");
        assert_eq!(records, vec!["a", "b", "c"]);
        assert_eq!(delimiter, Delimiter::Newline);
    }

    #[test]
    fn test_split_falls_back_to_period() {
        let (records, delimiter) = split("one.two.three");
        assert_eq!(records, vec!["one", "two", "three"]);
        assert_eq!(delimiter, Delimiter::Period);
    }

    #[test]
    fn test_period_fallback_even_for_single_record() {
        let (records, delimiter) = split("no delimiter here");
        assert_eq!(records, vec!["no delimiter here"]);
        assert_eq!(delimiter, Delimiter::Period);
    }

    #[test]
    fn test_empty_input_yields_single_empty_record() {
        let (records, delimiter) = split("");
        assert_eq!(records, vec![""]);
        assert_eq!(delimiter, Delimiter::Period);
    }

    #[test]
    fn test_newline_wins_over_period() {
        // A single period inside a multi-line input must not flip the choice
        let (records, delimiter) = split("a.b\nc");
        assert_eq!(records, vec!["a.b", "c"]);
        assert_eq!(delimiter, Delimiter::Newline);
    }

    #[test]
    fn test_join_inverts_split() {
        for text in [
            "a\nb\nc",
            "one.two.three",
            "no delimiter here",
            "",
            "trailing\n",
            "trailing.",
            "a.b\nc.d",
        ] {
            let (records, delimiter) = split(text);
            assert_eq!(join(&records, delimiter), text);
        }
    }
}
