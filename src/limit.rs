//! Output ceiling shared by the listing and search tools.

/// Result of applying a ceiling to a sequence of output items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitedOutput {
    pub text: String,
    pub truncated: bool,
    pub omitted: usize,
}

/// Join up to `ceiling` items with newlines. When the input is larger, the
/// output is the first `ceiling` items and `omitted` reports how many were
/// dropped — callers must surface that count, truncation is never silent.
pub fn join_limited(items: &[String], ceiling: usize) -> LimitedOutput {
    if items.len() <= ceiling {
        LimitedOutput {
            text: items.join("\n"),
            truncated: false,
            omitted: 0,
        }
    } else {
        LimitedOutput {
            text: items[..ceiling].join("\n"),
            truncated: true,
            omitted: items.len() - ceiling,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("item{i}")).collect()
    }

    #[test]
    fn under_the_ceiling_passes_through() {
        let out = join_limited(&items(3), 5);
        assert_eq!(out.text, "item0\nitem1\nitem2");
        assert!(!out.truncated);
        assert_eq!(out.omitted, 0);
    }

    #[test]
    fn at_the_ceiling_is_not_truncated() {
        let out = join_limited(&items(5), 5);
        assert!(!out.truncated);
        assert_eq!(out.omitted, 0);
    }

    #[test]
    fn over_the_ceiling_reports_the_omitted_count() {
        let out = join_limited(&items(7), 5);
        assert!(out.truncated);
        assert_eq!(out.omitted, 2);
        assert_eq!(out.text.lines().count(), 5);
    }

    #[test]
    fn empty_input_yields_empty_text() {
        let out = join_limited(&[], 5);
        assert_eq!(out.text, "");
        assert!(!out.truncated);
    }
}
