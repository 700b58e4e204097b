//! Glob pattern matching for ignore/exclusion lists.
//!
//! Supports `*` (any run of non-separator characters), `**` (any characters
//! including separators), `?` (exactly one character) and a trailing `/`
//! meaning "this name and everything beneath it". A pattern containing a
//! separator anywhere before its final character is matched against the full
//! relative path; every other pattern is matched against the basename only.

use regex::Regex;

use crate::error::ToolError;

enum CompiledPattern {
    /// Matched against the final path segment, at any depth.
    Basename(Regex),
    /// Matched against the whole `/`-normalized relative path.
    FullPath(Regex),
}

/// An ordered set of compiled glob patterns with any-match semantics.
///
/// Patterns are compiled once per call site and reused for every candidate
/// entry. An empty set matches nothing, which is how "no filter configured"
/// is represented.
pub struct GlobSet {
    patterns: Vec<CompiledPattern>,
}

impl GlobSet {
    pub fn compile(patterns: &[String]) -> Result<Self, ToolError> {
        let patterns = patterns
            .iter()
            .map(|p| compile_pattern(p))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Whether any pattern matches the candidate, given both its relative
    /// path and its basename. Separators in the relative path are
    /// normalized to `/` before comparison.
    pub fn matches(&self, relative_path: &str, basename: &str) -> bool {
        if self.patterns.is_empty() {
            return false;
        }
        let relative_path = relative_path.replace('\\', "/");
        self.patterns.iter().any(|pattern| match pattern {
            CompiledPattern::Basename(regex) => regex.is_match(basename),
            CompiledPattern::FullPath(regex) => regex.is_match(&relative_path),
        })
    }
}

fn compile_pattern(pattern: &str) -> Result<CompiledPattern, ToolError> {
    // "name/" means the name and everything beneath it: the trailing slash
    // drops the end anchor so any suffix matches.
    let (body, directory_form) = match pattern.strip_suffix('/') {
        Some(stripped) => (stripped, true),
        None => (pattern, false),
    };

    let mut source = String::with_capacity(body.len() + 8);
    source.push('^');
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '*' => {
                if chars.peek() == Some(&'*') {
                    chars.next();
                    source.push_str(".*");
                } else {
                    source.push_str("[^/]*");
                }
            }
            '?' => source.push('.'),
            c => source.push_str(&regex::escape(c.encode_utf8(&mut [0u8; 4]))),
        }
    }
    if !directory_form {
        source.push('$');
    }

    let regex = Regex::new(&source)
        .map_err(|e| ToolError::InvalidParams(format!("invalid glob pattern '{pattern}': {e}")))?;

    Ok(if body.contains('/') {
        CompiledPattern::FullPath(regex)
    } else {
        CompiledPattern::Basename(regex)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(patterns: &[&str]) -> GlobSet {
        let patterns: Vec<String> = patterns.iter().map(|s| s.to_string()).collect();
        GlobSet::compile(&patterns).unwrap()
    }

    #[test]
    fn empty_set_never_matches() {
        let globs = set(&[]);
        assert!(globs.is_empty());
        assert!(!globs.matches("src/main.rs", "main.rs"));
    }

    #[test]
    fn basename_pattern_matches_at_any_depth() {
        let globs = set(&["node_modules"]);
        assert!(globs.matches("node_modules", "node_modules"));
        assert!(globs.matches("src/node_modules", "node_modules"));
        assert!(!globs.matches("src/node_modules_backup", "node_modules_backup"));
    }

    #[test]
    fn path_pattern_matches_only_the_literal_relative_path() {
        let globs = set(&["src/test"]);
        assert!(globs.matches("src/test", "test"));
        assert!(!globs.matches("other/src/test", "test"));
        assert!(!globs.matches("src/tests", "tests"));
    }

    #[test]
    fn single_star_does_not_cross_separators() {
        let globs = set(&["src/*.rs"]);
        assert!(globs.matches("src/main.rs", "main.rs"));
        assert!(!globs.matches("src/bin/main.rs", "main.rs"));
    }

    #[test]
    fn double_star_crosses_separators() {
        let globs = set(&["src/**.rs"]);
        assert!(globs.matches("src/main.rs", "main.rs"));
        assert!(globs.matches("src/bin/main.rs", "main.rs"));
    }

    #[test]
    fn question_mark_matches_one_character() {
        let globs = set(&["file?.txt"]);
        assert!(globs.matches("file1.txt", "file1.txt"));
        assert!(!globs.matches("file12.txt", "file12.txt"));
        assert!(!globs.matches("file.txt", "file.txt"));
    }

    #[test]
    fn directory_form_matches_the_name_and_any_suffix() {
        let globs = set(&["build/"]);
        assert!(globs.matches("build", "build"));
        assert!(globs.matches("x/build", "build"));
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        let globs = set(&["file(1).txt"]);
        assert!(globs.matches("file(1).txt", "file(1).txt"));
        assert!(!globs.matches("file1.txt", "file1.txt"));
    }

    #[test]
    fn backslash_separators_are_normalized() {
        let globs = set(&["src/test"]);
        assert!(globs.matches("src\\test", "test"));
    }
}
