//! Best-effort scrubbing of user input bound for SQL.
//!
//! # Design Decisions
//! - Defense in depth only; parameterized queries remain the primary control
//! - Each denylisted pattern is removed in a single, non-recursive pass,
//!   so nested input such as `uniunionon` leaves `union` behind
//! - Output is capped at `MAX_SANITIZED_CHARS` characters

use regex::Regex;
use std::sync::LazyLock;

/// Substrings removed from the lower-cased input, in removal order.
pub const DANGEROUS_PATTERNS: [&str; 11] = [
    "'", "\"", ";", "--", "/*", "*/", "xp_", "sp_", "union", "select", "drop",
];

/// Maximum length of sanitized output, in characters.
pub const MAX_SANITIZED_CHARS: usize = 100;

static DISALLOWED_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^a-zA-Z0-9\s\-_.@]").expect("disallowed character pattern is valid")
});

/// Scrub `input` of common SQL injection fragments.
pub fn sanitize_sql_input(input: &str) -> String {
    let mut sanitized = input.to_lowercase();
    for pattern in DANGEROUS_PATTERNS {
        if sanitized.contains(pattern) {
            sanitized = sanitized.replace(pattern, "");
        }
    }

    let filtered = DISALLOWED_CHARS.replace_all(&sanitized, "");
    let output: String = filtered.chars().take(MAX_SANITIZED_CHARS).collect();

    if output != input {
        tracing::debug!(
            input_len = input.len(),
            output_len = output.len(),
            "Input altered by sanitizer"
        );
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only_allowed(s: &str) -> bool {
        s.chars().all(|c| {
            c.is_ascii_alphanumeric() || c.is_whitespace() || matches!(c, '-' | '_' | '.' | '@')
        })
    }

    #[test]
    fn test_classic_injection() {
        let out = sanitize_sql_input("'; DROP TABLE users;--");
        assert_eq!(out, "  table users");
        assert!(!out.contains('\''));
        assert!(!out.contains(';'));
        assert!(!out.contains("--"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(sanitize_sql_input(""), "");
    }

    #[test]
    fn test_plain_input_is_lowercased() {
        assert_eq!(sanitize_sql_input("Alice.Smith@Example.com"), "alice.smith@example.com");
    }

    #[test]
    fn test_comment_markers_removed() {
        assert_eq!(sanitize_sql_input("a/*b*/c"), "abc");
        assert_eq!(sanitize_sql_input("EXEC xp_cmdshell"), "exec cmdshell");
    }

    #[test]
    fn test_truncates_to_limit() {
        let long = "a".repeat(250);
        assert_eq!(sanitize_sql_input(&long).chars().count(), MAX_SANITIZED_CHARS);
    }

    #[test]
    fn test_truncation_counts_chars_not_bytes() {
        let input = format!("{}{}", " ".repeat(99), "\u{3000}\u{3000}");
        let out = sanitize_sql_input(&input);
        assert_eq!(out.chars().count(), MAX_SANITIZED_CHARS);
        assert!(out.ends_with('\u{3000}'));
    }

    #[test]
    fn test_strips_disallowed_characters() {
        let out = sanitize_sql_input("name=<script>alert(1)</script>");
        assert!(only_allowed(&out));
        assert_eq!(out, "namescriptalert1script");
    }

    #[test]
    fn test_single_pass_leaves_nested_patterns() {
        // Removal is one pass per pattern; nested input reassembles the keyword.
        assert_eq!(sanitize_sql_input("uniunionon"), "union");
        assert_eq!(sanitize_sql_input("seselectlect"), "select");
    }

    #[test]
    fn test_output_charset_over_varied_inputs() {
        let inputs = [
            "Robert'); DROP TABLE Students;--",
            "1 OR 1=1 /* comment */",
            "ünïcödé ☃ text\twith\nwhitespace",
            "\"quoted\" sp_who; xp_dirtree",
            "%27%20UNION%20SELECT",
        ];
        for input in inputs {
            let out = sanitize_sql_input(input);
            assert!(out.chars().count() <= MAX_SANITIZED_CHARS);
            assert!(only_allowed(&out), "unexpected characters in {out:?}");
        }
    }
}
