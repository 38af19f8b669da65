use regex::Captures;

use super::patterns::{BULLET_BREAK, BULLET_PREFIX, SECTION_BREAK};

/// Splits extracted resume text into trimmed, non-empty lines.
///
/// PDF extraction tends to run sections and bullets together on one line, so a
/// break is inserted before every recognized section keyword and bullet glyph
/// first.
pub fn normalize_lines(text: &str) -> Vec<String> {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    let text = SECTION_BREAK.replace_all(&text, |caps: &Captures| format!("\n{}", &caps[0]));
    let text = BULLET_BREAK.replace_all(&text, |caps: &Captures| {
        format!("\n{}", caps[0].trim_start())
    });

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Returns the text after a leading bullet marker, or `None` for non-bullet lines.
pub fn strip_bullet(line: &str) -> Option<&str> {
    BULLET_PREFIX
        .find(line)
        .map(|m| line[m.end()..].trim())
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Trims whitespace and the separator punctuation left behind after cutting dates out.
pub fn trim_separators(text: &str) -> &str {
    text.trim_matches(|c: char| {
        c.is_whitespace() || matches!(c, '|' | ',' | '-' | '–' | '—' | '(' | ')' | '[' | ']' | '·' | ':' | '@')
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breaks_before_section_keywords() {
        let lines = normalize_lines("Jane Doe Summary Builder of things Skills Rust, Go");
        assert_eq!(
            lines,
            vec!["Jane Doe", "Summary Builder of things", "Skills Rust, Go"]
        );
    }

    #[test]
    fn test_qualified_header_stays_together() {
        let lines = normalize_lines("Jane Doe\nTechnical Skills\nRust");
        assert_eq!(lines, vec!["Jane Doe", "Technical Skills", "Rust"]);
    }

    #[test]
    fn test_lowercase_keywords_do_not_break() {
        let lines = normalize_lines("Five years of experience with skills in Rust");
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_breaks_before_bullets() {
        let lines = normalize_lines("Acme 2019 • Shipped search • Cut costs");
        assert_eq!(lines, vec!["Acme 2019", "• Shipped search", "• Cut costs"]);
    }

    #[test]
    fn test_drops_blank_lines_and_trims() {
        let lines = normalize_lines("  a line  \r\n\r\n\t\n  another ");
        assert_eq!(lines, vec!["a line", "another"]);
    }

    #[test]
    fn test_strip_bullet() {
        assert_eq!(strip_bullet("• Shipped it"), Some("Shipped it"));
        assert_eq!(strip_bullet("- Shipped it"), Some("Shipped it"));
        assert_eq!(strip_bullet("* Shipped it"), Some("Shipped it"));
        assert_eq!(strip_bullet("-2019"), None);
        assert_eq!(strip_bullet("Shipped it"), None);
    }

    #[test]
    fn test_trim_separators() {
        assert_eq!(trim_separators(" | Acme Corp, "), "Acme Corp");
        assert_eq!(trim_separators("Engineer ( )"), "Engineer");
    }
}
