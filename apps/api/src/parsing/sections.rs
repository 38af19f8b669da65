use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::patterns::SECTION_BREAK;

/// The parser's single piece of state: which resume section the current line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// Lines before the first header (name, contact details).
    Preamble,
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    Achievements,
    Languages,
}

/// Whole-line header patterns. Order matters: "Programming Languages" is a skills header.
const HEADER_PATTERNS: &[(Section, &str)] = &[
    (
        Section::Summary,
        r"^(?:professional\s+|career\s+|executive\s+|personal\s+)?(?:summary|profile|objective|about(?:\s+me)?)$",
    ),
    (
        Section::Experience,
        r"^(?:professional\s+|work\s+|relevant\s+|employment\s+)?(?:experience|employment(?:\s+history)?|work\s+history|career\s+history)$",
    ),
    (
        Section::Education,
        r"^(?:education(?:al\s+background)?|academic\s+(?:background|qualifications)|academics|qualifications)$",
    ),
    (
        Section::Skills,
        r"^(?:(?:technical|key|core|professional)\s+)?(?:skills(?:\s*(?:&|and)\s*\w+)?|competencies|technologies|tech\s+stack|expertise)$|^programming\s+languages$",
    ),
    (
        Section::Projects,
        r"^(?:(?:personal|key|academic|selected|relevant|side)\s+)?projects$",
    ),
    (
        Section::Certifications,
        r"^(?:licenses?\s*(?:&|and)\s*)?(?:certifications?|certificates|licenses)(?:\s*(?:&|and)\s*licenses)?$",
    ),
    (
        Section::Achievements,
        r"^(?:key\s+)?(?:achievements|accomplishments|awards(?:\s*(?:&|and)\s*honors)?|honors(?:\s*(?:&|and)\s*awards)?)$",
    ),
    (Section::Languages, r"^(?:(?:spoken|foreign)\s+)?languages$"),
];

static HEADERS: LazyLock<Vec<(Section, Regex)>> = LazyLock::new(|| {
    HEADER_PATTERNS
        .iter()
        .map(|(section, pattern)| {
            let re = Regex::new(&format!("(?i){pattern}"))
                .unwrap_or_else(|e| panic!("invalid header pattern {pattern:?}: {e}"));
            (*section, re)
        })
        .collect()
});

/// Leading keywords that make a summary line read as the start of another section.
const SECTION_PREFIXES: &[(&str, Section)] = &[
    ("experience", Section::Experience),
    ("work experience", Section::Experience),
    ("employment", Section::Experience),
    ("education", Section::Education),
    ("skills", Section::Skills),
    ("technical skills", Section::Skills),
    ("projects", Section::Projects),
    ("certifications", Section::Certifications),
    ("achievements", Section::Achievements),
    ("awards", Section::Achievements),
    ("languages", Section::Languages),
];

/// Longest line still considered a header.
pub const MAX_HEADER_CHARS: usize = 40;

/// Matches a complete line (optional trailing colon) against the section headers.
pub fn detect_header(line: &str) -> Option<Section> {
    let candidate = line.trim().trim_end_matches(':').trim();
    if candidate.is_empty() || candidate.chars().count() > MAX_HEADER_CHARS {
        return None;
    }
    HEADERS
        .iter()
        .find(|(_, re)| re.is_match(candidate))
        .map(|(section, _)| *section)
}

/// Splits `Skills: Rust, Go` into the header's section and the inline content.
pub fn split_inline_header(line: &str) -> Option<(Section, &str)> {
    let (prefix, rest) = line.split_once(':')?;
    let rest = rest.trim();
    if rest.is_empty() {
        return None;
    }
    detect_header(prefix).map(|section| (section, rest))
}

/// Splits run-together text such as `Skills Python, Go` (flattened PDF output)
/// into the header's section and the content after it. Only Title-case or
/// ALL-CAPS keywords count, and the content must start with a letter or digit.
pub fn split_leading_header(line: &str) -> Option<(Section, &str)> {
    let found = SECTION_BREAK.find(line).filter(|m| m.start() == 0)?;
    let section = detect_header(found.as_str())?;
    let rest = line[found.end()..]
        .trim_start_matches(|c: char| c.is_whitespace() || c == ':')
        .trim_end();
    rest.chars()
        .next()
        .filter(|c| c.is_alphanumeric())
        .map(|_| (section, rest))
}

/// Looser check used while inside the summary: does the line open with a section keyword?
pub fn detect_header_prefix(line: &str) -> Option<Section> {
    let lower = line.trim().to_lowercase();
    SECTION_PREFIXES
        .iter()
        .filter(|(keyword, _)| {
            lower.starts_with(keyword)
                && lower[keyword.len()..]
                    .chars()
                    .next()
                    .map_or(true, |c| !c.is_alphanumeric())
        })
        .max_by_key(|(keyword, _)| keyword.len())
        .map(|(_, section)| *section)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_plain_headers() {
        assert_eq!(detect_header("Experience"), Some(Section::Experience));
        assert_eq!(detect_header("EDUCATION"), Some(Section::Education));
        assert_eq!(detect_header("Skills:"), Some(Section::Skills));
        assert_eq!(detect_header("Projects"), Some(Section::Projects));
        assert_eq!(detect_header("Certifications"), Some(Section::Certifications));
        assert_eq!(detect_header("Achievements"), Some(Section::Achievements));
        assert_eq!(detect_header("Languages"), Some(Section::Languages));
        assert_eq!(detect_header("Summary"), Some(Section::Summary));
    }

    #[test]
    fn test_detects_qualified_headers() {
        assert_eq!(detect_header("Work Experience"), Some(Section::Experience));
        assert_eq!(detect_header("Professional Summary"), Some(Section::Summary));
        assert_eq!(detect_header("Technical Skills"), Some(Section::Skills));
        assert_eq!(detect_header("Awards & Honors"), Some(Section::Achievements));
        assert_eq!(detect_header("Licenses & Certifications"), Some(Section::Certifications));
    }

    #[test]
    fn test_programming_languages_is_skills() {
        assert_eq!(detect_header("Programming Languages"), Some(Section::Skills));
        assert_eq!(detect_header("Spoken Languages"), Some(Section::Languages));
    }

    #[test]
    fn test_content_lines_are_not_headers() {
        assert_eq!(detect_header("Experience with distributed systems"), None);
        assert_eq!(detect_header("Jane Marie Doe"), None);
        assert_eq!(detect_header("Skills: Rust, Go"), None);
    }

    #[test]
    fn test_inline_header() {
        assert_eq!(
            split_inline_header("Skills: Rust, Go"),
            Some((Section::Skills, "Rust, Go"))
        );
        assert_eq!(split_inline_header("Email: jane@example.com"), None);
        assert_eq!(split_inline_header("Skills:"), None);
    }

    #[test]
    fn test_leading_header_without_colon() {
        assert_eq!(
            split_leading_header("Skills Python, Go"),
            Some((Section::Skills, "Python, Go"))
        );
        assert_eq!(
            split_leading_header("TECHNICAL SKILLS Rust"),
            Some((Section::Skills, "Rust"))
        );
        assert_eq!(
            split_leading_header("Experience Engineer at Acme"),
            Some((Section::Experience, "Engineer at Acme"))
        );
        assert_eq!(split_leading_header("skills in Rust"), None);
        assert_eq!(split_leading_header("EXPERIENCE & INTERNSHIPS"), None);
        assert_eq!(split_leading_header("Skills"), None);
        assert_eq!(split_leading_header("Senior Skills Coach"), None);
    }

    #[test]
    fn test_header_length_counts_characters() {
        let header = format!("Skills & Compétences{}", "é".repeat(15));
        assert!(header.len() > MAX_HEADER_CHARS);
        assert!(header.chars().count() <= MAX_HEADER_CHARS);
        assert_eq!(detect_header(&header), Some(Section::Skills));

        let too_long = format!("Skills & {}", "e".repeat(MAX_HEADER_CHARS));
        assert_eq!(detect_header(&too_long), None);
    }

    #[test]
    fn test_header_prefix() {
        assert_eq!(
            detect_header_prefix("EDUCATION & TRAINING"),
            Some(Section::Education)
        );
        assert_eq!(
            detect_header_prefix("Work Experience (selected)"),
            Some(Section::Experience)
        );
        assert_eq!(detect_header_prefix("Experienced engineer"), None);
    }
}
