//! Contact and identity heuristics: fields pulled from the whole text or from
//! the first few lines, independent of the section state machine.

use std::collections::BTreeMap;

use super::patterns::{DIGIT_RUN, EMAIL, GITHUB, LINKEDIN, LOCATION, PHONE, TITLE_KEYWORD, URL_LIKE};
use super::sections::detect_header;

const NAME_SCAN_LINES: usize = 10;
const TITLE_SCAN_LINES: usize = 15;

pub fn find_email(text: &str) -> Option<String> {
    EMAIL.find(text).map(|m| m.as_str().to_string())
}

pub fn find_phone(text: &str) -> Option<String> {
    PHONE.find(text).map(|m| m.as_str().trim().to_string())
}

/// LinkedIn and GitHub profile URLs, keyed by provider. Scheme-less matches get `https://`.
pub fn find_social_links(text: &str) -> BTreeMap<String, String> {
    let mut links = BTreeMap::new();
    for (provider, re) in [("linkedin", &*LINKEDIN), ("github", &*GITHUB)] {
        if let Some(m) = re.find(text) {
            links.insert(provider.to_string(), with_scheme(m.as_str()));
        }
    }
    links
}

pub(crate) fn with_scheme(url: &str) -> String {
    let url = url.trim_end_matches('/');
    if url.to_ascii_lowercase().starts_with("http") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

fn is_capitalized_word(token: &str) -> bool {
    let mut chars = token.chars();
    chars.next().is_some_and(char::is_uppercase)
        && chars.all(|c| c.is_alphabetic() || matches!(c, '\'' | '.' | '-'))
}

/// First line among the opening lines that reads like a person's name.
pub fn find_name(lines: &[String]) -> Option<String> {
    lines
        .iter()
        .take(NAME_SCAN_LINES)
        .find(|line| {
            let len = line.chars().count();
            (5..=80).contains(&len)
                && line
                    .split_whitespace()
                    .filter(|token| is_capitalized_word(token))
                    .count()
                    >= 2
                && !line.contains('@')
                && !DIGIT_RUN.is_match(line)
                && !URL_LIKE.is_match(line)
                && detect_header(line).is_none()
        })
        .cloned()
}

/// First line among the opening lines that names a professional role.
pub fn find_title(lines: &[String]) -> Option<String> {
    lines
        .iter()
        .take(TITLE_SCAN_LINES)
        .find(|line| {
            line.chars().count() <= 80 && !line.contains('@') && TITLE_KEYWORD.is_match(line)
        })
        .cloned()
}

/// "City, ST" style segment in the preamble (the lines before the first header).
pub fn find_location(lines: &[String], full_name: &str) -> Option<String> {
    lines
        .iter()
        .take(NAME_SCAN_LINES)
        .take_while(|line| detect_header(line).is_none())
        .filter(|line| line.as_str() != full_name)
        .flat_map(|line| line.split(['|', '•', '·']))
        .map(str::trim)
        .find(|segment| {
            !segment.contains('@')
                && !segment.chars().any(|c| c.is_ascii_digit())
                && !URL_LIKE.is_match(segment)
                && LOCATION.is_match(segment)
        })
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_email_first_match() {
        let text = "Contact: jane.doe+cv@example.co.uk or backup@example.com";
        assert_eq!(find_email(text).as_deref(), Some("jane.doe+cv@example.co.uk"));
        assert_eq!(find_email("no address here"), None);
    }

    #[test]
    fn test_phone() {
        assert_eq!(find_phone("Phone: 555.123.4567").as_deref(), Some("555.123.4567"));
    }

    #[test]
    fn test_social_links_get_scheme() {
        let links = find_social_links("linkedin.com/in/janedoe | https://github.com/jdoe/");
        assert_eq!(links["linkedin"], "https://linkedin.com/in/janedoe");
        assert_eq!(links["github"], "https://github.com/jdoe");
    }

    #[test]
    fn test_name_skips_contact_lines() {
        let l = lines(&["jane@example.com", "555 123 4567", "Jane Marie Doe", "Software Engineer"]);
        assert_eq!(find_name(&l).as_deref(), Some("Jane Marie Doe"));
    }

    #[test]
    fn test_name_requires_two_capitalized_words() {
        let l = lines(&["resume", "jane doe", "Jane"]);
        assert_eq!(find_name(&l), None);
    }

    #[test]
    fn test_name_not_a_header() {
        let l = lines(&["Professional Summary", "Jane Doe"]);
        assert_eq!(find_name(&l).as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_name_only_scans_first_ten_lines() {
        let mut raw = vec!["x"; 10];
        raw.push("Jane Doe");
        assert_eq!(find_name(&lines(&raw)), None);
    }

    #[test]
    fn test_title_keyword() {
        let l = lines(&["Jane Doe", "jane@example.com", "Senior Backend Engineer"]);
        assert_eq!(find_title(&l).as_deref(), Some("Senior Backend Engineer"));
    }

    #[test]
    fn test_title_rejects_email_line() {
        let l = lines(&["engineer@example.com"]);
        assert_eq!(find_title(&l), None);
    }

    #[test]
    fn test_location_from_contact_line() {
        let l = lines(&[
            "Jane Doe",
            "jane@example.com | (555) 123-4567 | Austin, TX",
            "Experience",
            "Berlin, Germany",
        ]);
        assert_eq!(find_location(&l, "Jane Doe").as_deref(), Some("Austin, TX"));
    }

    #[test]
    fn test_location_stops_at_first_header() {
        let l = lines(&["Jane Doe", "Skills", "Python, Go"]);
        assert_eq!(find_location(&l, "Jane Doe"), None);
    }
}
