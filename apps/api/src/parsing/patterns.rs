//! Compiled regular expressions shared by the resume text heuristics.

use std::sync::LazyLock;

use regex::Regex;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern:?}: {e}"))
}

const MONTH: &str = r"(?:jan|feb|mar|apr|may|jun|jul|aug|sep|sept|oct|nov|dec)[a-z]*\.?";

/// Section keyword (optionally qualified) that should begin its own line.
pub static SECTION_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"\b(?:(?:Technical|Professional|Work|Personal|Key|Core|Academic|Relevant|Programming|Spoken|TECHNICAL|PROFESSIONAL|WORK|PERSONAL|KEY|CORE|ACADEMIC|RELEVANT|PROGRAMMING|SPOKEN)\s+)?(?:Summary|Education|Experience|Projects|Certifications|Achievements|Skills|Languages|SUMMARY|EDUCATION|EXPERIENCE|PROJECTS|CERTIFICATIONS|ACHIEVEMENTS|SKILLS|LANGUAGES)\b",
    )
});

/// Bullet glyphs that start a new line wherever they appear.
pub static BULLET_BREAK: LazyLock<Regex> = LazyLock::new(|| compile(r"\s*[•●▪◦‣∙■►]"));

/// Bullet marker at the start of a line, including `-`, `–` and `*` followed by a space.
pub static BULLET_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^(?:[•●▪◦‣∙■►]|[*\-–](?:\s|$))\s*"));

pub static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| compile(r"[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}"));

pub static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?:\+\d{1,3}[\s.\-]?)?(?:\(\d{3}\)|\d{3})[\s.\-]?\d{3}[\s.\-]?\d{4}\b")
});

pub static LINKEDIN: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)(?:https?://)?(?:[a-z]{2,3}\.)?linkedin\.com/in/[A-Za-z0-9_\-%]+/?")
});

pub static GITHUB: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)(?:https?://)?(?:www\.)?github\.com/[A-Za-z0-9_\-]+/?"));

pub static URL_LIKE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)(?:https?://|www\.)\S+|\b[a-z0-9\-]+\.(?:com|io|dev|app|org|net|me)(?:/\S*)?\b")
});

pub static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| compile(r"\d{3,}"));

pub static YEAR: LazyLock<Regex> = LazyLock::new(|| compile(r"\b(?:19|20)\d{2}\b"));

/// `Jan 2019 - Present`, `2018 – 2021`, `03/2020 to 06/2022`
pub static DATE_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"(?i)(?:{MONTH}\s+|\d{{1,2}}/)?(?:19|20)\d{{2}}\s*(?:-|–|—|to)\s*(?:(?:{MONTH}\s+|\d{{1,2}}/)?(?:19|20)\d{{2}}|present|current|now|date)\b"
    ))
});

pub static SINGLE_DATE: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(r"(?i)(?:{MONTH}\s+|\d{{1,2}}/)?\b(?:19|20)\d{{2}}\b"))
});

pub static TITLE_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\b(?:software|developer|engineer|designer|manager|analyst|architect|lead|student)s?\b",
    )
});

/// Words and degree abbreviations that mark an education line.
pub static EDUCATION_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\b(?:university|college|institute|school|academy|polytechnic|bachelor'?s?|master'?s?|diploma|associate'?s?|ph\.?\s?d\.?|mba|b\.?(?:s|a|sc|tech|eng|com)\.?|m\.?(?:s|sc|tech|eng|com)\.?|c?gpa)(?:\b|$)",
    )
});

pub static INSTITUTION: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\b(?:university|college|institute|school|academy|polytechnic)\b")
});

pub static GPA: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\bc?gpa\b"));

/// Verb-like markers that make a skill candidate read as a sentence.
pub static SENTENCE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\b(?:is|are|was|were|am|have|has|had|will|developed|implemented|worked|managed|created|built|designed|led|responsible|using)\b",
    )
});

pub static SKILL_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| compile(r"[,;|&]"));

pub static LANGUAGE_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| compile(r"[,|]"));

/// Splits an education line into degree / school / extra parts.
pub static EDUCATION_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\s*(?:,|\||\s[-–—]\s|\s(?:at|from)\s)\s*"));

pub static CERTIFICATION_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\s*\|\s*|\s*,\s*|\s{2,}"));

/// `City, ST` or `City Name, Country`
pub static LOCATION: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^[A-Z][A-Za-z.\-]+(?:\s[A-Z][A-Za-z.\-]+)*,\s*[A-Z][A-Za-z]+(?:\s[A-Z][A-Za-z]+)*$")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        for re in [
            &SECTION_BREAK,
            &BULLET_BREAK,
            &BULLET_PREFIX,
            &EMAIL,
            &PHONE,
            &LINKEDIN,
            &GITHUB,
            &URL_LIKE,
            &DIGIT_RUN,
            &YEAR,
            &DATE_RANGE,
            &SINGLE_DATE,
            &TITLE_KEYWORD,
            &EDUCATION_MARKER,
            &INSTITUTION,
            &GPA,
            &SENTENCE_MARKER,
            &SKILL_SEPARATOR,
            &LANGUAGE_SEPARATOR,
            &EDUCATION_SEPARATOR,
            &CERTIFICATION_SEPARATOR,
            &LOCATION,
        ] {
            LazyLock::force(re);
        }
    }

    #[test]
    fn test_date_range_variants() {
        for text in [
            "Jan 2019 - Present",
            "2018 – 2021",
            "03/2020 to 06/2022",
            "September 2017 - May 2019",
        ] {
            assert!(DATE_RANGE.is_match(text), "{text}");
        }
    }

    #[test]
    fn test_phone_ignores_year_ranges() {
        assert!(PHONE.find("2019-2021").is_none());
        assert_eq!(
            PHONE.find("Call +1 (555) 123-4567 today").map(|m| m.as_str()),
            Some("+1 (555) 123-4567")
        );
    }

    #[test]
    fn test_education_marker_degrees() {
        assert!(EDUCATION_MARKER.is_match("B.S. Computer Science"));
        assert!(EDUCATION_MARKER.is_match("MBA, Wharton"));
        assert!(EDUCATION_MARKER.is_match("GPA: 3.8"));
        assert!(!EDUCATION_MARKER.is_match("Built a basic web app"));
    }
}
