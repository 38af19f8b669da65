//! Job description scan — counts known skill keywords in a pasted job posting.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// A single keyword from the job description with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordEntry {
    pub keyword: String,
    pub frequency: u32,
}

/// Canonical spellings. Ambiguous words ("Go", "Excel") are left out.
const VOCABULARY: &[&str] = &[
    "Rust",
    "Python",
    "Java",
    "JavaScript",
    "TypeScript",
    "Kotlin",
    "Swift",
    "Ruby",
    "PHP",
    "Scala",
    "Golang",
    "SQL",
    "PostgreSQL",
    "MySQL",
    "MongoDB",
    "Redis",
    "GraphQL",
    "REST",
    "React",
    "Angular",
    "Vue",
    "Node.js",
    "Django",
    "Flask",
    "Spring Boot",
    "Docker",
    "Kubernetes",
    "Terraform",
    "AWS",
    "Azure",
    "GCP",
    "Linux",
    "Git",
    "CI/CD",
    "Kafka",
    "Spark",
    "Airflow",
    "Pandas",
    "PyTorch",
    "TensorFlow",
    "Machine Learning",
    "Data Analysis",
    "Tableau",
    "Power BI",
    "Figma",
    "Agile",
    "Scrum",
    "Jira",
    "SEO",
    "Salesforce",
    "HubSpot",
    "Google Analytics",
    "Microservices",
    "Distributed Systems",
];

struct VocabularyTerm {
    keyword: &'static str,
    pattern: Regex,
}

/// `\b` does not work next to `.` or `/`, so word edges are spelled out.
static TERMS: LazyLock<Vec<VocabularyTerm>> = LazyLock::new(|| {
    VOCABULARY
        .iter()
        .filter_map(|keyword| {
            let pattern = format!(
                r"(?i)(?:^|[^\w.+#/])({})(?:$|[^\w+#/])",
                regex::escape(keyword)
            );
            Regex::new(&pattern)
                .ok()
                .map(|pattern| VocabularyTerm { keyword, pattern })
        })
        .collect()
});

/// Returns the vocabulary keywords present in `text`, most frequent first;
/// ties keep the order of first appearance.
pub fn scan_job_description(text: &str) -> Vec<KeywordEntry> {
    let mut found: Vec<(usize, KeywordEntry)> = TERMS
        .iter()
        .filter_map(|term| {
            let mut first = None;
            let mut frequency = 0u32;
            let mut offset = 0;
            // resume at the keyword end so a shared separator can start the next match
            while let Some(keyword) = term
                .pattern
                .captures_at(text, offset)
                .and_then(|caps| caps.get(1))
            {
                first.get_or_insert(keyword.start());
                frequency += 1;
                offset = keyword.end();
            }
            first.map(|position| {
                (
                    position,
                    KeywordEntry {
                        keyword: term.keyword.to_string(),
                        frequency,
                    },
                )
            })
        })
        .collect();

    found.sort_by(|(pos_a, a), (pos_b, b)| {
        b.frequency.cmp(&a.frequency).then(pos_a.cmp(pos_b))
    });
    found.into_iter().map(|(_, entry)| entry).collect()
}

/// Keyword spellings only, capped at `limit`.
pub fn top_keywords(text: &str, limit: usize) -> Vec<String> {
    scan_job_description(text)
        .into_iter()
        .take(limit)
        .map(|entry| entry.keyword)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BACKEND_JD: &str = "
        Senior Backend Engineer
        You will build Rust and Python microservices on AWS.
        Requirements: 5+ years of Rust, strong SQL, Docker and Kubernetes.
        Nice to have: Kafka, experience with rust async runtimes, python tooling.
    ";

    #[test]
    fn test_counts_and_orders_by_frequency() {
        let keywords = scan_job_description(BACKEND_JD);
        assert_eq!(keywords[0].keyword, "Rust");
        assert_eq!(keywords[0].frequency, 3);
        assert_eq!(keywords[1].keyword, "Python");
        assert_eq!(keywords[1].frequency, 2);
        assert!(keywords.iter().any(|k| k.keyword == "Kafka" && k.frequency == 1));
    }

    #[test]
    fn test_ties_keep_first_appearance() {
        let keywords = scan_job_description("Docker first, then Git, then SQL.");
        let names: Vec<&str> = keywords.iter().map(|k| k.keyword.as_str()).collect();
        assert_eq!(names, vec!["Docker", "Git", "SQL"]);
    }

    #[test]
    fn test_word_boundaries() {
        // "Javascript" must not count as "Java"; "trust" must not count as "Rust"
        let keywords = scan_job_description("We trust JavaScript developers.");
        let names: Vec<&str> = keywords.iter().map(|k| k.keyword.as_str()).collect();
        assert_eq!(names, vec!["JavaScript"]);
    }

    #[test]
    fn test_punctuated_keywords() {
        let keywords = scan_job_description("Node.js services, CI/CD pipelines; node.js again");
        assert_eq!(keywords[0].keyword, "Node.js");
        assert_eq!(keywords[0].frequency, 2);
        assert!(keywords.iter().any(|k| k.keyword == "CI/CD"));
    }

    #[test]
    fn test_adjacent_occurrences_both_count() {
        let keywords = scan_job_description("SQL SQL");
        assert_eq!(keywords[0].frequency, 2);
    }

    #[test]
    fn test_empty_or_unrelated_text() {
        assert!(scan_job_description("").is_empty());
        assert!(scan_job_description("Friendly team, great snacks, café vibes").is_empty());
    }

    #[test]
    fn test_top_keywords_limit() {
        assert_eq!(top_keywords(BACKEND_JD, 2), vec!["Rust", "Python"]);
    }
}
