//! Heuristic resume parser — turns extracted resume text into a `ResumeRecord`.
//!
//! Single pass over normalized lines. One `Section` value is the only state;
//! header lines switch it and every other line goes to that section's handler.
//! Experience, education and project entries stay open until the next entry,
//! the next header, or the end of input closes them.
//!
//! The parser is total: any input yields a record, possibly almost empty.

use chrono::{Datelike, NaiveDate, Utc};
use tracing::debug;

use crate::models::resume::{
    Achievement, Certification, Education, Experience, Language, Project, ResumeRecord,
};

use super::contact::{
    find_email, find_location, find_name, find_phone, find_social_links, find_title, with_scheme,
};
use super::normalize::{normalize_lines, strip_bullet, trim_separators, word_count};
use super::patterns::{
    CERTIFICATION_SEPARATOR, DATE_RANGE, EDUCATION_MARKER, EDUCATION_SEPARATOR, GPA,
    INSTITUTION, LANGUAGE_SEPARATOR, SENTENCE_MARKER, SINGLE_DATE, SKILL_SEPARATOR, URL_LIKE,
    YEAR,
};
use super::sections::{
    detect_header, detect_header_prefix, split_inline_header, split_leading_header, Section,
    MAX_HEADER_CHARS,
};

const DEFAULT_EDUCATION_YEAR: &str = "2020";
const ACHIEVEMENT_TITLE: &str = "Achievement";
const LANGUAGE_PROFICIENCY: &str = "Professional";

/// Lines starting with these never open a project.
const PROJECT_SKIP_PREFIXES: &[&str] = &["using", "tools", "objective", "summary"];

/// Technology words that show up under "Languages" but are not spoken languages.
const LANGUAGE_BLOCKLIST: &[&str] = &[
    "web", "react", "html", "css", "javascript", "typescript", "js", "ts", "python", "java",
    "sql", "node", "nodejs", "angular", "vue", "php", "ruby", "rust", "golang", "c", "c++",
    "c#", "swift", "kotlin", "scala", "bash", "shell", "programming", "framework",
    "frameworks", "development", "api", "git", "docker", "aws", "mongodb", "tailwind",
];

/// Ordered role/company separators tried on an experience heading.
const ROLE_SEPARATORS: &[&str] = &[" at ", " @ ", " | ", " - ", " – ", " — ", ", "];

/// Parses resume text, using today's date for undated certifications.
pub fn parse_resume_text(text: &str) -> ResumeRecord {
    parse_resume_text_at(text, Utc::now().date_naive())
}

/// Parses resume text with an explicit "today" so results are reproducible.
pub fn parse_resume_text_at(text: &str, today: NaiveDate) -> ResumeRecord {
    let lines = normalize_lines(text);

    let mut parser = SectionParser::new(today.year());
    for line in &lines {
        parser.feed(line);
    }
    let mut record = parser.finish();

    record.social_links = find_social_links(text);
    record.finalize();

    let full_name = find_name(&lines).unwrap_or_default();
    let title = find_title(&lines)
        .or_else(|| {
            record
                .experience
                .first()
                .map(|e| e.position.clone())
                .filter(|p| !p.is_empty())
        })
        .unwrap_or_default();

    let info = &mut record.personal_info;
    info.email = find_email(text).unwrap_or_default();
    info.phone = find_phone(text).unwrap_or_default();
    info.location = find_location(&lines, &full_name).unwrap_or_default();
    info.full_name = full_name;
    info.title = title;

    debug!(
        "Parsed {} lines: {} experience, {} education, {} skills, {} projects",
        lines.len(),
        record.experience.len(),
        record.education.len(),
        record.skills.len(),
        record.projects.len()
    );

    record
}

// ────────────────────────────────────────────────────────────────────────────
// Section state machine
// ────────────────────────────────────────────────────────────────────────────

/// An entry still collecting lines.
enum OpenEntry {
    Experience {
        entry: Experience,
        description: Vec<String>,
    },
    Education {
        entry: Education,
        details: Vec<String>,
    },
    Project {
        entry: Project,
        description: Vec<String>,
    },
}

impl OpenEntry {
    fn close_into(self, record: &mut ResumeRecord) {
        match self {
            OpenEntry::Experience {
                mut entry,
                description,
            } => {
                entry.description = description.join(" ");
                record.experience.push(entry);
            }
            OpenEntry::Education { mut entry, details } => {
                let mut all = Vec::with_capacity(details.len() + 1);
                if !entry.details.is_empty() {
                    all.push(std::mem::take(&mut entry.details));
                }
                all.extend(details);
                entry.details = all.join(" ");
                record.education.push(entry);
            }
            OpenEntry::Project {
                mut entry,
                description,
            } => {
                entry.description = description.join(" ");
                record.projects.push(entry);
            }
        }
    }
}

struct SectionParser {
    section: Section,
    current_year: i32,
    record: ResumeRecord,
    summary_lines: Vec<String>,
    open: Option<OpenEntry>,
}

impl SectionParser {
    fn new(current_year: i32) -> Self {
        Self {
            section: Section::Preamble,
            current_year,
            record: ResumeRecord::default(),
            summary_lines: Vec::new(),
            open: None,
        }
    }

    fn feed(&mut self, line: &str) {
        if let Some(section) = detect_header(line) {
            self.switch_to(section);
            return;
        }
        let split = split_inline_header(line)
            .or_else(|| split_leading_header(line))
            // "Languages: Python, Go" inside Skills is a skill group, not a section change.
            .filter(|(section, _)| {
                !(self.section == Section::Skills && *section == Section::Languages)
            });
        if let Some((section, rest)) = split {
            self.switch_to(section);
            self.dispatch(rest);
            return;
        }
        self.dispatch(line);
    }

    fn finish(mut self) -> ResumeRecord {
        self.close_entry();
        self.flush_summary();
        self.record
    }

    fn switch_to(&mut self, section: Section) {
        self.close_entry();
        if self.section == Section::Summary {
            self.flush_summary();
        }
        debug!("Section {:?} -> {:?}", self.section, section);
        self.section = section;
    }

    fn close_entry(&mut self) {
        if let Some(open) = self.open.take() {
            open.close_into(&mut self.record);
        }
    }

    fn flush_summary(&mut self) {
        if self.record.personal_info.summary.is_empty() && !self.summary_lines.is_empty() {
            self.record.personal_info.summary = self.summary_lines.join(" ");
        }
        self.summary_lines.clear();
    }

    fn dispatch(&mut self, line: &str) {
        match self.section {
            Section::Preamble => {}
            Section::Summary => self.summary_line(line),
            Section::Experience => self.experience_line(line),
            Section::Education => self.education_line(line),
            Section::Skills => self.skills_line(line),
            Section::Projects => self.project_line(line),
            Section::Certifications => self.certification_line(line),
            Section::Achievements => self.achievement_line(line),
            Section::Languages => self.language_line(line),
        }
    }

    fn summary_line(&mut self, line: &str) {
        if line.chars().count() <= MAX_HEADER_CHARS {
            if let Some(section) = detect_header_prefix(line) {
                self.switch_to(section);
                return;
            }
        }
        self.summary_lines.push(line.to_string());
    }

    fn experience_line(&mut self, line: &str) {
        if let Some(text) = strip_bullet(line) {
            if let Some(OpenEntry::Experience { description, .. }) = &mut self.open {
                if !text.is_empty() {
                    description.push(text.to_string());
                }
            }
            return;
        }

        let len = line.chars().count();
        let has_open = matches!(self.open, Some(OpenEntry::Experience { .. }));
        if YEAR.is_match(line) || (!has_open && len < 100) {
            self.close_entry();
            self.open = Some(OpenEntry::Experience {
                entry: experience_from_heading(line),
                description: Vec::new(),
            });
            return;
        }

        if let Some(OpenEntry::Experience { entry, description }) = &mut self.open {
            // Company on the line after the role, before any description.
            if entry.company.is_empty() && description.is_empty() && len < 60 && !line.ends_with('.')
            {
                entry.company = trim_separators(line).to_string();
            } else {
                description.push(line.to_string());
            }
        }
    }

    fn education_line(&mut self, line: &str) {
        if let Some(text) = strip_bullet(line) {
            if let Some(OpenEntry::Education { details, .. }) = &mut self.open {
                if !text.is_empty() {
                    details.push(text.to_string());
                }
            }
            return;
        }

        if YEAR.is_match(line) || EDUCATION_MARKER.is_match(line) {
            self.close_entry();
            self.open = Some(OpenEntry::Education {
                entry: education_from_line(line),
                details: Vec::new(),
            });
            return;
        }

        if let Some(OpenEntry::Education { details, .. }) = &mut self.open {
            details.push(line.to_string());
        }
    }

    fn skills_line(&mut self, line: &str) {
        let text = strip_bullet(line).unwrap_or(line);
        let list = text.split_once(':').map_or(text, |(_, rest)| rest);
        self.record.skills.extend(
            SKILL_SEPARATOR
                .split(list)
                .map(str::trim)
                .filter(|candidate| is_skill(candidate))
                .map(String::from),
        );
    }

    fn project_line(&mut self, line: &str) {
        if let Some(text) = strip_bullet(line) {
            if let Some(OpenEntry::Project { description, .. }) = &mut self.open {
                if !text.is_empty() {
                    description.push(text.to_string());
                }
            }
            return;
        }

        if let Some(found) = URL_LIKE.find(line) {
            if let Some(OpenEntry::Project { entry, description }) = &mut self.open {
                if entry.url.is_empty() {
                    entry.url = with_scheme(found.as_str());
                } else {
                    description.push(line.to_string());
                }
            }
            return;
        }

        let lower = line.to_lowercase();
        let words = word_count(line);
        if (2..=8).contains(&words) && !PROJECT_SKIP_PREFIXES.iter().any(|p| lower.starts_with(*p))
        {
            self.close_entry();
            self.open = Some(OpenEntry::Project {
                entry: project_from_title(line),
                description: Vec::new(),
            });
            return;
        }

        if let Some(OpenEntry::Project { description, .. }) = &mut self.open {
            description.push(line.to_string());
        }
    }

    fn certification_line(&mut self, line: &str) {
        if strip_bullet(line).is_some() || line.chars().count() <= 3 {
            return;
        }

        let date = YEAR
            .find(line)
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| self.current_year.to_string());
        let without_dates = SINGLE_DATE.replace_all(line, " ");
        let mut parts = CERTIFICATION_SEPARATOR
            .split(&without_dates)
            .map(trim_separators)
            .filter(|part| !part.is_empty());

        let name = parts.next().unwrap_or_default().to_string();
        let issuer = parts.next().unwrap_or_default().to_string();
        self.record.certifications.push(Certification { name, issuer, date });
    }

    fn achievement_line(&mut self, line: &str) {
        if let Some(text) = strip_bullet(line) {
            if text.chars().count() > 10 {
                self.record.achievements.push(Achievement {
                    title: ACHIEVEMENT_TITLE.to_string(),
                    description: text.to_string(),
                });
            }
        }
    }

    fn language_line(&mut self, line: &str) {
        let text = strip_bullet(line).unwrap_or(line);
        self.record.languages.extend(
            LANGUAGE_SEPARATOR
                .split(text)
                .map(str::trim)
                .filter(|candidate| {
                    !candidate.is_empty()
                        && candidate.chars().count() <= 40
                        && !is_technology_term(candidate)
                })
                .map(|name| Language {
                    name: name.to_string(),
                    proficiency: LANGUAGE_PROFICIENCY.to_string(),
                }),
        );
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Line classifiers
// ────────────────────────────────────────────────────────────────────────────

/// Splits an experience heading into position, company and duration.
fn experience_from_heading(line: &str) -> Experience {
    let found = DATE_RANGE.find(line).or_else(|| SINGLE_DATE.find(line));
    let (duration, rest) = match found {
        Some(m) => (
            m.as_str().trim().to_string(),
            format!("{} {}", &line[..m.start()], &line[m.end()..]),
        ),
        None => (String::new(), line.to_string()),
    };

    let rest = trim_separators(&rest);
    let (position, company) = ROLE_SEPARATORS
        .iter()
        .find_map(|sep| rest.split_once(*sep))
        .map_or((rest, ""), |(left, right)| (left, right));

    Experience {
        position: trim_separators(position).to_string(),
        company: trim_separators(company).to_string(),
        duration,
        description: String::new(),
    }
}

/// Builds an education entry from its opening line.
///
/// Year: first and last 4-digit years as a range, the single year if only one,
/// otherwise `DEFAULT_EDUCATION_YEAR`.
fn education_from_line(line: &str) -> Education {
    let years: Vec<&str> = YEAR.find_iter(line).map(|m| m.as_str()).collect();
    let year = match (years.first(), years.last()) {
        (Some(first), Some(last)) if first != last => format!("{first} - {last}"),
        (Some(first), _) => first.to_string(),
        _ => DEFAULT_EDUCATION_YEAR.to_string(),
    };

    let without_ranges = DATE_RANGE.replace_all(line, " ");
    let without_dates = SINGLE_DATE.replace_all(&without_ranges, " ");
    let parts: Vec<&str> = EDUCATION_SEPARATOR
        .split(&without_dates)
        .map(trim_separators)
        .filter(|part| !part.is_empty())
        .collect();

    let (gpa_parts, parts): (Vec<&str>, Vec<&str>) =
        parts.into_iter().partition(|part| GPA.is_match(part));

    let school = parts.iter().copied().find(|p| INSTITUTION.is_match(p));
    let rest: Vec<&str> = parts
        .iter()
        .copied()
        .filter(|p| Some(*p) != school)
        .collect();
    let degree = rest
        .iter()
        .copied()
        .find(|p| EDUCATION_MARKER.is_match(p))
        .or_else(|| rest.first().copied());

    let mut details: Vec<&str> = rest
        .iter()
        .copied()
        .filter(|p| Some(*p) != degree)
        .collect();
    details.extend(gpa_parts);

    Education {
        degree: degree.unwrap_or_default().to_string(),
        school: school.unwrap_or_default().to_string(),
        year,
        details: details.join(", "),
    }
}

/// `Name | Rust, Tokio` → name plus technologies.
fn project_from_title(line: &str) -> Project {
    let (name, technologies) = match line.split_once(" | ") {
        Some((name, techs)) => (
            name,
            techs
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from)
                .collect(),
        ),
        None => (line, Vec::new()),
    };
    Project {
        name: trim_separators(name).to_string(),
        technologies,
        ..Default::default()
    }
}

/// Short, list-like, and not a sentence.
fn is_skill(candidate: &str) -> bool {
    let len = candidate.chars().count();
    (1..40).contains(&len)
        && word_count(candidate) <= 4
        && !candidate.ends_with('.')
        && !SENTENCE_MARKER.is_match(candidate)
}

fn is_technology_term(candidate: &str) -> bool {
    candidate
        .to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '+' || c == '#'))
        .any(|token| LANGUAGE_BLOCKLIST.contains(&token))
}
