//! Template generator — turns the builder form into a complete `ResumeRecord`
//! without any model call: user fields are kept, gaps are filled from the
//! profession's template set and phrased in the career level's voice.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::generation::job_description::{scan_job_description, top_keywords};
use crate::generation::templates::{templates_for, TemplateSet};
use crate::generation::tone::{level_title, voice_for, CareerLevel, LevelVoice};
use crate::models::resume::{
    dedup_skills, Achievement, Education, Experience, PersonalInfo, ResumeRecord,
};
use crate::parsing::{strip_bullet, trim_separators, with_scheme};

/// Below this many skills the template skills are appended.
const MIN_SKILLS: usize = 8;
const MIN_ACHIEVEMENTS: usize = 3;
const FILLER_BULLETS_PER_ROLE: usize = 2;
const FOCUS_KEYWORDS: usize = 3;
/// Back-filled roles are assumed to span this many years each.
const BACKFILL_SPAN_YEARS: i32 = 2;
const FALLBACK_PROFESSION: &str = "Professional";

static PARENTHESIZED: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\(([^()]*)\)"));

static TRAILING_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)[\s,|\-–—]*((?:19|20)\d{2}\s*(?:-|–|—|to)\s*(?:(?:19|20)\d{2}|present|current|now))\s*$")
});

static YEAR: LazyLock<Regex> = LazyLock::new(|| compile(r"\b(?:19|20)\d{2}\b"));

static EDUCATION_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\s+from\s+|\s+at\s+|\s*,\s*"));

static SKILL_SPLIT: LazyLock<Regex> = LazyLock::new(|| compile(r"[,;\n]"));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid generator pattern {pattern:?}: {e}"))
}

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfoInput {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum YearsOfExperience {
    #[serde(rename = "0-1")]
    UnderOne,
    #[serde(rename = "1-3")]
    OneToThree,
    #[default]
    #[serde(rename = "3-5")]
    ThreeToFive,
    #[serde(rename = "5-10")]
    FiveToTen,
    #[serde(rename = "10+")]
    TenPlus,
}

impl YearsOfExperience {
    pub fn phrase(self) -> &'static str {
        match self {
            YearsOfExperience::UnderOne => "less than a year",
            YearsOfExperience::OneToThree => "1-3 years",
            YearsOfExperience::ThreeToFive => "3-5 years",
            YearsOfExperience::FiveToTen => "5-10 years",
            YearsOfExperience::TenPlus => "10+ years",
        }
    }
}

/// Builder form submitted by the client. Every field is optional on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateRequest {
    pub personal_info: PersonalInfoInput,
    pub profession: String,
    /// One role per line, e.g. `Engineer at Acme (2019-2021)`.
    pub experience: String,
    /// One degree per line, e.g. `BSc Physics from MIT (2015)`.
    pub education: String,
    pub skills: String,
    pub achievements: String,
    pub job_description: Option<String>,
    pub years_of_experience: YearsOfExperience,
    pub career_level: CareerLevel,
}

// ────────────────────────────────────────────────────────────────────────────
// Generation
// ────────────────────────────────────────────────────────────────────────────

/// Builds a finalized record from the form. Deterministic for a given `today`.
pub fn generate_resume(request: &GenerateRequest, today: NaiveDate) -> ResumeRecord {
    let profession = match request.profession.trim() {
        "" => FALLBACK_PROFESSION,
        p => p,
    };
    let templates = templates_for(profession);
    let voice = voice_for(request.career_level);
    let job_description = request
        .job_description
        .as_deref()
        .map(str::trim)
        .filter(|jd| !jd.is_empty());

    let info = &request.personal_info;
    let mut record = ResumeRecord {
        personal_info: PersonalInfo {
            full_name: info.full_name.trim().to_string(),
            email: info.email.trim().to_string(),
            phone: info.phone.trim().to_string(),
            location: info.location.trim().to_string(),
            title: level_title(request.career_level, profession),
            summary: build_summary(request, profession, templates, &voice, job_description),
        },
        experience: build_experience(&request.experience, templates, &voice, today.year()),
        education: form_lines(&request.education)
            .map(education_from_line)
            .collect(),
        skills: build_skills(&request.skills, job_description, templates),
        achievements: build_achievements(&request.achievements, templates),
        ..ResumeRecord::default()
    };

    for (provider, url) in [("linkedin", &info.linkedin), ("github", &info.github)] {
        let url = url.trim();
        if !url.is_empty() {
            record.social_links.insert(provider.to_string(), with_scheme(url));
        }
    }

    record.finalize();
    debug!(
        "Generated {} experience, {} education, {} skills for '{profession}'",
        record.experience.len(),
        record.education.len(),
        record.skills.len()
    );
    record
}

/// Non-empty trimmed lines with any bullet marker removed.
fn form_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim)
        .map(|line| strip_bullet(line).unwrap_or(line))
        .filter(|line| !line.is_empty())
}

fn build_summary(
    request: &GenerateRequest,
    profession: &str,
    templates: &TemplateSet,
    voice: &LevelVoice,
    job_description: Option<&str>,
) -> String {
    let template = templates
        .summaries
        .get(request.career_level.index())
        .or_else(|| templates.summaries.first())
        .copied()
        .unwrap_or("{level} {profession} with {years} of experience.");

    let mut summary = template
        .replace("{level}", voice.summary_opener)
        .replace("{profession}", &profession.to_lowercase())
        .replace("{years}", request.years_of_experience.phrase());

    if let Some(jd) = job_description {
        let focus = top_keywords(jd, FOCUS_KEYWORDS);
        if !focus.is_empty() {
            summary.push_str(&format!(" Focused on {}.", join_words(&focus)));
        }
    }
    summary
}

/// `[a]` → `a`, `[a, b]` → `a and b`, `[a, b, c]` → `a, b and c`.
fn join_words(words: &[String]) -> String {
    match words {
        [] => String::new(),
        [only] => only.clone(),
        [head @ .., last] => format!("{} and {last}", head.join(", ")),
    }
}

fn build_experience(
    text: &str,
    templates: &TemplateSet,
    voice: &LevelVoice,
    current_year: i32,
) -> Vec<Experience> {
    form_lines(text)
        .enumerate()
        .map(|(index, line)| {
            let (position, company, duration) = split_experience_line(line);
            Experience {
                position,
                company,
                duration: duration.unwrap_or_else(|| backfill_duration(index, current_year)),
                description: filler_bullets(index, templates, voice),
            }
        })
        .collect()
}

/// `Engineer at Acme (2019-2021)` → (`Engineer`, `Acme`, `Some("2019-2021")`).
fn split_experience_line(line: &str) -> (String, String, Option<String>) {
    let (rest, duration) = if let Some(caps) = PARENTHESIZED.captures(line) {
        let (whole, inner) = (caps.get(0), caps.get(1));
        match (whole, inner) {
            (Some(whole), Some(inner)) if !inner.as_str().trim().is_empty() => {
                let rest = format!("{} {}", &line[..whole.start()], &line[whole.end()..]);
                (rest, Some(inner.as_str().trim().to_string()))
            }
            _ => (line.to_string(), None),
        }
    } else if let Some(range) = TRAILING_RANGE.captures(line).and_then(|caps| {
        let whole = caps.get(0)?;
        Some((whole.start(), caps.get(1)?.as_str().to_string()))
    }) {
        (line[..range.0].to_string(), Some(range.1))
    } else {
        (line.to_string(), None)
    };

    // ASCII lowering keeps byte offsets aligned with `rest`
    let lower = rest.to_ascii_lowercase();
    let (position, company) = match lower.find(" at ") {
        Some(at) => (&rest[..at], &rest[at + 4..]),
        None => (rest.as_str(), ""),
    };

    (
        trim_separators(position).to_string(),
        trim_separators(company).to_string(),
        duration,
    )
}

/// Most recent role first: `Y-2 - Present`, then consecutive two-year spans.
fn backfill_duration(index: usize, current_year: i32) -> String {
    let years_back = |spans: usize| {
        let spans = i32::try_from(spans).unwrap_or(i32::MAX);
        current_year.saturating_sub(BACKFILL_SPAN_YEARS.saturating_mul(spans))
    };
    if index == 0 {
        format!("{} - Present", years_back(1))
    } else {
        format!("{} - {}", years_back(index + 1), years_back(index))
    }
}

/// Rotates through verbs and responsibilities so consecutive roles read differently.
fn filler_bullets(index: usize, templates: &TemplateSet, voice: &LevelVoice) -> String {
    let verbs = &voice.action_verbs;
    let responsibilities = templates.responsibilities;
    if verbs.is_empty() || responsibilities.is_empty() {
        return String::new();
    }

    (0..FILLER_BULLETS_PER_ROLE)
        .map(|k| {
            let verb = verbs[(index + k) % verbs.len()];
            let responsibility =
                responsibilities[(index * FILLER_BULLETS_PER_ROLE + k) % responsibilities.len()];
            format!("• {verb} {responsibility}.")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `BSc Physics from MIT (2015)` → degree `BSc Physics`, school `MIT`, year `2015`.
fn education_from_line(line: &str) -> Education {
    let mut rest = line.to_string();
    let mut year = String::new();

    if let Some(caps) = PARENTHESIZED.captures(line) {
        if let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) {
            if YEAR.is_match(inner.as_str()) {
                year = inner.as_str().trim().to_string();
                rest = format!("{} {}", &line[..whole.start()], &line[whole.end()..]);
            }
        }
    }
    if year.is_empty() {
        if let Some(m) = YEAR.find(line) {
            year = m.as_str().to_string();
            rest = format!("{} {}", &line[..m.start()], &line[m.end()..]);
        }
    }

    let mut parts = EDUCATION_SPLIT
        .splitn(rest.trim(), 2)
        .map(|part| trim_separators(part).to_string());
    let degree = parts.next().unwrap_or_default();
    let school = parts.next().unwrap_or_default();

    Education {
        degree,
        school,
        year,
        details: String::new(),
    }
}

fn build_skills(text: &str, job_description: Option<&str>, templates: &TemplateSet) -> Vec<String> {
    let mut skills: Vec<String> = SKILL_SPLIT
        .split(text)
        .map(|s| trim_separators(strip_bullet(s.trim()).unwrap_or(s)).to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if let Some(jd) = job_description {
        skills.extend(scan_job_description(jd).into_iter().map(|k| k.keyword));
    }

    let mut skills = dedup_skills(skills);
    if skills.len() < MIN_SKILLS {
        skills.extend(templates.skills.iter().map(|s| s.to_string()));
    }
    skills
}

fn build_achievements(text: &str, templates: &TemplateSet) -> Vec<Achievement> {
    let mut achievements: Vec<Achievement> = form_lines(text)
        .map(|line| Achievement {
            title: "Achievement".to_string(),
            description: line.to_string(),
        })
        .collect();

    for filler in templates.achievements {
        if achievements.len() >= MIN_ACHIEVEMENTS {
            break;
        }
        if !achievements
            .iter()
            .any(|a| a.description.eq_ignore_ascii_case(filler))
        {
            achievements.push(Achievement {
                title: "Achievement".to_string(),
                description: filler.to_string(),
            });
        }
    }
    achievements
}
