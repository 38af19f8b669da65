//! Resume Record — the structured value produced by both the upload parser
//! and the template generator, then handed back to the caller.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Most skills a record carries after finalization.
pub const MAX_SKILLS: usize = 20;
/// Summary length bound, in characters.
pub const MAX_SUMMARY_CHARS: usize = 500;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub title: String,
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub position: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub year: String,
    pub details: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub proficiency: String,
}

/// Full structured resume. Every collection may be empty; no field is ever absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRecord {
    pub personal_info: PersonalInfo,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub achievements: Vec<Achievement>,
    pub languages: Vec<Language>,
    /// provider ("linkedin", "github") → URL
    pub social_links: BTreeMap<String, String>,
}

fn filled(s: &str) -> bool {
    !s.trim().is_empty()
}

impl Experience {
    pub fn is_complete(&self) -> bool {
        filled(&self.position) || filled(&self.company)
    }
}

impl Education {
    pub fn is_complete(&self) -> bool {
        filled(&self.degree) || filled(&self.school)
    }
}

impl Project {
    pub fn is_complete(&self) -> bool {
        filled(&self.name)
    }
}

impl Certification {
    pub fn is_complete(&self) -> bool {
        filled(&self.name)
    }
}

impl Achievement {
    pub fn is_complete(&self) -> bool {
        filled(&self.description)
    }
}

impl Language {
    pub fn is_complete(&self) -> bool {
        filled(&self.name)
    }
}

impl ResumeRecord {
    /// Enforces the record invariants: drops placeholder entries, dedups and caps
    /// skills, and bounds the summary length.
    pub fn finalize(&mut self) {
        self.experience.retain(Experience::is_complete);
        self.education.retain(Education::is_complete);
        self.projects.retain(Project::is_complete);
        self.certifications.retain(Certification::is_complete);
        self.achievements.retain(Achievement::is_complete);
        self.languages.retain(Language::is_complete);

        self.skills = dedup_skills(std::mem::take(&mut self.skills));
        self.social_links.retain(|_, url| filled(url));

        let summary = &mut self.personal_info.summary;
        if summary.chars().count() > MAX_SUMMARY_CHARS {
            *summary = summary.chars().take(MAX_SUMMARY_CHARS).collect();
        }
    }
}

/// Case-insensitive dedup that keeps the first spelling seen, bounded to `MAX_SKILLS`.
pub fn dedup_skills(skills: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    skills
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(s.to_lowercase()))
        .take(MAX_SKILLS)
        .collect()
}
