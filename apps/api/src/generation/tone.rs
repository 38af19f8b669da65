//! Career-level voice — maps the selected career level to the action verbs,
//! title prefix and summary opener used when phrasing generated content.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CareerLevel {
    Entry,
    #[default]
    Mid,
    Senior,
    Executive,
}

impl CareerLevel {
    /// Stable position used to pick level-specific template variants.
    pub fn index(self) -> usize {
        match self {
            CareerLevel::Entry => 0,
            CareerLevel::Mid => 1,
            CareerLevel::Senior => 2,
            CareerLevel::Executive => 3,
        }
    }
}

/// Phrasing calibrated to a career level.
#[derive(Debug, Clone)]
pub struct LevelVoice {
    pub action_verbs: Vec<&'static str>,
    /// Prepended to the profession for the generated title. Empty for mid level.
    pub title_prefix: &'static str,
    /// Opening words of the generated summary.
    pub summary_opener: &'static str,
}

pub fn voice_for(level: CareerLevel) -> LevelVoice {
    match level {
        CareerLevel::Entry => LevelVoice {
            action_verbs: vec![
                "Contributed to",
                "Supported",
                "Assisted with",
                "Collaborated on",
                "Helped deliver",
            ],
            title_prefix: "Junior",
            summary_opener: "Motivated early-career",
        },
        CareerLevel::Mid => LevelVoice {
            action_verbs: vec!["Delivered", "Built", "Improved", "Owned", "Implemented"],
            title_prefix: "",
            summary_opener: "Results-driven",
        },
        CareerLevel::Senior => LevelVoice {
            action_verbs: vec!["Led", "Architected", "Drove", "Mentored teams on", "Scaled"],
            title_prefix: "Senior",
            summary_opener: "Seasoned",
        },
        CareerLevel::Executive => LevelVoice {
            action_verbs: vec![
                "Directed",
                "Championed",
                "Set strategy for",
                "Transformed",
                "Oversaw",
            ],
            title_prefix: "Principal",
            summary_opener: "Visionary",
        },
    }
}

/// `Senior` + `Data Analyst` → `Senior Data Analyst`, without doubling an existing prefix.
pub fn level_title(level: CareerLevel, profession: &str) -> String {
    let prefix = voice_for(level).title_prefix;
    if prefix.is_empty()
        || profession
            .to_lowercase()
            .starts_with(&prefix.to_lowercase())
    {
        profession.to_string()
    } else {
        format!("{prefix} {profession}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_level_avoids_ownership_verbs() {
        let voice = voice_for(CareerLevel::Entry);
        assert!(!voice.action_verbs.contains(&"Led"));
        assert!(!voice.action_verbs.contains(&"Architected"));
        assert!(voice.action_verbs.contains(&"Contributed to"));
    }

    #[test]
    fn test_senior_level_leads() {
        let voice = voice_for(CareerLevel::Senior);
        assert!(voice.action_verbs.contains(&"Led"));
        assert_eq!(voice.title_prefix, "Senior");
    }

    #[test]
    fn test_every_level_has_verbs() {
        for level in [
            CareerLevel::Entry,
            CareerLevel::Mid,
            CareerLevel::Senior,
            CareerLevel::Executive,
        ] {
            assert!(!voice_for(level).action_verbs.is_empty(), "{level:?}");
        }
    }

    #[test]
    fn test_level_title() {
        assert_eq!(level_title(CareerLevel::Senior, "Data Analyst"), "Senior Data Analyst");
        assert_eq!(level_title(CareerLevel::Mid, "Data Analyst"), "Data Analyst");
        assert_eq!(level_title(CareerLevel::Senior, "senior designer"), "senior designer");
    }

    #[test]
    fn test_career_level_serde() {
        let level: CareerLevel = serde_json::from_str(r#""executive""#).unwrap();
        assert_eq!(level, CareerLevel::Executive);
        assert_eq!(CareerLevel::default(), CareerLevel::Mid);
    }
}
