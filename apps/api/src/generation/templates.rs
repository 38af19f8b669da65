//! Static prose templates keyed by profession, with a required default set.
//!
//! Summary placeholders: `{level}`, `{profession}`, `{years}`.
//! Responsibilities are noun phrases completed by a career-level action verb.

/// Template fragments for one family of professions.
#[derive(Debug)]
pub struct TemplateSet {
    /// One summary per career level, in `CareerLevel::index` order.
    pub summaries: &'static [&'static str],
    pub responsibilities: &'static [&'static str],
    pub skills: &'static [&'static str],
    pub achievements: &'static [&'static str],
}

struct ProfessionTemplates {
    /// Lowercase word prefixes of the profession that select this set.
    keys: &'static [&'static str],
    set: TemplateSet,
}

pub static DEFAULT_TEMPLATES: TemplateSet = TemplateSet {
    summaries: &[
        "{level} {profession} with {years} of experience, eager to learn quickly and contribute to a collaborative team.",
        "{level} {profession} with {years} of experience delivering reliable work on time and improving the processes around it.",
        "{level} {profession} with {years} of experience leading initiatives end to end and raising the bar for the people around them.",
        "{level} {profession} with {years} of experience setting direction, building high-performing teams and delivering measurable outcomes.",
    ],
    responsibilities: &[
        "day-to-day operations across cross-functional teams",
        "process improvements that reduced turnaround time",
        "stakeholder communication and regular progress reporting",
        "planning and execution of quarterly initiatives",
        "documentation and onboarding material for new team members",
        "quality reviews that raised customer satisfaction",
    ],
    skills: &[
        "Communication",
        "Problem Solving",
        "Project Management",
        "Teamwork",
        "Time Management",
        "Microsoft Office",
        "Critical Thinking",
        "Leadership",
    ],
    achievements: &[
        "Recognized by management for consistently exceeding quarterly goals",
        "Streamlined a core workflow, saving the team several hours every week",
        "Trained and onboarded new colleagues on internal tools and processes",
    ],
};

static PROFESSION_TEMPLATES: &[ProfessionTemplates] = &[
    ProfessionTemplates {
        keys: &["software", "developer", "engineer", "programmer", "devops"],
        set: TemplateSet {
            summaries: &[
                "{level} {profession} with {years} of experience writing clean, tested code and eager to grow across the stack.",
                "{level} {profession} with {years} of experience building and shipping production services, APIs and user-facing features.",
                "{level} {profession} with {years} of experience designing scalable systems, mentoring engineers and owning critical services.",
                "{level} {profession} with {years} of experience defining technical strategy and leading engineering organizations through growth.",
            ],
            responsibilities: &[
                "the design and delivery of scalable backend services",
                "a CI/CD pipeline that cut release time from days to hours",
                "performance work that reduced API latency by 35%",
                "code reviews and engineering standards for the team",
                "the migration of legacy components to a modern architecture",
                "automated test coverage for mission-critical features",
            ],
            skills: &[
                "JavaScript",
                "TypeScript",
                "Python",
                "React",
                "Node.js",
                "SQL",
                "Git",
                "Docker",
                "AWS",
                "REST APIs",
            ],
            achievements: &[
                "Reduced infrastructure costs by 25% through service consolidation",
                "Shipped a feature used by over 100,000 monthly active users",
                "Introduced automated testing that cut production incidents in half",
            ],
        },
    },
    ProfessionTemplates {
        keys: &["data", "analyst", "machine learning", "scientist"],
        set: TemplateSet {
            summaries: &[
                "{level} {profession} with {years} of experience turning raw data into clear, reproducible analysis.",
                "{level} {profession} with {years} of experience building dashboards, models and pipelines that inform business decisions.",
                "{level} {profession} with {years} of experience leading analytics initiatives and productionizing predictive models.",
                "{level} {profession} with {years} of experience building data strategy and analytics teams that drive company-wide decisions.",
            ],
            responsibilities: &[
                "data pipelines feeding executive reporting",
                "predictive models that improved forecast accuracy by 20%",
                "self-service dashboards adopted across departments",
                "A/B test design and analysis for product launches",
                "data quality checks across core warehouse tables",
                "ad-hoc analysis that shaped quarterly planning",
            ],
            skills: &[
                "Python",
                "SQL",
                "Pandas",
                "Machine Learning",
                "Tableau",
                "Statistics",
                "Data Visualization",
                "Power BI",
            ],
            achievements: &[
                "Built a churn model that helped retain high-value customers",
                "Automated weekly reporting, saving 10 analyst hours per week",
                "Presented findings that redirected a product roadmap",
            ],
        },
    },
    ProfessionTemplates {
        keys: &["product", "project", "program"],
        set: TemplateSet {
            summaries: &[
                "{level} {profession} with {years} of experience supporting roadmaps, research and launch coordination.",
                "{level} {profession} with {years} of experience owning features from discovery through launch and iteration.",
                "{level} {profession} with {years} of experience leading product areas, aligning stakeholders and shipping measurable wins.",
                "{level} {profession} with {years} of experience shaping product vision and leading portfolios across multiple teams.",
            ],
            responsibilities: &[
                "roadmap planning and prioritization with engineering and design",
                "customer discovery interviews that shaped the backlog",
                "launch plans coordinated across sales, support and marketing",
                "success metrics and post-launch analysis for key features",
                "sprint rituals and delivery tracking for two squads",
                "a pricing experiment that lifted conversion by 12%",
            ],
            skills: &[
                "Product Strategy",
                "Roadmapping",
                "Agile",
                "Scrum",
                "User Research",
                "Jira",
                "Stakeholder Management",
                "Data Analysis",
            ],
            achievements: &[
                "Launched a product line that grew revenue by 30% in its first year",
                "Cut average delivery cycle time by 40% through process changes",
                "Raised customer satisfaction scores by 15 points",
            ],
        },
    },
    ProfessionTemplates {
        keys: &["design", "ux", "ui"],
        set: TemplateSet {
            summaries: &[
                "{level} {profession} with {years} of experience crafting accessible, user-centered interfaces.",
                "{level} {profession} with {years} of experience taking products from research and wireframes to polished design.",
                "{level} {profession} with {years} of experience leading design systems and mentoring designers.",
                "{level} {profession} with {years} of experience building design organizations and setting the creative direction for products.",
            ],
            responsibilities: &[
                "user research and usability testing for core flows",
                "a component library adopted by every product team",
                "high-fidelity prototypes for stakeholder reviews",
                "accessibility improvements meeting WCAG 2.1 AA",
                "a checkout redesign that increased conversion by 18%",
                "design critiques and hand-off with engineering",
            ],
            skills: &[
                "Figma",
                "User Research",
                "Prototyping",
                "Wireframing",
                "Design Systems",
                "Accessibility",
                "Adobe Creative Suite",
                "Interaction Design",
            ],
            achievements: &[
                "Redesigned onboarding, lifting activation by 22%",
                "Established a design system used across five products",
                "Won an internal award for customer-focused design",
            ],
        },
    },
    ProfessionTemplates {
        keys: &["marketing", "seo", "content", "growth"],
        set: TemplateSet {
            summaries: &[
                "{level} {profession} with {years} of experience creating content and supporting multi-channel campaigns.",
                "{level} {profession} with {years} of experience planning campaigns that grow audiences and pipeline.",
                "{level} {profession} with {years} of experience leading brand and demand generation programs.",
                "{level} {profession} with {years} of experience building marketing organizations and go-to-market strategy.",
            ],
            responsibilities: &[
                "multi-channel campaigns across email, social and paid search",
                "SEO improvements that doubled organic traffic",
                "content calendars and editorial standards",
                "marketing analytics and attribution reporting",
                "product launch messaging with sales enablement",
                "budget allocation across paid acquisition channels",
            ],
            skills: &[
                "SEO",
                "Content Marketing",
                "Google Analytics",
                "Social Media",
                "Email Marketing",
                "Copywriting",
                "HubSpot",
                "Paid Advertising",
            ],
            achievements: &[
                "Grew newsletter subscribers from 2,000 to 25,000",
                "Generated 40% more qualified leads year over year",
                "Led a rebrand that increased brand search volume by 60%",
            ],
        },
    },
];

/// Looks up the template set for a free-text profession; unknown professions get the default set.
pub fn templates_for(profession: &str) -> &'static TemplateSet {
    let lower = profession.to_lowercase();
    PROFESSION_TEMPLATES
        .iter()
        .find(|entry| entry.keys.iter().any(|key| matches_key(&lower, key)))
        .map(|entry| &entry.set)
        .unwrap_or(&DEFAULT_TEMPLATES)
}

/// Multi-word keys match as substrings; single-word keys must start a word.
fn matches_key(profession: &str, key: &str) -> bool {
    if key.contains(' ') {
        return profession.contains(key);
    }
    profession
        .split(|c: char| !c.is_alphanumeric())
        .any(|word| word.starts_with(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_sets() -> Vec<&'static TemplateSet> {
        let mut sets: Vec<&'static TemplateSet> =
            PROFESSION_TEMPLATES.iter().map(|p| &p.set).collect();
        sets.push(&DEFAULT_TEMPLATES);
        sets
    }

    #[test]
    fn test_lookup_by_keyword() {
        assert!(std::ptr::eq(
            templates_for("Software Engineer"),
            &PROFESSION_TEMPLATES[0].set
        ));
        assert!(std::ptr::eq(
            templates_for("Senior Data Scientist"),
            &PROFESSION_TEMPLATES[1].set
        ));
        assert!(std::ptr::eq(
            templates_for("UX Designer"),
            &PROFESSION_TEMPLATES[3].set
        ));
    }

    #[test]
    fn test_unknown_profession_uses_default() {
        assert!(std::ptr::eq(templates_for("Chef"), &DEFAULT_TEMPLATES));
        assert!(std::ptr::eq(templates_for(""), &DEFAULT_TEMPLATES));
    }

    #[test]
    fn test_keys_match_whole_words() {
        // "builder" contains "ui" but is not a design profession
        assert!(std::ptr::eq(templates_for("Builder"), &DEFAULT_TEMPLATES));
        assert!(std::ptr::eq(
            templates_for("Graphic Designer"),
            &PROFESSION_TEMPLATES[3].set
        ));
        assert!(std::ptr::eq(
            templates_for("Machine Learning Researcher"),
            &PROFESSION_TEMPLATES[1].set
        ));
    }

    #[test]
    fn test_every_set_covers_all_levels_and_has_content() {
        for set in all_sets() {
            assert_eq!(set.summaries.len(), 4);
            assert!(set.responsibilities.len() >= 3);
            assert!(set.skills.len() >= 8);
            assert!(set.achievements.len() >= 3);
            for summary in set.summaries {
                assert!(summary.contains("{profession}"), "{summary}");
                assert!(summary.contains("{years}"), "{summary}");
                assert!(summary.starts_with("{level}"), "{summary}");
            }
        }
    }
}
