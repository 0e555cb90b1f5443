//! Typed site content, embedded at build time. Everything user-visible
//! that is data rather than layout lives in `data/catalog.json` so the
//! two pages render from one source.

use serde::Deserialize;

const CATALOG_JSON: &str = include_str!("../data/catalog.json");

/// Portion of full price kept when paying yearly.
const ANNUAL_DISCOUNT: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    /// Kebab-case id, as used in class names and the catalog file.
    pub fn id(self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

/// Selection state of the course grid's filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CourseFilter {
    #[default]
    All,
    Only(Level),
}

impl CourseFilter {
    pub fn label(self) -> &'static str {
        match self {
            CourseFilter::All => "All courses",
            CourseFilter::Only(level) => level.label(),
        }
    }

    pub fn matches(self, course: &Course) -> bool {
        match self {
            CourseFilter::All => true,
            CourseFilter::Only(level) => course.level == level,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Course {
    pub title: String,
    pub level: Level,
    pub weeks: u32,
    pub blurb: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Stat {
    pub label: String,
    pub target: u32,
    #[serde(default)]
    pub suffix: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Plan {
    pub name: String,
    pub monthly: u32,
    pub pitch: String,
    #[serde(default)]
    pub popular: bool,
    pub features: Vec<String>,
}

impl Plan {
    /// Yearly price under the annual discount, rounded to whole currency.
    pub fn annual(&self) -> u32 {
        (self.monthly as f64 * 12.0 * ANNUAL_DISCOUNT).round() as u32
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Slide {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub typing_lines: Vec<String>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub plans: Vec<Plan>,
    #[serde(default)]
    pub slides: Vec<Slide>,
}

impl Catalog {
    /// Parse the embedded catalog.
    pub fn load() -> Catalog {
        Self::parse(CATALOG_JSON)
    }

    /// A malformed document logs and yields an empty catalog instead of
    /// aborting the app; every page renders an empty catalog as empty
    /// sections.
    fn parse(raw: &str) -> Catalog {
        match serde_json::from_str(raw) {
            Ok(catalog) => catalog,
            Err(e) => {
                log::error!("catalog failed to parse: {}", e);
                Catalog::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_parses() {
        let catalog = Catalog::load();
        assert!(!catalog.typing_lines.is_empty());
        assert!(!catalog.stats.is_empty());
        assert!(catalog.courses.len() >= 6);
        assert_eq!(catalog.plans.len(), 3);
        assert_eq!(catalog.slides.len(), 8);
    }

    #[test]
    fn test_malformed_catalog_falls_back_to_empty() {
        assert_eq!(Catalog::parse("{ not json"), Catalog::default());
        // Wrong shape inside a valid document fails the same way.
        assert_eq!(Catalog::parse(r#"{"plans": [{"name": 3}]}"#), Catalog::default());
    }

    #[test]
    fn test_default_catalog_has_no_content() {
        let catalog = Catalog::default();
        assert!(catalog.typing_lines.is_empty());
        assert!(catalog.stats.is_empty());
        assert!(catalog.courses.is_empty());
        assert!(catalog.plans.is_empty());
        assert!(catalog.slides.is_empty());
    }

    #[test]
    fn test_every_level_has_a_course() {
        let catalog = Catalog::load();
        for level in Level::ALL {
            assert!(
                catalog.courses.iter().any(|c| c.level == level),
                "no {:?} course",
                level
            );
        }
    }

    #[test]
    fn test_annual_price_applies_the_discount() {
        let plan = Plan {
            name: "Test".into(),
            monthly: 49,
            pitch: String::new(),
            popular: false,
            features: vec![],
        };
        // 49 * 12 * 0.8 = 470.4
        assert_eq!(plan.annual(), 470);

        let plan = Plan { monthly: 89, ..plan };
        assert_eq!(plan.annual(), 854);

        let plan = Plan { monthly: 149, ..plan };
        assert_eq!(plan.annual(), 1430);
    }

    #[test]
    fn test_filter_matches_by_level() {
        let course = Course {
            title: "X".into(),
            level: Level::Advanced,
            weeks: 1,
            blurb: String::new(),
        };
        assert!(CourseFilter::All.matches(&course));
        assert!(CourseFilter::Only(Level::Advanced).matches(&course));
        assert!(!CourseFilter::Only(Level::Beginner).matches(&course));
    }

    #[test]
    fn test_level_parses_lowercase_only() {
        assert!(serde_json::from_str::<Level>("\"beginner\"").is_ok());
        assert!(serde_json::from_str::<Level>("\"Beginner\"").is_err());
    }
}
