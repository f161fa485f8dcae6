//! Course catalog configuration.
//!
//! The course set and per-course completion thresholds are configuration,
//! not derived data. The built-in default reproduces the standard catalog;
//! an alternative table can be loaded from a TOML file so the catalog can
//! be constructed with arbitrary course sets.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// A single course: name plus the minimum points required to complete it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseConfig {
    /// Course name, unique within the catalog.
    pub name: String,
    /// Minimum-completion threshold in points, always positive.
    pub threshold: u32,
}

/// The full course table. Vector order is the canonical course order used
/// for update routing, notification cycles, and statistics tie ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub courses: Vec<CourseConfig>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        let courses = [("Java", 600), ("DSA", 400), ("Databases", 480), ("Spring", 550)]
            .into_iter()
            .map(|(name, threshold)| CourseConfig {
                name: name.to_string(),
                threshold,
            })
            .collect();
        Self { courses }
    }
}

impl CatalogConfig {
    /// Parse a catalog from TOML text and validate it.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: CatalogConfig = toml::from_str(text).context("failed to parse course catalog")?;
        config.validate()?;
        Ok(config)
    }

    /// Load a catalog from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read course catalog from {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("invalid course catalog in {}", path.display()))
    }

    /// Course names in canonical order.
    pub fn course_names(&self) -> Vec<String> {
        self.courses.iter().map(|c| c.name.clone()).collect()
    }

    fn validate(&self) -> Result<()> {
        if self.courses.is_empty() {
            bail!("course catalog must contain at least one course");
        }
        for course in &self.courses {
            if course.name.trim().is_empty() {
                bail!("course name must not be empty");
            }
            if course.threshold == 0 {
                bail!("course '{}' must have a positive threshold", course.name);
            }
        }
        for (i, course) in self.courses.iter().enumerate() {
            if self.courses[..i].iter().any(|c| c.name == course.name) {
                bail!("duplicate course name '{}'", course.name);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_has_four_courses() {
        let config = CatalogConfig::default();
        assert_eq!(config.course_names(), ["Java", "DSA", "Databases", "Spring"]);
        assert_eq!(config.courses[0].threshold, 600);
        assert_eq!(config.courses[1].threshold, 400);
        assert_eq!(config.courses[2].threshold, 480);
        assert_eq!(config.courses[3].threshold, 550);
    }

    #[test]
    fn parse_valid_toml() {
        let config = CatalogConfig::from_toml_str(
            r#"
            [[courses]]
            name = "Rust"
            threshold = 500

            [[courses]]
            name = "Kotlin"
            threshold = 300
            "#,
        )
        .unwrap();
        assert_eq!(config.course_names(), ["Rust", "Kotlin"]);
    }

    #[test]
    fn reject_zero_threshold() {
        let err = CatalogConfig::from_toml_str(
            r#"
            [[courses]]
            name = "Rust"
            threshold = 0
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("positive threshold"));
    }

    #[test]
    fn reject_duplicate_names() {
        let err = CatalogConfig::from_toml_str(
            r#"
            [[courses]]
            name = "Rust"
            threshold = 500

            [[courses]]
            name = "Rust"
            threshold = 400
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate course name"));
    }

    #[test]
    fn reject_empty_catalog() {
        assert!(CatalogConfig::from_toml_str("courses = []").is_err());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("courses.toml");
        std::fs::write(&path, "[[courses]]\nname = \"Rust\"\nthreshold = 500\n").unwrap();
        let config = CatalogConfig::load(&path).unwrap();
        assert_eq!(config.course_names(), ["Rust"]);
    }
}
