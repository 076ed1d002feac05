//! Scoring configuration loading and validation.

use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use crate::models::{ScoringError, ScoringSystem};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read scoring file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse scoring file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid scoring system: {0}")]
    ValidationError(#[from] ScoringError),
}

/// Load a scoring system from a TOML file.
///
/// Expected shape:
///
/// ```toml
/// [[formulas]]
/// multiplier = 1
/// metric = "event_attendance"
/// order = 1
///
/// [[formulas]]
/// multiplier = 3
/// metric = "first_place"
/// order = 2
///
/// [[tie_breakers]]
/// kind = "match_points"
/// order = 1
/// ```
///
/// The `tie_breakers` table is optional. Unknown metric or kind names fail
/// at parse time; structural limits fail validation.
pub fn load_scoring_system(path: &PathBuf) -> Result<ScoringSystem, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    let scoring: ScoringSystem = toml::from_str(&contents)?;
    scoring.validate()?;

    debug!(
        "Loaded scoring system from {:?}: {} formulas, {} tie-breakers",
        path,
        scoring.formulas.len(),
        scoring.tie_breakers.len()
    );

    Ok(scoring)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PointMetric, TieBreakerKind};

    fn write_scoring_file(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("scoring.toml");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_valid_scoring_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_scoring_file(
            &dir,
            r#"
[[formulas]]
multiplier = 1
metric = "event_attendance"
order = 1

[[formulas]]
multiplier = 3
metric = "first_place"
order = 2

[[tie_breakers]]
kind = "match_points"
order = 1
"#,
        );

        let scoring = load_scoring_system(&path).unwrap();

        assert_eq!(scoring.formulas.len(), 2);
        assert_eq!(scoring.formulas[1].metric, PointMetric::FirstPlace);
        assert_eq!(scoring.tie_breakers.len(), 1);
        assert_eq!(scoring.tie_breakers[0].kind, TieBreakerKind::MatchPoints);
    }

    #[test]
    fn test_tie_breakers_optional() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_scoring_file(
            &dir,
            r#"
[[formulas]]
multiplier = 2
metric = "match_wins"
order = 1
"#,
        );

        let scoring = load_scoring_system(&path).unwrap();
        assert!(scoring.tie_breakers.is_empty());
    }

    #[test]
    fn test_unknown_metric_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_scoring_file(
            &dir,
            r#"
[[formulas]]
multiplier = 1
metric = "bonus_points"
order = 1
"#,
        );

        let result = load_scoring_system(&path);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_duplicate_metric_fails_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_scoring_file(
            &dir,
            r#"
[[formulas]]
multiplier = 1
metric = "match_wins"
order = 1

[[formulas]]
multiplier = 2
metric = "match_wins"
order = 2
"#,
        );

        let result = load_scoring_system(&path);
        assert!(matches!(
            result,
            Err(ConfigError::ValidationError(ScoringError::DuplicateMetric { .. }))
        ));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let path = PathBuf::from("/nonexistent/scoring.toml");
        let result = load_scoring_system(&path);
        assert!(matches!(result, Err(ConfigError::ReadError(_))));
    }
}
