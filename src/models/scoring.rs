//! Scoring system configuration: point formulas and the tie-breaker chain.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Most formulas a scoring system may define.
pub const MAX_FORMULAS: usize = 10;

/// Most tie-breakers a scoring system may define.
pub const MAX_TIE_BREAKERS: usize = 7;

/// Countable per-player achievement a formula can award points for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointMetric {
    /// Events the player appeared at
    EventAttendance,
    /// Matches won across the scope
    MatchWins,
    /// Games won across the scope
    GameWins,
    /// First-place finishes in events
    FirstPlace,
    /// Second-place finishes in events
    SecondPlace,
    /// Third-place finishes in events
    ThirdPlace,
}

impl std::fmt::Display for PointMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PointMetric::EventAttendance => write!(f, "event_attendance"),
            PointMetric::MatchWins => write!(f, "match_wins"),
            PointMetric::GameWins => write!(f, "game_wins"),
            PointMetric::FirstPlace => write!(f, "first_place"),
            PointMetric::SecondPlace => write!(f, "second_place"),
            PointMetric::ThirdPlace => write!(f, "third_place"),
        }
    }
}

/// One multiplier × metric term of the league-points formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreFormula {
    /// Points awarded per metric occurrence
    pub multiplier: i64,

    /// Metric being counted
    pub metric: PointMetric,

    /// Application order (positive; presentation only, the sum is commutative)
    pub order: u32,
}

impl ScoreFormula {
    /// Create a new formula term.
    pub fn new(multiplier: i64, metric: PointMetric, order: u32) -> Self {
        Self {
            multiplier,
            metric,
            order,
        }
    }
}

/// Comparator selectable in the tie-breaker chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreakerKind {
    LeaguePoints,
    MatchPoints,
    OpponentsMatchWinPercentage,
    GameWinPercentage,
    OpponentsGameWinPercentage,
    EventAttendance,
    MatchWins,
}

impl std::fmt::Display for TieBreakerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TieBreakerKind::LeaguePoints => write!(f, "league_points"),
            TieBreakerKind::MatchPoints => write!(f, "match_points"),
            TieBreakerKind::OpponentsMatchWinPercentage => {
                write!(f, "opponents_match_win_percentage")
            }
            TieBreakerKind::GameWinPercentage => write!(f, "game_win_percentage"),
            TieBreakerKind::OpponentsGameWinPercentage => {
                write!(f, "opponents_game_win_percentage")
            }
            TieBreakerKind::EventAttendance => write!(f, "event_attendance"),
            TieBreakerKind::MatchWins => write!(f, "match_wins"),
        }
    }
}

/// One entry of the tie-breaker chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TieBreaker {
    /// Comparator to apply
    pub kind: TieBreakerKind,

    /// Position in the chain (positive, ascending)
    pub order: u32,
}

impl TieBreaker {
    /// Create a new tie-breaker entry.
    pub fn new(kind: TieBreakerKind, order: u32) -> Self {
        Self { kind, order }
    }
}

/// Validation errors for a scoring system.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoringError {
    #[error("Scoring system must define at least one formula")]
    NoFormulas,

    #[error("Too many formulas: {count} (maximum is {})", MAX_FORMULAS)]
    TooManyFormulas { count: usize },

    #[error("Duplicate point metric in formulas: {metric}")]
    DuplicateMetric { metric: PointMetric },

    #[error("Too many tie-breakers: {count} (maximum is {})", MAX_TIE_BREAKERS)]
    TooManyTieBreakers { count: usize },

    #[error("Formula order must be positive (metric: {metric})")]
    NonPositiveFormulaOrder { metric: PointMetric },

    #[error("Tie-breaker order must be positive (kind: {kind})")]
    NonPositiveTieBreakerOrder { kind: TieBreakerKind },
}

/// A league's scoring configuration: how achievements convert to league
/// points and how ties are broken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringSystem {
    /// Formula terms (1 to [`MAX_FORMULAS`], unique metric each)
    pub formulas: Vec<ScoreFormula>,

    /// Tie-breaker chain (0 to [`MAX_TIE_BREAKERS`])
    #[serde(default)]
    pub tie_breakers: Vec<TieBreaker>,
}

impl ScoringSystem {
    /// Create a new scoring system.
    pub fn new(formulas: Vec<ScoreFormula>, tie_breakers: Vec<TieBreaker>) -> Self {
        Self {
            formulas,
            tie_breakers,
        }
    }

    /// The designated default: one point per event attended, 3/2/1 points
    /// for podium finishes, no configured tie-breakers (the alphabetical
    /// fallback still applies).
    pub fn default_league() -> Self {
        Self {
            formulas: vec![
                ScoreFormula::new(1, PointMetric::EventAttendance, 1),
                ScoreFormula::new(3, PointMetric::FirstPlace, 2),
                ScoreFormula::new(2, PointMetric::SecondPlace, 3),
                ScoreFormula::new(1, PointMetric::ThirdPlace, 4),
            ],
            tie_breakers: Vec::new(),
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ScoringError> {
        if self.formulas.is_empty() {
            return Err(ScoringError::NoFormulas);
        }
        if self.formulas.len() > MAX_FORMULAS {
            return Err(ScoringError::TooManyFormulas {
                count: self.formulas.len(),
            });
        }
        if self.tie_breakers.len() > MAX_TIE_BREAKERS {
            return Err(ScoringError::TooManyTieBreakers {
                count: self.tie_breakers.len(),
            });
        }

        let mut seen = std::collections::HashSet::new();
        for formula in &self.formulas {
            if formula.order == 0 {
                return Err(ScoringError::NonPositiveFormulaOrder {
                    metric: formula.metric,
                });
            }
            if !seen.insert(formula.metric) {
                return Err(ScoringError::DuplicateMetric {
                    metric: formula.metric,
                });
            }
        }

        for breaker in &self.tie_breakers {
            if breaker.order == 0 {
                return Err(ScoringError::NonPositiveTieBreakerOrder {
                    kind: breaker.kind,
                });
            }
        }

        Ok(())
    }

    /// Formulas in ascending order. Stable for duplicate order values.
    pub fn sorted_formulas(&self) -> Vec<&ScoreFormula> {
        let mut sorted: Vec<_> = self.formulas.iter().collect();
        sorted.sort_by_key(|f| f.order);
        sorted
    }

    /// Tie-breakers in ascending order. Stable for duplicate order values.
    pub fn sorted_tie_breakers(&self) -> Vec<&TieBreaker> {
        let mut sorted: Vec<_> = self.tie_breakers.iter().collect();
        sorted.sort_by_key(|t| t.order);
        sorted
    }
}
