//! Status class and letter grade
//!
//! Two independent views of the same score: a coarse pass/warn/fail bucket
//! that drives the operator's next action, and a finer letter grade shown on
//! the result badge. Both are derived, never stored.

use serde::{Deserialize, Serialize};

use super::Score;

/// Coarse pass/warn/fail bucket derived from a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusClass {
    /// Score >= 80: unit may be approved and packed
    Passed,
    /// 60 <= score < 80: unit needs attention before approval
    Warning,
    /// Score < 60: unit must be sent for rework
    Failed,
}

impl StatusClass {
    /// Classify a score into its status bucket
    ///
    /// Thresholds are monotonic and non-overlapping: every score lands in
    /// exactly one bucket.
    #[must_use]
    pub const fn for_score(score: Score) -> Self {
        match score.value() {
            80.. => Self::Passed,
            60..=79 => Self::Warning,
            _ => Self::Failed,
        }
    }

    /// Uppercase banner label shown on the result screen
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Passed => "PASSED",
            Self::Warning => "WARNING",
            Self::Failed => "FAILED",
        }
    }
}

impl std::fmt::Display for StatusClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Passed => write!(f, "passed"),
            Self::Warning => write!(f, "warning"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// Letter quality rating, finer-grained than [`StatusClass`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    /// Score >= 95
    #[serde(rename = "A+")]
    APlus,
    /// Score >= 90
    A,
    /// Score >= 85
    #[serde(rename = "B+")]
    BPlus,
    /// Score >= 80
    B,
    /// Score >= 70
    C,
    /// Everything below 70
    D,
}

/// Grade thresholds, scanned in descending order
const GRADE_TABLE: &[(u8, Grade)] = &[
    (95, Grade::APlus),
    (90, Grade::A),
    (85, Grade::BPlus),
    (80, Grade::B),
    (70, Grade::C),
];

impl Grade {
    /// Grade a score against the threshold table
    #[must_use]
    pub fn for_score(score: Score) -> Self {
        GRADE_TABLE
            .iter()
            .find(|(threshold, _)| score.value() >= *threshold)
            .map_or(Self::D, |(_, grade)| *grade)
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::APlus => write!(f, "A+"),
            Self::A => write!(f, "A"),
            Self::BPlus => write!(f, "B+"),
            Self::B => write!(f, "B"),
            Self::C => write!(f, "C"),
            Self::D => write!(f, "D"),
        }
    }
}

impl std::str::FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A+" => Ok(Self::APlus),
            "A" => Ok(Self::A),
            "B+" => Ok(Self::BPlus),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            _ => Err(format!("Invalid grade: {s}. Use: A+, A, B+, B, C, D")),
        }
    }
}

/// The combined classification of one inspected unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Pass/warn/fail bucket
    pub status: StatusClass,
    /// Letter grade
    pub grade: Grade,
}
