use serde::{Deserialize, Serialize};
use std::fmt;

/// Period assigned to a goal when the caller does not pick one.
pub const DEFAULT_PERIOD: &str = "Jan";

pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalId(pub u64);

impl fmt::Display for GoalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Silly,
    Pro,
}

impl Mode {
    pub fn is_pro(self) -> bool {
        matches!(self, Mode::Pro)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Silly => f.write_str("Silly"),
            Mode::Pro => f.write_str("Pro"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    #[serde(rename = "High Impact")]
    HighImpact,
    #[serde(rename = "Strategic")]
    Strategic,
    #[serde(rename = "Quick Win")]
    QuickWin,
    #[serde(rename = "Delusional")]
    Delusional,
    #[serde(rename = "Good Luck")]
    GoodLuck,
    #[serde(rename = "Baby Steps")]
    BabySteps,
}

impl Label {
    pub fn as_str(self) -> &'static str {
        match self {
            Label::HighImpact => "High Impact",
            Label::Strategic => "Strategic",
            Label::QuickWin => "Quick Win",
            Label::Delusional => "Delusional",
            Label::GoodLuck => "Good Luck",
            Label::BabySteps => "Baby Steps",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One user-declared commitment.
///
/// `label` is a snapshot taken when the goal was filed; it does not follow
/// later mode changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,
    pub task: String,
    pub difficulty: u8,
    pub label: Label,
    pub done: bool,
    pub period: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompletionRatio {
    pub completed: usize,
    pub total: usize,
}

impl CompletionRatio {
    /// Share of finished goals in [0, 1]. An empty list reads as 0 of 1.
    pub fn fraction(&self) -> f64 {
        let denom = self.total.max(1) as f64;
        self.completed as f64 / denom
    }

    pub fn percent(&self) -> f64 {
        self.fraction() * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodGroup {
    pub period: String,
    pub goals: Vec<Goal>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub mode: Mode,
    pub age: u8,
}

#[derive(Debug, Deserialize)]
pub struct AddGoalRequest {
    pub task: String,
    pub difficulty: u8,
    #[serde(default)]
    pub period: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EditGoalRequest {
    pub task: String,
}

#[derive(Debug, Deserialize)]
pub struct SettingsRequest {
    #[serde(default)]
    pub mode: Option<Mode>,
    #[serde(default)]
    pub age: Option<u8>,
}

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub id: GoalId,
    pub done: bool,
}

#[derive(Debug, Serialize)]
pub struct GoalsResponse {
    pub groups: Vec<PeriodGroup>,
    pub completion: CompletionRatio,
}
