use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a task.
///
/// The integer codes are part of the exchange format: the persistence layer
/// stores `status` as `0..=4`, and that is what we serialize back out.
/// Deserialization also accepts the upper-case names (`"IN_PROGRESS"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "StatusRepr", into = "u8")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
    Review,
    Blocked,
}

impl TaskStatus {
    /// Every status, in code order.
    pub const ALL: [TaskStatus; 5] = [
        TaskStatus::Todo,
        TaskStatus::InProgress,
        TaskStatus::Done,
        TaskStatus::Review,
        TaskStatus::Blocked,
    ];

    pub fn code(self) -> u8 {
        match self {
            TaskStatus::Todo => 0,
            TaskStatus::InProgress => 1,
            TaskStatus::Done => 2,
            TaskStatus::Review => 3,
            TaskStatus::Blocked => 4,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(TaskStatus::Todo),
            1 => Some(TaskStatus::InProgress),
            2 => Some(TaskStatus::Done),
            3 => Some(TaskStatus::Review),
            4 => Some(TaskStatus::Blocked),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Todo => "TODO",
            TaskStatus::InProgress => "IN_PROGRESS",
            TaskStatus::Done => "DONE",
            TaskStatus::Review => "REVIEW",
            TaskStatus::Blocked => "BLOCKED",
        }
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Todo
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "TODO" => Ok(TaskStatus::Todo),
            "IN_PROGRESS" => Ok(TaskStatus::InProgress),
            "DONE" => Ok(TaskStatus::Done),
            "REVIEW" => Ok(TaskStatus::Review),
            "BLOCKED" => Ok(TaskStatus::Blocked),
            other => match other.parse::<i64>().ok().and_then(TaskStatus::from_code) {
                Some(status) => Ok(status),
                None => Err(format!(
                    "invalid task status: {s} (expected TODO, IN_PROGRESS, DONE, REVIEW, BLOCKED or 0..=4)"
                )),
            },
        }
    }
}

impl From<TaskStatus> for u8 {
    fn from(status: TaskStatus) -> Self {
        status.code()
    }
}

/// Wire shapes accepted for `status`.
#[derive(Deserialize)]
#[serde(untagged)]
enum StatusRepr {
    Code(i64),
    Name(String),
}

impl TryFrom<StatusRepr> for TaskStatus {
    type Error = String;

    fn try_from(repr: StatusRepr) -> Result<Self, Self::Error> {
        match repr {
            StatusRepr::Code(code) => TaskStatus::from_code(code)
                .ok_or_else(|| format!("invalid task status code: {code} (expected 0..=4)")),
            StatusRepr::Name(name) => name.parse(),
        }
    }
}

/// Which placement algorithm to run.
///
/// - `Hierarchical`: deterministic rows by dependency level.
/// - `Force`: iterative spring/repulsion simulation.
/// - `Smart` (default): let the layout selector pick one of the above from
///   the shape of the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutStrategy {
    Hierarchical,
    Force,
    Smart,
}

impl Default for LayoutStrategy {
    fn default() -> Self {
        LayoutStrategy::Smart
    }
}

impl fmt::Display for LayoutStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LayoutStrategy::Hierarchical => "hierarchical",
            LayoutStrategy::Force => "force",
            LayoutStrategy::Smart => "smart",
        };
        f.write_str(s)
    }
}

impl FromStr for LayoutStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hierarchical" => Ok(LayoutStrategy::Hierarchical),
            "force" => Ok(LayoutStrategy::Force),
            "smart" => Ok(LayoutStrategy::Smart),
            other => Err(format!(
                "invalid layout strategy: {other} (expected \"hierarchical\", \"force\" or \"smart\")"
            )),
        }
    }
}
