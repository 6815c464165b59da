//! Task lifecycle statuses and the moves between them.
//!
//! The board has a fixed ordered sequence of three categories. Moves walk
//! the adjacency table one step at a time and clamp at the ends; there is
//! no wrap-around.

use serde::{Deserialize, Serialize};

/// The fixed category sequence, in board order.
pub const STATUS_SEQUENCE: [Status; 3] = [Status::Pending, Status::InProgress, Status::Done];

/// Lifecycle stage of a task.
///
/// Wire names are the kebab-case variants; the `alias` entries accept the
/// values found in snapshots written by earlier releases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    #[serde(alias = "pendiente")]
    Pending,
    #[serde(alias = "proceso")]
    InProgress,
    #[serde(alias = "terminado")]
    Done,
}

impl Status {
    /// Next status in the sequence, `None` at the last stage.
    pub fn forward(self) -> Option<Status> {
        match self {
            Status::Pending => Some(Status::InProgress),
            Status::InProgress => Some(Status::Done),
            Status::Done => None,
        }
    }

    /// Previous status in the sequence, `None` at the first stage.
    pub fn backward(self) -> Option<Status> {
        match self {
            Status::Pending => None,
            Status::InProgress => Some(Status::Pending),
            Status::Done => Some(Status::InProgress),
        }
    }

    /// One step in the given direction, `None` when clamped at a bound.
    pub fn step(self, direction: Direction) -> Option<Status> {
        match direction {
            Direction::Forward => self.forward(),
            Direction::Backward => self.backward(),
        }
    }

    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::InProgress => "In progress",
            Status::Done => "Done",
        }
    }
}

/// Direction of a category move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}
