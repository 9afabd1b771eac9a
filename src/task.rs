use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::Error;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Task {
    pub title: String,
    pub description: String,
}

/// Stage of a card on the board. Cards only ever move forward.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Todo,
    Working,
    Done,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Todo, Status::Working, Status::Done];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::Working => "working",
            Status::Done => "done",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Status::Todo => 0,
            Status::Working => 1,
            Status::Done => 2,
        }
    }

    /// `None` once the card has reached the last column.
    pub fn next(self) -> Option<Status> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// Selector of the list element holding this status's cards.
    pub fn selector(self) -> String {
        format!("#{}", self.as_str())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| Error::InvalidStatus(s.to_string()))
    }
}
