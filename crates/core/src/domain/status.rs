// Status (Lane) Domain Model

use super::board::BoardId;
use super::error::{DomainError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Status ID (storage-generated)
pub type StatusId = i64;

pub const STATUS_KEY_MAX_LEN: usize = 50;
pub const STATUS_LABEL_MAX_LEN: usize = 100;
pub const DEFAULT_STATUS_COLOR: &str = "#6b7280";

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("static hex color pattern"));

/// Hex RGB color (`#RRGGBB`), case preserved as given
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusColor(String);

impl StatusColor {
    pub fn parse(s: &str) -> Result<Self> {
        if HEX_COLOR.is_match(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(DomainError::InvalidColor(s.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for StatusColor {
    fn default() -> Self {
        Self(DEFAULT_STATUS_COLOR.to_string())
    }
}

impl std::fmt::Display for StatusColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Status Entity (a lane on a board)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub id: StatusId,
    pub board_id: BoardId,
    pub status_key: String,
    pub status_label: String,
    pub status_color: String,
    pub position: i64,
    pub created_at: i64, // epoch ms
    pub updated_at: i64, // epoch ms
}

/// Validated fields for a new lane; position is assigned on insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStatus {
    pub board_id: BoardId,
    pub status_key: String,
    pub status_label: String,
    pub status_color: StatusColor,
}

/// Partial lane update; `None` leaves the column untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusChanges {
    pub status_label: Option<String>,
    pub status_color: Option<StatusColor>,
    pub position: Option<i64>,
}

impl StatusChanges {
    pub fn is_empty(&self) -> bool {
        self.status_label.is_none() && self.status_color.is_none() && self.position.is_none()
    }
}

/// Lane seeded on every new board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTemplate {
    pub key: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

/// Default lanes, in position order
pub const DEFAULT_STATUSES: [StatusTemplate; 3] = [
    StatusTemplate {
        key: "todo",
        label: "To Do",
        color: "#3b82f6",
    },
    StatusTemplate {
        key: "in_progress",
        label: "In Progress",
        color: "#8b5cf6",
    },
    StatusTemplate {
        key: "done",
        label: "Done",
        color: "#10b981",
    },
];

impl StatusTemplate {
    pub fn to_new_status(&self, board_id: BoardId) -> NewStatus {
        NewStatus {
            board_id,
            status_key: self.key.to_string(),
            status_label: self.label.to_string(),
            status_color: StatusColor(self.color.to_string()),
        }
    }
}
