// Lane request bodies and their field rules

use crate::application::validation::{optional_integer, required_integer, required_text};
use crate::domain::status::{STATUS_KEY_MAX_LEN, STATUS_LABEL_MAX_LEN};
use crate::domain::{NewStatus, StatusChanges, StatusColor};
use crate::error::{AppError, Result, ValidationErrors};
use serde::Deserialize;
use serde_json::Value;

const COLOR_MESSAGE: &str = "Status color must be a valid hex color";
const LABEL_MESSAGE: &str = "Status label is required and must be less than 100 characters";

/// Body of `POST /api/statuses` (canonical field names)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateStatusRequest {
    pub board_id: Option<Value>,
    pub status_key: Option<String>,
    pub status_label: Option<String>,
    pub status_color: Option<String>,
}

/// Body of `PUT /api/statuses/:id`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStatusRequest {
    pub status_label: Option<String>,
    pub status_color: Option<String>,
    pub position: Option<Value>,
}

fn parse_color(errors: &mut ValidationErrors, raw: Option<String>) -> Option<StatusColor> {
    let raw = raw?;
    match StatusColor::parse(&raw) {
        Ok(color) => Some(color),
        Err(_) => {
            errors.push("status_color", COLOR_MESSAGE);
            None
        }
    }
}

impl CreateStatusRequest {
    pub fn validate(self) -> Result<NewStatus> {
        let mut errors = ValidationErrors::new();

        let status_key = required_text(
            &mut errors,
            "status_key",
            self.status_key,
            STATUS_KEY_MAX_LEN,
            "Status key is required and must be less than 50 characters",
        );
        let status_label = required_text(
            &mut errors,
            "status_label",
            self.status_label,
            STATUS_LABEL_MAX_LEN,
            LABEL_MESSAGE,
        );
        let status_color = parse_color(&mut errors, self.status_color);
        let board_id = required_integer(
            &mut errors,
            "board_id",
            self.board_id.as_ref(),
            "Board ID must be a valid integer",
        );

        errors.into_result()?;
        Ok(NewStatus {
            board_id: board_id.unwrap_or_default(),
            status_key: status_key.unwrap_or_default(),
            status_label: status_label.unwrap_or_default(),
            status_color: status_color.unwrap_or_default(),
        })
    }
}

impl UpdateStatusRequest {
    fn is_empty(&self) -> bool {
        self.status_label.is_none()
            && self.status_color.is_none()
            && self.position.as_ref().map_or(true, Value::is_null)
    }

    pub fn validate(self) -> Result<StatusChanges> {
        if self.is_empty() {
            return Err(AppError::invalid("body", "No fields to update"));
        }

        let mut errors = ValidationErrors::new();

        let status_label = match self.status_label {
            Some(label) => required_text(
                &mut errors,
                "status_label",
                Some(label),
                STATUS_LABEL_MAX_LEN,
                LABEL_MESSAGE,
            ),
            None => None,
        };
        let status_color = parse_color(&mut errors, self.status_color);
        let position = optional_integer(
            &mut errors,
            "position",
            self.position.as_ref(),
            0,
            "Position must be a non-negative integer",
        );

        errors.into_result()?;
        Ok(StatusChanges {
            status_label,
            status_color,
            position,
        })
    }
}
