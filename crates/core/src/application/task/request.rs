// Task request bodies and their field rules

use crate::application::input::deserialize_present;
use crate::application::validation::{
    optional_integer, optional_text, required_integer, required_text,
};
use crate::domain::board::{DESCRIPTION_MAX_LEN, TITLE_MAX_LEN};
use crate::domain::status::STATUS_KEY_MAX_LEN;
use crate::domain::{NewTask, Priority, TaskChanges, DEFAULT_STATUS_KEY};
use crate::error::{AppError, Result, ValidationErrors};
use serde::Deserialize;
use serde_json::Value;

const DESCRIPTION_MESSAGE: &str = "Description must be less than 1000 characters";
const STATUS_KEY_MESSAGE: &str = "Status key must be between 1 and 50 characters";

/// Body of `POST /api/tasks` (canonical field names)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status_key: Option<String>,
    pub priority: Option<String>,
    pub board_id: Option<Value>,
}

/// Body of `PUT /api/tasks/:id`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub description: Option<Option<String>>,
    pub status_key: Option<String>,
    pub priority: Option<String>,
    pub position: Option<Value>,
}

fn parse_priority(errors: &mut ValidationErrors, raw: Option<String>) -> Option<Priority> {
    let raw = raw?;
    match raw.parse::<Priority>() {
        Ok(priority) => Some(priority),
        Err(_) => {
            errors.push("priority", "Priority must be low, medium, or high");
            None
        }
    }
}

fn parse_status_key(errors: &mut ValidationErrors, raw: Option<String>) -> Option<String> {
    raw.and_then(|key| {
        required_text(
            errors,
            "status_key",
            Some(key),
            STATUS_KEY_MAX_LEN,
            STATUS_KEY_MESSAGE,
        )
    })
}

impl CreateTaskRequest {
    pub fn validate(self) -> Result<NewTask> {
        let mut errors = ValidationErrors::new();

        let title = required_text(
            &mut errors,
            "title",
            self.title,
            TITLE_MAX_LEN,
            "Title is required and must be less than 255 characters",
        );
        let description = optional_text(
            &mut errors,
            "description",
            self.description,
            DESCRIPTION_MAX_LEN,
            DESCRIPTION_MESSAGE,
        );
        let status_key = parse_status_key(&mut errors, self.status_key);
        let priority = parse_priority(&mut errors, self.priority);
        let board_id = required_integer(
            &mut errors,
            "board_id",
            self.board_id.as_ref(),
            "Board ID must be a valid integer",
        );

        errors.into_result()?;
        Ok(NewTask {
            board_id: board_id.unwrap_or_default(),
            status_key: status_key.unwrap_or_else(|| DEFAULT_STATUS_KEY.to_string()),
            title: title.unwrap_or_default(),
            description,
            priority: priority.unwrap_or_default(),
        })
    }
}

impl UpdateTaskRequest {
    fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status_key.is_none()
            && self.priority.is_none()
            && self.position.as_ref().map_or(true, Value::is_null)
    }

    pub fn validate(self) -> Result<TaskChanges> {
        if self.is_empty() {
            return Err(AppError::invalid("body", "No fields to update"));
        }

        let mut errors = ValidationErrors::new();

        let title = self.title.and_then(|title| {
            required_text(
                &mut errors,
                "title",
                Some(title),
                TITLE_MAX_LEN,
                "Title must be between 1 and 255 characters",
            )
        });
        let description = self.description.map(|description| {
            optional_text(
                &mut errors,
                "description",
                description,
                DESCRIPTION_MAX_LEN,
                DESCRIPTION_MESSAGE,
            )
        });
        let status_key = parse_status_key(&mut errors, self.status_key);
        let priority = parse_priority(&mut errors, self.priority);
        let position = optional_integer(
            &mut errors,
            "position",
            self.position.as_ref(),
            i64::MIN,
            "Position must be a valid integer",
        );

        errors.into_result()?;
        Ok(TaskChanges {
            title,
            description,
            status_key,
            priority,
            position,
        })
    }
}
