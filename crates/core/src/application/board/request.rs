// Board request body and its field rules

use crate::application::validation::{optional_text, required_text};
use crate::domain::board::{DESCRIPTION_MAX_LEN, TITLE_MAX_LEN};
use crate::domain::NewBoard;
use crate::error::{Result, ValidationErrors};
use serde::Deserialize;

/// Body of `POST /api/boards` and `PUT /api/boards/:id` (full replacement)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoardRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl BoardRequest {
    pub fn validate(self) -> Result<NewBoard> {
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
            "Description must be less than 1000 characters",
        );

        errors.into_result()?;
        Ok(NewBoard {
            title: title.unwrap_or_default(),
            description,
        })
    }
}
