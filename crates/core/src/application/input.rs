//! Request body normalization
//!
//! Clients send lane and task fields either in snake_case or camelCase.
//! Before validation every body is folded into one canonical (snake_case)
//! field set, so the request types only ever see canonical names.

use crate::error::{AppError, Result};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// One canonical field and the names it may arrive under, in precedence order
#[derive(Debug, Clone, Copy)]
pub struct FieldAlias {
    pub canonical: &'static str,
    pub variants: &'static [&'static str],
}

pub const STATUS_FIELD_ALIASES: &[FieldAlias] = &[
    FieldAlias {
        canonical: "board_id",
        variants: &["boardId", "board_id"],
    },
    FieldAlias {
        canonical: "status_key",
        variants: &["statusKey", "status_key"],
    },
    FieldAlias {
        canonical: "status_label",
        variants: &["statusLabel", "status_label"],
    },
    FieldAlias {
        canonical: "status_color",
        variants: &["statusColor", "status_color"],
    },
];

// `status` is the field name older task clients send
pub const TASK_FIELD_ALIASES: &[FieldAlias] = &[
    FieldAlias {
        canonical: "board_id",
        variants: &["boardId", "board_id"],
    },
    FieldAlias {
        canonical: "status_key",
        variants: &["statusKey", "status_key", "status"],
    },
];

/// Fold aliased fields into their canonical names.
///
/// The first variant present wins; all other variants are dropped.
pub fn normalize_fields(body: Value, aliases: &[FieldAlias]) -> Result<Map<String, Value>> {
    let mut fields = match body {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        _ => {
            return Err(AppError::invalid(
                "body",
                "Request body must be a JSON object",
            ))
        }
    };

    for alias in aliases {
        let mut chosen = None;
        for variant in alias.variants {
            if let Some(value) = fields.remove(*variant) {
                if chosen.is_none() {
                    chosen = Some(value);
                }
            }
        }
        if let Some(value) = chosen {
            fields.insert(alias.canonical.to_string(), value);
        }
    }

    Ok(fields)
}

/// Normalize aliases, then deserialize into a request type
pub fn parse_body<T: DeserializeOwned>(body: Value, aliases: &[FieldAlias]) -> Result<T> {
    let fields = normalize_fields(body, aliases)?;
    serde_json::from_value(Value::Object(fields))
        .map_err(|e| AppError::invalid("body", format!("Malformed request body: {}", e)))
}

/// Deserializer for patch fields: distinguishes an explicit `null`
/// (`Some(None)`) from an absent field (`None`, via `#[serde(default)]`).
pub fn deserialize_present<'de, D, T>(deserializer: D) -> std::result::Result<Option<Option<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de>,
{
    use serde::Deserialize;
    Option::<T>::deserialize(deserializer).map(Some)
}
