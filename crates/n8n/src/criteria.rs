//! Search criteria and free-text query models.
//!
//! [`SearchCriteria`] is an open object: a typed set of recognized
//! optional fields plus a passthrough map of extra fields forwarded to
//! the webhook untouched. No field is required; absence means
//! "unspecified", not an error.

use rcore::ToolError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Structured job-search criteria.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    /// Job title or role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,

    /// Location filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Ordered skill list.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,

    /// Seniority filter (e.g. "junior", "senior").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<String>,

    /// Employment type (e.g. "full-time", "contract").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,

    /// Lower salary bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_min: Option<f64>,

    /// Upper salary bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<f64>,

    /// Remote-only filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<bool>,

    /// Unrecognized fields, forwarded verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SearchCriteria {
    /// Validate a JSON value against the criteria shape.
    ///
    /// Collects every violation before failing, so one error message
    /// names all offending field paths at once (comma-joined). `null`
    /// fields count as unspecified; unrecognized fields pass through.
    pub fn from_value(value: Value) -> Result<Self, ToolError> {
        let Value::Object(map) = value else {
            return Err(ToolError::Validation(
                "criteria: expected an object".to_owned(),
            ));
        };

        let mut criteria = Self::default();
        let mut violations = Vec::new();

        for (key, value) in map {
            match key.as_str() {
                "position" => set_string(&mut criteria.position, "position", value, &mut violations),
                "location" => set_string(&mut criteria.location, "location", value, &mut violations),
                "skills" => set_skills(&mut criteria.skills, value, &mut violations),
                "experienceLevel" => set_string(
                    &mut criteria.experience_level,
                    "experienceLevel",
                    value,
                    &mut violations,
                ),
                "jobType" => set_string(&mut criteria.job_type, "jobType", value, &mut violations),
                "salaryMin" => {
                    set_number(&mut criteria.salary_min, "salaryMin", value, &mut violations)
                }
                "salaryMax" => {
                    set_number(&mut criteria.salary_max, "salaryMax", value, &mut violations)
                }
                "remote" => set_bool(&mut criteria.remote, "remote", value, &mut violations),
                _ => {
                    criteria.extra.insert(key, value);
                }
            }
        }

        if violations.is_empty() {
            Ok(criteria)
        } else {
            Err(ToolError::validation(violations))
        }
    }
}

/// Free-text query input.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct SearchQuery {
    /// Natural-language job-search request, forwarded verbatim.
    pub query: String,
}

impl SearchQuery {
    /// Validate a JSON value against the query shape.
    ///
    /// `query` must be present, a string, and non-empty after trimming.
    pub fn from_value(value: Value) -> Result<Self, ToolError> {
        let Value::Object(map) = value else {
            return Err(ToolError::Validation(
                "query: expected an object".to_owned(),
            ));
        };

        match map.get("query") {
            Some(Value::String(text)) if !text.trim().is_empty() => Ok(Self {
                query: text.clone(),
            }),
            Some(Value::String(_)) => Err(ToolError::Validation(
                "query: must be a non-empty string".to_owned(),
            )),
            Some(other) => Err(ToolError::Validation(format!(
                "query: expected a string, got {}",
                type_name(other)
            ))),
            None => Err(ToolError::Validation(
                "query: required field is missing".to_owned(),
            )),
        }
    }
}

fn set_string(
    slot: &mut Option<String>,
    path: &str,
    value: Value,
    violations: &mut Vec<String>,
) {
    match value {
        Value::String(text) => *slot = Some(text),
        Value::Null => {}
        other => violations.push(format!(
            "{path}: expected a string, got {}",
            type_name(&other)
        )),
    }
}

fn set_number(
    slot: &mut Option<f64>,
    path: &str,
    value: Value,
    violations: &mut Vec<String>,
) {
    match value {
        Value::Number(number) => match number.as_f64() {
            Some(n) => *slot = Some(n),
            None => violations.push(format!("{path}: number out of range")),
        },
        Value::Null => {}
        other => violations.push(format!(
            "{path}: expected a number, got {}",
            type_name(&other)
        )),
    }
}

fn set_bool(slot: &mut Option<bool>, path: &str, value: Value, violations: &mut Vec<String>) {
    match value {
        Value::Bool(flag) => *slot = Some(flag),
        Value::Null => {}
        other => violations.push(format!(
            "{path}: expected a boolean, got {}",
            type_name(&other)
        )),
    }
}

fn set_skills(slot: &mut Vec<String>, value: Value, violations: &mut Vec<String>) {
    match value {
        Value::Array(items) => {
            for (index, item) in items.into_iter().enumerate() {
                match item {
                    Value::String(text) => slot.push(text),
                    other => violations.push(format!(
                        "skills[{index}]: expected a string, got {}",
                        type_name(&other)
                    )),
                }
            }
        }
        Value::Null => {}
        other => violations.push(format!(
            "skills: expected an array, got {}",
            type_name(&other)
        )),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
