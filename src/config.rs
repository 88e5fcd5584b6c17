//! Board configuration.
//!
//! Every field has a default, so a partial JSON document only needs to name
//! the values it overrides.

use crate::{
    domain::Constraints,
    error::{BoardError, Result},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Template ids for each component kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateIds {
    pub form: String,
    pub lane: String,
    pub item: String,
}

impl Default for TemplateIds {
    fn default() -> Self {
        Self {
            form: "project-input".to_string(),
            lane: "project-list".to_string(),
            item: "single-project".to_string(),
        }
    }
}

/// Creation form fields and their rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub element_id: String,
    pub title_field_id: String,
    pub description_field_id: String,
    pub people_field_id: String,
    pub title: Constraints,
    pub description: Constraints,
    pub people: Constraints,
    pub invalid_input_message: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            element_id: "user-input".to_string(),
            title_field_id: "title".to_string(),
            description_field_id: "description".to_string(),
            people_field_id: "people".to_string(),
            title: Constraints::required(),
            description: Constraints::required().with_min_length(10),
            people: Constraints::required().with_range(1.0, 5.0),
            invalid_input_message: "Invalid input, please try again!".to_string(),
        }
    }
}

/// Drag payload format and lane highlight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    pub media_type: String,
    pub highlight_class: String,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            media_type: "text/plain".to_string(),
            highlight_class: "droppable".to_string(),
        }
    }
}

/// Board configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Id of the element every top-level component mounts into
    pub host_id: String,
    pub templates: TemplateIds,
    pub form: FormConfig,
    pub drag: DragConfig,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            host_id: "app".to_string(),
            templates: TemplateIds::default(),
            form: FormConfig::default(),
            drag: DragConfig::default(),
        }
    }
}

impl BoardConfig {
    /// Parses a JSON document, filling unspecified fields with defaults
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: BoardConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|err| {
            BoardError::ConfigError(format!("failed to read {}: {}", path.display(), err))
        })?;
        Self::from_json(&raw)
    }

    /// Rejects values no board could work with
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("host_id", &self.host_id),
            ("templates.form", &self.templates.form),
            ("templates.lane", &self.templates.lane),
            ("templates.item", &self.templates.item),
            ("form.element_id", &self.form.element_id),
            ("form.title_field_id", &self.form.title_field_id),
            ("form.description_field_id", &self.form.description_field_id),
            ("form.people_field_id", &self.form.people_field_id),
            ("drag.media_type", &self.drag.media_type),
            ("drag.highlight_class", &self.drag.highlight_class),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(BoardError::ConfigError(format!("{} must not be empty", name)));
            }
        }

        if let (Some(min), Some(max)) = (self.form.people.min, self.form.people.max) {
            if min > max {
                return Err(BoardError::ConfigError(format!(
                    "form.people.min ({}) exceeds form.people.max ({})",
                    min, max
                )));
            }
        }

        Ok(())
    }
}
