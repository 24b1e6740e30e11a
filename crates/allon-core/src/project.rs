//! Project domain types
//!
//! A [`Project`] is a named configuration bundle served by the projects API.
//! The client never mutates projects; it keeps cached copies and sends the
//! whole object back when applying its configuration to the device.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Number of configuration items shown in a card preview
pub const CONFIG_PREVIEW_ITEMS: usize = 3;

/// Identifier of a project
///
/// The API is not consistent about id types, so both JSON strings and
/// numbers are accepted and normalized to a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProjectId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ProjectId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl<'de> Deserialize<'de> for ProjectId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => ProjectId(text),
            RawId::Number(number) => ProjectId(number.to_string()),
        })
    }
}

/// Lifecycle status of a project as reported by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectStatus {
    Active,
    Completed,
    Inactive,
    Pending,
    #[default]
    Unknown,
}

impl ProjectStatus {
    /// Parse a raw status string, case-insensitively
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("active") => ProjectStatus::Active,
            Some("completed") => ProjectStatus::Completed,
            Some("inactive") => ProjectStatus::Inactive,
            Some("pending") => ProjectStatus::Pending,
            _ => ProjectStatus::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Inactive => "inactive",
            ProjectStatus::Pending => "pending",
            ProjectStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One device-module entry of a configuration payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigItem {
    /// Module identifier (`ID`), "Item" when absent
    pub id: String,
    /// Module kind (`ESPinner_Mod`), "N/A" when absent
    pub module: String,
}

/// A configuration project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Raw status string; see [`Project::status`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    /// Configuration payload; `null` and absent both mean "none"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,

    /// Fields this client does not model, kept for the POST body
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Project {
    /// Create a project with only an id and a name
    pub fn new(id: impl Into<ProjectId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            status: None,
            created_at: None,
            updated_at: None,
            config: None,
            extra: Map::new(),
        }
    }

    /// Attach a configuration payload
    pub fn with_config(mut self, config: Value) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn status(&self) -> ProjectStatus {
        ProjectStatus::parse(self.status.as_deref())
    }

    /// Whether the project carries a configuration payload
    pub fn has_config(&self) -> bool {
        matches!(&self.config, Some(value) if !value.is_null())
    }

    /// Device-module entries of the payload's `config` array
    pub fn config_items(&self) -> Vec<ConfigItem> {
        let Some(items) = self
            .config
            .as_ref()
            .and_then(|c| c.get("config"))
            .and_then(Value::as_array)
        else {
            return Vec::new();
        };

        items
            .iter()
            .map(|item| ConfigItem {
                id: field_text(item, "ID").unwrap_or_else(|| "Item".to_string()),
                module: field_text(item, "ESPinner_Mod").unwrap_or_else(|| "N/A".to_string()),
            })
            .collect()
    }
}

fn field_text(item: &Value, key: &str) -> Option<String> {
    match item.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Format an API timestamp for display, e.g. `"07 Mar 2025"`
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS` and bare dates.
pub fn format_date(raw: Option<&str>) -> String {
    const INVALID: &str = "Invalid date";
    const FORMAT: &str = "%d %b %Y";

    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return INVALID.to_string();
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(FORMAT).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return dt.format(FORMAT).to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format(FORMAT).to_string();
    }
    INVALID.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_project_id_accepts_string_and_number() {
        let p: Project = serde_json::from_value(json!({"id": "abc", "name": "A"})).unwrap();
        assert_eq!(p.id.as_str(), "abc");

        let p: Project = serde_json::from_value(json!({"id": 42, "name": "B"})).unwrap();
        assert_eq!(p.id.as_str(), "42");
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!(ProjectStatus::parse(Some("active")), ProjectStatus::Active);
        assert_eq!(ProjectStatus::parse(Some("COMPLETED")), ProjectStatus::Completed);
        assert_eq!(ProjectStatus::parse(Some("Pending")), ProjectStatus::Pending);
        assert_eq!(ProjectStatus::parse(Some("inactive")), ProjectStatus::Inactive);
        assert_eq!(ProjectStatus::parse(Some("archived")), ProjectStatus::Unknown);
        assert_eq!(ProjectStatus::parse(None), ProjectStatus::Unknown);
    }

    #[test]
    fn test_null_config_is_missing() {
        let p: Project =
            serde_json::from_value(json!({"id": "1", "name": "A", "config": null})).unwrap();
        assert!(!p.has_config());

        let p: Project = serde_json::from_value(json!({"id": "1", "name": "A"})).unwrap();
        assert!(!p.has_config());

        let p: Project =
            serde_json::from_value(json!({"id": "1", "name": "A", "config": {"config": []}}))
                .unwrap();
        assert!(p.has_config());
    }

    #[test]
    fn test_config_items_defaults() {
        let p = Project::new("1", "Greenhouse").with_config(json!({
            "config": [
                {"ID": "fan", "ESPinner_Mod": "DC"},
                {"ESPinner_Mod": "GPIO"},
                {"ID": "strip"}
            ]
        }));

        let items = p.config_items();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].id, "fan");
        assert_eq!(items[0].module, "DC");
        assert_eq!(items[1].id, "Item");
        assert_eq!(items[2].module, "N/A");
    }

    #[test]
    fn test_config_items_without_array() {
        let p = Project::new("1", "Raw").with_config(json!({"wifi": "on"}));
        assert!(p.has_config());
        assert!(p.config_items().is_empty());
    }

    #[test]
    fn test_unknown_fields_survive_serialization() {
        let raw = json!({
            "id": "p-7",
            "name": "Robot arm",
            "owner": "lab",
            "config": {"config": [{"ID": "servo"}]}
        });
        let p: Project = serde_json::from_value(raw).unwrap();
        assert_eq!(p.extra.get("owner"), Some(&json!("lab")));

        let back = serde_json::to_value(&p).unwrap();
        assert_eq!(back["owner"], json!("lab"));
        assert_eq!(back["config"]["config"][0]["ID"], json!("servo"));
        assert!(back.get("description").is_none());
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(Some("2025-03-07T10:15:00Z")), "07 Mar 2025");
        assert_eq!(format_date(Some("2024-12-01 08:00:00")), "01 Dec 2024");
        assert_eq!(format_date(Some("2024-01-31")), "31 Jan 2024");
        assert_eq!(format_date(Some("yesterday")), "Invalid date");
        assert_eq!(format_date(None), "Invalid date");
    }
}
