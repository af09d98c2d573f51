use serde::{Deserialize, Serialize};

/// Literal wildcard token used in catalog templates to stand in for
/// variable substrings (block ids, addresses, paths).
pub const WILDCARD: &str = "<*>";

/// A single catalog row: a generalized error-message pattern plus the
/// metadata of the subsystem that emits it.
///
/// Field names bind to the catalog source columns (`EventTemplate`,
/// `Level`, `Component`, `type`). Entry identity is the row position in
/// the catalog; entries are immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateEntry {
    /// Message pattern; may contain the `<*>` wildcard token.
    #[serde(rename = "EventTemplate")]
    pub event_template: String,

    /// Severity label ("WARN", "ERROR", ...). Free-form.
    #[serde(rename = "Level")]
    pub level: String,

    /// Subsystem that emits this template.
    #[serde(rename = "Component")]
    pub component: String,

    /// Originating system tag ("HDFS", "Spark", ...).
    #[serde(rename = "type")]
    pub category: String,
}

impl TemplateEntry {
    #[must_use]
    pub fn new(
        event_template: impl Into<String>,
        level: impl Into<String>,
        component: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            event_template: event_template.into(),
            level: level.into(),
            component: component.into(),
            category: category.into(),
        }
    }
}
