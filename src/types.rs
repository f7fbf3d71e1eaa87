use serde::{Deserialize, Serialize};
use std::fmt;

/// HTTP method of a documented route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value shown on a metric card.
///
/// Numbers (integer or not, any sign) are grouped with thousands separators when
/// displayed, text is shown as-is (e.g. an average that was already rounded to one
/// decimal place).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(serde_json::Number),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricCard {
    pub label: String,
    pub value: MetricValue,
}

impl MetricCard {
    pub fn number(label: &str, value: u64) -> Self {
        Self {
            label: label.to_string(),
            value: MetricValue::Number(value.into()),
        }
    }

    pub fn text(label: &str, value: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            value: MetricValue::Text(value.into()),
        }
    }
}

/// Number of definitions contributed by one dictionary source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCount {
    pub source: String,
    pub count: u64,
}

impl SourceCount {
    pub fn new(source: &str, count: u64) -> Self {
        Self {
            source: source.to_string(),
            count,
        }
    }
}

/// Static documentation for one API route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointDescriptor {
    pub method: HttpMethod,
    /// Path template, may contain `{placeholder}` tokens
    pub path: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_body_schema: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_response: Option<serde_json::Value>,
}

impl EndpointDescriptor {
    pub fn new(method: HttpMethod, path: &str, description: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            description: description.to_string(),
            request_body_schema: None,
            example_response: None,
        }
    }

    pub fn with_request_body(mut self, schema: serde_json::Value) -> Self {
        self.request_body_schema = Some(schema);
        self
    }

    pub fn with_example(mut self, example: serde_json::Value) -> Self {
        self.example_response = Some(example);
        self
    }

    /// Fully qualified URL that gets copied to the clipboard
    pub fn full_url(&self, base_url: &str) -> String {
        format!("{}{}", base_url, self.path)
    }

    /// Whether the row has anything to show when expanded
    pub fn has_details(&self) -> bool {
        self.request_body_schema.is_some() || self.example_response.is_some()
    }
}
