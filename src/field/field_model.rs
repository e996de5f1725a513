use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    String,
    Boolean,
    Number,
    Date,
}

impl FieldKind {
    /// Input type used when the field does not name one explicitly.
    pub fn default_input_type(self) -> &'static str {
        match self {
            FieldKind::Boolean => "checkbox",
            FieldKind::String => "text",
            FieldKind::Number => "text",
            FieldKind::Date => "date",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "string" => Some(FieldKind::String),
            "boolean" => Some(FieldKind::Boolean),
            "number" => Some(FieldKind::Number),
            "date" => Some(FieldKind::Date),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Boolean => "boolean",
            FieldKind::Number => "number",
            FieldKind::Date => "date",
        }
    }
}

/// One choice of a select or radio field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldOption {
    #[serde(alias = "name")]
    pub display_name: String,
    #[serde(deserialize_with = "string_or_scalar")]
    pub value: String,
}

impl FieldOption {
    pub fn new(display_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            value: value.into(),
        }
    }
}

// Option values may be written as numbers or booleans in YAML/JSON.
fn string_or_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Null => Ok(String::new()),
        other => Ok(other.to_string()),
    }
}

/// Everything the composer knows about one field.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(default)]
    pub kind: FieldKind,
    /// Schema fragment for the field. Only the coercion routine looks inside.
    #[serde(default)]
    pub shape: Option<Value>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub options: Option<Vec<FieldOption>>,
    #[serde(default)]
    pub errors: Option<Vec<String>>,
    #[serde(default)]
    pub dirty: bool,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub auto_focus: bool,
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(default)]
    pub multiline: bool,
    #[serde(default)]
    pub radio: bool,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default, rename = "type")]
    pub explicit_type: Option<String>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            ..Default::default()
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn shape(mut self, shape: Value) -> Self {
        self.shape = Some(shape);
        self
    }

    pub fn options(mut self, options: Vec<FieldOption>) -> Self {
        self.options = Some(options);
        self
    }

    pub fn errors<S: Into<String>>(mut self, errors: impl IntoIterator<Item = S>) -> Self {
        self.errors = Some(errors.into_iter().map(Into::into).collect());
        self
    }

    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn input_type(mut self, ty: impl Into<String>) -> Self {
        self.explicit_type = Some(ty.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn auto_focus(mut self, auto_focus: bool) -> Self {
        self.auto_focus = auto_focus;
        self
    }

    pub fn multiline(mut self, multiline: bool) -> Self {
        self.multiline = multiline;
        self
    }

    pub fn radio(mut self, radio: bool) -> Self {
        self.radio = radio;
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Error messages, empty when none were supplied.
    pub fn error_messages(&self) -> &[String] {
        self.errors.as_deref().unwrap_or(&[])
    }

    /// `explicitType` if set, else the kind's default.
    pub fn resolved_type(&self) -> String {
        self.explicit_type
            .clone()
            .unwrap_or_else(|| self.kind.default_input_type().to_string())
    }
}
