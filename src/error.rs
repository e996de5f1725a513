use std::fmt;

#[derive(Debug)]
pub enum FieldError {
    /// Reading or writing a file failed
    Io { path: String, source: std::io::Error },

    /// YAML input could not be parsed
    YamlParse { context: String, source: serde_yaml::Error },

    /// JSON input could not be parsed
    JsonParse { context: String, source: serde_json::Error },

    /// A value was set for a field the form never registered
    UnregisteredField(String),

    /// The form store lock was poisoned by a panicking writer
    StorePoisoned(String),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Io { path, source } => {
                write!(f, "I/O error on '{}': {}", path, source)
            }
            FieldError::YamlParse { context, source } => {
                write!(f, "YAML parse error ({}): {}", context, source)
            }
            FieldError::JsonParse { context, source } => {
                write!(f, "JSON parse error ({}): {}", context, source)
            }
            FieldError::UnregisteredField(name) => {
                write!(f, "Field '{}' is not registered with the form", name)
            }
            FieldError::StorePoisoned(msg) => {
                write!(f, "Form store lock poisoned: {}", msg)
            }
        }
    }
}

impl std::error::Error for FieldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FieldError::Io { source, .. } => Some(source),
            FieldError::YamlParse { source, .. } => Some(source),
            FieldError::JsonParse { source, .. } => Some(source),
            _ => None,
        }
    }
}
