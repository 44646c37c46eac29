use thiserror::Error;

#[derive(Error, Debug)]
pub enum BindError {
    #[error("duplicate binding `{name}`: fields `{first}` and `{second}` resolve to the same name")]
    DuplicateBinding {
        name: String,
        first: String,
        second: String,
    },

    #[error("unsupported type `{native}`{}", field_suffix(.field))]
    UnsupportedType { field: String, native: String },

    #[error("private field found: `{field}` in `{record}`")]
    UnexportedField { field: String, record: String },

    #[error("invalid type `{input}`: {reason}")]
    TypeParse { input: String, reason: String },

    #[error("unknown resource kind: {kind}")]
    UnknownKind { kind: String },

    #[error("resource kind already registered: {kind}")]
    DuplicateKind { kind: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value `{value}` for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

fn field_suffix(field: &str) -> String {
    if field.is_empty() {
        String::new()
    } else {
        format!(" in field `{}`", field)
    }
}

impl BindError {
    /// Prefixes the field path of an `UnsupportedType` error with `name`.
    /// Other variants pass through untouched.
    pub fn in_field(self, name: &str) -> Self {
        match self {
            BindError::UnsupportedType { field, native } => {
                let field = if field.is_empty() {
                    name.to_string()
                } else {
                    format!("{}.{}", name, field)
                };
                BindError::UnsupportedType { field, native }
            }
            other => other,
        }
    }

    /// True for errors caused by how a record type is declared, as opposed to
    /// configuration or environment problems.
    pub fn is_declaration_defect(&self) -> bool {
        matches!(
            self,
            BindError::DuplicateBinding { .. }
                | BindError::UnsupportedType { .. }
                | BindError::UnexportedField { .. }
        )
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BindError::DuplicateBinding { .. } => {
                "rename one of the fields, or give one of them an explicit tag (an empty tag hides it)"
            }
            BindError::UnsupportedType { .. } => {
                "change the field to a bool, string, integer, float, list, map or struct type, or hide it with an empty tag"
            }
            BindError::UnexportedField { .. } => {
                "export every field of structs reachable from an exported field"
            }
            BindError::TypeParse { .. } => "check the type string syntax, e.g. `map{str: []int}`",
            BindError::UnknownKind { .. } => "list the registered kinds and check the spelling",
            BindError::DuplicateKind { .. } => "register each resource kind exactly once",
            BindError::IoError(_) => "check that the file exists and is readable",
            BindError::SerializationError(_) => "report this as a bug",
            BindError::ConfigError { .. } | BindError::InvalidConfigValueError { .. } => {
                "fix the configuration file and try again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, BindError>;
