use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

pub type StdErrorBoxed = Box<dyn std::error::Error + Send + Sync + 'static>;

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn unknown_property(name: impl Into<String>) -> Error {
        Error(ErrorKind::UnknownProperty { name: name.into() }.into())
    }

    pub fn unknown_property_value(
        property: impl Into<String>,
        value: Option<&str>,
        message: impl Into<String>,
    ) -> Error {
        Error(
            ErrorKind::UnknownPropertyValue {
                property: property.into(),
                value: value.map(str::to_string),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn provider_failure(property: impl Into<String>, reason: impl Into<String>) -> Error {
        Error(
            ErrorKind::ProviderFailure {
                property: property.into(),
                reason: reason.into(),
                source: None,
            }
            .into(),
        )
    }

    pub fn provider<E>(property: impl Into<String>, source: E) -> Error
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error(
            ErrorKind::ProviderFailure {
                property: property.into(),
                reason: source.to_string(),
                source: Some(Box::new(source)),
            }
            .into(),
        )
    }

    pub fn index_out_of_range(index: usize, count: usize) -> Error {
        Error(ErrorKind::IndexOutOfRange { index, count }.into())
    }

    /// Returns `true` for errors raised while resolving a property
    /// (as opposed to accessing an already constructed set).
    pub fn is_resolution_error(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::UnknownProperty { .. }
                | ErrorKind::UnknownPropertyValue { .. }
                | ErrorKind::ProviderFailure { .. }
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("unknown Unicode property '{name}'")]
    UnknownProperty { name: String },

    #[error(
        "invalid value {} for Unicode property '{property}': {message}",
        .value.as_deref().map(|v| format!("'{v}'")).unwrap_or_else(|| "<none>".to_string()))]
    UnknownPropertyValue {
        property: String,
        value: Option<String>,
        message: String,
    },

    #[error("failed to resolve Unicode property '{property}': {reason}")]
    ProviderFailure {
        property: String,
        reason: String,
        #[source]
        source: Option<StdErrorBoxed>,
    },

    #[error("range index {index} is out of range (range count: {count})")]
    IndexOutOfRange { index: usize, count: usize },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
