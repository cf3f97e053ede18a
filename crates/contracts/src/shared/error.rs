use thiserror::Error;

/// Failure of a request against the API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Non-success HTTP status
    #[error("Error en fetch: {status} {status_text}")]
    Status { status: u16, status_text: String },

    #[error("Error de red: {0}")]
    Network(String),

    #[error("Respuesta inválida: {0}")]
    Decode(String),
}

/// Failure of the detail request of a single item; shown inside the overlay
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("No se pudo cargar {name}: {source}")]
pub struct DetailFetchError {
    pub name: String,
    #[source]
    pub source: FetchError,
}

impl DetailFetchError {
    pub fn new(name: impl Into<String>, source: FetchError) -> Self {
        Self {
            name: name.into(),
            source,
        }
    }
}
