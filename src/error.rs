use serde_json::error::Category;
use std::fmt::{self, Display};

#[derive(Debug)]
pub enum ContentError {
    /// Fallo de transporte al hablar con la base de datos remota.
    FailedFetch(String),
    /// La base de datos respondió con un estado no exitoso.
    Status(u16),
    /// JSON sintácticamente inválido.
    Syntax,
    /// JSON válido pero con tipos inesperados.
    Data,
    /// El fixture embebido no se pudo parsear.
    Fixture(String),
    /// El fixture se parseó pero su contenido es incoherente.
    Invalid(String),
    /// Fuente remota no disponible en esta plataforma o desactivada.
    Unavailable,
}

impl From<serde_json::Error> for ContentError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => Self::Data,
            Category::Syntax | Category::Eof => Self::Syntax,
            Category::Io => Self::FailedFetch(err.to_string()),
        }
    }
}

impl From<serde_yaml::Error> for ContentError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Fixture(err.to_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl From<reqwest::Error> for ContentError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::Status(status.as_u16()),
            None => Self::FailedFetch(err.to_string()),
        }
    }
}

impl Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ContentError::*;
        match self {
            FailedFetch(msg) => write!(f, "Failed to fetch content: {msg}"),
            Status(code) => write!(f, "Content server answered with HTTP {code}"),
            Syntax => f.write_str("Syntax error in JSON detected."),
            Data => f.write_str("Unexpected data types in JSON detected."),
            Fixture(msg) => write!(f, "Embedded fixture is not valid YAML: {msg}"),
            Invalid(msg) => write!(f, "Embedded fixture is inconsistent: {msg}"),
            Unavailable => f.write_str("Remote content is not available."),
        }
    }
}

impl std::error::Error for ContentError {}

pub type Result<T> = core::result::Result<T, ContentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_syntax_and_data_errors_are_told_apart() {
        let syntax = serde_json::from_str::<Vec<u32>>("[1, 2").unwrap_err();
        assert!(matches!(ContentError::from(syntax), ContentError::Syntax));

        let data = serde_json::from_str::<Vec<u32>>(r#"["a"]"#).unwrap_err();
        assert!(matches!(ContentError::from(data), ContentError::Data));
    }

    #[test]
    fn display_mentions_status_code() {
        assert_eq!(
            ContentError::Status(503).to_string(),
            "Content server answered with HTTP 503"
        );
    }
}
