//! Crate error type. Every DOM installer returns `Result<_, PortfolioError>`;
//! the wasm boundary converts into `JsValue`.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("no global `window` available")]
    NoWindow,
    #[error("window has no `document`")]
    NoDocument,
    #[error("missing page element `{0}`")]
    MissingElement(String),
    #[error("local storage unavailable")]
    StorageUnavailable,
    #[error("invalid config json: {0}")]
    ConfigParse(#[from] serde_json::Error),
    #[error("invalid config value: {0}")]
    InvalidConfig(String),
    #[error("javascript error: {0}")]
    Js(String),
}

impl PortfolioError {
    pub fn missing(selector: &str) -> Self {
        PortfolioError::MissingElement(selector.to_string())
    }
}

impl From<JsValue> for PortfolioError {
    fn from(value: JsValue) -> Self {
        PortfolioError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<PortfolioError> for JsValue {
    fn from(err: PortfolioError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type Result<T, E = PortfolioError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_element_names_the_selector() {
        let err = PortfolioError::missing("#projectModal");
        assert_eq!(err.to_string(), "missing page element `#projectModal`");
    }

    #[test]
    fn config_parse_error_converts() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: PortfolioError = parse.into();
        assert!(matches!(err, PortfolioError::ConfigParse(_)));
    }
}
