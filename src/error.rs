//! Error types for the browser-facing player
//!
//! The tokenizer, timeline and synchronizer never fail; these errors only
//! come from mounting the page and talking to the DOM.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Error)]
pub enum PlayerError {
    #[error("No global window available")]
    NoWindow,

    #[error("Window has no document")]
    NoDocument,

    #[error("Element #{0} not found")]
    MissingElement(String),

    #[error("Element #{id} is not a {expected}")]
    WrongElementType { id: String, expected: &'static str },

    /// A DOM call threw; carries the debug rendering of the thrown value
    #[error("DOM operation failed: {0}")]
    Dom(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl PlayerError {
    pub fn dom(err: JsValue) -> Self {
        PlayerError::Dom(format!("{:?}", err))
    }
}

impl From<PlayerError> for JsValue {
    fn from(err: PlayerError) -> Self {
        log::error!("{}", err);
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PlayerError::MissingElement("audioPlayer".into()).to_string(),
            "Element #audioPlayer not found"
        );
        assert_eq!(
            PlayerError::WrongElementType {
                id: "trackBall".into(),
                expected: "HtmlElement",
            }
            .to_string(),
            "Element #trackBall is not a HtmlElement"
        );
        assert_eq!(
            PlayerError::InvalidConfig("tick must be positive".into()).to_string(),
            "Invalid configuration: tick must be positive"
        );
    }
}
