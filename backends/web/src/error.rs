use core::fmt;

use innerscope_core::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Error type produced by the web backend.
#[derive(Debug, Clone)]
pub enum WebError {
    /// The DOM APIs are not accessible (e.g., when executed outside of a browser).
    DomUnavailable,
    /// Wrapper around JavaScript exceptions.
    Js(String),
    /// An error raised by the toolkit itself.
    Toolkit(Error),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DomUnavailable => write!(f, "DOM is not available"),
            Self::Js(msg) => write!(f, "JavaScript error: {msg}"),
            Self::Toolkit(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for WebError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Toolkit(error) => Some(error),
            _ => None,
        }
    }
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        Self::Js(describe(&value))
    }
}

impl From<Error> for WebError {
    fn from(value: Error) -> Self {
        Self::Toolkit(value)
    }
}

impl From<WebError> for Error {
    fn from(value: WebError) -> Self {
        match value {
            WebError::DomUnavailable => Self::Unavailable("DOM"),
            WebError::Js(msg) => Self::Dom(msg),
            WebError::Toolkit(error) => error,
        }
    }
}

impl From<WebError> for JsValue {
    fn from(value: WebError) -> Self {
        match value {
            WebError::Js(msg) => Self::from(msg),
            other => Self::from(other.to_string()),
        }
    }
}

/// Best-effort message of a thrown JavaScript value.
pub(crate) fn describe(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Maps a DOM exception to [`Error::Dom`].
pub(crate) fn js_error(value: JsValue) -> Error {
    Error::Dom(describe(&value))
}

/// Maps a DOM exception caused by a bad name (`InvalidCharacterError`,
/// `SyntaxError`) to [`Error::InvalidArgument`].
pub(crate) fn invalid_argument(value: JsValue) -> Error {
    Error::InvalidArgument(describe(&value))
}
