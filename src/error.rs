use thiserror::Error;
use wasm_bindgen::JsValue;

/// Everything that can go wrong while bringing the network up or drawing it.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element with id #{0}")]
    CanvasNotFound(String),
    #[error("#{0} is not a canvas element")]
    NotACanvas(String),
    #[error("2d rendering context unavailable")]
    ContextUnavailable,
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("draw call failed: {0}")]
    Draw(String),
    #[error("host call failed: {0}")]
    Host(String),
}

pub type Result<T> = std::result::Result<T, NetworkError>;

impl NetworkError {
    pub(crate) fn host(err: JsValue) -> Self {
        NetworkError::Host(format!("{:?}", err))
    }

    pub(crate) fn draw(err: JsValue) -> Self {
        NetworkError::Draw(format!("{:?}", err))
    }
}

impl From<NetworkError> for JsValue {
    fn from(err: NetworkError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}
