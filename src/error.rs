use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewerError {
    /// A dropped file could not be turned into a page-local URL.
    #[error("could not create an object URL for {file}: {reason}")]
    ObjectUrl { file: String, reason: String },

    #[error("required element `{0}` is not mounted")]
    MissingElement(&'static str),

    #[error("invalid viewer config: {0}")]
    Config(String),

    #[error("failed to decode image {file}")]
    ImageLoad { file: String },

    #[error("DOM call failed: {0}")]
    Dom(String),
}

impl ViewerError {
    /// Wrap a raw `JsValue` error, keeping whatever text the browser gave us.
    pub fn dom(err: wasm_bindgen::JsValue) -> Self {
        ViewerError::Dom(
            err.as_string()
                .unwrap_or_else(|| format!("{:?}", err)),
        )
    }
}

pub type Result<T> = std::result::Result<T, ViewerError>;
