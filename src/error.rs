use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("zoom_speed must be a finite value > 1, got {0}")]
    ZoomSpeed(f64),

    #[error("move_speed must be a finite value >= 0, got {0}")]
    MoveSpeed(f64),
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("webgl2 context unavailable")]
    NoContext,

    #[error("could not create {0}")]
    Create(&'static str),

    #[error("shader compile failed: {0}")]
    Compile(String),

    #[error("program link failed: {0}")]
    Link(String),

    #[error("js error: {0}")]
    Js(String),
}

impl From<wasm_bindgen::JsValue> for RenderError {
    fn from(v: wasm_bindgen::JsValue) -> Self {
        RenderError::Js(v.as_string().unwrap_or_else(|| format!("{v:?}")))
    }
}
