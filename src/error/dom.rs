use std::fmt::{ Display, Formatter };

#[derive(Debug)]
pub enum DomError {
    MissingWindow,
    MissingDocument,
    Js(String),
}

impl Display for DomError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DomError::MissingWindow => write!(f, "DOM Error: no global window"),
            DomError::MissingDocument => write!(f, "DOM Error: window has no document"),
            DomError::Js(msg) => write!(f, "DOM Error: {}", msg),
        }
    }
}

impl std::error::Error for DomError {}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for DomError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<DomError> for wasm_bindgen::JsValue {
    fn from(err: DomError) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
