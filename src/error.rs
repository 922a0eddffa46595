use thiserror::Error;

use crate::model::ElementId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown element type `{0}`")]
pub struct ParseKindError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("element {0} is already on the canvas")]
    DuplicateId(ElementId),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("captured canvas region is empty")]
    EmptyCapture,
    #[error("png encoding failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings io: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings toml: {0}")]
    TomlDe(#[from] toml::de::Error),
    #[error("settings toml: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("settings json: {0}")]
    Json(#[from] serde_json::Error),
}
