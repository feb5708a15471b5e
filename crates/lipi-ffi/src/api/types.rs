use lipi_core::settings::SettingsError;
use lipi_core::ModeError;

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum LipiError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
}

impl From<ModeError> for LipiError {
    fn from(e: ModeError) -> Self {
        LipiError::InvalidData { msg: e.to_string() }
    }
}

impl From<SettingsError> for LipiError {
    fn from(e: SettingsError) -> Self {
        LipiError::InvalidData { msg: e.to_string() }
    }
}
