pub type AppResult<T> = Result<T, AppError>;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("could not decode {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },
    #[error("no source image selected")]
    NoSourceSelected,
    #[error("image encoding failed: {0}")]
    Encode(String),
    #[error("could not write {path}: {reason}")]
    Write { path: String, reason: String },
}

impl AppError {
    pub fn decode(path: impl Into<String>, source: image::ImageError) -> Self {
        AppError::Decode {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::Write {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
