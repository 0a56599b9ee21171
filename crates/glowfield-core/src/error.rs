use thiserror::Error;

/// Failures surfaced by the field. None of them stop an animation loop: the
/// host logs them and carries on with fallback placement.
#[derive(Debug, Error)]
pub enum FieldError {
    #[error("failed to decode texture: {0}")]
    Decode(#[from] image::ImageError),
    #[error("texture has zero size ({width}x{height})")]
    EmptyTexture { width: u32, height: u32 },
    #[error("pixel buffer of {len} bytes does not fit {width}x{height} RGBA")]
    PixelBuffer { width: u32, height: u32, len: usize },
    #[error("invalid field parameter `{name}`: {reason}")]
    InvalidParams { name: &'static str, reason: String },
    #[error("unknown section `{0}`")]
    UnknownSection(String),
}

pub type Result<T> = std::result::Result<T, FieldError>;
