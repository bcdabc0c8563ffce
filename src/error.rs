use core::fmt;

/// The module matrix handed to the renderer is not a usable square grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// The matrix has no rows.
    Empty,
    /// The matrix has rows, but they hold no modules.
    EmptyRow,
    /// A row's length differs from the number of rows.
    NotSquare { row: usize, len: usize, expected: usize },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::Empty => write!(f, "module matrix is empty"),
            Self::EmptyRow => write!(f, "module matrix rows are empty"),
            Self::NotSquare { row, len, expected } => write!(
                f,
                "module matrix is not square: row {} has {} modules, expected {}",
                row, len, expected
            ),
        }
    }
}

impl std::error::Error for ShapeError {}

/// The encoder could not produce a matrix for the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixGenerationError {
    /// Payload exceeds the capacity of the largest symbol at the requested level.
    DataTooLong,
    /// Any other encoder failure, carried as the encoder's own message.
    Encoder(String),
}

impl fmt::Display for MatrixGenerationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::DataTooLong => write!(f, "payload too long for the requested error correction level"),
            Self::Encoder(msg) => write!(f, "encoder failed: {}", msg),
        }
    }
}

impl std::error::Error for MatrixGenerationError {}

/// Invalid render options.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NonPositiveSize(f64),
    NegativeQuietZone(f64),
    NonPositiveLogoSize(f64),
    NegativeLogoMargin(f64),
    NegativeBorderRadius(f64),
    /// Named option is NaN or infinite.
    NonFinite(&'static str),
    /// Anchored markers need a QR symbol dimension (21..=177, 4k+1).
    MarkerDimension(usize),
    UnknownEcl(String),
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NonPositiveSize(v) => write!(f, "size must be positive, got {}", v),
            Self::NegativeQuietZone(v) => write!(f, "quiet zone must not be negative, got {}", v),
            Self::NonPositiveLogoSize(v) => write!(f, "logo size must be positive, got {}", v),
            Self::NegativeLogoMargin(v) => write!(f, "logo margin must not be negative, got {}", v),
            Self::NegativeBorderRadius(v) => {
                write!(f, "logo border radius must not be negative, got {}", v)
            }
            Self::NonFinite(name) => write!(f, "{} must be a finite number", name),
            Self::MarkerDimension(n) => write!(
                f,
                "structural markers need a QR symbol dimension (21..=177, 4k+1), got {}x{}",
                n, n
            ),
            Self::UnknownEcl(s) => write!(f, "unknown error correction level {:?}", s),
            Self::Parse(msg) => write!(f, "invalid render config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Any failure raised while turning a payload or matrix into a scene.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    Shape(ShapeError),
    MatrixGeneration(MatrixGenerationError),
    Config(ConfigError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Shape(e) => e.fmt(f),
            Self::MatrixGeneration(e) => e.fmt(f),
            Self::Config(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Shape(e) => Some(e),
            Self::MatrixGeneration(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

impl From<ShapeError> for RenderError {
    fn from(e: ShapeError) -> Self {
        Self::Shape(e)
    }
}

impl From<MatrixGenerationError> for RenderError {
    fn from(e: MatrixGenerationError) -> Self {
        Self::MatrixGeneration(e)
    }
}

impl From<ConfigError> for RenderError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

pub type RenderResult<T> = Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_not_square() {
        let e = ShapeError::NotSquare { row: 2, len: 3, expected: 4 };
        assert_eq!(e.to_string(), "module matrix is not square: row 2 has 3 modules, expected 4");
    }

    #[test]
    fn test_render_error_keeps_kind() {
        let e: RenderError = MatrixGenerationError::DataTooLong.into();
        assert!(matches!(e, RenderError::MatrixGeneration(MatrixGenerationError::DataTooLong)));
        assert!(std::error::Error::source(&e).is_some());
    }
}
