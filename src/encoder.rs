//! Seam to the symbol encoder.
//!
//! The renderer only ever sees a finished [`ModuleMatrix`]. [`QrEncoder`] wraps
//! the `qrcode` crate; tests and callers with their own encoder implement
//! [`MatrixSource`] directly.

use core::fmt;
use core::str::FromStr;

use qrcode::types::QrError;
use qrcode::{EcLevel, QrCode};

use crate::error::{ConfigError, MatrixGenerationError};
use crate::matrix::ModuleMatrix;

/// Error correction level of the symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Ecl {
    /// Tolerates ~7% erroneous codewords.
    L,
    /// Tolerates ~15% erroneous codewords.
    #[default]
    M,
    /// Tolerates ~25% erroneous codewords.
    Q,
    /// Tolerates ~30% erroneous codewords.
    H,
}

impl FromStr for Ecl {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(Ecl::L),
            "M" => Ok(Ecl::M),
            "Q" => Ok(Ecl::Q),
            "H" => Ok(Ecl::H),
            _ => Err(ConfigError::UnknownEcl(s.to_string())),
        }
    }
}

impl fmt::Display for Ecl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Ecl::L => "L",
            Ecl::M => "M",
            Ecl::Q => "Q",
            Ecl::H => "H",
        };
        f.write_str(s)
    }
}

impl From<Ecl> for EcLevel {
    fn from(ecl: Ecl) -> Self {
        match ecl {
            Ecl::L => EcLevel::L,
            Ecl::M => EcLevel::M,
            Ecl::Q => EcLevel::Q,
            Ecl::H => EcLevel::H,
        }
    }
}

/// Produces a module matrix for a payload.
pub trait MatrixSource {
    fn generate(&self, payload: &str, ecl: Ecl) -> Result<ModuleMatrix, MatrixGenerationError>;
}

impl<F> MatrixSource for F
where
    F: Fn(&str, Ecl) -> Result<ModuleMatrix, MatrixGenerationError>,
{
    fn generate(&self, payload: &str, ecl: Ecl) -> Result<ModuleMatrix, MatrixGenerationError> {
        self(payload, ecl)
    }
}

/// QR Code Model 2 encoder; picks the smallest version that fits.
#[derive(Debug, Clone, Copy, Default)]
pub struct QrEncoder;

impl MatrixSource for QrEncoder {
    fn generate(&self, payload: &str, ecl: Ecl) -> Result<ModuleMatrix, MatrixGenerationError> {
        let code = QrCode::with_error_correction_level(payload.as_bytes(), ecl.into()).map_err(|e| {
            tracing::debug!(%ecl, len = payload.len(), error = %e, "encoding failed");
            match e {
                QrError::DataTooLong => MatrixGenerationError::DataTooLong,
                other => MatrixGenerationError::Encoder(other.to_string()),
            }
        })?;
        tracing::debug!(%ecl, width = code.width(), "encoded payload");
        ModuleMatrix::from_colors(code.width(), &code.to_colors())
            .map_err(|e| MatrixGenerationError::Encoder(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("l", Ecl::L)]
    #[test_case("M", Ecl::M)]
    #[test_case(" q ", Ecl::Q)]
    #[test_case("H", Ecl::H)]
    fn test_parse_ecl(s: &str, expected: Ecl) {
        assert_eq!(s.parse::<Ecl>(), Ok(expected));
    }

    #[test]
    fn test_parse_ecl_unknown() {
        assert_eq!("X".parse::<Ecl>(), Err(ConfigError::UnknownEcl("X".to_string())));
    }

    #[test]
    fn test_encoder_version_1() {
        let m = QrEncoder.generate("HELLO WORLD", Ecl::L).unwrap();
        assert_eq!(m.dimension(), 21);
        // Top-left finder corner is dark, the separator next to it is light.
        assert!(m.get(0, 0));
        assert!(!m.get(0, 7));
    }

    #[test]
    fn test_encoder_data_too_long() {
        let payload = "1234567890".repeat(400);
        assert_eq!(QrEncoder.generate(&payload, Ecl::H), Err(MatrixGenerationError::DataTooLong));
    }

    #[test]
    fn test_closure_source() {
        let source = |_: &str, _: Ecl| ModuleMatrix::new(&[[true]]).map_err(|e| MatrixGenerationError::Encoder(e.to_string()));
        assert_eq!(source.generate("x", Ecl::M).unwrap().dimension(), 1);
    }
}
