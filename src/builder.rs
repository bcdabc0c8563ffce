use crate::config::{LogoSpec, MarkerColors, MarkerPlacement, Mode, RenderConfig};
use crate::encoder::{Ecl, MatrixSource, QrEncoder};
use crate::error::{MatrixGenerationError, RenderResult};
use crate::helper::to_svg_string;
use crate::render::render;
use crate::scene::VectorScene;

pub const DEFAULT_VALUE: &str = "this is a QR code";

type ErrorHandler<'a> = Box<dyn Fn(&MatrixGenerationError) + 'a>;

/// Payload, encoder settings and style for one QR render.
///
/// # Example
///
/// ```rust
/// use qirust_svg::{Ecl, Mode, QrSvgBuilder};
///
/// let svg = QrSvgBuilder::new("https://example.com")
///     .size(240.0)
///     .ecl(Ecl::Q)
///     .mode(Mode::Dot)
///     .quiet_zone(8.0)
///     .build_svg()
///     .unwrap();
/// assert!(svg.is_some());
/// ```
pub struct QrSvgBuilder<'a> {
    value: String,
    ecl: Ecl,
    config: RenderConfig,
    source: Box<dyn MatrixSource + 'a>,
    on_error: Option<ErrorHandler<'a>>,
}

impl Default for QrSvgBuilder<'_> {
    fn default() -> Self {
        Self::new(DEFAULT_VALUE)
    }
}

impl<'a> QrSvgBuilder<'a> {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ecl: Ecl::default(),
            config: RenderConfig::default(),
            source: Box::new(QrEncoder),
            on_error: None,
        }
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn ecl(mut self, ecl: Ecl) -> Self {
        self.ecl = ecl;
        self
    }

    /// Replaces every style option at once.
    pub fn config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn size(mut self, size: f64) -> Self {
        self.config.size = size;
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.config.color = color.into();
        self
    }

    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.config.background_color = color.into();
        self
    }

    pub fn quiet_zone(mut self, quiet_zone: f64) -> Self {
        self.config.quiet_zone = quiet_zone;
        self
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Enables the two-stop gradient from `from` to `to` along `direction`
    /// (`x1, y1, x2, y2`).
    pub fn linear_gradient(mut self, from: impl Into<String>, to: impl Into<String>, direction: [&str; 4]) -> Self {
        self.config.enable_linear_gradient = true;
        self.config.linear_gradient = [from.into(), to.into()];
        self.config.gradient_direction = direction.map(str::to_string);
        self
    }

    pub fn logo(mut self, logo: LogoSpec) -> Self {
        self.config.logo = Some(logo);
        self
    }

    pub fn markers(mut self, placement: MarkerPlacement) -> Self {
        self.config.markers = placement;
        self
    }

    pub fn marker_colors(mut self, colors: MarkerColors) -> Self {
        self.config.marker_colors = colors;
        self
    }

    /// Uses another encoder in place of [`QrEncoder`].
    pub fn source<S: MatrixSource + 'a>(mut self, source: S) -> Self {
        self.source = Box::new(source);
        self
    }

    /// Reports encoder failures to `handler` instead of returning them; the
    /// build then yields no scene.
    pub fn on_error<F: Fn(&MatrixGenerationError) + 'a>(mut self, handler: F) -> Self {
        self.on_error = Some(Box::new(handler));
        self
    }

    pub fn render_config(&self) -> &RenderConfig {
        &self.config
    }

    /// Encodes the payload and renders it.
    ///
    /// Returns `Ok(None)` when encoding failed and an error handler took the
    /// error. Shape and config errors are always returned.
    pub fn build(&self) -> RenderResult<Option<VectorScene>> {
        let matrix = match self.source.generate(&self.value, self.ecl) {
            Ok(m) => m,
            Err(e) => match &self.on_error {
                Some(handler) => {
                    tracing::debug!(error = %e, "matrix generation failed, reported to handler");
                    handler(&e);
                    return Ok(None);
                }
                None => return Err(e.into()),
            },
        };
        render(&matrix, &self.config).map(Some)
    }

    pub fn build_svg(&self) -> RenderResult<Option<String>> {
        Ok(self.build()?.map(|scene| to_svg_string(&scene)))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::error::RenderError;
    use crate::matrix::ModuleMatrix;

    #[test]
    fn test_build_default() {
        let scene = QrSvgBuilder::default().build().unwrap().unwrap();
        assert_eq!(scene.width, 100.0);
    }

    #[test]
    fn test_error_without_handler_propagates() {
        let long = "1234567890".repeat(400);
        let err = QrSvgBuilder::new(long).ecl(Ecl::H).build().unwrap_err();
        assert_eq!(err, RenderError::MatrixGeneration(MatrixGenerationError::DataTooLong));
    }

    #[test]
    fn test_error_with_handler_yields_nothing() {
        let seen = RefCell::new(Vec::new());
        let long = "1234567890".repeat(400);
        let out = QrSvgBuilder::new(long)
            .ecl(Ecl::H)
            .on_error(|e| seen.borrow_mut().push(e.clone()))
            .build()
            .unwrap();
        assert!(out.is_none());
        assert_eq!(*seen.borrow(), vec![MatrixGenerationError::DataTooLong]);
    }

    #[test]
    fn test_handler_does_not_swallow_config_errors() {
        let out = QrSvgBuilder::new("ok").quiet_zone(-2.0).on_error(|_| {}).build();
        assert!(matches!(out, Err(RenderError::Config(_))));
    }

    #[test]
    fn test_custom_source() {
        let source = |payload: &str, _: Ecl| {
            assert_eq!(payload, "abc");
            ModuleMatrix::new(&[[true, false], [false, true]]).map_err(|e| MatrixGenerationError::Encoder(e.to_string()))
        };
        let scene = QrSvgBuilder::new("abc")
            .source(source)
            .markers(MarkerPlacement::Hidden)
            .mode(Mode::Dot)
            .build()
            .unwrap()
            .unwrap();
        assert_eq!(scene.circles().count(), 2);
    }
}
