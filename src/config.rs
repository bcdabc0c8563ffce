//! Render options with their defaults, validated once before drawing.

use serde::Deserialize;

use crate::error::ConfigError;

/// How dark modules are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Square modules merged into one stroked path.
    #[default]
    Square,
    /// One circle per dark module.
    Dot,
}

/// Where the structural marker overlay goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerPlacement {
    /// Finder and alignment markers anchored to the symbol's corners. Only valid
    /// for QR symbol dimensions.
    #[default]
    Anchored,
    /// No overlay; the matrix is drawn as is.
    Hidden,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MarkerColors {
    pub ring: String,
    pub core: String,
}

impl Default for MarkerColors {
    fn default() -> Self {
        Self { ring: "rgb(255,0,0)".to_string(), core: "rgb(0,0,255)".to_string() }
    }
}

/// Logo drawn over the center of the symbol.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogoSpec {
    /// Image reference (URL, path or data URI), passed through untouched.
    pub image: String,
    /// Side of the logo in pixels; `None` means 20% of the symbol size.
    pub size: Option<f64>,
    pub background_color: String,
    pub margin: f64,
    pub border_radius: f64,
    /// Pixel dimensions of the image, if known.
    pub intrinsic_size: Option<(u32, u32)>,
}

impl Default for LogoSpec {
    fn default() -> Self {
        Self {
            image: String::new(),
            size: None,
            background_color: "transparent".to_string(),
            margin: 2.0,
            border_radius: 0.0,
            intrinsic_size: None,
        }
    }
}

impl LogoSpec {
    pub fn new(image: impl Into<String>) -> Self {
        Self { image: image.into(), ..Self::default() }
    }

    /// The logo side for a symbol of `size` pixels.
    pub fn resolved_size(&self, size: f64) -> f64 {
        self.size.unwrap_or(size * 0.2)
    }
}

/// Style options for one render.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub size: f64,
    pub color: String,
    pub background_color: String,
    pub quiet_zone: f64,
    pub mode: Mode,
    pub enable_linear_gradient: bool,
    /// `x1, y1, x2, y2` of the gradient vector.
    pub gradient_direction: [String; 4],
    pub linear_gradient: [String; 2],
    pub logo: Option<LogoSpec>,
    pub markers: MarkerPlacement,
    pub marker_colors: MarkerColors,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            size: 100.0,
            color: "black".to_string(),
            background_color: "white".to_string(),
            quiet_zone: 0.0,
            mode: Mode::Square,
            enable_linear_gradient: false,
            gradient_direction: [
                "0%".to_string(),
                "0%".to_string(),
                "100%".to_string(),
                "100%".to_string(),
            ],
            linear_gradient: ["rgb(255,0,0)".to_string(), "rgb(0,255,255)".to_string()],
            logo: None,
            markers: MarkerPlacement::Anchored,
            marker_colors: MarkerColors::default(),
        }
    }
}

impl RenderConfig {
    /// Parses a config from TOML; missing keys take their defaults.
    ///
    /// ```toml
    /// size = 240
    /// mode = "dot"
    /// quiet_zone = 8
    ///
    /// [logo]
    /// image = "logo.png"
    /// margin = 4
    /// ```
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every numeric option. Nothing is clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        finite("size", self.size)?;
        finite("quiet_zone", self.quiet_zone)?;
        if self.size <= 0.0 {
            return Err(ConfigError::NonPositiveSize(self.size));
        }
        if self.quiet_zone < 0.0 {
            return Err(ConfigError::NegativeQuietZone(self.quiet_zone));
        }
        if let Some(logo) = &self.logo {
            let logo_size = logo.resolved_size(self.size);
            finite("logo.size", logo_size)?;
            finite("logo.margin", logo.margin)?;
            finite("logo.border_radius", logo.border_radius)?;
            // Zero is rejected too: the patch radius divides by it.
            if logo_size <= 0.0 {
                return Err(ConfigError::NonPositiveLogoSize(logo_size));
            }
            if logo.margin < 0.0 {
                return Err(ConfigError::NegativeLogoMargin(logo.margin));
            }
            if logo.border_radius < 0.0 {
                return Err(ConfigError::NegativeBorderRadius(logo.border_radius));
            }
        }
        Ok(())
    }
}

fn finite(name: &'static str, v: f64) -> Result<(), ConfigError> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite(name))
    }
}
