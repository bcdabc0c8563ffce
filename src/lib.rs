//! # qirust-svg
//!
//! Renders QR code module matrices as scalable vector scenes, ready for SVG or
//! any other vector backend.
//!
//! The crate does not encode payloads itself. An encoder behind the
//! [`MatrixSource`] trait produces a square [`ModuleMatrix`] (the default,
//! [`QrEncoder`], wraps the `qrcode` crate), and [`render()`] turns it into a flat
//! [`VectorScene`]: a quiet-zone background, the modules as one stroked path or
//! as dots, crisp finder/alignment marker overlays and an optional centered logo.
//!
//! ## Features
//!
//! - Square modules merged into a single path, or circular dot modules.
//! - Solid color or two-stop linear gradient body.
//! - Quiet-zone padding through the view box.
//! - Finder and alignment marker overlays anchored to the symbol size.
//! - Logo safe zone with a rounded background patch and a clipped, cover-scaled image.
//! - Config from code, a builder, or TOML.
//! - Safe Rust implementation with no unsafe code.
//!
//! ## Example
//!
//! ```rust
//! use qirust_svg::{Ecl, LogoSpec, Mode, QrSvgBuilder};
//!
//! let svg = QrSvgBuilder::new("https://example.com")
//!     .ecl(Ecl::H)
//!     .size(200.0)
//!     .mode(Mode::Dot)
//!     .linear_gradient("rgb(255,0,0)", "rgb(0,255,255)", ["0%", "0%", "100%", "100%"])
//!     .logo(LogoSpec { border_radius: 6.0, ..LogoSpec::new("logo.png") })
//!     .build_svg()
//!     .unwrap();
//! assert!(svg.is_some());
//! ```
//!
//! Rendering a matrix from another encoder:
//!
//! ```rust
//! use qirust_svg::{render, MarkerPlacement, ModuleMatrix, RenderConfig};
//!
//! let matrix = ModuleMatrix::new(&[[true, false], [false, true]]).unwrap();
//! let config = RenderConfig { size: 40.0, markers: MarkerPlacement::Hidden, ..RenderConfig::default() };
//! let scene = render(&matrix, &config).unwrap();
//! assert_eq!(scene.primitives.len(), 2);
//! ```
//!
//! ## Modules
//!
//! - [`transform`](mod@transform): module matrix to path or dots.
//! - [`render`](mod@render): scene composition.
//! - [`markers`]: structural marker overlay.
//! - [`logo`]: logo safe-zone geometry.
//! - [`encoder`]: encoder seam and the `qrcode` adapter.
//! - [`helper`]: SVG output.

#![forbid(unsafe_code)]

pub mod builder;
pub mod config;
pub mod encoder;
pub mod error;
pub mod helper;
pub mod logo;
pub mod markers;
pub mod matrix;
pub mod render;
pub mod scene;
pub mod transform;

pub use builder::QrSvgBuilder;
pub use config::{LogoSpec, MarkerColors, MarkerPlacement, Mode, RenderConfig};
pub use encoder::{Ecl, MatrixSource, QrEncoder};
pub use error::{ConfigError, MatrixGenerationError, RenderError, RenderResult, ShapeError};
pub use matrix::ModuleMatrix;
pub use render::render;
pub use scene::VectorScene;
pub use transform::{transform, Transformed};
