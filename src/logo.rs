//! Geometry of the centered logo safe zone.

use std::path::Path;

use crate::config::LogoSpec;
use crate::scene::{ClipRect, CropRect, ImageShape, Paint, Primitive, RectShape};

pub const LOGO_CLIP_ID: &str = "clip-logo";

/// Resolved logo geometry for one symbol size, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogoLayout {
    /// Top-left corner of the background patch, on both axes.
    pub position: f64,
    pub patch_size: f64,
    pub patch_radius: f64,
    /// Top-left corner of the image, on both axes.
    pub image_origin: f64,
    pub image_size: f64,
    pub image_radius: f64,
}

impl LogoLayout {
    /// The patch is centered and grows its corner radius in proportion to the
    /// margin band around the image.
    pub fn compute(size: f64, spec: &LogoSpec) -> Self {
        let logo_size = spec.resolved_size(size);
        let margin = spec.margin;
        let radius = spec.border_radius;
        let position = (size - logo_size - margin * 2.0) / 2.0;
        Self {
            position,
            patch_size: logo_size + margin * 2.0,
            patch_radius: radius + (margin / logo_size) * radius,
            image_origin: position + margin,
            image_size: logo_size,
            image_radius: radius,
        }
    }

    pub fn to_primitives(&self, spec: &LogoSpec) -> [Primitive; 2] {
        let patch = Primitive::Rect(RectShape {
            x: self.position,
            y: self.position,
            width: self.patch_size,
            height: self.patch_size,
            radius: self.patch_radius,
            fill: Paint::Color(spec.background_color.clone()),
            stroke: None,
        });
        let image = Primitive::Image(ImageShape {
            x: self.image_origin,
            y: self.image_origin,
            width: self.image_size,
            height: self.image_size,
            href: spec.image.clone(),
            clip: ClipRect {
                id: LOGO_CLIP_ID.to_string(),
                x: self.image_origin,
                y: self.image_origin,
                size: self.image_size,
                radius: self.image_radius,
            },
            source_crop: spec.intrinsic_size.map(|dims| cover_crop(dims, (self.image_size, self.image_size))),
        });
        [patch, image]
    }
}

/// Visible source rectangle when an image of `intrinsic` pixels is scaled to
/// cover `target` with its aspect ratio kept and the overflow cropped evenly.
pub fn cover_crop(intrinsic: (u32, u32), target: (f64, f64)) -> CropRect {
    let (iw, ih) = (intrinsic.0 as f64, intrinsic.1 as f64);
    if iw == 0.0 || ih == 0.0 {
        return CropRect { x: 0.0, y: 0.0, width: iw, height: ih };
    }
    let scale = (target.0 / iw).max(target.1 / ih);
    let width = target.0 / scale;
    let height = target.1 / scale;
    CropRect { x: (iw - width) / 2.0, y: (ih - height) / 2.0, width, height }
}

/// Reads the pixel dimensions of a logo file without decoding it fully.
///
/// # Errors
///
/// Returns an `image::ImageError` if the file cannot be opened or its format
/// is not recognized.
pub fn read_logo_size<P: AsRef<Path>>(path: P) -> Result<(u32, u32), image::ImageError> {
    image::image_dimensions(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_centered() {
        let spec = LogoSpec { size: Some(20.0), margin: 2.0, border_radius: 4.0, ..LogoSpec::new("l.png") };
        let l = LogoLayout::compute(100.0, &spec);
        assert_eq!(l.position, 38.0);
        assert_eq!(l.patch_size, 24.0);
        assert_eq!(l.patch_radius, 4.4);
        assert_eq!(l.image_origin, 40.0);
        assert_eq!(l.image_size, 20.0);
        assert_eq!(l.image_radius, 4.0);
    }

    #[test]
    fn test_cover_crop_wide_image() {
        let crop = cover_crop((200, 100), (20.0, 20.0));
        assert_eq!(crop, CropRect { x: 50.0, y: 0.0, width: 100.0, height: 100.0 });
    }

    #[test]
    fn test_cover_crop_tall_image() {
        let crop = cover_crop((40, 80), (20.0, 20.0));
        assert_eq!(crop, CropRect { x: 0.0, y: 20.0, width: 40.0, height: 40.0 });
    }

    #[test]
    fn test_read_logo_size() {
        let dir = std::env::temp_dir().join("qirust-svg-logo-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("logo.png");
        image::RgbImage::new(12, 7).save(&path).unwrap();
        assert_eq!(read_logo_size(&path).unwrap(), (12, 7));
        assert!(read_logo_size(dir.join("missing.png")).is_err());
    }
}
