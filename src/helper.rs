use std::fs;
use std::path::{Path, PathBuf};

use svg::node::element::{
    Circle, ClipPath, Definitions, Image, LinearGradient as SvgLinearGradient, Path as SvgPath, Rectangle, Stop,
};
use svg::Document;

use crate::builder::QrSvgBuilder;
use crate::error::RenderResult;
use crate::scene::{
    CircleShape, ImageShape, LineCap, LineJoin, LinearGradient, Paint, PathShape, Primitive, RectShape, Stroke,
    VectorScene,
};

/*---- Utilities ----*/

/// Returns SVG markup for the given scene.
///
/// Every primitive becomes one element, in scene order. The gradient and image
/// clip paths go into a leading `<defs>` block. Output is deterministic for a
/// given scene.
///
/// # Example
///
/// ```rust
/// use qirust_svg::{helper::to_svg_string, render, ModuleMatrix, RenderConfig, MarkerPlacement};
///
/// let matrix = ModuleMatrix::new(&[[true, false], [false, true]]).unwrap();
/// let config = RenderConfig { markers: MarkerPlacement::Hidden, ..RenderConfig::default() };
/// let svg = to_svg_string(&render(&matrix, &config).unwrap());
/// assert!(svg.contains("<svg"));
/// ```
pub fn to_svg_string(scene: &VectorScene) -> String {
    let vb = scene.view_box;
    let mut document = Document::new()
        .set("width", scene.width)
        .set("height", scene.height)
        .set("viewBox", (vb.min_x, vb.min_y, vb.width, vb.height));

    let mut defs = Definitions::new();
    let mut has_defs = false;
    if let Some(gradient) = &scene.gradient {
        defs = defs.add(gradient_element(gradient));
        has_defs = true;
    }
    for image in scene.images() {
        let clip = &image.clip;
        defs = defs.add(
            ClipPath::new().set("id", escape_attribute(&clip.id)).add(
                Rectangle::new()
                    .set("x", clip.x)
                    .set("y", clip.y)
                    .set("width", clip.size)
                    .set("height", clip.size)
                    .set("rx", clip.radius)
                    .set("ry", clip.radius),
            ),
        );
        has_defs = true;
    }
    if has_defs {
        document = document.add(defs);
    }

    for primitive in &scene.primitives {
        document = match primitive {
            Primitive::Rect(r) => document.add(rect_element(r)),
            Primitive::Path(p) => document.add(path_element(p)),
            Primitive::Circle(c) => document.add(circle_element(c)),
            Primitive::Image(i) => document.add(image_element(i)),
        };
    }

    document.to_string()
}

fn gradient_element(g: &LinearGradient) -> SvgLinearGradient {
    let mut el = SvgLinearGradient::new()
        .set("id", escape_attribute(&g.id))
        .set("x1", escape_attribute(&g.x1))
        .set("y1", escape_attribute(&g.y1))
        .set("x2", escape_attribute(&g.x2))
        .set("y2", escape_attribute(&g.y2));
    for stop in &g.stops {
        el = el.add(
            Stop::new()
                .set("offset", stop.offset)
                .set("stop-color", escape_attribute(&stop.color))
                .set("stop-opacity", stop.opacity),
        );
    }
    el
}

fn rect_element(r: &RectShape) -> Rectangle {
    let mut el = Rectangle::new()
        .set("x", r.x)
        .set("y", r.y)
        .set("width", r.width)
        .set("height", r.height)
        .set("fill", paint_attribute(&r.fill));
    if r.radius > 0.0 {
        el = el.set("rx", r.radius).set("ry", r.radius);
    }
    if let Some(stroke) = &r.stroke {
        el = apply_stroke(el, stroke);
    }
    el
}

fn path_element(p: &PathShape) -> SvgPath {
    let mut el = SvgPath::new().set("d", p.d.as_str()).set("fill", paint_attribute(&p.fill));
    if let Some(stroke) = &p.stroke {
        el = apply_stroke(el, stroke);
    }
    el
}

fn circle_element(c: &CircleShape) -> Circle {
    Circle::new().set("cx", c.cx).set("cy", c.cy).set("r", c.r).set("fill", paint_attribute(&c.fill))
}

fn image_element(i: &ImageShape) -> Image {
    Image::new()
        .set("x", i.x)
        .set("y", i.y)
        .set("width", i.width)
        .set("height", i.height)
        .set("preserveAspectRatio", ImageShape::PRESERVE_ASPECT_RATIO)
        .set("href", escape_attribute(&i.href))
        .set("clip-path", escape_attribute(&format!("url(#{})", i.clip.id)))
}

fn apply_stroke<T: svg::Node>(mut el: T, stroke: &Stroke) -> T {
    let cap = match stroke.cap {
        LineCap::Butt => "butt",
        LineCap::Round => "round",
    };
    let join = match stroke.join {
        LineJoin::Miter => "miter",
        LineJoin::Round => "round",
    };
    el.assign("stroke", paint_attribute(&stroke.paint));
    el.assign("stroke-width", stroke.width);
    el.assign("stroke-linecap", cap);
    el.assign("stroke-linejoin", join);
    el
}

fn paint_attribute(paint: &Paint) -> String {
    escape_attribute(&paint.to_attribute())
}

/// Entity-escapes a caller-supplied string for use inside a double-quoted
/// attribute. The `svg` crate writes attribute values verbatim.
fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Writes the scene as an SVG file.
///
/// # Arguments
///
/// * `scene` - The scene to write.
/// * `directory_path` - Optional. Target directory, created if missing. Defaults to "generated".
/// * `filename` - File name without extension.
///
/// # Errors
///
/// Returns an `std::io::Error` if the directory cannot be created or the file cannot be written.
pub fn save_svg(scene: &VectorScene, directory_path: Option<&str>, filename: &str) -> std::io::Result<PathBuf> {
    let directory_path = directory_path.unwrap_or("generated");

    // Check if the directory exists, create it if it doesn't
    if !Path::new(directory_path).exists() {
        fs::create_dir_all(directory_path)?;
    }

    let file_path = Path::new(directory_path).join(format!("{}.svg", filename));
    fs::write(&file_path, to_svg_string(scene))?;
    tracing::debug!(path = %file_path.display(), "saved svg");
    Ok(file_path)
}

/// Generates SVG markup for `content` with default settings.
///
/// # Example
///
/// ```
/// use qirust_svg::helper::generate_svg_string;
///
/// let svg_string = generate_svg_string("Hello, World!").unwrap();
/// assert!(svg_string.contains("viewBox"));
/// ```
pub fn generate_svg_string(content: &str) -> RenderResult<String> {
    let svg = QrSvgBuilder::new(content).build_svg()?;
    // Without an error handler, build never yields `None`.
    Ok(svg.unwrap_or_default())
}

// Tests
#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LogoSpec, MarkerPlacement, Mode, RenderConfig};
    use crate::matrix::ModuleMatrix;
    use crate::render::render;

    fn checker() -> ModuleMatrix {
        ModuleMatrix::new(&[[true, false], [false, true]]).unwrap()
    }

    fn hidden(mode: Mode) -> RenderConfig {
        RenderConfig { size: 20.0, mode, markers: MarkerPlacement::Hidden, ..RenderConfig::default() }
    }

    #[test]
    fn test_to_svg_string_square() {
        let svg = to_svg_string(&render(&checker(), &hidden(Mode::Square)).unwrap());
        assert!(svg.contains("<svg"));
        assert!(svg.contains("viewBox=\"0 0 20 20\""));
        assert!(svg.contains("d=\"M0 5 L10 5 M10 15 L20 15\""));
        assert!(svg.contains("stroke-width=\"10\""));
        assert!(svg.contains("stroke-linecap=\"butt\""));
        assert!(!svg.contains("<defs"));
    }

    #[test]
    fn test_to_svg_string_dots_and_gradient() {
        let config = RenderConfig { enable_linear_gradient: true, ..hidden(Mode::Dot) };
        let svg = to_svg_string(&render(&checker(), &config).unwrap());
        assert_eq!(svg.matches("<circle").count(), 2);
        assert!(svg.contains("<linearGradient"));
        assert!(svg.contains("x2=\"100%\""));
        assert!(svg.contains("fill=\"url(#grad)\""));
    }

    #[test]
    fn test_to_svg_string_logo() {
        let config = RenderConfig { logo: Some(LogoSpec::new("logo.png")), ..hidden(Mode::Square) };
        let svg = to_svg_string(&render(&checker(), &config).unwrap());
        assert!(svg.contains("<clipPath id=\"clip-logo\""));
        assert!(svg.contains("href=\"logo.png\""));
        assert!(svg.contains("preserveAspectRatio=\"xMidYMid slice\""));
    }

    #[test]
    fn test_to_svg_string_deterministic() {
        let scene = render(&checker(), &hidden(Mode::Dot)).unwrap();
        assert_eq!(to_svg_string(&scene), to_svg_string(&scene.clone()));
    }

    #[test]
    fn test_to_svg_string_escapes_attributes() {
        let logo = LogoSpec::new("https://x.com/l.png?a=1&b=2");
        let config = RenderConfig {
            color: "a\"b'c<d".to_string(),
            logo: Some(logo),
            ..hidden(Mode::Dot)
        };
        let svg = to_svg_string(&render(&checker(), &config).unwrap());
        assert!(svg.contains("href=\"https://x.com/l.png?a=1&amp;b=2\""));
        assert!(!svg.contains("a=1&b=2"));
        assert!(svg.contains("fill=\"a&quot;b'c&lt;d\""));
        assert!(!svg.contains("a\"b"));
    }

    #[test]
    fn test_escape_attribute() {
        assert_eq!(escape_attribute("rgb(0,0,0)"), "rgb(0,0,0)");
        assert_eq!(escape_attribute("<a & \"b\">"), "&lt;a &amp; &quot;b&quot;&gt;");
    }

    #[test]
    fn test_save_svg() {
        let dir = std::env::temp_dir().join("qirust-svg-save-test");
        let dir = dir.to_str().unwrap();
        let scene = render(&checker(), &hidden(Mode::Square)).unwrap();
        let path = save_svg(&scene, Some(dir), "checker").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), to_svg_string(&scene));
    }

    #[test]
    fn test_generate_svg_string() {
        let svg = generate_svg_string("Hello, world!").unwrap();
        assert!(svg.contains("rgb(255,0,0)"));
    }
}
