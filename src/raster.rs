//! Lowering of an [`Image`] to pixels, and PNG export.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use rgb::RGBA8;
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Stroke, StrokeDash, Transform};

use crate::image::{Elem, Image, RenderingOpts, StrokeStyle};
use crate::V2;

/// Paints `image` onto a fresh [`Pixmap`] at `scaling` pixels per world unit.
///
/// The pixmap is sized to the image's bounding box plus the configured padding, cleared to the
/// background colour and then painted element-by-element in order.  World coordinates have their
/// y-axis pointing up, so the transform to pixel space flips y.
pub fn rasterize(
    image: &Image,
    opts: &RenderingOpts,
    scaling: f32,
) -> Result<Pixmap, RenderError> {
    // Bounding box in world space, grown by the padding on every side
    let (bbox_min, bbox_max) = image
        .bbox()
        .ok_or(RenderError::Backend("image has no elements"))?;
    let padding_vec = V2::new(opts.padding, opts.padding);
    let min = bbox_min - padding_vec;
    let max = bbox_max + padding_vec;

    let dimensions = (max - min) * scaling;
    let mut pixmap = Pixmap::new(dimensions.x.round() as u32, dimensions.y.round() as u32)
        .ok_or(RenderError::Backend("canvas would have zero area"))?;
    pixmap.fill(to_color(opts.background_color));

    let to_px = |v: V2| ((v.x - min.x) * scaling, (max.y - v.y) * scaling);

    for elem in image.elements() {
        match elem {
            Elem::Polygon(verts, style) => {
                let path = polygon_path(verts.iter().map(|&v| to_px(v)))?;
                fill(&mut pixmap, &path, style.color);
            }
            Elem::Disc {
                centre,
                radius,
                style,
            } => {
                let (cx, cy) = to_px(*centre);
                let path = PathBuilder::from_circle(cx, cy, radius * scaling)
                    .ok_or(RenderError::Backend("disc has no radius"))?;
                fill(&mut pixmap, &path, style.color);
            }
            Elem::LineSegment(p1, p2, style) => {
                let mut pb = PathBuilder::new();
                let (x1, y1) = to_px(*p1);
                let (x2, y2) = to_px(*p2);
                pb.move_to(x1, y1);
                pb.line_to(x2, y2);
                let path = pb
                    .finish()
                    .ok_or(RenderError::Backend("line segment has no length"))?;
                stroke(&mut pixmap, &path, style, scaling)?;
            }
            Elem::Ring {
                centre,
                radius,
                style,
            } => {
                let (cx, cy) = to_px(*centre);
                let path = PathBuilder::from_circle(cx, cy, radius * scaling)
                    .ok_or(RenderError::Backend("ring has no radius"))?;
                stroke(&mut pixmap, &path, style, scaling)?;
            }
        }
    }

    Ok(pixmap)
}

/// Encodes `pixmap` as an RGBA PNG at `path`, recording `dpi` as the intended pixel density.
///
/// The file is flushed and closed before this returns on the success path.
pub fn write_png(pixmap: &Pixmap, path: impl AsRef<Path>, dpi: u32) -> Result<(), RenderError> {
    let file = File::create(path)?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), pixmap.width(), pixmap.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    // The pHYs chunk records density in pixels per meter
    let pixels_per_meter = (dpi as f64 / 0.0254).round() as u32;
    encoder.set_pixel_dims(Some(png::PixelDimensions {
        xppu: pixels_per_meter,
        yppu: pixels_per_meter,
        unit: png::Unit::Meter,
    }));

    // The pixmap stores premultiplied colors; PNG wants straight alpha
    let mut data = Vec::with_capacity(pixmap.data().len());
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    let mut writer = encoder.write_header()?;
    writer.write_image_data(&data)?;
    writer.finish()?;
    Ok(())
}

fn polygon_path(
    mut points: impl Iterator<Item = (f32, f32)>,
) -> Result<tiny_skia::Path, RenderError> {
    let mut pb = PathBuilder::new();
    let (x, y) = points
        .next()
        .ok_or(RenderError::Backend("polygon has no vertices"))?;
    pb.move_to(x, y);
    for (x, y) in points {
        pb.line_to(x, y);
    }
    pb.close();
    pb.finish()
        .ok_or(RenderError::Backend("polygon path is degenerate"))
}

fn fill(pixmap: &mut Pixmap, path: &tiny_skia::Path, color: RGBA8) {
    let mut paint = Paint::default();
    paint.set_color(to_color(color));
    paint.anti_alias = true;
    pixmap.fill_path(path, &paint, FillRule::Winding, Transform::identity(), None);
}

fn stroke(
    pixmap: &mut Pixmap,
    path: &tiny_skia::Path,
    style: &StrokeStyle,
    scaling: f32,
) -> Result<(), RenderError> {
    let mut paint = Paint::default();
    paint.set_color(to_color(style.color));
    paint.anti_alias = true;

    let dash = match style.dash {
        Some([on, off]) => Some(
            StrokeDash::new(vec![on * scaling, off * scaling], 0.0)
                .ok_or(RenderError::Backend("dash pattern is invalid"))?,
        ),
        None => None,
    };
    let props = Stroke {
        width: style.width * scaling,
        dash,
        ..Stroke::default()
    };

    pixmap.stroke_path(path, &paint, &props, Transform::identity(), None);
    Ok(())
}

fn to_color(color: RGBA8) -> Color {
    Color::from_rgba8(color.r, color.g, color.b, color.a)
}

/// The ways rendering the emblem can fail.  Neither case is retried; both propagate straight out
/// of the binary.
#[derive(Debug)]
pub enum RenderError {
    /// The raster backend rejected the drawing surface or one of the shapes
    Backend(&'static str),
    /// The output file could not be created or written
    Io(io::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Backend(what) => write!(f, "raster backend failure: {}", what),
            RenderError::Io(e) => write!(f, "can't write image: {}", e),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Backend(_) => None,
            RenderError::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for RenderError {
    fn from(e: io::Error) -> Self {
        RenderError::Io(e)
    }
}

impl From<png::EncodingError> for RenderError {
    fn from(e: png::EncodingError) -> Self {
        match e {
            png::EncodingError::IoError(io_err) => RenderError::Io(io_err),
            _ => RenderError::Backend("png encoder rejected the image"),
        }
    }
}
