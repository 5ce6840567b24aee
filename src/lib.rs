use vector2d::Vector2D;

mod emblem;
mod image;
mod raster;
mod utils;

pub use emblem::Emblem;
pub use image::{Elem, FillStyle, Image, RenderingOpts, StrokeStyle};
pub use raster::{rasterize, write_png, RenderError};

/// Type alias for 2D floating point vectors (geometric vectors, not [`Vec`])
pub type V2 = Vector2D<f32>;
