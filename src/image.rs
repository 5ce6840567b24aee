//! A styled list of drawing primitives, sitting between the emblem's geometry and the raster
//! backend.  Only the four primitive kinds the emblem draws exist here.

use rgb::RGBA8;

use crate::{utils, V2};

/// A complete drawing, composed of many [`Elem`]ents painted first-to-last.  [`Image`]s use world
/// units, in which the ring of nodes has radius 1.
#[derive(Debug, Clone)]
pub struct Image {
    elements: Vec<Elem>,
}

impl Image {
    /// Creates an empty `Image` (i.e. one which contains no [`Elem`]s)
    pub fn empty() -> Self {
        Self { elements: vec![] }
    }

    /// Adds a new [`Elem`] to this `Image`, to be painted over everything added before it
    pub fn add(&mut self, elem: Elem) {
        self.elements.push(elem)
    }

    pub fn elements(&self) -> &[Elem] {
        self.elements.as_slice()
    }

    /// Computes the smallest bounding box which fits around every [`Elem`] in this `Image`, as a
    /// (min, max) pair.  This returns `None` if the `Image` contains no [`Elem`]s.
    pub fn bbox(&self) -> Option<(V2, V2)> {
        utils::bbox(self.elements.iter().flat_map(|elem| {
            let (min, max) = elem.bbox();
            [min, max]
        }))
    }
}

/// The shape of a single drawing primitive
#[derive(Debug, Clone)]
pub enum Elem {
    /// A filled closed polygon
    Polygon(Vec<V2>, FillStyle),
    /// A filled circle
    Disc {
        centre: V2,
        radius: f32,
        style: FillStyle,
    },
    /// A straight stroked line segment
    LineSegment(V2, V2, StrokeStyle),
    /// An unfilled stroked circle outline
    Ring {
        centre: V2,
        radius: f32,
        style: StrokeStyle,
    },
}

impl Elem {
    /// Returns the smallest bounding box which contains this element
    pub fn bbox(&self) -> (V2, V2) {
        match self {
            Elem::Polygon(verts, _) => utils::bbox(verts.iter().copied()).unwrap(),
            Elem::LineSegment(p1, p2, _) => utils::bbox([*p1, *p2]).unwrap(),
            Elem::Disc { centre, radius, .. } | Elem::Ring { centre, radius, .. } => {
                let half_extent = V2::new(*radius, *radius);
                (*centre - half_extent, *centre + half_extent)
            }
        }
    }
}

/// The visual style of the body of a filled [`Elem`]
#[derive(Debug, Clone, Copy)]
pub struct FillStyle {
    pub color: RGBA8,
}

/// The visual style of the outline of a stroked [`Elem`].  Widths and dash lengths are in world
/// units, and get multiplied by the scale factor at rasterization time.
#[derive(Debug, Clone, Copy)]
pub struct StrokeStyle {
    pub color: RGBA8,
    pub width: f32,
    /// `Some([on, off])` strokes a repeating dash pattern instead of a solid line
    pub dash: Option<[f32; 2]>,
}

/// Configuration for how the emblem should be rendered
#[derive(Debug, Clone)]
pub struct RenderingOpts {
    /// What color the central hexagon should be filled
    pub(crate) core_fill_color: RGBA8,

    /// What color the four outer nodes should be filled
    pub(crate) node_fill_color: RGBA8,
    /// If the ring of nodes has radius ~1 unit, how many units wide each node disc is
    pub(crate) node_radius: f32,

    /// The colour and width of the node-to-node links
    pub(crate) link_color: RGBA8,
    pub(crate) link_width: f32,

    /// The colour and width of the radial spokes
    pub(crate) spoke_color: RGBA8,
    pub(crate) spoke_width: f32,

    /// The colour, width and (on, off) dash pattern of the guide circles
    pub(crate) guide_color: RGBA8,
    pub(crate) guide_width: f32,
    pub(crate) guide_dash: [f32; 2],

    /// The colour the canvas is cleared to before anything is painted
    pub(crate) background_color: RGBA8,
    /// How many units of space will be reserved round the edge of the canvas
    pub(crate) padding: f32,
}

impl Default for RenderingOpts {
    fn default() -> Self {
        Self {
            core_fill_color: RGBA8::new(0x00, 0xff, 0xff, 153), // cyan at 0.6 alpha

            node_fill_color: RGBA8::new(0xff, 0x00, 0xff, 179), // magenta at 0.7 alpha
            node_radius: 0.15,

            link_color: RGBA8::new(0xff, 0xff, 0xff, 128), // white at 0.5 alpha
            link_width: 0.012,

            spoke_color: RGBA8::new(0x00, 0xff, 0x00, 179), // green at 0.7 alpha
            spoke_width: 0.015,

            guide_color: RGBA8::new(0xff, 0xff, 0x00, 77), // yellow at 0.3 alpha
            guide_width: 0.010,
            guide_dash: [0.037, 0.016],

            background_color: RGBA8::new(0, 0, 0, 255),
            padding: 0.05, // world units
        }
    }
}
