//! Closed-form geometry of the emblem.  Every coordinate is derived from a handful of fixed
//! constants, so two runs always produce exactly the same drawing.

use angle::Deg;
use itertools::Itertools;

use crate::image::{Elem, FillStyle, Image, RenderingOpts, StrokeStyle};
use crate::{utils, V2};

/// Circumradius of the central hexagon
const HEX_RADIUS: f32 = 0.5;
/// Radius of the ring on which the four nodes sit
const NODE_RING_RADIUS: f32 = 1.0;
/// Radius of the innermost guide circle; the other two are golden-ratio multiples of it
const GUIDE_BASE_RADIUS: f32 = 0.3;

/// The golden ratio, used to space the nested guide circles
pub(crate) fn golden_ratio() -> f32 {
    (1.0 + 5.0f32.sqrt()) / 2.0
}

/// The fixed geometry of the emblem, in world units: the node ring has radius 1 and the y-axis
/// points up (rasterization flips it).
#[derive(Debug, Clone)]
pub struct Emblem {
    /// The vertices of the central hexagon, in anticlockwise order round its circumcircle
    hexagon: Vec<V2>,
    /// The centres of the four outer nodes
    nodes: Vec<V2>,
    /// The radii of the three dashed guide circles, innermost first
    guide_radii: [f32; 3],
}

impl Emblem {
    /// Computes the emblem's geometry from its closed-form constants
    pub fn new() -> Self {
        // 6 hexagon vertices, evenly spaced over a full turn starting on the positive x-axis
        let hexagon = (0..6)
            .map(|i| utils::polar(HEX_RADIUS, Deg(i as f32 * 60.0)))
            .collect_vec();
        // 4 nodes, one on each diagonal
        let nodes = (0..4)
            .map(|i| utils::polar(NODE_RING_RADIUS, Deg(45.0 + i as f32 * 90.0)))
            .collect_vec();
        // Nested guide circles, each one golden-ratio step further out than the last
        let phi = golden_ratio();
        let guide_radii = [
            GUIDE_BASE_RADIUS,
            GUIDE_BASE_RADIUS * phi,
            GUIDE_BASE_RADIUS * phi * phi,
        ];

        Self {
            hexagon,
            nodes,
            guide_radii,
        }
    }

    pub fn hexagon(&self) -> &[V2] {
        &self.hexagon
    }

    pub fn nodes(&self) -> &[V2] {
        &self.nodes
    }

    /// Every unordered pair of distinct nodes, each drawn as a straight link
    pub fn node_links(&self) -> Vec<(V2, V2)> {
        self.nodes.iter().copied().tuple_combinations().collect_vec()
    }

    /// The radial segments running from the origin out to each node
    pub fn spokes(&self) -> Vec<(V2, V2)> {
        let origin = V2::new(0.0, 0.0);
        self.nodes.iter().map(|&node| (origin, node)).collect_vec()
    }

    pub fn guide_radii(&self) -> [f32; 3] {
        self.guide_radii
    }

    /// Lowers the emblem to a styled element list.  Elements are added in paint order: the
    /// hexagon is painted first and the guide circles last.
    pub fn image(&self, opts: &RenderingOpts) -> Image {
        let mut image = Image::empty();

        // Central core hexagon
        image.add(Elem::Polygon(
            self.hexagon.clone(),
            FillStyle {
                color: opts.core_fill_color,
            },
        ));

        // The four nodes
        for &centre in &self.nodes {
            image.add(Elem::Disc {
                centre,
                radius: opts.node_radius,
                style: FillStyle {
                    color: opts.node_fill_color,
                },
            });
        }

        // Links between every pair of nodes
        for (p1, p2) in self.node_links() {
            image.add(Elem::LineSegment(
                p1,
                p2,
                StrokeStyle {
                    color: opts.link_color,
                    width: opts.link_width,
                    dash: None,
                },
            ));
        }

        // Spokes from the centre to each node
        for (p1, p2) in self.spokes() {
            image.add(Elem::LineSegment(
                p1,
                p2,
                StrokeStyle {
                    color: opts.spoke_color,
                    width: opts.spoke_width,
                    dash: None,
                },
            ));
        }

        // Golden-ratio guide circles
        for &radius in &self.guide_radii {
            image.add(Elem::Ring {
                centre: V2::new(0.0, 0.0),
                radius,
                style: StrokeStyle {
                    color: opts.guide_color,
                    width: opts.guide_width,
                    dash: Some(opts.guide_dash),
                },
            });
        }

        image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The angle of `v` anticlockwise from the positive x-axis, in `0..360` degrees
    fn angle_deg(v: V2) -> f32 {
        v.y.atan2(v.x).to_degrees().rem_euclid(360.0)
    }

    fn assert_v2_eq(a: V2, b: V2) {
        assert!((a - b).length() < 1e-6, "{:?} != {:?}", a, b);
    }

    #[test]
    fn hexagon_has_six_verts_on_its_circumcircle() {
        let emblem = Emblem::new();
        let hexagon = emblem.hexagon();
        assert_eq!(hexagon.len(), 6);
        for (i, v) in hexagon.iter().enumerate() {
            assert!((v.length() - 0.5).abs() < 1e-6);
            let expected_angle = i as f32 * 60.0;
            assert!((angle_deg(*v) - expected_angle).abs() < 1e-3);
        }
    }

    #[test]
    fn nodes_sit_on_the_diagonals_of_the_unit_ring() {
        let emblem = Emblem::new();
        let nodes = emblem.nodes();
        assert_eq!(nodes.len(), 4);
        for (i, n) in nodes.iter().enumerate() {
            assert!((n.length() - 1.0).abs() < 1e-6);
            let expected_angle = 45.0 + i as f32 * 90.0;
            assert!((angle_deg(*n) - expected_angle).abs() < 1e-3);
        }
    }

    #[test]
    fn every_node_pair_is_linked_exactly_once() {
        let emblem = Emblem::new();
        let links = emblem.node_links();
        assert_eq!(links.len(), 6);

        let nodes = emblem.nodes();
        let mut expected = Vec::new();
        for i in 0..nodes.len() {
            for j in (i + 1)..nodes.len() {
                expected.push((nodes[i], nodes[j]));
            }
        }
        for (link, exp) in links.iter().zip(&expected) {
            assert_v2_eq(link.0, exp.0);
            assert_v2_eq(link.1, exp.1);
        }
    }

    #[test]
    fn one_spoke_runs_from_the_origin_to_each_node() {
        let emblem = Emblem::new();
        let spokes = emblem.spokes();
        assert_eq!(spokes.len(), 4);
        for (spoke, &node) in spokes.iter().zip(emblem.nodes()) {
            assert_v2_eq(spoke.0, V2::new(0.0, 0.0));
            assert_v2_eq(spoke.1, node);
        }
    }

    #[test]
    fn guide_radii_grow_by_the_golden_ratio() {
        let emblem = Emblem::new();
        let [r1, r2, r3] = emblem.guide_radii();
        let phi = golden_ratio();
        assert_eq!(r1, 0.3);
        assert!((r2 - r1 * phi).abs() < 1e-9);
        assert!((r3 - r1 * phi * phi).abs() < 1e-9);
    }

    #[test]
    fn image_contains_every_primitive_of_the_emblem() {
        let image = Emblem::new().image(&RenderingOpts::default());

        let mut num_polygons = 0;
        let mut num_discs = 0;
        let mut num_solid_segments = 0;
        let mut num_dashed_rings = 0;
        for elem in image.elements() {
            match elem {
                Elem::Polygon(verts, _) => {
                    assert_eq!(verts.len(), 6);
                    num_polygons += 1;
                }
                Elem::Disc { .. } => num_discs += 1,
                Elem::LineSegment(_, _, style) => {
                    assert!(style.dash.is_none());
                    num_solid_segments += 1;
                }
                Elem::Ring { style, .. } => {
                    assert!(style.dash.is_some());
                    num_dashed_rings += 1;
                }
            }
        }

        assert_eq!(num_polygons, 1);
        assert_eq!(num_discs, 4);
        assert_eq!(num_solid_segments, 6 + 4); // 6 links + 4 spokes
        assert_eq!(num_dashed_rings, 3);
    }
}
