//! Symmetry transforms that turn a canonical [`Template`] into a concrete
//! placement around a target cell.
//!
//! A template is drawn with its right angle at the origin, the vertical leg
//! along the row axis and the horizontal leg along the column axis. An
//! [`Orientation`] optionally swaps the legs, then reflects the row axis
//! and/or the column axis about the unit square. A [`Configuration`] pairs
//! an orientation with the anchor cell of the template that lands on the
//! target.

use crate::{
    coord::{Cell, RasterPoint},
    template::Template,
    util::two_combination_iter,
};

/// A leg swap followed by optional reflections.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Orientation {
    /// Exchange the row and column axes.
    pub swap: bool,
    /// Reflect the row axis (mirror top to bottom).
    pub flip_h: bool,
    /// Reflect the column axis (mirror left to right).
    pub flip_v: bool,
}

impl Orientation {
    /// The orientation that leaves every point in place.
    pub const IDENTITY: Orientation = Orientation::new(false, false, false);

    /// Every orientation, in enumeration order: without swap (none, h, v,
    /// hv), then with swap (none, h, v, hv).
    pub const ALL: [Orientation; 8] = [
        Orientation::new(false, false, false),
        Orientation::new(false, true, false),
        Orientation::new(false, false, true),
        Orientation::new(false, true, true),
        Orientation::new(true, false, false),
        Orientation::new(true, true, false),
        Orientation::new(true, false, true),
        Orientation::new(true, true, true),
    ];

    /// Create a new orientation.
    pub const fn new(swap: bool, flip_h: bool, flip_v: bool) -> Self {
        Orientation {
            swap,
            flip_h,
            flip_v,
        }
    }

    /// Return the orientations worth trying for a template.
    ///
    /// Swapping the legs of a symmetrical template reproduces the same
    /// shape, so the swapped half is skipped.
    pub fn candidates(symmetrical: bool) -> &'static [Orientation] {
        if symmetrical {
            &Self::ALL[..4]
        } else {
            &Self::ALL
        }
    }

    fn reflect(self, (mut first, mut second): (i32, i32), unit: i32) -> (i32, i32) {
        if self.flip_h {
            first = unit - first;
        }
        if self.flip_v {
            second = unit - second;
        }
        (first, second)
    }

    /// Apply the orientation to a cell-space offset.
    pub fn apply_cell(self, offset: Cell) -> Cell {
        let offset = if self.swap { offset.swapped() } else { offset };
        let (row, column) = self.reflect((offset.row, offset.column), 1);
        Cell::new(row, column)
    }

    /// Apply the orientation to a raster-space offset, where one cell spans
    /// `scale` raster steps.
    pub fn apply_raster(self, offset: RasterPoint, scale: i32) -> RasterPoint {
        let offset = if self.swap { offset.swapped() } else { offset };
        let (row, column) = self.reflect((offset.row, offset.column), scale);
        RasterPoint::new(row, column)
    }
}

/// One way of laying a template over a target cell.
///
/// A configuration is only meaningful together with the template whose
/// anchor list it indexes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Configuration {
    /// The symmetry applied to the template.
    pub orientation: Orientation,
    /// Index into [`Template::anchors`] of the template cell that covers the
    /// target.
    pub anchor: usize,
}

impl Configuration {
    /// Create a new configuration.
    pub const fn new(orientation: Orientation, anchor: usize) -> Self {
        Configuration {
            orientation,
            anchor,
        }
    }

    /// Return every configuration of the template in enumeration order:
    /// orientation outermost, anchor innermost.
    pub fn all(template: &Template) -> impl Iterator<Item = Configuration> {
        let orientations = Orientation::candidates(template.is_symmetrical());

        two_combination_iter([orientations.len(), template.anchors().len()])
            .map(move |[orientation, anchor]| Configuration::new(orientations[orientation], anchor))
    }

    fn anchor_cell(&self, template: &Template) -> Cell {
        template.anchors()[self.anchor]
    }

    /// Map a template-local cell-space point to puzzle coordinates, given
    /// the target cell the anchor is laid over.
    ///
    /// # Panics
    ///
    /// Panics if the anchor index is out of range for the template.
    pub fn transform_cell(&self, template: &Template, target: Cell, point: Cell) -> Cell {
        let offset = point - self.anchor_cell(template);
        self.orientation.apply_cell(offset) + target
    }

    /// Map a template-local raster point to absolute raster coordinates,
    /// given the target cell the anchor is laid over.
    ///
    /// # Panics
    ///
    /// Panics if the anchor index is out of range for the template.
    pub fn transform_raster(
        &self,
        template: &Template,
        target: Cell,
        point: RasterPoint,
    ) -> RasterPoint {
        let scale = template.scale();
        let offset = point - self.anchor_cell(template).to_raster(scale);
        self.orientation.apply_raster(offset, scale) + target.to_raster(scale)
    }

    /// Return the length of the leg that ends up along the column axis.
    pub fn horizontal_leg(&self, template: &Template) -> i32 {
        if self.orientation.swap {
            template.rows()
        } else {
            template.columns()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCALE: i32 = 10;

    fn sample_points() -> Vec<RasterPoint> {
        vec![
            RasterPoint::new(0, 0),
            RasterPoint::new(3, 17),
            RasterPoint::new(-4, 9),
            RasterPoint::new(25, -12),
        ]
    }

    #[test]
    fn double_flip_is_identity() {
        let flip_h = Orientation::new(false, true, false);
        let flip_v = Orientation::new(false, false, true);
        for point in sample_points() {
            let once = flip_h.apply_raster(point, SCALE);
            assert_eq!(flip_h.apply_raster(once, SCALE), point);
            let once = flip_v.apply_raster(point, SCALE);
            assert_eq!(flip_v.apply_raster(once, SCALE), point);
        }
    }

    #[test]
    fn double_swap_is_identity() {
        let swap = Orientation::new(true, false, false);
        for point in sample_points() {
            let once = swap.apply_raster(point, SCALE);
            assert_eq!(once, point.swapped());
            assert_eq!(swap.apply_raster(once, SCALE), point);
        }
    }

    #[test]
    fn swap_then_reflect() {
        let orientation = Orientation::new(true, true, false);
        assert_eq!(orientation.apply_cell(Cell::new(2, 5)), Cell::new(-4, 2));
        assert_eq!(
            orientation.apply_raster(RasterPoint::new(20, 50), SCALE),
            RasterPoint::new(-40, 20)
        );
    }

    #[test]
    fn all_flags_is_involution() {
        let all = Orientation::new(true, true, true);
        for point in sample_points() {
            let once = all.apply_raster(point, SCALE);
            assert_eq!(all.apply_raster(once, SCALE), point);
        }
        let cell = Cell::new(2, -5);
        assert_eq!(all.apply_cell(all.apply_cell(cell)), cell);
    }

    #[test]
    fn flips_keep_unit_square_in_place() {
        for orientation in Orientation::ALL {
            let corners: Vec<_> = [(0, 0), (0, 1), (1, 0), (1, 1)]
                .into_iter()
                .map(|(row, column)| orientation.apply_cell(Cell::new(row, column)))
                .collect();
            for corner in corners {
                assert!((0..=1).contains(&corner.row) && (0..=1).contains(&corner.column));
            }
        }
    }

    #[test]
    fn symmetrical_templates_skip_swaps() {
        assert_eq!(Orientation::candidates(true).len(), 4);
        assert!(Orientation::candidates(true).iter().all(|o| !o.swap));
        assert_eq!(Orientation::candidates(false).len(), 8);
    }

    #[test]
    fn configuration_enumeration_order() {
        let template = Template::new(2, 4, SCALE);
        let configurations: Vec<_> = Configuration::all(&template).collect();

        assert_eq!(template.anchors().len(), 2);
        assert_eq!(configurations.len(), 16);
        assert_eq!(configurations[0], Configuration::new(Orientation::IDENTITY, 0));
        assert_eq!(configurations[1], Configuration::new(Orientation::IDENTITY, 1));
        assert_eq!(
            configurations[2],
            Configuration::new(Orientation::new(false, true, false), 0)
        );
        assert_eq!(
            configurations[15],
            Configuration::new(Orientation::new(true, true, true), 1)
        );

        let square = Template::new(2, 2, SCALE);
        assert_eq!(Configuration::all(&square).count(), 4);
    }

    #[test]
    fn anchor_lands_on_target() {
        let template = Template::new(4, 6, SCALE);
        let target = Cell::new(7, 3);
        for configuration in Configuration::all(&template) {
            let anchor = template.anchors()[configuration.anchor];
            let inner = configuration.transform_raster(&template, target, anchor.inner_raster(SCALE));
            assert_eq!(inner.containing_cell(SCALE), Some(target));
        }
    }

    #[test]
    fn cell_and_raster_transforms_agree_on_vertices() {
        let template = Template::new(3, 4, SCALE);
        let target = Cell::new(5, 5);
        let corners = [Cell::new(0, 0), Cell::new(0, 4), Cell::new(3, 0)];
        for configuration in Configuration::all(&template) {
            for (corner, vertex) in corners.iter().zip(template.vertices()) {
                let by_cell = configuration
                    .transform_cell(&template, target, *corner)
                    .to_raster(SCALE);
                let by_raster = configuration.transform_raster(&template, target, *vertex);
                assert_eq!(by_cell, by_raster);
            }
        }
    }

    #[test]
    fn horizontal_leg_follows_swap() {
        let template = Template::new(3, 4, SCALE);
        let plain = Configuration::new(Orientation::new(false, true, true), 0);
        let swapped = Configuration::new(Orientation::new(true, false, false), 0);
        assert_eq!(plain.horizontal_leg(&template), 4);
        assert_eq!(swapped.horizontal_leg(&template), 3);
    }
}
