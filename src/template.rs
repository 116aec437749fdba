//! Canonical right triangles and the library of every triangle a puzzle
//! may need.
//!
//! A [`Template`] with legs `(rows, columns)` has its right angle at the
//! origin, its vertical leg running down the row axis and its horizontal leg
//! running right along the column axis. All geometry is rasterised at a fixed
//! scale and computed with integer arithmetic only.

use crate::{
    configuration::Configuration,
    coord::{Cell, RasterPoint},
};
use std::collections::{BTreeMap, BTreeSet};

/// Greatest common divisor of two positive integers.
pub(crate) fn gcd(mut a: i32, mut b: i32) -> i32 {
    while b != 0 {
        let rem = a % b;
        a = b;
        b = rem;
    }
    a
}

/// A right triangle with integer legs, rasterised in template-local
/// coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    rows: i32,
    columns: i32,
    scale: i32,

    vertices: [RasterPoint; 3],
    boundary: Vec<RasterPoint>,
    interior: Vec<RasterPoint>,
    anchors: Vec<Cell>,
}

impl Template {
    /// Build the template with a vertical leg of `rows` cells and a
    /// horizontal leg of `columns` cells at the given raster scale.
    pub fn new(rows: i32, columns: i32, scale: i32) -> Self {
        assert!(rows > 0 && columns > 0, "Leg lengths must be positive.");
        assert!(scale > 0, "Raster scale must be positive.");
        assert!(
            (rows * columns) % 2 == 0,
            "Leg product must be even for the area to be an integer."
        );

        let height = rows * scale;
        let width = columns * scale;

        // Reduced slope of the hypotenuse. Every lattice point on it is
        // reached by stepping (-reduced_rows, reduced_columns).
        let factor = gcd(rows, columns);
        let reduced_rows = rows / factor;
        let reduced_columns = columns / factor;

        let vertices = [
            RasterPoint::new(0, 0),
            RasterPoint::new(0, width),
            RasterPoint::new(height, 0),
        ];

        let boundary = (1..width)
            .map(|j| RasterPoint::new(0, j))
            .chain((1..height).map(|i| RasterPoint::new(i, 0)))
            .chain((1..factor * scale).map(|k| {
                RasterPoint::new(height - k * reduced_rows, k * reduced_columns)
            }))
            .collect();

        // (i, j) is strictly inside iff i * width + j * height < height * width,
        // which after dividing by `factor * scale` is the test below.
        let mut interior = Vec::new();
        for i in 1..height {
            let mut j = 1;
            while j * reduced_rows < (height - i) * reduced_columns {
                interior.push(RasterPoint::new(i, j));
                j += 1;
            }
        }

        // Cell (i, j) fits iff its far corner (i + 1, j + 1) is inside the
        // triangle or on the hypotenuse.
        let mut anchors = Vec::new();
        for i in 0..rows {
            let mut j = 0;
            while (j + 1) * reduced_rows <= (rows - i - 1) * reduced_columns {
                anchors.push(Cell::new(i, j));
                j += 1;
            }
        }

        Template {
            rows,
            columns,
            scale,
            vertices,
            boundary,
            interior,
            anchors,
        }
    }

    /// Length of the vertical leg, in cells.
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Length of the horizontal leg, in cells.
    pub fn columns(&self) -> i32 {
        self.columns
    }

    /// The leg pair `(rows, columns)`.
    pub fn legs(&self) -> (i32, i32) {
        (self.rows, self.columns)
    }

    /// The raster scale the template was built at.
    pub fn scale(&self) -> i32 {
        self.scale
    }

    /// Area of the triangle in cells.
    pub fn area(&self) -> u32 {
        (self.rows * self.columns / 2) as u32
    }

    /// The right-angle corner, the end of the horizontal leg and the end of
    /// the vertical leg, in raster coordinates.
    pub fn vertices(&self) -> &[RasterPoint; 3] {
        &self.vertices
    }

    /// Lattice points on the edges, vertices excluded.
    pub fn boundary(&self) -> &[RasterPoint] {
        &self.boundary
    }

    /// Lattice points strictly inside the triangle.
    pub fn interior(&self) -> &[RasterPoint] {
        &self.interior
    }

    /// Cells of the bounding box that lie entirely inside the triangle, in
    /// row-major order.
    pub fn anchors(&self) -> &[Cell] {
        &self.anchors
    }

    /// Return true if the raster point lies strictly inside the triangle.
    pub fn contains_interior(&self, point: RasterPoint) -> bool {
        let factor = gcd(self.rows, self.columns);
        let height = self.rows * self.scale;

        point.row > 0
            && point.column > 0
            && point.column * (self.rows / factor)
                < (height - point.row) * (self.columns / factor)
    }

    /// Return true if the interior of every anchor cell is inside the
    /// triangle at this scale.
    ///
    /// At coarse scales small triangles have too few interior points to cover
    /// the cells they are anchored on.
    pub fn covers_anchors(&self) -> bool {
        self.anchors
            .iter()
            .all(|anchor| self.contains_interior(anchor.inner_raster(self.scale)))
    }

    /// Return true if swapping the legs yields the same shape.
    pub fn is_symmetrical(&self) -> bool {
        self.rows == self.columns
    }

    /// Return every configuration of this template in enumeration order.
    pub fn configurations(&self) -> impl Iterator<Item = Configuration> {
        Configuration::all(self)
    }
}

/// Every template a puzzle may use, grouped by area.
#[derive(Debug, Clone)]
pub struct TemplateLibrary {
    scale: i32,
    templates: Vec<Template>,
    by_area: BTreeMap<u32, Vec<usize>>,
}

impl TemplateLibrary {
    /// Create an empty library for templates at the given scale.
    pub fn new(scale: i32) -> Self {
        assert!(scale > 0, "Raster scale must be positive.");

        TemplateLibrary {
            scale,
            templates: Vec::new(),
            by_area: BTreeMap::new(),
        }
    }

    /// Build the library holding every usable leg pair for each of the given
    /// areas on a grid of `grid = (rows, columns)` cells.
    ///
    /// A pair is usable when both legs are at least 2 cells long and the
    /// triangle fits the grid in some orientation. An area left without any
    /// usable pair gets no templates, so its targets have no placements.
    pub fn for_areas(
        areas: impl IntoIterator<Item = u32>,
        scale: i32,
        grid: (usize, usize),
    ) -> Self {
        let areas: BTreeSet<u32> = areas.into_iter().collect();
        let short_side = grid.0.min(grid.1);
        let long_side = grid.0.max(grid.1);
        let mut library = Self::new(scale);

        for &area in &areas {
            for (rows, columns) in Self::leg_pairs(area) {
                if rows as usize <= short_side && columns as usize <= long_side {
                    library.insert(Template::new(rows, columns, scale));
                }
            }
        }

        log::debug!(
            "Generated {} templates at scale {} for {} of {} areas.",
            library.len(),
            scale,
            library.by_area.len(),
            areas.len()
        );

        library
    }

    /// Return every leg pair `(rows, columns)` with `2 <= rows <= columns`
    /// whose triangle has the given area.
    ///
    /// Transposed pairs are omitted; they are reached through the leg swap of
    /// [`Orientation`](crate::Orientation). Legs of length 1 are omitted since
    /// no cell fits inside such a triangle, as are pairs whose long leg does
    /// not fit in an `i32`.
    pub fn leg_pairs(area: u32) -> impl Iterator<Item = (i32, i32)> {
        let doubled = 2 * u64::from(area);

        (2u64..)
            .take_while(move |rows| rows * rows <= doubled)
            .filter(move |rows| doubled % rows == 0)
            .filter_map(move |rows| {
                let rows = i32::try_from(rows).ok()?;
                let columns = i32::try_from(doubled / rows as u64).ok()?;
                Some((rows, columns))
            })
    }

    /// Register a template, returning its index.
    ///
    /// # Panics
    ///
    /// Panics if the template was built at a different scale.
    pub fn insert(&mut self, template: Template) -> usize {
        assert_eq!(
            template.scale(),
            self.scale,
            "Template scale does not match the library scale."
        );

        let index = self.templates.len();
        self.by_area.entry(template.area()).or_default().push(index);
        self.templates.push(template);
        index
    }

    /// The raster scale shared by all templates.
    pub fn scale(&self) -> i32 {
        self.scale
    }

    /// Return the template with the given index.
    pub fn get(&self, index: usize) -> &Template {
        &self.templates[index]
    }

    /// Return all templates in registration order.
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Return the indices of the templates with the given area, in
    /// registration order.
    pub fn for_area(&self, area: u32) -> &[usize] {
        self.by_area.get(&area).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Return the number of templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Return true if the library holds no templates.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn gcd_reduces() {
        assert_eq!(gcd(12, 8), 4);
        assert_eq!(gcd(3, 7), 1);
        assert_eq!(gcd(6, 6), 6);
    }

    #[test]
    fn vertices_are_scaled_legs() {
        let template = Template::new(3, 4, 10);
        assert_eq!(
            template.vertices(),
            &[
                RasterPoint::new(0, 0),
                RasterPoint::new(0, 40),
                RasterPoint::new(30, 0)
            ]
        );
        assert_eq!(template.area(), 6);
        assert_eq!(template.legs(), (3, 4));
        assert!(!template.is_symmetrical());
        assert!(Template::new(4, 4, 10).is_symmetrical());
    }

    // Pick's theorem gives the exact number of interior lattice points:
    // 2I = 2A - B + 2, with B counting every boundary point.
    #[test]
    fn interior_count_matches_picks_theorem() {
        for &(rows, columns) in &[(2, 2), (2, 3), (4, 3), (4, 4), (3, 6), (8, 5), (2, 11)] {
            for &scale in &[1, 4, 10] {
                let template = Template::new(rows, columns, scale);
                let height = rows * scale;
                let width = columns * scale;
                let boundary_total = template.boundary().len() as i32 + 3;

                assert_eq!(
                    boundary_total,
                    height + width + gcd(height, width),
                    "boundary of {}x{} at scale {}",
                    rows,
                    columns,
                    scale
                );
                assert_eq!(
                    2 * template.interior().len() as i32,
                    height * width - boundary_total + 2,
                    "interior of {}x{} at scale {}",
                    rows,
                    columns,
                    scale
                );
            }
        }
    }

    #[test]
    fn interior_area_converges_to_triangle_area() {
        let template = Template::new(4, 5, 10);
        let scaled = template.interior().len() as f64 / 100.0;
        let area = f64::from(template.area());
        assert!(scaled < area);
        assert!(area - scaled < (4.0 + 5.0 + 1.0) / (2.0 * 10.0));
    }

    #[test]
    fn boundary_points_lie_on_edges() {
        let template = Template::new(4, 6, 5);
        let (height, width) = (20, 30);
        for point in template.boundary() {
            let on_legs = (point.row == 0 && 0 < point.column && point.column < width)
                || (point.column == 0 && 0 < point.row && point.row < height);
            let on_hypotenuse = point.row * width + point.column * height == height * width
                && point.row > 0
                && point.column > 0;
            assert!(on_legs || on_hypotenuse, "{} is off the boundary", point);
        }

        let unique: HashSet<_> = template.boundary().iter().collect();
        assert_eq!(unique.len(), template.boundary().len());
    }

    #[test]
    fn interior_points_are_strictly_inside() {
        let template = Template::new(2, 7, 10);
        let (height, width) = (20, 70);
        for point in template.interior() {
            assert!(point.row > 0 && point.column > 0);
            assert!(point.row * width + point.column * height < height * width);
        }

        let boundary: HashSet<_> = template.boundary().iter().collect();
        assert!(template.interior().iter().all(|p| !boundary.contains(p)));
    }

    #[test]
    fn anchors_fit_inside() {
        assert_eq!(Template::new(2, 2, 10).anchors(), &[Cell::new(0, 0)]);
        assert_eq!(
            Template::new(2, 4, 10).anchors(),
            &[Cell::new(0, 0), Cell::new(0, 1)]
        );
        assert_eq!(
            Template::new(4, 4, 10).anchors(),
            &[
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(0, 2),
                Cell::new(1, 0),
                Cell::new(1, 1),
                Cell::new(2, 0)
            ]
        );
        assert_eq!(Template::new(2, 3, 10).anchors(), &[Cell::new(0, 0)]);
        assert!(Template::new(1, 12, 10).anchors().is_empty());
    }

    #[test]
    #[should_panic(expected = "Leg product must be even")]
    fn odd_leg_product_panics() {
        let _template = Template::new(3, 5, 10);
    }

    #[test]
    fn leg_pairs_cover_every_factorization() {
        assert_eq!(
            TemplateLibrary::leg_pairs(6).collect::<Vec<_>>(),
            vec![(2, 6), (3, 4)]
        );
        assert_eq!(
            TemplateLibrary::leg_pairs(8).collect::<Vec<_>>(),
            vec![(2, 8), (4, 4)]
        );
        assert_eq!(TemplateLibrary::leg_pairs(0).count(), 0);
        assert_eq!(TemplateLibrary::leg_pairs(1).count(), 0);
    }

    #[test]
    fn leg_pairs_of_huge_areas() {
        let pairs: Vec<_> = TemplateLibrary::leg_pairs(1_500_000_000).take(3).collect();
        assert_eq!(pairs, vec![(2, 1_500_000_000), (3, 1_000_000_000), (4, 750_000_000)]);

        // 2 * u32::MAX = 2 * 3 * 5 * 17 * 257 * 65537. The long legs for
        // rows 2 and 3 overflow an i32 and are dropped.
        let pairs: Vec<_> = TemplateLibrary::leg_pairs(u32::MAX).collect();
        assert_eq!(pairs[0], (5, 1_717_986_918));
        assert!(pairs.iter().all(|(rows, columns)| rows <= columns));
    }

    #[test]
    fn library_groups_by_area() {
        let library = TemplateLibrary::for_areas([3, 8, 3], 10, (8, 8));

        assert_eq!(library.len(), 3);
        assert_eq!(library.for_area(3).len(), 1);
        assert_eq!(library.for_area(8).len(), 2);
        assert!(library.for_area(5).is_empty());
        for &index in library.for_area(8) {
            assert_eq!(library.get(index).area(), 8);
        }
        assert_eq!(library.get(library.for_area(8)[1]).legs(), (4, 4));
    }

    #[test]
    fn library_skips_pairs_larger_than_grid() {
        let library = TemplateLibrary::for_areas([8, 50_000, 1_500_000_000], 10, (4, 6));

        assert_eq!(library.len(), 1);
        assert_eq!(library.get(library.for_area(8)[0]).legs(), (4, 4));
        assert!(library.for_area(50_000).is_empty());
        assert!(library.for_area(1_500_000_000).is_empty());

        let wide = TemplateLibrary::for_areas([8], 10, (2, 9));
        assert_eq!(wide.len(), 1);
        assert_eq!(wide.get(0).legs(), (2, 8));
    }

    #[test]
    fn anchors_are_covered_unless_scale_is_too_coarse() {
        for &(rows, columns) in &[(2, 2), (2, 3), (4, 4), (3, 8), (5, 8)] {
            assert!(Template::new(rows, columns, 10).covers_anchors());
            assert!(Template::new(rows, columns, 2).covers_anchors());
        }

        let coarse = Template::new(2, 2, 1);
        assert!(coarse.interior().is_empty());
        assert!(!coarse.covers_anchors());
    }

    #[test]
    fn contains_interior_matches_interior_points() {
        let template = Template::new(4, 6, 3);
        let interior: HashSet<_> = template.interior().iter().copied().collect();
        for row in -1..=13 {
            for column in -1..=19 {
                let point = RasterPoint::new(row, column);
                assert_eq!(template.contains_interior(point), interior.contains(&point));
            }
        }
    }

    #[test]
    #[should_panic(expected = "Template scale does not match")]
    fn insert_rejects_scale_mismatch() {
        let mut library = TemplateLibrary::new(10);
        library.insert(Template::new(2, 2, 4));
    }
}
