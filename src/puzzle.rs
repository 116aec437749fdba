//! The immutable description of a puzzle and the geometric tests the solver
//! runs against it.

use crate::{
    coord::{Cell, RasterPoint},
    error::Error,
    options::Possibility,
    raster::RasterGrid,
    solution::PlacedTriangle,
    solver::Solver,
    target::TargetTable,
    template::TemplateLibrary,
};

/// Everything the solver needs to know about a puzzle: the numbered cells,
/// the triangles that may cover them and the raster resolution used to test
/// overlaps.
#[derive(Debug, Clone)]
pub struct PuzzleConfig {
    targets: TargetTable,
    library: TemplateLibrary,
    scale: i32,
}

impl PuzzleConfig {
    /// Raster steps per cell edge unless configured otherwise.
    pub const DEFAULT_SCALE: i32 = 10;

    /// Create a puzzle at [`DEFAULT_SCALE`](Self::DEFAULT_SCALE), generating
    /// the templates for every area in the table.
    pub fn new(targets: TargetTable) -> Result<Self, Error> {
        Self::with_scale(targets, Self::DEFAULT_SCALE)
    }

    /// Create a puzzle at the given raster scale, generating the templates for
    /// every area in the table.
    ///
    /// Areas that no triangle fitting the grid can have are accepted; their
    /// targets simply have no placements. The scale must be fine enough for
    /// every generated triangle to cover the cells it is anchored on.
    pub fn with_scale(targets: TargetTable, scale: i32) -> Result<Self, Error> {
        if scale <= 0 {
            return Err(Error::InvalidScale(scale));
        }

        let library = TemplateLibrary::for_areas(
            targets.distinct_areas(),
            scale,
            (targets.num_rows(), targets.num_columns()),
        );
        Self::from_parts(targets, library)
    }

    /// Create a puzzle from a prepared template library.
    ///
    /// Every target area must have at least one template in the library, and
    /// every template must cover its anchor cells at the library's scale.
    pub fn with_library(targets: TargetTable, library: TemplateLibrary) -> Result<Self, Error> {
        if let Some(target) = targets
            .targets()
            .iter()
            .find(|target| library.for_area(target.area).is_empty())
        {
            return Err(Error::MissingTemplate {
                cell: target.cell,
                area: target.area,
            });
        }

        Self::from_parts(targets, library)
    }

    fn from_parts(targets: TargetTable, library: TemplateLibrary) -> Result<Self, Error> {
        if let Some(template) = library
            .templates()
            .iter()
            .find(|template| !template.covers_anchors())
        {
            log::debug!(
                "Template {:?} does not cover its anchors at scale {}.",
                template.legs(),
                library.scale()
            );
            return Err(Error::InvalidScale(library.scale()));
        }

        Ok(Self::new_unchecked(targets, library))
    }

    /// Assemble a puzzle without validating the library.
    pub(crate) fn new_unchecked(targets: TargetTable, library: TemplateLibrary) -> Self {
        PuzzleConfig {
            scale: library.scale(),
            targets,
            library,
        }
    }

    /// Create a puzzle from a prepared template library, requiring it to
    /// match the given scale.
    pub fn with_library_at_scale(
        targets: TargetTable,
        library: TemplateLibrary,
        scale: i32,
    ) -> Result<Self, Error> {
        if library.scale() != scale {
            return Err(Error::ScaleMismatch {
                library: library.scale(),
                puzzle: scale,
            });
        }

        Self::with_library(targets, library)
    }

    /// The numbered cells of the puzzle.
    pub fn targets(&self) -> &TargetTable {
        &self.targets
    }

    /// The templates available to cover targets.
    pub fn library(&self) -> &TemplateLibrary {
        &self.library
    }

    /// Raster steps per cell edge.
    pub fn scale(&self) -> i32 {
        self.scale
    }

    /// Return a snapshot with nothing placed.
    pub fn empty_grid(&self) -> RasterGrid {
        RasterGrid::new(
            self.targets.num_rows(),
            self.targets.num_columns(),
            self.scale,
        )
    }

    fn image(&self, target: usize, possibility: &Possibility, point: RasterPoint) -> RasterPoint {
        let template = self.library.get(possibility.template);
        let cell = self.targets.target(target).cell;
        possibility
            .configuration
            .transform_raster(template, cell, point)
    }

    /// Return the absolute raster points strictly inside the triangle that
    /// `possibility` lays over `target`.
    pub fn interior_of<'a>(
        &'a self,
        target: usize,
        possibility: &'a Possibility,
    ) -> impl Iterator<Item = RasterPoint> + 'a {
        self.library
            .get(possibility.template)
            .interior()
            .iter()
            .map(move |point| self.image(target, possibility, *point))
    }

    /// Return the absolute raster positions of the triangle's vertices.
    pub fn vertices_of(&self, target: usize, possibility: &Possibility) -> [RasterPoint; 3] {
        let vertices = self.library.get(possibility.template).vertices();
        [
            self.image(target, possibility, vertices[0]),
            self.image(target, possibility, vertices[1]),
            self.image(target, possibility, vertices[2]),
        ]
    }

    /// Return true if the triangle can be laid over `target` in `grid`.
    ///
    /// The triangle fits when its vertices are on the grid and not inside a
    /// placed triangle, and none of its interior points is inside a placed
    /// triangle or inside the cell of another target.
    ///
    /// # Panics
    ///
    /// Panics if the template's area differs from the target's area, which
    /// means the possibility was not produced for this target.
    pub fn fits(&self, grid: &RasterGrid, target: usize, possibility: &Possibility) -> bool {
        let required = self.targets.target(target);
        let template = self.library.get(possibility.template);
        assert!(
            template.area() == required.area,
            "Template {:?} has area {}, but target at {} requires area {}.",
            template.legs(),
            template.area(),
            required.cell,
            required.area
        );

        let vertices_clear = self
            .vertices_of(target, possibility)
            .iter()
            .all(|vertex| grid.contains(*vertex) && !grid.is_interior(*vertex));
        if !vertices_clear {
            return false;
        }

        self.interior_of(target, possibility).all(|point| {
            let foreign_target = point
                .containing_cell(self.scale)
                .and_then(|cell| self.targets.target_at(cell))
                .map_or(false, |owner| owner != target);

            grid.contains(point) && !grid.is_interior(point) && !foreign_target
        })
    }

    /// Return a new snapshot equal to `grid` with the triangle's interior
    /// marked.
    ///
    /// The caller is expected to have checked [`fits`](Self::fits).
    pub fn place(&self, grid: &RasterGrid, target: usize, possibility: &Possibility) -> RasterGrid {
        let mut next = grid.clone();
        for point in self.interior_of(target, possibility) {
            next.mark_interior(point);
        }
        next
    }

    /// Return every possibility that fits `target` in `grid`, in enumeration
    /// order: templates in registration order, then configurations.
    ///
    /// Covered targets have no possibilities.
    pub fn possibilities(&self, grid: &RasterGrid, target: usize) -> Vec<Possibility> {
        let required = self.targets.target(target);
        if grid.is_covered(required.cell) {
            return Vec::new();
        }

        self.library
            .for_area(required.area)
            .iter()
            .flat_map(|&template| {
                self.library
                    .get(template)
                    .configurations()
                    .map(move |configuration| Possibility {
                        template,
                        configuration,
                    })
            })
            .filter(|possibility| self.fits(grid, target, possibility))
            .collect()
    }

    /// Describe the triangle that `possibility` lays over `target` in puzzle
    /// units.
    pub fn placed_triangle(&self, target: usize, possibility: &Possibility) -> PlacedTriangle {
        let template = self.library.get(possibility.template);
        let cell = self.targets.target(target).cell;
        let (rows, columns) = template.legs();
        let corners = [Cell::new(0, 0), Cell::new(0, columns), Cell::new(rows, 0)];

        PlacedTriangle {
            target_index: target,
            target: self.targets.target(target),
            legs: template.legs(),
            possibility: *possibility,
            vertices: corners.map(|corner| {
                possibility
                    .configuration
                    .transform_cell(template, cell, corner)
            }),
            horizontal_leg: possibility.configuration.horizontal_leg(template),
        }
    }

    /// Return a solver that enumerates the solutions of this puzzle.
    pub fn solver(&self) -> Solver<'_> {
        Solver::new(self)
    }
}
