use crate::error::ShapeError;

/// A square grid of modules (true = dark), as produced by an encoder.
///
/// Rows are validated once on construction; the grid is immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatrix {
    dimension: usize,
    modules: Vec<bool>,
}

impl ModuleMatrix {
    /// Builds a matrix from rows of modules.
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`] if there are no rows, the rows are empty, or any
    /// row length differs from the number of rows.
    pub fn new<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self, ShapeError> {
        let dimension = rows.len();
        if dimension == 0 {
            return Err(ShapeError::Empty);
        }
        let mut modules = Vec::with_capacity(dimension * dimension);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.is_empty() {
                return Err(ShapeError::EmptyRow);
            }
            if row.len() != dimension {
                return Err(ShapeError::NotSquare { row: i, len: row.len(), expected: dimension });
            }
            modules.extend_from_slice(row);
        }
        Ok(Self { dimension, modules })
    }

    /// Builds a matrix from the row-major colors of a `qrcode` symbol.
    pub fn from_colors(width: usize, colors: &[qrcode::Color]) -> Result<Self, ShapeError> {
        if width == 0 || colors.is_empty() {
            return Err(ShapeError::Empty);
        }
        let rows: Vec<Vec<bool>> = colors
            .chunks(width)
            .map(|row| row.iter().map(|c| *c == qrcode::Color::Dark).collect())
            .collect();
        Self::new(&rows)
    }

    /// Number of modules along one side (N).
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns whether the module at row `i`, column `j` is dark.
    /// Out-of-range coordinates read as light.
    pub fn get(&self, i: usize, j: usize) -> bool {
        i < self.dimension && j < self.dimension && self.modules[i * self.dimension + j]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.modules.chunks(self.dimension)
    }

    pub fn count_dark_modules(&self) -> usize {
        self.modules.iter().filter(|&&m| m).count()
    }
}
