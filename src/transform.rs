//! Module matrix to vector geometry.

use core::fmt::Write;

use crate::config::Mode;
use crate::error::{ConfigError, RenderResult};
use crate::matrix::ModuleMatrix;
use crate::scene::{CircleShape, Paint};

/// A horizontal run of dark modules in one row, `start..end` in columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleRun {
    pub row: usize,
    pub start: usize,
    pub end: usize,
}

impl ModuleRun {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Output of [`transform`].
///
/// In square mode `path` holds one centerline segment per [`ModuleRun`]; drawn
/// with a butt-capped stroke of width `cell_size` each segment covers exactly
/// its modules. In dot mode `path` is empty and `shapes` holds the circles.
#[derive(Debug, Clone, PartialEq)]
pub struct Transformed {
    pub cell_size: f64,
    pub path: String,
    pub runs: Vec<ModuleRun>,
    pub shapes: Vec<CircleShape>,
}

impl Transformed {
    /// Area covered by dark modules, in square pixels.
    pub fn covered_area(&self) -> f64 {
        let cells = if self.shapes.is_empty() {
            self.runs.iter().map(ModuleRun::len).sum::<usize>()
        } else {
            self.shapes.len()
        };
        cells as f64 * self.cell_size * self.cell_size
    }
}

/// Converts `matrix` into vector geometry for a symbol `size` pixels wide.
///
/// # Errors
///
/// Returns [`ConfigError`] if `size` is not a positive finite number. The
/// matrix is square by construction.
pub fn transform(matrix: &ModuleMatrix, size: f64, mode: Mode, fill: &Paint) -> RenderResult<Transformed> {
    if !size.is_finite() {
        return Err(ConfigError::NonFinite("size").into());
    }
    if size <= 0.0 {
        return Err(ConfigError::NonPositiveSize(size).into());
    }

    let cell_size = size / matrix.dimension() as f64;
    let out = match mode {
        Mode::Square => {
            let runs = module_runs(matrix);
            let path = runs_to_path(&runs, cell_size);
            Transformed { cell_size, path, runs, shapes: Vec::new() }
        }
        Mode::Dot => {
            let shapes = dots(matrix, cell_size, fill);
            Transformed { cell_size, path: String::new(), runs: Vec::new(), shapes }
        }
    };
    tracing::trace!(
        dimension = matrix.dimension(),
        cell_size,
        runs = out.runs.len(),
        dots = out.shapes.len(),
        "transformed module matrix"
    );
    Ok(out)
}

/// Splits every row into maximal runs of dark modules.
pub fn module_runs(matrix: &ModuleMatrix) -> Vec<ModuleRun> {
    let mut runs = Vec::new();
    for (i, row) in matrix.rows().enumerate() {
        let mut start = None;
        for (j, &dark) in row.iter().enumerate() {
            match (dark, start) {
                (true, None) => start = Some(j),
                (false, Some(s)) => {
                    runs.push(ModuleRun { row: i, start: s, end: j });
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            runs.push(ModuleRun { row: i, start: s, end: row.len() });
        }
    }
    runs
}

fn runs_to_path(runs: &[ModuleRun], cell_size: f64) -> String {
    let mut path = String::new();
    for run in runs {
        let y = run.row as f64 * cell_size + cell_size / 2.0;
        if !path.is_empty() {
            path.push(' ');
        }
        // Writing to a String cannot fail.
        let _ = write!(
            path,
            "M{} {} L{} {}",
            run.start as f64 * cell_size,
            y,
            run.end as f64 * cell_size,
            y
        );
    }
    path
}

fn dots(matrix: &ModuleMatrix, cell_size: f64, fill: &Paint) -> Vec<CircleShape> {
    let r = cell_size / 2.0;
    matrix
        .rows()
        .enumerate()
        .flat_map(|(i, row)| {
            row.iter().enumerate().filter(|(_, &dark)| dark).map(move |(j, _)| CircleShape {
                cx: j as f64 * cell_size + r,
                cy: i as f64 * cell_size + r,
                r,
                fill: fill.clone(),
            })
        })
        .collect()
}
