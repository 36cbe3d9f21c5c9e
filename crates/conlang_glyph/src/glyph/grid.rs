use crate::{GlyphError, Result, MAX_RESOLUTION};

/// A square boolean pixel grid
///
/// Cells are stored flat in row-major order (`row * resolution + col`).
/// `true` is an inked ("black") cell, `false` is blank ("white").
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    resolution: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create an all-blank grid
    pub fn new(resolution: usize) -> Result<Self> {
        validate_resolution(resolution)?;
        Ok(Self {
            resolution,
            cells: vec![false; resolution * resolution],
        })
    }

    /// Build a grid from a flat row-major cell vector
    pub fn from_cells(resolution: usize, cells: Vec<bool>) -> Result<Self> {
        validate_resolution(resolution)?;
        let expected = resolution * resolution;
        if cells.len() != expected {
            return Err(GlyphError::InvalidGlyphSize { expected, actual: cells.len() });
        }
        Ok(Self { resolution, cells })
    }

    /// Build a grid from nested rows (height × width, must be square)
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self> {
        let resolution = rows.len();
        let cells: Vec<bool> = rows.iter().flatten().copied().collect();
        if rows.iter().any(|row| row.len() != resolution) {
            return Err(GlyphError::InvalidGlyphSize {
                expected: resolution * resolution,
                actual: cells.len(),
            });
        }
        Self::from_cells(resolution, cells)
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Get a cell, out of range reads as blank
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.index(row, col).is_some_and(|i| self.cells[i])
    }

    /// Set a cell, returns true if the value changed
    pub fn set(&mut self, row: usize, col: usize, value: bool) -> bool {
        let Some(i) = self.index(row, col) else {
            return false;
        };
        let changed = self.cells[i] != value;
        self.cells[i] = value;
        changed
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.resolution && col < self.resolution
    }

    /// Get one row as a slice, `None` outside the grid
    pub fn row(&self, row: usize) -> Option<&[bool]> {
        self.cells.chunks(self.resolution).nth(row)
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.resolution)
    }

    /// Copy out as nested rows
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.rows().map(<[bool]>::to_vec).collect()
    }

    /// Set every cell blank
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|&c| !c)
    }

    /// Number of inked cells
    pub fn ink_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        self.contains(row, col).then(|| row * self.resolution + col)
    }
}

pub(crate) fn validate_resolution(resolution: usize) -> Result<()> {
    if resolution == 0 || resolution > MAX_RESOLUTION {
        return Err(GlyphError::InvalidResolution { resolution });
    }
    Ok(())
}
