use super::Grid;
use crate::{GlyphError, Result};

const INK: &[char] = &['#', 'X', 'x', '1', '@'];
const BLANK: &[char] = &['.', ' ', '0', '_', '-'];

impl Grid {
    /// Parse ASCII art, one line per row
    ///
    /// Short lines and missing rows are blank, trailing `\r` is ignored.
    pub fn from_ascii(text: &str, resolution: usize) -> Result<Self> {
        let mut grid = Grid::new(resolution)?;
        let lines: Vec<&str> = text.lines().map(|line| line.trim_end_matches('\r')).collect();
        let line_count = lines.iter().rposition(|line| !line.trim().is_empty()).map_or(0, |i| i + 1);
        if line_count > resolution {
            return Err(GlyphError::InvalidGlyphSize {
                expected: resolution * resolution,
                actual: line_count.saturating_mul(resolution),
            });
        }

        for (row, line) in lines.iter().take(line_count).enumerate() {
            let line = line.trim_end();
            let width = line.chars().count();
            if width > resolution {
                return Err(GlyphError::InvalidGlyphSize {
                    expected: resolution * resolution,
                    actual: width.saturating_mul(resolution),
                });
            }
            for (col, ch) in line.chars().enumerate() {
                if INK.contains(&ch) {
                    grid.set(row, col, true);
                } else if !BLANK.contains(&ch) {
                    return Err(GlyphError::payload(format!("unexpected '{ch}' in row {row}")));
                }
            }
        }
        Ok(grid)
    }

    /// Render as `#`/`.` lines
    pub fn to_ascii(&self) -> String {
        self.rows()
            .map(|row| row.iter().map(|&on| if on { '#' } else { '.' }).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
