// src/engine/grid.rs
#![forbid(unsafe_code)]

use crate::engine::constants::{MAX_TILE, MIN_SIZE};
use crate::engine::error::EngineError;

/// Square grid of tile values, row-major. `0` is an empty cell.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    cells: Vec<u32>,
}

impl Grid {
    pub fn empty(size: usize) -> Result<Self, EngineError> {
        if size < MIN_SIZE {
            return Err(EngineError::InvalidSize {
                size,
                min: MIN_SIZE,
            });
        }
        Ok(Self {
            size,
            cells: vec![0; size * size],
        })
    }

    /// Build a grid from explicit rows, rejecting non-square input and non-tile values
    /// (anything but 0 or a power of two in `2..=MAX_TILE`).
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self, EngineError> {
        let size = rows.len();
        let mut grid = Self::empty(size)?;
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return Err(EngineError::NonSquare {
                    row: r,
                    len: row.len(),
                    size,
                });
            }
            for (c, &value) in row.iter().enumerate() {
                if !is_tile_value(value) {
                    return Err(EngineError::InvalidTile { row: r, col: c, value });
                }
                grid.set(r, c, value);
            }
        }
        Ok(grid)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn get(&self, r: usize, c: usize) -> u32 {
        self.cells[r * self.size + c]
    }

    #[inline]
    pub(crate) fn set(&mut self, r: usize, c: usize, value: u32) {
        self.cells[r * self.size + c] = value;
    }

    #[inline]
    pub fn row(&self, r: usize) -> &[u32] {
        &self.cells[r * self.size..(r + 1) * self.size]
    }

    #[inline]
    pub(crate) fn row_mut(&mut self, r: usize) -> &mut [u32] {
        &mut self.cells[r * self.size..(r + 1) * self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks_exact(self.size)
    }

    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.rows().map(<[u32]>::to_vec).collect()
    }

    /// Flat row-major view (read-only snapshot for renderers).
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Empty coordinates in row-major order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == 0)
            .map(|(i, _)| (i / self.size, i % self.size))
            .collect()
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    pub fn count_occupied(&self) -> usize {
        self.cells.len() - self.count_empty()
    }

    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all tile values.
    pub fn total_mass(&self) -> u64 {
        self.cells.iter().map(|&v| u64::from(v)).sum()
    }

    /// True iff some row holds two equal neighbours (empties included).
    pub fn has_horizontal_pair(&self) -> bool {
        self.rows().any(|row| row.windows(2).any(|w| w[0] == w[1]))
    }

    /// True iff some column holds two equal neighbours (empties included).
    pub fn has_vertical_pair(&self) -> bool {
        (0..self.size - 1).any(|r| {
            let (upper, lower) = (self.row(r), self.row(r + 1));
            upper.iter().zip(lower).any(|(a, b)| a == b)
        })
    }

    /**
     * Terminal test, evaluated in this order:
     * - any empty cell => not terminal
     * - any tile >= `winning_tile` => terminal
     * - otherwise terminal iff no adjacent equal pair exists on either axis
     */
    pub fn is_terminal(&self, winning_tile: u32) -> bool {
        if self.cells.contains(&0) {
            return false;
        }
        if self.cells.iter().any(|&v| v >= winning_tile) {
            return true;
        }
        !self.has_horizontal_pair() && !self.has_vertical_pair()
    }
}

#[inline]
fn is_tile_value(v: u32) -> bool {
    v == 0 || ((2..=MAX_TILE).contains(&v) && v.is_power_of_two())
}

// ---------------- row primitive ----------------

/// Push all nonzero values to the right edge, preserving their order.
pub fn compact_right(row: &mut [u32]) {
    let n = row.len();
    let mut fill = n;
    for i in (0..n).rev() {
        let v = row[i];
        if v != 0 {
            fill -= 1;
            row[fill] = v;
        }
    }
    for cell in row.iter_mut().take(fill) {
        *cell = 0;
    }
}

/**
 * Single scan over adjacent pairs starting at the right edge: an equal nonzero pair
 * doubles the cell nearer the edge and zeroes the other. Returns the sum of the
 * doubled values.
 *
 * `[0, 2, 2, 2]` merges the pair at the edge: `[0, 2, 0, 4]` before the final compaction.
 */
pub fn merge_pairs(row: &mut [u32]) -> u64 {
    let mut gained = 0u64;
    for j in (1..row.len()).rev() {
        if row[j] != 0 && row[j] == row[j - 1] {
            row[j] *= 2;
            row[j - 1] = 0;
            gained += u64::from(row[j]);
        }
    }
    gained
}

/// compact -> merge -> compact toward the right edge. Returns score gained.
pub fn compact_and_merge(row: &mut [u32]) -> u64 {
    compact_right(row);
    let gained = merge_pairs(row);
    compact_right(row);
    gained
}
