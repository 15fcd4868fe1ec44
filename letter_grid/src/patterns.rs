// patterns.rs - Spatial toggle patterns picked by the animation driver

use crate::grid::{CELL_COUNT, GRID_WIDTH};
use rand::seq::index;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    Scattered,
    HorizontalWave,
    VerticalWave,
    Diagonal,
    Cross,
}

impl PatternKind {
    pub const ALL: [PatternKind; 5] = [
        PatternKind::Scattered,
        PatternKind::HorizontalWave,
        PatternKind::VerticalWave,
        PatternKind::Diagonal,
        PatternKind::Cross,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PatternKind::Scattered      => "scattered",
            PatternKind::HorizontalWave => "horizontal wave",
            PatternKind::VerticalWave   => "vertical wave",
            PatternKind::Diagonal       => "diagonal",
            PatternKind::Cross          => "cross",
        }
    }

    /// Uniform choice among the five kinds.
    pub fn choose<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Draws the parameters for one pattern of this kind.
    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> Pattern {
        match self {
            PatternKind::Scattered => {
                let count = rng.gen_range(4..=11);
                let cells = index::sample(rng, CELL_COUNT, count).into_vec();
                Pattern::Scattered { cells }
            }
            PatternKind::HorizontalWave => Pattern::HorizontalWave {
                row:       rng.gen_range(0..GRID_WIDTH),
                start_col: rng.gen_range(0..=5),
                length:    rng.gen_range(3..=7),
            },
            PatternKind::VerticalWave => Pattern::VerticalWave {
                col:       rng.gen_range(0..GRID_WIDTH),
                start_row: rng.gen_range(0..=5),
                length:    rng.gen_range(3..=7),
            },
            PatternKind::Diagonal => Pattern::Diagonal {
                start_row: rng.gen_range(0..=6),
                start_col: rng.gen_range(0..=6),
                length:    rng.gen_range(3..=6),
            },
            PatternKind::Cross => Pattern::Cross {
                center_row: rng.gen_range(1..=8),
                center_col: rng.gen_range(1..=8),
            },
        }
    }
}

/// A sampled pattern. `indices()` is a pure function of these parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    Scattered { cells: Vec<usize> },
    HorizontalWave { row: usize, start_col: usize, length: usize },
    VerticalWave { col: usize, start_row: usize, length: usize },
    Diagonal { start_row: usize, start_col: usize, length: usize },
    Cross { center_row: usize, center_col: usize },
}

impl Pattern {
    pub fn kind(&self) -> PatternKind {
        match self {
            Pattern::Scattered { .. }      => PatternKind::Scattered,
            Pattern::HorizontalWave { .. } => PatternKind::HorizontalWave,
            Pattern::VerticalWave { .. }   => PatternKind::VerticalWave,
            Pattern::Diagonal { .. }       => PatternKind::Diagonal,
            Pattern::Cross { .. }          => PatternKind::Cross,
        }
    }

    /// Grid indices touched by this pattern, in toggle order.
    /// Lines stop at the grid edge instead of wrapping to the next row.
    pub fn indices(&self) -> Vec<usize> {
        match *self {
            Pattern::Scattered { ref cells } => cells.clone(),
            Pattern::HorizontalWave { row, start_col, length } => (0..length)
                .map(|i| start_col + i)
                .take_while(|&col| col < GRID_WIDTH)
                .map(|col| row * GRID_WIDTH + col)
                .collect(),
            Pattern::VerticalWave { col, start_row, length } => (0..length)
                .map(|i| start_row + i)
                .take_while(|&row| row < GRID_WIDTH)
                .map(|row| row * GRID_WIDTH + col)
                .collect(),
            Pattern::Diagonal { start_row, start_col, length } => (0..length)
                .map(|i| (start_row + i, start_col + i))
                .take_while(|&(row, col)| row < GRID_WIDTH && col < GRID_WIDTH)
                .map(|(row, col)| row * GRID_WIDTH + col)
                .collect(),
            Pattern::Cross { center_row, center_col } => {
                let (row, col) = (center_row as isize, center_col as isize);
                let width = GRID_WIDTH as isize;
                // center, top, bottom, left, right
                [
                    row * width + col,
                    (row - 1) * width + col,
                    (row + 1) * width + col,
                    row * width + (col - 1),
                    row * width + (col + 1),
                ]
                .into_iter()
                .filter(|&index| index >= 0 && index < CELL_COUNT as isize)
                .map(|index| index as usize)
                .collect()
            }
        }
    }
}
