// grid.rs - Letter grid state: 100 cells, each a letter with a lit flag

use rand::Rng;

// Compile-time grid size configuration
pub const GRID_WIDTH: usize = 10;                        // Tiles per row and per column
pub const CELL_COUNT: usize = GRID_WIDTH * GRID_WIDTH;   // Total tiles (ids 0..CELL_COUNT)
pub const LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// One tile of the grid. Only `is_lit` changes after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    id: usize,
    letter: char,
    is_lit: bool,
}

impl Cell {
    fn random<R: Rng + ?Sized>(id: usize, rng: &mut R) -> Self {
        let letter = LETTERS[rng.gen_range(0..LETTERS.len())] as char;
        Self { id, letter, is_lit: rng.gen_bool(0.5) }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn is_lit(&self) -> bool {
        self.is_lit
    }

    pub fn row(&self) -> usize {
        self.id / GRID_WIDTH
    }

    pub fn col(&self) -> usize {
        self.id % GRID_WIDTH
    }

    fn flip(&mut self) {
        self.is_lit = !self.is_lit;
    }
}

pub type TGrid = [Cell; CELL_COUNT];

/// Owns the 100 cells. Every mutation goes through one of the methods below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGrid {
    cells: TGrid,
}

impl LetterGrid {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self { cells: std::array::from_fn(|id| Cell::random(id, rng)) }
    }

    /// Replaces every cell with a fresh random letter and lit state.
    pub fn reinitialize<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &TGrid {
        self.cells = std::array::from_fn(|id| Cell::random(id, rng));
        &self.cells
    }

    /// Flips one cell per occurrence; an index listed twice ends up unchanged.
    /// Indices outside the grid are skipped.
    pub fn toggle_subset(&mut self, indices: &[usize]) {
        for &index in indices {
            if let Some(cell) = self.cells.get_mut(index) {
                cell.flip();
            }
        }
    }

    pub fn toggle_one(&mut self, id: usize) {
        if let Some(cell) = self.cells.get_mut(id) {
            cell.flip();
        }
    }

    pub fn cells(&self) -> &TGrid {
        &self.cells
    }

    pub fn get(&self, id: usize) -> Option<&Cell> {
        self.cells.get(id)
    }

    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_lit).count()
    }
}
