//! Constant lookup tables for the 9×9 grid topology.
//!
//! Every cell of the board belongs to exactly one row, one column, and one
//! 3×3 quad. This module precomputes both directions of that mapping at
//! compile time: forward tables from a [`Group`] to its nine member cells in
//! canonical order, and reverse tables from a [`CellIndex`] to its row,
//! column, and quad indices. The tables are plain constants, shared read-only
//! by every board in the process and never mutated.

/// Linear index of a board cell, in the range 0-80.
///
/// Cells are numbered in row-major order: `index = row * 9 + column`.
///
/// # Examples
///
/// ```
/// use bitdoku_core::CellIndex;
///
/// let cell = CellIndex::from_row_col(4, 7);
/// assert_eq!(cell.index(), 43);
/// assert_eq!(cell.row(), 4);
/// assert_eq!(cell.column(), 7);
/// assert_eq!(cell.quad(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellIndex(u8);

impl CellIndex {
    /// The number of cells on a board.
    pub const COUNT: usize = 81;

    /// Creates a cell index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[inline]
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!(index < 81, "cell index out of range");
        Self(index)
    }

    /// Creates a cell index from row and column coordinates (0-8 each).
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[inline]
    #[must_use]
    pub const fn from_row_col(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9, "row or column out of range");
        Self(row * 9 + col)
    }

    /// Returns the linear index (0-80).
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the row index (0-8) of this cell.
    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        CELL_ROW[self.0 as usize]
    }

    /// Returns the column index (0-8) of this cell.
    #[inline]
    #[must_use]
    pub const fn column(self) -> u8 {
        CELL_COLUMN[self.0 as usize]
    }

    /// Returns the quad index (0-8) of this cell.
    ///
    /// Quads are the nine 3×3 sub-grids, numbered row-major:
    ///
    /// ```text
    ///  0 | 1 | 2
    /// ---+---+---
    ///  3 | 4 | 5
    /// ---+---+---
    ///  6 | 7 | 8
    /// ```
    #[inline]
    #[must_use]
    pub const fn quad(self) -> u8 {
        CELL_QUAD[self.0 as usize]
    }

    /// Returns an iterator over all 81 cell indices, in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..81).map(Self::new)
    }
}

/// A row, column, or quad of the board, identified by its 0-8 group index.
///
/// # Examples
///
/// ```
/// use bitdoku_core::Group;
///
/// let row = Group::Row(0);
/// let cells = row.cells();
/// assert_eq!(cells[0].index(), 0);
/// assert_eq!(cells[8].index(), 8);
///
/// let quad = Group::Quad(4);
/// assert_eq!(quad.cells()[0].index(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    /// A row, identified by its index (0-8, top to bottom).
    Row(u8),
    /// A column, identified by its index (0-8, left to right).
    Column(u8),
    /// A 3×3 quad, identified by its index (0-8, row-major).
    Quad(u8),
}

impl Group {
    /// Array containing all rows (0-8).
    pub const ROWS: [Self; 9] = {
        let mut rows = [Self::Row(0); 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            rows[i] = Self::Row(i as u8);
            i += 1;
        }
        rows
    };

    /// Array containing all columns (0-8).
    pub const COLUMNS: [Self; 9] = {
        let mut columns = [Self::Column(0); 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            columns[i] = Self::Column(i as u8);
            i += 1;
        }
        columns
    };

    /// Array containing all quads (0-8).
    pub const QUADS: [Self; 9] = {
        let mut quads = [Self::Quad(0); 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            quads[i] = Self::Quad(i as u8);
            i += 1;
        }
        quads
    };

    /// Array containing all 27 groups, in row, column, quad order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row(0); 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row(i as u8);
            all[i + 9] = Self::Column(i as u8);
            all[i + 18] = Self::Quad(i as u8);
            i += 1;
        }
        all
    };

    /// Returns the nine member cells of this group, in canonical order.
    ///
    /// Rows list their columns left to right, columns list their rows top to
    /// bottom, and quads list their cells in row-major order within the 3×3
    /// box.
    ///
    /// # Panics
    ///
    /// Panics if the group index is not in the range 0-8.
    #[must_use]
    pub const fn cells(self) -> [CellIndex; 9] {
        let table = match self {
            Self::Row(y) => &ROW_CELLS[y as usize],
            Self::Column(x) => &COLUMN_CELLS[x as usize],
            Self::Quad(q) => &QUAD_CELLS[q as usize],
        };
        let mut cells = [CellIndex::new(0); 9];
        let mut i = 0;
        while i < 9 {
            cells[i] = CellIndex::new(table[i]);
            i += 1;
        }
        cells
    }
}

/// `ROW_CELLS[y][i]` is the linear index of the `i`-th cell of row `y`.
const ROW_CELLS: [[u8; 9]; 9] = {
    let mut table = [[0; 9]; 9];
    let mut y = 0;
    #[expect(clippy::cast_possible_truncation)]
    while y < 9 {
        let mut x = 0;
        while x < 9 {
            table[y][x] = (y * 9 + x) as u8;
            x += 1;
        }
        y += 1;
    }
    table
};

/// `COLUMN_CELLS[x][i]` is the linear index of the `i`-th cell of column `x`.
const COLUMN_CELLS: [[u8; 9]; 9] = {
    let mut table = [[0; 9]; 9];
    let mut x = 0;
    #[expect(clippy::cast_possible_truncation)]
    while x < 9 {
        let mut y = 0;
        while y < 9 {
            table[x][y] = (y * 9 + x) as u8;
            y += 1;
        }
        x += 1;
    }
    table
};

/// `QUAD_CELLS[q][i]` is the linear index of the `i`-th cell of quad `q`,
/// row-major within the 3×3 box.
const QUAD_CELLS: [[u8; 9]; 9] = {
    let mut table = [[0; 9]; 9];
    let mut q = 0;
    #[expect(clippy::cast_possible_truncation)]
    while q < 9 {
        let mut i = 0;
        while i < 9 {
            let y = (q / 3) * 3 + i / 3;
            let x = (q % 3) * 3 + i % 3;
            table[q][i] = (y * 9 + x) as u8;
            i += 1;
        }
        q += 1;
    }
    table
};

const CELL_ROW: [u8; 81] = {
    let mut table = [0; 81];
    let mut i = 0;
    #[expect(clippy::cast_possible_truncation)]
    while i < 81 {
        table[i] = (i / 9) as u8;
        i += 1;
    }
    table
};

const CELL_COLUMN: [u8; 81] = {
    let mut table = [0; 81];
    let mut i = 0;
    #[expect(clippy::cast_possible_truncation)]
    while i < 81 {
        table[i] = (i % 9) as u8;
        i += 1;
    }
    table
};

const CELL_QUAD: [u8; 81] = {
    let mut table = [0; 81];
    let mut i = 0;
    #[expect(clippy::cast_possible_truncation)]
    while i < 81 {
        table[i] = ((i / 9 / 3) * 3 + (i % 9) / 3) as u8;
        i += 1;
    }
    table
};
