use super::color::CellColor;

/// A fixed-size matrix of cell colors, column-major. Dimensions never change
/// after construction; callers convert pointer positions to indices only
/// after an on-region containment check, so `get`/`set` assert bounds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorGrid {
    width: usize,
    height: usize,
    cells: Vec<CellColor>,
}

impl ColorGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![CellColor::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn get(&self, col: usize, row: usize) -> CellColor {
        self.cells[self.index(col, row)]
    }

    pub fn set(&mut self, col: usize, row: usize, value: CellColor) {
        let idx = self.index(col, row);
        self.cells[idx] = value;
    }

    pub fn fill(&mut self, value: CellColor) {
        self.cells.fill(value);
    }

    /// Column mirrored across the vertical center line.
    pub fn mirrored_col(&self, col: usize) -> usize {
        self.width - 1 - col
    }

    /// Cell at flat position `n` in file order: line `n` of a save file maps
    /// to column `n % width`, row `n / width`.
    pub fn set_linear(&mut self, n: usize, value: CellColor) {
        let col = n % self.width;
        let row = n / self.width;
        self.set(col, row, value);
    }

    pub fn get_linear(&self, n: usize) -> CellColor {
        self.get(n % self.width, n / self.width)
    }

    fn index(&self, col: usize, row: usize) -> usize {
        assert!(
            col < self.width && row < self.height,
            "cell ({col}, {row}) outside {}x{} grid",
            self.width,
            self.height
        );
        col * self.height + row
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::Rgb;

    #[test]
    fn set_get_and_fill() {
        let mut grid = ColorGrid::new(16, 16);
        assert_eq!(grid.get(0, 0), CellColor::Empty);

        let red = CellColor::Solid(Rgb::new(255, 0, 0));
        grid.set(3, 9, red);
        assert_eq!(grid.get(3, 9), red);
        assert_eq!(grid.get(9, 3), CellColor::Empty);

        grid.fill(red);
        assert_eq!(grid.get(15, 15), red);
        grid.fill(CellColor::Empty);
        assert_eq!(grid.get(3, 9), CellColor::Empty);
    }

    #[test]
    fn mirrored_col_reflects_center() {
        let grid = ColorGrid::new(16, 16);
        assert_eq!(grid.mirrored_col(0), 15);
        assert_eq!(grid.mirrored_col(15), 0);
        assert_eq!(grid.mirrored_col(7), 8);
        assert_eq!(grid.mirrored_col(8), 7);
    }

    #[test]
    fn linear_order_is_row_by_row() {
        let mut grid = ColorGrid::new(2, 16);
        let c = CellColor::Solid(Rgb::new(1, 2, 3));
        // line 3 of a width-2 file is column 1, row 1
        grid.set_linear(3, c);
        assert_eq!(grid.get(1, 1), c);
        assert_eq!(grid.get_linear(3), c);
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_panics() {
        let grid = ColorGrid::new(16, 16);
        let _ = grid.get(16, 0);
    }
}
