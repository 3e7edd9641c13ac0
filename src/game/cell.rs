use macroquad::prelude::Rect;
use rand::Rng;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector, screen coordinates (y grows downwards).
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_reverse_of(self, other: Direction) -> bool {
        self.reverse() == other
    }
}

/// A grid position in pixels, aligned to the cell size.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn stepped(self, direction: Direction, cell_size: i32) -> Cell {
        let (dx, dy) = direction.delta();
        Cell {
            x: self.x + dx * cell_size,
            y: self.y + dy * cell_size,
        }
    }

    pub fn to_rect(self, cell_size: i32) -> Rect {
        Rect::new(
            self.x as f32,
            self.y as f32,
            cell_size as f32,
            cell_size as f32,
        )
    }
}

/// Playfield derived from the screen resolution.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Grid {
    pub cols: i32,
    pub rows: i32,
    pub cell_size: i32,
    pub width_px: i32,
    pub height_px: i32,
}

impl Grid {
    /// A grid that exactly covers `cols` x `rows` cells.
    pub fn new(cols: i32, rows: i32, cell_size: i32) -> Self {
        Self {
            cols,
            rows,
            cell_size,
            width_px: cols * cell_size,
            height_px: rows * cell_size,
        }
    }

    pub fn from_screen(width: f32, height: f32, cell_size: i32) -> Self {
        let width_px = width as i32;
        let height_px = height as i32;
        Self {
            cols: width_px / cell_size,
            rows: height_px / cell_size,
            cell_size,
            width_px,
            height_px,
        }
    }

    /// Walls are the screen edges, measured in pixels.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.width_px && cell.y < self.height_px
    }

    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        let x = rng.gen_range(0..self.cols.max(1));
        let y = rng.gen_range(0..self.rows.max(1));
        Cell::new(x * self.cell_size, y * self.cell_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn reverse_pairs() {
        assert!(Direction::Up.is_reverse_of(Direction::Down));
        assert!(Direction::Left.is_reverse_of(Direction::Right));
        assert!(!Direction::Up.is_reverse_of(Direction::Left));
        assert!(!Direction::Right.is_reverse_of(Direction::Right));
    }

    #[test]
    fn stepping_scales_by_cell_size() {
        let c = Cell::new(160, 160);
        assert_eq!(c.stepped(Direction::Right, 32), Cell::new(192, 160));
        assert_eq!(c.stepped(Direction::Up, 32), Cell::new(160, 128));
        assert_eq!(c.stepped(Direction::Left, 32), Cell::new(128, 160));
        assert_eq!(c.stepped(Direction::Down, 32), Cell::new(160, 192));
    }

    #[test]
    fn screen_grid_keeps_pixel_bounds() {
        let grid = Grid::from_screen(1366.0, 768.0, 32);
        assert_eq!((grid.cols, grid.rows), (42, 24));
        // 1344 is past the last full column but still on screen.
        assert!(grid.contains(Cell::new(1344, 0)));
        assert!(!grid.contains(Cell::new(1376, 0)));
        assert!(!grid.contains(Cell::new(0, 768)));
        assert!(!grid.contains(Cell::new(-32, 0)));
    }

    #[test]
    fn random_cells_are_aligned_and_inside() {
        let grid = Grid::new(10, 10, 32);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let c = grid.random_cell(&mut rng);
            assert!(grid.contains(c));
            assert_eq!(c.x % 32, 0);
            assert_eq!(c.y % 32, 0);
        }
    }
}
