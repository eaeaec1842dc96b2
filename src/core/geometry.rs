use macroquad::prelude::*;

/// Axis-aligned screen region used for every hit test in the editor.
/// Containment is strict on all four edges: a point exactly on the boundary
/// is outside.
#[derive(Copy, Clone, Debug)]
pub struct Region {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Region {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x > self.x && p.x < self.x + self.w && p.y > self.y && p.y < self.y + self.h
    }
}

/// Convert a pointer position inside a grid region to (col, row) by integer
/// division on the cell size. Only valid after `Region::contains` passed.
pub fn cell_under_pointer(origin: (f32, f32), cell_size: f32, p: Vec2) -> (usize, usize) {
    (
        ((p.x - origin.0) / cell_size) as usize,
        ((p.y - origin.1) / cell_size) as usize,
    )
}

/// Screen region covering a w×h cell matrix drawn at `origin`.
pub fn grid_region(origin: (f32, f32), cell_size: f32, width: usize, height: usize) -> Region {
    Region::new(
        origin.0,
        origin.1,
        cell_size * width as f32,
        cell_size * height as f32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_points_are_outside() {
        let r = Region::new(10.0, 10.0, 100.0, 50.0);
        assert!(!r.contains(vec2(10.0, 30.0)));
        assert!(!r.contains(vec2(110.0, 30.0)));
        assert!(!r.contains(vec2(50.0, 10.0)));
        assert!(!r.contains(vec2(50.0, 60.0)));
        assert!(r.contains(vec2(10.1, 10.1)));
        assert!(r.contains(vec2(109.9, 59.9)));
    }

    #[test]
    fn pointer_maps_to_cell_indices() {
        let origin = (180.0, 10.0);
        assert_eq!(cell_under_pointer(origin, 40.0, vec2(180.5, 10.5)), (0, 0));
        assert_eq!(cell_under_pointer(origin, 40.0, vec2(219.9, 49.9)), (0, 0));
        assert_eq!(cell_under_pointer(origin, 40.0, vec2(220.1, 50.1)), (1, 1));
        // just inside the far corner of a 16x16 grid
        assert_eq!(
            cell_under_pointer(origin, 40.0, vec2(180.0 + 640.0 - 0.1, 10.0 + 640.0 - 0.1)),
            (15, 15)
        );
    }

    #[test]
    fn grid_region_extent() {
        let r = grid_region((180.0, 10.0), 40.0, 16, 16);
        assert!(r.contains(vec2(500.0, 300.0)));
        assert!(!r.contains(vec2(180.0 + 640.0, 300.0)));
    }
}
