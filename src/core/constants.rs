// Fixed layout of the editor window. Nothing here changes at runtime.
pub const SCREEN_WIDTH: i32 = 1000;
pub const SCREEN_HEIGHT: i32 = 800;

pub const CELL_SIZE: f32 = 40.0;

pub const GRID_WIDTH: usize = 16;
pub const GRID_HEIGHT: usize = 16;
pub const GRID_ORIGIN: (f32, f32) = (180.0, 10.0);

pub const PALETTE_WIDTH: usize = 2;
pub const PALETTE_HEIGHT: usize = 16;
pub const PALETTE_ORIGIN: (f32, f32) = (870.0, 10.0);
