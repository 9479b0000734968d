//! Content domain: level grid parsing into the static platform set.

use bevy::prelude::*;

use crate::content::ArenaDef;
use crate::movement::{Aabb, ArenaBounds};

/// Cell character that places a platform.
pub const PLATFORM_CELL: char = '1';

/// Platforms built once from the level grid, in row-major order.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct LevelLayout {
    pub platforms: Vec<Aabb>,
    pub rows: usize,
    pub columns: usize,
    /// Platform cells dropped because they fell outside the arena.
    pub skipped_cells: usize,
}

impl LevelLayout {
    /// Parse a level grid. Each character is one cell; `1` places a platform
    /// at `(col * cell_size, row * cell_size)`. Cells whose platform would
    /// start outside the arena are ignored.
    pub fn parse(text: &str, arena: &ArenaDef) -> Self {
        let bounds = ArenaBounds::new(arena.width, arena.height);
        let mut layout = LevelLayout::default();

        for (row, line) in text.lines().enumerate() {
            layout.rows = row + 1;
            layout.columns = layout.columns.max(line.chars().count());

            for (col, cell) in line.chars().enumerate() {
                if cell != PLATFORM_CELL {
                    continue;
                }

                let left = col as f32 * arena.cell_size;
                let top = row as f32 * arena.cell_size;
                if left >= bounds.width || top >= bounds.height {
                    layout.skipped_cells += 1;
                    continue;
                }

                layout.platforms.push(Aabb::new(
                    left,
                    top,
                    arena.platform_width,
                    arena.platform_height,
                ));
            }
        }

        if layout.skipped_cells > 0 {
            warn!(
                "Level grid has {} platform cells outside the {}x{} arena; ignoring them",
                layout.skipped_cells, arena.width, arena.height
            );
        }

        layout
    }
}
