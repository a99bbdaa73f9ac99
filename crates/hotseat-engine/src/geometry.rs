//! Pixel geometry of the board window.
//!
//! The engine works on [`Cell`]s only. This module is the boundary where
//! pixel clicks from the window become cells, and where cells become the
//! pixel positions a renderer draws sprites and destination markers at.

use hotseat_core::{Cell, BOARD_SIZE};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors in a board geometry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("tile size must be positive, got {0}")]
    NonPositiveTile(i32),

    #[error("{name} inset {value} must lie within a {tile} pixel tile")]
    InsetOutsideTile {
        name: &'static str,
        value: i32,
        tile: i32,
    },

    #[error("board of {tile} pixel tiles at {axis} = {origin} does not fit in pixel coordinates")]
    OutOfRange {
        axis: &'static str,
        origin: i32,
        tile: i32,
    },
}

/// Affine mapping between window pixels and board cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardGeometry {
    /// Window x of the board's top-left corner.
    pub origin_x: i32,
    /// Window y of the board's top-left corner.
    pub origin_y: i32,
    /// Edge length of one tile in pixels.
    pub tile_size: i32,
    /// Offset of a piece sprite from its tile's corner.
    pub sprite_inset: i32,
    /// Offset of a destination marker from the sprite position.
    pub marker_inset: i32,
}

impl Default for BoardGeometry {
    /// A 768x768 window of 96-pixel tiles.
    fn default() -> Self {
        BoardGeometry {
            origin_x: 0,
            origin_y: 0,
            tile_size: 96,
            sprite_inset: 15,
            marker_inset: 25,
        }
    }
}

impl BoardGeometry {
    /// Checks that the tile size is positive, both insets fit in a tile and
    /// the far edge of the board is representable.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.tile_size <= 0 {
            return Err(GeometryError::NonPositiveTile(self.tile_size));
        }
        if !(0..self.tile_size).contains(&self.sprite_inset) {
            return Err(GeometryError::InsetOutsideTile {
                name: "sprite",
                value: self.sprite_inset,
                tile: self.tile_size,
            });
        }
        let marker = self.sprite_inset.checked_add(self.marker_inset);
        if !marker.is_some_and(|m| (0..self.tile_size).contains(&m)) {
            return Err(GeometryError::InsetOutsideTile {
                name: "marker",
                value: self.marker_inset,
                tile: self.tile_size,
            });
        }
        for (axis, origin) in [("origin_x", self.origin_x), ("origin_y", self.origin_y)] {
            let edge = self
                .tile_size
                .checked_mul(BOARD_SIZE as i32)
                .and_then(|edge| origin.checked_add(edge));
            if edge.is_none() {
                return Err(GeometryError::OutOfRange {
                    axis,
                    origin,
                    tile: self.tile_size,
                });
            }
        }
        Ok(())
    }

    /// Returns the window size needed to show the whole board.
    ///
    /// Pixel positions saturate at the `i32` bounds on a geometry that fails
    /// [`validate`](Self::validate).
    #[inline]
    pub fn window_size(&self) -> (i32, i32) {
        let edge = self.tile_size.saturating_mul(BOARD_SIZE as i32);
        (
            self.origin_x.saturating_add(edge),
            self.origin_y.saturating_add(edge),
        )
    }

    /// Returns the cell under a pixel, or `None` outside the board.
    pub fn cell_at(&self, x: i32, y: i32) -> Option<Cell> {
        if self.tile_size <= 0 {
            return None;
        }
        let file = x.checked_sub(self.origin_x)?.div_euclid(self.tile_size);
        let rank = y.checked_sub(self.origin_y)?.div_euclid(self.tile_size);
        let range = 0..BOARD_SIZE as i32;
        if !range.contains(&file) || !range.contains(&rank) {
            return None;
        }
        Cell::new(file as i8, rank as i8)
    }

    /// Returns the top-left pixel of the tile holding `cell`.
    #[inline]
    pub fn tile_origin(&self, cell: Cell) -> (i32, i32) {
        let step = |origin: i32, n: i8| {
            origin.saturating_add(self.tile_size.saturating_mul(n as i32))
        };
        (
            step(self.origin_x, cell.file()),
            step(self.origin_y, cell.rank()),
        )
    }

    /// Returns the pixel at the center of `cell`'s tile.
    #[inline]
    pub fn cell_center(&self, cell: Cell) -> (i32, i32) {
        let (x, y) = self.tile_origin(cell);
        let half = self.tile_size / 2;
        (x.saturating_add(half), y.saturating_add(half))
    }

    /// Returns where the sprite of a piece on `cell` is drawn.
    #[inline]
    pub fn sprite_position(&self, cell: Cell) -> (i32, i32) {
        let (x, y) = self.tile_origin(cell);
        (
            x.saturating_add(self.sprite_inset),
            y.saturating_add(self.sprite_inset),
        )
    }

    /// Returns where the destination marker for `cell` is drawn.
    #[inline]
    pub fn marker_position(&self, cell: Cell) -> (i32, i32) {
        let (x, y) = self.sprite_position(cell);
        (
            x.saturating_add(self.marker_inset),
            y.saturating_add(self.marker_inset),
        )
    }
}
