//! Board geometry - mapping between board squares and screen pixels
//!
//! The model and the move generator only ever see board coordinates;
//! this module is the single place pixels are translated. Screen y
//! grows downward, so the rank axis is flipped in both directions.

use crate::pieces::Square;

/// Visual shade of a board square. `(0, 0)` is a dark square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SquareShade {
    Light,
    Dark,
}

/// Pixel layout of an 8x8 board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardGeometry {
    square_size: u32,
}

impl BoardGeometry {
    /// Geometry for a board of roughly `display_size` pixels. The size
    /// is rounded down to a multiple of 8 so all squares are equal.
    pub fn new(display_size: u32) -> Self {
        Self {
            square_size: display_size / 8,
        }
    }

    pub fn square_size(&self) -> u32 {
        self.square_size
    }

    /// The exact board size in pixels after rounding.
    pub fn display_size(&self) -> u32 {
        self.square_size * 8
    }

    /// Top-left pixel of a square. Rank 7 is drawn at the top of the
    /// screen.
    pub fn square_origin(&self, (x, y): Square) -> (u32, u32) {
        (
            u32::from(x) * self.square_size,
            (7 - u32::from(y)) * self.square_size,
        )
    }

    /// The square under a pixel position, or `None` outside the board.
    pub fn square_at(&self, (px, py): (f32, f32)) -> Option<Square> {
        if px < 0.0 || py < 0.0 {
            return None;
        }
        let file = (px / self.square_size as f32) as u32;
        let row = (py / self.square_size as f32) as u32;
        if file > 7 || row > 7 {
            return None;
        }
        Some((file as u8, (7 - row) as u8))
    }

    /// Checkerboard shade of a square.
    pub fn square_shade((x, y): Square) -> SquareShade {
        if (x % 2 + y + 1) % 2 == 0 {
            SquareShade::Light
        } else {
            SquareShade::Dark
        }
    }
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self::new(720)
    }
}
