// src/tables.rs

//! Hand-authored 32-position offset tables.
//!
//! Entries run clockwise around the ship starting at due south. The
//! paddle table holds the paddle sprite offset from the ship centre; the
//! ball-follow table holds where a caught ball sits, roughly 1.4x further
//! out along the same direction.

use crate::geom::Position;

/// Number of hand-authored positions per table.
pub const SOURCE_POSITION_COUNT: usize = 32;

const fn p(x: i32, y: i32) -> Position {
    Position::new(x, y)
}

/// Paddle offsets from the ship centre.
pub const PADDLE_POSITIONS: [Position; SOURCE_POSITION_COUNT] = [
    p(4, 28),   // 00: South
    p(2, 26),   // 01
    p(-1, 24),  // 02
    p(-3, 22),  // 03
    p(-5, 21),  // 04
    p(-6, 18),  // 05
    p(-8, 15),  // 06: West
    p(-8, 12),  // 07
    p(-8, 8),   // 08: North-West
    p(-8, 4),   // 09
    p(-8, 1),   // 10
    p(-6, -2),  // 11
    p(-5, -5),  // 12
    p(-4, -7),  // 13
    p(-2, -9),  // 14
    p(1, -10),  // 15
    p(4, -11),  // 16: North
    p(6, -10),  // 17
    p(8, -9),   // 18: North-East
    p(10, -7),  // 19
    p(13, -5),  // 20
    p(14, -2),  // 21
    p(16, 1),   // 22: East
    p(16, 4),   // 23
    p(16, 8),   // 24
    p(16, 12),  // 25
    p(16, 15),  // 26
    p(14, 18),  // 27
    p(13, 21),  // 28
    p(11, 22),  // 29
    p(9, 24),   // 30
    p(6, 26),   // 31
];

/// Ball-follow offsets from the ship centre.
pub const BALL_FOLLOW_POSITIONS: [Position; SOURCE_POSITION_COUNT] = [
    p(10, 39),  // 00
    p(6, 36),   // 01
    p(1, 34),   // 02
    p(-3, 31),  // 03
    p(-3, 29),  // 04
    p(-5, 25),  // 05
    p(-7, 21),  // 06
    p(-7, 17),  // 07
    p(-7, 11),  // 08
    p(-7, 6),   // 09
    p(-7, 1),   // 10
    p(-5, -3),  // 11
    p(-3, -7),  // 12
    p(-5, -10), // 13
    p(-2, -13), // 14
    p(2, -14),  // 15
    p(6, -15),  // 16
    p(9, -14),  // 17
    p(11, -13), // 18
    p(14, -10), // 19
    p(21, -7),  // 20
    p(23, -3),  // 21
    p(26, 1),   // 22
    p(26, 6),   // 23
    p(26, 11),  // 24
    p(26, 17),  // 25
    p(26, 21),  // 26
    p(23, 25),  // 27
    p(21, 29),  // 28
    p(15, 31),  // 29
    p(13, 34),  // 30
    p(9, 36),   // 31
];
