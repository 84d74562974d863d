//! Lookup-table generator for 128-position paddle control.
//!
//! Two hand-authored tables of 32 offsets (paddle and ball-follow) are
//! interpolated around a closed loop to 128 positions each and rendered as
//! batari Basic `data` tables.
//!
//! # Quick Start
//!
//! ```
//! use paddle_tables::{format_table, interpolate_default, PADDLE_POSITIONS};
//!
//! let paddle = interpolate_default(&PADDLE_POSITIONS)?;
//! assert_eq!(paddle.len(), 128);
//!
//! let text = format_table(&paddle, "p1_paddle");
//! assert!(text.starts_with("data p1_paddle_x\n  4, 4, 3, 2,"));
//! # Ok::<(), paddle_tables::TableError>(())
//! ```
//!
//! The full listing, exactly as the generator binary prints it, comes from
//! [`render_listing`] or [`write_listing`].
//!
//! # Rounding
//!
//! Interpolated coordinates are rounded half to even (`2.5 -> 2`,
//! `3.5 -> 4`). See [`round_half_even`].

// Core modules
pub mod format;
pub mod geom;
pub mod interpolate;
pub mod listing;
pub mod tables;
pub mod utils;
pub mod validate;

// Public API
pub use format::{format_axis, format_table, CHUNK_WIDTH};
pub use geom::Position;
pub use interpolate::{interpolate, interpolate_default, round_half_even, OUTPUT_POSITION_COUNT};
pub use listing::{emit_listing, exit_status, render_listing, table_specs, write_listing, Player, TableRole, TableSpec};
pub use tables::{BALL_FOLLOW_POSITIONS, PADDLE_POSITIONS, SOURCE_POSITION_COUNT};
pub use validate::{validate_listing, ListingSummary};

// Error types
pub use utils::error::{Result, TableError};
