// src/listing.rs

//! Assembly of the complete lookup-table listing.
//!
//! Each role's source table is interpolated once and the result is shared
//! by both players, since the two ships use identical offsets and only
//! differ in which sprite variables they are added to.

use std::fmt::Write as _;
use std::io;

use crate::format::format_table;
use crate::geom::Position;
use crate::interpolate::{interpolate_default, OUTPUT_POSITION_COUNT};
use crate::tables::{BALL_FOLLOW_POSITIONS, PADDLE_POSITIONS, SOURCE_POSITION_COUNT};
use crate::utils::error::Result;
use crate::validate::validate_listing;
use crate::utils::log::{debug, error, info};

/// Number of (player, role) table sets in the listing.
pub const TABLE_SET_COUNT: usize = 4;
/// Each table set holds one table per axis.
pub const AXES_PER_TABLE: usize = 2;
/// Every table value is stored as a single byte.
pub const BYTES_PER_VALUE: usize = 1;

/// The two consumers of the offset tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Both players, in output order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Lower-case fragment used in table names.
    pub fn prefix(&self) -> &'static str {
        match self {
            Player::One => "p1",
            Player::Two => "p2",
        }
    }

    /// Label used in comment lines.
    pub fn label(&self) -> &'static str {
        match self {
            Player::One => "P1",
            Player::Two => "P2",
        }
    }

    /// The sprite coordinate variables these offsets are added to.
    pub fn sprite_vars(&self) -> &'static str {
        match self {
            Player::One => "player0x/player0y",
            Player::Two => "player1x/player1y",
        }
    }
}

/// What an offset table positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableRole {
    Paddle,
    BallFollow,
}

impl TableRole {
    /// Both roles, in output order within a player's table sets.
    pub const ALL: [TableRole; 2] = [TableRole::Paddle, TableRole::BallFollow];

    /// Lower-case fragment used in table names.
    pub fn prefix(&self) -> &'static str {
        match self {
            TableRole::Paddle => "paddle",
            TableRole::BallFollow => "ball",
        }
    }

    /// Human-readable description used in comment lines.
    pub fn description(&self) -> &'static str {
        match self {
            TableRole::Paddle => "Paddle position",
            TableRole::BallFollow => "Ball follow position",
        }
    }

    /// The hand-authored source table for this role.
    pub fn source(&self) -> &'static [Position; SOURCE_POSITION_COUNT] {
        match self {
            TableRole::Paddle => &PADDLE_POSITIONS,
            TableRole::BallFollow => &BALL_FOLLOW_POSITIONS,
        }
    }
}

/// One emitted table set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSpec {
    pub player: Player,
    pub role: TableRole,
}

impl TableSpec {
    pub const fn new(player: Player, role: TableRole) -> Self {
        TableSpec { player, role }
    }

    /// Name prefix of the table set, e.g. `p1_paddle`.
    pub fn name_prefix(&self) -> String {
        format!("{}_{}", self.player.prefix(), self.role.prefix())
    }

    /// The comment line introducing this table set.
    pub fn comment(&self) -> String {
        format!(
            "; {} {} offsets (add to {})",
            self.player.label(),
            self.role.description(),
            self.player.sprite_vars()
        )
    }
}

/// Table sets in output order: all of player one, then all of player two.
pub fn table_specs() -> Vec<TableSpec> {
    Player::ALL
        .into_iter()
        .flat_map(|player| TableRole::ALL.into_iter().map(move |role| TableSpec::new(player, role)))
        .collect()
}

/// Total storage needed by all tables for `count` positions each.
pub fn memory_footprint(count: usize) -> usize {
    count * TABLE_SET_COUNT * AXES_PER_TABLE * BYTES_PER_VALUE
}

/// Renders the complete listing, ending with a newline.
pub fn render_listing() -> Result<String> {
    let paddle = interpolate_default(TableRole::Paddle.source())?;
    let ball = interpolate_default(TableRole::BallFollow.source())?;

    let mut out = String::new();
    writeln!(out, "; Lookup tables for {}-position paddle control", OUTPUT_POSITION_COUNT)?;
    writeln!(
        out,
        "; Generated from {} manual positions with linear interpolation",
        SOURCE_POSITION_COUNT
    )?;
    writeln!(out)?;

    let specs = table_specs();
    for (i, spec) in specs.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
            writeln!(out)?;
        }
        let positions = match spec.role {
            TableRole::Paddle => &paddle,
            TableRole::BallFollow => &ball,
        };
        writeln!(out, "{}", spec.comment())?;
        writeln!(out, "{}", format_table(positions, &spec.name_prefix()))?;
    }

    writeln!(out)?;
    writeln!(out, "; Total positions: {}", paddle.len())?;
    writeln!(
        out,
        "; Memory usage: {} bytes for all {} tables",
        memory_footprint(paddle.len()),
        specs.len()
    )?;

    info!("Rendered {} table sets ({} bytes of text)", specs.len(), out.len());
    Ok(out)
}

/// Renders the listing and writes it to `writer`.
pub fn write_listing<W: io::Write>(writer: &mut W) -> Result<()> {
    let listing = render_listing()?;
    writer.write_all(listing.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Renders the listing, checks that every table holds
/// [`OUTPUT_POSITION_COUNT`] values, then writes it to `writer`.
///
/// Nothing is written if validation fails.
pub fn emit_listing<W: io::Write>(writer: &mut W) -> Result<()> {
    let listing = render_listing()?;

    let summary = validate_listing(&listing)?;
    summary.require_uniform(OUTPUT_POSITION_COUNT)?;
    debug!("Listing holds {} tables", summary.tables.len());

    writer.write_all(listing.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Maps the outcome of a generator run to a process exit status, logging
/// the diagnostic on failure.
pub fn exit_status(outcome: &Result<()>) -> u8 {
    match outcome {
        Ok(()) => 0,
        Err(err) => {
            error!("{}", err);
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_spec_order_and_names() {
        let names: Vec<String> = table_specs().iter().map(|s| s.name_prefix()).collect();
        assert_eq!(names, ["p1_paddle", "p1_ball", "p2_paddle", "p2_ball"]);
        assert_eq!(names.len(), TABLE_SET_COUNT);
    }

    #[test]
    fn test_comments() {
        let spec = TableSpec::new(Player::Two, TableRole::BallFollow);
        assert_eq!(
            spec.comment(),
            "; P2 Ball follow position offsets (add to player1x/player1y)"
        );
    }

    #[test]
    fn test_memory_footprint() {
        assert_eq!(memory_footprint(OUTPUT_POSITION_COUNT), 1024);
        assert_eq!(memory_footprint(0), 0);
    }

    #[test]
    fn test_listing_head_and_tail() {
        let text = render_listing().unwrap();
        assert!(text.starts_with(
            "; Lookup tables for 128-position paddle control\n\
             ; Generated from 32 manual positions with linear interpolation\n\
             \n\
             ; P1 Paddle position offsets (add to player0x/player0y)\n\
             data p1_paddle_x\n"
        ));
        assert!(text.ends_with(
            "end\n\n; Total positions: 128\n; Memory usage: 1024 bytes for all 4 tables\n"
        ));
    }

    #[test]
    fn test_table_sets_separated_by_two_blank_lines() {
        let text = render_listing().unwrap();
        assert_eq!(text.matches("end\n\n\n; P").count(), 3);
        assert_eq!(text.matches("end\n\ndata ").count(), 4);
    }

    #[test]
    fn test_players_share_tables() {
        let text = render_listing().unwrap();
        let body = |name: &str| {
            let start = text.find(&format!("data {}\n", name)).unwrap();
            let rest = &text[start..];
            let end = rest.find("\nend").unwrap();
            rest[rest.find('\n').unwrap()..end].to_string()
        };
        assert_eq!(body("p1_paddle_x"), body("p2_paddle_x"));
        assert_eq!(body("p1_ball_y"), body("p2_ball_y"));
        assert_ne!(body("p1_paddle_x"), body("p1_ball_x"));
    }

    #[test]
    fn test_write_listing_matches_render() {
        let mut buf = Vec::new();
        write_listing(&mut buf).unwrap();
        assert_eq!(buf, render_listing().unwrap().into_bytes());
    }

    #[test]
    fn test_emit_listing_matches_render() {
        let mut buf = Vec::new();
        let outcome = emit_listing(&mut buf);
        assert_eq!(exit_status(&outcome), 0);
        assert_eq!(buf, render_listing().unwrap().into_bytes());
    }

    #[test]
    fn test_all_constants_cover_every_variant() {
        assert_eq!(Player::ALL, [Player::One, Player::Two]);
        assert_eq!(TableRole::ALL, [TableRole::Paddle, TableRole::BallFollow]);
    }
}
