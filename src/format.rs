// src/format.rs

//! Rendering of position sequences as batari Basic `data` tables.
//!
//! A table set is two blocks, one per axis:
//!
//! ```text
//! data p1_paddle_x
//!   4, 4, 3, 2, ...
//! end
//!
//! data p1_paddle_y
//!   28, 28, 27, 26, ...
//! end
//! ```

use crate::geom::{split_axes, Position};
use crate::utils::log::trace;

/// Keyword that opens a table block.
pub const DATA_KEYWORD: &str = "data";
/// Keyword that closes a table block.
pub const END_KEYWORD: &str = "end";
/// Maximum number of values on one chunk line.
pub const CHUNK_WIDTH: usize = 16;
/// Prefix of every chunk line.
pub const INDENT: &str = "  ";
/// Separator between values on a chunk line.
pub const SEPARATOR: &str = ", ";

/// Renders one axis as a `data` block without a trailing newline.
pub fn format_axis(name: &str, values: &[i32]) -> String {
    let mut out = format!("{} {}", DATA_KEYWORD, name);
    for chunk in values.chunks(CHUNK_WIDTH) {
        let line: Vec<String> = chunk.iter().map(|v| v.to_string()).collect();
        out.push('\n');
        out.push_str(INDENT);
        out.push_str(&line.join(SEPARATOR));
    }
    out.push('\n');
    out.push_str(END_KEYWORD);
    out
}

/// Renders the X and Y tables for `positions` as `<prefix>_x` and
/// `<prefix>_y`, separated by one blank line. There is no trailing newline.
///
/// `name_prefix` is inserted verbatim.
pub fn format_table(positions: &[Position], name_prefix: &str) -> String {
    let (xs, ys) = split_axes(positions);
    trace!("Formatting {} positions as {}_x/{}_y", positions.len(), name_prefix, name_prefix);

    let mut out = format_axis(&format!("{}_x", name_prefix), &xs);
    out.push_str("\n\n");
    out.push_str(&format_axis(&format!("{}_y", name_prefix), &ys));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk_lines(block: &str) -> usize {
        block.lines().filter(|l| l.starts_with(INDENT)).count()
    }

    #[test]
    fn test_format_axis_single_chunk() {
        assert_eq!(format_axis("t_x", &[1, -2, 3]), "data t_x\n  1, -2, 3\nend");
    }

    #[test]
    fn test_format_axis_wraps_at_sixteen() {
        let values: Vec<i32> = (0..17).collect();
        let block = format_axis("w", &values);
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "  0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15");
        assert_eq!(lines[2], "  16");
        assert_eq!(lines[3], "end");
    }

    #[test]
    fn test_format_axis_exact_multiple_of_chunk_width() {
        let values = [-7; 32];
        let block = format_axis("m", &values);
        let row = format!("  {}", vec!["-7"; CHUNK_WIDTH].join(", "));
        assert_eq!(block, format!("data m\n{}\n{}\nend", row, row));
    }

    #[test]
    fn test_format_table_empty() {
        assert_eq!(format_table(&[], "empty"), "data empty_x\nend\n\ndata empty_y\nend");
    }

    #[test]
    fn test_format_table_layout() {
        let positions = [Position::new(4, 28), Position::new(-1, 24)];
        assert_eq!(
            format_table(&positions, "p1_paddle"),
            "data p1_paddle_x\n  4, -1\nend\n\ndata p1_paddle_y\n  28, 24\nend"
        );
    }

    #[test]
    fn test_format_table_128_positions() {
        let positions: Vec<Position> = (0..128).map(|i| Position::new(i, -i)).collect();
        let text = format_table(&positions, "p1_paddle");
        let (x_block, y_block) = text.split_once("\n\n").unwrap();
        assert_eq!(chunk_lines(x_block), 8);
        assert_eq!(chunk_lines(y_block), 8);
        assert!(y_block.starts_with("data p1_paddle_y\n  0, -1, -2"));
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_prefix_is_verbatim() {
        let text = format_table(&[Position::new(0, 0)], "odd name");
        assert!(text.starts_with("data odd name_x\n"));
    }
}
