//! Status-line extraction from the terminal character buffer.
//!
//! By simulator convention the bottom two rows of the tty buffer carry the
//! one-line status summaries. Extraction is best-effort: an unexpected
//! buffer shape degrades to a fixed diagnostic string instead of an error.

use crate::grid::CharGrid;

/// Returned verbatim when the tty buffer cannot supply two status rows.
pub const STATUS_SHAPE_FALLBACK: &str =
    "Unable to extract status lines - unexpected tty_chars shape";

/// Extract the bottom two rows as right-trimmed text, second-to-last first.
///
/// Each cell's numeric code maps directly to the character with that code
/// point (the buffer is ASCII; codes above 127 follow latin-1), which keeps
/// the output byte-compatible with the upstream renderer.
pub fn status_lines(grid: &CharGrid) -> String {
    if grid.rows() < 2 {
        return STATUS_SHAPE_FALLBACK.to_string();
    }
    let second_last = row_to_text(grid.row(grid.rows() - 2));
    let last = row_to_text(grid.row(grid.rows() - 1));
    format!("{}\n{}", second_last, last)
}

fn row_to_text(row: &[u8]) -> String {
    let text: String = row.iter().map(|&c| c as char).collect();
    text.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&str]) -> CharGrid {
        CharGrid::from_rows(rows.iter().map(|r| r.as_bytes().to_vec()).collect()).unwrap()
    }

    #[test]
    fn extracts_last_two_rows_right_trimmed() {
        let g = grid(&["Hello   ", "World   "]);
        assert_eq!(status_lines(&g), "Hello\nWorld");
    }

    #[test]
    fn takes_bottom_rows_of_taller_buffers() {
        let g = grid(&["map.....", "........", "HP:10   ", "Exp:1   "]);
        assert_eq!(status_lines(&g), "HP:10\nExp:1");
    }

    #[test]
    fn one_row_buffer_yields_diagnostic() {
        let g = grid(&["HP:10"]);
        assert_eq!(status_lines(&g), STATUS_SHAPE_FALLBACK);
    }

    #[test]
    fn zero_row_buffer_yields_diagnostic() {
        let g = grid(&[]);
        assert_eq!(status_lines(&g), STATUS_SHAPE_FALLBACK);
    }

    #[test]
    fn interior_spaces_survive_trimming() {
        let g = grid(&["Dlvl:1  $:0   ", "T:1  HP:16(16)"]);
        assert_eq!(status_lines(&g), "Dlvl:1  $:0\nT:1  HP:16(16)");
    }
}
