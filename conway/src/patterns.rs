// patterns.rs - Built-in seed patterns and a plaintext reader for custom worlds

use crate::error::{LifeError, Result};

/// A named pattern. Cells are `(x, y)` offsets from the top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// Width and height of the bounding box
    pub fn size(&self) -> (usize, usize) {
        bounding_box(self.cells)
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Block",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "Toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "Glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Upper half
            (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
            (0, 2), (5, 2), (7, 2), (12, 2),
            (0, 3), (5, 3), (7, 3), (12, 3),
            (0, 4), (5, 4), (7, 4), (12, 4),
            (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
            // Lower half (mirrored)
            (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
            (0, 8), (5, 8), (7, 8), (12, 8),
            (0, 9), (5, 9), (7, 9), (12, 9),
            (0, 10), (5, 10), (7, 10), (12, 10),
            (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (0, 4), (1, 4), (0, 5), (1, 5),
            (10, 4), (10, 5), (10, 6), (11, 3), (11, 7), (12, 2), (12, 8),
            (13, 2), (13, 8), (14, 5), (15, 3), (15, 7), (16, 4), (16, 5),
            (16, 6), (17, 5), (20, 2), (20, 3), (20, 4), (21, 2), (21, 3),
            (21, 4), (22, 1), (22, 5), (24, 0), (24, 1), (24, 5), (24, 6),
            (34, 2), (34, 3), (35, 2), (35, 3),
        ],
    },
];

/// Look up a built-in pattern by name, ignoring case
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Read a plaintext pattern into live-cell offsets.
///
/// One text line per row. `.`, `0` and spaces are dead, anything else is
/// alive. Lines starting with `!` are comments. Rows may be ragged.
pub fn parse_plaintext(text: &str) -> Result<Vec<(usize, usize)>> {
    if text.lines().all(|l| l.starts_with('!') || l.trim().is_empty()) {
        return Err(LifeError::EmptyPattern);
    }

    let mut cells = Vec::new();
    let rows = text.lines().filter(|l| !l.starts_with('!'));
    for (y, line) in rows.enumerate() {
        for (x, c) in line.chars().enumerate() {
            match c {
                '.' | '0' | ' ' => {}
                _ => cells.push((x, y)),
            }
        }
    }
    Ok(cells)
}

/// Width and height spanned by a set of cells (0x0 when empty)
pub fn bounding_box(cells: &[(usize, usize)]) -> (usize, usize) {
    cells.iter().fold((0, 0), |(w, h), &(x, y)| (w.max(x + 1), h.max(y + 1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pattern_has_unique_cells() {
        for pattern in PATTERNS {
            let mut cells = pattern.cells.to_vec();
            cells.sort();
            cells.dedup();
            assert_eq!(cells.len(), pattern.cells.len(), "{} repeats a cell", pattern.name);
        }
    }

    #[test]
    fn sizes() {
        assert_eq!(find("block").unwrap().size(), (2, 2));
        assert_eq!(find("Pulsar").unwrap().size(), (13, 13));
        assert_eq!(find("gosper glider gun").unwrap().size(), (36, 9));
        assert!(find("spaceship").is_none());
    }

    #[test]
    fn plaintext_glider() {
        let text = "!Name: Glider\n.O.\n..O\nOOO\n";
        let cells = parse_plaintext(text).unwrap();
        assert_eq!(cells, find("Glider").unwrap().cells.to_vec());
    }

    #[test]
    fn r_pentomino_shape() {
        let cells = parse_plaintext(".OO\nOO.\n.O.\n").unwrap();
        assert_eq!(cells, find("R-pentomino").unwrap().cells.to_vec());
    }

    #[test]
    fn plaintext_accepts_ragged_rows_and_other_markers() {
        let cells = parse_plaintext("#\n 0*\r\n").unwrap();
        assert_eq!(cells, vec![(0, 0), (2, 1)]);
    }

    #[test]
    fn plaintext_without_rows_is_rejected() {
        assert_eq!(parse_plaintext(""), Err(LifeError::EmptyPattern));
        assert_eq!(parse_plaintext("!only a comment\n"), Err(LifeError::EmptyPattern));
    }
}
