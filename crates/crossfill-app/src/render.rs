//! Turning an assignment into something a person can read.

use std::fmt;

use crossfill_core::{Position, SlotCatalog};
use crossfill_solver::Assignment;

/// Character printed for a blocked cell.
pub const BLOCKED_CELL: char = '█';

/// Side of one cell in an SVG rendering, in pixels.
pub const CELL_SIZE: usize = 100;

/// Width of the dark border around every cell, in pixels.
pub const CELL_BORDER: usize = 2;

const FONT_SIZE: usize = 80;

/// Returns the letter of every cell, row by row.
///
/// Blocked cells and open cells no assigned slot covers are `None`. When
/// two slots disagree on a cell, the later slot in id order wins.
#[must_use]
pub fn letter_grid(catalog: &SlotCatalog, assignment: &Assignment) -> Vec<Vec<Option<char>>> {
    let structure = catalog.structure();
    let mut letters = vec![vec![None; structure.width()]; structure.height()];
    for (slot, word) in assignment.slots(catalog) {
        for (pos, letter) in slot.cells().zip(word.letters()) {
            letters[pos.row()][pos.col()] = Some(letter);
        }
    }
    letters
}

/// Renders the grid as text, one line per row.
///
/// Blocked cells are drawn as [`BLOCKED_CELL`] and empty open cells as a space.
///
/// # Examples
///
/// ```
/// use crossfill_app::render::render_text;
/// use crossfill_core::{SlotCatalog, SlotId, Structure, Vocabulary, Word};
/// use crossfill_solver::Assignment;
///
/// let structure: Structure = "___\n#__".parse()?;
/// let catalog = SlotCatalog::new(structure, Vocabulary::new());
/// let mut assignment = Assignment::new();
/// assignment.insert(SlotId::new(0), Word::new("cat").unwrap());
///
/// assert_eq!(render_text(&catalog, &assignment), "CAT\n█  \n");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
pub fn render_text(catalog: &SlotCatalog, assignment: &Assignment) -> String {
    let structure = catalog.structure();
    let letters = letter_grid(catalog, assignment);
    let mut out = String::with_capacity((structure.width() * 3 + 1) * structure.height());
    for (row, cells) in letters.iter().enumerate() {
        for (col, letter) in cells.iter().enumerate() {
            let c = if structure.is_open(Position::new(row, col)) {
                letter.unwrap_or(' ')
            } else {
                BLOCKED_CELL
            };
            out.push(c);
        }
        out.push('\n');
    }
    out
}

/// Renders the grid as an SVG document.
///
/// The canvas is black; every open cell is a white square inset by
/// [`CELL_BORDER`], with its letter centered.
#[must_use]
pub fn render_svg(catalog: &SlotCatalog, assignment: &Assignment) -> String {
    Svg {
        catalog,
        assignment,
    }
    .to_string()
}

struct Svg<'a> {
    catalog: &'a SlotCatalog,
    assignment: &'a Assignment,
}

impl fmt::Display for Svg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let structure = self.catalog.structure();
        let letters = letter_grid(self.catalog, self.assignment);
        let width = structure.width() * CELL_SIZE;
        let height = structure.height() * CELL_SIZE;
        let interior = CELL_SIZE - 2 * CELL_BORDER;

        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        )?;
        writeln!(f, r#"  <rect width="{width}" height="{height}" fill="black"/>"#)?;
        for (row, cells) in letters.iter().enumerate() {
            for (col, letter) in cells.iter().enumerate() {
                if !structure.is_open(Position::new(row, col)) {
                    continue;
                }
                let x = col * CELL_SIZE + CELL_BORDER;
                let y = row * CELL_SIZE + CELL_BORDER;
                writeln!(
                    f,
                    r#"  <rect x="{x}" y="{y}" width="{interior}" height="{interior}" fill="white"/>"#
                )?;
                if let Some(letter) = letter {
                    let cx = x + interior / 2;
                    let cy = y + interior / 2;
                    writeln!(
                        f,
                        r#"  <text x="{cx}" y="{cy}" font-family="sans-serif" font-size="{FONT_SIZE}" text-anchor="middle" dominant-baseline="central">{letter}</text>"#
                    )?;
                }
            }
        }
        writeln!(f, "</svg>")
    }
}

#[cfg(test)]
mod tests {
    use crossfill_core::{SlotId, Structure, Vocabulary, Word};

    use super::*;

    fn cross() -> (SlotCatalog, Assignment) {
        let structure: Structure = "#_#\n___\n#_#".parse().unwrap();
        let catalog = SlotCatalog::new(structure, Vocabulary::new());
        let mut assignment = Assignment::new();
        assignment.insert(SlotId::new(0), Word::new("car").unwrap());
        assignment.insert(SlotId::new(1), Word::new("cat").unwrap());
        (catalog, assignment)
    }

    #[test]
    fn test_letter_grid() {
        let (catalog, assignment) = cross();
        let grid = letter_grid(&catalog, &assignment);
        assert_eq!(grid, [
            [None, Some('C'), None],
            [Some('C'), Some('A'), Some('T')],
            [None, Some('R'), None],
        ]);
    }

    #[test]
    fn test_render_text() {
        let (catalog, assignment) = cross();
        assert_eq!(render_text(&catalog, &assignment), "█C█\nCAT\n█R█\n");
        assert_eq!(render_text(&catalog, &Assignment::new()), "█ █\n   \n█ █\n");
    }

    #[test]
    fn test_render_svg() {
        let (catalog, assignment) = cross();
        let svg = render_svg(&catalog, &assignment);
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains(r#"width="300" height="300""#));
        assert_eq!(svg.matches(r#"fill="white""#).count(), 5);
        assert_eq!(svg.matches("<text ").count(), 5);
        assert!(svg.contains(r#"<rect x="102" y="2" width="96" height="96" fill="white"/>"#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_render_svg_writes_one_element_per_line() {
        let (catalog, assignment) = cross();
        let svg = render_svg(&catalog, &assignment);
        // header, background, 5 cells with 5 letters, footer
        assert_eq!(svg.lines().count(), 13);
        assert!(svg.ends_with("</svg>\n"));
        assert!(svg.lines().skip(1).all(|line| line.trim_start().starts_with('<')));

        let empty = render_svg(&catalog, &Assignment::new());
        assert_eq!(empty.lines().count(), 8);
        assert_eq!(empty.matches("<text ").count(), 0);
    }

    #[test]
    fn test_sample_data() {
        let catalog = crate::load::parse_catalog(
            include_str!("../../../data/structure1.txt"),
            include_str!("../../../data/words1.txt"),
        )
        .unwrap();
        let assignment = crossfill_solver::BacktrackSolver::default()
            .solve(&catalog)
            .unwrap()
            .unwrap();
        assert_eq!(render_text(&catalog, &assignment), "█SIX█\n█E██F\n█V██I\n█E██V\n█NINE\n");
    }
}
