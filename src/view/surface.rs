//! Drawing surface abstraction
//!
//! Layout and formatting code never touches pixels directly; it issues text and
//! rectangle draws through [`Surface`]. The window and screenshot paths paint
//! into a pixel [`Frame`](super::Frame), tests and benchmarks record into a
//! [`DrawList`].

use super::geometry::{Point, Rect};
use crate::theme::Color;

/// Which configured font size a piece of text uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontRole {
    /// Tab titles, tempo, menu map
    Title,
    /// Grid cells, column labels, now-playing notes
    Cell,
}

/// A single draw operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear(Color),
    Rect {
        rect: Rect,
        color: Color,
    },
    Text {
        text: String,
        /// Center of the text's bounding box
        center: Point,
        role: FontRole,
        color: Color,
    },
}

/// Target for draw operations. All operations are infallible: anything
/// outside the surface is clipped.
pub trait Surface {
    /// Fill the whole surface
    fn clear(&mut self, color: Color);

    /// Fill `rect` with a solid color
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw `text` centered on `center`, returning its bounding box
    fn draw_text(&mut self, text: &str, center: Point, role: FontRole, color: Color) -> Rect;

    /// Replay a recorded command
    fn submit(&mut self, cmd: &DrawCmd) {
        match cmd {
            DrawCmd::Clear(color) => self.clear(*color),
            DrawCmd::Rect { rect, color } => self.fill_rect(*rect, *color),
            DrawCmd::Text {
                text,
                center,
                role,
                color,
            } => {
                self.draw_text(text, *center, *role, *color);
            }
        }
    }
}

/// Character advance used by [`DrawList`] text measurement
pub const DRAW_LIST_CHAR_WIDTH: f32 = 10.0;
/// Line height used by [`DrawList`] text measurement
pub const DRAW_LIST_LINE_HEIGHT: f32 = 16.0;

/// Surface that records commands instead of painting them.
///
/// Text is measured as monospace with a fixed advance per character.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    cmds: Vec<DrawCmd>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCmd] {
        &self.cmds
    }

    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Recorded rectangle fills in draw order
    pub fn rects(&self) -> impl Iterator<Item = (Rect, Color)> + '_ {
        self.cmds.iter().filter_map(|cmd| match cmd {
            DrawCmd::Rect { rect, color } => Some((*rect, *color)),
            _ => None,
        })
    }

    /// Recorded text draws in draw order
    pub fn texts(&self) -> impl Iterator<Item = (&str, Point, Color)> + '_ {
        self.cmds.iter().filter_map(|cmd| match cmd {
            DrawCmd::Text {
                text, center, color, ..
            } => Some((text.as_str(), *center, *color)),
            _ => None,
        })
    }

    /// Position in the command list of the first text draw equal to `text`
    pub fn position_of_text(&self, text: &str) -> Option<usize> {
        self.cmds
            .iter()
            .position(|cmd| matches!(cmd, DrawCmd::Text { text: t, .. } if t == text))
    }
}

impl Surface for DrawList {
    fn clear(&mut self, color: Color) {
        self.cmds.push(DrawCmd::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.cmds.push(DrawCmd::Rect { rect, color });
    }

    fn draw_text(&mut self, text: &str, center: Point, role: FontRole, color: Color) -> Rect {
        let size = (
            text.chars().count() as f32 * DRAW_LIST_CHAR_WIDTH,
            DRAW_LIST_LINE_HEIGHT,
        );
        self.cmds.push(DrawCmd::Text {
            text: text.to_string(),
            center,
            role,
            color,
        });
        Rect::from_center(center, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_text_returns_centered_bounds() {
        let mut list = DrawList::new();
        let bounds = list.draw_text("C-5", (100.0, 50.0), FontRole::Cell, Color::rgb(1, 2, 3));
        assert_eq!(bounds.center(), (100.0, 50.0));
        assert_eq!(bounds.width, 30.0);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_submit_replays_commands() {
        let mut first = DrawList::new();
        first.clear(Color::rgb(0, 0, 0));
        first.fill_rect(Rect::new(0.0, 0.0, 5.0, 5.0), Color::rgb(9, 9, 9));
        first.draw_text("V-8", (1.0, 1.0), FontRole::Cell, Color::rgb(5, 5, 5));

        let mut second = DrawList::new();
        for cmd in first.commands() {
            second.submit(cmd);
        }
        assert_eq!(first.commands(), second.commands());
    }
}
