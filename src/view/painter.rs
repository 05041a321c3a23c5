//! [`Surface`] implementation that paints into a pixel [`Frame`]

use super::frame::Frame;
use super::geometry::{Point, Rect};
use super::surface::{FontRole, Surface};
use super::text::TextPainter;
use crate::theme::Color;

/// Paints draw operations into a frame with fontdue-rasterized text
pub struct FramePainter<'f, 'b, 't> {
    frame: &'f mut Frame<'b>,
    text: TextPainter<'t>,
}

impl<'f, 'b, 't> FramePainter<'f, 'b, 't> {
    pub fn new(frame: &'f mut Frame<'b>, text: TextPainter<'t>) -> Self {
        Self { frame, text }
    }
}

impl Surface for FramePainter<'_, '_, '_> {
    fn clear(&mut self, color: Color) {
        self.frame.clear(color.to_argb_u32());
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.frame.fill_rect(rect, color.to_argb_u32());
    }

    fn draw_text(&mut self, text: &str, center: Point, role: FontRole, color: Color) -> Rect {
        let bounds = Rect::from_center(center, self.text.measure(text, role));
        self.text.draw(
            self.frame,
            bounds.x,
            bounds.y,
            text,
            role,
            color.to_argb_u32(),
        );
        bounds
    }
}
