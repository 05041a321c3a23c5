//! View module - per-frame rendering of the tracker screens
//!
//! Every frame the layout is derived from scratch out of the viewport size and
//! the UI fractions, then the active tab and the sidebar are drawn through a
//! [`Surface`]. The [`Renderer`] presents the result in a window.

pub mod cursor;
pub mod frame;
pub mod geometry;
pub mod grid;
pub mod painter;
pub mod sidebar;
pub mod surface;
pub mod tabs;
pub mod text;

pub use frame::Frame;
pub use geometry::{GridLayout, Point, Rect, Viewport};
pub use painter::FramePainter;
pub use surface::{DrawCmd, DrawList, FontRole, Surface};
pub use text::{FontSet, TextPainter};

use std::num::NonZeroU32;
use std::rc::Rc;

use anyhow::Result;
use winit::window::Window;

use crate::config::{TrackerConfig, UiConfig};
use crate::format::{NoteNamer, TrackerNoteNames};
use crate::model::TrackerState;
use crate::theme::Palette;
use geometry::Edge;

/// Read-only inputs shared by every draw routine of one frame
#[derive(Clone, Copy)]
pub struct FrameContext<'a> {
    pub viewport: Viewport,
    pub ui: &'a UiConfig,
    pub palette: &'a Palette,
    pub notes: &'a dyn NoteNamer,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        viewport: Viewport,
        ui: &'a UiConfig,
        palette: &'a Palette,
        notes: &'a dyn NoteNamer,
    ) -> Self {
        Self {
            viewport,
            ui,
            palette,
            notes,
        }
    }

    pub fn tab_region(&self) -> Rect {
        geometry::tab_region(self.viewport, &self.ui.tab)
    }

    pub fn sidebar_region(&self) -> Rect {
        geometry::edge_panel(self.viewport, Edge::Right, self.ui.menu.width)
    }

    pub fn row_height(&self) -> f32 {
        geometry::row_height(self.viewport, &self.ui.tab)
    }

    /// Grid layout of the tab region for `column_count` columns, index column included
    pub fn grid_layout(&self, column_count: usize) -> Option<GridLayout> {
        GridLayout::new(
            self.tab_region(),
            self.row_height(),
            column_count,
            self.ui.tab.row_elm_width,
        )
    }
}

/// Clear to the background, then draw the active tab and the sidebar
pub fn render_frame(ctx: &FrameContext, state: &TrackerState, surface: &mut dyn Surface) {
    surface.clear(ctx.palette.background);
    tabs::draw_tab(ctx, surface, &state.screen, &state.display_cursor);
    sidebar::draw_sidebar(ctx, surface, state);
}

/// Render `state` into an ARGB pixel buffer of `width` × `height`
pub fn paint(
    buffer: &mut [u32],
    width: usize,
    height: usize,
    fonts: &mut FontSet,
    config: &TrackerConfig,
    palette: &Palette,
    state: &TrackerState,
) {
    let mut frame = Frame::new(buffer, width, height);
    let viewport = Viewport::new(frame.width() as f32, frame.height() as f32);
    let mut painter = FramePainter::new(&mut frame, fonts.painter(&config.font));
    let ctx = FrameContext::new(viewport, &config.ui, palette, &TrackerNoteNames);
    render_frame(&ctx, state, &mut painter);
}

/// Window-backed renderer presenting through softbuffer
pub struct Renderer {
    fonts: FontSet,
    surface: softbuffer::Surface<Rc<Window>, Rc<Window>>,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(
        window: Rc<Window>,
        context: &softbuffer::Context<Rc<Window>>,
        fonts: FontSet,
    ) -> Result<Self> {
        let size = window.inner_size();
        let surface = softbuffer::Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create surface: {}", e))?;

        let mut renderer = Self {
            fonts,
            surface,
            width: 0,
            height: 0,
        };
        renderer.resize(size.width, size.height)?;
        Ok(renderer)
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Match the surface to the window size; zero sizes are ignored
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
            return Ok(());
        };
        if (width, height) == (self.width, self.height) {
            return Ok(());
        }

        self.surface
            .resize(w, h)
            .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;
        self.width = width;
        self.height = height;
        tracing::debug!("Surface resized to {}x{}", width, height);
        Ok(())
    }

    pub fn render(
        &mut self,
        config: &TrackerConfig,
        palette: &Palette,
        state: &TrackerState,
    ) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("Failed to get surface buffer: {}", e))?;
        paint(
            &mut buffer,
            self.width as usize,
            self.height as usize,
            &mut self.fonts,
            config,
            palette,
            state,
        );
        buffer
            .present()
            .map_err(|e| anyhow::anyhow!("Failed to present buffer: {}", e))?;
        Ok(())
    }
}
