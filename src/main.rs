//! tracker-ui - preview window for the tracker screens
//!
//! Renders a demo tracker state so layouts and themes can be checked
//! interactively. Arrow keys move the cursor, Enter toggles selection,
//! Tab cycles screens and Escape quits.

use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context as _, Result};
use clap::Parser;
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowId};

use tracker_ui::config::TrackerConfig;
use tracker_ui::model::{ScreenKind, TrackerState};
use tracker_ui::theme::{self, Theme};
use tracker_ui::tracing::ViewSnapshot;
use tracker_ui::view::{tabs, FontSet, Renderer};

/// Preview the tracker UI with demo data
#[derive(Parser, Debug)]
#[command(name = "tracker-ui", version, about = "Preview the tracker UI")]
struct Args {
    /// Screen to open (song, chain, phrase, instrument)
    #[arg(long, default_value = "phrase")]
    screen: ScreenKind,

    /// Config file to use instead of ~/.config/tracker-ui/config.yaml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Theme id, overrides the config
    #[arg(long)]
    theme: Option<String>,

    /// Font file, overrides the config
    #[arg(long, value_name = "PATH")]
    font: Option<PathBuf>,
}

impl Args {
    fn load_config(&self) -> Result<TrackerConfig> {
        let mut config = match &self.config {
            Some(path) => TrackerConfig::from_file(path)?,
            None => TrackerConfig::load(),
        };
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
        if let Some(font) = &self.font {
            config.font.file_path = font.clone();
        }
        Ok(config)
    }
}

struct App {
    config: TrackerConfig,
    theme: Theme,
    state: TrackerState,
    window: Option<Rc<Window>>,
    // Keeps the display connection open for the surface
    _context: Option<Context<Rc<Window>>>,
    renderer: Option<Renderer>,
}

impl App {
    fn new(config: TrackerConfig, screen: ScreenKind) -> Self {
        let theme = theme::load_theme(&config.theme).unwrap_or_else(|e| {
            tracing::warn!("Failed to load theme '{}': {}; using default", config.theme, e);
            Theme::default()
        });

        Self {
            config,
            theme,
            state: TrackerState::demo(screen),
            window: None,
            _context: None,
            renderer: None,
        }
    }

    fn init_renderer(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attributes = Window::default_attributes()
            .with_title("Tracker")
            .with_inner_size(LogicalSize::new(800, 600));
        let window = Rc::new(
            event_loop
                .create_window(attributes)
                .context("Failed to create window")?,
        );
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create softbuffer context: {}", e))?;
        let fonts = FontSet::from_config(&self.config.font)?;

        self.renderer = Some(Renderer::new(Rc::clone(&window), &context, fonts)?);
        self.window = Some(window);
        self._context = Some(context);
        Ok(())
    }

    /// Apply a key press to the demo state, returning true if it needs a redraw
    fn handle_key(&mut self, event: &KeyEvent) -> bool {
        if event.state != ElementState::Pressed {
            return false;
        }

        let before = ViewSnapshot::from_state(&self.state);
        let rows = self.state.screen.row_count();
        let cols = tabs::columns(&self.state.screen).len().saturating_sub(1);
        let cursor = self.state.display_cursor;

        match &event.logical_key {
            Key::Named(NamedKey::ArrowUp) => {
                self.state.display_cursor = cursor.moved(-1, 0, rows, cols)
            }
            Key::Named(NamedKey::ArrowDown) => {
                self.state.display_cursor = cursor.moved(1, 0, rows, cols)
            }
            Key::Named(NamedKey::ArrowLeft) => {
                self.state.display_cursor = cursor.moved(0, -1, rows, cols)
            }
            Key::Named(NamedKey::ArrowRight) => {
                self.state.display_cursor = cursor.moved(0, 1, rows, cols)
            }
            Key::Named(NamedKey::Enter) => self.state.display_cursor.selected = !cursor.selected,
            Key::Named(NamedKey::Tab) => {
                let mut next = TrackerState::demo(self.state.screen.kind().next());
                next.tempo = self.state.tempo;
                self.state = next;
            }
            _ => return false,
        }

        let after = ViewSnapshot::from_state(&self.state);
        match before.diff(&after) {
            Some(change) => {
                tracing::debug!("{}", change);
                true
            }
            None => false,
        }
    }

    fn redraw(&mut self) {
        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };
        if let Err(e) = renderer.render(&self.config, &self.theme.palette, &self.state) {
            tracing::error!("Render failed: {:#}", e);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_renderer(event_loop) {
            tracing::error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.clone() else {
            return;
        };
        if window.id() != window_id {
            return;
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. }
                if event.logical_key == Key::Named(NamedKey::Escape) =>
            {
                event_loop.exit()
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if self.handle_key(&event) {
                    window.request_redraw();
                }
            }
            WindowEvent::Resized(size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    if let Err(e) = renderer.resize(size.width, size.height) {
                        tracing::error!("{:#}", e);
                    }
                }
                window.request_redraw();
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);
    }
}

fn main() -> Result<()> {
    tracker_ui::tracing::init();

    let args = Args::parse();
    let config = args.load_config()?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config, args.screen);
    event_loop.run_app(&mut app)?;

    Ok(())
}
