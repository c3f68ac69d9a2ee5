//! Terminal user interface for browsing the skills panel.
//!
//! This module contains the main TUI loop, `AppState` and key handling. Drawing
//! lives in [`panel`] and [`status_bar`].

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

pub mod panel;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
    Frame, Terminal,
};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::config::Config;
use crate::models::SkillCatalog;
use crate::services::{
    CatalogService, CatalogStore, CatalogTranslator, PanelModel, PanelRenderer, RoleTaxonomy,
    ViewController, WidthSignal,
};

pub use status_bar::StatusBar;
pub use theme::Theme;

/// Application state for the skills browser.
#[derive(Debug)]
pub struct AppState {
    /// Loaded configuration
    pub config: Config,
    /// Catalog file being shown, if not the built-in one
    pub catalog_path: Option<PathBuf>,
    /// Current catalog snapshot holder
    pub store: CatalogStore,
    /// Render model builder
    pub renderer: PanelRenderer,
    /// Selection, mode and width state
    pub controller: ViewController,
    /// Container width source the controller is mounted on
    pub signal: WidthSignal,
    /// Active color theme
    pub theme: Theme,
    /// Status line message
    pub status_message: String,
    /// Error line message, cleared on the next key press
    pub error_message: Option<String>,
    /// Set when the user asks to quit
    pub should_quit: bool,
}

impl AppState {
    /// Loads the catalog and builds the initial state.
    pub fn new(config: Config, catalog_path: Option<PathBuf>) -> Result<Self> {
        let catalog = CatalogService::load_or_builtin(catalog_path.as_deref())?;
        Ok(Self::with_catalog(config, catalog_path, catalog))
    }

    /// Builds the initial state around an already loaded catalog.
    #[must_use]
    pub fn with_catalog(
        config: Config,
        catalog_path: Option<PathBuf>,
        catalog: SkillCatalog,
    ) -> Self {
        let taxonomy = RoleTaxonomy::from_catalog(&catalog);
        let mut controller = ViewController::new(
            taxonomy,
            config.ui.chip_limits(),
            config.ui.narrow_threshold_px,
        );
        let signal = WidthSignal::new();
        controller.mount(&signal);

        Self {
            renderer: config.panel_renderer(),
            theme: Theme::from_mode(config.ui.theme_mode),
            config,
            catalog_path,
            store: CatalogStore::new(catalog),
            controller,
            signal,
            status_message: "Ready".to_string(),
            error_message: None,
            should_quit: false,
        }
    }

    /// Publishes the panel width for a terminal of `columns` cells.
    pub fn resize(&mut self, columns: u16) {
        self.signal
            .publish(f64::from(columns) * self.config.ui.cell_width_px);
    }

    /// Render model for the current snapshot and state.
    #[must_use]
    pub fn model(&self) -> (Arc<SkillCatalog>, PanelModel) {
        let catalog = self.store.snapshot();
        let translator = CatalogTranslator::new(&catalog, &self.config.ui.locale);
        let model = self.renderer.render(
            &catalog,
            self.controller.state(),
            self.controller.width(),
            &translator,
        );
        (catalog, model)
    }

    /// Re-reads the catalog file; the current catalog stays on failure.
    pub fn reload_catalog(&mut self) {
        let Some(path) = self.catalog_path.clone() else {
            self.status_message = "Using the built-in catalog; nothing to reload".to_string();
            return;
        };

        match self.store.reload(&path) {
            Ok(()) => {
                let catalog = self.store.snapshot();
                self.controller
                    .set_taxonomy(RoleTaxonomy::from_catalog(&catalog));
                self.status_message = format!("Reloaded {}", path.display());
                info!(path = %path.display(), "catalog reloaded");
            }
            Err(e) => {
                warn!(error = %e, "catalog reload failed");
                self.error_message = Some(format!("Reload failed: {e:#}"));
            }
        }
    }
}

impl Drop for AppState {
    fn drop(&mut self) {
        self.controller.unmount();
    }
}

/// Setup terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui<B: Backend>(state: &mut AppState, terminal: &mut Terminal<B>) -> Result<()> {
    let size = terminal.size().context("Failed to read terminal size")?;
    state.resize(size.width);

    loop {
        state.controller.sync();
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => handle_key_event(state, key),
                Event::Resize(columns, _) => state.resize(columns),
                _ => {}
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Applies one key press.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    state.error_message = None;

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => state.should_quit = true,
        KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => state.controller.select_next(),
        KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => {
            state.controller.select_previous();
        }
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(digit) = c.to_digit(10) {
                state.controller.select_index(digit as usize - 1);
            }
        }
        KeyCode::Char('r') => {
            state.controller.toggle_view();
            state.status_message = format!("{} view", state.controller.state().mode());
        }
        KeyCode::Char('m') => {
            if state.controller.state().is_narrow() {
                state.controller.toggle_chips_expanded();
            } else {
                state.status_message = "All skills are already shown".to_string();
            }
        }
        KeyCode::F(5) => state.reload_catalog(),
        _ => {}
    }
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Role tabs
            Constraint::Min(6),    // Chips or radar
            Constraint::Length(4), // Status bar
        ])
        .split(f.area());

    let (_, model) = state.model();
    let narrow_columns = state
        .controller
        .state()
        .is_narrow()
        .then(|| state.controller.limits().columns);
    panel::render_tabs(f, chunks[0], &model, &state.theme);
    panel::render_body(f, panel_area(chunks[1]), &model, narrow_columns, &state.theme);
    StatusBar::render(f, chunks[2], state, &model, &state.theme);
}

/// Body area with a one-cell side margin.
fn panel_area(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        width: area.width.saturating_sub(2),
        ..area
    }
}
