//! Status bar widget for status messages and key hints

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};
use crate::services::{PanelModel, ViewMode};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status line above the key hints
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, model: &PanelModel, theme: &Theme) {
        let first_line = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.warning)),
                Span::styled(error.as_str(), Style::default().fg(theme.text)),
            ])
        } else {
            Line::from(vec![
                Span::styled(
                    state.status_message.as_str(),
                    Style::default().fg(theme.text),
                ),
                Span::styled(
                    Self::width_note(state),
                    Style::default().fg(theme.text_muted),
                ),
            ])
        };

        let status = Paragraph::new(vec![first_line, Self::hints_line(state, model, theme)])
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.text_muted))
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    fn width_note(state: &AppState) -> String {
        let view = state.controller.state();
        match state.controller.width() {
            Some(width) => format!(
                "  ({width:.0}px, {})",
                if view.is_narrow() { "narrow" } else { "wide" }
            ),
            None => String::new(),
        }
    }

    /// Key hints for the current mode
    fn hints_line(state: &AppState, model: &PanelModel, theme: &Theme) -> Line<'static> {
        let mut hints = vec![
            ("←/→".to_string(), "role".to_string()),
            ("1-9".to_string(), "jump".to_string()),
            ("r".to_string(), model.toggle_label.clone()),
        ];
        if model.mode == ViewMode::Chips && state.controller.state().is_narrow() {
            let label = if state.controller.state().chips_expanded() {
                "less"
            } else {
                "more"
            };
            hints.push(("m".to_string(), label.to_string()));
        }
        if state.catalog_path.is_some() {
            hints.push(("F5".to_string(), "reload".to_string()));
        }
        hints.push(("q".to_string(), "quit".to_string()));

        let mut spans: Vec<Span<'static>> = Vec::new();
        for (i, (key, action)) in hints.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                key,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(action, Style::default().fg(theme.text_muted)));
        }

        Line::from(spans)
    }
}
