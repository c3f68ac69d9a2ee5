//! Skills panel widgets: role tabs, the chip grid and the radar canvas.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine, Points},
        Block, Borders, Gauge, Paragraph, Tabs,
    },
    Frame,
};

use super::Theme;
use crate::services::radar::{Point, TextAnchor};
use crate::services::{ChipGrid, PanelBody, PanelModel, RadarView};

/// Chip columns on a wide viewport.
const WIDE_COLUMNS: usize = 3;

/// Height of one chip gauge including its border.
const CHIP_HEIGHT: u16 = 3;

/// Render the role tabs with skill counts.
pub fn render_tabs(f: &mut Frame, area: Rect, model: &PanelModel, theme: &Theme) {
    let titles: Vec<Line> = model
        .tabs
        .iter()
        .map(|tab| {
            Line::from(Span::styled(
                format!("{} ({})", tab.label, tab.count),
                Style::default().fg(tab.color.to_ratatui_color()),
            ))
        })
        .collect();
    let selected = model.tabs.iter().position(|tab| tab.selected).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .add_modifier(Modifier::REVERSED),
        )
        .divider(Span::styled("|", Style::default().fg(theme.text_muted)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary))
                .title(" Roles ")
                .style(Style::default().bg(theme.background)),
        );

    f.render_widget(tabs, area);
}

/// Render the chips or the radar, whichever the model carries.
///
/// `narrow_columns` is used for the chip grid on a narrow viewport.
pub fn render_body(
    f: &mut Frame,
    area: Rect,
    model: &PanelModel,
    narrow_columns: Option<usize>,
    theme: &Theme,
) {
    match &model.body {
        PanelBody::Chips(grid) => {
            render_chips(f, area, grid, narrow_columns.unwrap_or(WIDE_COLUMNS), theme);
        }
        PanelBody::Radar(view) => render_radar(f, area, view, theme),
    }
}

fn render_chips(f: &mut Frame, area: Rect, grid: &ChipGrid, columns: usize, theme: &Theme) {
    if let Some(message) = &grid.empty_message {
        let empty = Paragraph::new(Span::styled(
            message.as_str(),
            Style::default().fg(theme.text_muted),
        ));
        f.render_widget(empty, area);
        return;
    }

    let toggle_height = u16::from(grid.more_toggle.is_some());
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(toggle_height)])
        .split(area);

    let columns = columns.max(1);
    let row_count = grid.chips.len().div_ceil(columns);
    let mut row_constraints = vec![Constraint::Length(CHIP_HEIGHT); row_count];
    row_constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(sections[0]);

    for (row_index, row_chips) in grid.chips.chunks(columns).enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(rows[row_index]);

        for (chip, cell) in row_chips.iter().zip(cells.iter()) {
            let color = chip.color.to_ratatui_color();
            let gauge = Gauge::default()
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(chip.color.dim(60).to_ratatui_color()))
                        .title(Span::styled(
                            chip.label.as_str(),
                            Style::default().fg(theme.text),
                        )),
                )
                .gauge_style(Style::default().fg(color).bg(theme.gauge_track))
                .percent(u16::from(chip.percent))
                .label(format!("{}%", chip.percent));
            f.render_widget(gauge, *cell);
        }
    }

    if let Some(toggle) = &grid.more_toggle {
        let mut spans = vec![
            Span::styled("[m] ", Style::default().fg(theme.accent)),
            Span::styled(toggle.label.as_str(), Style::default().fg(theme.text)),
        ];
        if toggle.hidden > 0 {
            spans.push(Span::styled(
                format!(" (+{})", toggle.hidden),
                Style::default().fg(theme.text_muted),
            ));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), sections[1]);
    }
}

/// Largest area of `area` that looks square on a terminal (cells are about twice as tall as wide).
fn square_area(area: Rect) -> Rect {
    let width = area.width.min(area.height.saturating_mul(2));
    let height = (width / 2).min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_radar(f: &mut Frame, area: Rect, view: &RadarView, theme: &Theme) {
    let chart = &view.chart;
    let size = chart.size;
    let area = square_area(area);
    let inner_width = f64::from(area.width.saturating_sub(2).max(1));
    let units_per_cell = size / inner_width;

    // Canvas y grows upwards; chart y grows downwards.
    let flip = move |p: Point| (p.x, size - p.y);

    let (title, title_color) = if chart.degenerate {
        (format!(" {} (needs 3+ axes) ", view.title), theme.warning)
    } else {
        (format!(" {} ", view.title), theme.primary)
    };

    let grid_color = theme.grid;
    let label_color = theme.text;
    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(title_color))
                .title(title),
        )
        .background_color(theme.background)
        .marker(Marker::Braille)
        .x_bounds([0.0, size])
        .y_bounds([0.0, size])
        .paint(move |ctx| {
            let (cx, cy) = flip(chart.frame.center);
            for ring in &chart.rings {
                ctx.draw(&Circle {
                    x: cx,
                    y: cy,
                    radius: ring.radius,
                    color: grid_color,
                });
            }
            for axis in &chart.axis_lines {
                let (x1, y1) = flip(axis.from);
                let (x2, y2) = flip(axis.to);
                ctx.draw(&CanvasLine::new(x1, y1, x2, y2, grid_color));
            }
            ctx.layer();

            for polygon in &chart.polygons {
                let color = polygon.stroke.to_ratatui_color();
                let points: Vec<(f64, f64)> = polygon.points.iter().copied().map(flip).collect();
                for edge in points.windows(2) {
                    ctx.draw(&CanvasLine::new(edge[0].0, edge[0].1, edge[1].0, edge[1].1, color));
                }
                if polygon.closed && points.len() > 2 {
                    let (first, last) = (points[0], points[points.len() - 1]);
                    ctx.draw(&CanvasLine::new(last.0, last.1, first.0, first.1, color));
                }
                ctx.draw(&Points {
                    coords: &points,
                    color,
                });
            }
            ctx.layer();

            for label in &chart.labels {
                let (x, y) = flip(label.position);
                let text_width = label.text.chars().count() as f64 * units_per_cell;
                let x = match label.anchor {
                    TextAnchor::Start => x,
                    TextAnchor::Middle => x - text_width / 2.0,
                    TextAnchor::End => x - text_width,
                };
                ctx.print(
                    x.clamp(0.0, size),
                    y.clamp(0.0, size),
                    Line::styled(label.text.clone(), Style::default().fg(label_color)),
                );
            }
        });

    f.render_widget(canvas, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_area_limits_width_by_height() {
        let area = square_area(Rect::new(0, 0, 100, 20));
        assert_eq!(area.width, 40);
        assert_eq!(area.height, 20);
        assert_eq!(area.x, 30);
    }

    #[test]
    fn test_square_area_limits_height_by_width() {
        let area = square_area(Rect::new(0, 0, 20, 40));
        assert_eq!(area.width, 20);
        assert_eq!(area.height, 10);
        assert_eq!(area.y, 15);
    }
}
