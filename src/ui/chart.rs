//! Line chart of the spot price and both barriers.

use crate::core::GameState;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{Axis, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

/// Fraction of the value range added above and below the series.
const Y_PADDING: f64 = 0.1;

/// Pairs each value with its tick index.
pub fn series_points(values: &[f64]) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| (i as f64, v))
        .collect()
}

/// X axis spans the whole game so the chart does not rescale every tick.
pub fn x_bounds(state: &GameState, win_ticks: u32) -> [f64; 2] {
    let last = state.prices.len().saturating_sub(1) as f64;
    [0.0, last.max(win_ticks as f64).max(1.0)]
}

pub fn y_bounds(state: &GameState) -> [f64; 2] {
    let (mut min, mut max) = (f64::INFINITY, f64::NEG_INFINITY);
    for v in state
        .prices
        .iter()
        .chain(&state.upper_barriers)
        .chain(&state.lower_barriers)
    {
        min = min.min(*v);
        max = max.max(*v);
    }
    if !min.is_finite() || !max.is_finite() {
        return [0.0, 1.0];
    }
    let pad = ((max - min) * Y_PADDING).max(0.5);
    [min - pad, max + pad]
}

pub fn render_price_chart(frame: &mut Frame, area: Rect, state: &GameState, win_ticks: u32) {
    if state.is_idle() {
        let hint = Paragraph::new("Press [B] to buy in and start the walk")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        let y = area.y + area.height / 2;
        frame.render_widget(hint, Rect::new(area.x, y, area.width, area.height.min(1)));
        return;
    }

    let spot = series_points(&state.prices);
    let upper = series_points(&state.upper_barriers);
    let lower = series_points(&state.lower_barriers);

    let barrier_style = Style::default().fg(Color::Red);
    let datasets = vec![
        Dataset::default()
            .name("Upper")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(barrier_style)
            .data(&upper),
        Dataset::default()
            .name("Lower")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(barrier_style)
            .data(&lower),
        Dataset::default()
            .name("Spot")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&spot),
    ];

    let [x_min, x_max] = x_bounds(state, win_ticks);
    let [y_min, y_max] = y_bounds(state);
    let label = |v: f64| Span::styled(format!("{:.1}", v), Style::default().fg(Color::DarkGray));

    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .title(Span::styled("tick", Style::default().fg(Color::DarkGray)))
                .bounds([x_min, x_max])
                .labels(vec![
                    Span::raw(format!("{}", x_min as u32)),
                    Span::raw(format!("{}", x_max as u32)),
                ]),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled(
                    "price",
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                ))
                .bounds([y_min, y_max])
                .labels(vec![
                    label(y_min),
                    label((y_min + y_max) / 2.0),
                    label(y_max),
                ]),
        );

    frame.render_widget(chart, area);
}
