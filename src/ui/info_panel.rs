//! Right-hand panel: current numbers, session tally and the event log.

use super::game_common::{progress_bar, render_panel_frame};
use crate::core::{GameController, LogTone, Session};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

fn stat_line(label: &str, value: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {:<8}", label), Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().fg(color)),
    ])
}

fn format_price(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.2}", v))
}

pub fn render_info_panel(
    frame: &mut Frame,
    area: Rect,
    controller: &GameController,
    session: &Session,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(16), Constraint::Min(3)])
        .split(area);

    render_game_stats(frame, chunks[0], controller, session);
    render_event_log(frame, chunks[1], session);
}

fn render_game_stats(frame: &mut Frame, area: Rect, controller: &GameController, session: &Session) {
    let inner = render_panel_frame(frame, area, " Info ");
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let state = controller.state();
    let win_ticks = controller.config().win_ticks;
    let barrier = state.current_barrier();

    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {} ", controller.config().barrier.name()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        stat_line("Tick:", format!("{} / {}", state.tick_count, win_ticks), Color::White),
        stat_line("Spot:", format_price(state.current_price()), Color::Cyan),
        stat_line("Upper:", format_price(barrier.map(|b| b.upper)), Color::Red),
        stat_line("Lower:", format_price(barrier.map(|b| b.lower)), Color::Red),
    ];
    if let Some(pct) = state.band_percent {
        lines.push(stat_line("Band:", format!("±{:.2}%", pct), Color::Yellow));
    }
    if let Some(b) = barrier {
        lines.push(stat_line("Width:", format!("{:.2}", b.width()), Color::Yellow));
    }

    lines.push(Line::from(""));
    let bar_width = (inner.width as usize).saturating_sub(3);
    lines.push(progress_bar(
        state.tick_count as f64 / win_ticks.max(1) as f64,
        bar_width,
        Color::Green,
    ));
    lines.push(Line::from(""));
    lines.push(stat_line(
        "Record:",
        format!("{}W {}L", session.wins, session.losses),
        Color::White,
    ));
    lines.push(stat_line(
        "Streak:",
        format!("{} (best {})", session.current_streak, session.best_streak),
        Color::White,
    ));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_event_log(frame: &mut Frame, area: Rect, session: &Session) {
    let inner = render_panel_frame(frame, area, " Log ");
    if inner.height == 0 {
        return;
    }

    // Newest entries at the bottom
    let visible = inner.height as usize;
    let skip = session.log.len().saturating_sub(visible);
    let lines: Vec<Line> = session
        .log
        .iter()
        .skip(skip)
        .map(|entry| {
            let color = match entry.tone {
                LogTone::Info => Color::Gray,
                LogTone::Good => Color::Green,
                LogTone::Bad => Color::Red,
            };
            Line::from(Span::styled(
                format!(" {}", entry.message),
                Style::default().fg(color),
            ))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
