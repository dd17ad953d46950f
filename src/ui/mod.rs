//! Terminal rendering. Reads the controller and session; never mutates them.

pub mod chart;
pub mod game_common;
pub mod info_panel;

use crate::core::{GameController, GameResult, Session};
use game_common::{create_game_layout, render_status_bar};
use ratatui::{style::Color, Frame};

const INFO_PANEL_WIDTH: u16 = 34;

pub fn draw_ui(frame: &mut Frame, controller: &GameController, session: &Session) {
    let state = controller.state();
    let border_color = match state.result {
        Some(GameResult::Win) => Color::Green,
        Some(GameResult::Lose) => Color::Red,
        None => Color::Cyan,
    };

    let area = frame.size();
    let layout = create_game_layout(frame, area, " Converge ", border_color, INFO_PANEL_WIDTH);

    chart::render_price_chart(frame, layout.content, state, controller.config().win_ticks);

    let controls: &[(&str, &str)] = if state.running {
        &[("[S]", "Sell"), ("[Q]", "Quit")]
    } else {
        &[("[B]", "Buy"), ("[P]", "Switch barriers"), ("[Q]", "Quit")]
    };
    let status_color = match state.result {
        Some(GameResult::Win) => Color::Green,
        Some(GameResult::Lose) => Color::Red,
        None => Color::Yellow,
    };
    render_status_bar(
        frame,
        layout.status_bar,
        &state.status_text(),
        status_color,
        controls,
    );

    info_panel::render_info_panel(frame, layout.info_panel, controller, session);
}
