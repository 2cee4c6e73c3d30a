pub mod raster;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;
use crate::render;
use raster::{fit_canvas, Raster};

pub fn render(frame: &mut Frame, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(255, 180, 0)))
        .title(" ★ Catch the Falling Stars! ")
        .title_style(
            Style::default()
                .fg(Color::Rgb(255, 215, 0))
                .add_modifier(Modifier::BOLD),
        );

    let inner = block.inner(frame.area());
    frame.render_widget(block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Play field
            Constraint::Length(1), // Help bar
        ])
        .split(inner);

    let canvas = fit_canvas(chunks[0]);
    let mut raster = Raster::new(canvas.width, canvas.height);
    render::draw(&app.game, &mut raster);
    frame.render_widget(Paragraph::new(raster.into_lines()), canvas);

    frame.render_widget(Paragraph::new(help_line(app.game.is_game_over())), chunks[1]);
}

fn help_line(game_over: bool) -> Line<'static> {
    let sep = || Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60)));
    if game_over {
        Line::from(vec![
            Span::styled(" SPACE Play Again ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            sep(),
            Span::styled("Esc/Q Quit", Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(vec![
            Span::styled(" ←→/A D Move Basket ", Style::default().fg(Color::DarkGray)),
            sep(),
            Span::styled("Esc/Q Quit", Style::default().fg(Color::DarkGray)),
        ])
    }
}
