//! Stateless UI rendering for tic-tac-toe.
//!
//! [`draw`] returns the [`ScreenLayout`] it rendered so mouse clicks can be
//! hit-tested against exactly what is on screen.

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe::{Player, Position, Square};

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 5;
const RESTART_LABEL: &str = "Start A New Game";

/// What a mouse click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A board square.
    Square(Position),
    /// The restart button.
    Restart,
}

/// Screen areas of the clickable widgets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    title: Rect,
    status: Rect,
    restart: Rect,
    squares: [Rect; 9],
    help: Rect,
}

impl ScreenLayout {
    /// Splits `area` into title, status, restart button, grid and help line.
    pub fn compute(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            // Title, status, restart button, board, help.
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(CELL_HEIGHT * 3),
                Constraint::Length(1),
            ])
            .split(area);

        let restart_width = RESTART_LABEL.len() as u16 + 4;
        let restart = center_rect(chunks[2], restart_width, 3);

        let grid = center_rect(chunks[3], CELL_WIDTH * 3, CELL_HEIGHT * 3);
        let squares = Position::ALL.map(|pos| {
            Rect::new(
                grid.x + pos.col() as u16 * CELL_WIDTH,
                grid.y + pos.row() as u16 * CELL_HEIGHT,
                CELL_WIDTH,
                CELL_HEIGHT,
            )
            .intersection(grid)
        });

        Self {
            title: chunks[0],
            status: chunks[1],
            restart,
            squares,
            help: chunks[4],
        }
    }

    /// Finds the widget under terminal cell (`column`, `row`).
    pub fn hit(&self, column: u16, row: u16) -> Option<Target> {
        if contains(self.restart, column, row) {
            return Some(Target::Restart);
        }
        Position::ALL
            .into_iter()
            .find(|pos| contains(self.squares[pos.to_index()], column, row))
            .map(Target::Square)
    }

    /// Screen area of one board square.
    pub fn square(&self, pos: Position) -> Rect {
        self.squares[pos.to_index()]
    }
}

/// Renders the whole screen and returns where everything went.
pub fn draw(frame: &mut Frame, app: &App) -> ScreenLayout {
    let layout = ScreenLayout::compute(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    let status = Paragraph::new(app.status_line())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout.status);

    let restart = Paragraph::new(RESTART_LABEL)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(restart, layout.restart);

    let winning = app.game().winning_line();
    for pos in Position::ALL {
        let highlight = winning.is_some_and(|line| line.contains(pos));
        draw_square(frame, layout.square(pos), app, pos, highlight);
    }

    let help = Paragraph::new("click or arrows+enter to play | 1-9 | r: new game | q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, layout.help);

    layout
}

fn draw_square(frame: &mut Frame, area: Rect, app: &App, pos: Position, highlight: bool) {
    let (symbol, base_style) = match app.game().board().get(pos) {
        Square::Empty => (
            app.empty_glyph().to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if highlight {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if pos == app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Pad vertically so the mark sits in the middle of the bordered square.
    let inner_height = area.height.saturating_sub(2);
    let mut lines = vec![Line::from(""); (inner_height / 2) as usize];
    lines.push(Line::from(Span::styled(symbol, style)));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(style));
    frame.render_widget(paragraph, area);
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Action;
    use ratatui::{
        Terminal,
        backend::TestBackend,
        buffer::{Buffer, Cell},
    };

    fn render_buffer(app: &App) -> (Buffer, ScreenLayout) {
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).expect("test terminal");
        let mut layout = ScreenLayout::default();
        terminal
            .draw(|frame| layout = draw(frame, app))
            .expect("draw");
        (terminal.backend().buffer().clone(), layout)
    }

    fn render(app: &App) -> (String, ScreenLayout) {
        let (buffer, layout) = render_buffer(app);
        let text = buffer
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>();
        (text, layout)
    }

    /// Buffer cell holding the mark of `pos`.
    fn mark_cell<'a>(buffer: &'a Buffer, layout: &ScreenLayout, pos: Position) -> &'a Cell {
        let area = layout.square(pos);
        // Border row, one padding row, then the mark, centered horizontally.
        buffer
            .cell((area.x + area.width / 2, area.y + 2))
            .expect("mark cell")
    }

    #[test]
    fn test_squares_do_not_overlap() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 60, 30));
        for pos in Position::ALL {
            let area = layout.square(pos);
            let center = (area.x + area.width / 2, area.y + area.height / 2);
            assert_eq!(layout.hit(center.0, center.1), Some(Target::Square(pos)));
        }
    }

    #[test]
    fn test_restart_button_hit() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 60, 30));
        let button = layout.restart;
        assert_eq!(
            layout.hit(button.x + 1, button.y + 1),
            Some(Target::Restart)
        );
        assert_eq!(layout.hit(0, 0), None);
    }

    #[test]
    fn test_render_shows_title_and_empty_glyph() {
        let app = App::new('/');
        let (text, _) = render(&app);
        assert!(text.contains("Tic Tac Toe"));
        assert!(text.contains(RESTART_LABEL));
        assert!(text.contains("Next player: X"));
        assert_eq!(text.matches('/').count(), 9);
    }

    #[test]
    fn test_render_winner() {
        let mut app = App::new('.');
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
            Position::TopRight,
        ] {
            app.handle(Action::Play(pos));
        }
        let (text, layout) = render(&app);
        assert!(text.contains("X is Winner"));

        let (buffer, _) = render_buffer(&app);
        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            let cell = mark_cell(&buffer, &layout, pos);
            assert_eq!(cell.symbol(), "X");
            assert_eq!(cell.bg, Color::Green);
        }
        for pos in [Position::Center, Position::BottomLeft] {
            let cell = mark_cell(&buffer, &layout, pos);
            assert_eq!(cell.symbol(), "O");
            assert_ne!(cell.bg, Color::Green);
        }

        let top_left = layout.square(Position::TopLeft);
        assert_eq!(
            layout.hit(top_left.x + 1, top_left.y + 1),
            Some(Target::Square(Position::TopLeft))
        );
    }
}
