//! Tic-tac-toe board widget for TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, Borders, Widget},
};

use crate::board::position::{Position, ORDERED, SIZE};
use crate::board::Board;
use crate::tui::Theme;

/// Widget that renders the 3x3 grid with the cursor and vanishing marks
pub struct BoardWidget<'a> {
    board: &'a Board,
    theme: &'a Theme,
    cursor: Option<Position>,
    vanishing: &'a [Position],
}

impl<'a> BoardWidget<'a> {
    pub fn new(board: &'a Board, theme: &'a Theme) -> Self {
        Self {
            board,
            theme,
            cursor: None,
            vanishing: &[],
        }
    }

    pub fn cursor(mut self, cursor: Option<Position>) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn vanishing(mut self, vanishing: &'a [Position]) -> Self {
        self.vanishing = vanishing;
        self
    }
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Board")
            .border_style(self.theme.border_style());

        let inner = block.inner(area);
        block.render(area, buf);

        // One column and one row of gap between cells.
        let size = u16::from(SIZE);
        let cell_width = (inner.width.saturating_sub(size - 1) / size).clamp(1, 9);
        let cell_height = (inner.height.saturating_sub(size - 1) / size).clamp(1, 3);

        for &position in ORDERED.iter() {
            let x = inner.x + u16::from(position.col()) * (cell_width + 1);
            let y = inner.y + u16::from(position.row()) * (cell_height + 1);
            if x + cell_width > inner.x + inner.width || y + cell_height > inner.y + inner.height {
                continue;
            }

            let cell = self.board.get(position);
            let style = self.theme.cell_style(
                cell.player(),
                self.cursor == Some(position),
                self.vanishing.contains(&position),
            );

            for dy in 0..cell_height {
                for dx in 0..cell_width {
                    let is_center = dx == cell_width / 2 && dy == cell_height / 2;
                    let ch = if is_center { cell.to_char() } else { ' ' };
                    if let Some(target) = buf.cell_mut((x + dx, y + dy)) {
                        target.set_char(ch).set_style(style);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe_position;

    fn rendered_chars(buf: &Buffer) -> String {
        buf.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_renders_marks() {
        let board = tictactoe_position! {
            X . .
            . O .
            . . X
        };
        let theme = Theme::default();
        let area = Rect::new(0, 0, 13, 8);
        let mut buf = Buffer::empty(area);

        BoardWidget::new(&board, &theme).render(area, &mut buf);

        let text = rendered_chars(&buf);
        assert_eq!(text.matches('X').count(), 2);
        assert_eq!(text.matches('O').count(), 1);
    }

    #[test]
    fn test_cursor_is_highlighted() {
        let board = Board::new();
        let theme = Theme::default();
        let area = Rect::new(0, 0, 13, 8);
        let mut buf = Buffer::empty(area);

        BoardWidget::new(&board, &theme)
            .cursor(Some(Position::new(0, 0)))
            .render(area, &mut buf);

        let top_left = buf.cell((1, 1)).map(|cell| cell.bg);
        assert_eq!(top_left, Some(theme.cursor));
        let bottom_right = buf.cell((9, 5)).map(|cell| cell.bg);
        assert_eq!(bottom_right, Some(theme.cell));
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let board = Board::new();
        let theme = Theme::default();
        let area = Rect::new(0, 0, 3, 3);
        let mut buf = Buffer::empty(area);
        BoardWidget::new(&board, &theme).render(area, &mut buf);
    }
}
