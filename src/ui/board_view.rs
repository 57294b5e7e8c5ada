//! Board rendering for the tic-tac-toe GUI

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::{Board, Cell, Player, Pos, BOARD_SIZE};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 120.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell index if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current_turn: Player,
        last_move: Option<usize>,
        winning_line: Option<[usize; 3]>,
        accepts_input: bool,
    ) -> Option<usize> {
        let available_size = ui.available_size();

        // Square board that fits the available space
        let board_size = (available_size.x.min(available_size.y) - 20.0).max(90.0);
        let (response, painter) = ui.allocate_painter(Vec2::splat(board_size), Sense::click());
        self.set_rect(response.rect);

        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_marks(&painter, board);

        if let Some(idx) = last_move {
            self.draw_last_move_marker(&painter, idx);
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }

        let mut clicked = None;

        if accepts_input {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(idx) = self.screen_to_board(pointer_pos) {
                    if board.is_empty(idx) {
                        self.draw_hover_preview(&painter, idx, current_turn);
                        if response.clicked() {
                            clicked = Some(idx);
                        }
                    }
                }
            }
        }

        clicked
    }

    /// Place the board in `rect` and recompute the cell size
    pub fn set_rect(&mut self, rect: Rect) {
        self.board_rect = rect;
        self.cell_size = (rect.width().min(rect.height()) - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;
    }

    /// Draw the two inner lines in each direction
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let origin = self.board_rect.min + Vec2::splat(BOARD_MARGIN);
        let span = self.cell_size * BOARD_SIZE as f32;

        for i in 1..BOARD_SIZE {
            let offset = i as f32 * self.cell_size;
            painter.line_segment([origin + Vec2::new(offset, 0.0), origin + Vec2::new(offset, span)], stroke);
            painter.line_segment([origin + Vec2::new(0.0, offset), origin + Vec2::new(span, offset)], stroke);
        }
    }

    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for (idx, cell) in board.cells().into_iter().enumerate() {
            if let Cell::Mark(player) = cell {
                self.draw_mark(painter, idx, player, player_color(player));
            }
        }
    }

    fn draw_mark(&self, painter: &Painter, idx: usize, player: Player, color: egui::Color32) {
        let center = self.board_to_screen(idx);
        let radius = self.cell_size * MARK_RATIO;
        let stroke = Stroke::new(MARK_WIDTH, color);

        match player {
            Player::X => {
                let d = Vec2::splat(radius);
                let e = Vec2::new(radius, -radius);
                painter.line_segment([center - d, center + d], stroke);
                painter.line_segment([center - e, center + e], stroke);
            }
            Player::O => {
                painter.circle_stroke(center, radius, stroke);
            }
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, idx: usize) {
        let center = self.board_to_screen(idx);
        let corner = center + Vec2::splat(self.cell_size * 0.38);
        painter.circle_filled(corner, 5.0, LAST_MOVE_MARKER);
    }

    fn draw_winning_line(&self, painter: &Painter, line: &[usize; 3]) {
        let stroke = Stroke::new(WIN_LINE_WIDTH, WIN_HIGHLIGHT);
        painter.line_segment([self.board_to_screen(line[0]), self.board_to_screen(line[2])], stroke);
    }

    /// Faded mark under the pointer
    fn draw_hover_preview(&self, painter: &Painter, idx: usize, turn: Player) {
        let rect = Rect::from_center_size(self.board_to_screen(idx), Vec2::splat(self.cell_size - 8.0));
        painter.rect_filled(rect, CornerRadius::same(4), hover_valid());
        self.draw_mark(painter, idx, turn, player_color(turn).gamma_multiply(0.35));
    }

    /// Convert screen coordinates to a cell index
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<usize> {
        let relative = screen_pos - self.board_rect.min - Vec2::splat(BOARD_MARGIN);
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8).to_index())
        } else {
            None
        }
    }

    /// Center of a cell in screen coordinates
    pub fn board_to_screen(&self, idx: usize) -> Pos2 {
        let pos = Pos::from_index(idx);
        let x = self.board_rect.min.x + BOARD_MARGIN + (pos.col as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + (pos.row as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}

fn player_color(player: Player) -> egui::Color32 {
    match player {
        Player::X => X_COLOR,
        Player::O => O_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> BoardView {
        let mut view = BoardView::default();
        // 300px of cells plus margins: 100px per cell
        let side = 300.0 + 2.0 * BOARD_MARGIN;
        view.set_rect(Rect::from_min_size(Pos2::new(10.0, 20.0), Vec2::splat(side)));
        view
    }

    #[test]
    fn test_cell_centers_round_trip() {
        let view = view();
        for idx in 0..9 {
            assert_eq!(view.screen_to_board(view.board_to_screen(idx)), Some(idx));
        }
    }

    #[test]
    fn test_screen_to_board_corners() {
        let view = view();
        let origin = Pos2::new(10.0 + BOARD_MARGIN, 20.0 + BOARD_MARGIN);
        assert_eq!(view.screen_to_board(origin + Vec2::new(1.0, 1.0)), Some(0));
        assert_eq!(view.screen_to_board(origin + Vec2::new(299.0, 1.0)), Some(2));
        assert_eq!(view.screen_to_board(origin + Vec2::new(150.0, 150.0)), Some(4));
        assert_eq!(view.screen_to_board(origin + Vec2::new(299.0, 299.0)), Some(8));
    }

    #[test]
    fn test_screen_to_board_outside() {
        let view = view();
        assert_eq!(view.screen_to_board(Pos2::new(0.0, 0.0)), None);
        let far = Pos2::new(10.0 + BOARD_MARGIN + 301.0, 20.0 + BOARD_MARGIN + 10.0);
        assert_eq!(view.screen_to_board(far), None);
    }
}
