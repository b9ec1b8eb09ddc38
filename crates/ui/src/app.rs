use egui::{Color32, Rect, Sense, Vec2};
use engine::{color_name, is_empty, piece_color, piece_type, Game, Square, BOARD_SIZE};
use engine::{BISHOP, BLACK, KING, KNIGHT, PAWN, QUEEN, ROOK, WHITE};

pub struct ChessApp {
    game: Game,
    move_input: String,
    rejection_notice: Option<String>,
}

impl ChessApp {
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            move_input: String::new(),
            rejection_notice: None,
        }
    }
}

impl Default for ChessApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for ChessApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Chess");
            ui.label(format!("{} to move", color_name(self.game.current_turn())));

            ui.horizontal(|ui| {
                let response = ui.text_edit_singleline(&mut self.move_input);
                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                if ui.button("Submit").clicked() || submitted {
                    self.handle_move_submission();
                    response.request_focus();
                }
            });

            if let Some(notice) = &self.rejection_notice {
                ui.colored_label(Color32::RED, notice);
            }

            ui.add_space(8.0);

            let available_size = ui.available_size();
            let board_size = available_size.x.min(available_size.y) - 20.0;
            let square_size = board_size / BOARD_SIZE as f32;

            let board_rect = Rect::from_min_size(ui.cursor().min, Vec2::splat(board_size));
            ui.allocate_rect(board_rect, Sense::hover());

            // The board is drawn from engine state only after the engine
            // has accepted a move; a rejection changes nothing here
            self.draw_board(ui, board_rect, square_size);
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        let _ = self.game.logger().save_to_file("game_log.txt");
    }
}

impl ChessApp {
    fn handle_move_submission(&mut self) {
        let text = self.move_input.trim().to_string();
        if !text.is_empty() {
            match self.game.submit_move(&text) {
                Ok(_) => self.rejection_notice = None,
                Err(_) => {
                    self.rejection_notice = Some("Invalid move, try again".to_string());
                }
            }
        }
        // The input field is cleared after every submission attempt
        self.move_input.clear();
    }

    fn draw_board(&self, ui: &mut egui::Ui, board_rect: Rect, square_size: f32) {
        let painter = ui.painter();

        for rank in 0..BOARD_SIZE {
            for file in 0..BOARD_SIZE {
                let square = Square::new(file, rank);
                let is_light = (file + rank) % 2 == 0;

                let square_rect = Rect::from_min_size(
                    board_rect.min
                        + Vec2::new(
                            file as f32 * square_size,
                            (BOARD_SIZE - 1 - rank) as f32 * square_size,
                        ),
                    Vec2::splat(square_size),
                );

                let square_color = if is_light {
                    Color32::from_rgb(240, 217, 181)
                } else {
                    Color32::from_rgb(181, 136, 99)
                };

                painter.rect_filled(square_rect, 0.0, square_color);

                let piece = self.game.board().get_piece(square);
                if !is_empty(piece) {
                    self.draw_piece(painter, piece, square_rect);
                }
            }
        }

        painter.rect_stroke(board_rect, 0.0, egui::Stroke::new(2.0, Color32::BLACK));
    }

    fn draw_piece(&self, painter: &egui::Painter, piece: u8, square_rect: Rect) {
        let center = square_rect.center();
        let size = square_rect.size() * 0.8;

        let piece_char = match (piece_type(piece), piece_color(piece)) {
            (KING, WHITE) => "♔",
            (QUEEN, WHITE) => "♕",
            (ROOK, WHITE) => "♖",
            (BISHOP, WHITE) => "♗",
            (KNIGHT, WHITE) => "♘",
            (PAWN, WHITE) => "♙",
            (KING, BLACK) => "♚",
            (QUEEN, BLACK) => "♛",
            (ROOK, BLACK) => "♜",
            (BISHOP, BLACK) => "♝",
            (KNIGHT, BLACK) => "♞",
            (PAWN, BLACK) => "♟",
            _ => "?", // Should never happen
        };

        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            piece_char,
            egui::FontId::proportional(size.x),
            Color32::BLACK,
        );
    }
}
