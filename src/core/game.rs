//! Game module - complete game state and its controller
//!
//! Owns the grid, the active piece, the score, the RNG and the phase
//! machine. Movement and rotation are transactional: the candidate is
//! applied, tested against the grid, and rolled back on collision. Only
//! the gravity step may lock a piece; a manual down move that collides
//! is an ordinary rejected move.

use crate::core::config::{ConfigError, GameConfig};
use crate::core::grid::Grid;
use crate::core::piece::Piece;
use crate::core::rng::SimpleRng;
use crate::core::shape::{Shape, CATALOG};
use crate::types::{GameAction, Phase, DROP_INTERVAL_MS, LINE_SCORE};

#[derive(Debug, Clone)]
pub struct Game {
    grid: Grid,
    piece: Piece,
    score: u32,
    phase: Phase,
    rng: SimpleRng,
    drop_timer_ms: u32,
}

impl Game {
    /// Create a game with the given configuration and RNG seed. The
    /// first piece is spawned immediately.
    pub fn new(config: GameConfig, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::new(config.width, config.height);
        let mut rng = SimpleRng::new(seed);
        let piece = spawn_piece(&grid, &mut rng);
        Ok(Self {
            grid,
            piece,
            score: 0,
            phase: Phase::Running,
            rng,
            drop_timer_ms: 0,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Advance game time. Once the accumulated time passes the drop
    /// interval the accumulator resets and one gravity step runs, so a
    /// long frame still drops the piece a single row.
    /// Returns whether a gravity step happened.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != Phase::Running {
            return false;
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms <= DROP_INTERVAL_MS {
            return false;
        }

        self.drop_timer_ms = 0;
        self.gravity_step();
        true
    }

    /// Try to move the piece by (dx, dy). A colliding move is rolled
    /// back and reported as false; it never locks the piece.
    pub fn move_by(&mut self, dx: i32, dy: i32) -> bool {
        if self.phase != Phase::Running {
            return false;
        }

        self.piece.x += dx;
        self.piece.y += dy;
        if self.piece.collides(&self.grid) {
            self.piece.x -= dx;
            self.piece.y -= dy;
            return false;
        }
        true
    }

    /// Try to rotate the piece a quarter turn clockwise. A colliding
    /// rotation restores the previous shape and reports false. The grid
    /// is never touched.
    pub fn rotate(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }

        let rotated = self.piece.shape.rotated();
        let previous = std::mem::replace(&mut self.piece.shape, rotated);
        if self.piece.collides(&self.grid) {
            self.piece.shape = previous;
            return false;
        }
        true
    }

    /// Apply a movement intent
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_by(-1, 0),
            GameAction::MoveRight => self.move_by(1, 0),
            GameAction::MoveDown => self.move_by(0, 1),
            GameAction::Rotate => self.rotate(),
        }
    }

    /// Wipe the field and resume play after a game over. The score is
    /// deliberately kept; only a new game resets it.
    pub fn acknowledge_game_over(&mut self) {
        if self.phase != Phase::GameOver {
            return;
        }
        self.grid.clear();
        self.drop_timer_ms = 0;
        self.phase = Phase::Running;
    }

    /// One gravity step: move the piece down, or lock it where it rests.
    fn gravity_step(&mut self) {
        self.piece.y += 1;
        if self.piece.collides(&self.grid) {
            self.piece.y -= 1;
            self.lock_piece();
        }
    }

    /// Write the resting piece into the grid, spawn the next one, then
    /// clear completed rows. A blocked spawn ends the round before the
    /// clear pass runs, so rows completed by the final piece never
    /// score; the field is left intact for the renderer until the game
    /// over is acknowledged.
    fn lock_piece(&mut self) {
        let (px, py) = (self.piece.x, self.piece.y);
        for (sx, sy) in self.piece.shape.occupied_cells() {
            self.grid.set(px + sx as i32, py + sy as i32, true);
        }

        self.piece = spawn_piece(&self.grid, &mut self.rng);
        if self.piece.collides(&self.grid) {
            self.phase = Phase::GameOver;
            return;
        }

        self.clear_lines();
    }

    /// Remove every full row and award points. Indices are collected
    /// top to bottom before any removal; removing a row only shifts the
    /// rows above it, so the later indices still point at their rows.
    fn clear_lines(&mut self) {
        for y in self.grid.full_rows() {
            self.grid.remove_row(y);
            self.score += LINE_SCORE;
        }
    }
}

/// Draw a template uniformly from the catalog and place it at the top,
/// in a uniform column among those where it fits horizontally.
fn spawn_piece(grid: &Grid, rng: &mut SimpleRng) -> Piece {
    let shape = Shape::from_catalog(rng.next_range(CATALOG.len() as u32) as usize);
    let max_x = grid.width() - shape.width() as usize;
    let x = rng.next_range(max_x as u32 + 1) as i32;
    Piece::new(shape, x, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> Game {
        Game::new(GameConfig::default(), 1).unwrap()
    }

    fn place(game: &mut Game, rows: &[&[u8]], x: i32, y: i32) {
        game.piece = Piece::new(Shape::from_rows(rows), x, y);
    }

    fn fill_row_except(game: &mut Game, y: i32, gap: &[i32]) {
        for x in 0..game.grid.width() as i32 {
            if !gap.contains(&x) {
                game.grid.set(x, y, true);
            }
        }
    }

    #[test]
    fn new_game_starts_running_with_zero_score() {
        let g = game();
        assert_eq!(g.score(), 0);
        assert_eq!(g.phase(), Phase::Running);
        assert_eq!(g.piece().y, 0);
        assert!(!g.piece().collides(g.grid()));
    }

    #[test]
    fn spawn_column_always_fits_the_shape() {
        let grid = Grid::new(10, 20);
        for seed in 0..50 {
            let mut rng = SimpleRng::new(seed);
            for _ in 0..100 {
                let piece = spawn_piece(&grid, &mut rng);
                let max_x = 10 - piece.shape.width() as i32;
                assert!(piece.x >= 0 && piece.x <= max_x);
                assert_eq!(piece.y, 0);
                assert!(!piece.collides(&grid));
            }
        }
    }

    #[test]
    fn board_wide_template_spawns_at_left_edge() {
        let grid = Grid::new(4, 20);
        let mut rng = SimpleRng::new(1);
        let mut saw_full_width = false;
        for _ in 0..100 {
            let piece = spawn_piece(&grid, &mut rng);
            if piece.shape.width() == 4 {
                saw_full_width = true;
                assert_eq!(piece.x, 0);
            }
        }
        assert!(saw_full_width);
    }

    #[test]
    fn move_into_wall_rolls_back() {
        let mut g = game();
        place(&mut g, &[&[1, 1], &[1, 1]], 0, 5);

        assert!(!g.move_by(-1, 0));
        assert_eq!((g.piece.x, g.piece.y), (0, 5));

        place(&mut g, &[&[1, 1], &[1, 1]], 8, 5);
        assert!(!g.move_by(1, 0));
        assert_eq!((g.piece.x, g.piece.y), (8, 5));

        assert!(g.move_by(-1, 0));
        assert_eq!(g.piece.x, 7);
    }

    #[test]
    fn manual_down_at_rest_never_locks() {
        let mut g = game();
        place(&mut g, &[&[1, 1], &[1, 1]], 4, 18);

        assert!(!g.move_by(0, 1));
        assert_eq!(g.grid.occupied_count(), 0);
        assert_eq!(g.phase(), Phase::Running);
        assert_eq!((g.piece.x, g.piece.y), (4, 18));
    }

    #[test]
    fn gravity_locks_resting_piece_in_place() {
        let mut g = game();
        place(&mut g, &[&[1, 1], &[1, 1]], 4, 18);

        assert!(g.tick(DROP_INTERVAL_MS + 1));
        assert_eq!(g.grid.get(4, 18), Some(true));
        assert_eq!(g.grid.get(5, 18), Some(true));
        assert_eq!(g.grid.get(4, 19), Some(true));
        assert_eq!(g.grid.get(5, 19), Some(true));
        assert_eq!(g.grid.occupied_count(), 4);
        // A fresh piece is active at the top.
        assert_eq!(g.piece.y, 0);
        assert_eq!(g.phase(), Phase::Running);
    }

    #[test]
    fn gravity_locks_on_settled_material() {
        let mut g = game();
        g.grid.set(4, 19, true);
        place(&mut g, &[&[1, 1], &[1, 1]], 4, 17);

        g.tick(DROP_INTERVAL_MS + 1);
        assert_eq!(g.grid.get(4, 17), Some(true));
        assert_eq!(g.grid.get(4, 18), Some(true));
        assert_eq!(g.grid.occupied_count(), 5);
    }

    #[test]
    fn rotation_rolls_back_when_blocked() {
        let mut g = game();
        // Vertical bar against the right wall has no room to swing.
        place(&mut g, &[&[1], &[1], &[1], &[1]], 9, 5);

        assert!(!g.rotate());
        assert_eq!(g.piece.shape.width(), 1);
        assert_eq!(g.piece.shape.height(), 4);
        assert_eq!((g.piece.x, g.piece.y), (9, 5));
    }

    #[test]
    fn rotation_applies_when_clear() {
        let mut g = game();
        place(&mut g, &[&[0, 1, 0], &[1, 1, 1]], 4, 5);

        assert!(g.rotate());
        assert_eq!(g.piece.shape.width(), 2);
        assert_eq!(g.piece.shape.height(), 3);
    }

    #[test]
    fn single_full_row_clears_and_scores() {
        let mut g = game();
        fill_row_except(&mut g, 19, &[]);
        g.grid.set(0, 18, true);

        g.clear_lines();
        assert_eq!(g.score(), 10);
        // The marker above dropped into the freed row.
        assert_eq!(g.grid.get(0, 19), Some(true));
        assert_eq!(g.grid.get(0, 18), Some(false));
        assert_eq!(g.grid.occupied_count(), 1);
    }

    #[test]
    fn separated_full_rows_clear_in_one_pass() {
        let mut g = game();
        fill_row_except(&mut g, 17, &[]);
        fill_row_except(&mut g, 19, &[]);
        g.grid.set(3, 16, true);

        g.clear_lines();
        assert_eq!(g.score(), 20);
        // The marker dropped past both cleared rows.
        assert_eq!(g.grid.get(3, 18), Some(true));
        assert_eq!(g.grid.occupied_count(), 1);
    }

    #[test]
    fn blocked_spawn_ends_the_round_without_scoring() {
        let mut g = game();
        // Any template spawned at the top must overlap rows 0 and 1.
        fill_row_except(&mut g, 0, &[]);
        fill_row_except(&mut g, 1, &[]);
        // The landing bar completes the bottom row.
        fill_row_except(&mut g, 19, &[3, 4, 5, 6]);
        place(&mut g, &[&[1, 1, 1, 1]], 3, 19);

        g.tick(DROP_INTERVAL_MS + 1);
        assert_eq!(g.phase(), Phase::GameOver);
        // The completed row stays on the field and never scores.
        assert!(g.grid.is_row_full(19));
        assert_eq!(g.score(), 0);
    }

    #[test]
    fn acknowledge_wipes_grid_and_keeps_score() {
        let mut g = game();
        fill_row_except(&mut g, 0, &[]);
        fill_row_except(&mut g, 1, &[]);
        place(&mut g, &[&[1, 1], &[1, 1]], 4, 18);
        g.score = 30;
        g.drop_timer_ms = 400;

        g.tick(DROP_INTERVAL_MS + 1);
        assert_eq!(g.phase(), Phase::GameOver);

        g.acknowledge_game_over();
        assert_eq!(g.phase(), Phase::Running);
        assert_eq!(g.grid.occupied_count(), 0);
        assert_eq!(g.score(), 30);
        assert_eq!(g.drop_timer_ms, 0);
    }

    #[test]
    fn actions_are_ignored_after_game_over() {
        let mut g = game();
        g.phase = Phase::GameOver;
        let before = g.piece.clone();

        assert!(!g.move_by(-1, 0));
        assert!(!g.move_by(0, 1));
        assert!(!g.rotate());
        assert!(!g.tick(DROP_INTERVAL_MS * 4));
        assert_eq!(g.piece, before);
    }

    #[test]
    fn acknowledge_is_a_no_op_while_running() {
        let mut g = game();
        g.grid.set(0, 19, true);
        g.acknowledge_game_over();
        assert_eq!(g.grid.occupied_count(), 1);
        assert_eq!(g.phase(), Phase::Running);
    }

    #[test]
    fn tick_accumulates_until_threshold() {
        let mut g = game();
        let start_y = g.piece.y;

        assert!(!g.tick(DROP_INTERVAL_MS));
        assert_eq!(g.piece.y, start_y);
        assert!(g.tick(1));
        assert_eq!(g.piece.y, start_y + 1);
    }

    #[test]
    fn long_frame_drops_a_single_row() {
        let mut g = game();
        let start_y = g.piece.y;

        assert!(g.tick(DROP_INTERVAL_MS * 10));
        assert_eq!(g.piece.y, start_y + 1);
        // The accumulator was reset, not carried over.
        assert!(!g.tick(DROP_INTERVAL_MS));
    }

    #[test]
    fn apply_action_routes_intents() {
        let mut g = game();
        place(&mut g, &[&[0, 1, 0], &[1, 1, 1]], 4, 5);

        assert!(g.apply_action(GameAction::MoveLeft));
        assert_eq!(g.piece.x, 3);
        assert!(g.apply_action(GameAction::MoveRight));
        assert_eq!(g.piece.x, 4);
        assert!(g.apply_action(GameAction::MoveDown));
        assert_eq!(g.piece.y, 6);
        assert!(g.apply_action(GameAction::Rotate));
        assert_eq!(g.piece.shape.width(), 2);
    }
}
