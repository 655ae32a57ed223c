//! Game state module - one session of the simulation
//!
//! Ties together grid, active piece, spawner and scoring. [`GameState::step`]
//! advances one frame: fall timer, at most one input action, gravity and
//! locking. [`GameState::render`] issues the frame's draw calls.

use crate::collision::{collides, merge};
use crate::grid::Grid;
use crate::piece::Piece;
use crate::scoring::line_clear_score;
use crate::spawner::Spawner;
use crate::surface::Surface;
use crate::types::{
    Color, GameConfig, InputAction, InputState, BLOCK_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Running,
    /// Terminal: a freshly spawned piece collided
    GameOver,
}

/// What happened during one [`GameState::step`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepOutcome {
    /// The input action applied this frame, if it was accepted
    pub applied: Option<InputAction>,
    /// Gravity moved the piece down one row
    pub fell: bool,
    /// The piece locked into the grid
    pub locked: bool,
    pub rows_cleared: u32,
    /// The step ended the game
    pub game_over: bool,
}

#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    grid: Grid,
    piece: Piece,
    spawner: Spawner,
    status: GameStatus,
    score: u32,
    fall_timer_ms: u32,
    lines: u32,
    pieces_locked: u32,
    frames: u64,
}

impl GameState {
    /// Fresh session: empty grid, one spawned piece, score 0
    pub fn new(config: GameConfig) -> Self {
        Self::from_parts(config, Grid::new(), Spawner::new(config.seed))
    }

    /// Session over an existing grid, taking pieces from `spawner`.
    ///
    /// If the first piece already collides the session starts in
    /// [`GameStatus::GameOver`].
    pub fn from_parts(config: GameConfig, grid: Grid, mut spawner: Spawner) -> Self {
        let piece = spawner.spawn();
        let status = if collides(&piece, &grid) {
            GameStatus::GameOver
        } else {
            GameStatus::Running
        };

        Self {
            config,
            grid,
            piece,
            spawner,
            status,
            score: 0,
            fall_timer_ms: 0,
            lines: 0,
            pieces_locked: 0,
            frames: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn fall_timer_ms(&self) -> u32 {
        self.fall_timer_ms
    }

    /// Rows cleared over the whole session
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    /// Frames stepped while running
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Move the active piece; undone (and false returned) if it then collides
    pub fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        self.piece.move_by(dx, dy);
        if collides(&self.piece, &self.grid) {
            self.piece.move_by(-dx, -dy);
            return false;
        }
        true
    }

    /// Rotate the active piece clockwise; restored to the exact prior
    /// orientation (and false returned) if it then collides. No wall kicks.
    pub fn try_rotate(&mut self) -> bool {
        self.piece.rotate();
        if collides(&self.piece, &self.grid) {
            self.piece.rotate_back();
            return false;
        }
        true
    }

    /// Apply the highest-priority held action (left, right, soft drop,
    /// rotate). Holding several yields only the first. Returns the action if
    /// it took effect.
    pub fn apply_input(&mut self, input: &InputState) -> Option<InputAction> {
        let action = input.priority_action()?;
        let accepted = match action {
            InputAction::MoveLeft => self.try_move(-1, 0),
            InputAction::MoveRight => self.try_move(1, 0),
            InputAction::SoftDrop => self.try_move(0, 1),
            InputAction::Rotate => self.try_rotate(),
            InputAction::Quit => false,
        };
        accepted.then_some(action)
    }

    /// Advance one frame by `elapsed_ms`
    pub fn step(&mut self, elapsed_ms: u32, input: &InputState) -> StepOutcome {
        let mut outcome = StepOutcome::default();
        if self.is_game_over() {
            outcome.game_over = true;
            return outcome;
        }

        self.frames = self.frames.wrapping_add(1);
        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);

        outcome.applied = self.apply_input(input);

        if self.fall_timer_ms > self.config.fall_interval_ms {
            if self.try_move(0, 1) {
                outcome.fell = true;
            } else {
                outcome.rows_cleared = self.lock_piece();
                outcome.locked = true;
                outcome.game_over = self.is_game_over();
            }
            self.fall_timer_ms = 0;
        }

        outcome
    }

    /// Merge the active piece, clear rows, score, and spawn the next piece.
    /// Returns the number of rows cleared.
    fn lock_piece(&mut self) -> u32 {
        merge(&self.piece, &mut self.grid);
        self.pieces_locked = self.pieces_locked.wrapping_add(1);

        let rows = self.grid.clear_full_rows().len();
        self.score = self.score.saturating_add(line_clear_score(rows));
        self.lines = self.lines.saturating_add(rows as u32);

        self.piece = self.spawner.spawn();
        if collides(&self.piece, &self.grid) {
            self.status = GameStatus::GameOver;
        }

        rows as u32
    }

    /// Clear the surface, then draw every filled grid cell, then the active
    /// piece (omitted once the game is over).
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear_surface(SCREEN_WIDTH, SCREEN_HEIGHT);

        for (x, y, color) in self.grid.occupied() {
            draw_block(surface, color, x, y);
        }

        if self.is_game_over() {
            return;
        }
        for (x, y) in self.piece.cells() {
            draw_block(surface, self.piece.color, x, y);
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

fn draw_block<S: Surface + ?Sized>(surface: &mut S, color: Color, x: i32, y: i32) {
    // Above-grid cells have no pixel position
    let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
        return;
    };
    let (px, py) = (x * BLOCK_SIZE, y * BLOCK_SIZE);
    surface.draw_rect(color, px, py, BLOCK_SIZE, BLOCK_SIZE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::ShapeKind;
    use crate::surface::{DrawCommand, DrawList};
    use crate::types::{CYAN, RED, YELLOW};

    fn config() -> GameConfig {
        GameConfig::default().with_seed(12345)
    }

    fn game_with(grid: Grid, pieces: &[ShapeKind]) -> GameState {
        let mut spawner = Spawner::seeded(1);
        for kind in pieces {
            spawner.push_next(*kind, CYAN);
        }
        GameState::from_parts(config(), grid, spawner)
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(config());
        assert_eq!(state.status(), GameStatus::Running);
        assert_eq!(state.score(), 0);
        assert_eq!(state.fall_timer_ms(), 0);
        assert_eq!(state.piece().y, 0);
        assert_eq!(state.grid(), &Grid::new());
    }

    #[test]
    fn test_fall_timer_accumulates_until_interval_exceeded() {
        let mut state = game_with(Grid::new(), &[ShapeKind::O]);
        let idle = InputState::empty();

        let out = state.step(250, &idle);
        assert!(!out.fell);
        assert_eq!(state.fall_timer_ms(), 250);

        // Exactly at the interval is not enough
        let out = state.step(250, &idle);
        assert!(!out.fell);
        assert_eq!(state.fall_timer_ms(), 500);

        let out = state.step(1, &idle);
        assert!(out.fell);
        assert_eq!(state.piece().y, 1);
        assert_eq!(state.fall_timer_ms(), 0);
    }

    #[test]
    fn test_only_highest_priority_input_applies() {
        let mut state = game_with(Grid::new(), &[ShapeKind::T]);
        let x0 = state.piece().x;
        let input = InputState::empty()
            .with(InputAction::MoveRight)
            .with(InputAction::MoveLeft)
            .with(InputAction::Rotate);

        let out = state.step(0, &input);
        assert_eq!(out.applied, Some(InputAction::MoveLeft));
        assert_eq!(state.piece().x, x0 - 1);
        assert_eq!(state.piece().shape, ShapeKind::T.shape());
    }

    #[test]
    fn test_rejected_rotation_restores_shape() {
        let mut state = game_with(Grid::new(), &[ShapeKind::T]);

        let before = *state.piece();
        assert!(state.try_rotate());
        assert_ne!(state.piece().shape, before.shape);

        // The next turn (flat side down) needs (x+2, 1)
        state.grid.set(before.x + 2, 1, Some(RED));
        let rotated = *state.piece();
        assert!(!state.try_rotate());
        assert_eq!(*state.piece(), rotated);
    }

    #[test]
    fn test_lock_scores_and_spawns() {
        let mut grid = Grid::new();
        grid.fill_row(19, RED);
        // Leave a 2-wide gap under the O piece spawn (x=4..5)
        grid.set(4, 19, None);
        grid.set(5, 19, None);
        let mut state = game_with(grid, &[ShapeKind::O, ShapeKind::T]);

        let idle = InputState::empty();
        let mut locked = None;
        for _ in 0..30 {
            let out = state.step(501, &idle);
            if out.locked {
                locked = Some(out);
                break;
            }
        }

        let out = locked.expect("piece should lock");
        assert_eq!(out.rows_cleared, 1);
        assert!(!out.game_over);
        assert_eq!(state.score(), 100);
        assert_eq!(state.lines(), 1);
        assert_eq!(state.pieces_locked(), 1);
        assert_eq!(state.piece().shape, ShapeKind::T.shape());
        // Upper half of the O survived and moved down into row 19
        assert_eq!(state.grid().get(4, 19), Some(Some(CYAN)));
        assert!(state.grid().is_row_empty(18));
    }

    #[test]
    fn test_step_after_game_over_is_noop() {
        let mut grid = Grid::new();
        grid.fill_row(0, YELLOW);
        let mut state = game_with(grid, &[ShapeKind::I]);
        assert!(state.is_game_over());

        let before = state.grid().clone();
        let out = state.step(10_000, &InputState::empty().with(InputAction::SoftDrop));
        assert!(out.game_over);
        assert!(!out.locked);
        assert_eq!(state.grid(), &before);
        assert_eq!(state.frames(), 0);
    }

    #[test]
    fn test_render_order() {
        let mut grid = Grid::new();
        grid.set(0, 19, Some(RED));
        let state = game_with(grid, &[ShapeKind::O]);

        let mut list = DrawList::new();
        state.render(&mut list);

        let cmds = list.commands();
        assert_eq!(
            cmds[0],
            DrawCommand::Clear {
                width: 300,
                height: 600
            }
        );
        assert_eq!(
            cmds[1],
            DrawCommand::Rect {
                color: RED,
                x: 0,
                y: 570,
                width: 30,
                height: 30
            }
        );
        let piece_rects: Vec<_> = list
            .rects()
            .skip(1)
            .map(|(c, x, y, _, _)| (c, x, y))
            .collect();
        assert_eq!(
            piece_rects,
            vec![(CYAN, 120, 0), (CYAN, 150, 0), (CYAN, 120, 30), (CYAN, 150, 30)]
        );
    }
}
