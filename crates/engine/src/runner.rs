//! The cooperative frame loop.

use anyhow::Result;
use tracing::{debug, info, trace};

use crate::clock::Clock;
use crate::core::{DrawList, GameState, Surface};
use crate::types::InputState;

/// Source of per-frame input snapshots.
pub trait InputSource {
    /// Current set of held inputs. Called once per frame.
    fn poll(&mut self) -> Result<InputState>;
}

impl<F> InputSource for F
where
    F: FnMut() -> InputState,
{
    fn poll(&mut self) -> Result<InputState> {
        Ok(self())
    }
}

/// A [`Surface`] that can show a finished frame.
pub trait Canvas: Surface {
    /// Called after the frame's draw calls. `game` is available for overlays
    /// such as the score line.
    fn present(&mut self, game: &GameState) -> Result<()>;
}

impl Canvas for DrawList {
    fn present(&mut self, _game: &GameState) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// A spawned piece collided
    GameOver,
    /// The input source asked to stop
    Quit,
}

/// Final report of a finished loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub reason: ExitReason,
    pub score: u32,
    pub lines: u32,
    pub pieces_locked: u32,
    pub frames: u64,
}

impl GameOutcome {
    fn from_state(reason: ExitReason, game: &GameState) -> Self {
        Self {
            reason,
            score: game.score(),
            lines: game.lines(),
            pieces_locked: game.pieces_locked(),
            frames: game.frames(),
        }
    }
}

/// Run `game` until it ends or the input source requests quit.
///
/// Per frame: await the clock, poll input, step, render, present, yield.
/// Once the game is over one last frame (grid only, no active piece) is
/// rendered and presented before returning. Collaborator errors abort the
/// loop and are returned as is.
pub async fn run_game<C, I, S>(
    game: &mut GameState,
    clock: &mut C,
    input: &mut I,
    canvas: &mut S,
) -> Result<GameOutcome>
where
    C: Clock + ?Sized,
    I: InputSource + ?Sized,
    S: Canvas + ?Sized,
{
    let target_fps = game.config().target_fps;
    info!(
        target_fps,
        fall_interval_ms = game.config().fall_interval_ms,
        "game started"
    );

    if game.is_game_over() {
        info!(score = game.score(), "Game Over!");
        return finish(game, canvas);
    }

    loop {
        let elapsed_ms = clock.tick(target_fps).await;
        let snapshot = input.poll()?;

        if snapshot.quit_requested() {
            info!(score = game.score(), "quit requested");
            return Ok(GameOutcome::from_state(ExitReason::Quit, game));
        }

        let outcome = game.step(elapsed_ms, &snapshot);
        trace!(elapsed_ms, ?outcome, "frame");

        if outcome.locked {
            debug!(
                rows_cleared = outcome.rows_cleared,
                score = game.score(),
                "piece locked"
            );
        }
        if outcome.game_over {
            info!(score = game.score(), lines = game.lines(), "Game Over!");
            return finish(game, canvas);
        }

        game.render(canvas);
        canvas.present(game)?;

        tokio::task::yield_now().await;
    }
}

/// Present the final game-over frame.
fn finish<S: Canvas + ?Sized>(game: &GameState, canvas: &mut S) -> Result<GameOutcome> {
    game.render(canvas);
    canvas.present(game)?;
    Ok(GameOutcome::from_state(ExitReason::GameOver, game))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SteppedClock;
    use crate::core::{DrawCommand, Grid, ShapeKind, Spawner};
    use crate::types::{GameConfig, InputAction, RED};

    fn block_on<F: std::future::Future>(f: F) -> F::Output {
        tokio_test::block_on(f)
    }

    #[test]
    fn quit_stops_before_stepping() {
        let mut game = GameState::new(GameConfig::default().with_seed(1));
        let mut clock = SteppedClock::new(16);
        let mut input = || InputState::empty().with(InputAction::Quit);
        let mut canvas = DrawList::new();

        let run = run_game(&mut game, &mut clock, &mut input, &mut canvas);
        let outcome = block_on(run).unwrap();
        assert_eq!(outcome.reason, ExitReason::Quit);
        assert_eq!(outcome.frames, 0);
        assert!(canvas.commands().is_empty());
    }

    #[test]
    fn renders_one_frame_per_tick() {
        let mut game = GameState::new(GameConfig::default().with_seed(1));
        let mut clock = SteppedClock::new(16);
        let mut polls = 0;
        let mut input = || {
            polls += 1;
            if polls > 3 {
                InputState::empty().with(InputAction::Quit)
            } else {
                InputState::empty()
            }
        };
        let mut canvas = DrawList::new();

        let run = run_game(&mut game, &mut clock, &mut input, &mut canvas);
        let outcome = block_on(run).unwrap();
        assert_eq!(outcome.frames, 3);
        let clears = canvas
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Clear { .. }))
            .count();
        assert_eq!(clears, 3);
        assert_eq!(clock.ticks(), 4);
    }

    #[test]
    fn runs_until_game_over() {
        // Column 0 stays open so no row ever clears
        let mut grid = Grid::new();
        for y in 2..20 {
            grid.fill_row(y, RED);
            grid.set(0, y as i32, None);
        }
        let mut spawner = Spawner::seeded(3);
        spawner.push_next(ShapeKind::O, RED);
        let mut game = GameState::from_parts(GameConfig::default(), grid, spawner);

        let mut clock = SteppedClock::new(600);
        let mut input = InputState::empty;
        let mut canvas = DrawList::new();

        let run = run_game(&mut game, &mut clock, &mut input, &mut canvas);
        let outcome = block_on(run).unwrap();
        assert_eq!(outcome.reason, ExitReason::GameOver);
        assert_eq!(outcome.score, 0);
        assert_eq!(outcome.pieces_locked, 1);
        assert!(game.is_game_over());

        // Final frame shows the grid with the locked O, without the blocked spawn
        let last = canvas.last_frame();
        assert!(matches!(last[0], DrawCommand::Clear { .. }));
        assert_eq!(last.len() - 1, game.grid().occupied().count());
    }

    #[test]
    fn input_errors_propagate() {
        struct Broken;
        impl InputSource for Broken {
            fn poll(&mut self) -> Result<InputState> {
                anyhow::bail!("input device gone")
            }
        }

        let mut game = GameState::new(GameConfig::default().with_seed(1));
        let err = block_on(run_game(
            &mut game,
            &mut SteppedClock::new(16),
            &mut Broken,
            &mut DrawList::new(),
        ))
        .unwrap_err();
        assert!(err.to_string().contains("input device gone"));
    }
}
