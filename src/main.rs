//! Terminal FPS runner (default binary).
//!
//! Frame loop: poll input, apply held movement, render the scene, present.
//! The core never touches the terminal; everything crossterm-facing goes
//! through `term` and `input`.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_fps::core::{render_scene, Grid, Pose, RenderConfig, World};
use tui_fps::input::{map_key, should_quit, HeldKeys};
use tui_fps::term::{FrameClock, SceneView, TerminalRenderer};
use tui_fps::types::MoveAction;

/// Player spawn in the stock map.
const SPAWN: (f32, f32, f32) = (8.0, 8.0, 0.0);

/// Input poll timeout per frame. Short enough to keep movement smooth,
/// long enough not to spin a core at 100%.
const POLL_MS: u64 = 4;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let grid = Grid::default();
    debug_assert!(grid.is_enclosed());

    let mut world = World::new(grid, Pose::new(SPAWN.0, SPAWN.1, SPAWN.2));
    let cfg = RenderConfig::default();
    let view = SceneView::default();

    let mut clock = FrameClock::new();
    let mut held = HeldKeys::new();

    loop {
        // Input. Drain everything pending so a burst of events cannot lag
        // behind the frame rate.
        while event::poll(Duration::from_millis(POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if let Some(action) = map_key(key) {
                            held.press(action, clock.now_ms());
                        }
                    }
                    KeyEventKind::Release => {
                        if let Some(action) = map_key(key) {
                            held.release(action);
                        }
                    }
                }
            }
        }

        // Movement, scaled by real elapsed time.
        let elapsed = clock.tick();
        for action in held.active(clock.now_ms()) {
            match action {
                MoveAction::TurnLeft => world.turn_left(elapsed),
                MoveAction::TurnRight => world.turn_right(elapsed),
                MoveAction::Forward => world.move_forward(elapsed),
                MoveAction::Backward => world.move_backward(elapsed),
                MoveAction::StrafeLeft => world.strafe_left(elapsed),
                MoveAction::StrafeRight => world.strafe_right(elapsed),
            }
        }

        // Render and present.
        let scene = render_scene(world.grid(), world.pose(), &cfg);
        let fb = view.render(&world, &scene, clock.fps());
        term.draw(&fb)?;
    }
}
