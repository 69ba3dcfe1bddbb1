//! Terminal word-wheel runner (default binary).
//!
//! Uses crossterm for mouse/keyboard input and the framebuffer renderer from
//! `word_wheel::term`. Drag across the picker letters with the left mouse
//! button to spell a word; release to submit.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{error, info, warn};

use word_wheel::core::{EventLog, PuzzleController, PuzzleDefinition, PuzzleNotification};
use word_wheel::input::{is_restart, map_key_event, should_quit, PointerHandler};
use word_wheel::term::{Feedback, FrameBuffer, PuzzleView, TerminalRenderer, Viewport};
use word_wheel::types::{PuzzleInput, FRAME_MS};
use word_wheel::{init_tracing, GameConfig};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_tracing(&config)?;
    info!(seed = config.seed, "starting word wheel");

    let definition = PuzzleDefinition::reference()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, definition, config.seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        error!(error = %err, "terminal loop failed");
    }
    result
}

fn run(term: &mut TerminalRenderer, definition: PuzzleDefinition, mut seed: u32) -> Result<()> {
    let mut puzzle = PuzzleController::new(definition.clone(), seed, EventLog::new());
    let view = PuzzleView::default();

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);
    let mut pointer =
        PointerHandler::new(view.picker_projection(viewport), puzzle.layout().extent());
    let mut fb = FrameBuffer::new(w, h);
    let mut feedback: Option<Feedback> = None;
    let mut dirty = true;

    let frame = Duration::from_millis(FRAME_MS as u64);

    loop {
        if dirty {
            view.render_into(&puzzle.snapshot(), feedback.as_ref(), viewport, &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        if !event::poll(frame)? {
            continue;
        }

        let input = match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if should_quit(key) {
                    info!("quit requested");
                    return Ok(());
                }
                if is_restart(key) {
                    // A fresh controller; the finished one is dropped as is.
                    seed = seed.wrapping_add(1);
                    puzzle = PuzzleController::new(definition.clone(), seed, EventLog::new());
                    pointer = PointerHandler::new(
                        view.picker_projection(viewport),
                        puzzle.layout().extent(),
                    );
                    feedback = None;
                    dirty = true;
                    info!(seed, "puzzle restarted");
                    continue;
                }
                map_key_event(key)
            }
            Event::Mouse(mouse) => pointer.handle_mouse(mouse),
            Event::FocusLost => pointer.handle_focus_lost(),
            Event::Resize(w, h) => {
                viewport = Viewport::new(w, h);
                pointer.set_projection(view.picker_projection(viewport));
                term.invalidate();
                dirty = true;
                None
            }
            _ => None,
        };
        let Some(input) = input else {
            continue;
        };

        // A new gesture clears the last message.
        if matches!(input, PuzzleInput::PointerDownAt(_)) {
            feedback = None;
        }
        if let Err(err) = puzzle.handle(input) {
            warn!(error = %err, input = input.as_str(), "input rejected");
        }

        for note in puzzle.observer_mut().drain() {
            if let PuzzleNotification::WordOutcome(outcome) = note {
                if let Some(next) = Feedback::from_outcome(&outcome) {
                    feedback = Some(next);
                }
            }
        }
        dirty = true;
    }
}
