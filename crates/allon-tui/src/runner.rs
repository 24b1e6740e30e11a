//! TUI runner - terminal lifecycle and the main event loop

use allon_app::{Engine, ProjectsApi};
use allon_core::prelude::*;
use ratatui::DefaultTerminal;

use super::{event, render, terminal};

/// Run the interactive browser until the user quits
pub async fn run<A>(mut engine: Engine<A>) -> Result<()>
where
    A: ProjectsApi + Clone + Send + Sync + 'static,
{
    terminal::install_panic_hook();

    let mut term = ratatui::init();
    engine.start();

    let result = run_loop(&mut term, &mut engine);

    ratatui::restore();
    engine.shutdown();

    result
}

/// Drain background results, draw, then wait up to one tick for input
fn run_loop<A>(terminal: &mut DefaultTerminal, engine: &mut Engine<A>) -> Result<()>
where
    A: ProjectsApi + Clone + Send + Sync + 'static,
{
    while !engine.should_quit() {
        engine.drain_pending_messages();

        terminal
            .draw(|frame| render::view(frame, &engine.state))
            .context("Failed to draw frame")?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    info!("Quit requested, leaving event loop");
    Ok(())
}
