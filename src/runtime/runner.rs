use crate::form::SubmitOutcome;
use crate::runtime::effect::Effect;
use crate::runtime::intent::Intent;
use crate::runtime::key_bindings::KeyBindings;
use crate::runtime::reducer::Reducer;
use crate::state::app_state::AppState;
use crate::terminal::{Terminal, TerminalEvent};
use crate::ui::renderer::Renderer;
use std::io;
use std::time::Duration;

const POLL_TIMEOUT: Duration = Duration::from_millis(120);

pub struct Runtime {
    state: AppState,
    terminal: Terminal,
    key_bindings: KeyBindings,
    renderer: Renderer,
}

impl Runtime {
    pub fn new(state: AppState, terminal: Terminal) -> Self {
        Self {
            state,
            terminal,
            key_bindings: KeyBindings::new(),
            renderer: Renderer::default(),
        }
    }

    pub fn into_state(self) -> AppState {
        self.state
    }

    /// Run until the user exits. The terminal is restored even when the loop
    /// fails.
    pub fn run(&mut self) -> io::Result<()> {
        self.terminal.enter()?;
        tracing::debug!(inline = self.terminal.is_inline(), "terminal entered");

        let run_result = self.event_loop();

        let exit_result = self.terminal.exit();
        tracing::debug!("terminal restored");
        run_result.and(exit_result)
    }

    fn event_loop(&mut self) -> io::Result<()> {
        self.render()?;

        while !self.state.should_exit() {
            let event = self.terminal.poll_event(POLL_TIMEOUT)?;
            let intent = match event {
                TerminalEvent::Key(key) => self.key_bindings.resolve(key),
                TerminalEvent::Resize(size) => {
                    tracing::trace!(width = size.width, height = size.height, "resize");
                    self.terminal.set_size(size);
                    self.render()?;
                    continue;
                }
                TerminalEvent::Tick => Intent::Tick,
            };

            let effects = Reducer::reduce(&mut self.state, intent);
            self.apply_effects(effects)?;
        }

        Ok(())
    }

    fn apply_effects(&mut self, effects: Vec<Effect>) -> io::Result<()> {
        let mut render_requested = false;
        for effect in effects {
            match effect {
                Effect::RequestRender => render_requested = true,
                Effect::Submitted(SubmitOutcome::Accepted) => {
                    let has_message = self
                        .state
                        .form()
                        .submitted()
                        .is_some_and(|record| record.message.is_some());
                    tracing::info!(has_message, "contact form submitted");
                    render_requested = true;
                }
                Effect::Submitted(SubmitOutcome::Rejected { .. }) => render_requested = true,
            }
        }
        if render_requested {
            self.render()?;
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        let frame = self.renderer.render(&self.state);
        self.terminal.render_frame(&frame)
    }
}
