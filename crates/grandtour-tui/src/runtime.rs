//! TUI runtime: owns the terminal, runs the event loop, executes effects.
//!
//! This is the Elm runtime boundary. The reducer only mutates state and
//! returns effects; terminal I/O happens here.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use grandtour_core::config::Config;
use tracing::debug;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::terminal::{self, Tty};
use crate::{render, update};

/// Full-screen TUI runtime. The terminal is restored on drop.
pub struct TuiRuntime {
    terminal: Tty,
    pub state: AppState,
    tick: Duration,
    last_tick: Instant,
    should_quit: bool,
}

impl TuiRuntime {
    pub fn new(config: &Config) -> Result<Self> {
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal()?;
        Ok(Self {
            terminal,
            state: AppState::new(config),
            tick: config.tick(),
            last_tick: Instant::now(),
            should_quit: false,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        // Draw once before waiting for input.
        let mut dirty = true;

        while !self.should_quit {
            if dirty {
                self.draw()?;
            }

            let events = self.collect_events()?;
            dirty = !events.is_empty();
            for event in events {
                self.dispatch_event(event);
            }
        }
        Ok(())
    }

    /// Blocks until input arrives or the next tick is due.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        let until_tick = self.tick.saturating_sub(self.last_tick.elapsed());
        if event::poll(until_tick).context("Failed to poll terminal events")? {
            events.push(UiEvent::Terminal(
                event::read().context("Failed to read terminal event")?,
            ));
            // Drain whatever else is already queued (e.g. a burst of keys).
            while event::poll(Duration::ZERO).context("Failed to poll terminal events")? {
                events.push(UiEvent::Terminal(
                    event::read().context("Failed to read terminal event")?,
                ));
            }
        }

        if self.last_tick.elapsed() >= self.tick {
            self.last_tick = Instant::now();
            events.push(UiEvent::Tick);
        }
        Ok(events)
    }

    fn dispatch_event(&mut self, event: UiEvent) {
        let effects = update::update(&mut self.state, event);
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.should_quit = true;
            }
            UiEffect::ClearScreen => {
                if let Err(e) = self.terminal.clear() {
                    debug!(error = %e, "failed to clear terminal");
                }
            }
        }
    }

    fn draw(&mut self) -> Result<()> {
        let mut fault = None;
        self.terminal
            .draw(|frame| fault = render::render(&self.state, frame))
            .context("Failed to draw frame")?;

        // The boundary already drew the recovery screen; record the fault so
        // the next frames keep showing it.
        if let Some(fault) = fault {
            self.dispatch_event(UiEvent::ViewFault(fault));
        }
        Ok(())
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
