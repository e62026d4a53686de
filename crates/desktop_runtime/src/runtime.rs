//! Owned desktop runtime: state, live gesture, and the host that executes effects.

use crate::chrome::{render_desktop, DesktopView};
use crate::config::{ConfigError, DesktopConfig};
use crate::drag::InteractionState;
use crate::model::{AppId, DesktopSnapshot, DesktopState};
use crate::reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect, SoundCue};

/// Host boundary for reducer-emitted side effects. All calls are fire-and-forget.
pub trait DesktopHost {
    fn play_sound(&mut self, cue: SoundCue);

    fn focus_window_input(&mut self, _window_id: AppId) {}

    fn alert(&mut self, message: &str);
}

/// Host that drops every effect.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHost;

impl DesktopHost for NoopHost {
    fn play_sound(&mut self, _cue: SoundCue) {}

    fn alert(&mut self, _message: &str) {}
}

#[derive(Debug)]
pub struct DesktopRuntime<H: DesktopHost> {
    state: DesktopState,
    interaction: InteractionState,
    host: H,
}

impl<H: DesktopHost> DesktopRuntime<H> {
    pub fn new(config: &DesktopConfig, host: H) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_state(config.build_state(), host))
    }

    pub fn from_state(state: DesktopState, host: H) -> Self {
        Self {
            state,
            interaction: InteractionState::default(),
            host,
        }
    }

    pub fn state(&self) -> &DesktopState {
        &self.state
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn snapshot(&self) -> DesktopSnapshot {
        self.state.snapshot()
    }

    pub fn view(&self) -> DesktopView {
        render_desktop(&self.state)
    }

    /// Applies one intent and runs its effects on the host, in order.
    pub fn dispatch(&mut self, action: DesktopAction) -> Result<(), ReducerError> {
        tracing::trace!(?action, "dispatch");
        let effects = reduce_desktop(&mut self.state, &mut self.interaction, action)?;
        for effect in effects {
            self.run_effect(effect);
        }
        Ok(())
    }

    fn run_effect(&mut self, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::PlaySound(cue) => {
                tracing::trace!(cue = cue.name(), "play sound");
                self.host.play_sound(cue);
            }
            RuntimeEffect::FocusWindowInput(window_id) => self.host.focus_window_input(window_id),
            RuntimeEffect::Alert(message) => self.host.alert(&message),
        }
    }
}
