//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use thiserror::Error;

use crate::drag::InteractionState;
use crate::focus::{self, TaskbarIntent};
use crate::model::{AppId, DesktopState, DesktopTheme, PointerPosition, ResizeEdges, Viewport};
use crate::window_manager;

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Show a window and bring it to the front.
    OpenWindow {
        /// Window to open.
        window_id: AppId,
    },
    /// Hide a window, keeping its geometry.
    CloseWindow {
        /// Window to close.
        window_id: AppId,
    },
    /// Collapse a window to the taskbar.
    MinimizeWindow {
        /// Window to minimize.
        window_id: AppId,
    },
    /// Minimize a window, or bring it back if it already is.
    ToggleMinimize {
        /// Window to toggle.
        window_id: AppId,
    },
    /// Toggle between full-viewport and restore geometry.
    ToggleMaximize {
        /// Window to toggle.
        window_id: AppId,
    },
    /// Raise and activate a window (body press).
    FocusWindow {
        /// Window to focus.
        window_id: AppId,
    },
    /// Taskbar or dock button press: raise-or-collapse.
    ActivateTaskbarWindow {
        /// Window associated with the button.
        window_id: AppId,
    },
    /// Open a window from the start menu and dismiss the menu.
    LaunchFromStartMenu {
        /// Window to open.
        window_id: AppId,
    },
    /// Toggle the start menu open/closed.
    ToggleStartMenu,
    /// Close the start menu if open.
    CloseStartMenu,
    /// Title-bar press that starts a move gesture.
    BeginMove {
        /// Window being dragged.
        window_id: AppId,
        /// Pointer position at gesture start.
        pointer: PointerPosition,
    },
    /// Resize-handle press that starts a resize gesture.
    BeginResize {
        /// Window being resized.
        window_id: AppId,
        /// Pointer position at gesture start.
        pointer: PointerPosition,
        /// Edges the handle drags.
        edges: ResizeEdges,
    },
    /// Global pointer move.
    PointerMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// Global pointer release.
    PointerRelease,
    /// Dismiss the boot welcome dialog.
    DismissWelcome,
    /// Desktop recycle-bin icon press.
    ActivateRecycleBin,
    /// Switch the chrome skin.
    SetTheme {
        /// Skin to use.
        theme: DesktopTheme,
    },
    /// Flip between the two chrome skins.
    ToggleTheme,
    /// The host viewport changed size.
    SetViewport {
        /// New viewport dimensions.
        viewport: Viewport,
    },
}

/// Named UI sound cues played by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Startup,
    Close,
    Error,
}

impl SoundCue {
    pub fn name(self) -> &'static str {
        match self {
            Self::Startup => "startup",
            Self::Close => "close",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the host to execute.
pub enum RuntimeEffect {
    /// Play a named UI sound effect.
    PlaySound(SoundCue),
    /// Move keyboard focus into the newly active window's content.
    FocusWindowInput(AppId),
    /// Show a modal message box.
    Alert(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for invalid actions.
pub enum ReducerError {
    /// The target window slot is not registered in this desktop.
    #[error("window `{0}` not found")]
    WindowNotFound(AppId),
    /// A window already holds the highest representable z value.
    #[error("z-order range exhausted")]
    ZOrderExhausted,
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] when an action references a slot that is not
/// registered, and [`ReducerError::ZOrderExhausted`] when a raise has no z value left. State
/// is left untouched in both cases.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenWindow { window_id } => {
            window_manager::open_window(state, window_id)?;
            effects.push(RuntimeEffect::FocusWindowInput(window_id));
        }
        DesktopAction::CloseWindow { window_id } => {
            window_manager::close_window(state, window_id)?;
            effects.push(RuntimeEffect::PlaySound(SoundCue::Close));
        }
        DesktopAction::MinimizeWindow { window_id } => {
            window_manager::minimize_window(state, window_id)?;
        }
        DesktopAction::ToggleMinimize { window_id } => {
            window_manager::toggle_minimize(state, window_id)?;
            if state.active_window == Some(window_id) {
                effects.push(RuntimeEffect::FocusWindowInput(window_id));
            }
        }
        DesktopAction::ToggleMaximize { window_id } => {
            window_manager::toggle_maximize(state, window_id)?;
        }
        DesktopAction::FocusWindow { window_id } => {
            window_manager::focus_window(state, window_id)?;
            if state.active_window == Some(window_id) {
                effects.push(RuntimeEffect::FocusWindowInput(window_id));
            }
        }
        DesktopAction::ActivateTaskbarWindow { window_id } => {
            let follow_up = match focus::taskbar_intent(state, window_id) {
                TaskbarIntent::Focus => DesktopAction::FocusWindow { window_id },
                TaskbarIntent::Collapse => DesktopAction::ToggleMinimize { window_id },
            };
            effects.extend(reduce_desktop(state, interaction, follow_up)?);
        }
        DesktopAction::LaunchFromStartMenu { window_id } => {
            effects.extend(reduce_desktop(
                state,
                interaction,
                DesktopAction::OpenWindow { window_id },
            )?);
            state.start_menu_open = false;
        }
        DesktopAction::ToggleStartMenu => {
            state.start_menu_open = !state.start_menu_open;
        }
        DesktopAction::CloseStartMenu => {
            state.start_menu_open = false;
        }
        DesktopAction::BeginMove { window_id, pointer } => {
            interaction.begin_move(state, window_id, pointer)?;
        }
        DesktopAction::BeginResize {
            window_id,
            pointer,
            edges,
        } => {
            interaction.begin_resize(state, window_id, pointer, edges)?;
        }
        DesktopAction::PointerMove { pointer } => {
            interaction.pointer_move(state, pointer)?;
        }
        DesktopAction::PointerRelease => {
            interaction.pointer_release();
        }
        DesktopAction::DismissWelcome => {
            if state.welcome_open {
                state.welcome_open = false;
                effects.push(RuntimeEffect::PlaySound(SoundCue::Startup));
            }
        }
        DesktopAction::ActivateRecycleBin => {
            effects.push(RuntimeEffect::PlaySound(SoundCue::Error));
            effects.push(RuntimeEffect::Alert("Recycle bin is empty.".to_string()));
        }
        DesktopAction::SetTheme { theme } => {
            state.theme = theme;
        }
        DesktopAction::ToggleTheme => {
            state.theme = state.theme.toggled();
        }
        DesktopAction::SetViewport { viewport } => {
            state.viewport = viewport;
        }
    }

    Ok(effects)
}
