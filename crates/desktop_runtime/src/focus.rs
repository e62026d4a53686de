//! Active-window bookkeeping.

use crate::model::{AppId, DesktopState};

/// What a taskbar (or dock) button press should do for an open window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskbarIntent {
    /// Restore if minimized, raise, and activate.
    Focus,
    /// The window is already in front; collapse it.
    Collapse,
}

pub(crate) fn activate(state: &mut DesktopState, window_id: AppId) {
    state.active_window = Some(window_id);
    state.start_menu_open = false;
}

/// Clears the active window only if it is `window_id`.
pub(crate) fn release(state: &mut DesktopState, window_id: AppId) {
    if state.active_window == Some(window_id) {
        state.active_window = None;
    }
}

pub fn taskbar_intent(state: &DesktopState, window_id: AppId) -> TaskbarIntent {
    let minimized = state
        .window(window_id)
        .map(|w| w.is_minimized)
        .unwrap_or(false);
    if minimized || state.active_window != Some(window_id) {
        TaskbarIntent::Focus
    } else {
        TaskbarIntent::Collapse
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::DesktopConfig;

    #[test]
    fn taskbar_press_focuses_background_or_minimized_windows() {
        let mut state = DesktopConfig::default().build_state();
        assert_eq!(
            taskbar_intent(&state, AppId::MyComputer),
            TaskbarIntent::Collapse
        );

        state.active_window = Some(AppId::Documents);
        assert_eq!(
            taskbar_intent(&state, AppId::MyComputer),
            TaskbarIntent::Focus
        );

        state.active_window = Some(AppId::MyComputer);
        state.window_mut(AppId::MyComputer).unwrap().is_minimized = true;
        assert_eq!(
            taskbar_intent(&state, AppId::MyComputer),
            TaskbarIntent::Focus
        );
    }

    #[test]
    fn releasing_a_background_window_keeps_active() {
        let mut state = DesktopConfig::default().build_state();
        release(&mut state, AppId::Notepad);
        assert_eq!(state.active_window, Some(AppId::MyComputer));
        release(&mut state, AppId::MyComputer);
        assert_eq!(state.active_window, None);
    }
}
