//! Window registry transitions and z-order allocation used by the desktop reducer.

use crate::focus;
use crate::model::{
    AppId, DesktopState, ResizeEdges, RestorePolicy, WindowRect, WindowState, MIN_WINDOW_HEIGHT,
    MIN_WINDOW_WIDTH,
};
use crate::reducer::ReducerError;

/// Returns a stacking value strictly above every window currently in the registry.
///
/// Recomputed from state on each call; there is no stored counter.
///
/// # Errors
///
/// Returns [`ReducerError::ZOrderExhausted`] when some window already sits at `u32::MAX`.
pub fn next_z_index(state: &DesktopState) -> Result<u32, ReducerError> {
    state
        .windows
        .iter()
        .map(|w| w.z_index)
        .max()
        .unwrap_or(0)
        .checked_add(1)
        .ok_or(ReducerError::ZOrderExhausted)
}

pub(crate) fn find_window_mut(
    state: &mut DesktopState,
    window_id: AppId,
) -> Result<&mut WindowState, ReducerError> {
    state
        .window_mut(window_id)
        .ok_or(ReducerError::WindowNotFound(window_id))
}

/// Moves `window_id` to the top of the stack and returns its new z value.
pub fn raise_window(state: &mut DesktopState, window_id: AppId) -> Result<u32, ReducerError> {
    let z_index = next_z_index(state)?;
    let seq = state.next_raise_seq;
    let window = find_window_mut(state, window_id)?;
    window.z_index = z_index;
    window.raise_seq = seq;
    state.next_raise_seq = seq.saturating_add(1);
    Ok(z_index)
}

pub fn open_window(state: &mut DesktopState, window_id: AppId) -> Result<(), ReducerError> {
    let z_index = raise_window(state, window_id)?;
    let window = find_window_mut(state, window_id)?;
    window.is_open = true;
    window.is_minimized = false;
    focus::activate(state, window_id);
    tracing::debug!(window_id = %window_id, z_index, "opened window");
    Ok(())
}

/// Hides the window. Geometry and z are kept so a reopen lands where it was.
pub fn close_window(state: &mut DesktopState, window_id: AppId) -> Result<(), ReducerError> {
    find_window_mut(state, window_id)?.is_open = false;
    focus::release(state, window_id);
    tracing::debug!(window_id = %window_id, "closed window");
    Ok(())
}

/// Collapses an open window to the taskbar. Closed windows stay closed and unminimized.
pub fn minimize_window(state: &mut DesktopState, window_id: AppId) -> Result<(), ReducerError> {
    let window = find_window_mut(state, window_id)?;
    if !window.is_open {
        tracing::debug!(window_id = %window_id, "ignoring minimize on closed window");
        return Ok(());
    }
    window.is_minimized = true;
    focus::release(state, window_id);
    tracing::debug!(window_id = %window_id, "minimized window");
    Ok(())
}

pub fn toggle_minimize(state: &mut DesktopState, window_id: AppId) -> Result<(), ReducerError> {
    let window = find_window_mut(state, window_id)?;
    if !window.is_open {
        tracing::debug!(window_id = %window_id, "ignoring minimize toggle on closed window");
        return Ok(());
    }
    if !window.is_minimized {
        return minimize_window(state, window_id);
    }
    let z_index = raise_window(state, window_id)?;
    find_window_mut(state, window_id)?.is_minimized = false;
    focus::activate(state, window_id);
    tracing::debug!(window_id = %window_id, z_index, "restored minimized window");
    Ok(())
}

/// Toggles between the full-viewport rect and the restore geometry.
pub fn toggle_maximize(state: &mut DesktopState, window_id: AppId) -> Result<(), ReducerError> {
    let maximized_rect = WindowRect::new(
        0,
        0,
        state.viewport.width,
        state.viewport.height.saturating_sub(state.taskbar_height),
    )
    .clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);
    let policy = state.restore_policy;
    let fixed_restore = state.restore_rect;

    let window = find_window_mut(state, window_id)?;
    if window.is_maximized {
        let restore = match policy {
            RestorePolicy::FixedDefault => fixed_restore,
            RestorePolicy::RememberLast => window.restore_rect.take().unwrap_or(fixed_restore),
        };
        window.rect = restore.clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);
        window.is_maximized = false;
        tracing::debug!(window_id = %window_id, ?policy, "restored maximized window");
    } else {
        if policy == RestorePolicy::RememberLast {
            window.restore_rect = Some(window.rect);
        }
        window.rect = maximized_rect;
        window.is_maximized = true;
        tracing::debug!(window_id = %window_id, "maximized window");
    }
    Ok(())
}

/// Raises and activates `window_id`, bringing it back if it was minimized.
pub fn focus_window(state: &mut DesktopState, window_id: AppId) -> Result<(), ReducerError> {
    let window = find_window_mut(state, window_id)?;
    if !window.is_open {
        tracing::debug!(window_id = %window_id, "ignoring focus on closed window");
        return Ok(());
    }
    raise_window(state, window_id)?;
    find_window_mut(state, window_id)?.is_minimized = false;
    focus::activate(state, window_id);
    Ok(())
}

/// Applies resize deltas for the given edge set, holding the opposite edge fixed at the minimum.
///
/// When both horizontal (or both vertical) edges are set, the west (north) rule applies.
/// Arithmetic saturates at the `i32` range, so arbitrary pointer deltas are accepted.
pub fn resize_rect(start: WindowRect, edges: ResizeEdges, dx: i32, dy: i32) -> WindowRect {
    let mut rect = start;

    if edges.contains(ResizeEdges::WEST) {
        rect.w = start.w.saturating_sub(dx).max(MIN_WINDOW_WIDTH);
        rect.x = if rect.w > MIN_WINDOW_WIDTH {
            start.x.saturating_add(dx)
        } else {
            start.x.saturating_add(start.w.saturating_sub(MIN_WINDOW_WIDTH))
        };
    } else if edges.contains(ResizeEdges::EAST) {
        rect.w = start.w.saturating_add(dx).max(MIN_WINDOW_WIDTH);
    }

    if edges.contains(ResizeEdges::NORTH) {
        rect.h = start.h.saturating_sub(dy).max(MIN_WINDOW_HEIGHT);
        rect.y = if rect.h > MIN_WINDOW_HEIGHT {
            start.y.saturating_add(dy)
        } else {
            start.y.saturating_add(start.h.saturating_sub(MIN_WINDOW_HEIGHT))
        };
    } else if edges.contains(ResizeEdges::SOUTH) {
        rect.h = start.h.saturating_add(dy).max(MIN_WINDOW_HEIGHT);
    }

    rect
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::DesktopConfig;

    fn desktop() -> DesktopState {
        DesktopConfig::default().build_state()
    }

    #[test]
    fn next_z_index_exceeds_every_window() {
        let mut state = desktop();
        let next = next_z_index(&state).unwrap();
        assert!(state.windows.iter().all(|w| w.z_index < next));

        state.windows.clear();
        assert_eq!(next_z_index(&state), Ok(1));
    }

    #[test]
    fn exhausted_z_range_fails_without_touching_state() {
        let mut state = desktop();
        state.window_mut(AppId::Documents).unwrap().z_index = u32::MAX;
        let before = state.clone();

        assert_eq!(next_z_index(&state), Err(ReducerError::ZOrderExhausted));
        assert_eq!(
            open_window(&mut state, AppId::Notepad),
            Err(ReducerError::ZOrderExhausted)
        );
        assert_eq!(
            focus_window(&mut state, AppId::MyComputer),
            Err(ReducerError::ZOrderExhausted)
        );
        assert_eq!(state, before);
    }

    #[test]
    fn minimize_on_closed_window_is_ignored() {
        let mut state = desktop();
        let before = state.clone();

        minimize_window(&mut state, AppId::Notepad).unwrap();
        assert_eq!(state, before);

        toggle_minimize(&mut state, AppId::Notepad).unwrap();
        toggle_minimize(&mut state, AppId::Notepad).unwrap();
        let notepad = state.window(AppId::Notepad).unwrap();
        assert!(!notepad.is_open);
        assert!(!notepad.is_minimized);
        assert_eq!(state.active_window, Some(AppId::MyComputer));
        assert_eq!(state, before);
    }

    #[test]
    fn repeated_focus_keeps_climbing() {
        let mut state = desktop();
        focus_window(&mut state, AppId::MyComputer).unwrap();
        let first = state.window(AppId::MyComputer).unwrap().z_index;
        focus_window(&mut state, AppId::MyComputer).unwrap();
        let second = state.window(AppId::MyComputer).unwrap().z_index;
        assert_eq!(first, 11);
        assert_eq!(second, 12);
    }

    #[test]
    fn close_keeps_geometry_for_reopen() {
        let mut state = desktop();
        let before = state.window(AppId::Settings).unwrap().clone();

        open_window(&mut state, AppId::Settings).unwrap();
        let opened_z = state.window(AppId::Settings).unwrap().z_index;
        close_window(&mut state, AppId::Settings).unwrap();

        let after = state.window(AppId::Settings).unwrap();
        assert!(!after.is_open);
        assert_eq!(after.rect, before.rect);
        assert_eq!(after.z_index, opened_z);
        assert_eq!(state.active_window, None);
    }

    #[test]
    fn maximize_fills_viewport_above_taskbar_and_restores_fixed_default() {
        let mut state = desktop();
        state.window_mut(AppId::Calculator).unwrap().rect = WindowRect::new(300, 200, 260, 380);

        toggle_maximize(&mut state, AppId::Calculator).unwrap();
        let window = state.window(AppId::Calculator).unwrap();
        assert!(window.is_maximized);
        assert_eq!(window.rect, WindowRect::new(0, 0, 1024, 740));

        toggle_maximize(&mut state, AppId::Calculator).unwrap();
        let window = state.window(AppId::Calculator).unwrap();
        assert!(!window.is_maximized);
        assert_eq!(window.rect, WindowRect::new(50, 50, 450, 350));
    }

    #[test]
    fn remember_last_policy_restores_pre_maximize_rect() {
        let mut state = desktop();
        state.restore_policy = RestorePolicy::RememberLast;
        let custom = WindowRect::new(300, 200, 260, 380);
        state.window_mut(AppId::Calculator).unwrap().rect = custom;

        toggle_maximize(&mut state, AppId::Calculator).unwrap();
        toggle_maximize(&mut state, AppId::Calculator).unwrap();

        let window = state.window(AppId::Calculator).unwrap();
        assert_eq!(window.rect, custom);
        assert_eq!(window.restore_rect, None);
    }

    #[test]
    fn focus_on_closed_window_is_ignored() {
        let mut state = desktop();
        let before = state.clone();
        focus_window(&mut state, AppId::Notepad).unwrap();
        assert_eq!(state, before);
    }

    #[test]
    fn unknown_window_is_reported() {
        let mut state = desktop();
        state.windows.retain(|w| w.id != AppId::YsCode);
        assert_eq!(
            open_window(&mut state, AppId::YsCode),
            Err(ReducerError::WindowNotFound(AppId::YsCode))
        );
    }

    #[test]
    fn east_resize_never_goes_below_minimum_width() {
        let start = WindowRect::new(100, 100, 400, 300);
        let rect = resize_rect(start, ResizeEdges::EAST, -10_000, 0);
        assert_eq!(rect, WindowRect::new(100, 100, MIN_WINDOW_WIDTH, 300));
    }

    #[test]
    fn west_resize_pins_right_edge_at_clamp() {
        let start = WindowRect::new(100, 100, 400, 300);
        let right = start.right();
        for dx in [150, 199, 200, 201, 260, 5_000] {
            let rect = resize_rect(start, ResizeEdges::WEST, dx, 0);
            assert_eq!(rect.right(), right, "dx={dx}");
            assert!(rect.w >= MIN_WINDOW_WIDTH);
        }
        assert_eq!(
            resize_rect(start, ResizeEdges::WEST, -50, 0),
            WindowRect::new(50, 100, 450, 300)
        );
    }

    #[test]
    fn north_resize_pins_bottom_edge_at_clamp() {
        let start = WindowRect::new(100, 100, 400, 300);
        let rect = resize_rect(start, ResizeEdges::NORTH, 0, 1_000);
        assert_eq!(rect, WindowRect::new(100, 250, 400, MIN_WINDOW_HEIGHT));
        assert_eq!(rect.bottom(), start.bottom());
    }

    #[test]
    fn resize_saturates_on_extreme_deltas() {
        let start = WindowRect::new(100, 100, 400, 300);

        let east = resize_rect(start, ResizeEdges::EAST | ResizeEdges::SOUTH, i32::MAX, i32::MAX);
        assert_eq!(east, WindowRect::new(100, 100, i32::MAX, i32::MAX));

        let shrunk = resize_rect(start, ResizeEdges::EAST | ResizeEdges::SOUTH, i32::MIN, i32::MIN);
        assert_eq!(
            shrunk,
            WindowRect::new(100, 100, MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)
        );

        let west = resize_rect(start, ResizeEdges::WEST | ResizeEdges::NORTH, i32::MIN, i32::MIN);
        assert_eq!(west.w, i32::MAX);
        assert_eq!(west.h, i32::MAX);
        assert_eq!((west.x, west.y), (i32::MIN + 100, i32::MIN + 100));

        let pinned = resize_rect(start, ResizeEdges::WEST | ResizeEdges::NORTH, i32::MAX, i32::MAX);
        assert_eq!(pinned.right(), start.right());
        assert_eq!(pinned.bottom(), start.bottom());
    }

    #[test]
    fn diagonal_resize_applies_both_axes() {
        let start = WindowRect::new(100, 100, 400, 300);
        assert_eq!(
            resize_rect(start, ResizeEdges::SOUTH | ResizeEdges::EAST, 40, 30),
            WindowRect::new(100, 100, 440, 330)
        );
        assert_eq!(
            resize_rect(start, ResizeEdges::NORTH | ResizeEdges::WEST, 20, -10),
            WindowRect::new(120, 90, 380, 310)
        );
    }
}
