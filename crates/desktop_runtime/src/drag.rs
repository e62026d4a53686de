//! Pointer-driven move and resize gestures.
//!
//! At most one gesture is live. The host forwards every pointer move and release; both are
//! no-ops while no gesture is live.

use crate::model::{AppId, DesktopState, PointerPosition, ResizeEdges, WindowRect, WindowState};
use crate::reducer::ReducerError;
use crate::window_manager::{find_window_mut, resize_rect};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragSession {
    Move {
        window_id: AppId,
        /// Pointer position relative to the window's top-left corner at gesture start.
        offset: PointerPosition,
    },
    Resize {
        window_id: AppId,
        edges: ResizeEdges,
        pointer_start: PointerPosition,
        rect_start: WindowRect,
    },
}

impl DragSession {
    pub fn window_id(&self) -> AppId {
        match self {
            Self::Move { window_id, .. } | Self::Resize { window_id, .. } => *window_id,
        }
    }

    pub fn is_resize(&self) -> bool {
        matches!(self, Self::Resize { .. })
    }
}

fn find_window(state: &DesktopState, window_id: AppId) -> Result<&WindowState, ReducerError> {
    state
        .window(window_id)
        .ok_or(ReducerError::WindowNotFound(window_id))
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub session: Option<DragSession>,
}

impl InteractionState {
    /// Starts a move gesture. Returns `false` when the window is maximized and the press is ignored.
    pub fn begin_move(
        &mut self,
        state: &DesktopState,
        window_id: AppId,
        pointer: PointerPosition,
    ) -> Result<bool, ReducerError> {
        let window = find_window(state, window_id)?;
        if window.is_maximized {
            tracing::debug!(window_id = %window_id, "ignoring move on maximized window");
            return Ok(false);
        }
        let offset = PointerPosition::new(
            pointer.x.saturating_sub(window.rect.x),
            pointer.y.saturating_sub(window.rect.y),
        );
        self.replace_session(DragSession::Move { window_id, offset });
        Ok(true)
    }

    /// Starts a resize gesture. Maximized windows are not exempt.
    pub fn begin_resize(
        &mut self,
        state: &DesktopState,
        window_id: AppId,
        pointer: PointerPosition,
        edges: ResizeEdges,
    ) -> Result<(), ReducerError> {
        let rect_start = find_window(state, window_id)?.rect;
        self.replace_session(DragSession::Resize {
            window_id,
            edges,
            pointer_start: pointer,
            rect_start,
        });
        Ok(())
    }

    /// Applies a pointer move to the live gesture. Returns whether any geometry changed.
    pub fn pointer_move(
        &self,
        state: &mut DesktopState,
        pointer: PointerPosition,
    ) -> Result<bool, ReducerError> {
        let Some(session) = self.session.as_ref() else {
            return Ok(false);
        };
        let window = find_window_mut(state, session.window_id())?;
        let next = match session {
            DragSession::Move { offset, .. } => WindowRect {
                x: pointer.x.saturating_sub(offset.x),
                y: pointer.y.saturating_sub(offset.y),
                ..window.rect
            },
            DragSession::Resize {
                edges,
                pointer_start,
                rect_start,
                ..
            } => resize_rect(
                *rect_start,
                *edges,
                pointer.x.saturating_sub(pointer_start.x),
                pointer.y.saturating_sub(pointer_start.y),
            ),
        };
        let changed = window.rect != next;
        window.rect = next;
        Ok(changed)
    }

    /// Ends whatever gesture is live. Safe to call repeatedly.
    pub fn pointer_release(&mut self) -> Option<DragSession> {
        let ended = self.session.take();
        if let Some(session) = &ended {
            tracing::debug!(window_id = %session.window_id(), resize = session.is_resize(), "gesture ended");
        }
        ended
    }

    fn replace_session(&mut self, session: DragSession) {
        if let Some(stale) = self.session.replace(session) {
            // A new press without a release means the release was lost.
            tracing::debug!(window_id = %stale.window_id(), "dropping gesture that never saw a release");
        }
    }
}
