use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DESKTOP_SNAPSHOT_SCHEMA_VERSION: u32 = 1;
/// Minimum allowed managed window width.
pub const MIN_WINDOW_WIDTH: i32 = 200;
/// Minimum allowed managed window height.
pub const MIN_WINDOW_HEIGHT: i32 = 150;
/// Height of the taskbar strip reserved at the bottom of the viewport.
pub const TASKBAR_HEIGHT_PX: i32 = 28;

/// Fixed application slots known to the desktop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppId {
    MyComputer,
    Documents,
    Network,
    Notepad,
    Settings,
    Calculator,
    #[serde(rename = "yscode")]
    YsCode,
}

impl AppId {
    pub const ALL: [AppId; 7] = [
        Self::MyComputer,
        Self::Documents,
        Self::Network,
        Self::Notepad,
        Self::Settings,
        Self::Calculator,
        Self::YsCode,
    ];

    pub fn canonical_id(self) -> &'static str {
        match self {
            Self::MyComputer => "my_computer",
            Self::Documents => "documents",
            Self::Network => "network",
            Self::Notepad => "notepad",
            Self::Settings => "settings",
            Self::Calculator => "calculator",
            Self::YsCode => "yscode",
        }
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn clamped_min(self, min_w: i32, min_h: i32) -> Self {
        Self {
            w: self.w.max(min_w),
            h: self.h.max(min_h),
            ..self
        }
    }

    pub fn right(self) -> i32 {
        self.x.saturating_add(self.w)
    }

    pub fn bottom(self) -> i32 {
        self.y.saturating_add(self.h)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl PointerPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
        }
    }
}

bitflags! {
    /// Window edges anchored by a resize gesture.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ResizeEdges: u8 {
        const NORTH = 0b0001;
        const SOUTH = 0b0010;
        const EAST = 0b0100;
        const WEST = 0b1000;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown resize handle `{0}`")]
pub struct EdgeParseError(pub String);

impl ResizeEdges {
    /// Handle names rendered by the chrome, in the order the Mac frame lays them out.
    pub const HANDLES: [&'static str; 8] = ["n", "s", "w", "e", "nw", "ne", "sw", "se"];

    /// Parses a chrome handle name such as `"se"` or `"n"`.
    pub fn from_handle(handle: &str) -> Result<Self, EdgeParseError> {
        let edges = match handle {
            "n" => Self::NORTH,
            "s" => Self::SOUTH,
            "e" => Self::EAST,
            "w" => Self::WEST,
            "ne" => Self::NORTH | Self::EAST,
            "nw" => Self::NORTH | Self::WEST,
            "se" => Self::SOUTH | Self::EAST,
            "sw" => Self::SOUTH | Self::WEST,
            other => return Err(EdgeParseError(other.to_string())),
        };
        Ok(edges)
    }
}

/// How a maximized window picks its geometry when toggled back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RestorePolicy {
    /// Snap back to the configured restore rectangle, whatever the window looked like before.
    #[default]
    FixedDefault,
    /// Return to the rectangle the window had at the moment it was maximized.
    RememberLast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DesktopTheme {
    #[default]
    Win95,
    Mac,
}

impl DesktopTheme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Win95 => Self::Mac,
            Self::Mac => Self::Win95,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowState {
    pub id: AppId,
    pub title_key: String,
    pub icon: String,
    pub is_open: bool,
    pub is_minimized: bool,
    pub is_maximized: bool,
    pub z_index: u32,
    pub rect: WindowRect,
    pub restore_rect: Option<WindowRect>,
    /// Stamp of the most recent z assignment; breaks ties between equal `z_index` values.
    pub raise_seq: u64,
}

impl WindowState {
    /// Whether the window is painted on screen.
    pub fn is_visible(&self) -> bool {
        self.is_open && !self.is_minimized
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopState {
    pub windows: Vec<WindowState>,
    pub active_window: Option<AppId>,
    pub start_menu_open: bool,
    pub welcome_open: bool,
    pub theme: DesktopTheme,
    pub viewport: Viewport,
    pub taskbar_height: i32,
    pub restore_policy: RestorePolicy,
    pub restore_rect: WindowRect,
    pub next_raise_seq: u64,
}

impl DesktopState {
    pub fn window(&self, id: AppId) -> Option<&WindowState> {
        self.windows.iter().find(|w| w.id == id)
    }

    pub fn window_mut(&mut self, id: AppId) -> Option<&mut WindowState> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    /// Highest painted window; on equal z the most recently raised one wins.
    pub fn topmost_window(&self) -> Option<AppId> {
        self.windows
            .iter()
            .filter(|w| w.is_visible())
            .max_by_key(|w| (w.z_index, w.raise_seq))
            .map(|w| w.id)
    }

    /// Open windows in paint order, bottom first.
    pub fn stacking_order(&self) -> Vec<&WindowState> {
        let mut visible: Vec<&WindowState> =
            self.windows.iter().filter(|w| w.is_visible()).collect();
        visible.sort_by_key(|w| (w.z_index, w.raise_seq));
        visible
    }

    pub fn snapshot(&self) -> DesktopSnapshot {
        DesktopSnapshot {
            schema_version: DESKTOP_SNAPSHOT_SCHEMA_VERSION,
            windows: self.windows.clone(),
            active_window: self.active_window,
            theme: self.theme,
        }
    }
}

/// Read-only copy of the registry handed to the chrome after each mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopSnapshot {
    pub schema_version: u32,
    pub windows: Vec<WindowState>,
    pub active_window: Option<AppId>,
    pub theme: DesktopTheme,
}

impl DesktopSnapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
