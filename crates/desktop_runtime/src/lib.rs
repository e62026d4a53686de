//! Headless window manager for the retro desktop: window registry, z-order, focus, and
//! pointer-driven move/resize, plus the skin strategies that describe it to a renderer.

pub mod apps;
pub mod chrome;
pub mod config;
pub mod drag;
pub mod focus;
pub mod model;
pub mod reducer;
pub mod runtime;
pub mod window_manager;

pub use chrome::{render_desktop, DesktopView, ShellSkin};
pub use config::{ConfigError, DesktopConfig};
pub use drag::{DragSession, InteractionState};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect, SoundCue};
pub use runtime::{DesktopHost, DesktopRuntime, NoopHost};
