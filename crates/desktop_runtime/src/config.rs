//! Desktop boot configuration: viewport, restore policy, and the window slot table.
//!
//! Defaults reproduce the stock desktop. A TOML document may override any subset of fields;
//! omitted fields keep their defaults.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::apps::app_registry;
use crate::model::{
    AppId, DesktopState, DesktopTheme, RestorePolicy, Viewport, WindowRect, WindowState,
    MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, TASKBAR_HEIGHT_PX,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse desktop config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("desktop config declares no window slots")]
    NoSlots,
    #[error("window slot `{0}` is declared more than once")]
    DuplicateSlot(AppId),
    #[error("window slot `{slot}` is {w}x{h}, below the minimum window size")]
    SlotTooSmall { slot: AppId, w: i32, h: i32 },
    #[error("viewport {width}x{height} must be positive and taller than the taskbar")]
    InvalidViewport { width: i32, height: i32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotConfig {
    pub id: AppId,
    pub title_key: String,
    pub icon: String,
    #[serde(default)]
    pub open: bool,
    pub z_index: u32,
    pub rect: WindowRect,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    pub viewport: Viewport,
    pub taskbar_height: i32,
    pub restore_policy: RestorePolicy,
    pub restore_rect: WindowRect,
    pub theme: DesktopTheme,
    pub show_welcome: bool,
    pub slots: Vec<SlotConfig>,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            taskbar_height: TASKBAR_HEIGHT_PX,
            restore_policy: RestorePolicy::default(),
            restore_rect: WindowRect::new(50, 50, 450, 350),
            theme: DesktopTheme::default(),
            show_welcome: true,
            slots: app_registry()
                .iter()
                .map(|entry| SlotConfig {
                    id: entry.app_id,
                    title_key: entry.title_key.to_string(),
                    icon: entry.icon.to_string(),
                    open: entry.initially_open,
                    z_index: entry.default_z_index,
                    rect: entry.default_rect,
                })
                .collect(),
        }
    }
}

impl DesktopConfig {
    /// Parses and validates a TOML config document.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slots.is_empty() {
            return Err(ConfigError::NoSlots);
        }
        if self.viewport.width <= 0 || self.viewport.height <= self.taskbar_height {
            return Err(ConfigError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        let mut seen = BTreeSet::new();
        for slot in &self.slots {
            if !seen.insert(slot.id) {
                return Err(ConfigError::DuplicateSlot(slot.id));
            }
            if slot.rect.w < MIN_WINDOW_WIDTH || slot.rect.h < MIN_WINDOW_HEIGHT {
                return Err(ConfigError::SlotTooSmall {
                    slot: slot.id,
                    w: slot.rect.w,
                    h: slot.rect.h,
                });
            }
        }
        if self.restore_rect.w < MIN_WINDOW_WIDTH || self.restore_rect.h < MIN_WINDOW_HEIGHT {
            tracing::warn!(
                w = self.restore_rect.w,
                h = self.restore_rect.h,
                "restore rect below minimum size; it will be clamped on restore"
            );
        }
        Ok(())
    }

    /// Builds the boot registry. The initial active window is the topmost initially-open slot.
    pub fn build_state(&self) -> DesktopState {
        let windows: Vec<WindowState> = self
            .slots
            .iter()
            .map(|slot| WindowState {
                id: slot.id,
                title_key: slot.title_key.clone(),
                icon: slot.icon.clone(),
                is_open: slot.open,
                is_minimized: false,
                is_maximized: false,
                z_index: slot.z_index,
                rect: slot.rect,
                restore_rect: None,
                raise_seq: 0,
            })
            .collect();
        let active_window = windows
            .iter()
            .filter(|w| w.is_open)
            .max_by_key(|w| w.z_index)
            .map(|w| w.id);

        DesktopState {
            windows,
            active_window,
            start_menu_open: false,
            welcome_open: self.show_welcome,
            theme: self.theme,
            viewport: self.viewport,
            taskbar_height: self.taskbar_height,
            restore_policy: self.restore_policy,
            restore_rect: self.restore_rect,
            next_raise_seq: 1,
        }
    }
}
