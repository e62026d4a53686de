//! Skin strategies that turn registry state into a renderable desktop description.
//!
//! Skins never mutate state. Every clickable element carries the [`DesktopAction`] the host
//! should dispatch when it is pressed.

use crate::apps::{
    desktop_icon_apps, launcher_apps, AppContent, ContentPlacement, ContentRegion,
};
use crate::model::{
    AppId, DesktopState, DesktopTheme, PointerPosition, ResizeEdges, WindowRect, WindowState,
};
use crate::reducer::DesktopAction;

#[derive(Debug, Clone, PartialEq)]
pub struct WindowChrome {
    pub window_id: AppId,
    pub title_key: String,
    pub icon: String,
    pub rect: WindowRect,
    pub z_index: u32,
    pub active: bool,
    pub maximized: bool,
    pub resize_handles: Vec<ResizeHandle>,
    pub content: ContentPlacement,
    /// Links rendered inside the window body, e.g. the profile's shortcuts.
    pub content_links: Vec<DesktopAction>,
    pub on_close: DesktopAction,
    pub on_minimize: DesktopAction,
    pub on_maximize: DesktopAction,
    /// Press anywhere on the frame body.
    pub on_body_press: DesktopAction,
}

impl WindowChrome {
    /// Title-bar press at `pointer`. The press focuses the window, then starts a move.
    pub fn title_press(&self, pointer: PointerPosition) -> [DesktopAction; 2] {
        [
            self.on_body_press.clone(),
            DesktopAction::BeginMove {
                window_id: self.window_id,
                pointer,
            },
        ]
    }
}

/// Resize grip on a frame edge or corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeHandle {
    pub window_id: AppId,
    pub edges: ResizeEdges,
}

impl ResizeHandle {
    /// Grip press at `pointer`; like the title bar, it focuses the frame first.
    pub fn press(&self, pointer: PointerPosition) -> [DesktopAction; 2] {
        [
            DesktopAction::FocusWindow {
                window_id: self.window_id,
            },
            DesktopAction::BeginResize {
                window_id: self.window_id,
                pointer,
                edges: self.edges,
            },
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LauncherEntry {
    pub window_id: AppId,
    pub title_key: String,
    pub icon: String,
    pub open: bool,
    pub pressed: bool,
    pub on_press: DesktopAction,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DesktopIcon {
    pub label_key: &'static str,
    pub icon: &'static str,
    pub on_press: DesktopAction,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DesktopView {
    pub theme: DesktopTheme,
    pub frames: Vec<WindowChrome>,
    pub launcher: Vec<LauncherEntry>,
    pub icons: Vec<DesktopIcon>,
    /// Start menu programs. Listed in both skins; hosts show them while `start_menu_open`.
    pub start_menu: Vec<LauncherEntry>,
    pub start_menu_open: bool,
    pub welcome_open: bool,
    /// Title shown in the Mac menu bar; Win95 has none.
    pub menu_bar_title: Option<String>,
}

/// Content inset of a window frame, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameInsets {
    pub top: i32,
    pub left: i32,
    pub right: i32,
    pub bottom: i32,
}

pub trait ShellSkin {
    fn insets(&self) -> FrameInsets;

    fn resize_handles(&self) -> Vec<ResizeEdges>;

    fn launcher_entries(&self, state: &DesktopState) -> Vec<LauncherEntry>;

    fn menu_bar_title(&self, state: &DesktopState) -> Option<String>;

    fn frame(&self, state: &DesktopState, window: &WindowState) -> WindowChrome {
        let insets = self.insets();
        let region = ContentRegion {
            x: window.rect.x.saturating_add(insets.left),
            y: window.rect.y.saturating_add(insets.top),
            w: window.rect.w.saturating_sub(insets.left + insets.right).max(0),
            h: window.rect.h.saturating_sub(insets.top + insets.bottom).max(0),
        };
        let window_id = window.id;
        let content = AppContent::for_app(window_id);
        WindowChrome {
            window_id,
            title_key: window.title_key.clone(),
            icon: window.icon.clone(),
            rect: window.rect,
            z_index: window.z_index,
            active: state.active_window == Some(window_id),
            maximized: window.is_maximized,
            resize_handles: self
                .resize_handles()
                .into_iter()
                .map(|edges| ResizeHandle { window_id, edges })
                .collect(),
            content: content.render_into(region),
            content_links: content
                .linked_apps()
                .iter()
                .map(|&linked| DesktopAction::OpenWindow { window_id: linked })
                .collect(),
            on_close: DesktopAction::CloseWindow { window_id },
            on_minimize: DesktopAction::MinimizeWindow { window_id },
            on_maximize: DesktopAction::ToggleMaximize { window_id },
            on_body_press: DesktopAction::FocusWindow { window_id },
        }
    }
}

/// Grey bevelled frames, no resize handles, taskbar of open windows.
#[derive(Debug, Default, Clone, Copy)]
pub struct Win95Skin;

impl ShellSkin for Win95Skin {
    fn insets(&self) -> FrameInsets {
        FrameInsets {
            top: 23,
            left: 3,
            right: 3,
            bottom: 3,
        }
    }

    fn resize_handles(&self) -> Vec<ResizeEdges> {
        Vec::new()
    }

    fn launcher_entries(&self, state: &DesktopState) -> Vec<LauncherEntry> {
        state
            .windows
            .iter()
            .filter(|w| w.is_open)
            .map(|w| LauncherEntry {
                window_id: w.id,
                title_key: w.title_key.clone(),
                icon: w.icon.clone(),
                open: true,
                pressed: state.active_window == Some(w.id) && !w.is_minimized,
                on_press: DesktopAction::ActivateTaskbarWindow { window_id: w.id },
            })
            .collect()
    }

    fn menu_bar_title(&self, _state: &DesktopState) -> Option<String> {
        None
    }
}

/// Rounded frames with eight resize handles and a dock listing every slot.
#[derive(Debug, Default, Clone, Copy)]
pub struct MacSkin;

impl ShellSkin for MacSkin {
    fn insets(&self) -> FrameInsets {
        FrameInsets {
            top: 32,
            left: 0,
            right: 0,
            bottom: 0,
        }
    }

    fn resize_handles(&self) -> Vec<ResizeEdges> {
        ResizeEdges::HANDLES
            .iter()
            .filter_map(|handle| ResizeEdges::from_handle(handle).ok())
            .collect()
    }

    fn launcher_entries(&self, state: &DesktopState) -> Vec<LauncherEntry> {
        state
            .windows
            .iter()
            .map(|w| LauncherEntry {
                window_id: w.id,
                title_key: w.title_key.clone(),
                icon: w.icon.clone(),
                open: w.is_open,
                pressed: state.active_window == Some(w.id) && w.is_visible(),
                on_press: if w.is_open {
                    DesktopAction::ActivateTaskbarWindow { window_id: w.id }
                } else {
                    DesktopAction::OpenWindow { window_id: w.id }
                },
            })
            .collect()
    }

    fn menu_bar_title(&self, state: &DesktopState) -> Option<String> {
        let title = state
            .active_window
            .and_then(|id| state.window(id))
            .map(|w| w.title_key.clone())
            .unwrap_or_else(|| "Finder".to_string());
        Some(title)
    }
}

pub fn skin_for(theme: DesktopTheme) -> &'static dyn ShellSkin {
    match theme {
        DesktopTheme::Win95 => &Win95Skin,
        DesktopTheme::Mac => &MacSkin,
    }
}

fn desktop_icons() -> Vec<DesktopIcon> {
    let mut icons: Vec<DesktopIcon> = desktop_icon_apps()
        .into_iter()
        .map(|entry| DesktopIcon {
            label_key: entry.title_key,
            icon: entry.icon,
            on_press: DesktopAction::OpenWindow {
                window_id: entry.app_id,
            },
        })
        .collect();
    icons.push(DesktopIcon {
        label_key: "desktop.recycle_bin",
        icon: "/icons/recycle_bin.png",
        on_press: DesktopAction::ActivateRecycleBin,
    });
    icons
}

/// Start menu programs registered in this desktop, each launching its window.
fn start_menu_entries(state: &DesktopState) -> Vec<LauncherEntry> {
    launcher_apps()
        .into_iter()
        .filter_map(|entry| {
            let window = state.window(entry.app_id)?;
            Some(LauncherEntry {
                window_id: entry.app_id,
                title_key: entry.title_key.to_string(),
                icon: entry.icon.to_string(),
                open: window.is_open,
                pressed: false,
                on_press: DesktopAction::LaunchFromStartMenu {
                    window_id: entry.app_id,
                },
            })
        })
        .collect()
}

/// Describes the whole desktop using the skin selected by `state.theme`.
pub fn render_desktop(state: &DesktopState) -> DesktopView {
    let skin = skin_for(state.theme);
    DesktopView {
        theme: state.theme,
        frames: state
            .stacking_order()
            .into_iter()
            .map(|window| skin.frame(state, window))
            .collect(),
        launcher: skin.launcher_entries(state),
        icons: desktop_icons(),
        start_menu: start_menu_entries(state),
        start_menu_open: state.start_menu_open,
        welcome_open: state.welcome_open,
        menu_bar_title: skin.menu_bar_title(state),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::DesktopConfig;

    fn desktop_with_two_windows() -> DesktopState {
        let mut state = DesktopConfig::default().build_state();
        crate::window_manager::open_window(&mut state, AppId::Notepad).unwrap();
        state
    }

    #[test]
    fn frames_are_listed_in_paint_order_without_hidden_windows() {
        let mut state = desktop_with_two_windows();
        crate::window_manager::open_window(&mut state, AppId::Settings).unwrap();
        crate::window_manager::minimize_window(&mut state, AppId::Settings).unwrap();

        let view = render_desktop(&state);
        let ids: Vec<AppId> = view.frames.iter().map(|f| f.window_id).collect();
        assert_eq!(ids, vec![AppId::MyComputer, AppId::Notepad]);
        assert!(view.frames.iter().all(|f| !f.active));
    }

    #[test]
    fn win95_taskbar_lists_open_windows_and_presses_the_active_one() {
        let state = desktop_with_two_windows();
        let view = render_desktop(&state);

        let pressed: Vec<(AppId, bool)> = view
            .launcher
            .iter()
            .map(|entry| (entry.window_id, entry.pressed))
            .collect();
        assert_eq!(
            pressed,
            vec![(AppId::MyComputer, false), (AppId::Notepad, true)]
        );
        assert!(view.frames.iter().all(|f| f.resize_handles.is_empty()));
        assert_eq!(view.menu_bar_title, None);
    }

    #[test]
    fn mac_dock_lists_every_slot_and_opens_closed_ones() {
        let mut state = desktop_with_two_windows();
        state.theme = DesktopTheme::Mac;
        let view = render_desktop(&state);

        assert_eq!(view.launcher.len(), state.windows.len());
        let calculator = view
            .launcher
            .iter()
            .find(|entry| entry.window_id == AppId::Calculator)
            .unwrap();
        assert!(!calculator.open);
        assert_eq!(
            calculator.on_press,
            DesktopAction::OpenWindow {
                window_id: AppId::Calculator
            }
        );
        assert_eq!(view.frames[0].resize_handles.len(), 8);
        assert_eq!(view.menu_bar_title.as_deref(), Some("app.notepad"));
    }

    #[test]
    fn content_region_sits_inside_the_frame() {
        let state = DesktopConfig::default().build_state();
        let frame = Win95Skin.frame(&state, state.window(AppId::MyComputer).unwrap());

        assert_eq!(
            frame.content.region,
            ContentRegion {
                x: 53,
                y: 73,
                w: 444,
                h: 324,
            }
        );
        assert_eq!(frame.content.content, AppContent::Profile);
        assert!(frame.active);
    }

    #[test]
    fn frame_buttons_and_presses_carry_their_intents() {
        let state = desktop_with_two_windows();
        let view = render_desktop(&state);
        let notepad = view
            .frames
            .iter()
            .find(|f| f.window_id == AppId::Notepad)
            .unwrap();
        let window_id = AppId::Notepad;

        assert_eq!(notepad.on_close, DesktopAction::CloseWindow { window_id });
        assert_eq!(notepad.on_minimize, DesktopAction::MinimizeWindow { window_id });
        assert_eq!(notepad.on_maximize, DesktopAction::ToggleMaximize { window_id });
        assert_eq!(notepad.on_body_press, DesktopAction::FocusWindow { window_id });
        assert_eq!(
            notepad.title_press(PointerPosition::new(160, 155)),
            [
                DesktopAction::FocusWindow { window_id },
                DesktopAction::BeginMove {
                    window_id,
                    pointer: PointerPosition::new(160, 155),
                },
            ]
        );
        assert!(notepad.content_links.is_empty());
    }

    #[test]
    fn mac_resize_handles_start_resize_gestures() {
        let mut state = desktop_with_two_windows();
        state.theme = DesktopTheme::Mac;
        let view = render_desktop(&state);
        let frame = view.frames.last().unwrap();
        let south_east = frame
            .resize_handles
            .iter()
            .find(|handle| handle.edges == (ResizeEdges::SOUTH | ResizeEdges::EAST))
            .unwrap();

        let [focus, resize] = south_east.press(PointerPosition::new(550, 450));
        assert_eq!(
            focus,
            DesktopAction::FocusWindow {
                window_id: frame.window_id
            }
        );
        assert_eq!(
            resize,
            DesktopAction::BeginResize {
                window_id: frame.window_id,
                pointer: PointerPosition::new(550, 450),
                edges: ResizeEdges::SOUTH | ResizeEdges::EAST,
            }
        );
    }

    #[test]
    fn profile_frame_links_to_the_explorer_windows() {
        let view = render_desktop(&DesktopConfig::default().build_state());
        assert_eq!(
            view.frames[0].content_links,
            vec![
                DesktopAction::OpenWindow {
                    window_id: AppId::Documents
                },
                DesktopAction::OpenWindow {
                    window_id: AppId::Network
                },
            ]
        );
    }

    #[test]
    fn start_menu_launches_registered_programs() {
        let mut state = desktop_with_two_windows();
        state.windows.retain(|w| w.id != AppId::YsCode);
        let view = render_desktop(&state);

        let ids: Vec<AppId> = view.start_menu.iter().map(|e| e.window_id).collect();
        assert_eq!(
            ids,
            vec![
                AppId::Documents,
                AppId::Notepad,
                AppId::Settings,
                AppId::Calculator
            ]
        );
        let notepad = &view.start_menu[1];
        assert!(notepad.open);
        assert_eq!(
            notepad.on_press,
            DesktopAction::LaunchFromStartMenu {
                window_id: AppId::Notepad
            }
        );
    }

    #[test]
    fn desktop_icons_end_with_recycle_bin() {
        let view = render_desktop(&DesktopConfig::default().build_state());
        assert_eq!(
            view.icons.last().map(|icon| icon.on_press.clone()),
            Some(DesktopAction::ActivateRecycleBin)
        );
    }
}
