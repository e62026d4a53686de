use serde::{Deserialize, Serialize};

use crate::model::{AppId, WindowRect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppDescriptor {
    pub app_id: AppId,
    pub title_key: &'static str,
    pub icon: &'static str,
    pub show_on_desktop: bool,
    pub show_in_launcher: bool,
    pub initially_open: bool,
    pub default_z_index: u32,
    pub default_rect: WindowRect,
}

const APP_REGISTRY: [AppDescriptor; 7] = [
    AppDescriptor {
        app_id: AppId::MyComputer,
        title_key: "desktop.my_computer",
        icon: "/icons/my_computer.png",
        show_on_desktop: true,
        show_in_launcher: false,
        initially_open: true,
        default_z_index: 10,
        default_rect: WindowRect::new(50, 50, 450, 350),
    },
    AppDescriptor {
        app_id: AppId::Documents,
        title_key: "desktop.documents",
        icon: "/icons/documents.png",
        show_on_desktop: true,
        show_in_launcher: true,
        initially_open: false,
        default_z_index: 5,
        default_rect: WindowRect::new(80, 80, 500, 400),
    },
    AppDescriptor {
        app_id: AppId::Network,
        title_key: "desktop.network",
        icon: "/icons/network.png",
        show_on_desktop: true,
        show_in_launcher: false,
        initially_open: false,
        default_z_index: 6,
        default_rect: WindowRect::new(110, 110, 400, 300),
    },
    AppDescriptor {
        app_id: AppId::Notepad,
        title_key: "app.notepad",
        icon: "/icons/notepad.png",
        show_on_desktop: false,
        show_in_launcher: true,
        initially_open: false,
        default_z_index: 3,
        default_rect: WindowRect::new(150, 150, 400, 300),
    },
    AppDescriptor {
        app_id: AppId::Settings,
        title_key: "app.settings",
        icon: "/icons/settings.png",
        show_on_desktop: false,
        show_in_launcher: true,
        initially_open: false,
        default_z_index: 7,
        default_rect: WindowRect::new(200, 120, 360, 280),
    },
    AppDescriptor {
        app_id: AppId::Calculator,
        title_key: "Calculator",
        icon: "/icons/settings.png",
        show_on_desktop: false,
        show_in_launcher: true,
        initially_open: false,
        default_z_index: 8,
        default_rect: WindowRect::new(250, 150, 250, 350),
    },
    AppDescriptor {
        app_id: AppId::YsCode,
        title_key: "YScode",
        icon: "/icons/notepad.png",
        show_on_desktop: false,
        show_in_launcher: true,
        initially_open: false,
        default_z_index: 9,
        default_rect: WindowRect::new(100, 50, 800, 600),
    },
];

pub fn app_registry() -> &'static [AppDescriptor] {
    &APP_REGISTRY
}

pub fn launcher_apps() -> Vec<AppDescriptor> {
    app_registry()
        .iter()
        .copied()
        .filter(|entry| entry.show_in_launcher)
        .collect()
}

pub fn desktop_icon_apps() -> Vec<AppDescriptor> {
    app_registry()
        .iter()
        .copied()
        .filter(|entry| entry.show_on_desktop)
        .collect()
}

pub fn app_descriptor(app_id: AppId) -> Option<&'static AppDescriptor> {
    app_registry().iter().find(|entry| entry.app_id == app_id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExplorerKind {
    Documents,
    Network,
}

/// Mini-app hosted in a window body. The window manager never looks inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AppContent {
    Profile,
    Explorer { explorer: ExplorerKind },
    Notepad,
    Settings,
    Calculator,
    CodeEditor,
}

/// Where a mini-app draws, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRegion {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPlacement {
    pub content: AppContent,
    pub region: ContentRegion,
}

impl AppContent {
    pub fn for_app(app_id: AppId) -> Self {
        match app_id {
            AppId::MyComputer => Self::Profile,
            AppId::Documents => Self::Explorer {
                explorer: ExplorerKind::Documents,
            },
            AppId::Network => Self::Explorer {
                explorer: ExplorerKind::Network,
            },
            AppId::Notepad => Self::Notepad,
            AppId::Settings => Self::Settings,
            AppId::Calculator => Self::Calculator,
            AppId::YsCode => Self::CodeEditor,
        }
    }

    /// Windows the mini-app links to from inside its body.
    pub fn linked_apps(self) -> &'static [AppId] {
        match self {
            Self::Profile => &[AppId::Documents, AppId::Network],
            _ => &[],
        }
    }

    pub fn render_into(self, region: ContentRegion) -> ContentPlacement {
        ContentPlacement {
            content: self,
            region,
        }
    }
}
