//! Application lifecycle.
//!
//! This module contains:
//! - Navigation between screens (navigation.rs)
//! - Action definitions (inline via gpui::actions!)
//! - Keybinding registration and window setup

pub mod navigation;

pub use navigation::{DetailContent, NavEvent, Navigator, Route, RouteError, ScreenFlow};

use std::sync::Arc;

use anyhow::Result;
use gpui::{
    actions, px, size, AppContext, Application, Bounds, KeyBinding, TitlebarOptions,
    WindowBounds, WindowOptions,
};

use crate::config::Settings;
use crate::services::EntryStore;
use crate::ui::views::APP_TITLE;
use crate::ui::MainWindow;

// Define application actions
actions!(
    puppies,
    [
        Quit,
        Back,
        NextEntry,
        PreviousEntry,
        OpenEntry,
        ToggleTheme,
    ]
);

/// Key context set by the main window.
pub(crate) const APP_CONTEXT: &str = "PuppyApp";

/// Main application entry point
pub struct App;

impl App {
    /// Run the application until the window closes or the user quits.
    pub fn run(settings: Settings, store: Arc<EntryStore>) -> Result<()> {
        Application::new().run(move |cx: &mut gpui::App| {
            Self::register_keybindings(cx);
            cx.on_action(|_: &Quit, cx: &mut gpui::App| {
                tracing::info!("quit requested");
                cx.quit();
            });

            let bounds = Bounds::centered(None, size(px(420.0), px(720.0)), cx);
            let options = WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(TitlebarOptions {
                    title: Some(APP_TITLE.into()),
                    ..Default::default()
                }),
                ..Default::default()
            };

            let theme_mode = settings.theme;
            let opened = cx.open_window(options, |window, cx| {
                cx.new(|cx| MainWindow::new(theme_mode, store, window, cx))
            });

            match opened {
                Ok(_) => cx.activate(true),
                Err(err) => {
                    tracing::error!(error = %err, "failed to open window");
                    cx.quit();
                }
            }
        });

        Ok(())
    }

    /// Register global keybindings
    fn register_keybindings(cx: &mut gpui::App) {
        let app_ctx = Some(APP_CONTEXT);

        cx.bind_keys([
            // Quit - global, always available
            KeyBinding::new("cmd-q", Quit, None),
            KeyBinding::new("ctrl-q", Quit, None),
            // Screen navigation
            KeyBinding::new("escape", Back, app_ctx),
            KeyBinding::new("backspace", Back, app_ctx),
            KeyBinding::new("j", NextEntry, app_ctx),
            KeyBinding::new("down", NextEntry, app_ctx),
            KeyBinding::new("k", PreviousEntry, app_ctx),
            KeyBinding::new("up", PreviousEntry, app_ctx),
            KeyBinding::new("enter", OpenEntry, app_ctx),
            KeyBinding::new("t", ToggleTheme, app_ctx),
        ]);
    }
}
