//! Main application window
//!
//! Hosts the header and whichever screen the route points at. Screens
//! report activations through callbacks; the window owns the screen flow and
//! is the only place routes change.

use std::sync::Arc;

use gpui::{
    div, prelude::FluentBuilder, px, AppContext, Context, Entity, FocusHandle, Focusable,
    FontWeight, InteractiveElement, IntoElement, ParentElement, Render, SharedString, Styled,
    WeakEntity, Window, WindowAppearance,
};

use crate::app::navigation::{DetailContent, NavEvent, Route, ScreenFlow};
use crate::app::{Back, NextEntry, OpenEntry, PreviousEntry, ToggleTheme, APP_CONTEXT};
use crate::services::EntryStore;
use crate::ui::theme::{Theme, ThemeMode};
use crate::ui::views::{EntryDetail, EntryList};

/// Title shown above both screens.
pub const APP_TITLE: &str = "My Puppies";

/// Main application window.
pub struct MainWindow {
    theme: Theme,
    focus_handle: FocusHandle,
    flow: ScreenFlow,
    list: Entity<EntryList>,
    detail: Option<Entity<EntryDetail>>,
}

impl MainWindow {
    pub fn new(
        theme_mode: ThemeMode,
        store: Arc<EntryStore>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let system_is_dark = matches!(
            window.appearance(),
            WindowAppearance::Dark | WindowAppearance::VibrantDark
        );
        let theme = Theme::resolve(theme_mode, system_is_dark);
        tracing::debug!(mode = ?theme.mode, is_dark = theme.is_dark, "resolved theme");

        // Keybindings are scoped to our key context, so the window has to
        // hold focus before the first click.
        let focus_handle = cx.focus_handle();
        window.focus(&focus_handle);

        let weak_self = cx.weak_entity();
        let list = cx.new(|_| {
            let mut list = EntryList::new(&store, theme.colors);
            list.on_open(move |key, _window, cx| {
                let result = weak_self.update(cx, |this, cx| {
                    this.navigate(NavEvent::ShowDetail(key), cx);
                });
                if let Err(err) = result {
                    tracing::warn!(error = %err, "main window dropped before row activation");
                }
            });
            list
        });

        Self {
            theme,
            focus_handle,
            flow: ScreenFlow::new(store),
            list,
            detail: None,
        }
    }

    /// The route currently shown.
    pub fn route(&self) -> &Route {
        self.flow.route()
    }

    /// Apply a navigation event.
    ///
    /// The screen that issued the event may still be mid-update, so it is
    /// never touched here. A detail route gets a fresh detail view.
    fn navigate(&mut self, event: NavEvent, cx: &mut Context<Self>) {
        let route = self.flow.handle(event).clone();

        if let Some(content) = self.flow.detail().cloned() {
            self.detail = Some(self.new_detail(content, cx));
        }

        tracing::info!(route = %route, "navigated");
        cx.notify();
    }

    fn new_detail(&self, content: DetailContent, cx: &mut Context<Self>) -> Entity<EntryDetail> {
        let colors = self.theme.colors;
        let weak_self: WeakEntity<Self> = cx.weak_entity();

        cx.new(|_| {
            let mut detail = EntryDetail::new(content, colors);
            detail.on_back(move |_window, cx| {
                let result = weak_self.update(cx, |this, cx| {
                    this.navigate(NavEvent::ShowList, cx);
                });
                if let Err(err) = result {
                    tracing::warn!(error = %err, "main window dropped before back");
                }
            });
            detail
        })
    }

    fn open_focused(&mut self, cx: &mut Context<Self>) {
        let key = self.list.read(cx).focused_key();
        if let Some(key) = key {
            self.navigate(NavEvent::ShowDetail(key), cx);
        }
    }

    fn move_focus(&mut self, forward: bool, cx: &mut Context<Self>) {
        self.list.update(cx, |list, cx| {
            if forward {
                list.focus_next();
            } else {
                list.focus_previous();
            }
            cx.notify();
        });
    }

    fn toggle_theme(&mut self, cx: &mut Context<Self>) {
        self.theme = self.theme.toggled();
        let colors = self.theme.colors;
        tracing::info!(is_dark = self.theme.is_dark, "theme toggled");

        self.list.update(cx, |list, cx| {
            list.set_colors(colors);
            cx.notify();
        });
        if let Some(detail) = &self.detail {
            detail.update(cx, |detail, cx| {
                detail.set_colors(colors);
                cx.notify();
            });
        }
        cx.notify();
    }

    fn render_header(&self) -> impl IntoElement {
        div()
            .pb(px(16.0))
            .mb(px(8.0))
            .border_b_1()
            .border_color(self.theme.colors.border)
            .text_3xl()
            .font_weight(FontWeight::BOLD)
            .text_color(self.theme.colors.text_primary)
            .child(SharedString::from(APP_TITLE))
    }
}

impl Focusable for MainWindow {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for MainWindow {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = self.theme.colors;
        let detail = if self.route().is_list() {
            None
        } else {
            self.detail.clone()
        };

        div()
            .id("main-window")
            .key_context(APP_CONTEXT)
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(|this, _: &Back, _, cx| {
                if !this.route().is_list() {
                    this.navigate(NavEvent::ShowList, cx);
                }
            }))
            .on_action(cx.listener(|this, _: &NextEntry, _, cx| {
                if this.route().is_list() {
                    this.move_focus(true, cx);
                }
            }))
            .on_action(cx.listener(|this, _: &PreviousEntry, _, cx| {
                if this.route().is_list() {
                    this.move_focus(false, cx);
                }
            }))
            .on_action(cx.listener(|this, _: &OpenEntry, _, cx| {
                if this.route().is_list() {
                    this.open_focused(cx);
                }
            }))
            .on_action(cx.listener(|this, _: &ToggleTheme, _, cx| {
                this.toggle_theme(cx);
            }))
            .size_full()
            .flex()
            .flex_col()
            .p(px(24.0))
            .bg(colors.background)
            .text_color(colors.text_primary)
            .child(self.render_header())
            .when(detail.is_none(), |this| this.child(self.list.clone()))
            .when_some(detail, |this, detail| this.child(detail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::{TestAppContext, VisualTestContext};
    use pretty_assertions::assert_eq;

    use crate::domain::EntryKey;

    fn open_window(cx: &mut TestAppContext) -> (Entity<MainWindow>, &mut VisualTestContext) {
        cx.add_window_view(|window, cx| {
            MainWindow::new(
                ThemeMode::Dark,
                Arc::new(EntryStore::builtin()),
                window,
                cx,
            )
        })
    }

    #[gpui::test]
    fn window_takes_keyboard_focus(cx: &mut TestAppContext) {
        let (view, cx) = open_window(cx);

        cx.update(|window, cx| {
            assert!(view.read(cx).focus_handle.is_focused(window));
        });
    }

    #[gpui::test]
    fn row_click_opens_detail_and_back_returns(cx: &mut TestAppContext) {
        let (view, cx) = open_window(cx);
        let list = view.read_with(cx, |this, _| this.list.clone());

        cx.update(|window, cx| {
            list.update(cx, |list, cx| {
                list.activate(EntryKey::from("Kotlin"), window, cx);
            });
        });

        let detail = view.read_with(cx, |this, cx| {
            assert_eq!(this.route(), &Route::Detail(EntryKey::from("Kotlin")));
            let detail = this.detail.clone().unwrap();
            let entry = detail.read(cx).content().entry().cloned().unwrap();
            assert_eq!(entry.summary, "Newcomer");
            assert_eq!(entry.description, "learning for the challenge just right now");
            detail
        });

        cx.update(|window, cx| {
            detail.update(cx, |detail, cx| detail.back(window, cx));
        });

        view.read_with(cx, |this, _| {
            assert_eq!(this.route(), &Route::List);
        });
    }

    #[gpui::test]
    fn unknown_row_opens_missing_detail(cx: &mut TestAppContext) {
        let (view, cx) = open_window(cx);
        let list = view.read_with(cx, |this, _| this.list.clone());

        cx.update(|window, cx| {
            list.update(cx, |list, cx| {
                list.activate(EntryKey::from("Rust"), window, cx);
            });
        });

        view.read_with(cx, |this, cx| {
            let detail = this.detail.clone().unwrap();
            assert_eq!(
                detail.read(cx).content(),
                &DetailContent::Missing(EntryKey::from("Rust"))
            );
        });
    }
}
