//! Entry list view.
//!
//! One row per entry: the name, a one-line summary and up to two lines of
//! description. Clicking a row (or pressing enter on the focused one) asks
//! the window to open that entry.

use gpui::{
    div, px, App, ClickEvent, Context, FontWeight, InteractiveElement, IntoElement,
    ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::domain::{Entry, EntryKey};
use crate::services::EntryStore;
use crate::ui::theme::ThemeColors;

/// Callback type for row activation.
type OnOpenCallback = Box<dyn Fn(EntryKey, &mut Window, &mut App) + 'static>;

/// Lines of description shown per row before the ellipsis.
const DESCRIPTION_LINES: usize = 2;

/// Entry list view component.
pub struct EntryList {
    colors: ThemeColors,
    rows: Vec<Entry>,
    focused_index: usize,
    on_open: Option<OnOpenCallback>,
}

impl EntryList {
    /// Create a list showing every entry in `store`.
    pub fn new(store: &EntryStore, colors: ThemeColors) -> Self {
        Self {
            colors,
            rows: store.entries().cloned().collect(),
            focused_index: 0,
            on_open: None,
        }
    }

    /// Set the callback for when a row is activated.
    pub fn on_open(&mut self, callback: impl Fn(EntryKey, &mut Window, &mut App) + 'static) {
        self.on_open = Some(Box::new(callback));
    }

    pub fn set_colors(&mut self, colors: ThemeColors) {
        self.colors = colors;
    }

    /// The entries shown, in display order.
    pub fn rows(&self) -> &[Entry] {
        &self.rows
    }

    pub fn focused_index(&self) -> usize {
        self.focused_index
    }

    /// Key of the focused row, if the list has any rows.
    pub fn focused_key(&self) -> Option<EntryKey> {
        self.rows.get(self.focused_index).map(Entry::key)
    }

    /// Move focus to the next row.
    pub fn focus_next(&mut self) {
        if self.focused_index + 1 < self.rows.len() {
            self.focused_index += 1;
        }
    }

    /// Move focus to the previous row.
    pub fn focus_previous(&mut self) {
        self.focused_index = self.focused_index.saturating_sub(1);
    }

    /// Focus the row for `key`. Unknown keys leave focus unchanged.
    pub fn focus_key(&mut self, key: &EntryKey) {
        if let Some(idx) = self.rows.iter().position(|e| e.name == key.as_str()) {
            self.focused_index = idx;
        }
    }

    /// Focus the row for `key` and hand it to the open callback.
    pub fn activate(&mut self, key: EntryKey, window: &mut Window, cx: &mut Context<Self>) {
        self.focus_key(&key);
        cx.notify();
        if let Some(ref callback) = self.on_open {
            callback(key, window, cx);
        }
    }

    fn render_empty_state(&self) -> impl IntoElement {
        div().flex_1().flex().items_center().justify_center().child(
            div()
                .text_color(self.colors.text_muted)
                .child(SharedString::from("No puppies yet")),
        )
    }

    fn render_row(&self, entry: &Entry, index: usize, cx: &mut Context<Self>) -> impl IntoElement {
        let is_focused = index == self.focused_index;
        let bg = if is_focused {
            self.colors.surface
        } else {
            gpui::Hsla::transparent_black()
        };
        let hover_bg = self.colors.surface_elevated;

        let key = entry.key();
        let click_handler = cx.listener(move |this, _event: &ClickEvent, window, cx| {
            this.activate(key.clone(), window, cx);
        });

        div()
            .id(SharedString::from(format!("entry-{}", index)))
            .flex()
            .items_center()
            .gap(px(16.0))
            .px(px(12.0))
            .py(px(12.0))
            .rounded(px(8.0))
            .bg(bg)
            .border_b_1()
            .border_color(self.colors.border)
            .cursor_pointer()
            .hover(move |style| style.bg(hover_bg))
            .on_click(click_handler)
            .child(
                div()
                    .flex_none()
                    .text_2xl()
                    .font_weight(FontWeight::BOLD)
                    .text_color(self.colors.text_primary)
                    .child(SharedString::from(entry.name.clone())),
            )
            .child(
                div()
                    .flex_1()
                    .min_w_0()
                    .flex()
                    .flex_col()
                    .gap(px(2.0))
                    .child(
                        div()
                            .text_color(self.colors.text_primary)
                            .truncate()
                            .child(SharedString::from(entry.summary.clone())),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(self.colors.text_secondary)
                            .line_clamp(DESCRIPTION_LINES)
                            .child(SharedString::from(entry.description.clone())),
                    ),
            )
    }
}

impl Render for EntryList {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let rows: Vec<_> = self
            .rows
            .iter()
            .enumerate()
            .map(|(idx, entry)| self.render_row(entry, idx, cx))
            .collect();

        let container = div()
            .id("entry-list")
            .flex_1()
            .flex()
            .flex_col()
            .gap(px(4.0))
            .overflow_y_scroll();

        if self.rows.is_empty() {
            container.child(self.render_empty_state())
        } else {
            container.children(rows)
        }
    }
}
