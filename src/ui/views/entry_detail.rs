//! Entry detail view.
//!
//! Shows one entry in full with a Back control. A key that does not resolve
//! renders a not-found state instead, which also offers Back.

use gpui::{
    div, px, App, ClickEvent, Context, FontWeight, IntoElement, ParentElement, Render,
    SharedString, Styled, Window,
};

use crate::app::DetailContent;
use crate::domain::{Entry, EntryKey};
use crate::ui::components::Button;
use crate::ui::theme::ThemeColors;

/// Callback type for the back control.
type OnBackCallback = Box<dyn Fn(&mut Window, &mut App) + 'static>;

/// Entry detail view component.
pub struct EntryDetail {
    colors: ThemeColors,
    content: DetailContent,
    on_back: Option<OnBackCallback>,
}

impl EntryDetail {
    /// Create a detail view for already resolved content.
    pub fn new(content: DetailContent, colors: ThemeColors) -> Self {
        Self {
            colors,
            content,
            on_back: None,
        }
    }

    /// Set the callback for the back control.
    pub fn on_back(&mut self, callback: impl Fn(&mut Window, &mut App) + 'static) {
        self.on_back = Some(Box::new(callback));
    }

    pub fn set_colors(&mut self, colors: ThemeColors) {
        self.colors = colors;
    }

    pub fn content(&self) -> &DetailContent {
        &self.content
    }

    /// Hand control back to whoever set the back callback.
    pub fn back(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if let Some(ref callback) = self.on_back {
            callback(window, cx);
        }
    }

    fn render_entry(&self, entry: &Entry) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap(px(8.0))
            .child(
                div()
                    .text_3xl()
                    .font_weight(FontWeight::BOLD)
                    .text_color(self.colors.text_primary)
                    .child(SharedString::from(entry.name.clone())),
            )
            .child(
                div()
                    .text_color(self.colors.text_primary)
                    .child(SharedString::from(entry.summary.clone())),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(self.colors.text_secondary)
                    .child(SharedString::from(entry.description.clone())),
            )
    }

    fn render_missing(&self, key: &EntryKey) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap(px(8.0))
            .child(
                div()
                    .text_xl()
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(self.colors.error)
                    .child(SharedString::from("Puppy not found")),
            )
            .child(
                div()
                    .text_color(self.colors.text_muted)
                    .child(SharedString::from(format!("There is no puppy named \"{}\".", key))),
            )
    }

    fn render_back_button(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let click_handler = cx.listener(|this, _: &ClickEvent, window, cx| {
            this.back(window, cx);
        });

        div().mt(px(16.0)).child(
            Button::new("detail-back", "Back")
                .colors(self.colors)
                .on_click(click_handler),
        )
    }
}

impl Render for EntryDetail {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let body = match &self.content {
            DetailContent::Found(entry) => self.render_entry(entry).into_any_element(),
            DetailContent::Missing(key) => self.render_missing(key).into_any_element(),
        };

        div()
            .flex_1()
            .flex()
            .flex_col()
            .p(px(24.0))
            .child(body)
            .child(self.render_back_button(cx))
    }
}
