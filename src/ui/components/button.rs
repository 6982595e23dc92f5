//! Button component.

use gpui::{
    div, prelude::FluentBuilder, px, App, ClickEvent, ElementId, FontWeight, InteractiveElement,
    IntoElement, ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled,
    Window,
};

use crate::ui::theme::ThemeColors;

type ClickHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// A clickable text button filled with the accent color.
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    colors: ThemeColors,
    on_click: Option<ClickHandler>,
}

impl Button {
    /// Create a new button.
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            colors: ThemeColors::dark(),
            on_click: None,
        }
    }

    /// Use the given palette instead of the dark default.
    pub fn colors(mut self, colors: ThemeColors) -> Self {
        self.colors = colors;
        self
    }

    /// Set the click handler.
    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let hover_bg = self.colors.accent.opacity(0.85);

        div()
            .id(self.id)
            .px(px(16.0))
            .py(px(8.0))
            .rounded(px(6.0))
            .bg(self.colors.accent)
            .text_color(self.colors.accent_text)
            .font_weight(FontWeight::MEDIUM)
            .cursor_pointer()
            .hover(move |style| style.bg(hover_bg))
            .when_some(self.on_click, |this, handler| {
                this.on_click(move |event, window, cx| handler(event, window, cx))
            })
            .child(self.label)
    }
}
