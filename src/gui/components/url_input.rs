//! URL input component

use crate::gui::app::Message;
use crate::gui::theme;
use iced::widget::{button, row, text, text_input, tooltip};
use iced::{Alignment, Element, Length};

/// Create a URL input field with paste and clear buttons
///
/// Pressing Enter in the field triggers a fetch, same as the button.
pub fn url_input(value: &str, invalid: bool, enabled: bool) -> Element<'static, Message> {
    let mut input = text_input("e.g., https://www.youtube.com/watch?v=dQw4w9WgXcQ", value)
        .padding(14)
        .width(Length::Fill)
        .style(iced::theme::TextInput::Custom(Box::new(theme::InputStyle {
            invalid,
        })));
    if enabled {
        input = input
            .on_input(Message::UrlInputChanged)
            .on_submit(Message::FetchPressed);
    }

    row![
        input,
        tooltip(
            button(text("Paste").size(14))
                .on_press_maybe(enabled.then_some(Message::PasteFromClipboard))
                .padding([8, 12])
                .style(iced::theme::Button::Custom(Box::new(theme::IconButton))),
            "Paste from clipboard",
            tooltip::Position::Bottom,
        ),
        button(text("Clear").size(14))
            .on_press_maybe(enabled.then_some(Message::ClearUrlInput))
            .padding([8, 12])
            .style(iced::theme::Button::Custom(Box::new(theme::IconButton))),
    ]
    .spacing(12)
    .align_items(Alignment::Center)
    .into()
}
