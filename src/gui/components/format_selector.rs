//! Format pick list and download trigger

use crate::gui::app::Message;
use crate::gui::theme;
use crate::session::FormatOption;
use iced::widget::{button, column, pick_list, row, text, Space};
use iced::{Alignment, Element, Length};

/// Render the format choice for the fetched media
///
/// Options arrive already ordered by resolution; the pick list keeps that
/// order and reports the chosen option, id included.
pub fn format_selector(
    options: &[FormatOption],
    selected: Option<&FormatOption>,
    is_downloading: bool,
) -> Element<'static, Message> {
    let list = pick_list(
        options.to_vec(),
        selected.cloned(),
        Message::FormatSelected,
    )
    .placeholder("Select a format")
    .text_size(14)
    .padding([8, 12])
    .width(Length::Fill);

    let download = button(
        text(if is_downloading {
            "Downloading video, please wait..."
        } else {
            "Download Video"
        })
        .size(16),
    )
    .on_press_maybe((selected.is_some() && !is_downloading).then_some(Message::DownloadPressed))
    .padding([12, 28])
    .style(iced::theme::Button::Custom(Box::new(theme::PrimaryButton)));

    column![
        text("Select a format to download:")
            .size(14)
            .style(iced::theme::Text::Color(theme::GRAY_600)),
        list,
        row![Space::with_width(Length::Fill), download].align_items(Alignment::Center),
    ]
    .spacing(12)
    .into()
}
