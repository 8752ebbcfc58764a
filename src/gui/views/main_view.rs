//! Main view implementation - Light Theme

use crate::gui::app::Message;
use crate::gui::components::{banner, format_selector, url_input};
use crate::gui::theme;
use crate::session::{Banner, Session};
use iced::widget::{button, column, container, row, text, Space};
use iced::{Element, Length};

/// Create the main view, rebuilt from the session after every action
pub fn main_view(
    url_value: &str,
    session: &Session,
    is_fetching: bool,
    is_downloading: bool,
) -> Element<'static, Message> {
    let busy = is_fetching || is_downloading;
    let rejected = matches!(session.banner(), Banner::Warning(_));

    let fetch_button = button(
        text(if is_fetching {
            "Fetching..."
        } else {
            "Fetch Formats"
        })
        .size(16),
    )
    .on_press_maybe((!busy).then_some(Message::FetchPressed))
    .padding([12, 28])
    .style(iced::theme::Button::Custom(Box::new(theme::PrimaryButton)));

    let input_card = container(
        column![
            text("Video Downloader with Resolution Selection")
                .size(26)
                .style(iced::theme::Text::Color(theme::GRAY_800)),
            text("Enter video URL:")
                .size(14)
                .style(iced::theme::Text::Color(theme::GRAY_600)),
            url_input(url_value, rejected, !busy),
            row![Space::with_width(Length::Fill), fetch_button],
        ]
        .spacing(16),
    )
    .padding(28)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(theme::CardContainer)));

    let mut content = column![input_card, banner(session.banner())].spacing(20);

    if !session.options().is_empty() {
        let selector_card = container(format_selector(
            session.options(),
            session.selected(),
            is_downloading,
        ))
        .padding(28)
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(theme::CardContainer)));
        content = content.push(selector_card);
    }

    container(content.padding(32).width(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(
            theme::MainGradientContainer,
        )))
        .into()
}
