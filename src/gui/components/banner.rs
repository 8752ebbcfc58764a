//! Status banner shown after each action

use crate::gui::app::Message;
use crate::gui::theme;
use crate::session::Banner;
use iced::widget::{container, text};
use iced::{Element, Length};

pub fn banner(banner: &Banner) -> Element<'static, Message> {
    container(text(banner.message().to_string()).size(14))
        .padding([10, 14])
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(
            theme::BannerContainer::for_banner(banner),
        )))
        .into()
}
