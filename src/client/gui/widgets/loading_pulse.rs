// Loading indicator driven by the submission pulses
use iced::widget::{Container, Row, Space, Text};
use iced::{Alignment, Element, Length};

use crate::client::gui::style::{EMOJI_FONT, PRIMARY};
use crate::client::models::messages::Message;

pub fn view<'a>(visible: bool) -> Element<'a, Message> {
    if !visible {
        return Space::new(Length::Fill, Length::Fixed(0.0)).into();
    }
    Container::new(
        Row::new()
            .spacing(10)
            .align_items(Alignment::Center)
            .push(Text::new("⏳").font(EMOJI_FONT).size(22))
            .push(Text::new("Analisando seu email...").size(16).style(PRIMARY)),
    )
    .padding(16)
    .width(Length::Fill)
    .center_x()
    .into()
}
