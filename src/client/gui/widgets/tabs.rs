// Tab selector between the upload and text forms
use iced::widget::{Button, Container, Row, Text};
use iced::{Alignment, Element, Length};

use crate::client::gui::style::{tabs_appearance, EMOJI_FONT};
use crate::client::models::messages::Message;
use crate::client::models::ui_state::InputMode;

fn tab_button<'a>(mode: InputMode, icon: &'a str, active: InputMode) -> Element<'a, Message> {
    let style = if mode == active {
        iced::theme::Button::Primary
    } else {
        iced::theme::Button::Text
    };
    Button::new(
        Row::new()
            .spacing(8)
            .align_items(Alignment::Center)
            .push(Text::new(icon).font(EMOJI_FONT).size(16))
            .push(Text::new(mode.label()).size(14)),
    )
    .style(style)
    .padding(12)
    .width(Length::Fill)
    .on_press(Message::TabSelected(mode))
    .into()
}

pub fn view<'a>(active: InputMode) -> Element<'a, Message> {
    Container::new(
        Row::new()
            .spacing(6)
            .push(tab_button(InputMode::Upload, "📤", active))
            .push(tab_button(InputMode::Text, "✏️", active)),
    )
    .padding(6)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(tabs_appearance)))
    .into()
}
