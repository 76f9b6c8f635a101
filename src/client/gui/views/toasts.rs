use iced::widget::{Button, Column, Container, Row, Space, Text};
use iced::{Alignment, Element, Length};

use crate::client::gui::style::{toast_appearance, EMOJI_FONT};
use crate::client::models::messages::Message;
use crate::client::services::notification::Toast;

fn toast_view<'a>(toast: &Toast) -> Element<'a, Message> {
    let level = toast.level;
    Container::new(
        Row::new()
            .spacing(12)
            .align_items(Alignment::Center)
            .push(Text::new(toast.emoji()).font(EMOJI_FONT).size(18).style(iced::Color::WHITE))
            .push(Text::new(toast.message.clone()).size(15).style(iced::Color::WHITE))
            .push(Space::with_width(Length::Fill))
            .push(
                Button::new(Text::new("✖").size(12).style(iced::Color::WHITE))
                    .style(iced::theme::Button::Text)
                    .on_press(Message::DismissToast(toast.id)),
            ),
    )
    .padding([10, 14])
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(move |_: &iced::Theme| toast_appearance(level))))
    .into()
}

/// Stack of active toasts, oldest on top.
pub fn toasts_view<'a>(toasts: &[Toast]) -> Element<'a, Message> {
    if toasts.is_empty() {
        return Space::new(Length::Fill, Length::Fixed(0.0)).into();
    }
    toasts
        .iter()
        .fold(Column::new().spacing(8), |col, toast| col.push(toast_view(toast)))
        .into()
}
