// Result panel: category badge plus the service's detail text
use iced::widget::{Button, Column, Container, Row, Space, Text};
use iced::{Alignment, Element, Length};

use crate::client::gui::style::{badge_appearance, card_appearance, BOLD_FONT, TEXT_PRIMARY};
use crate::client::models::analysis::AnalysisResult;
use crate::client::models::messages::Message;

pub fn view(response: Option<&AnalysisResult>) -> Element<'_, Message> {
    let Some(response) = response else {
        return Space::new(Length::Fill, Length::Fixed(0.0)).into();
    };

    let badge_style = response.badge_style();
    let badge = Container::new(Text::new(response.category.as_str()).font(BOLD_FONT).size(14))
        .padding([4, 12])
        .style(iced::theme::Container::Custom(Box::new(move |_: &iced::Theme| badge_appearance(badge_style))));

    let clear = Button::new(Text::new("✖ Limpar").size(14))
        .style(iced::theme::Button::Secondary)
        .padding([6, 12])
        .on_press(Message::ClearResponse);

    let header = Row::new()
        .align_items(Alignment::Center)
        .push(badge)
        .push(Space::with_width(Length::Fill))
        .push(clear);

    Container::new(
        Column::new()
            .spacing(16)
            .push(header)
            .push(Text::new(response.details.as_str()).size(16).style(TEXT_PRIMARY)),
    )
    .padding(24)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(card_appearance)))
    .into()
}
