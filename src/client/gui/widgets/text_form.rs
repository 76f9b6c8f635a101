// Free text form backed by a multi-line editor
use iced::widget::{text_editor, Button, Column, Container, Row, Space, Text};
use iced::{Alignment, Element, Length};

use crate::client::gui::style::{BOLD_FONT, EMOJI_FONT, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::client::models::messages::Message;

pub fn view(editor: &text_editor::Content, char_count: usize, can_submit: bool) -> Element<'_, Message> {
    let label = Row::new()
        .spacing(8)
        .align_items(Alignment::Center)
        .push(Text::new("✏️").font(EMOJI_FONT).size(16))
        .push(Text::new("Digite seu texto para análise").size(14).style(TEXT_PRIMARY));

    let input = text_editor(editor)
        .on_action(Message::EditorAction)
        .height(Length::Fixed(160.0));

    let mut counter = Row::new()
        .align_items(Alignment::Center)
        .push(Text::new(format!("{} caracteres", char_count)).size(12).style(TEXT_SECONDARY))
        .push(Space::with_width(Length::Fill));
    if char_count > 0 {
        counter = counter.push(
            Button::new(Text::new("Limpar").size(12))
                .style(iced::theme::Button::Text)
                .on_press(Message::ClearText),
        );
    }

    let mut submit = Button::new(
        Container::new(Text::new("Analisar Texto").font(BOLD_FONT).size(15))
            .width(Length::Fill)
            .center_x(),
    )
    .style(iced::theme::Button::Positive)
    .padding(12)
    .width(Length::Fill);
    if can_submit {
        submit = submit.on_press(Message::SubmitText);
    }

    Column::new()
        .spacing(12)
        .push(label)
        .push(input)
        .push(counter)
        .push(submit)
        .push(
            Container::new(Text::new("O texto será analisado e classificado automaticamente").size(12).style(TEXT_SECONDARY))
                .width(Length::Fill)
                .center_x(),
        )
        .into()
}
