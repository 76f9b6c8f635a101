use iced::widget::{text_editor, Column, Container, Scrollable, Space, Text};
use iced::{Alignment, Element, Length};

use crate::client::gui::style::{bg_main_appearance, card_appearance, BOLD_FONT, EMOJI_FONT, PRIMARY_DARK, TEXT_SECONDARY};
use crate::client::gui::views::toasts::toasts_view;
use crate::client::gui::widgets::{loading_pulse, response_display, tabs, text_form, upload_form};
use crate::client::models::app_state::ClassifierAppState;
use crate::client::models::messages::Message;
use crate::client::models::ui_state::InputMode;

fn header<'a>(analyses_completed: u64) -> Element<'a, Message> {
    let mut col = Column::new()
        .spacing(8)
        .align_items(Alignment::Center)
        .push(Text::new("📧").font(EMOJI_FONT).size(36))
        .push(Text::new("Classificador de Emails").font(BOLD_FONT).size(28).style(PRIMARY_DARK))
        .push(Text::new("Automatize a análise de seus emails com IA").size(15).style(TEXT_SECONDARY));
    if analyses_completed > 0 {
        col = col.push(Text::new(format!("Análises nesta sessão: {}", analyses_completed)).size(12).style(TEXT_SECONDARY));
    }
    col.into()
}

fn footer<'a>() -> Element<'a, Message> {
    Column::new()
        .spacing(4)
        .align_items(Alignment::Center)
        .push(
            Text::new("Utilize esta ferramenta para classificar automaticamente os conteúdos dos seus emails em categorias como \"Produtivo\" ou \"Improdutivo\"")
                .size(12)
                .style(TEXT_SECONDARY),
        )
        .push(Text::new("Suporte a arquivos .txt, .pdf e texto digitado").size(12).style(TEXT_SECONDARY))
        .into()
}

pub fn view<'a>(state: &'a ClassifierAppState, editor: &'a text_editor::Content) -> Element<'a, Message> {
    let form = match state.active_tab {
        InputMode::Upload => upload_form::view(&state.upload_form, state.file_pulsing(), state.can_submit_file(), state.max_upload_mb),
        InputMode::Text => text_form::view(editor, state.text_form.char_count(), state.can_submit_text()),
    };

    let card = Container::new(
        Column::new()
            .spacing(20)
            .push(header(state.analyses_completed))
            .push(tabs::view(state.active_tab))
            .push(form)
            .push(loading_pulse::view(state.is_loading()))
            .push(response_display::view(state.response.as_ref())),
    )
    .padding(32)
    .max_width(760.0)
    .style(iced::theme::Container::Custom(Box::new(card_appearance)));

    let content = Column::new()
        .spacing(16)
        .padding(24)
        .align_items(Alignment::Center)
        .push(toasts_view(&state.toasts.snapshot()))
        .push(card)
        .push(Space::with_height(Length::Fixed(8.0)))
        .push(footer());

    Container::new(Scrollable::new(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
        .into()
}
