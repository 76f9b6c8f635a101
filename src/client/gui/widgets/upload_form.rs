// File upload form: drop zone, picker button and selected file card
use iced::widget::{Button, Column, Container, Row, Space, Text};
use iced::{Alignment, Element, Length};

use crate::client::gui::style::{drop_zone_appearance, BOLD_FONT, EMOJI_FONT, TEXT_PRIMARY, TEXT_SECONDARY, WARNING};
use crate::client::models::messages::Message;
use crate::client::models::ui_state::{SelectedFile, UploadForm};

fn file_card<'a>(file: &'a SelectedFile, loading: bool, max_upload_mb: u64) -> Element<'a, Message> {
    let mut remove = Button::new(Text::new("✖").size(14)).style(iced::theme::Button::Text);
    if !loading {
        remove = remove.on_press(Message::RemoveFile);
    }

    let mut info = Column::new()
        .spacing(2)
        .push(Text::new(file.name.as_str()).font(BOLD_FONT).size(14).style(TEXT_PRIMARY))
        .push(Text::new(file.formatted_size()).size(12).style(TEXT_SECONDARY));
    if file.exceeds_size_hint(max_upload_mb) {
        info = info.push(Text::new(format!("Acima do limite recomendado de {}MB", max_upload_mb)).size(12).style(WARNING));
    }

    Row::new()
        .spacing(10)
        .align_items(Alignment::Center)
        .push(Text::new("📄").font(EMOJI_FONT).size(18))
        .push(info)
        .push(Space::with_width(Length::Fill))
        .push(remove)
        .into()
}

pub fn view(form: &UploadForm, loading: bool, can_submit: bool, max_upload_mb: u64) -> Element<'_, Message> {
    let (title, subtitle) = match form.file {
        Some(_) => ("Arquivo selecionado", "Clique para selecionar outro arquivo"),
        None => ("Arraste e solte seu arquivo aqui", "ou clique para procurar em seu dispositivo"),
    };

    let mut browse = Button::new(Text::new("Procurar arquivo").size(14)).style(iced::theme::Button::Secondary).padding([8, 16]);
    if !loading {
        browse = browse.on_press(Message::BrowseFile);
    }

    let mut zone = Column::new()
        .spacing(8)
        .align_items(Alignment::Center)
        .push(Text::new("📤").font(EMOJI_FONT).size(28))
        .push(Text::new(title).size(18).style(TEXT_PRIMARY))
        .push(Text::new(subtitle).size(14).style(TEXT_SECONDARY))
        .push(browse)
        .push(Text::new(format!("Suporta: .txt, .pdf (Máx. {}MB)", max_upload_mb)).size(12).style(TEXT_SECONDARY));
    if let Some(file) = &form.file {
        zone = zone.push(Space::with_height(Length::Fixed(8.0))).push(file_card(file, loading, max_upload_mb));
    }

    let dragging = form.dragging;
    let has_file = form.file.is_some();
    let drop_zone = Container::new(zone)
        .padding(24)
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(move |_: &iced::Theme| drop_zone_appearance(dragging, has_file))));

    let mut submit = Button::new(
        Container::new(Text::new("Enviar Arquivo").font(BOLD_FONT).size(15))
            .width(Length::Fill)
            .center_x(),
    )
    .style(iced::theme::Button::Primary)
    .padding(12)
    .width(Length::Fill);
    if can_submit {
        submit = submit.on_press(Message::SubmitFile);
    }

    Column::new().spacing(20).push(drop_zone).push(submit).into()
}
