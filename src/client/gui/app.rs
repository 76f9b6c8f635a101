use std::sync::Arc;

use iced::widget::text_editor;
use iced::{Application, Command, Element, Subscription, Theme};

use crate::client::config::ClientConfig;
use crate::client::models::app_state::ClassifierAppState;
use crate::client::models::messages::Message;
use crate::client::services::analysis_api::AnalysisApi;

/// `Content::text()` always ends with a line break the user never typed.
fn editor_text(editor: &text_editor::Content) -> String {
    let mut text = editor.text();
    if text.ends_with('\n') {
        text.pop();
    }
    text
}

pub struct AppFlags {
    pub config: ClientConfig,
    pub api: Arc<dyn AnalysisApi>,
}

pub struct ClassifierApp {
    pub state: ClassifierAppState,
    /// Multi-line buffer behind the text tab; mirrored into `state.text_form`.
    pub editor: text_editor::Content,
}

impl Application for ClassifierApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = AppFlags;

    fn new(flags: AppFlags) -> (Self, Command<Message>) {
        log::info!("[APP_START] analysis endpoint: {}", flags.config.api_url);
        let app = ClassifierApp {
            state: ClassifierAppState::new(flags.api, &flags.config),
            editor: text_editor::Content::new(),
        };
        (app, Command::none())
    }

    fn title(&self) -> String {
        "Classificador de Emails".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::EditorAction(action) => {
                // read-only while the text lane is in flight
                if !self.state.text_pulsing() {
                    self.editor.perform(action);
                    self.state.text_form.set_text(editor_text(&self.editor));
                }
                Command::none()
            }
            Message::ClearText => {
                if !self.state.text_pulsing() {
                    self.editor = text_editor::Content::new();
                    self.state.text_form.clear();
                }
                Command::none()
            }
            other => self.state.update(other),
        }
    }

    fn view(&self) -> Element<Message> {
        crate::client::gui::views::home::view(&self.state, &self.editor)
    }

    fn subscription(&self) -> Subscription<Message> {
        // Drag and drop onto the window
        iced::event::listen_with(|event, _status| match event {
            iced::Event::Window(_, iced::window::Event::FileHovered(_)) => Some(Message::FileHovered),
            iced::Event::Window(_, iced::window::Event::FilesHoveredLeft) => Some(Message::FileHoverLeft),
            iced::Event::Window(_, iced::window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
            _ => None,
        })
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::test_support::MockAnalysisApi;
    use iced::widget::text_editor::{Action, Edit};

    fn app() -> ClassifierApp {
        let api = Arc::new(MockAnalysisApi::new());
        ClassifierApp {
            state: ClassifierAppState::new(api, &ClientConfig::default()),
            editor: text_editor::Content::new(),
        }
    }

    fn type_text(app: &mut ClassifierApp, text: &str) {
        for c in text.chars() {
            let _ = app.update(Message::EditorAction(Action::Edit(Edit::Insert(c))));
        }
    }

    #[test]
    fn typed_text_reaches_form_without_trailing_newline() {
        let mut app = app();
        type_text(&mut app, "hello");
        assert_eq!(app.state.text_form.text, "hello");
        assert_eq!(app.state.text_form.char_count(), 5);

        for _ in 0..5 {
            let _ = app.update(Message::EditorAction(Action::Edit(Edit::Backspace)));
        }
        assert_eq!(app.state.text_form.text, "");
        assert_eq!(app.state.text_form.char_count(), 0);
        assert!(!app.state.can_submit_text());
    }

    #[test]
    fn clear_text_empties_editor_and_form() {
        let mut app = app();
        type_text(&mut app, "oi");
        let _ = app.update(Message::ClearText);
        assert_eq!(app.state.text_form.text, "");
        assert_eq!(editor_text(&app.editor), "");
    }
}
