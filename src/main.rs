use std::sync::Arc;

use classificador_emails::client::config::ClientConfig;
use classificador_emails::client::gui::app::{AppFlags, ClassifierApp};
use classificador_emails::client::services::analysis_api::HttpAnalysisApi;
use iced::Application;

fn main() -> anyhow::Result<()> {
    // from_env also picks up a local .env
    let config = ClientConfig::from_env();
    config.init_logging();

    let api = Arc::new(HttpAnalysisApi::new(config.analysis_endpoint()?)?);
    log::info!("Using analysis endpoint {}", api.endpoint());

    let settings = iced::Settings {
        window: iced::window::Settings {
            size: iced::Size::new(860.0, 920.0),
            ..Default::default()
        },
        ..iced::Settings::with_flags(AppFlags { config, api })
    };
    ClassifierApp::run(settings)?;
    Ok(())
}
