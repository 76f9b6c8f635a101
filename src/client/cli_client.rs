use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use classificador_emails::client::config::ClientConfig;
use classificador_emails::client::models::ui_state::SelectedFile;
use classificador_emails::client::services::analysis_api::{AnalysisApi, HttpAnalysisApi};
use classificador_emails::client::services::notification::{ConsoleNotifier, Notifier};
use classificador_emails::client::services::query_cache::QueryClient;
use classificador_emails::client::services::submission::{FileSubmitter, TextSubmitter};

#[derive(Parser, Debug)]
#[command(name = "classificador-cli")]
#[command(about = "Classifica o conteúdo de um email como Produtivo ou Improdutivo")]
struct Args {
    /// Arquivo .txt ou .pdf com o email
    #[arg(short, long, conflicts_with = "text", required_unless_present = "text")]
    file: Option<PathBuf>,
    /// Texto do email
    #[arg(short, long)]
    text: Option<String>,
    /// Sobrescreve API_URL do ambiente
    #[arg(long)]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut config = ClientConfig::from_env();
    if let Some(url) = args.api_url {
        config.api_url = url;
    }
    config.init_logging();

    let api: Arc<dyn AnalysisApi> = Arc::new(HttpAnalysisApi::new(config.analysis_endpoint()?)?);
    let notifier: Arc<dyn Notifier> = Arc::new(ConsoleNotifier);
    let queries = Arc::new(QueryClient::new());

    let outcome = match (args.file, args.text) {
        (Some(path), _) => {
            let content = tokio::fs::read(&path)
                .await
                .with_context(|| format!("Não foi possível ler {}", path.display()))?;
            let Some(file) = SelectedFile::from_parts(&path, content) else {
                anyhow::bail!("Formato não suportado: {} (use .txt ou .pdf)", path.display());
            };
            if file.exceeds_size_hint(config.max_upload_mb) {
                notifier.show_warning(&format!(
                    "{} tem {} e pode ser recusado pelo servidor (máx. {}MB)",
                    file.name,
                    file.formatted_size(),
                    config.max_upload_mb
                ));
            }
            FileSubmitter::new(api, notifier.clone(), queries).submit(file.into()).await
        }
        (None, Some(text)) => {
            if text.trim().is_empty() {
                anyhow::bail!("O texto está vazio");
            }
            TextSubmitter::new(api, notifier.clone(), queries).submit(text).await
        }
        (None, None) => anyhow::bail!("Informe --file ou --text"),
    };

    let result = outcome?;
    println!("Categoria: {}", result.category);
    println!();
    println!("{}", result.details);
    Ok(())
}
