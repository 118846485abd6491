use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use solosong::{config, error, info, server, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Start the web server
    Serve(ServeOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ServeOptions {
    /// Port to listen on (overrides PORT)
    #[clap(long)]
    pub port: Option<u16>,

    /// HTML template file to render pages from (overrides PAGE_TEMPLATE)
    #[clap(long)]
    pub template: Option<PathBuf>,

    /// Open the login page in the default browser once the server is up
    #[clap(long)]
    pub open: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve(opt) => serve(opt).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}

async fn serve(opt: ServeOptions) {
    for path in config::load_env() {
        info!("Loaded environment from {}", path.display());
    }

    let mut config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("Invalid configuration: {}", e),
    };

    if let Some(port) = opt.port {
        config.port = port;
    }
    if let Some(template) = opt.template {
        config.page_template = Some(template);
    }

    if opt.open {
        let url = format!("http://localhost:{}/", config.port);
        tokio::spawn(async move {
            // give the listener a moment to bind
            tokio::time::sleep(std::time::Duration::from_millis(500)).await;
            if webbrowser::open(&url).is_err() {
                warning!(
                    "Failed to open browser. Please navigate to the following URL manually:\n{}",
                    url
                )
            }
        });
    }

    if let Err(e) = server::start_api_server(config).await {
        error!("Server stopped: {}", e);
    }
}
