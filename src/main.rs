use std::{path::PathBuf, sync::Arc};

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotify_poster::{
    cli,
    config::{self, Config},
    error,
    spotify::SpotifyClient,
    warning,
};

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
  args_conflicts_with_subcommands = true // a track URL cannot be combined with `serve`
)]
struct Cli {
    /// Spotify track URL to download the album poster for
    url: Option<String>,

    /// Directory the poster is written to
    #[clap(long, default_value = ".")]
    output_dir: PathBuf,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Serve posters over HTTP at GET /poster?url=<track-url>
    Serve(ServeOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ServeOptions {
    /// Address to bind, e.g. 0.0.0.0:8080 (defaults to SERVER_ADDRESS)
    #[clap(long)]
    addr: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment file. Err: {}", e);
    }

    let cli = Cli::parse();

    if let Some(Command::Completions(opt)) = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    let config = Arc::new(Config::from_env());
    if config.uses_placeholder_credentials() {
        warning!(
            "Using placeholder Spotify credentials. Set {} and {}.",
            config::CLIENT_ID_VAR,
            config::CLIENT_SECRET_VAR
        );
    }

    match (cli.command, cli.url) {
        (Some(Command::Serve(opt)), _) => {
            if let Err(e) = cli::serve(config, opt.addr).await {
                error!("Server stopped. Err: {}", e);
            }
        }
        (Some(Command::Completions(_)), _) => {}
        (None, Some(url)) => {
            let client = SpotifyClient::new(config);
            if let Err(e) = cli::download(&client, &url, &cli.output_dir).await {
                error!("Failed to download poster: {}", e);
            }
        }
        (None, None) => error!("Missing track URL. Run with --help for usage."),
    }
}
