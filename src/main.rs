use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use cardsearch::HttpSuggestionClient;
use cardsearch::catalog::load_catalog;
use cardsearch::config::{load_config, load_config_from_path};
use cardsearch::tui::App;

/// Incremental search over a card catalog with live suggestions
#[derive(Parser, Debug)]
#[command(name = "cardsearch")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Catalog file: a JSON array of {id, name} records
    #[arg(value_hint = clap::ValueHint::FilePath)]
    catalog: PathBuf,

    /// Base URL of the suggestion service (overrides the config file)
    #[arg(long)]
    base_url: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let cli = Cli::parse();

    #[cfg(debug_assertions)]
    init_logging();

    let loaded = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };
    let mut search = loaded.config.search;
    if let Some(base_url) = cli.base_url {
        search.base_url = base_url;
    }

    // Fail before touching the terminal so errors print normally
    let items = load_catalog(&cli.catalog)?;
    let client = HttpSuggestionClient::from_config(&search)?;

    let mut app = App::new(&search, items);
    app.notice = loaded.warning;
    app.connect(Arc::new(client))?;

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    let result = run(terminal, app);

    // Restore terminal (automatic cleanup)
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        // Only process key press events (avoid duplicates)
        if event::poll(app.poll_timeout(Instant::now()))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key_event(key, Instant::now());
        }

        app.tick(Instant::now());

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Debug builds log to a file in the temp directory; stderr belongs to the UI
#[cfg(debug_assertions)]
fn init_logging() {
    use std::io::Write;

    let path = std::env::temp_dir().join("cardsearch-debug.log");
    let Ok(file) = std::fs::File::create(&path) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}
