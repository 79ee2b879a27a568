use {
    anyhow::{Context, Result},
    clap::Parser,
    crossterm::{
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
    ratatui::{Terminal, backend::CrosstermBackend},
    std::{fs, io, path::PathBuf},
    tracing::info,
    whatson_cms::{DEFAULT_LOCALE, Event},
    whatson_tui::event_details::{EventDetailsState, run_event_details},
};

#[derive(Parser)]
#[command(
    name = "whatson-tui",
    about = "Terminal viewer for what's-on event details",
    version
)]
struct Cli {
    /// Path to a CMS event entry exported as JSON
    event_file: PathBuf,

    /// Locale used to resolve locale-keyed fields
    #[arg(long, default_value = DEFAULT_LOCALE)]
    locale: String,

    /// Append logs to this file (the terminal is busy drawing the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_tracing(log_file: Option<&PathBuf>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(file))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_ref())?;

    let json = fs::read_to_string(&cli.event_file)
        .with_context(|| format!("Failed to read event file {}", cli.event_file.display()))?;
    let event = Event::from_json(&json).context("Failed to parse event JSON")?;
    let details = event
        .resolve(&cli.locale)
        .with_context(|| format!("Event record is incomplete for locale '{}'", cli.locale))?;

    info!("Loaded event '{}' ({})", details.name, details.id);

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let state = EventDetailsState::new(details);
    let result = run_event_details(&mut terminal, state, || {
        info!("Back requested, leaving event details");
    });

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
