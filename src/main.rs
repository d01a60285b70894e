use clap::Parser;
use color_eyre::eyre::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use rawcull::{App, logging::setup_logging, ui};
use rawcull_config::Settings;
use std::{
    io::{self, IsTerminal},
    path::PathBuf,
    time::Duration,
};
use tracing::{error, info};

/// Cull JPG/NEF photo pairs into the system trash.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Folder to open at startup (overrides `start_folder`)
    folder: Option<PathBuf>,

    /// Settings file to read instead of the default location
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => Settings::load_from(path).await?,
        None => Settings::load().await?,
    };
    if let Some(folder) = cli.folder {
        settings.start_folder = Some(folder);
    }

    let log_path = setup_logging(&settings)?;
    eprintln!("Logging to: {}", log_path.display());

    if let Err(e) = run(settings) {
        error!("Application error: {}", e);
        return Err(e);
    }

    Ok(())
}

fn run(settings: Settings) -> Result<()> {
    if !io::stdout().is_terminal() {
        eprintln!("Error: rawcull must be run in a terminal");
        std::process::exit(1);
    }

    let mut app = App::new(settings);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!("Runtime error: {:?}", err);
        return Err(err);
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let poll_timeout = Duration::from_millis(250);

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(poll_timeout)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.on_key(key);
                if app.should_quit {
                    info!("User requested quit");
                    return Ok(());
                }
            }
        }
    }
}
