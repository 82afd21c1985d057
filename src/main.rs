use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, path::PathBuf, sync::Mutex, time::Duration};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tracing_subscriber::EnvFilter;

use drivetui::api::DriveClient;
use drivetui::config::{self, Config, API_KEY_ENV};
use drivetui::logic::location::{parse_route, Route};
use drivetui::model::{IconMode, Model};
use drivetui::services::{spawn_api_service, ApiRequest, ApiResponse};

mod app;
mod handlers;
mod ui;

use ui::icons::{IconRenderer, IconTheme};

/// Browse a public Google Drive folder from the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Folder to open: a folder id, /drive/<id>/..., or a copied location URL
    location: Option<String>,

    /// Enable debug logging to the temp dir (drivetui-debug.log)
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl, ^D/U, ^F/B, gg/G)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,
}

pub struct App {
    pub model: Model,

    api_tx: UnboundedSender<ApiRequest>,
    api_rx: UnboundedReceiver<ApiResponse>,
    icon_renderer: IconRenderer,

    open_command: Option<String>,
    clipboard_command: Option<String>,
    share_base_url: Option<String>,
}

impl App {
    fn new(config: &Config, route: Route) -> Result<Self> {
        let client = DriveClient::new(&config.base_url, config.api_key(), config.request_timeout())
            .context("Failed to build HTTP client")?;
        let (api_tx, api_rx) = spawn_api_service(client);

        let icon_mode = IconMode::from_config(&config.icon_mode);

        let mut app = Self {
            model: Model::new(config.vim_mode, icon_mode),
            api_tx,
            api_rx,
            icon_renderer: IconRenderer::new(icon_mode, IconTheme::default()),
            open_command: config.open_command.clone(),
            clipboard_command: config.clipboard_command.clone(),
            share_base_url: config.share_base_url.clone(),
        };

        if let Some(generation) = app.model.open_route(route) {
            app.request_navigation(generation);
        }

        Ok(app)
    }

    /// Send the listing, title and breadcrumb requests for the current location
    fn request_navigation(&mut self, generation: u64) {
        let Some(nav) = &self.model.navigation else {
            return;
        };

        tracing::debug!(location = %nav.location(), generation, "navigating");

        for request in ApiRequest::for_navigation(&nav.drive_id, nav.path(), generation) {
            if self.api_tx.send(request).is_err() {
                tracing::error!("API service is gone; request dropped");
            }
        }
    }
}

/// Install a file logger when `--debug` is given. Nothing is written otherwise.
fn init_tracing(debug: bool) -> Result<Option<PathBuf>> {
    if !debug {
        return Ok(None);
    }

    let path = std::env::temp_dir().join("drivetui-debug.log");
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open debug log {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("drivetui=debug"))
        .context("failed to parse log directive")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(Some(path))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(log_path) = init_tracing(args.debug)? {
        tracing::info!(path = %log_path.display(), "debug logging enabled");
    }

    let config_path = config::find_config_path(args.config.as_deref())?;
    tracing::debug!(?config_path, "loading config");

    let mut config = Config::load(config_path.as_deref())?;
    config.apply_api_key_override(std::env::var(API_KEY_ENV).ok());

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }

    config.validate()?;

    let route = parse_route(args.location.as_deref().unwrap_or(""))
        .context("Invalid location argument")?;

    let mut app = App::new(&config, route)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Leave the last location on the shell so it can be reopened
    if let Some(location) = app.model.location() {
        println!("{}", location);
    }

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        app.model.ui.advance_tick();

        if app.model.should_dismiss_toast() {
            app.model.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        // Process API responses (non-blocking)
        while let Ok(response) = app.api_rx.try_recv() {
            handlers::handle_api_response(app, response);
        }

        // Shorter poll while loading so the spinner animates
        let poll = if app.model.listing.loading {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(250)
        };

        if event::poll(poll)? {
            if let Event::Key(key) = event::read()? {
                handlers::handle_key(app, key);
            }
        }
    }

    Ok(())
}
