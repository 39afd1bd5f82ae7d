use anyhow::{Context, Result};
use jira_client::{
    CacheMode, CachedIssueSource, Credentials, IssueCache, IssueSource, JiraHttpClient,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    crossterm::{
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use zilla_config::{AppConfig, CachePolicy};
use zilla_theme::Theme;

mod actions;
mod dispatcher;
mod input;
mod logger;
mod middleware;
mod reducers;
mod runner;
mod state;
mod store;
mod task;
mod view_models;
mod views;

use actions::{Action, GlobalAction};
use middleware::{KeyboardMiddleware, LoggingMiddleware};
use runner::{TaskRunner, TokioTaskRunner};
use state::Session;
use store::Store;

/// How long the loop waits for queued actions before redrawing
const TICK_RATE: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    let dotenv = dotenvy::dotenv();

    let log_file = logger::init()?;
    log::info!("Starting zilla, logging to {}", log_file.display());
    match dotenv {
        Ok(path) => log::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => log::warn!("Failed to load .env file: {}", e),
    }

    let config = AppConfig::load();
    if !config.jira.has_credentials() {
        log::warn!("No Jira credentials configured, every fetch will fail");
    }

    let source = build_issue_source(&config)?;
    let runner = TokioTaskRunner::new(source, Duration::from_millis(config.spinner_interval_ms))
        .context("Failed to start task runtime")?;

    // Initialize store with middleware
    let mut store = Store::new(Session::default(), runner);

    // Add middleware in order (they execute in this order)
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run_app(&mut terminal, &mut store, &Theme::default());

    // Restore terminal
    let restored = restore_terminal(&mut terminal);
    store.into_runner().shutdown();

    result?;
    restored?;
    log::info!("Exiting zilla");
    Ok(())
}

/// Build the HTTP issue source, behind the cache when caching is enabled
fn build_issue_source(config: &AppConfig) -> Result<Arc<dyn IssueSource>> {
    let jira = &config.jira;
    let credentials = Credentials::from_parts(&jira.username, &jira.apikey, &jira.access_token);
    let base_url = jira.base_url();
    if let Some(url) = &base_url {
        log::info!("Using Jira instance at {}", url);
    }
    let client =
        JiraHttpClient::new(base_url, credentials).context("Failed to build Jira HTTP client")?;

    if !config.cache.enabled {
        log::debug!("Issue cache disabled");
        return Ok(Arc::new(client));
    }

    let cache = match zilla_config::issue_cache_path() {
        Ok(path) => IssueCache::open(path, config.cache.ttl_secs),
        Err(e) => {
            log::warn!("Issue cache directory unavailable, caching in memory: {:#}", e);
            IssueCache::in_memory(config.cache.ttl_secs)
        }
    };

    let mode = cache_mode(config.cache.mode);
    log::debug!("Issue cache mode: {:?}", mode);
    Ok(Arc::new(CachedIssueSource::new(
        client,
        Arc::new(Mutex::new(cache)),
        mode,
    )))
}

fn cache_mode(policy: CachePolicy) -> CacheMode {
    match policy {
        CachePolicy::ReadWrite => CacheMode::ReadWrite,
        CachePolicy::WriteOnly => CacheMode::WriteOnly,
        CachePolicy::ReadOnly => CacheMode::ReadOnly,
    }
}

fn restore_terminal<B: Backend + io::Write>(terminal: &mut Terminal<B>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_app<B: Backend, R: TaskRunner>(
    terminal: &mut Terminal<B>,
    store: &mut Store<R>,
    theme: &Theme,
) -> Result<()> {
    input::spawn_input_thread(store.dispatcher().clone())
        .context("Failed to start input thread")?;

    let size = terminal.size()?;
    store.dispatch(Action::Global(GlobalAction::Resize {
        width: size.width,
        height: size.height,
    }));

    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            views::render(store.state(), theme, area, frame);
        })?;

        if !store.state().running {
            break;
        }

        store.process_pending(TICK_RATE);
    }

    Ok(())
}
