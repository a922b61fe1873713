use terra::adapters::FileThemeStore;
use terra::api::RestCountriesClient;
use terra::app::{App, AppMessage};
use terra::config::AppConfig;
use terra::terminal::{setup_panic_hook, TerminalManager};
use terra::traits::ThemeStore;
use terra::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Arc;
use tokio::sync::mpsc;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    // Handle --version flag before any initialization
    if std::env::args().any(|arg| arg == "--version") {
        println!("terra {}", VERSION);
        std::process::exit(0);
    }

    color_eyre::install()?;

    // Panic hook restores the terminal before the panic message prints
    setup_panic_hook();

    // File logging is opt-in; stdout belongs to the TUI
    init_tracing()?;

    let config = AppConfig::from_env();

    let theme_store: Box<dyn ThemeStore> = match &config.theme_path {
        Some(path) => Box::new(FileThemeStore::with_path(path.clone())),
        None => Box::new(FileThemeStore::new()?),
    };

    let client = Arc::new(RestCountriesClient::with_base_url(
        config.api_base_url.clone(),
    ));

    let mut app = App::new(client, theme_store);

    // Tokio runtime for the whole application
    let runtime = tokio::runtime::Runtime::new()?;

    // Setup terminal
    let mut term_manager = TerminalManager::new()?;

    // Capture initial terminal dimensions
    let size = term_manager.size()?;
    app.update_terminal_dimensions(size.width, size.height);

    // Kick off the country-collection fetch inside the runtime
    {
        let _guard = runtime.enter();
        app.initialize();
    }

    // Main event loop
    let result = runtime.block_on(run_app(term_manager.terminal(), &mut app));

    // Restore terminal
    term_manager.restore()?;

    result
}

/// Initialize file-based tracing when `TERRA_LOG` is set.
///
/// The filter value follows `tracing_subscriber::EnvFilter` syntax, e.g.
/// `terra=debug`. Output goes to `terra.log` in the temp directory so it
/// never interleaves with the TUI.
fn init_tracing() -> Result<()> {
    let Ok(filter) = std::env::var("TERRA_LOG") else {
        return Ok(());
    };
    if filter.is_empty() {
        return Ok(());
    }

    let log_path = std::env::temp_dir().join("terra.log");
    let log_file = std::fs::File::create(&log_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();

    tracing::info!(path = %log_path.display(), "logging initialized");
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Async stream of keyboard events
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (select! needs ownership)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        // Draw only when state changed (dirty flag)
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, &mut *app);
            })?;
            app.needs_redraw = false;
        }

        // 16ms tick keeps the cursor blink and loading states fresh
        let timeout = tokio::time::sleep(std::time::Duration::from_millis(16));

        tokio::select! {
            _ = timeout => {}

            // Keyboard and resize events
            event_result = event_stream.next() => {
                if let Some(Ok(event)) = event_result {
                    match event {
                        Event::Resize(width, height) => {
                            app.update_terminal_dimensions(width, height);
                            continue;
                        }
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            app.handle_key(key);
                        }
                        _ => {}
                    }
                }
            }

            // Fetch results from spawned tasks
            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.apply_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
