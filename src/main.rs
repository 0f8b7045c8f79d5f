use std::io;
use std::path::Path;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::{self, UnboundedSender};

use dexview::action::Action;
use dexview::api;
use dexview::effect::Effect;
use dexview::export;
use dexview::reducer::reducer;
use dexview::state::AppState;
use dexview::ui::Ui;

#[derive(Parser, Debug)]
#[command(name = "dexview")]
#[command(about = "Pokedex catalog browser with stat chart and PDF export")]
struct Args {
    /// Catalog API base URL
    #[arg(long, default_value = api::API_BASE)]
    api_base: String,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, args).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    args: Args,
) -> io::Result<()> {
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();
    std::thread::spawn(move || input_loop(event_tx));

    let mut ticker = tokio::time::interval(Duration::from_millis(120));
    let mut state = AppState::default();
    let mut ui = Ui::new();

    let mut pending = vec![Action::Init];
    loop {
        let mut render = false;
        for action in pending.drain(..) {
            if matches!(action, Action::Quit) {
                return Ok(());
            }
            let dispatch = reducer(&mut state, action);
            for effect in dispatch.effects {
                handle_effect(effect, &action_tx, &args.api_base);
            }
            render |= dispatch.changed;
        }
        if render {
            terminal.draw(|frame| ui.render(frame, &state))?;
        }

        tokio::select! {
            Some(event) = event_rx.recv() => {
                pending = ui.handle_event(&event, &state);
            }
            Some(action) = action_rx.recv() => {
                pending.push(action);
            }
            _ = ticker.tick() => {
                pending.push(Action::Tick);
            }
        }
    }
}

/// Each effect runs as one task resolving to exactly one completion
/// action; the reducer decides whether that action still applies.
fn handle_effect(effect: Effect, tx: &UnboundedSender<Action>, api_base: &str) {
    match effect {
        Effect::LoadCatalog => {
            let base = api_base.to_string();
            let tx = tx.clone();
            tokio::spawn(async move {
                let action = match api::fetch_catalog(&base).await {
                    Ok(entries) => Action::CatalogDidLoad(entries),
                    Err(error) => Action::CatalogDidError(error.to_string()),
                };
                let _ = tx.send(action);
            });
        }
        Effect::LoadDetail { name, url } => {
            let tx = tx.clone();
            tokio::spawn(async move {
                let action = match api::fetch_detail(&url).await {
                    Ok(detail) => Action::DetailDidLoad { name, detail },
                    Err(error) => Action::DetailDidError {
                        name,
                        error: error.to_string(),
                    },
                };
                let _ = tx.send(action);
            });
        }
        Effect::ExportPdf { lines } => {
            let tx = tx.clone();
            tokio::spawn(async move {
                let written = tokio::task::spawn_blocking(move || {
                    export::write_pdf(&lines, Path::new(export::EXPORT_FILE))
                })
                .await;
                let action = match written {
                    Ok(Ok(())) => Action::ExportDidSave(export::EXPORT_FILE.to_string()),
                    Ok(Err(error)) => Action::ExportDidError(error),
                    Err(error) => Action::ExportDidError(error.to_string()),
                };
                let _ = tx.send(action);
            });
        }
    }
}

fn input_loop(tx: UnboundedSender<Event>) {
    loop {
        match event::poll(Duration::from_millis(100)) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            },
            Ok(false) => {
                if tx.is_closed() {
                    break;
                }
            }
            Err(_) => break,
        }
    }
}
