mod cli;
mod layout;
mod terminal;

use std::fs::File;
use std::io;
use std::process::ExitCode;
use std::sync::Mutex;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use tracing::{error, info, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;
use wdg::{Dispatcher, WindowOptions};
use wdg_common::{Result, WdgError};
use wdg_config::{ColorScheme, LoggingConfig, WdgConfig};
use wdg_curses::{CrosstermBackend, Screen};

use crate::cli::Args;
use crate::terminal::TerminalSession;

fn init_logging(args: &Args, logging: &LoggingConfig) {
    let level = args.log_level.as_deref().unwrap_or(logging.level.as_str());
    let filter = EnvFilter::from_default_env().add_directive(
        level
            .parse()
            .unwrap_or_else(|_| LevelFilter::INFO.into()),
    );

    // The widgets own the terminal, so logs go to a file or nowhere.
    match &logging.file {
        Some(path) => match File::create(path) {
            Ok(file) => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init(),
            Err(e) => eprintln!("wdg-demo: cannot open log file {}: {e}", path.display()),
        },
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::sink)
            .init(),
    }
}

/// Log non-fatal errors and keep going; fatal ones end the session.
fn tolerate(result: Result<()>) -> Result<()> {
    match result {
        Err(e) if !e.is_fatal() => {
            warn!("{e}");
            Ok(())
        }
        other => other,
    }
}

/// Lay the remaining windows out side by side on a `cols` x `lines` screen.
/// The redraw pass runs even when resizing failed, so every window that
/// still fits ends up intact.
fn relayout(wdg: &mut Dispatcher, cols: usize, lines: usize) -> Result<()> {
    let ids = wdg.ids();
    for (id, placement) in ids.iter().zip(layout::columns(ids.len(), cols)) {
        wdg.core_mut(*id)?.placement = placement;
    }
    let resized = wdg.resize_screen(cols, lines);
    let redrawn = wdg.redraw_all();
    resized.and(redrawn)
}

fn window_options(args: &Args, config: &WdgConfig, number: usize) -> WindowOptions {
    let mut options = WindowOptions::from(&config.window);
    let base = args.title.as_deref().or(options.title.as_deref());
    options.title = base.map(|t| format!("{t} {number}"));
    if let Some(align) = args.align {
        options.align = align;
    }
    options
}

fn run(args: &Args, config: &WdgConfig) -> Result<()> {
    let scheme = ColorScheme::from_config(&config.colors)?;
    let _session = TerminalSession::start()?;
    let screen = Screen::new(Box::new(CrosstermBackend::new(io::stdout())))?;
    let (cols, _) = screen.size();
    let mut wdg = Dispatcher::new(screen, &scheme);

    let count = usize::from(args.windows);
    for (n, placement) in layout::columns(count, cols).into_iter().enumerate() {
        let id = wdg.create_window(placement, window_options(args, config, n + 1));
        wdg.draw(id)?;
        wdg.print(
            id,
            0,
            0,
            format_args!(
                "Tab: next window\n'{}': close\nEsc: quit\n",
                config.window.quit_key
            ),
        )?;
    }
    if let Some(&first) = wdg.ids().first() {
        wdg.focus(first)?;
    }
    info!(windows = wdg.len(), "demo running");

    loop {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Esc => break,
                KeyCode::Tab => tolerate(wdg.focus_next())?,
                KeyCode::BackTab => tolerate(wdg.focus_prev())?,
                _ => {
                    let Some(key) = terminal::translate(key) else {
                        continue;
                    };
                    let before = wdg.len();
                    tolerate(wdg.dispatch_key(key))?;
                    if wdg.is_empty() {
                        info!("last window closed");
                        break;
                    }
                    if wdg.len() != before {
                        let (cols, lines) = wdg.screen().size();
                        relayout(&mut wdg, cols, lines)?;
                    }
                }
            },
            Event::Resize(cols, lines) => {
                relayout(&mut wdg, usize::from(cols), usize::from(lines))?;
            }
            _ => {}
        }
    }

    wdg.destroy_all();
    Ok(())
}

fn main() -> ExitCode {
    let args = cli::parse();

    let config = match wdg_config::load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("wdg-demo: {e}");
            return ExitCode::FAILURE;
        }
    };
    init_logging(&args, &config.logging);

    // The terminal session is over by the time `run` returns.
    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("wdg-demo: {e}");
            if matches!(e, WdgError::WindowTooSmall { .. }) {
                eprintln!("wdg-demo: enlarge the terminal or use fewer windows");
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use wdg_common::{Align, WidgetId};

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["wdg-demo"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn titles_are_numbered() {
        let options = window_options(&args(&[]), &WdgConfig::default(), 2);
        assert_eq!(options.title.as_deref(), Some("wdg 2"));
        assert_eq!(options.align, Align::Center);
    }

    #[test]
    fn cli_overrides_config() {
        let options = window_options(
            &args(&["--title", "Status", "--align", "right"]),
            &WdgConfig::default(),
            1,
        );
        assert_eq!(options.title.as_deref(), Some("Status 1"));
        assert_eq!(options.align, Align::Right);
    }

    #[test]
    fn empty_config_title_means_untitled() {
        let mut config = WdgConfig::default();
        config.window.title.clear();
        let options = window_options(&args(&[]), &config, 1);
        assert_eq!(options.title, None);
    }

    #[test]
    fn tolerate_passes_only_fatal_errors() {
        assert!(tolerate(Err(WdgError::UnknownWidget(WidgetId(3)))).is_ok());
        assert!(tolerate(Err(WdgError::Fatal("boom".into()))).is_err());
        assert!(tolerate(Ok(())).is_ok());
    }

    #[test]
    fn relayout_follows_the_new_size() {
        let mut wdg = Dispatcher::new(Screen::headless(40, 10), &ColorScheme::default());
        for placement in layout::columns(2, 40) {
            let id = wdg.create_window(placement, WindowOptions::default());
            wdg.draw(id).unwrap();
        }
        relayout(&mut wdg, 60, 12).unwrap();
        let ids = wdg.ids();
        let right = wdg.window(ids[1]).unwrap().frame().unwrap().geometry();
        assert_eq!((right.x, right.cols, right.lines), (30, 30, 12));
        let half = format!("┌{}┐", "─".repeat(28));
        assert_eq!(wdg.screen().row_text(0), half.repeat(2));
    }
}
