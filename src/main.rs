//! timestable - Terminal Multiplication Table
//!
//! Type a number and an upper bound, press Enter, and read the table.
//! With `--print` the form is submitted once from the command line and the
//! result goes to stdout.

use std::io;
use std::process::ExitCode;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::{debug, info};

use timestable::application::{print_table, App, PrintOutcome};
use timestable::config::{init_logging, Args};
use timestable::presentation::{render_ui, InputHandler};

/// Entry point.
///
/// Sets up logging from the command line, then either runs print mode or
/// the interactive terminal UI until the user quits.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened, if terminal setup
/// fails, or if writing the printed table fails.
fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.log_level, args.log_file.as_deref(), !args.print)?;
    debug!(
        "Parsed command line arguments: number={:?}, upto={:?}, print={}, format={:?}",
        args.number, args.upto, args.print, args.format
    );

    if args.print {
        let stdout = io::stdout();
        return match print_table(&args.number, &args.upto, args.format.into(), stdout.lock()) {
            Ok(PrintOutcome::Printed { rows }) => {
                info!(rows, "printed table");
                Ok(ExitCode::SUCCESS)
            }
            Ok(PrintOutcome::Rejected(message)) => {
                eprintln!("{message}");
                Ok(ExitCode::from(2))
            }
            Err(err) if err.is_broken_pipe() => {
                debug!("output closed early: {err}");
                Ok(ExitCode::SUCCESS)
            }
            Err(err) => Err(err.into()),
        };
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::with_input(&args.number, &args.upto);
    info!("starting interactive form");
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}

/// Main application event loop.
///
/// Redraws after every key press and stops once the app asks to quit.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                InputHandler::handle_key_event(app, key.code, key.modifiers);
                if app.should_quit {
                    info!("quitting");
                    return Ok(());
                }
            }
        }
    }
}
