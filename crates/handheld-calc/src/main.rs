//! handheld-calc: pocket calculator for the terminal
//!
//! ## Usage
//!
//! ```bash
//! handheld-calc                    # Interactive calculator
//! handheld-calc eval "5+3+2="      # Prints 10
//! handheld-calc eval --json "7/0"  # Whole state as JSON
//! ```

use clap::Parser;
use handheld_calc::{
    core::Calculator,
    logging::{self, LogSink},
    CalcConfig, Cli, CliResult, Commands, EvalArgs,
};
use std::process::ExitCode;
use tracing::info;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = cli.config()?;

    match cli.command() {
        Commands::Tui => {
            logging::init(&config, LogSink::Silent)?;
            run_tui(&config)
        }
        Commands::Eval(args) => {
            logging::init(&config, LogSink::Stderr)?;
            run_eval(&config, &args)
        }
    }
}

fn run_eval(config: &CalcConfig, args: &EvalArgs) -> CliResult<()> {
    let mut calculator = Calculator::with_limits(config.limits());
    let applied = calculator.press_keys(&args.keys);
    info!(applied, ignored = args.keys.chars().count() - applied, "keys evaluated");

    if args.json {
        println!("{}", serde_json::to_string_pretty(calculator.state())?);
    } else {
        println!("{}", calculator.display());
    }
    Ok(())
}

#[cfg(feature = "tui")]
fn run_tui(config: &CalcConfig) -> CliResult<()> {
    use crossterm::{
        event::{DisableMouseCapture, EnableMouseCapture},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    };
    use ratatui::{backend::CrosstermBackend, Terminal};

    // Setup terminal
    enable_raw_mode()?;
    let mut terminal = or_restore(
        || {
            let mut stdout = std::io::stdout();
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
            Ok(Terminal::new(CrosstermBackend::new(stdout))?)
        },
        || {
            let _ = disable_raw_mode();
            let _ = execute!(std::io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        },
    )?;
    info!(max_digits = config.max_digits, "terminal calculator started");

    let result = run_app(&mut terminal, config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Runs `setup`, calling `restore` before handing back its error
#[cfg(feature = "tui")]
fn or_restore<T>(setup: impl FnOnce() -> CliResult<T>, restore: impl FnOnce()) -> CliResult<T> {
    setup().map_err(|e| {
        restore();
        e
    })
}

#[cfg(feature = "tui")]
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut ratatui::Terminal<B>,
    config: &CalcConfig,
) -> CliResult<()> {
    use crossterm::event::{self, Event, KeyEventKind};
    use handheld_calc::tui::{render, CalculatorApp, InputHandler};

    let mut app = CalculatorApp::with_limits(config.limits());
    let input_handler = InputHandler::new();

    while !app.should_quit() {
        terminal.draw(|frame| {
            app.set_viewport(frame.area());
            render(&app, frame);
        })?;

        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => input_handler.handle_key(key),
            Event::Mouse(mouse) => input_handler.handle_mouse(mouse),
            _ => continue,
        };
        app.handle_action(action);
    }

    info!(display = %app.display(), "terminal calculator closed");
    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_tui(_config: &CalcConfig) -> CliResult<()> {
    Err(handheld_calc::CliError::invalid_argument(
        "built without the `tui` feature; use `eval`",
    ))
}
