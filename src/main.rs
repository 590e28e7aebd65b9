use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use gpacalc::{app::App, cli::CliArgs, config::Config, logging};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::{error, info};

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    logging::init_logging(cli_args.log_file.as_deref())?;
    info!("Starting gpacalc");

    let config = Config::from_cli(&cli_args)?;
    let mut app = App::new(config, &cli_args);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!("Application error: {}", err);
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }

    info!("gpacalc shut down cleanly");
    Ok(())
}
