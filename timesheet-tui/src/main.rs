mod app;
mod bootstrap;
mod cli;
mod config;
mod list;
mod logging;
mod runtime;
mod time_utils;
mod ui;

use anyhow::Result;
use app::App;
use clap::Parser;
use cli::{Cli, Commands};
use config::TimesheetConfig;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use time::UtcOffset;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Must run before anything spawns a thread.
    let local_offset = time_utils::local_offset();

    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = TimesheetConfig::load()?;

    match cli.command.unwrap_or(Commands::Run { ephemeral: false }) {
        Commands::Run { ephemeral } => run_tui(&config, ephemeral, local_offset).await,
        Commands::List { date, category } => {
            logging::init_stderr(&config.log_level)?;
            list::run(&config, date, category).await
        }
        Commands::ConfigPath => {
            let path = TimesheetConfig::config_path()?;
            if !path.exists() {
                TimesheetConfig::default().save_to(&path)?;
            }
            println!("{}", path.display());
            Ok(())
        }
    }
}

async fn run_tui(config: &TimesheetConfig, ephemeral: bool, local_offset: UtcOffset) -> Result<()> {
    let data_dir = config.data_dir()?;
    logging::init_file(&data_dir.join(logging::LOG_FILE), &config.log_level)?;

    let service = bootstrap::build_service(config, ephemeral)?;
    let mut app = App::new(time_utils::local_today(local_offset));
    bootstrap::initialize_app_state(&mut app, service.as_ref()).await?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, &mut app, service.as_ref(), local_offset).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = %err, "editor exited with an error");
    }
    res
}
