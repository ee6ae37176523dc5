//! main.rs
//! Entry point for dirnav

use dirnav::app::AppState;
use dirnav::config::Config;
use dirnav::core::{logging, terminal};
use dirnav::utils::cli::{CliAction, handle_args};
use dirnav::utils::resolve_initial_dir;

use std::path::PathBuf;

fn main() -> std::io::Result<()> {
    std::panic::set_hook(Box::new(|info| {
        terminal::restore_terminal();
        tracing::error!(%info, "panic");
        eprintln!("\n[dirnav] Error occurred: {}", info);

        #[cfg(debug_assertions)]
        {
            let bt = std::backtrace::Backtrace::force_capture();
            eprintln!("\nStack Backtrace:\n{}", bt);
        }
    }));

    let action = handle_args();
    if let CliAction::Exit = action {
        return Ok(());
    }

    let config = Config::load();
    logging::init_logging(config.log());

    // an unusable PATH argument falls back to the working directory
    let requested = match action {
        CliAction::RunAppAtPath(arg) => resolve_initial_dir(&arg).or_else(|| {
            tracing::info!(path = %arg, "ignoring unusable start path");
            None
        }),
        _ => None,
    };
    let start = requested
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("/"));
    tracing::info!(path = %start.display(), "starting");

    let mut app = AppState::new(&config, &start);
    terminal::run_terminal(&mut app)
}
