//! main.rs
//! Entry point for cdgrid

use cdgrid::app::{Browser, DirectoryController, Keymap, Viewport};
use cdgrid::config::Config;
use cdgrid::core::{LocalFs, SystemClipboard, terminal};
use cdgrid::logging::Logger;
use cdgrid::utils::cli::{CliAction, handle_args};
use cdgrid::utils::{current_dir, resolve_initial_dir};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    std::panic::set_hook(Box::new(|info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let mut stdout = std::io::stdout();
        let _ = crossterm::execute!(
            stdout,
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        );

        eprintln!("\n[cdgrid] Error occurred: {}", info);

        #[cfg(debug_assertions)]
        {
            let bt = std::backtrace::Backtrace::force_capture();
            eprintln!("\nStack Backtrace:\n{}", bt);
        }
    }));

    let action = handle_args();

    let start = match action {
        CliAction::Exit => return Ok(()),
        CliAction::RunApp => current_dir()?,
        CliAction::RunAppAtPath(path_arg) => match resolve_initial_dir(&path_arg) {
            Ok(path) => path,
            Err(e) => {
                eprintln!("\n[cdgrid] Error: Path '{}' cannot be opened: {}", path_arg, e);
                std::process::exit(1);
            }
        },
    };

    let _log_guard = Logger::init_tracing();
    let config = Config::load();
    tracing::info!(path = %start.display(), "starting session");

    let dirs = DirectoryController::open(LocalFs::new(config.general().list_options()), start)?;
    let (width, height) = crossterm::terminal::size()?;
    let mut browser = Browser::new(
        dirs,
        SystemClipboard::default(),
        Viewport::new(width.into(), height.into()),
        config.layout().options(),
    );
    let keymap = Keymap::from_keys(config.keys());

    terminal::run_terminal(&mut browser, &keymap, &config)?;

    // an X11 selection is lost with the process unless a clipboard manager takes it
    if let Some(command) = browser.take_command() {
        println!("{command}");
    }
    Ok(())
}
