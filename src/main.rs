// ptrdrills: step-through walkthrough of the pointer drills

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use ptrdrills::logging::init_tracing;
use ptrdrills::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // Run every drill up front to build the history
    let mut app = App::record_all();
    for walkthrough in app.walkthroughs() {
        tracing::info!(
            drill = walkthrough.drill.name(),
            steps = walkthrough.history.len(),
            "drill recorded"
        );
        if let Some(e) = &walkthrough.error {
            eprintln!("{}: {}", walkthrough.drill.name(), e);
            eprintln!("Entering walkthrough with partial history...");
        }
    }

    // Set up terminal
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
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
