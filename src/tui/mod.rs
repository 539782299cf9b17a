// TUI module for the interactive dashboard shell
mod app;
mod dates;
mod events;
mod layout;
mod rendering;
mod router;
mod terminal;

use anyhow::Result;
pub use app::App;
pub use router::Router;
use terminal::TerminalManager;

use crate::overlay::GlobalSearch;

/// Run the interactive TUI until the user quits
pub fn run_interactive(search: GlobalSearch) -> Result<()> {
    let mut manager = TerminalManager::new()?;
    let mut app = App::new(search, Router::new());

    let res = app.run(manager.terminal_mut());

    manager.restore()?;
    res
}
