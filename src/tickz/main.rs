use clap::Parser;
use directories::ProjectDirs;
use std::io::Write;
use std::path::PathBuf;
use tickz::collection::CollectionStore;
use tickz::component::{
    preview_list, CollectionComponent, CollectionIntent, ListComponent, ListIntent,
};
use tickz::error::Result;
use tickz::list::ListStore;
use tickz::store::fs::FileStore;
use tickz::view::Filter;

mod args;
mod print;

use args::{Cli, Commands};
use print::{CollectionTerminal, ListTerminal};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = resolve_data_dir();

    match cli.command {
        Some(Commands::Lists { filter }) => collection_command(data_dir, filter, None),
        Some(Commands::Add { name }) => {
            collection_command(data_dir, None, Some(CollectionIntent::Create(name)))
        }
        Some(Commands::Rename { id, name }) => {
            collection_command(data_dir, None, Some(CollectionIntent::Rename(id, name)))
        }
        Some(Commands::Remove { id }) => {
            collection_command(data_dir, None, Some(CollectionIntent::Delete(id)))
        }
        Some(Commands::Check { id }) => {
            collection_command(data_dir, None, Some(CollectionIntent::Toggle(id)))
        }
        Some(Commands::CheckAll) => {
            collection_command(data_dir, None, Some(CollectionIntent::ToggleAll))
        }
        Some(Commands::Clear { yes }) => handle_clear(data_dir, yes),
        Some(Commands::Items { id, filter }) => list_command(data_dir, id, filter, None),
        Some(Commands::Todo { id, text }) => {
            list_command(data_dir, id, None, Some(ListIntent::Add(text)))
        }
        Some(Commands::Edit { id, item, text }) => {
            list_command(data_dir, id, None, Some(ListIntent::Edit(item, text)))
        }
        Some(Commands::Drop { id, item }) => {
            list_command(data_dir, id, None, Some(ListIntent::Remove(item)))
        }
        Some(Commands::Tick { id, item }) => {
            list_command(data_dir, id, None, Some(ListIntent::Toggle(item)))
        }
        Some(Commands::TickAll { id }) => {
            list_command(data_dir, id, None, Some(ListIntent::ToggleAll))
        }
        Some(Commands::Sweep { id }) => list_command(data_dir, id, None, Some(ListIntent::Clear)),
        Some(Commands::Peek { id, lines }) => handle_peek(data_dir, id, lines),
        None => collection_command(data_dir, None, None),
    }
}

fn resolve_data_dir() -> PathBuf {
    if let Ok(home) = std::env::var("TICKZ_HOME") {
        return PathBuf::from(home);
    }
    let proj_dirs =
        ProjectDirs::from("com", "tickz", "tickz").expect("Could not determine data dir");
    proj_dirs.data_dir().to_path_buf()
}

fn collection_command(
    data_dir: PathBuf,
    filter: Option<String>,
    intent: Option<CollectionIntent>,
) -> Result<()> {
    let store = CollectionStore::new(FileStore::new(data_dir))?;
    let mut component = CollectionComponent::new(store, CollectionTerminal::new());

    if let Some(f) = filter {
        let filter: Filter = f.parse().unwrap_or_default();
        component.dispatch(CollectionIntent::SetFilter(filter))?;
    }
    if let Some(intent) = intent {
        component.dispatch(intent)?;
    }
    // No transition to wait for in a one-shot CLI: the settle delay elapses
    // instantly on the component's logical clock.
    while component.settle_pending() {
        component.advance(tickz::component::Delay::Short.as_millis())?;
    }

    print::print_collection(component.host());
    Ok(())
}

fn list_command(
    data_dir: PathBuf,
    id: i64,
    filter: Option<String>,
    intent: Option<ListIntent>,
) -> Result<()> {
    let store = ListStore::new(FileStore::new(data_dir), id)?;
    let mut component = ListComponent::new(store, ListTerminal::new());

    if let Some(f) = filter {
        let filter: Filter = f.parse().unwrap_or_default();
        component.dispatch(ListIntent::SetFilter(filter))?;
    }
    if let Some(intent) = intent {
        component.dispatch(intent)?;
    }
    while component.settle_pending() {
        component.advance(tickz::component::Delay::Short.as_millis())?;
    }

    print::print_list(component.host());
    Ok(())
}

fn handle_clear(data_dir: PathBuf, yes: bool) -> Result<()> {
    let store = CollectionStore::new(FileStore::new(data_dir))?;
    let done_count = store
        .collection()
        .lists
        .iter()
        .filter(|l| l.done == Some(true))
        .count();
    let mut component = CollectionComponent::new(store, CollectionTerminal::new());

    component.dispatch(CollectionIntent::ClearDone)?;
    if component.awaiting_clear_confirmation() {
        if yes || confirm_on_stdin(done_count) {
            component.dispatch(CollectionIntent::ConfirmClear)?;
        } else {
            component.dispatch(CollectionIntent::CancelClear)?;
            println!("Nothing removed.");
        }
    }

    print::print_collection(component.host());
    Ok(())
}

fn handle_peek(data_dir: PathBuf, id: i64, lines: usize) -> Result<()> {
    let view = preview_list(FileStore::new(data_dir), id, lines)?;
    print::print_preview(&view);
    Ok(())
}

fn confirm_on_stdin(done_count: usize) -> bool {
    print::print_clear_prompt(done_count);
    let _ = std::io::stdout().flush();

    let mut answer = String::new();
    if std::io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
