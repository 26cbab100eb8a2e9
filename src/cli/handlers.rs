use crate::bridge::{CommandBridge, MemoryBridge};
use crate::io::{paths, profile_io};
use crate::model::TaskFilter;
use crate::tui::theme::PALETTES;

use super::commands::{Commands, ProfileAction};
use super::output;

/// Dispatch a parsed subcommand to its handler. Launching the TUI (no
/// subcommand at all) is routed in main, so it cannot land here.
pub fn dispatch(
    command: Commands,
    json: bool,
    data_dir: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = paths::data_dir(data_dir)?;

    match command {
        Commands::Profile(cmd) => match cmd.action.unwrap_or(ProfileAction::Show) {
            ProfileAction::Show => match profile_io::load_profile(&dir) {
                Some(profile) => output::print_profile(&profile, json),
                None => println!("no profile registered"),
            },
            ProfileAction::Clear => {
                if profile_io::clear_profile(&dir)? {
                    println!("profile cleared");
                } else {
                    println!("no profile registered");
                }
            }
        },
        Commands::Themes => {
            output::print_themes(&PALETTES, json);
        }
        Commands::Branches => {
            let bridge = MemoryBridge::seeded();
            let branches = bridge.list_branches()?;
            output::print_branches(&branches, json);
        }
        Commands::Tasks(args) => {
            let bridge = MemoryBridge::seeded();
            let filter = TaskFilter {
                branch_id: args.branch,
                ..Default::default()
            };
            let tasks = bridge.list_tasks(&filter)?;
            output::print_tasks(&tasks, json);
        }
        Commands::Paths => {
            println!("{}", dir.display());
        }
    }
    Ok(())
}
