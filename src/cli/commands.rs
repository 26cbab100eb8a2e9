use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "evx", about = concat!("[>] evolux v", env!("CARGO_PKG_VERSION"), " - your productivity tray, in the terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different data directory
    #[arg(short = 'C', long = "data-dir", global = true)]
    pub data_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show or clear the registered profile
    Profile(ProfileCmd),
    /// List the built-in themes
    Themes,
    /// List branches known to the backend
    Branches,
    /// List tasks, optionally scoped to a branch
    Tasks(TasksArgs),
    /// Print the data directory in use
    Paths,
}

#[derive(Args)]
pub struct ProfileCmd {
    #[command(subcommand)]
    pub action: Option<ProfileAction>,
}

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show the registered profile (default)
    Show,
    /// Remove the registered profile; the next TUI start re-registers
    Clear,
}

#[derive(Args)]
pub struct TasksArgs {
    /// Branch ID to filter by
    #[arg(long)]
    pub branch: Option<String>,
}
