use clap::Parser;
use evolux::cli::commands::Cli;
use evolux::cli::handlers;

fn main() {
    let Cli {
        command,
        json,
        data_dir,
    } = Cli::parse();

    let result = match command {
        // No subcommand → launch TUI
        None => evolux::tui::run(data_dir.as_deref()),
        Some(command) => handlers::dispatch(command, json, data_dir.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
