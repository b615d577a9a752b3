use clap::Parser;
use color_eyre::Result;
use mindspace_tui::{
    Config, EntryStore, Profile,
    cli::{Cli, Commands},
};

fn main() -> Result<()> {
    // Set up error reporting with color-eyre
    color_eyre::install()?;

    let cli = Cli::parse();

    // Determine profile: --dev flag enables dev mode, otherwise use prod
    let profile = if cli.dev { Profile::Dev } else { Profile::Prod };

    let config = Config::load_with_profile(profile)?;

    // Open the entry store; the whole collection loads here
    let data_path = config.get_data_path();
    let mut store = EntryStore::open(
        data_path
            .to_str()
            .ok_or_else(|| color_eyre::eyre::eyre!("Data path contains invalid UTF-8"))?,
    )?;

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            let app = mindspace_tui::tui::App::new(config, store, profile);
            mindspace_tui::tui::run_event_loop(app)?;
        }
        Commands::Checkin {
            mood,
            stress,
            sleep,
            energy,
            note,
        } => {
            mindspace_tui::cli::handle_checkin(mood, stress, sleep, energy, note, &mut store)?;
        }
        Commands::Stats => {
            mindspace_tui::cli::handle_stats(&store)?;
        }
        Commands::Export { output } => {
            mindspace_tui::cli::handle_export(output, &store)?;
        }
    }

    Ok(())
}
