use clap::Parser;
use orgcal::application::{init::init_config, AppendService, BuildService, CheckService};
use orgcal::cli::{format_build_report, format_check_report, Cli, Commands};
use orgcal::error::OrgcalError;
use orgcal::infrastructure::{init_logging, Config, FileSystemStore};

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), OrgcalError> {
    let store = FileSystemStore::current()?;

    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load_from_dir(store.root())?,
    };
    let _logger = init_logging(cli.log_level.as_deref(), &config)?;

    match cli.command {
        Commands::Build { inputs, output } => {
            let output = config.output_path(output.as_deref());
            let report = BuildService::new(store).execute(&inputs, &output)?;
            println!("{}", format_build_report(&report));
            Ok(())
        }
        Commands::Append {
            existing,
            inputs,
            output,
        } => {
            // Default to rewriting the loaded document in place
            let output = output.unwrap_or_else(|| existing.clone());
            let report = AppendService::new(store).execute(&existing, &inputs, &output)?;
            println!("{}", format_build_report(&report));
            Ok(())
        }
        Commands::Check { file } => {
            let report = CheckService::new(store).execute(&file)?;
            print!("{}", format_check_report(&report));
            if report.canonical {
                Ok(())
            } else {
                Err(OrgcalError::RoundTripMismatch(file))
            }
        }
        Commands::InitConfig { path } => {
            let written = init_config(&path)?;
            println!("Wrote default config to {}", written.display());
            Ok(())
        }
    }
}
