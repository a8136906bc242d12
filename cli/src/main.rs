use base64::{engine::general_purpose, Engine};
use clap::Parser;
use collector::{
    commands::{run_collector, Commands},
    report::comparison_report,
};
use log::info;

mod collector;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Full path to TOML collector
    #[clap(short, long, value_parser)]
    toml: Option<String>,

    /// Base64 encoded TOML file
    #[clap(short, long, value_parser)]
    data: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let args = Args::parse();
    println!("[assist] Starting UserAssist collection!");

    if let Some(toml) = args.toml {
        if !toml.is_empty() {
            let collection_results = assist_core::core::parse_toml_file(&toml);
            match collection_results {
                Ok(_) => info!("[assist] Collection success"),
                Err(err) => {
                    println!("[assist] Failed to collect artifacts: {err:?}");
                    return;
                }
            }
        }
    } else if let Some(data) = args.data {
        if !data.is_empty() {
            let toml_data_results = general_purpose::STANDARD.decode(&data);
            let toml_data = match toml_data_results {
                Ok(results) => results,
                Err(err) => {
                    println!(
                        "[assist] Failed to base64 decode TOML collector {data}, error: {err:?}",
                    );
                    return;
                }
            };
            let collection_results = assist_core::core::parse_toml_data(&toml_data);
            match collection_results {
                Ok(_) => info!("[assist] Collection success"),
                Err(err) => {
                    println!("[assist] Failed to collect artifacts: {err:?}");
                    return;
                }
            }
        }
    } else if let Some(command) = args.command {
        match &command {
            Commands::Acquire { .. } => run_collector(&command),
            Commands::Report { alt_file, users } => match comparison_report(alt_file, users) {
                Ok(report) => print!("{report}"),
                Err(err) => {
                    println!("[assist] Failed to build report: {err}");
                    return;
                }
            },
        }
    } else {
        println!("[assist] No TOML file, data or command provided!");
        return;
    }
    println!("[assist] Finished UserAssist collection!");
}
