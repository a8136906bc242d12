use assist_core::{
    core::assist_collection,
    structs::{
        artifacts::os::windows::UserAssistOptions,
        toml::{Artifacts, AssistToml, Output},
    },
};
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Decode UserAssist entries and write them to disk
    Acquire {
        /// Registry export (JSON) holding the UserAssist keys
        #[arg(long)]
        alt_file: String,
        /// Only scan these users. Repeat for more than one
        #[arg(long = "user")]
        users: Vec<String>,
        /// Output format: csv, json or jsonl
        #[arg(long, default_value_t = String::from("csv"))]
        format: String,
        /// Directory to write output to
        #[arg(long, default_value_t = String::from("./tmp"))]
        output_dir: String,
        /// Gzip output files
        #[arg(long)]
        compress: bool,
        /// Also write the per user comparison report
        #[arg(long)]
        report: bool,
        /// Swap Known Folder GUIDs for their paths
        #[arg(long)]
        resolve_folders: bool,
    },
    /// Print the per user comparison report
    Report {
        /// Registry export (JSON) holding the UserAssist keys
        #[arg(long)]
        alt_file: String,
        /// Only scan these users. Repeat for more than one
        #[arg(long = "user")]
        users: Vec<String>,
    },
}

/// Default local output settings
pub(crate) fn output(directory: &str, format: &str, compress: bool) -> Output {
    Output {
        name: String::from("local_collector"),
        endpoint_id: String::from("local"),
        collection_id: 0,
        directory: directory.to_string(),
        output: String::from("local"),
        format: format.to_string(),
        compress,
        logging: Some(String::from("warn")),
    }
}

/// Build a collection from the `acquire` arguments and run it
pub(crate) fn run_collector(command: &Commands) {
    let collector = match command {
        Commands::Acquire {
            alt_file,
            users,
            format,
            output_dir,
            compress,
            report,
            resolve_folders,
        } => {
            let options = UserAssistOptions {
                alt_file: Some(alt_file.clone()),
                users: if users.is_empty() {
                    None
                } else {
                    Some(users.clone())
                },
                resolve_descriptions: Some(*resolve_folders),
                report: Some(*report),
            };
            AssistToml {
                output: output(output_dir, format, *compress),
                artifacts: vec![Artifacts {
                    artifact_name: String::from("userassist"),
                    userassist: Some(options),
                }],
            }
        }
        Commands::Report { .. } => return,
    };

    println!(
        "[assist] Writing output to: {}",
        collector.output.directory
    );
    if let Err(err) = assist_collection(&collector) {
        println!("[assist] Failed to collect UserAssist: {err:?}");
    }
}
