//! mpatch - patch stored release manifests and adopt live resources.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::Level;

use manifest_patch::{
    adopt_release, patch_release, AdoptOptions, AdoptOutcome, DirResources, FileStore,
    PatchOptions, PatchOutcome, ResourceDescriptor,
};

#[derive(Parser)]
#[command(name = "mpatch")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Patch the api version of resources in stored release manifests", long_about = None)]
struct Cli {
    /// Directory holding stored release records
    #[arg(long, global = true, default_value = ".mpatch/releases")]
    store: PathBuf,

    /// Namespace recorded on releases and passed to resource discovery
    #[arg(long, global = true, default_value = "default")]
    namespace: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Patch the api version of resources in a stored release manifest
    Api {
        /// Name of the release to patch
        release: String,

        /// The kind to patch the api version of
        #[arg(long)]
        kind: String,

        /// Only patch resources currently at this api version
        #[arg(long)]
        from: Option<String>,

        /// The api version to be set
        #[arg(long)]
        to: String,

        /// Only patch the resource with this name
        #[arg(long)]
        name: Option<String>,

        /// Revision of the release to patch (defaults to the latest)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        revision: Option<u32>,

        /// Report the would-be result without persisting it
        #[arg(long)]
        dry_run: bool,
    },

    /// Build a release record from resources already present in the target environment
    Adopt {
        /// Name of the release to create
        release: String,

        /// Chart reference to record on the release
        chart: String,

        /// Names of the resources to adopt
        #[arg(long, value_delimiter = ',', required = true)]
        names: Vec<String>,

        /// Directory live resources are read from
        #[arg(long, default_value = ".")]
        resource_dir: PathBuf,

        /// Print the synthetic manifest without creating the release
        #[arg(long)]
        dry_run: bool,
    },
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run(cli: Cli) -> manifest_patch::Result<()> {
    let mut store = FileStore::open(&cli.store)?;

    match cli.command {
        Commands::Api {
            release,
            kind,
            from,
            to,
            name,
            revision,
            dry_run,
        } => {
            let opts = PatchOptions {
                release_name: release,
                descriptor: ResourceDescriptor {
                    kind,
                    name: name.filter(|n| !n.is_empty()),
                    api_version: from.filter(|v| !v.is_empty()),
                },
                to,
                revision,
                dry_run,
            };

            match patch_release(&mut store, &opts)? {
                PatchOutcome::Patched {
                    name,
                    version,
                    documents_patched,
                } => {
                    println!(
                        "release '{}' revision {}: {} document(s) patched",
                        name, version, documents_patched
                    );
                }
                PatchOutcome::NothingToPatch => {
                    println!("nothing to patch");
                }
            }
        }

        Commands::Adopt {
            release,
            chart,
            names,
            resource_dir,
            dry_run,
        } => {
            let live = DirResources::new(resource_dir);
            let opts = AdoptOptions {
                release_name: release,
                chart,
                namespace: cli.namespace,
                resource_names: names,
                dry_run,
            };

            match adopt_release(&mut store, &live, &opts)? {
                AdoptOutcome::Created { name, version } => {
                    println!("release '{}' adopted at revision {}", name, version);
                }
                AdoptOutcome::DryRun { manifest } => {
                    print!("{}", manifest);
                }
            }
        }
    }

    Ok(())
}
