use clap::{Args, Parser, Subcommand};
use corenlp_models::config::Config;
use corenlp_models::error::{InstallerError, Result};
use corenlp_models::models::manifest::{self, Versions};
use corenlp_models::models::{locations, InstallMode, InstallReport, Installer, Selection};
use corenlp_models::{logging, select};
use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "corenlp-models")]
#[command(about = "Installer for Stanford CoreNLP model archives", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Install models non-interactively
    Install(InstallArgs),
    /// List the models and versions in the versions file
    List {
        /// Path to the versions file
        #[arg(long)]
        versions_file: Option<PathBuf>,
    },
    /// Print the computed install locations
    Locations {
        /// Model version the locations are computed for
        #[arg(long)]
        version: Option<String>,
    },
}

#[derive(Args)]
struct InstallArgs {
    /// Models to install, comma-separated (e.g. english,chinese)
    #[arg(long, value_delimiter = ',')]
    models: Vec<String>,

    /// Install every model in the versions file
    #[arg(long, conflicts_with = "models")]
    all: bool,

    /// Model version to install
    #[arg(long)]
    version: Option<String>,

    /// Path to the versions file
    #[arg(long)]
    versions_file: Option<PathBuf>,

    /// Install to the system-wide location
    #[arg(long)]
    privileged: bool,

    /// Install into an explicit directory instead of a computed location
    #[arg(long)]
    target_dir: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(Path::new(logging::LOG_FILE_NAME)) {
        eprintln!("Error: failed to initialize logging: {e}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        // The console layer mirrors this to stderr; the log file keeps
        // the full record
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        None => run_interactive(&config),
        Some(Commands::Install(args)) => run_install(&config, args),
        Some(Commands::List { versions_file }) => run_list(&config, versions_file.as_deref()),
        Some(Commands::Locations { version }) => run_locations(&config, version.as_deref()),
    }
}

fn load_versions(config: &Config, flag: Option<&Path>) -> Result<Versions> {
    let path = flag
        .map(Path::to_path_buf)
        .or_else(|| config.install.versions_file.clone())
        .unwrap_or_else(manifest::default_versions_path);
    tracing::debug!("loading versions file '{}'", path.display());
    Versions::load(&path)
}

fn run_interactive(config: &Config) -> Result<()> {
    let versions = load_versions(config, None)?;
    let version = config.install.version.clone();
    tracing::debug!("version: {version}");

    let model_ids = versions.model_ids();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let Some(models) = select::choose_models(&mut input, &mut output, &model_ids)? else {
        println!("Cancelled");
        return Ok(());
    };
    if models.is_empty() {
        println!("Nothing selected");
        return Ok(());
    }

    let Some(mode) = select::choose_mode(&mut input, &mut output, &version)? else {
        println!("Cancelled");
        return Ok(());
    };

    let target_dir = mode.install_dir(&version)?;
    install_and_report(versions, models, version, target_dir)
}

fn run_install(config: &Config, args: InstallArgs) -> Result<()> {
    let versions = load_versions(config, args.versions_file.as_deref())?;
    let version = args
        .version
        .unwrap_or_else(|| config.install.version.clone());

    let models: BTreeSet<String> = if args.all {
        versions.model_ids().iter().map(ToString::to_string).collect()
    } else {
        args.models.into_iter().collect()
    };
    if models.is_empty() {
        return Err(InstallerError::Config(
            "no models selected; pass --models <id,...> or --all".to_string(),
        ));
    }

    let target_dir = match args.target_dir {
        Some(dir) => dir,
        None => {
            let mode = if args.privileged {
                InstallMode::Privileged
            } else {
                config.install.mode.parse()?
            };
            mode.install_dir(&version)?
        }
    };

    install_and_report(versions, models, version, target_dir)
}

fn install_and_report(
    versions: Versions,
    models: BTreeSet<String>,
    version: String,
    target_dir: PathBuf,
) -> Result<()> {
    tracing::info!("selected models: {models:?}");
    tracing::debug!("selected location: {}", target_dir.display());

    let selection = Selection {
        models,
        version,
        target_dir,
    };
    let installer = Installer::new(versions);
    let report = installer.install(&selection)?;
    print_report(&report, &selection);
    Ok(())
}

fn print_report(report: &InstallReport, selection: &Selection) {
    for model in &report.skipped {
        println!("✓ {model} already up to date");
    }
    for model in &report.downloaded {
        println!("✓ Installed {model}");
    }
    println!("Models installed to {}", selection.target_dir.display());
}

fn run_list(config: &Config, versions_file: Option<&Path>) -> Result<()> {
    let versions = load_versions(config, versions_file)?;
    if versions.is_empty() {
        println!("No models in the versions file");
        return Ok(());
    }
    for model in versions.model_ids() {
        println!("{model}: {}", versions.versions_of(model).join(", "));
    }
    Ok(())
}

fn run_locations(config: &Config, version: Option<&str>) -> Result<()> {
    let version = version.unwrap_or(&config.install.version);
    println!(
        "unprivileged: {}",
        locations::unprivileged_dir(version)?.display()
    );
    println!(
        "privileged:   {}",
        locations::privileged_dir(version).display()
    );
    Ok(())
}
