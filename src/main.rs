use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;
use thiserror::Error;
use vitae::{
    ContentModel, DirectoryDelivery, EncodingPolicy, ExportBuilder, ExportError, ExportMode,
    ImageFileSurface, SnapshotCapture,
};

/// Export a résumé as a styled snapshot or as ATS-readable text.
#[derive(Parser, Debug)]
#[command(name = "vitae", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Export a content model to PDF.
    Export(ExportArgs),
    /// Write the starter content model as JSON.
    Sample {
        /// Destination file; stdout when omitted.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// Content model JSON file.
    #[arg(long)]
    model: PathBuf,
    #[arg(long, value_enum, default_value_t = ModeArg::Ats)]
    mode: ModeArg,
    /// Pre-rendered preview (PNG or JPEG) captured for styled exports.
    #[arg(long)]
    snapshot: Option<PathBuf>,
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
    /// Draw a rule under each section heading.
    #[arg(long)]
    section_rules: bool,
    /// Leave CreationDate out so identical inputs give identical bytes.
    #[arg(long)]
    no_timestamp: bool,
    /// Substitute '?' for characters the standard fonts cannot encode.
    #[arg(long)]
    replace_unencodable: bool,
    /// Give up on a snapshot capture after this many seconds.
    #[arg(long)]
    timeout_secs: Option<u64>,
    /// Print the layout instead of writing a PDF.
    #[arg(long)]
    dry_run: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ModeArg {
    Ats,
    Styled,
}

impl From<ModeArg> for ExportMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Ats => ExportMode::Ats,
            ModeArg::Styled => ExportMode::Styled,
        }
    }
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("Failed to read '{}': {source}", path.display())]
    Read { path: PathBuf, source: std::io::Error },
    #[error("Failed to write '{}': {source}", path.display())]
    Write { path: PathBuf, source: std::io::Error },
    #[error("Export did not finish within {0} second(s)")]
    TimedOut(u64),
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("vitae=info")).init();
    let cli = Cli::parse();

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("error: could not start async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Export(args) => export(args).await,
        Command::Sample { out } => sample(out.as_deref()),
    }
}

fn read_model(path: &Path) -> Result<ContentModel, CliError> {
    let json = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(ContentModel::from_json_str(&json).map_err(ExportError::from)?)
}

async fn export(args: ExportArgs) -> Result<(), CliError> {
    let model = read_model(&args.model)?;
    let mode = ExportMode::from(args.mode);
    let policy = if args.replace_unencodable {
        EncodingPolicy::Replace
    } else {
        EncodingPolicy::Strict
    };

    let coordinator = ExportBuilder::new()
        .with_section_rules(args.section_rules)
        .with_timestamp(!args.no_timestamp)
        .with_encoding_policy(policy)
        .build(DirectoryDelivery::new(&args.out_dir))?;

    let surface = args.snapshot.map(ImageFileSurface::new);
    let capture = surface.as_ref().map(|s| s as &dyn SnapshotCapture);

    if args.dry_run {
        return dry_run(&coordinator, &model, mode, capture, args.timeout_secs).await;
    }

    let export = coordinator.export(&model, mode, capture);
    let path = match args.timeout_secs {
        Some(secs) => tokio::time::timeout(Duration::from_secs(secs), export)
            .await
            .map_err(|_| CliError::TimedOut(secs))??,
        None => export.await?,
    };
    println!("{}", path.display());
    Ok(())
}

async fn dry_run(
    coordinator: &vitae::ExportCoordinator<DirectoryDelivery>,
    model: &ContentModel,
    mode: ExportMode,
    capture: Option<&dyn SnapshotCapture>,
    timeout_secs: Option<u64>,
) -> Result<(), CliError> {
    let document = match mode {
        ExportMode::Ats => coordinator.layout(model),
        ExportMode::Styled => {
            let surface = capture.ok_or(ExportError::Capture(vitae::CaptureError::MissingSurface))?;
            let scale = coordinator.config().capture_scale;
            let snapshot = match timeout_secs {
                Some(secs) => tokio::time::timeout(Duration::from_secs(secs), surface.capture(scale))
                    .await
                    .map_err(|_| CliError::TimedOut(secs))?,
                None => surface.capture(scale).await,
            }
            .map_err(ExportError::from)?;
            coordinator.snapshot_document(snapshot)
        }
    };

    println!("{} ({} page(s))", vitae::export_file_name(&model.identity.name, mode), document.page_count());
    for (i, page) in document.pages.iter().enumerate() {
        println!("-- page {}", i + 1);
        for instruction in &page.instructions {
            match instruction.as_text() {
                Some(text) => println!("{:>7.1} {:>7.1}  {}", instruction.x, instruction.y, text),
                None => println!("{:>7.1} {:>7.1}  [{}]", instruction.x, instruction.y, instruction.element.kind()),
            }
        }
    }
    Ok(())
}

fn sample(out: Option<&Path>) -> Result<(), CliError> {
    let json = ContentModel::starter()
        .to_json_pretty()
        .map_err(|e| ExportError::InvalidModel(e.to_string()))?;
    match out {
        Some(path) => std::fs::write(path, json + "\n").map_err(|source| CliError::Write {
            path: path.to_path_buf(),
            source,
        })?,
        None => println!("{json}"),
    }
    Ok(())
}
