use crate::error::Result;
use std::fs;
use std::io;
use std::path::Path;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Default log file, created in the working directory
pub const LOG_FILE_NAME: &str = "corenlp-install-models.log";

/// Initialize logging: debug-level records append to the log file while
/// warnings and errors are mirrored to stderr. Called once from `main`;
/// nothing in the library logs before this runs.
pub fn init(log_path: &Path) -> Result<()> {
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    // Simple writer that always clones the same file handle.
    struct FileMakeWriter(fs::File);

    impl<'a> MakeWriter<'a> for FileMakeWriter {
        type Writer = fs::File;

        fn make_writer(&'a self) -> Self::Writer {
            self.0.try_clone().expect("failed to clone log file handle")
        }
    }

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("corenlp_models=debug"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(BoxMakeWriter::new(FileMakeWriter(file)))
        .with_ansi(false)
        .with_filter(env_filter);

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .with_filter(LevelFilter::WARN);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .init();

    tracing::info!("logging initialized at {}", log_path.display());

    Ok(())
}
