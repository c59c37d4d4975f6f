use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use reportkit::{EnumJobOutcome, SystemClipboard, read_job_file, run_job};
use tracing::error;

#[derive(Parser)]
#[command(name = "reportkit")]
#[command(about = "Export tabular reports as spreadsheets, PDF documents or clipboard JSON")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Job file describing the export
    job: PathBuf,
    /// Output directory (overrides the job file)
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = reportkit_log::C_LOG_LEVEL_DEFAULT)]
    log_level: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = reportkit_log::init(&cli.log_level) {
        eprintln!("{err}");
    }

    let job_file = match read_job_file(&cli.job) {
        Ok(job_file) => job_file,
        Err(err) => {
            error!(job = %cli.job.display(), error = %err, "cannot read job file");
            return ExitCode::FAILURE;
        }
    };
    let mut options = job_file.options;
    if let Some(dir_out) = cli.out_dir {
        options.dir_out = dir_out;
    }

    match run_job(&job_file.job, &options, &mut SystemClipboard) {
        Ok(EnumJobOutcome::File(path)) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        Ok(EnumJobOutcome::Copied) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "export failed");
            ExitCode::FAILURE
        }
    }
}
