use std::{
    env,
    ffi::OsString,
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use monty::{stack::Mode, Config, Error, Vm};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// The command line is exactly `monty <file>`: the operand is the path whatever it looks like.
/// Run options are read from the environment.
#[derive(Parser, Debug)]
#[command(name = "monty", about = "Run a Monty bytecode file")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Monty bytecode file
    file: PathBuf,

    /// Do not warn about text left after an instruction
    #[arg(long, env = "MONTY_NO_WARNINGS", hide = true)]
    no_warnings: bool,

    /// Count comment lines in `L<n>` line numbers
    #[arg(long, env = "MONTY_COUNT_COMMENTS", hide = true)]
    count_comments: bool,

    /// Start in queue mode
    #[arg(long, env = "MONTY_QUEUE", hide = true)]
    queue: bool,
}

impl Cli {
    /// Parse `argv`, which must hold the program name and a single operand.
    fn parse_args(argv: Vec<OsString>) -> Option<Self> {
        let [program, file]: [OsString; 2] = argv.try_into().ok()?;

        // Everything after `--` is an operand, so `-x.m` or `--help` stay file names
        Cli::try_parse_from([program, OsString::from("--"), file]).ok()
    }

    fn config(&self) -> Config {
        Config {
            warn_ignored_text: !self.no_warnings,
            count_comment_lines: self.count_comments,
            mode: if self.queue { Mode::Queue } else { Mode::Stack },
        }
    }
}

/// Logging stays off unless RUST_LOG asks for it, so stderr only carries diagnostics.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn program_name() -> String {
    env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| "monty".to_string())
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let file = File::open(&cli.file).map_err(|source| Error::FileOpen {
        path: cli.file.display().to_string(),
        source,
    })?;

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut vm = Vm::new(cli.config(), stdout.lock(), stderr.lock());
    vm.run(BufReader::new(file))?;

    Ok(())
}

fn main() -> ExitCode {
    let Some(cli) = Cli::parse_args(env::args_os().collect()) else {
        eprintln!(
            "{}",
            Error::Usage {
                program: program_name()
            }
        );
        return ExitCode::FAILURE;
    };

    init_logging();
    debug!(file = %cli.file.display(), config = ?cli.config(), "starting");

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(error = ?err, "stopped");
            match err.downcast_ref::<Error>() {
                Some(err) => {
                    let _ = err.report(io::stderr().lock());
                }
                None => eprintln!("{}", err),
            }
            ExitCode::FAILURE
        }
    }
}
