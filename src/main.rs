use std::env;
use std::io::{self, BufWriter};
use std::process::ExitCode;
use termgen::{write_terms, Config, MAX_DEPTH_VAR, USAGE};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn read_config() -> Result<Config, termgen::ConfigError> {
    let max_depth = env::var(MAX_DEPTH_VAR).ok();
    let args = env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned());
    Config::from_args(args)?.with_max_depth_var(max_depth.as_deref())
}

fn main() -> ExitCode {
    init_logging();

    let config = match read_config() {
        Ok(config) => config,
        Err(e) if e.is_usage() => {
            debug!("rejected arguments: {}", e);
            println!("{}", USAGE);
            return ExitCode::from(1);
        }
        Err(e) => {
            error!("{}", e);
            return ExitCode::from(1);
        }
    };
    debug!(?config, "starting");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if let Err(e) = write_terms(&mut out, &mut rand::rng(), &config) {
        error!("failed to write terms: {}", e);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}
