use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::args::{LoadArgs, OutputFormat};
use crate::config::{apply_config, load_config};
use crate::error::AppResult;
use crate::load::{RunConfig, run_load};
use crate::metrics::print_report;
use crate::shutdown::{setup_signal_shutdown_handler, shutdown_channel};

/// Parses the command line, merges the config file, runs the load test and
/// prints the summary. Per-request failures never make this fail; only
/// configuration and startup problems do.
///
/// # Errors
///
/// Returns an error for invalid arguments or config, when the runtime or
/// HTTP client cannot be built, or when the report cannot be written.
pub fn run() -> AppResult<()> {
    let (args, matches) = parse_args()?;

    crate::logger::init_logging(args.verbose, args.no_color);

    let (run_config, output_format) = build_run_config(args, &matches)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(run_config, output_format))
}

fn parse_args() -> AppResult<(LoadArgs, ArgMatches)> {
    let matches = LoadArgs::command().get_matches();
    let args = LoadArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

fn build_run_config(
    mut args: LoadArgs,
    matches: &ArgMatches,
) -> AppResult<(RunConfig, OutputFormat)> {
    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(&mut args, matches, &config)?;
    }
    let run_config = RunConfig::from_args(&args).inspect_err(|err| {
        tracing::error!("{}", err);
    })?;
    Ok((run_config, args.output_format))
}

async fn run_async(config: RunConfig, output_format: OutputFormat) -> AppResult<()> {
    if output_format == OutputFormat::Text {
        println!(
            "Starting load test: concurrency={}, duration={:?}, base={}",
            config.concurrency.get(),
            config.duration,
            config.base_url.as_str().trim_end_matches('/')
        );
    }

    let (shutdown_tx, _) = shutdown_channel();
    let signal_handle = setup_signal_shutdown_handler(&shutdown_tx);

    let result = run_load(&config, &shutdown_tx).await;
    signal_handle.abort();

    let report = result?;
    print_report(&report, output_format)
}
