use clap::Parser;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use linecount::cli::Cli;
use linecount::config::{FileConfigLoader, IgnoreSettings};
use linecount::output::{OutputFormat, StatsFormatter, StatsJsonFormatter, StatsTextFormatter};
use linecount::{EXIT_ERROR, EXIT_SUCCESS, LineCounter, ScanResult};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(&cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    };

    std::process::exit(exit_code);
}

fn init_logging(verbose: bool) {
    // RUST_LOG wins when set; --verbose adds DEBUG on top of it.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let filter = if verbose {
        filter.add_directive(Level::DEBUG.into())
    } else {
        filter
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

fn run(cli: &Cli) -> linecount::Result<()> {
    // 1. Resolve ignore settings: config file first, then command-line excludes
    let base = match cli.config.as_deref() {
        Some(path) => FileConfigLoader::new().load_from_path(path)?.ignore,
        None => IgnoreSettings::default(),
    };
    let ignore = cli.apply_ignore_overrides(base).build()?;

    // 2. Scan
    let root = std::path::absolute(&cli.path).unwrap_or_else(|_| cli.path.clone());
    let show_chrome = !cli.quiet && cli.format == OutputFormat::Text;
    if show_chrome {
        println!("\nCounting lines in: {}", root.display());
    }
    let result = LineCounter::new(ignore).count(&root)?;

    // 3. Render
    print!("{}", format_output(cli, &result)?);
    if show_chrome {
        println!("Analyzed {} files\n", result.total_files());
    }
    Ok(())
}

fn format_output(cli: &Cli, result: &ScanResult) -> linecount::Result<String> {
    match cli.format {
        OutputFormat::Text => StatsTextFormatter::new(cli.color.into()).format(result),
        OutputFormat::Json => StatsJsonFormatter
            .format(result)
            .map(|json| format!("{json}\n")),
    }
}
