use std::io::IsTerminal;
use std::process;

use clap::Parser;
use colored::Colorize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use dewdrop::cli::commands::register_builtin;
use dewdrop::cli::{Cli, CliError, Runner, TerminalRenderer};
use dewdrop::config::Settings;
use dewdrop::infrastructure::ServiceContainer;

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    let project_dir = match cli.project_dir.clone() {
        Some(dir) => Some(dir),
        None => std::env::current_dir().ok(),
    };

    let settings = match Settings::load(project_dir.as_deref()) {
        Ok(settings) => settings,
        Err(e) => fail(CliError::from(e)),
    };

    let color = !cli.no_color && settings.color.enabled(std::io::stdout().is_terminal());
    let container = ServiceContainer::new(settings);
    let mut runner = Runner::new(TerminalRenderer::stdio(color), container);

    if let Err(e) = register_builtin(&mut runner) {
        fail(e);
    }

    let code = runner.run(cli.command_name(), cli.command_args());
    process::exit(code);
}

fn fail(e: CliError) -> ! {
    eprintln!("{}", format!("Error: {}", e).red());
    process::exit(e.exit_code());
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    // Create a noisy module filter
    let noisy_modules = ["config"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Formatted output directed to stderr, stdout belongs to command output
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    let filtered_layer = fmt_layer.with_filter(filter).with_filter(module_filter);

    tracing_subscriber::registry().with(filtered_layer).init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}
