mod cli;
mod render;

use std::path::Path;
use std::process::ExitCode;

use huepick_config::HuepickConfig;
use huepick_core::{describe, detect};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use render::Renderer;

fn load_config(path: Option<&str>) -> HuepickConfig {
    let result = match path {
        Some(path) => huepick_config::load_config_from(Path::new(path)),
        None => huepick_config::load_config(),
    };
    result.unwrap_or_else(|e| {
        // Logging is not up yet; a bad config must still be visible.
        eprintln!("huepick: config load failed, using defaults: {e}");
        HuepickConfig::default()
    })
}

fn init_logging(directive: &str) {
    let directive: Directive = directive
        .parse()
        .unwrap_or_else(|_| "huepick=warn".parse().expect("static directive"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();
}

fn main() -> ExitCode {
    let args = cli::parse();

    let config = load_config(args.config.as_deref());

    let log_directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.as_filter().to_string());
    init_logging(&log_directive);

    tracing::info!("huepick v{} starting", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }

    if args.detect {
        for input in &args.inputs {
            let notation = detect(input).map_or("none", |n| n.name());
            println!("{input}\t{notation}");
        }
        return ExitCode::SUCCESS;
    }

    let format = args.format.map_or(config.output.format, Into::into);
    let renderer = Renderer::new(&config.output, format);

    let mut failed = false;
    for input in &args.inputs {
        let entries = match describe(input) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("failed to describe {input:?}: {e}");
                eprintln!("huepick: {e}");
                failed = true;
                continue;
            }
        };

        match renderer.render(input, &entries) {
            Ok(text) => println!("{}", text.trim_end()),
            Err(e) => {
                tracing::error!("render error: {e}");
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
