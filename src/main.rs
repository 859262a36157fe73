use std::process;

use radarplot::cli;
use radarplot::run;

fn main() {
    let args = cli::parse();
    let level = if args.verbose { "debug" } else { "info" };
    let directive: tracing_subscriber::filter::Directive = match format!("radarplot={level}").parse() {
        Ok(directive) => directive,
        Err(e) => {
            eprintln!("Application error: {e}");
            process::exit(1);
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(directive))
        .with_writer(std::io::stderr)
        .init();
    if let Err(e) = run::cmd(args) {
        eprintln!("Application error: {e}");
        process::exit(1);
    }
}
