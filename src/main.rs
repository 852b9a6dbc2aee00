use arith_cli::config::usage_error;
use arith_cli::core::calculator;
use arith_cli::utils::{logger, output};
use arith_cli::{ArithError, CalculatorConfig};
use clap::error::ErrorKind;
use clap::Parser;

fn main() {
    output::force_color();

    let config = match CalculatorConfig::try_parse() {
        Ok(config) => config,
        Err(e) if e.kind() == ErrorKind::DisplayHelp => e.exit(),
        Err(e) => fail(usage_error(&e)),
    };

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if !config.extra.is_empty() {
        tracing::debug!("Ignoring extra arguments: {:?}", config.extra);
    }

    let (num1, num2, operation) = config.positionals();
    match calculator::run(num1, num2, operation) {
        Ok(result) => println!("{}", output::success_line(result)),
        Err(e) => fail(e),
    }
}

fn fail(e: ArithError) -> ! {
    tracing::debug!(
        "Calculation failed: {} (Category: {:?}, Suggestion: {})",
        e,
        e.category(),
        e.recovery_suggestion()
    );
    eprintln!("{}", output::error_line(&e.to_string()));
    std::process::exit(e.exit_code());
}
