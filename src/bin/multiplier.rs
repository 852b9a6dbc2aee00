use arith_cli::core::multiplier;
use arith_cli::utils::{logger, output};

fn main() {
    logger::init_cli_logger(false);

    let args: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    multiplier::echo_args(&args);

    if let Err(e) = multiplier::run(&args) {
        tracing::debug!(
            "Multiplication failed: {} (Category: {:?}, Suggestion: {})",
            e,
            e.category(),
            e.recovery_suggestion()
        );
        // this binary prints without colour
        eprintln!("{}", output::error_text(&e.to_string()));
        std::process::exit(e.exit_code());
    }
}
