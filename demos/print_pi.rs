// ============================================================================
// Print Pi Example
// ============================================================================
//
// Usage: cargo run --example print_pi [--features logging] -- [digits]

use pi_spigot::prelude::*;
use std::sync::Arc;

const DEFAULT_DIGITS: usize = 10;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt::init();

    let digit_count = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<usize>() {
            Ok(n) => n,
            Err(e) => {
                eprintln!("invalid digit count {:?}: {}", arg, e);
                std::process::exit(2);
            },
        },
        None => DEFAULT_DIGITS,
    };

    println!("=== Pi Spigot Example ===\n");

    // Refuse to compute on a machine that fails validation
    let arithmetic = EmulatedArithmetic::new();
    match run_self_test(&arithmetic) {
        Ok(report) => println!(
            "Self-test passed: {} checks on {} ({} skipped)\n",
            report.checks, report.backend, report.skipped
        ),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        },
    }

    let config = SpigotConfig::emulated(digit_count);
    if let Err(e) = config.validate() {
        eprintln!("invalid configuration: {}", e);
        std::process::exit(2);
    }

    let computation = SpigotComputation::new(
        digit_count,
        Box::new(arithmetic),
        Arc::new(LoggingEventHandler),
    );

    let expansion = match computation.collect_expansion() {
        Ok(expansion) => expansion,
        Err(e) => {
            eprintln!("computation failed: {}", e);
            std::process::exit(1);
        },
    };
    let reference = reference_digits(digit_count, CarryResetPolicy::ResetBoth);

    println!("Emulated:  {}", expansion);
    println!("Reference: {}", reference);

    if expansion.to_string() == reference {
        println!("\nOutputs match ({} digits)", expansion.len());
    } else {
        println!("\nOutputs differ");
        std::process::exit(1);
    }

    if let Some(value) = expansion.to_decimal() {
        println!("As decimal: {}", value);
    }
}
