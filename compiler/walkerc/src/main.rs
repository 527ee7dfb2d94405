//! Walker CLI
//!
//! `w e CODE [ARGUMENTS]` runs inline text and prints its result.
//! `w f PATH [ARGUMENTS]` runs a program file.

use std::io::Write;
use std::path::Path;
use std::sync::Once;

use walker_eval::{Interpreter, RunError, Value};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Enable with `RUST_LOG=walker_eval=debug` or `RUST_LOG=walker_eval=trace`.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

fn print_usage() {
    println!("w f [PATH] [ARGUMENTS]");
    println!("w e [CODE] [ARGUMENTS]");
}

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        println!("WALKER");
        println!("It walks.");
        return;
    }
    if args.len() < 3 {
        println!("No input given");
        print_usage();
        std::process::exit(1);
    }

    let mut interp = Interpreter::builder().args(args[3..].to_vec()).build();
    match args[1].as_str() {
        "e" => {
            let value = finish(interp.eval(&args[2]));
            print_value(value);
        }
        "f" => {
            finish(interp.eval_file(Path::new(&args[2])));
        }
        other => {
            println!("No such option: {other}");
            print_usage();
            std::process::exit(1);
        }
    }
}

/// The run's result. A failed run is reported and ends the process.
fn finish(result: Result<Value, RunError>) -> Value {
    match result {
        Ok(value) => value,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

/// Write the stringified result and a newline. The text need not be UTF-8.
fn print_value(value: Value) {
    let text = value.into_text();
    let mut stdout = std::io::stdout().lock();
    let written = stdout
        .write_all(text.as_bytes())
        .and_then(|()| stdout.write_all(b"\n"))
        .and_then(|()| stdout.flush());
    if let Err(error) = written {
        tracing::trace!(%error, "stdout write failed");
    }
}
