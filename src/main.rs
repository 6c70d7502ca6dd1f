use bundle_deploy::{args, run_app};

fn main() {
    // Parse and validate command-line arguments
    let args = args::args_checks();

    if let Err(e) = run_app(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
