use rebat::run_main;

fn main() {
    // Fatal errors (bad configuration, missing external tool, ...) exit 1;
    // per-item failures inside a batch are handled and logged downstream.
    if let Err(e) = run_main() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
