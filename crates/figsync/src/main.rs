//! figsync - generate React components from Figma component sets

fn main() {
    figsync_cli::init_tracing();
    let code = figsync_cli::run_cli(std::env::args().collect());
    std::process::exit(code);
}
