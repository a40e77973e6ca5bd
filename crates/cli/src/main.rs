fn main() {
    if let Err(e) = buildship_cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
