fn main() {
    if let Err(err) = merit::run() {
        eprintln!("{}", merit::format_error(&err));
        std::process::exit(1);
    }
}
