use std::process;

fn main() {
    process::exit(rentwise_cli::run());
}
