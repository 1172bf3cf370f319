//! Binary entrypoint for typn-cli (made by FontLab https://www.fontlab.com/)

fn main() {
    if let Err(err) = typn_cli::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
