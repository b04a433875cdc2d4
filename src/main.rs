use clap::Parser;
use namefix::cli::Args;
use namefix::{logging, run, Console};
use tracing::{debug, error};

fn main() {
    let args = Args::parse();

    logging::init(args.verbose);

    let options = args.options();
    debug!(?options, "Resolved run options");

    let mut console = Console::stdout();
    let stdin = std::io::stdin();

    if let Err(e) = run(&options, &mut stdin.lock(), &mut console) {
        error!("{}", e);
        eprintln!("\nError: {}", e.detailed_message());
        std::process::exit(e.exit_code().into());
    }
}
