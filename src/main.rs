use std::io::{BufWriter, stdout};

use tracing_subscriber::EnvFilter;

fn main() {
    let cli = dompet::app::parse_cli(std::env::args()).unwrap_or_else(|err| err.exit());

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log_level))
        .with_writer(std::io::stderr)
        .init();

    let stdout = stdout();
    let writer = BufWriter::new(stdout.lock());
    if let Err(err) = dompet::app::run(&cli, writer) {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}
