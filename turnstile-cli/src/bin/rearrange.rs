use clap::Parser;
use turnstile_cli::logging;
use turnstile_core::Rearranger;

const DEMO: [i64; 12] = [-3, 1, 2, 4, -6, 8, -8, -1, -4, -5, -6, -7];

#[derive(Parser)]
#[command(name = "rearrange")]
#[command(about = "Alternate non-negative and negative integers, keeping their order")]
struct Cli {
    /// Integers to rearrange; the demo sequence is used when none are given
    #[arg(allow_negative_numbers = true)]
    values: Vec<i64>,
}

fn main() {
    logging::init("warn");
    let cli = Cli::parse();

    let values = if cli.values.is_empty() { DEMO.to_vec() } else { cli.values };
    tracing::debug!("Rearranging {} value(s)", values.len());

    println!("{:?}", Rearranger::new(values).rearrange());
}
