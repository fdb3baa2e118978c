use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use words_segmentation::words;

const SAMPLE: &str = "東京abcかなカナ漢字123 אני אחד私は学生です";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let text = if args.is_empty() {
        SAMPLE.to_owned()
    } else {
        args.join(" ")
    };

    match words(&text) {
        Ok(tokens) => {
            println!("{tokens:?}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
