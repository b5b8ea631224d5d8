use lodestone::config::{Config, OutputFormat};
use lodestone::{load_file, output, Result};
use lodestone_logger::{log, LogSeverity::Info};

#[tokio::main]
async fn main() {
    log("Lodestone init".to_string(), Info);
    if let Err(error) = run().await {
        eprintln!("error: {}", error);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = Config::from_args(std::env::args().skip(1))?;
    let colors = config.load_colors().await?;
    let decoded = load_file(&config.input).await?;

    match config.format {
        OutputFormat::Json => println!("{}", output::to_json(&decoded, &colors)?),
        OutputFormat::Summary => print!("{}", output::summary(&decoded)),
    }
    Ok(())
}
