//! CLI for generating images via the Draw Things API.

use clap::Parser;
use drawthings::{Client, StderrLogger, TextToImageRequest, DEFAULT_BASE_URL};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "drawthings")]
#[command(about = "Generate images using the Draw Things API")]
#[command(version)]
struct Cli {
    /// The text prompt describing the desired image
    prompt: String,

    /// Elements to exclude from the image
    #[arg(long, default_value = "")]
    negative_prompt: String,

    /// Number of inference steps (1-150)
    #[arg(long, default_value_t = 20)]
    steps: u32,

    /// Controls adherence to the prompt (1.0-20.0)
    #[arg(long, default_value_t = 4.0)]
    guidance_scale: f64,

    /// Width of the generated image in pixels (64-4096)
    #[arg(long, default_value_t = 512)]
    width: u32,

    /// Height of the generated image in pixels (64-4096)
    #[arg(long, default_value_t = 512)]
    height: u32,

    /// Random seed (-1 for a fresh random seed per call)
    #[arg(long, default_value_t = -1)]
    seed: i64,

    /// Output file path
    #[arg(short, long, default_value = "output.png")]
    output: PathBuf,

    /// Base URL of the Draw Things API server
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 300)]
    timeout: u64,

    /// Log request/response bodies to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "drawthings=debug".into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    let mut builder = Client::builder()
        .base_url(&cli.base_url)
        .timeout(Duration::from_secs(cli.timeout));
    if cli.verbose {
        builder = builder.logger(StderrLogger);
    }
    let client = builder.build()?;

    let request = TextToImageRequest::new(&cli.prompt)
        .with_negative_prompt(&cli.negative_prompt)
        .with_steps(cli.steps)
        .with_guidance_scale(cli.guidance_scale)
        .with_size(cli.width, cli.height)
        .with_seed(cli.seed);

    println!("Generating image with prompt: {:?}", cli.prompt);
    println!(
        "Parameters: steps={}, guidance_scale={:.2}, width={}, height={}, seed={}",
        cli.steps, cli.guidance_scale, cli.width, cli.height, cli.seed
    );

    client.generate_image_and_save(request, &cli.output).await?;

    println!("Image saved to: {}", cli.output.display());
    Ok(())
}
