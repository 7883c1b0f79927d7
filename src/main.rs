use clap::{Parser, ValueEnum};
use sobel_edges::config::{load_config, EdgeToolConfig};
use sobel_edges::image::io::OutputFormat;
use sobel_edges::{run_edge_tool, BorderPolicy, EdgeError, GradientResponse};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sobel-edges")]
#[command(about = "Sobel horizontal/vertical edge detection (JPG, PNG, BMP, PGM; color is converted to grayscale)")]
#[command(version)]
struct Cli {
    /// Image file name inside the input directory.
    #[arg(long)]
    input: Option<String>,

    /// JSON run config; flags given here override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory input names are resolved against [default: input].
    #[arg(long)]
    input_dir: Option<PathBuf>,

    /// Directory the edge maps are written to [default: output].
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Output image format [default: png].
    #[arg(long, value_enum)]
    format: Option<CliFormat>,

    /// Border handling for taps outside the image [default: replicate].
    #[arg(long, value_enum)]
    border: Option<CliBorder>,

    /// How signed gradients map to 8-bit output [default: magnitude].
    #[arg(long, value_enum)]
    response: Option<CliResponse>,

    /// Write a JSON run summary to this path.
    #[arg(long)]
    report: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum CliFormat {
    Png,
    Bmp,
    Jpeg,
    Pgm,
}

#[derive(Clone, Copy, ValueEnum)]
enum CliBorder {
    Replicate,
    Zero,
}

#[derive(Clone, Copy, ValueEnum)]
enum CliResponse {
    Magnitude,
    Clamped,
}

impl From<CliFormat> for OutputFormat {
    fn from(value: CliFormat) -> Self {
        match value {
            CliFormat::Png => OutputFormat::Png,
            CliFormat::Bmp => OutputFormat::Bmp,
            CliFormat::Jpeg => OutputFormat::Jpeg,
            CliFormat::Pgm => OutputFormat::Pgm,
        }
    }
}

impl From<CliBorder> for BorderPolicy {
    fn from(value: CliBorder) -> Self {
        match value {
            CliBorder::Replicate => BorderPolicy::Replicate,
            CliBorder::Zero => BorderPolicy::Constant(0),
        }
    }
}

impl From<CliResponse> for GradientResponse {
    fn from(value: CliResponse) -> Self {
        match value {
            CliResponse::Magnitude => GradientResponse::Magnitude,
            CliResponse::Clamped => GradientResponse::Clamped,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        if matches!(err, EdgeError::FileNotFound { .. }) {
            eprintln!("{}", usage());
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), EdgeError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => EdgeToolConfig::default(),
    };
    apply_overrides(&mut config, cli);

    let report = run_edge_tool(&config)?;
    println!("Edge detection complete!");
    println!(
        "  Horizontal edges (vertical lines): {}",
        report.horizontal_output.display()
    );
    println!(
        "  Vertical edges (horizontal lines): {}",
        report.vertical_output.display()
    );
    Ok(())
}

fn apply_overrides(config: &mut EdgeToolConfig, cli: Cli) {
    if let Some(input) = cli.input {
        config.input = Some(input);
    }
    if let Some(dir) = cli.input_dir {
        config.input_dir = dir;
    }
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }
    if let Some(format) = cli.format {
        config.output_format = format.into();
    }
    if let Some(border) = cli.border {
        config.filter.border = border.into();
    }
    if let Some(response) = cli.response {
        config.filter.response = response.into();
    }
    if let Some(report) = cli.report {
        config.report = Some(report);
    }
}

fn usage() -> String {
    [
        "",
        "Usage: sobel-edges --input=image.[jpg|png|bmp|pgm]",
        "Note: place your images in the 'input/' directory",
        "",
        "Example: sobel-edges --input=photo.jpg",
        "         (file should be at: input/photo.jpg)",
    ]
    .join("\n")
}
