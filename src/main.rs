use clap::{Parser, Subcommand};
use portrait_align::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "portrait-align")]
#[command(about = "Aligns portrait photos so both eyes land at fixed canvas coordinates")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Align a portrait and write the result as JPEG
    Align {
        /// Path to the source photograph
        #[arg(short, long)]
        input: PathBuf,

        /// Detected left eye center, as "x,y"
        #[arg(short, long, value_parser = parse_point)]
        left_eye: Point2D,

        /// Detected right eye center, as "x,y"
        #[arg(short, long, value_parser = parse_point)]
        right_eye: Point2D,

        /// Width of the image the detector ran on, if different from the
        /// source width (landmarks are rescaled accordingly)
        #[arg(short, long)]
        detection_width: Option<u32>,

        /// Target configuration file (TOML or JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output file for the aligned JPEG
        #[arg(short, long)]
        output: PathBuf,

        /// Optional output file for the alignment report (JSON)
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Print the transform a landmark pair would produce, without warping
    Transform {
        /// Left eye center, as "x,y"
        #[arg(short, long, value_parser = parse_point)]
        left_eye: Point2D,

        /// Right eye center, as "x,y"
        #[arg(short, long, value_parser = parse_point)]
        right_eye: Point2D,

        /// Target configuration file (TOML or JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Emit the report as JSON instead of the console table
        #[arg(short, long)]
        json: bool,
    },

    /// Print the default target configuration as TOML
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(match cli.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        })
        .init();

    match cli.command {
        Commands::Align {
            input,
            left_eye,
            right_eye,
            detection_width,
            config,
            output,
            report,
        } => {
            handle_align(input, left_eye, right_eye, detection_width, config, output, report)?;
        }
        Commands::Transform {
            left_eye,
            right_eye,
            config,
            json,
        } => {
            handle_transform(left_eye, right_eye, config, json)?;
        }
        Commands::Config => {
            print!("{}", toml::to_string_pretty(&TargetConfig::default())?);
        }
    }

    Ok(())
}

fn handle_align(
    input: PathBuf,
    left_eye: Point2D,
    right_eye: Point2D,
    detection_width: Option<u32>,
    config_path: Option<PathBuf>,
    output: PathBuf,
    report_path: Option<PathBuf>,
) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    println!("Loading {}...", input.display());
    let source = image::open(&input).map_err(Error::Decode)?.to_rgb8();
    println!("Source: {}x{}", source.width(), source.height());

    let mut landmarks = LandmarkPair::new(left_eye, right_eye);
    if let Some(detection_width) = detection_width {
        landmarks = landmarks.rescaled_to(source.width() as f64, detection_width as f64)?;
        log::info!(
            "rescaled landmarks from detection width {}: left {} right {}",
            detection_width,
            landmarks.left,
            landmarks.right
        );
    }

    let (canvas, report) = align_image(&source, &landmarks, &config)?;
    let jpeg = encode_jpeg(&canvas, config.output_quality)?;
    std::fs::write(&output, &jpeg)?;

    print_report(&report);
    if let Some(report_path) = report_path {
        std::fs::write(&report_path, serde_json::to_string_pretty(&report)?)?;
        println!("Wrote report to {}", report_path.display());
    }
    println!("Wrote {} ({} bytes)", output.display(), jpeg.len());

    Ok(())
}

fn handle_transform(
    left_eye: Point2D,
    right_eye: Point2D,
    config_path: Option<PathBuf>,
    json: bool,
) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let landmarks = LandmarkPair::new(left_eye, right_eye);

    let transform = SimilarityTransform::between(&landmarks, &config.target_pair())?;
    let report = AlignmentReport::new(&landmarks, &transform, &config);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<TargetConfig> {
    let config = match path {
        Some(path) => TargetConfig::load_from_file(path)?,
        None => TargetConfig::default(),
    };

    if let Err(errors) = config.validate() {
        anyhow::bail!("configuration validation failed:\n  - {}", errors.join("\n  - "));
    }

    Ok(config)
}

fn parse_point(s: &str) -> std::result::Result<Point2D, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected \"x,y\", got \"{}\"", s))?;
    let x: f64 = x.trim().parse().map_err(|_| format!("invalid x coordinate: {}", x))?;
    let y: f64 = y.trim().parse().map_err(|_| format!("invalid y coordinate: {}", y))?;
    Ok(Point2D::new(x, y))
}
