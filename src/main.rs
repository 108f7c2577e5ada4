use day_night_classifier::pipeline::services::image::open_path;
use day_night_classifier::{
    AppError, ClassificationReport, Configuration, Frame, LightingClassifier, LightingService,
};
use tower::ServiceExt;
use tracing::{error, warn, Level};

const USAGE: &str = "day-night-classifier [--json] <image-path>";

struct Args {
    json: bool,
    path: String,
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<Args, AppError> {
    let mut json = false;
    let mut path = None;

    for arg in args {
        match arg.as_str() {
            "--json" => json = true,
            "-h" | "--help" => return Err(AppError::Usage(USAGE.to_string())),
            _ if path.is_none() => path = Some(arg),
            _ => return Err(AppError::Usage(format!("unexpected argument '{arg}'"))),
        }
    }

    let path = path.ok_or_else(|| AppError::Usage(USAGE.to_string()))?;
    Ok(Args { json, path })
}

fn init_logging(log_level: &str) {
    let level = log_level.parse::<Level>().ok();
    tracing_subscriber::fmt()
        .with_max_level(level.unwrap_or(Level::INFO))
        .with_writer(std::io::stderr)
        .init();

    if level.is_none() {
        warn!("Unknown log level '{}', using info", log_level);
    }
}

fn render(report: &ClassificationReport) -> String {
    let result = &report.result;
    let details = &result.details;
    format!(
        "{}: {} ({}% confidence)\nBrightness: {}/255 ({:.1}%)\nWarmth: {} ({})\n{}",
        report.source,
        result.label,
        result.confidence,
        details.brightness,
        details.brightness_percent(),
        details.warmth,
        details.warmth_tone(),
        result.label.summary()
    )
}

async fn run(args: Args, configuration: Configuration) -> Result<(), AppError> {
    let classifier = LightingClassifier::from_config(configuration.classifier)?;
    let service = LightingService::new(classifier);

    let path = args.path.clone();
    let image = tokio::task::spawn_blocking(move || open_path(&path)).await??;

    let report = service.oneshot(Frame::new(args.path, image)).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report.result)?);
    } else {
        println!("{}", render(&report));
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = parse_args(std::env::args().skip(1))?;
    let configuration = Configuration::load()?;
    init_logging(&configuration.log_level);

    let result = run(args, configuration).await;
    if let Err(e) = &result {
        error!("Classification failed: {}", e);
    }
    result
}
