use app_icons::generate::{self, GenerateError, GenerateReport};
use app_icons::output;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Source image name looked up in the project directory by default.
const DEFAULT_SOURCE: &str = "logo.png";

#[derive(Parser)]
#[command(name = "app-icons")]
#[command(about = "Generate Android and iOS app icons from a single image")]
#[command(long_about = "\
Generate Android and iOS app icons from a single image

Reads logo.png from the project directory and writes:

  android/app/src/main/res/
  ├── mipmap-mdpi/ic_launcher.png        48x48
  ├── mipmap-hdpi/ic_launcher.png        72x72
  ├── mipmap-xhdpi/ic_launcher.png       96x96
  ├── mipmap-xxhdpi/ic_launcher.png      144x144
  └── mipmap-xxxhdpi/ic_launcher.png     192x192
  ios/Runner/Assets.xcassets/AppIcon.appiconset/
  ├── Icon-App-20x20@1x.png ... Icon-App-1024x1024@1x.png   (15 files)
  └── Contents.json

Existing icons are overwritten. Run it with no arguments from the root of a
Flutter project.")]
#[command(version)]
struct Cli {
    /// Source image (defaults to logo.png in the project directory)
    #[arg(long)]
    source: Option<PathBuf>,

    /// Project root that receives the android/ and ios/ icon trees
    #[arg(long, default_value = ".")]
    project_dir: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let source = cli
        .source
        .unwrap_or_else(|| cli.project_dir.join(DEFAULT_SOURCE));

    match run(&source, &cli.project_dir) {
        Ok(_) => ExitCode::SUCCESS,
        Err(GenerateError::SourceNotFound(path)) => {
            println!("{}", output::format_missing_source(&path));
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Run the pipeline, printing progress from a dedicated thread.
fn run(source: &Path, project_dir: &Path) -> Result<GenerateReport, GenerateError> {
    let (tx, rx) = std::sync::mpsc::channel();
    let printer = std::thread::spawn(move || {
        for event in rx {
            output::print_generate_event(&event);
        }
    });
    let result = generate::generate(source, project_dir, Some(tx));
    printer.join().ok();
    result
}
