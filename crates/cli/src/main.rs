use std::path::PathBuf;
use std::process;

use clap::Parser;

use mouthtone_core::capture::domain::frame_source::FrameSource;
use mouthtone_core::capture::infrastructure::nokhwa_camera::{self, NokhwaCamera};
use mouthtone_core::detection::infrastructure::cascade_loader;
use mouthtone_core::detection::infrastructure::haar_cascade_detector::HaarCascadeDetector;
use mouthtone_core::display::domain::display_sink::DisplaySink;
use mouthtone_core::display::infrastructure::minifb_display::MinifbDisplay;
use mouthtone_core::pipeline::frame_analyzer::FrameAnalyzer;
use mouthtone_core::pipeline::live_feedback_use_case::LiveFeedbackUseCase;
use mouthtone_core::shared::constants::WINDOW_TITLE;

/// Live face and mouth detection with mouth color feedback.
#[derive(Parser)]
#[command(name = "mouthtone")]
struct Cli {
    /// Camera device index.
    #[arg(long, default_value = "0")]
    device: u32,

    /// Requested capture width.
    #[arg(long, default_value = "640")]
    width: u32,

    /// Requested capture height.
    #[arg(long, default_value = "480")]
    height: u32,

    /// Requested capture frame rate.
    #[arg(long, default_value = "30")]
    fps: u32,

    /// Directory to load Haar cascade files from.
    #[arg(long)]
    cascade_dir: Option<PathBuf>,

    /// List available cameras and exit.
    #[arg(long)]
    list_devices: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.list_devices {
        return run_list_devices();
    }

    // Cascades load first: a broken install must fail before any
    // device or window is touched.
    let (face, mouth) = cascade_loader::load_cascades(cli.cascade_dir.as_deref())?;
    let analyzer = FrameAnalyzer::new(
        Box::new(HaarCascadeDetector::new(face)),
        Box::new(HaarCascadeDetector::new(mouth)),
    );

    let camera = NokhwaCamera::open(cli.device, cli.width, cli.height, cli.fps)?;
    let (width, height) = camera.dimensions();
    let source: Box<dyn FrameSource> = Box::new(camera);

    let sink: Box<dyn DisplaySink> = Box::new(MinifbDisplay::open(WINDOW_TITLE, width, height)?);
    let printer = Box::new(|line: &str| println!("{line}"));

    let mut use_case = LiveFeedbackUseCase::new(source, sink, analyzer, printer);
    use_case.run()?;

    if let Some([b, g, r]) = use_case.feedback().mean_bgr() {
        log::info!("Session ended; last mouth mean (BGR): {b:.1}, {g:.1}, {r:.1}");
    }
    Ok(())
}

fn run_list_devices() -> Result<(), Box<dyn std::error::Error>> {
    let devices = nokhwa_camera::list_devices()?;
    if devices.is_empty() {
        println!("No cameras found.");
        return Ok(());
    }
    for (index, name) in devices {
        println!("[{index}] {name}");
    }
    Ok(())
}
