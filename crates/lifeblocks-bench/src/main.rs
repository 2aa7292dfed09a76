use std::path::{Path, PathBuf};
use std::process;

use lifeblocks_bench::report;
use lifeblocks_bench::runner::BenchmarkRunner;
use lifeblocks_bench::scenes;
use lifeblocks_render::FrameBuffer;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    let mut baseline_path: Option<PathBuf> = None;
    let mut output_path: Option<PathBuf> = None;
    let mut snapshot_dir: Option<PathBuf> = None;
    let mut palette_path: Option<PathBuf> = None;
    let mut render_path: Option<PathBuf> = None;
    let mut regression_threshold = 10.0f64;
    let mut frame_count = 60u32;

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        let mut value = || {
            i += 1;
            match args.get(i) {
                Some(v) => v.clone(),
                None => {
                    eprintln!("Missing value for {}", flag);
                    process::exit(1);
                }
            }
        };
        match flag {
            "--baseline" => baseline_path = Some(PathBuf::from(value())),
            "--output" => output_path = Some(PathBuf::from(value())),
            "--snapshots" => snapshot_dir = Some(PathBuf::from(value())),
            "--palette" => palette_path = Some(PathBuf::from(value())),
            "--render-settings" => render_path = Some(PathBuf::from(value())),
            "--regression-threshold" => {
                regression_threshold = value().parse().unwrap_or_else(|_| {
                    eprintln!("invalid --regression-threshold value");
                    process::exit(1);
                });
            }
            "--frames" => {
                frame_count = value().parse().unwrap_or_else(|_| {
                    eprintln!("invalid --frames value");
                    process::exit(1);
                });
            }
            "--help" | "-h" => {
                eprintln!("Usage: bench-runner [OPTIONS]");
                eprintln!("  --baseline <path>              Load baseline JSON for comparison");
                eprintln!("  --output <path>                Save current results as JSON baseline");
                eprintln!("  --snapshots <dir>              Write the last frame of each scene as PNG");
                eprintln!("  --palette <path>               Material palette RON (default: built in)");
                eprintln!("  --render-settings <path>       Render settings RON (default: built in)");
                eprintln!(
                    "  --regression-threshold <pct>   Regression threshold percentage (default: 10)"
                );
                eprintln!("  --frames <n>                   Frames per scene (default: 60)");
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                process::exit(1);
            }
        }
        i += 1;
    }

    let palette = match palette_path {
        Some(ref path) => lifeblocks_config::palette_from_str(&read_or_exit(path)),
        None => lifeblocks_config::default_palette(),
    };
    let render_settings = match render_path {
        Some(ref path) => lifeblocks_config::render_settings_from_str(&read_or_exit(path)),
        None => lifeblocks_config::default_render_settings(),
    };
    let runner = BenchmarkRunner::new(
        frame_count,
        render_settings,
        lifeblocks_config::default_driver_settings(),
        palette,
    );

    let mut results = Vec::new();
    for config in &scenes::standard_scenes() {
        let (result, frame) = match runner.run_scene(config) {
            Ok(run) => run,
            Err(e) => {
                log::error!("Scene '{}' failed: {e}", config.name);
                process::exit(1);
            }
        };
        if let Some(ref dir) = snapshot_dir {
            let path = dir.join(format!("{}.png", config.name));
            match write_snapshot(&path, &frame) {
                Ok(()) => log::info!("  Wrote {}", path.display()),
                Err(e) => log::warn!("  Failed to write {}: {e}", path.display()),
            }
        }
        results.push(result);
    }

    // Print markdown summary
    println!("\n## Benchmark Results\n");
    println!("{}", report::format_markdown(&results));

    if let Some(ref path) = output_path {
        let baseline = report::Baseline {
            timestamp: run_timestamp(),
            results: results.clone(),
        };
        match report::save_baseline(path, &baseline) {
            Ok(()) => log::info!("Saved baseline to {}", path.display()),
            Err(e) => log::error!("Failed to save baseline to {}: {e}", path.display()),
        }
    }

    if let Some(ref path) = baseline_path {
        if let Some(baseline) = report::load_baseline(path) {
            let regressions = report::compare(&results, &baseline, regression_threshold);
            println!(
                "{}",
                report::format_comparison(&regressions, regression_threshold)
            );
            if !regressions.is_empty() {
                eprintln!(
                    "ERROR: {} regressions detected, exiting with code 1",
                    regressions.len()
                );
                process::exit(1);
            }
        } else {
            log::warn!("Baseline file not found: {}", path.display());
        }
    }

    log::info!("Benchmark complete.");
}

fn read_or_exit(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {e}", path.display());
        process::exit(1);
    })
}

fn write_snapshot(path: &Path, frame: &FrameBuffer) -> image::ImageResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(image::ImageError::IoError)?;
    }
    let image = image::RgbaImage::from_raw(frame.width(), frame.height(), frame.to_rgba8())
        .ok_or_else(|| {
            image::ImageError::Parameter(image::error::ParameterError::from_kind(
                image::error::ParameterErrorKind::DimensionMismatch,
            ))
        })?;
    image.save(path)
}

/// Seconds since the Unix epoch, tagged for the baseline file.
fn run_timestamp() -> String {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("bench-{}", secs)
}
