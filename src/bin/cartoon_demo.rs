use cartoon_filter::image::io::{load_rgb_image, save_rgb_image, write_json_file};
use cartoon_filter::{CartoonFilter, CartoonParams};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct CartoonToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub params: CartoonParams,
    pub output: CartoonOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct CartoonOutputConfig {
    #[serde(rename = "cartoon_image")]
    pub cartoon_image: PathBuf,
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<CartoonToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let mut img = load_rgb_image(&config.input)?;
    println!(
        "loaded {} ({}x{}, {} channels)",
        config.input.display(),
        img.w,
        img.h,
        img.channels
    );

    let filter = CartoonFilter::new(config.params);
    let report = filter.process(&mut img);
    println!(
        "regions={} total_ms={:.3}",
        report.region_count, report.timing.total_ms
    );
    for stage in &report.timing.stages {
        println!("  {:<14}{:.3} ms", stage.label, stage.elapsed_ms);
    }

    save_rgb_image(&img, &config.output.cartoon_image)?;
    if let Some(path) = &config.output.report_json {
        write_json_file(path, &report)?;
    }
    Ok(())
}

fn usage() -> String {
    "Usage: cartoon_demo <config.json>".to_string()
}
