use slide3d_fit::config::{self, FitConfig, OutputFormat};
use slide3d_fit::io::{to_json_pretty, write_json_file};
use slide3d_fit::{SearchReport, SettingsFinder};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = config::load_config(Path::new(&config_path))?;
    let target = config.target.to_quad();

    let finder = SettingsFinder::new(config.search.clone());
    let report = finder
        .find_with_trace(&target, config.rectangle.width, config.rectangle.height)
        .map_err(|e| format!("Search failed: {e}"))?;

    let format = config.output.format;
    if format.includes_text() {
        print_text_summary(&config, &report);
    }

    if format.includes_json() {
        if let Some(path) = &config.output.json_out {
            write_json_file(path, &report)?;
            if format.includes_text() {
                println!("\nJSON report written to {}", path.display());
            } else {
                println!("JSON report written to {}", path.display());
            }
        } else {
            let json = to_json_pretty(&report)?;
            if format == OutputFormat::Both {
                println!("\nJSON report:\n{json}");
            } else {
                println!("{json}");
            }
        }
    }

    Ok(())
}

fn print_text_summary(config: &FitConfig, report: &SearchReport) {
    println!("Target: {}", config.target.to_quad());
    println!(
        "Rectangle: {} x {}",
        config.rectangle.width, config.rectangle.height
    );

    println!("\nRounds");
    for r in &report.trace.rounds {
        println!(
            "  #{:<2} rot_step={:>4.1} width_step={:.2} evals={:>7} score={:.6} elapsed_ms={:.1}",
            r.round, r.rotation_step, r.width_step, r.evaluations, r.best.score, r.elapsed_ms
        );
    }
    println!(
        "  total: evals={} elapsed_ms={:.1}",
        report.trace.evaluations(),
        report.trace.total_ms
    );

    println!("\nFound shape settings:\n{}", report.result);
    if !report.result.score.is_finite() {
        println!("warning: non-finite score, the fit failed");
    }
}

fn usage() -> String {
    "Usage: fit_quad <config.json>".to_string()
}
