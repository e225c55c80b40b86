use anyhow::{Context, Result, bail};
use clap::Parser;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;

use polymc::config::{FileConfig, RunConfig};
use polymc::geometry::Bounds;
use polymc::polyfile::load_polygon;
use polymc::sampler;

/// Estimate the area of a simple polygon with Monte Carlo sampling
///
/// Examples:
///   # One million points over the default [0,2]x[0,2] domain, 4 workers
///   polymc shapes/star.txt -w 4 -n 1000000
///
///   # Reproducible run with the domain fitted to the polygon
///   polymc shapes/lake.txt -w 8 -n 5000000 --seed 42 --fit-domain
///
///   # Explicit sampling domain
///   polymc shapes/star.txt -w 2 -n 200000 --domain "-1,-1,3,3"
///
///   # Use a config file
///   polymc --config my-settings.toml
#[derive(Parser, Debug)]
#[command(name = "polymc")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the polygon vertex file (one "x y" pair per line)
    polygon: Option<PathBuf>,

    /// Path to config file (optional, auto-searches polymc.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of sampling workers (positive integer)
    #[arg(short = 'w', long)]
    workers: Option<u64>,

    /// Total number of random points to classify (positive integer)
    #[arg(short = 'n', long)]
    samples: Option<u64>,

    /// Seed for the random streams; omit for a fresh run each time
    #[arg(long)]
    seed: Option<u64>,

    /// Sampling domain as "min_x,min_y,max_x,max_y" (default 0,0,2,2)
    #[arg(long, value_parser = parse_domain, allow_hyphen_values = true)]
    domain: Option<Bounds>,

    /// Fit the sampling domain to the polygon's bounding box (overrides --domain)
    #[arg(long)]
    fit_domain: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    let file_config = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config file: {:?}", config_path))?;
            Some(toml::from_str(&contents).context("Failed to parse config file")?)
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load()
    };

    let polygon_path = args
        .polygon
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.polygon.clone()));
    let workers = args
        .workers
        .or_else(|| file_config.as_ref().and_then(|c| c.workers));
    let samples = args
        .samples
        .or_else(|| file_config.as_ref().and_then(|c| c.samples));
    let seed = args
        .seed
        .or_else(|| file_config.as_ref().and_then(|c| c.seed));
    let fit_domain = args.fit_domain || file_config.as_ref().map(|c| c.fit_domain).unwrap_or(false);
    let domain = args.domain.or_else(|| {
        file_config
            .as_ref()
            .and_then(|c| c.domain)
            .map(Bounds::from)
    });
    let verbose = args.verbose || file_config.as_ref().map(|c| c.verbose).unwrap_or(false);

    let Some(polygon_path) = polygon_path else {
        bail!("Must provide a polygon file (positional argument or config file)");
    };
    let Some(workers) = workers else {
        bail!("Must provide a worker count via --workers/-w or the config file");
    };
    let Some(samples) = samples else {
        bail!("Must provide a sample count via --samples/-n or the config file");
    };

    println!("polymc - Monte Carlo Polygon Area Estimator");
    println!("===========================================");
    println!();

    let loaded = load_polygon(&polygon_path).context("Failed to load polygon")?;
    println!(
        "Loaded {} vertices from {}",
        loaded.polygon.len(),
        polygon_path.display()
    );
    if loaded.skipped_lines > 0 {
        println!("  Skipped {} unparseable lines", loaded.skipped_lines);
    }

    let domain = if fit_domain {
        Bounds::around_polygon(&loaded.polygon)
            .context("Cannot fit a domain around an empty polygon")?
    } else {
        domain.unwrap_or(Bounds::UNIT_SCALED)
    };

    let mut config = RunConfig::new(samples, workers as usize).with_domain(domain);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    if verbose {
        println!();
        println!("Configuration:");
        println!("  Polygon: {}", polygon_path.display());
        println!("  Workers: {}", config.worker_count);
        println!("  Samples: {}", config.total_points);
        match config.seed {
            Some(s) => println!("  Seed: {}", s),
            None => println!("  Seed: from entropy"),
        }
        println!(
            "  Domain: [{}, {}] x [{}, {}] (reference area {})",
            domain.min_x, domain.max_x, domain.min_y, domain.max_y,
            domain.area()
        );
    }
    println!();

    let pb = create_progress_bar(config.total_points);
    let start = Instant::now();
    let totals = sampler::run(&loaded.polygon, &config, |checked| {
        pb.set_position(checked);
    })
    .context("Sampling run failed")?;
    pb.finish();

    let area = sampler::estimate(&totals, &config);

    println!();
    println!(
        "Classified {} points ({} inside) [{:.1}s]",
        totals.checked,
        totals.inside,
        start.elapsed().as_secs_f32()
    );
    println!(
        "Done! Total time: {:.1}s",
        total_start.elapsed().as_secs_f32()
    );
    println!();
    println!("estimated area: {:.2} square units", area);

    Ok(())
}

fn parse_domain(s: &str) -> Result<Bounds, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 4 {
        return Err("expected four comma-separated numbers: min_x,min_y,max_x,max_y".to_string());
    }
    let mut values = [0.0f64; 4];
    for (slot, part) in values.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .map_err(|_| format!("'{}' is not a number", part))?;
    }
    let bounds = Bounds::new(values[0], values[1], values[2], values[3]);
    if bounds.area() <= 0.0 {
        return Err("domain must have positive width and height".to_string());
    }
    Ok(bounds)
}

fn create_progress_bar(total: u64) -> ProgressBar {
    // Progress belongs on stdout here; errors alone go to stderr.
    let pb = ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::stdout());
    pb.set_style(
        ProgressStyle::with_template("{bar:40.green} {percent}% ({pos}/{len} points)").unwrap(),
    );
    pb
}
