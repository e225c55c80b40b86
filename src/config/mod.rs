use serde::Deserialize;
use std::path::PathBuf;

use crate::geometry::Bounds;

/// Everything one sampling run needs, fixed before any worker starts.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Total random points to classify across all workers.
    pub total_points: u64,
    /// Number of concurrent sampling workers.
    pub worker_count: usize,
    /// Sampling domain; its area is the Monte Carlo reference area.
    pub domain: Bounds,
    /// Base seed for the per-worker random streams. None draws one from
    /// entropy, so repeated runs differ.
    pub seed: Option<u64>,
}

impl RunConfig {
    pub fn new(total_points: u64, worker_count: usize) -> Self {
        Self {
            total_points,
            worker_count,
            domain: Bounds::UNIT_SCALED,
            seed: None,
        }
    }

    pub fn with_domain(mut self, domain: Bounds) -> Self {
        self.domain = domain;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

fn default_verbose() -> bool {
    false
}
fn default_fit_domain() -> bool {
    false
}

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub polygon: Option<PathBuf>,
    #[serde(default)]
    pub workers: Option<u64>,
    #[serde(default)]
    pub samples: Option<u64>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
    #[serde(default = "default_fit_domain")]
    pub fit_domain: bool,
    #[serde(default)]
    pub domain: Option<DomainConfig>,
}

fn default_domain_min() -> f64 {
    0.0
}
fn default_domain_max() -> f64 {
    2.0
}

/// `[domain]` table of the config file; mirrors the classic [0,2]x[0,2]
/// square when fields are omitted.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct DomainConfig {
    #[serde(default = "default_domain_min")]
    pub min_x: f64,
    #[serde(default = "default_domain_min")]
    pub min_y: f64,
    #[serde(default = "default_domain_max")]
    pub max_x: f64,
    #[serde(default = "default_domain_max")]
    pub max_y: f64,
}

impl Default for DomainConfig {
    fn default() -> Self {
        Self {
            min_x: default_domain_min(),
            min_y: default_domain_min(),
            max_x: default_domain_max(),
            max_y: default_domain_max(),
        }
    }
}

impl From<DomainConfig> for Bounds {
    fn from(d: DomainConfig) -> Self {
        Bounds::new(d.min_x, d.min_y, d.max_x, d.max_y)
    }
}

impl FileConfig {
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("polymc.toml"));
    paths.push(PathBuf::from(".polymc.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("polymc").join("config.toml"));
        paths.push(config_dir.join("polymc.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".polymc.toml"));
        paths.push(home.join(".config").join("polymc").join("config.toml"));
    }

    paths
}
