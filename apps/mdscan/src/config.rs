//! Configuration discovery and effective settings resolution.
//!
//! mdscan reads `mdscan.toml|yaml|yml` from the working directory (or the
//! closest ancestor) and merges it with CLI flags to produce an `Effective`
//! config. Defaults:
//! - `root`: `.`
//! - `mode`: `pages_alpha`
//! - `order`: `default`
//! - `out_dir`: `exports`
//! - `output`: `human`
//! - `outputs.csv|md`: true
//!
//! Overrides precedence: CLI > config file > defaults. Paths from the config
//! file are relative to the directory holding it.

use crate::error::ReportError;
use crate::models::{OrderPolicy, ReportMode};
use glob::Pattern;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_NAMES: [&str; 3] = ["mdscan.toml", "mdscan.yaml", "mdscan.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Output toggles under `[outputs]`.
pub struct OutputsCfg {
    pub csv: Option<bool>,
    pub md: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `mdscan.toml|yaml`.
pub struct MdscanConfig {
    pub root: Option<String>,
    pub mode: Option<ReportMode>,
    pub order: Option<OrderPolicy>,
    pub out_dir: Option<String>,
    pub output: Option<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
    pub outputs: Option<OutputsCfg>,
}

#[derive(Debug, Default, Clone)]
/// Values given on the command line; `None`/`false` defers to the config.
pub struct Overrides {
    pub repo_root: Option<String>,
    pub root: Option<String>,
    pub mode: Option<ReportMode>,
    pub order: Option<OrderPolicy>,
    pub out_dir: Option<String>,
    pub output: Option<String>,
    pub no_csv: bool,
    pub no_md: bool,
}

#[derive(Debug, Clone)]
/// Fully-resolved, immutable run configuration.
pub struct Effective {
    pub repo_root: PathBuf,
    pub config_path: Option<PathBuf>,
    pub root: PathBuf,
    pub mode: ReportMode,
    pub order: OrderPolicy,
    pub out_dir: PathBuf,
    pub output: String,
    pub csv: bool,
    pub md: bool,
    pub exclude: Vec<Pattern>,
}

impl Effective {
    /// Directory holding this mode's outputs: `{out_dir}/{mode}`.
    pub fn export_dir(&self) -> PathBuf {
        self.out_dir.join(self.mode.as_str())
    }

    /// `{out_dir}/{mode}/{mode}.{ext}`
    pub fn output_path(&self, ext: &str) -> PathBuf {
        self.export_dir()
            .join(format!("{}.{}", self.mode.as_str(), ext))
    }
}

/// Walk upward from `start` to detect the project root.
///
/// Stops when an `mdscan.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_NAMES.iter().any(|n| cur.join(n).exists()) || cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Path of the config file under `root`, TOML first.
pub fn find_config(root: &Path) -> Option<PathBuf> {
    CONFIG_NAMES
        .iter()
        .map(|n| root.join(n))
        .find(|p| p.is_file())
}

/// Load `MdscanConfig` from `root` if a config file is present.
pub fn load_config(root: &Path) -> Result<Option<MdscanConfig>, ReportError> {
    let Some(path) = find_config(root) else {
        return Ok(None);
    };
    let s = fs::read_to_string(&path).map_err(|e| ReportError::read(&path, e))?;
    let is_toml = path.extension().and_then(|e| e.to_str()) == Some("toml");
    let parsed = if is_toml {
        toml::from_str::<MdscanConfig>(&s).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str::<MdscanConfig>(&s).map_err(|e| e.to_string())
    };
    parsed
        .map(Some)
        .map_err(|message| ReportError::Config { path, message })
}

/// Resolve `Effective` by merging CLI overrides, discovered config, and defaults.
pub fn resolve_effective(cli: &Overrides) -> Result<Effective, ReportError> {
    let start = PathBuf::from(cli.repo_root.as_deref().unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let config_path = find_config(&repo_root);
    let cfg = load_config(&repo_root)?.unwrap_or_default();

    let root = match (&cli.root, &cfg.root) {
        (Some(r), _) => PathBuf::from(r),
        (None, Some(r)) => repo_root.join(r),
        (None, None) => repo_root.clone(),
    };
    let out_dir = match (&cli.out_dir, &cfg.out_dir) {
        (Some(d), _) => PathBuf::from(d),
        (None, Some(d)) => repo_root.join(d),
        (None, None) => repo_root.join("exports"),
    };
    let mode = cli.mode.or(cfg.mode).unwrap_or_default();
    let order = cli.order.or(cfg.order).unwrap_or_default();
    let output = cli
        .output
        .clone()
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());
    let outputs = cfg.outputs.unwrap_or_default();
    let csv = !cli.no_csv && outputs.csv.unwrap_or(true);
    let md = !cli.no_md && outputs.md.unwrap_or(true);

    let mut exclude = Vec::with_capacity(cfg.exclude.len());
    for pat in &cfg.exclude {
        let compiled = Pattern::new(pat).map_err(|e| ReportError::Config {
            path: config_path.clone().unwrap_or_else(|| repo_root.clone()),
            message: format!("bad exclude pattern '{}': {}", pat, e),
        })?;
        exclude.push(compiled);
    }

    Ok(Effective {
        repo_root,
        config_path,
        root,
        mode,
        order,
        out_dir,
        output,
        csv,
        md,
        exclude,
    })
}
