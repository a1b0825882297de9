use crate::kmlib::OnEmptyCluster;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Clone, Debug)]
#[command(name = "kpart")]
#[command(about = "K-means PARTitioning of delimited numeric data")]
#[command(version)]
pub struct ArgParser {
    #[command(flatten)]
    pub io: IOParams,

    #[command(flatten)]
    pub km: KMParams,
}

#[derive(clap::Args, Clone, Debug)]
pub struct IOParams {
    /// Delimited file of points to cluster, one comma-separated row per line
    #[arg(short, long, help_heading = "I/O")]
    pub input: PathBuf,

    /// Directory where cluster_<n>.txt files are written
    #[arg(short, long, default_value = ".", help_heading = "I/O")]
    pub out_dir: PathBuf,

    /// Verbose logging
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

#[derive(clap::Args, Clone, Debug)]
pub struct KMParams {
    /// Number of clusters
    #[arg(short, long, help_heading = "Clustering")]
    pub k: usize,

    /// Seed for centroid selection, default draws from entropy
    #[arg(long, help_heading = "Clustering")]
    pub seed: Option<u64>,

    /// Maximum assign/update iterations before giving up (off=0)
    #[arg(long, default_value_t = 0, help_heading = "Clustering")]
    pub max_iterations: usize,

    /// Per-coordinate centroid movement tolerated as converged (exact=0)
    #[arg(long, default_value_t = 0.0, help_heading = "Clustering")]
    pub epsilon: f32,

    /// What to do with clusters that lose all of their points
    #[arg(long, value_enum, default_value = "drop", help_heading = "Clustering")]
    pub on_empty: OnEmptyCluster,
}

impl ArgParser {
    /// Validate command line arguments
    pub fn validate(&self) -> bool {
        let mut is_ok = true;

        is_ok &= validate_file(&self.io.input, "--input");

        if !self.io.out_dir.exists() {
            error!("--out-dir does not exist");
            is_ok = false;
        } else if !self.io.out_dir.is_dir() {
            error!("--out-dir is not a directory");
            is_ok = false;
        }

        if self.km.k < 1 {
            error!("--k must be at least 1");
            is_ok = false;
        }

        if self.km.epsilon < 0.0 {
            error!("--epsilon must be non-negative");
            is_ok = false;
        }

        is_ok
    }
}

/// Helper function to validate a file's existence and type
fn validate_file(path: &Path, label: &str) -> bool {
    if !path.exists() {
        error!("{} does not exist", label);
        return false;
    }
    if !path.is_file() {
        error!("{} is not a file", label);
        return false;
    }
    true
}
