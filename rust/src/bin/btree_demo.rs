//! Builds a B-tree from a key list and prints it after every insertion.
//!
//! Configuration comes from the environment:
//! - `BTREE_MIN_DEGREE`: minimum degree `t` (default 2)
//! - `BTREE_KEYS`: comma-separated integer keys (default `10,20,5,6,12,30,7,17`)
//! - `RUST_LOG`: tracing filter (default `btree=debug`)

use btree::{BTree, BTreeError};
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_KEYS: [i64; 8] = [10, 20, 5, 6, 12, 30, 7, 17];

#[derive(Error, Debug)]
enum ConfigError {
    #[error("BTREE_MIN_DEGREE must be a positive integer, got {0:?}")]
    InvalidDegree(String),
    #[error("BTREE_KEYS entry {0:?} is not an integer")]
    InvalidKey(String),
    #[error(transparent)]
    Tree(#[from] BTreeError),
}

struct DemoConfig {
    min_degree: usize,
    keys: Vec<i64>,
}

impl DemoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let min_degree = match std::env::var("BTREE_MIN_DEGREE") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidDegree(raw.clone()))?,
            Err(_) => 2,
        };
        btree::validate_degree(min_degree)?;

        let keys = match std::env::var("BTREE_KEYS") {
            Ok(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .map(|entry| {
                    entry
                        .parse()
                        .map_err(|_| ConfigError::InvalidKey(entry.to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?,
            Err(_) => DEFAULT_KEYS.to_vec(),
        };

        Ok(Self { min_degree, keys })
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "btree=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match DemoConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Building tree: min_degree={}, keys={:?}",
        config.min_degree,
        config.keys
    );

    let mut tree = match BTree::new(config.min_degree) {
        Ok(tree) => tree,
        Err(e) => {
            tracing::error!("Failed to create tree: {e}");
            std::process::exit(1);
        }
    };

    println!("Create BTree of minimum degree={}", config.min_degree);
    for &key in &config.keys {
        if !tree.insert(key) {
            tracing::info!(key, "duplicate key ignored");
        }
        println!("Insert key: {}", key);
        tree.print_tree();
        println!("-----------");
    }

    if let Err(e) = tree.validate() {
        tracing::error!("Tree failed validation: {e}");
        std::process::exit(1);
    }
}
