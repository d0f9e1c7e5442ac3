pub mod deck;
pub mod draw;
pub mod history;
pub mod journal;
pub mod resolve;
pub mod settings;
pub mod spreads;

use std::path::PathBuf;

use tarot_core::{ResolvedAsset, TarotConfig, TarotSession};

/// Options shared by every subcommand.
pub struct GlobalOpts {
    pub data_dir: Option<PathBuf>,
    pub assets: Vec<PathBuf>,
    pub seed: Option<u64>,
}

impl GlobalOpts {
    fn config(&self) -> TarotConfig {
        let mut config = TarotConfig::default();
        if let Some(dir) = &self.data_dir {
            config = config.with_data_dir(dir);
        }
        if !self.assets.is_empty() {
            config = config.with_asset_dirs(self.assets.iter().cloned());
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

/// Build a session from the command-line options.
fn open_session(opts: &GlobalOpts) -> TarotSession {
    let config = opts.config();
    log::debug!("data dir: {}", config.data_dir.display());
    TarotSession::new(config)
}

/// Describe a resolved image for terminal output.
fn describe_asset(asset: &ResolvedAsset) -> String {
    match (&asset.path, asset.is_fallback) {
        (None, _) => "image missing".to_string(),
        (Some(path), true) => format!("{} (card back)", path.display()),
        (Some(path), false) => path.display().to_string(),
    }
}
