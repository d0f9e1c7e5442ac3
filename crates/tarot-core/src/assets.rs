//! Card image lookup.
//!
//! Images live under one of several candidate base directories as
//! `{Identifier_With_Underscores}.{ext}`. The resolver tries every base
//! directory in order and, inside each, every extension in order. A card with
//! no image falls back to the card back (`CardBacks`); when even that is
//! absent the asset is missing and the caller decides what to show.
//!
//! The resolver only checks for existence. It never creates, modifies or
//! transforms files; showing a reversed card upside down is up to the
//! renderer.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::config::{DEFAULT_EXTENSIONS, TarotConfig};
use crate::deck::{Card, file_stem};

/// Reserved identifier for the card-back image.
pub const CARD_BACK: &str = "CardBacks";

/// Outcome of an image lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAsset {
    /// Path of the image to show, `None` when nothing could be found.
    pub path: Option<PathBuf>,
    /// Whether this is the card back (or nothing) instead of the requested face.
    pub is_fallback: bool,
}

impl ResolvedAsset {
    /// Neither the face nor the card back exists.
    pub fn is_missing(&self) -> bool {
        self.path.is_none()
    }
}

/// Resolves card identifiers to image files.
#[derive(Debug, Clone)]
pub struct AssetResolver {
    base_dirs: Vec<PathBuf>,
    extensions: Vec<String>,
    aliases: HashMap<String, String>,
}

impl AssetResolver {
    /// A resolver over `base_dirs` using the default extensions.
    pub fn new<I, P>(base_dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            base_dirs: base_dirs.into_iter().map(Into::into).collect(),
            extensions: Vec::new(),
            aliases: HashMap::new(),
        }
        .with_extensions(DEFAULT_EXTENSIONS)
    }

    /// A resolver using the configured directories and extensions.
    pub fn from_config(config: &TarotConfig) -> Self {
        Self::new(config.asset_dirs.iter().cloned()).with_extensions(config.extensions.iter())
    }

    /// Replace the candidate extensions. A leading dot is optional.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim_start_matches('.').to_string())
            .filter(|e| !e.is_empty())
            .collect();
        self
    }

    /// Map an identifier to a different file stem, for art packs whose file
    /// names do not follow the identifiers.
    pub fn with_alias(mut self, identifier: impl Into<String>, stem: impl Into<String>) -> Self {
        self.aliases.insert(identifier.into(), stem.into());
        self
    }

    /// Candidate base directories, in priority order.
    pub fn base_dirs(&self) -> &[PathBuf] {
        &self.base_dirs
    }

    /// Candidate extensions without leading dots, in priority order.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Resolve the face image for a card.
    pub fn resolve_card(&self, card: &Card) -> ResolvedAsset {
        self.resolve(&card.identifier())
    }

    /// Resolve the card-back image.
    pub fn card_back(&self) -> ResolvedAsset {
        ResolvedAsset {
            path: self.find(CARD_BACK),
            is_fallback: true,
        }
    }

    /// Resolve an identifier, falling back to the card back and then to a
    /// missing asset. Never fails.
    pub fn resolve(&self, identifier: &str) -> ResolvedAsset {
        if let Some(path) = self.find(identifier) {
            return ResolvedAsset {
                path: Some(path),
                is_fallback: identifier == CARD_BACK,
            };
        }

        log::debug!("no image for \"{identifier}\", falling back to card back");
        let back = self.card_back();
        if back.is_missing() {
            log::warn!(
                "no image for \"{identifier}\" and no card back under {:?}",
                self.base_dirs
            );
        }
        back
    }

    fn find(&self, identifier: &str) -> Option<PathBuf> {
        let stem = match self.aliases.get(identifier) {
            Some(alias) => alias.clone(),
            None => file_stem(identifier),
        };
        if !is_safe_stem(&stem) {
            log::debug!("ignoring malformed identifier \"{identifier}\"");
            return None;
        }

        self.base_dirs.iter().find_map(|dir| self.find_in(dir, &stem))
    }

    fn find_in(&self, dir: &Path, stem: &str) -> Option<PathBuf> {
        self.extensions
            .iter()
            .map(|ext| dir.join(format!("{stem}.{ext}")))
            .find(|path| path.is_file())
    }
}

/// A stem is usable when it names a plain file inside the base directory.
fn is_safe_stem(stem: &str) -> bool {
    !stem.is_empty()
        && !stem.contains(['/', '\\', '\0'])
        && stem != "."
        && !stem.starts_with("..")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"img").unwrap();
    }

    fn resolver(root: &TempDir) -> AssetResolver {
        AssetResolver::new([root.path().join("A"), root.path().join("B")])
            .with_extensions([".png", ".jpg"])
    }

    #[test]
    fn finds_file_in_second_dir() {
        let root = TempDir::new().unwrap();
        let expected = root.path().join("B/Ace_of_Wands.jpg");
        touch(&expected);

        let asset = resolver(&root).resolve("Ace of Wands");
        assert_eq!(asset.path, Some(expected));
        assert!(!asset.is_fallback);
    }

    #[test]
    fn directory_order_beats_extension_order() {
        let root = TempDir::new().unwrap();
        touch(&root.path().join("A/The_Fool.jpg"));
        touch(&root.path().join("B/The_Fool.png"));

        let asset = resolver(&root).resolve("The Fool");
        assert_eq!(asset.path, Some(root.path().join("A/The_Fool.jpg")));
    }

    #[test]
    fn extension_order_within_dir() {
        let root = TempDir::new().unwrap();
        touch(&root.path().join("A/The_Sun.jpg"));
        touch(&root.path().join("A/The_Sun.png"));

        let asset = resolver(&root).resolve("The Sun");
        assert_eq!(asset.path, Some(root.path().join("A/The_Sun.png")));
    }

    #[test]
    fn falls_back_to_card_back() {
        let root = TempDir::new().unwrap();
        let back = root.path().join("B/CardBacks.png");
        touch(&back);

        let asset = resolver(&root).resolve("The Tower");
        assert_eq!(asset.path, Some(back));
        assert!(asset.is_fallback);
        assert!(!asset.is_missing());
    }

    #[test]
    fn missing_when_nothing_exists() {
        let root = TempDir::new().unwrap();
        let asset = resolver(&root).resolve("The Tower");
        assert_eq!(asset.path, None);
        assert!(asset.is_fallback);
        assert!(asset.is_missing());
    }

    #[test]
    fn missing_directories_are_not_errors() {
        let asset = AssetResolver::new(["/nonexistent/tarot/a", "/nonexistent/tarot/b"])
            .resolve("Death");
        assert!(asset.is_missing());
    }

    #[test]
    fn default_extensions_find_images() {
        let root = TempDir::new().unwrap();
        let face = root.path().join("The_Fool.png");
        let back = root.path().join("CardBacks.jpeg");
        touch(&face);
        touch(&back);

        let r = AssetResolver::new([root.path()]);
        assert_eq!(r.extensions(), ["png", "jpg", "jpeg"]);

        let asset = r.resolve("The Fool");
        assert_eq!(asset.path, Some(face));
        assert!(!asset.is_fallback);
        assert_eq!(r.resolve("The Magician").path, Some(back));
    }

    #[test]
    fn malformed_identifier_uses_fallback() {
        let root = TempDir::new().unwrap();
        touch(&root.path().join("A/CardBacks.jpg"));
        touch(&root.path().join("secret.png"));

        let asset = resolver(&root).resolve("../secret");
        assert_eq!(asset.path, Some(root.path().join("A/CardBacks.jpg")));
        assert!(asset.is_fallback);

        assert!(resolver(&root).resolve("").is_fallback);
    }

    #[test]
    fn card_back_resolves_directly() {
        let root = TempDir::new().unwrap();
        let back = root.path().join("A/CardBacks.jpg");
        touch(&back);

        let asset = resolver(&root).resolve(CARD_BACK);
        assert_eq!(asset.path, Some(back.clone()));
        assert!(asset.is_fallback);
        assert_eq!(resolver(&root).card_back().path, Some(back));
    }

    #[test]
    fn alias_maps_to_other_file() {
        let root = TempDir::new().unwrap();
        let art = root.path().join("A/Page_of_Cups.png");
        touch(&art);

        let asset = resolver(&root)
            .with_alias("Ten of Cups", "Page_of_Cups")
            .resolve("Ten of Cups");
        assert_eq!(asset.path, Some(art));
        assert!(!asset.is_fallback);
    }

    #[test]
    fn resolve_card_uses_identifier() {
        let root = TempDir::new().unwrap();
        let art = root.path().join("A/Queen_of_Swords.png");
        touch(&art);

        let card: Card = "Queen of Swords".parse().unwrap();
        assert_eq!(resolver(&root).resolve_card(&card).path, Some(art));
    }

    #[test]
    fn extensions_accept_with_or_without_dot() {
        let r = AssetResolver::new(["x"]).with_extensions(["png", ".jpg", ""]);
        assert_eq!(r.extensions(), ["png", "jpg"]);
    }

    #[test]
    fn does_not_create_files() {
        let root = TempDir::new().unwrap();
        resolver(&root).resolve("The Moon");
        assert_eq!(fs::read_dir(root.path()).unwrap().count(), 0);
    }
}
