/// Application configuration
///
/// Everything the landing page is parameterized on: initial language,
/// contact address, hero and gallery references, and the shared access
/// password. The password is deliberately plain configuration — it gates
/// casual access to an off-market listing, nothing more — and keeping it
/// here (instead of a hard-coded constant) lets tests inject their own.

use serde::Deserialize;
use std::path::PathBuf;

use crate::state::language::Language;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub initial_language: Language,
    pub contact_email: String,
    /// Primary featured photo. `null` in the config file leaves it to the
    /// `--hero=` launch override.
    pub hero_url: Option<String>,
    pub gallery_urls: Option<Vec<String>>,
    pub access_password: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            initial_language: Language::Japanese,
            contact_email: "xxxx@example.com".to_string(),
            hero_url: Some("/images/hero.jpg".to_string()),
            gallery_urls: Some(
                [
                    "/images/g1.jpg",
                    "/images/g2.jpg",
                    "/images/g3.jpg",
                    "/images/g4.jpg",
                    "/images/g5.jpg",
                    "/images/g6.jpg",
                ]
                .into_iter()
                .map(String::from)
                .collect(),
            ),
            access_password: "onsen2525".to_string(),
        }
    }
}

impl AppConfig {
    /// Load the per-user config file, falling back to the built-in
    /// defaults when it is missing or unreadable.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => config,
                Err(error) => {
                    eprintln!("⚠️  Ignoring malformed config {}: {}", path.display(), error);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    fn config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("onsen-estate");
        path.push("config.json");
        Some(path)
    }

    /// The hero reference to use: the configured one wins, the launch
    /// override only substitutes when the configuration leaves it unset.
    pub fn effective_hero(&self, flags: &Flags) -> Option<String> {
        self.hero_url.clone().or_else(|| flags.hero.clone())
    }
}

/// Launch arguments. `hero=<ref>` (or `--hero=<ref>`) plays the role the
/// original page gave its `?hero=` query parameter.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Flags {
    pub hero: Option<String>,
}

impl Flags {
    pub fn parse<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut flags = Flags::default();
        for arg in args {
            let arg = arg.strip_prefix("--").unwrap_or(&arg);
            if let Some(value) = arg.strip_prefix("hero=") {
                if !value.is_empty() {
                    flags.hero = Some(value.to_string());
                }
            }
        }
        flags
    }

    pub fn from_env() -> Self {
        Self::parse(std::env::args().skip(1))
    }
}
