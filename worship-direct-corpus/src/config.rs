//! Configuration for locating corpus files on disk

use derive_builder::Builder;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the default `bible/` directory
pub const BIBLE_DIR_ENV: &str = "WORSHIP_DIRECT_BIBLE_DIR";

/// Where the raw and nested corpus files for each version live.
///
/// Files follow the `<bible_dir>/<version>.json` (raw converter input) and
/// `<bible_dir>/<version><nested_suffix>` (nested converter output) convention.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct CorpusConfig {
    /// Directory holding the corpus files
    #[builder(default = r#"PathBuf::from("bible")"#)]
    pub bible_dir: PathBuf,
    /// Versions (translations) to load, e.g. `kjv`
    #[builder(default = r#"vec!["kjv".to_string(), "asv".to_string()]"#)]
    pub versions: Vec<String>,
    /// Suffix appended to the version name for the nested file
    #[builder(default = r#""_nested.json".to_string()"#)]
    pub nested_suffix: String,
}

impl CorpusConfig {
    pub fn builder() -> CorpusConfigBuilder {
        CorpusConfigBuilder::default()
    }

    /// Default configuration rooted at `bible_dir`.
    pub fn new<P: AsRef<Path>>(bible_dir: P) -> Self {
        Self {
            bible_dir: bible_dir.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Replace the configured versions (builder style)
    pub fn with_versions<I, S>(self, versions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            versions: versions.into_iter().map(Into::into).collect(),
            ..self
        }
    }

    /// Path of the nested corpus file for `version`.
    pub fn corpus_path(&self, version: &str) -> PathBuf {
        self.bible_dir
            .join(format!("{}{}", version.to_lowercase(), self.nested_suffix))
    }

    /// Path of the raw (pre-conversion) dump for `version`.
    pub fn raw_path(&self, version: &str) -> PathBuf {
        self.bible_dir
            .join(format!("{}.json", version.to_lowercase()))
    }
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            bible_dir: PathBuf::from("bible"),
            versions: vec!["kjv".to_string(), "asv".to_string()],
            nested_suffix: "_nested.json".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = CorpusConfig::default();

        assert_eq!(config.bible_dir, PathBuf::from("bible"));
        assert_eq!(config.versions, vec!["kjv", "asv"]);
        assert_eq!(config.corpus_path("kjv"), PathBuf::from("bible/kjv_nested.json"));
        assert_eq!(config.raw_path("asv"), PathBuf::from("bible/asv.json"));
    }

    #[test]
    fn test_version_names_are_lowercased_in_paths() {
        let config = CorpusConfig::new("/srv/corpus");

        assert_eq!(
            config.corpus_path("KJV"),
            PathBuf::from("/srv/corpus/kjv_nested.json")
        );
    }

    #[test]
    fn test_builder_defaults_match_default() {
        let built = CorpusConfig::builder().build().unwrap();
        let default = CorpusConfig::default();

        assert_eq!(built.bible_dir, default.bible_dir);
        assert_eq!(built.versions, default.versions);
        assert_eq!(built.nested_suffix, default.nested_suffix);
    }

    #[test]
    fn test_builder_overrides() {
        let config = CorpusConfig::builder()
            .bible_dir("data")
            .versions(vec!["web".to_string()])
            .nested_suffix(".tree.json")
            .build()
            .unwrap();

        assert_eq!(config.corpus_path("web"), PathBuf::from("data/web.tree.json"));
    }

    #[test]
    fn test_with_versions() {
        let config = CorpusConfig::new("bible").with_versions(["kjv"]);
        assert_eq!(config.versions, vec!["kjv"]);
    }
}
