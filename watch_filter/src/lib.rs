// lib.rs - Decides which changed files a file watcher should react to

use std::sync::LazyLock;

use regex::Regex;

/// Directories ignored by the default filter: build output and tool configuration.
pub const EXCLUDED_DIRECTORIES: &[&str] = &["build", "javascript/conf"];

#[derive(Debug, thiserror::Error)]
pub enum WatchFilterError {
    #[error("cannot build directory pattern for {dir:?}: {source}")]
    Pattern { dir: String, source: regex::Error },
}

/// Excludes paths that lie inside (or are) one of a set of directories.
///
/// A directory matches only as whole path segments preceded by a `/`, so
/// `build` excludes `project/build/x.js` and `project/build` but not
/// `project/buildtools/x.js`.
#[derive(Debug, Clone)]
pub struct WatchFilter {
    excluded: Vec<Regex>,
}

impl WatchFilter {
    pub fn new<I, S>(dirs: I) -> Result<Self, WatchFilterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let excluded = dirs
            .into_iter()
            .map(|dir| directory_pattern(dir.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { excluded })
    }

    pub fn should_watch(&self, path: &str) -> bool {
        match self.excluded.iter().find(|re| re.is_match(path)) {
            Some(re) => {
                log::trace!("ignoring {} (matched {})", path, re.as_str());
                false
            }
            None => true,
        }
    }
}

impl Default for WatchFilter {
    fn default() -> Self {
        Self::new(EXCLUDED_DIRECTORIES).expect("escaped directory pattern is valid")
    }
}

static DEFAULT_FILTER: LazyLock<WatchFilter> = LazyLock::new(WatchFilter::default);

/// The default filter, compiled once on first use.
pub fn default_filter() -> &'static WatchFilter {
    &DEFAULT_FILTER
}

/// [`WatchFilter::should_watch`] with the default exclusions.
pub fn should_watch(path: &str) -> bool {
    DEFAULT_FILTER.should_watch(path)
}

fn directory_source(dir: &str) -> String {
    format!(r".*/{}(?:$|/)", regex::escape(dir))
}

fn directory_pattern(dir: &str) -> Result<Regex, WatchFilterError> {
    Regex::new(&directory_source(dir)).map_err(|source| WatchFilterError::Pattern {
        dir: dir.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_directory_is_excluded() {
        assert!(!should_watch("project/build/x.js"));
        assert!(!should_watch("project/build"));
    }

    #[test]
    fn directory_match_respects_segment_boundary() {
        assert!(should_watch("project/buildtools/x.js"));
        assert!(should_watch("project/rebuild/x.js"));
    }

    #[test]
    fn sources_are_watched() {
        assert!(should_watch("project/src/index.js"));
    }

    #[test]
    fn nested_config_directory_is_excluded() {
        assert!(!should_watch("project/src/javascript/conf/webpack-config.js"));
        assert!(should_watch("project/src/javascript/config/app.js"));
    }

    #[test]
    fn custom_directories_are_escaped() {
        let filter = WatchFilter::new(["out.d"]).unwrap();
        assert!(!filter.should_watch("repo/out.d/file"));
        assert!(filter.should_watch("repo/outxd/file"));
    }

    #[test]
    fn default_filter_is_compiled_once() {
        assert!(std::ptr::eq(default_filter(), default_filter()));
        for _ in 0..1000 {
            assert!(should_watch("project/src/index.js"));
        }
        assert_eq!(default_filter().excluded.len(), EXCLUDED_DIRECTORIES.len());
    }

    #[test]
    fn empty_filter_watches_everything() {
        let filter = WatchFilter::new(Vec::<String>::new()).unwrap();
        assert!(filter.should_watch("project/build/x.js"));
    }
}
