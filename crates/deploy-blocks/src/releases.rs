//! Release identifiers supplied by the caller.

/// Entry that always heads the options list.
pub const DEFAULT_ENTRY: &str = "latest";

/// Ordered list of release identifiers.
///
/// Identifiers are trimmed and blank ones dropped. Order and duplicates are
/// kept exactly as supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseList {
    releases: Vec<String>,
}

impl ReleaseList {
    /// Build a list from individual identifiers.
    ///
    /// # Example
    /// ```
    /// use deploy_blocks::ReleaseList;
    ///
    /// let list = ReleaseList::new(["v1.0.0", "  ", " v2.0.0 "]);
    /// assert_eq!(list.as_slice(), ["v1.0.0", "v2.0.0"]);
    /// ```
    pub fn new<I, S>(releases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let releases = releases
            .into_iter()
            .map(|r| r.as_ref().trim().to_string())
            .filter(|r| !r.is_empty())
            .collect();
        Self { releases }
    }

    /// Parse newline-separated identifiers, as produced by `git tag --list`
    /// or a CI step output.
    ///
    /// # Example
    /// ```
    /// use deploy_blocks::ReleaseList;
    ///
    /// let list = ReleaseList::parse("v1.0.0\n\nv2.0.0\r\n");
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn parse(input: &str) -> Self {
        Self::new(input.lines())
    }

    /// Number of releases, not counting the default entry.
    pub fn len(&self) -> usize {
        self.releases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.releases
    }

    /// Full option list: `default_entry` followed by every release.
    pub fn entries(&self, default_entry: &str) -> Vec<String> {
        std::iter::once(default_entry.to_string())
            .chain(self.releases.iter().cloned())
            .collect()
    }
}
