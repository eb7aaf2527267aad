//! `[resolve]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [resolve]
//! # Either set the prefix directly...
//! base_path = "blog"
//! # ...or let it be derived from the deployed site URL.
//! site_url = "https://example.github.io/blog/"
//! ```

use serde::Deserialize;

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::config::util::extract_url_path;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResolveConfig {
    /// URL path prefix the site is deployed under (empty for the domain root).
    pub base_path: String,

    /// Deployed site URL. Its path fills `base_path` when that is unset.
    pub site_url: Option<String>,
}

/// Field paths of the `[resolve]` section.
pub struct ResolveConfigFields {
    pub base_path: FieldPath,
    pub site_url: FieldPath,
}

impl ResolveConfig {
    pub const FIELDS: ResolveConfigFields = ResolveConfigFields {
        base_path: FieldPath::new("resolve.base_path"),
        site_url: FieldPath::new("resolve.site_url"),
    };

    /// Derive `base_path` from `site_url` when no explicit prefix is set.
    pub fn sync_base_path_from_url(&mut self) {
        if self.base_path.trim_matches('/').is_empty()
            && let Some(url) = &self.site_url
            && let Some(path) = extract_url_path(url)
        {
            self.base_path = path;
        }
    }

    /// Validate field values.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(url) = &self.site_url
            && url::Url::parse(url).is_err()
        {
            diag.error_with_hint(
                Self::FIELDS.site_url,
                format!("`{url}` is not a valid URL"),
                "include the scheme, e.g. `https://example.com/blog`",
            );
        }

        if self.base_path.contains("://") || self.base_path.contains(['?', '#']) {
            diag.error_with_hint(
                Self::FIELDS.base_path,
                format!("`{}` is not a URL path prefix", self.base_path),
                "use `site_url` for full URLs",
            );
        }
    }
}
