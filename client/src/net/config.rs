//! API base configuration and endpoint builders.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host process resolves `ApiConfig` from its environment, provides it as
//! Leptos context during SSR and writes it into `<meta>` tags so the hydrated
//! client picks up the same bases. Tests construct it directly, which keeps
//! every endpoint pointable at a double.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use url::Url;

/// Default base of the asset/tag backend.
pub const DEFAULT_BOMBONAS_BASE: &str = "http://localhost:3333";
/// Default base of the read-analytics backend.
pub const DEFAULT_READS_BASE: &str = "http://localhost:8000";

/// `<meta name=...>` carrying the asset backend base into the hydrated page.
pub const BOMBONAS_META: &str = "bombona-api-base";
/// `<meta name=...>` carrying the analytics backend base into the hydrated page.
pub const READS_META: &str = "rfid-reads-api-base";

/// Invalid API base supplied by configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var}: invalid URL `{value}`: {reason}")]
    InvalidUrl { var: &'static str, value: String, reason: String },
    #[error("{var}: unsupported scheme `{scheme}`, expected http or https")]
    UnsupportedScheme { var: &'static str, scheme: String },
}

/// Base URLs of the two backends this UI talks to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    bombonas_base: Url,
    reads_base: Url,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bombonas_base: Url::parse(DEFAULT_BOMBONAS_BASE).expect("default assets base is a valid URL"),
            reads_base: Url::parse(DEFAULT_READS_BASE).expect("default reads base is a valid URL"),
        }
    }
}

impl ApiConfig {
    /// Build a config from two base URLs.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when either base does not parse or is not http(s).
    pub fn new(bombonas_base: &str, reads_base: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            bombonas_base: parse_base("BOMBONA_API_URL", bombonas_base)?,
            reads_base: parse_base("RFID_READS_API_URL", reads_base)?,
        })
    }

    pub fn bombonas_base(&self) -> &str {
        self.bombonas_base.as_str().trim_end_matches('/')
    }

    pub fn reads_base(&self) -> &str {
        self.reads_base.as_str().trim_end_matches('/')
    }

    /// Resolve the config for the current render.
    ///
    /// Uses the context value when the host provided one (SSR), otherwise the
    /// `<meta>` tags written by the host (hydrate), otherwise defaults.
    pub fn resolve(context: Option<Self>) -> Self {
        if let Some(config) = context {
            return config;
        }
        #[cfg(feature = "hydrate")]
        {
            if let Some(config) = Self::from_document() {
                return config;
            }
        }
        Self::default()
    }

    #[cfg(feature = "hydrate")]
    fn from_document() -> Option<Self> {
        let doc = web_sys::window()?.document()?;
        let read = |name: &str| {
            doc.query_selector(&format!("meta[name=\"{name}\"]"))
                .ok()
                .flatten()
                .and_then(|el| el.get_attribute("content"))
        };
        let bombonas = read(BOMBONAS_META).unwrap_or_else(|| DEFAULT_BOMBONAS_BASE.to_owned());
        let reads = read(READS_META).unwrap_or_else(|| DEFAULT_READS_BASE.to_owned());
        match Self::new(&bombonas, &reads) {
            Ok(config) => Some(config),
            Err(e) => {
                leptos::logging::warn!("ignoring API config from page: {e}");
                None
            }
        }
    }

    // -------------------------------------------------------------------------
    // Assets backend
    // -------------------------------------------------------------------------

    pub fn bombonas_url(&self) -> String {
        join(&self.bombonas_base, &["bombonas"])
    }

    pub fn bombona_url(&self, id: i64) -> String {
        join(&self.bombonas_base, &["bombonas", &id.to_string()])
    }

    pub fn movements_url(&self, id: i64, limit: u32) -> String {
        let mut url = with_segments(&self.bombonas_base, &["bombonas", &id.to_string(), "movements"]);
        url.query_pairs_mut().append_pair("limit", &limit.to_string());
        url.into()
    }

    pub fn checkout_url(&self, id: i64) -> String {
        join(&self.bombonas_base, &["bombonas", &id.to_string(), "checkout"])
    }

    pub fn checkin_url(&self, id: i64) -> String {
        join(&self.bombonas_base, &["bombonas", &id.to_string(), "checkin"])
    }

    pub fn assign_rfid_url(&self, id: i64) -> String {
        join(&self.bombonas_base, &["bombonas", &id.to_string(), "assign-rfid"])
    }

    pub fn assign_by_uid_url(&self, uid: &str) -> String {
        join(&self.bombonas_base, &["rfids", uid, "assign"])
    }

    pub fn mark_seen_url(&self, uid: &str) -> String {
        join(&self.bombonas_base, &["rfids", uid, "seen"])
    }

    pub fn unlinked_rfids_url(&self) -> String {
        join(&self.bombonas_base, &["rfids", "unlinked"])
    }

    // -------------------------------------------------------------------------
    // Reads backend
    // -------------------------------------------------------------------------

    pub fn tags_url(&self) -> String {
        join(&self.reads_base, &["tags"])
    }

    pub fn stats_url(&self) -> String {
        join(&self.reads_base, &["stats"])
    }

    pub fn graph_url(&self) -> String {
        join(&self.reads_base, &["graph"])
    }

    pub fn download_url(&self) -> String {
        join(&self.reads_base, &["download"])
    }
}

fn parse_base(var: &'static str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value.trim()).map_err(|e| ConfigError::InvalidUrl {
        var,
        value: value.to_owned(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme { var, scheme: other.to_owned() }),
    }
}

fn with_segments(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    // http(s) bases always have a path, so this never falls through.
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

fn join(base: &Url, segments: &[&str]) -> String {
    with_segments(base, segments).into()
}
