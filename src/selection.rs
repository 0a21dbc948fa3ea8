//! Toggle selection: element kind, URL-derived selection and link targets.
//!
//! A toggle element is either a plain button or a navigational link. Which one
//! it is, and whether it reads as "selected", is a pure function of its inputs
//! and the current page location, so it is recomputed on every render.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("location {input:?} is not an absolute path")]
    Relative { input: String },
}

/// The current URL split into a bare path and a query string.
///
/// `path` always starts with `/` and is kept exactly as the router spelled it.
/// `search` is either empty or starts with `?` and is never just `"?"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageLocation {
    path: String,
    search: String,
}

impl Default for PageLocation {
    fn default() -> Self {
        Self {
            path: "/".to_string(),
            search: String::new(),
        }
    }
}

/// Normalize a query string to `""` or `"?..."`.
fn normalize_search(search: &str) -> String {
    match search.strip_prefix('?').unwrap_or(search) {
        "" => String::new(),
        query => format!("?{query}"),
    }
}

impl PageLocation {
    /// Parse a router href such as `/contacts?tab=2`. Fragments are dropped.
    ///
    /// The path is not resolved or percent-encoded, so `//inbox` and
    /// `/a/./b` stay as written.
    pub fn parse(href: &str) -> Result<Self, LocationError> {
        let without_fragment = href.split_once('#').map_or(href, |(before, _)| before);
        let (path, search) = without_fragment
            .split_once('?')
            .unwrap_or((without_fragment, ""));

        if !path.starts_with('/') {
            return Err(LocationError::Relative {
                input: href.to_string(),
            });
        }

        Ok(Self {
            path: path.to_string(),
            search: normalize_search(search),
        })
    }

    /// Use `search` when this location carries no query string of its own.
    pub fn or_search(mut self, search: &str) -> Self {
        if self.search.is_empty() {
            self.search = normalize_search(search);
        }
        self
    }

    /// Parse a router href, normalizing anything unparsable to the root page.
    pub fn parse_lossy(href: &str) -> Self {
        Self::parse(href).unwrap_or_else(|e| {
            tracing::debug!("Falling back to root location: {}", e);
            Self::default()
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// First segment of the path (`"inbox"` for `/inbox/42`, `""` for `/`).
    pub fn first_segment(&self) -> &str {
        first_segment(&self.path)
    }

    /// Look up a query parameter by name (first occurrence wins).
    pub fn query_param(&self, key: &str) -> Option<String> {
        query_param(&self.search, key)
    }
}

/// First path segment, ignoring a single leading slash.
pub fn first_segment(path: &str) -> &str {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    trimmed.split('/').next().unwrap_or_default()
}

/// Look up a parameter in a query string, with or without the leading `?`.
pub fn query_param(query: &str, key: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

/// How a target path is compared against the current path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Current path must equal the target path.
    #[default]
    Exact,
    /// Only the first path segments must be equal.
    FirstSegment,
}

impl MatchMode {
    pub fn matches(self, target: &str, current: &str) -> bool {
        match self {
            MatchMode::Exact => target == current,
            MatchMode::FirstSegment => first_segment(target) == first_segment(current),
        }
    }
}

/// Inputs that decide a toggle element's kind and selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToggleSelectionInput {
    /// Explicit selection; wins over any path comparison.
    pub selected: Option<bool>,
    /// Navigation target. Empty means "not a link".
    pub to: Option<String>,
    /// Append the current query string to the link target.
    pub keep_search: bool,
    /// Compare only the first path segment instead of the whole path.
    pub compare_to_first_path: bool,
}

/// Element rendered for a toggle, chosen once from the input shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ElementKind {
    Button,
    Link { href: String },
}

impl ElementKind {
    pub fn is_link(&self) -> bool {
        matches!(self, ElementKind::Link { .. })
    }

    pub fn href(&self) -> Option<&str> {
        match self {
            ElementKind::Link { href } => Some(href),
            ElementKind::Button => None,
        }
    }
}

/// Result of resolving a [`ToggleSelectionInput`] against a location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedToggle {
    pub kind: ElementKind,
    pub selected: bool,
}

impl ToggleSelectionInput {
    /// A link input targeting `to`.
    pub fn link(to: impl Into<String>) -> Self {
        Self {
            to: Some(to.into()),
            ..Self::default()
        }
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = Some(selected);
        self
    }

    pub fn keep_search(mut self) -> Self {
        self.keep_search = true;
        self
    }

    pub fn compare_to_first_path(mut self) -> Self {
        self.compare_to_first_path = true;
        self
    }

    /// Non-empty navigation target, if any.
    pub fn target(&self) -> Option<&str> {
        self.to.as_deref().filter(|to| !to.is_empty())
    }

    pub fn match_mode(&self) -> MatchMode {
        if self.compare_to_first_path {
            MatchMode::FirstSegment
        } else {
            MatchMode::Exact
        }
    }

    /// Selection against the bare path of `location`.
    pub fn is_selected(&self, location: &PageLocation) -> bool {
        if let Some(explicit) = self.selected {
            return explicit;
        }
        match self.target() {
            Some(to) => self.match_mode().matches(to, location.path()),
            None => false,
        }
    }

    /// Resolve kind and selection.
    ///
    /// Selection is computed before the query string is appended, so it
    /// always compares the bare target path.
    pub fn resolve(&self, location: &PageLocation) -> ResolvedToggle {
        let selected = self.is_selected(location);

        let kind = match self.target() {
            Some(to) if self.keep_search => ElementKind::Link {
                href: format!("{to}{}", location.search()),
            },
            Some(to) => ElementKind::Link {
                href: to.to_string(),
            },
            None => ElementKind::Button,
        };

        ResolvedToggle { kind, selected }
    }
}
