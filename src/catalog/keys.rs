use std::collections::HashSet;
use std::convert::Infallible;
use std::str::FromStr;

use super::columns::{ALL_KEYS, DEFAULT_KEYS, IDENTIFIER_KEYS, MAGNITUDE_KEYS};

// ---------------------------------------------------------------------------
// KeySpec – which columns to load / return
// ---------------------------------------------------------------------------

/// A request for a set of catalog columns.
///
/// Resolved into concrete column names by [`resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum KeySpec {
    /// Every column of the catalog.
    All,
    /// The light-weight default view ([`DEFAULT_KEYS`]).
    #[default]
    Default,
    /// Substring fragments matched against every column name.
    ///
    /// The literal fragment `"default"` expands to the default view.
    /// Examples: `"OBS"`, `"TICv8"`, `"mag"`, `"parallax"`.
    Fragments(Vec<String>),
}

/// Fragments that select the whole catalog, wherever they appear.
const ALL_MARKERS: [&str; 2] = ["all", "*"];

/// Fragment that expands to the default view.
const DEFAULT_MARKER: &str = "default";

impl KeySpec {
    /// Normalize untyped user input.
    ///
    /// * no fragments → [`KeySpec::Default`]
    /// * any `"all"` or `"*"` → [`KeySpec::All`]
    /// * otherwise → [`KeySpec::Fragments`]
    pub fn from_fragments<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fragments: Vec<String> = fragments.into_iter().map(Into::into).collect();
        if fragments.is_empty() {
            KeySpec::Default
        } else if fragments.iter().any(|f| ALL_MARKERS.contains(&f.as_str())) {
            KeySpec::All
        } else {
            KeySpec::Fragments(fragments)
        }
    }

    /// A single fragment, e.g. `KeySpec::fragment("GAIADR2")`.
    pub fn fragment(fragment: impl Into<String>) -> Self {
        Self::from_fragments([fragment])
    }

    /// The TICv8 photometry columns, as exact names.
    pub fn magnitudes() -> Self {
        Self::from_fragments(MAGNITUDE_KEYS.iter().copied())
    }
}

impl FromStr for KeySpec {
    type Err = Infallible;

    /// Parse a comma-separated fragment list, e.g. `"default,OBS,mag"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_fragments(
            s.split(',').map(str::trim).filter(|f| !f.is_empty()),
        ))
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Translate a [`KeySpec`] into concrete column names.
///
/// The result always contains [`IDENTIFIER_KEYS`], has no duplicates and
/// follows the order of [`ALL_KEYS`] regardless of fragment order.
/// Fragments match by case-sensitive substring containment; a fragment
/// matching nothing contributes nothing.
pub fn resolve(spec: &KeySpec) -> Vec<&'static str> {
    let fragments = match spec {
        KeySpec::All => return ALL_KEYS.to_vec(),
        KeySpec::Default => return in_catalog_order(DEFAULT_KEYS.iter().copied()),
        KeySpec::Fragments(fragments) => fragments,
    };

    // `Fragments` built by hand may still carry a wildcard.
    if fragments.iter().any(|f| ALL_MARKERS.contains(&f.as_str())) {
        return ALL_KEYS.to_vec();
    }

    let mut selected: Vec<&'static str> = IDENTIFIER_KEYS.to_vec();
    for fragment in fragments {
        if fragment == DEFAULT_MARKER {
            selected.extend_from_slice(DEFAULT_KEYS);
            continue;
        }
        let before = selected.len();
        selected.extend(ALL_KEYS.iter().copied().filter(|k| k.contains(fragment.as_str())));
        if selected.len() == before {
            log::debug!("key fragment {fragment:?} matches no column");
        }
    }

    let keys = in_catalog_order(selected);
    log::debug!("resolved {} key(s) from {fragments:?}", keys.len());
    keys
}

/// Deduplicate and reorder names to follow [`ALL_KEYS`].
fn in_catalog_order<I>(names: I) -> Vec<&'static str>
where
    I: IntoIterator<Item = &'static str>,
{
    let wanted: HashSet<&str> = names.into_iter().collect();
    ALL_KEYS
        .iter()
        .copied()
        .filter(|k| wanted.contains(k))
        .collect()
}

/// Every column of the catalog, in canonical order.
pub fn all_keys() -> &'static [&'static str] {
    ALL_KEYS
}

/// The light-weight default view.
pub fn default_keys() -> &'static [&'static str] {
    DEFAULT_KEYS
}

/// The TICv8 photometry columns.
pub fn magnitude_keys() -> &'static [&'static str] {
    MAGNITUDE_KEYS
}
