use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

use super::{Theme, ThemeError, merge::deep_merge};

/// Top-level sections the base document must populate before any merge
/// runs. A hole here would surface much later, deep inside a consumer,
/// so the builder refuses the base up front instead.
const REQUIRED_BASE_SECTIONS: [&str; 3] = ["typography", "breakpoints", "shape"];

/// The fully-populated document every tenant theme starts from.
pub struct BaseTheme(Value);

impl BaseTheme {
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        Ok(Self(parse_object(json, "base theme")?))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

/// A partial override describing only what one tenant changes.
/// Everything it leaves out is inherited from the base.
#[derive(Debug)]
pub struct ThemeFragment(Value);

impl ThemeFragment {
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        Ok(Self(parse_object(json, "theme fragment")?))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

fn parse_object(json: &str, what: &str) -> Result<Value, ThemeError> {
    let value: Value = serde_json::from_str(json)
        .map_err(|err| ThemeError::Configuration(format!("{what} is not valid JSON: {err}")))?;

    if !value.is_object() {
        return Err(ThemeError::Configuration(format!(
            "{what} must be a JSON object"
        )));
    }

    Ok(value)
}

/// The immutable mapping from theme keys to resolved themes.
///
/// Built exactly once, before anything renders; every later theme switch
/// is a pure lookup into this table. Entries are `Arc`ed so a resolved
/// theme keeps one identity for as long as the registry lives, which is
/// what lets consumers skip redundant style recomputation.
#[derive(Debug)]
pub struct ThemeRegistry {
    themes: IndexMap<String, Arc<Theme>>,
    default_key: String,
}

impl ThemeRegistry {
    /// Resolves every fragment against the base and builds the registry.
    ///
    /// Fails with [`ThemeError::Configuration`] when the base is missing a
    /// required section, when a merged document does not deserialize into
    /// a complete [`Theme`], or when `default_key` names no fragment. Any
    /// such defect is fatal to startup by design.
    pub fn build(
        base: &BaseTheme,
        fragments: IndexMap<String, ThemeFragment>,
        default_key: impl Into<String>,
    ) -> Result<Self, ThemeError> {
        for section in REQUIRED_BASE_SECTIONS {
            if base.0.get(section).is_none() {
                return Err(ThemeError::Configuration(format!(
                    "base theme is missing the '{section}' section"
                )));
            }
        }

        let default_key = default_key.into();
        if !fragments.contains_key(&default_key) {
            return Err(ThemeError::Configuration(format!(
                "default key '{default_key}' has no fragment"
            )));
        }

        let mut themes = IndexMap::with_capacity(fragments.len());

        for (key, fragment) in &fragments {
            let merged = deep_merge(base.as_value(), fragment.as_value());
            let theme: Theme = serde_json::from_value(merged).map_err(|err| {
                ThemeError::Configuration(format!("theme '{key}' failed to resolve: {err}"))
            })?;

            themes.insert(key.clone(), Arc::new(theme));
        }

        tracing::debug!(themes = themes.len(), default = %default_key, "theme registry built");

        Ok(Self {
            themes,
            default_key,
        })
    }

    /// The compiled-in tenant table: `default`, `school` and `health`,
    /// resolved against the shared base document.
    ///
    /// Construct this once during application bootstrap and hand it to
    /// the providers that need it; nothing in this crate stashes it in
    /// module state.
    pub fn builtin() -> Self {
        let base = BaseTheme::from_json(include_str!("../../themes/base.json"))
            .expect("builtin base theme is valid");

        let mut fragments = IndexMap::new();
        for (key, source) in [
            ("default", include_str!("../../themes/default.json")),
            ("school", include_str!("../../themes/school.json")),
            ("health", include_str!("../../themes/health.json")),
        ] {
            let fragment =
                ThemeFragment::from_json(source).expect("builtin theme fragments are valid");
            fragments.insert(key.to_owned(), fragment);
        }

        Self::build(&base, fragments, "default").expect("builtin theme table resolves")
    }

    pub fn get(&self, key: &str) -> Result<&Arc<Theme>, ThemeError> {
        self.themes
            .get(key)
            .ok_or_else(|| ThemeError::UnknownThemeKey {
                key: key.to_owned(),
            })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.themes.contains_key(key)
    }

    pub fn default_key(&self) -> &str {
        &self.default_key
    }

    /// The resolved theme for the default key. Existence is guaranteed by
    /// construction.
    pub fn default_theme(&self) -> &Arc<Theme> {
        &self.themes[self.default_key.as_str()]
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}
