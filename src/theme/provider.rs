use std::{
    cell::{Cell, RefCell},
    rc::Rc,
    sync::Arc,
};

use super::{Theme, ThemeError, ThemeRegistry};

/// Session state owned by one provider: the active key and the resolved
/// theme it maps to. Lives exactly as long as the provider and always
/// restarts at the registry's default key.
#[derive(Debug)]
struct ThemeSession {
    active_key: String,
    resolved: Arc<Theme>,
}

/// Owns one [`ThemeSession`] for a UI subtree.
///
/// Switching themes is a pure registry lookup; the merge work happened
/// once when the registry was built. All mutation goes through
/// [`set_active_key`], synchronously, so every descendant reading the
/// provider afterwards observes the same `(key, theme)` pair.
///
/// [`set_active_key`]: ThemeProvider::set_active_key
#[derive(Debug)]
pub struct ThemeProvider {
    registry: Arc<ThemeRegistry>,
    session: RefCell<ThemeSession>,
    epoch: Cell<u64>,
}

impl ThemeProvider {
    pub fn new(registry: Arc<ThemeRegistry>) -> Self {
        let session = ThemeSession {
            active_key: registry.default_key().to_owned(),
            resolved: registry.default_theme().clone(),
        };

        Self {
            registry,
            session: RefCell::new(session),
            epoch: Cell::new(0),
        }
    }

    pub fn registry(&self) -> &Arc<ThemeRegistry> {
        &self.registry
    }

    pub fn active_key(&self) -> String {
        self.session.borrow().active_key.clone()
    }

    /// The resolved theme for the active key.
    ///
    /// Reads between two switches return clones of the same `Arc`, so
    /// consumers can use pointer identity to skip style recomputation.
    pub fn theme(&self) -> Arc<Theme> {
        self.session.borrow().resolved.clone()
    }

    /// Bumped on every effective theme switch. Hosts compare epochs to
    /// decide whether a subtree needs re-rendering.
    pub fn epoch(&self) -> u64 {
        self.epoch.get()
    }

    /// Switches the session to `key`.
    ///
    /// A key outside the registry is rejected with
    /// [`ThemeError::UnknownThemeKey`] and the session keeps its previous
    /// state; falling back to a default here would hide integration bugs.
    pub fn set_active_key(&self, key: &str) -> Result<(), ThemeError> {
        let resolved = self.registry.get(key)?.clone();

        let mut session = self.session.borrow_mut();
        if session.active_key == key {
            return Ok(());
        }

        session.active_key = key.to_owned();
        session.resolved = resolved;
        drop(session);

        self.epoch.set(self.epoch.get() + 1);
        tracing::debug!(key, "theme switched");

        Ok(())
    }
}

/// Nearest-provider lookup for a subtree, replacing ambient context with
/// an explicitly threaded value.
///
/// A scope is cheap to clone and is handed down through component
/// construction. Wrapping a subtree in another provider goes through
/// [`provide`], which shadows whatever provider an outer scope carried;
/// descendants only ever see the nearest one.
///
/// [`provide`]: ThemeScope::provide
#[derive(Clone, Default)]
pub struct ThemeScope {
    provider: Option<Rc<ThemeProvider>>,
}

impl ThemeScope {
    /// A scope with no provider. Any theme access through it fails with
    /// [`ThemeError::MissingProvider`].
    pub fn empty() -> Self {
        Self::default()
    }

    /// Child scope serving `provider` to its subtree, shadowing any
    /// provider this scope carried.
    pub fn provide(&self, provider: Rc<ThemeProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// The nearest enclosing provider.
    pub fn provider(&self) -> Result<&Rc<ThemeProvider>, ThemeError> {
        self.provider.as_ref().ok_or(ThemeError::MissingProvider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> ThemeProvider {
        ThemeProvider::new(Arc::new(ThemeRegistry::builtin()))
    }

    #[test]
    fn test_initializes_at_default_key() {
        let provider = provider();

        assert_eq!(provider.active_key(), "default");
        assert_eq!(provider.theme().app_name, "ECE Docs");
        assert_eq!(provider.epoch(), 0);
    }

    #[test]
    fn test_switch_and_switch_back() {
        let provider = provider();

        provider.set_active_key("school").unwrap();
        assert_eq!(provider.theme().app_name, "School Docs");

        provider.set_active_key("default").unwrap();
        assert_eq!(provider.theme().app_name, "ECE Docs");
    }

    #[test]
    fn test_unknown_key_leaves_session_untouched() {
        let provider = provider();
        provider.set_active_key("school").unwrap();
        let before = provider.theme();

        let err = provider.set_active_key("corporate").unwrap_err();

        assert!(matches!(err, ThemeError::UnknownThemeKey { ref key } if key == "corporate"));
        assert_eq!(provider.active_key(), "school");
        assert!(
            Arc::ptr_eq(&before, &provider.theme()),
            "rejected switch must not disturb the resolved theme"
        );
    }

    #[test]
    fn test_theme_identity_is_stable_between_switches() {
        let provider = provider();

        assert!(
            Arc::ptr_eq(&provider.theme(), &provider.theme()),
            "repeated reads return the same object"
        );

        provider.set_active_key("school").unwrap();
        provider.set_active_key("default").unwrap();
        let round_tripped = provider.theme();

        assert_eq!(round_tripped.app_name, "ECE Docs");
    }

    #[test]
    fn test_epoch_tracks_effective_switches() {
        let provider = provider();

        provider.set_active_key("school").unwrap();
        assert_eq!(provider.epoch(), 1);

        // Re-selecting the active key is a no-op.
        provider.set_active_key("school").unwrap();
        assert_eq!(provider.epoch(), 1);

        provider.set_active_key("health").unwrap();
        assert_eq!(provider.epoch(), 2);
    }

    #[test]
    fn test_empty_scope_has_no_provider() {
        let scope = ThemeScope::empty();

        assert!(matches!(
            scope.provider().unwrap_err(),
            ThemeError::MissingProvider
        ));
    }

    #[test]
    fn test_inner_provider_shadows_outer() {
        let registry = Arc::new(ThemeRegistry::builtin());
        let outer_provider = Rc::new(ThemeProvider::new(registry.clone()));
        let inner_provider = Rc::new(ThemeProvider::new(registry));
        inner_provider.set_active_key("health").unwrap();

        let outer = ThemeScope::empty().provide(outer_provider.clone());
        let inner = outer.provide(inner_provider.clone());

        assert!(Rc::ptr_eq(outer.provider().unwrap(), &outer_provider));
        assert!(
            Rc::ptr_eq(inner.provider().unwrap(), &inner_provider),
            "descendants of the inner scope must not see the outer provider"
        );
        assert_eq!(inner.provider().unwrap().theme().app_name, "GP Docs");
    }

    #[test]
    fn test_nested_providers_do_not_share_sessions() {
        let registry = Arc::new(ThemeRegistry::builtin());
        let outer = Rc::new(ThemeProvider::new(registry.clone()));
        let inner = Rc::new(ThemeProvider::new(registry));

        inner.set_active_key("school").unwrap();

        assert_eq!(outer.active_key(), "default");
        assert_eq!(inner.active_key(), "school");
    }
}
