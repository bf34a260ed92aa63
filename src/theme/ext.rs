use std::sync::Arc;

use super::{Theme, ThemeError, ThemeProvider, ThemeScope};

/// Uniform accessor surface for reading and switching the active theme.
///
/// Leaf components take any `impl ThemeAccess` so they render the same
/// whether they are handed a provider directly or a scope threaded down
/// from an ancestor.
pub trait ThemeAccess {
    /// The resolved theme for the active key.
    fn resolved_theme(&self) -> Result<Arc<Theme>, ThemeError>;

    /// The active theme key.
    fn current_key(&self) -> Result<String, ThemeError>;

    /// Switches the active theme.
    fn switch_theme(&self, key: &str) -> Result<(), ThemeError>;
}

impl ThemeAccess for ThemeProvider {
    fn resolved_theme(&self) -> Result<Arc<Theme>, ThemeError> {
        Ok(self.theme())
    }

    fn current_key(&self) -> Result<String, ThemeError> {
        Ok(self.active_key())
    }

    fn switch_theme(&self, key: &str) -> Result<(), ThemeError> {
        self.set_active_key(key)
    }
}

impl ThemeAccess for ThemeScope {
    fn resolved_theme(&self) -> Result<Arc<Theme>, ThemeError> {
        Ok(self.provider()?.theme())
    }

    fn current_key(&self) -> Result<String, ThemeError> {
        Ok(self.provider()?.active_key())
    }

    fn switch_theme(&self, key: &str) -> Result<(), ThemeError> {
        self.provider()?.set_active_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeRegistry;
    use std::rc::Rc;

    fn render_header(access: &impl ThemeAccess) -> Result<String, ThemeError> {
        Ok(access.resolved_theme()?.app_name.clone())
    }

    #[test]
    fn test_components_accept_provider_or_scope() {
        let provider = Rc::new(ThemeProvider::new(Arc::new(ThemeRegistry::builtin())));
        let scope = ThemeScope::empty().provide(provider.clone());

        assert_eq!(render_header(provider.as_ref()).unwrap(), "ECE Docs");
        assert_eq!(render_header(&scope).unwrap(), "ECE Docs");
    }

    #[test]
    fn test_switch_through_scope_is_visible_to_all_readers() {
        let provider = Rc::new(ThemeProvider::new(Arc::new(ThemeRegistry::builtin())));
        let scope = ThemeScope::empty().provide(provider.clone());

        scope.switch_theme("school").unwrap();

        assert_eq!(scope.current_key().unwrap(), "school");
        assert_eq!(
            provider.active_key(),
            "school",
            "scope and provider read the same session"
        );
    }

    #[test]
    fn test_access_outside_any_scope_always_fails() {
        let scope = ThemeScope::empty();

        for _ in 0..3 {
            assert!(
                matches!(render_header(&scope), Err(ThemeError::MissingProvider)),
                "no silent default theme outside a provider"
            );
        }
        assert!(matches!(
            scope.switch_theme("school"),
            Err(ThemeError::MissingProvider)
        ));
    }
}
