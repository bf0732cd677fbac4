//! Landing page behaviour and the identity-provider seam.

use stylux_core::types::Route;

/// External sign-up/login widget. Its protocol is opaque to us.
pub trait IdentityProvider {
    /// Launch the provider's sign-up flow.
    fn open_sign_up(&self);
}

/// State behind the landing page's message box and buttons.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeView {
    message: String,
}

impl HomeView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn set_message(&mut self, text: impl Into<String>) {
        self.message = text.into();
    }

    /// "Generate" does not submit anything; it navigates to the generated page.
    pub fn generate(&self) -> Route {
        tracing::debug!(route = %Route::GeneratedPage, "Navigating");
        Route::GeneratedPage
    }

    /// "Try for free" target.
    pub fn try_for_free(&self) -> Route {
        Route::Try
    }

    pub fn sign_up(&self, provider: &dyn IdentityProvider) {
        provider.open_sign_up();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct RecordingProvider {
        opened: Cell<u32>,
    }

    impl IdentityProvider for RecordingProvider {
        fn open_sign_up(&self) {
            self.opened.set(self.opened.get() + 1);
        }
    }

    #[test]
    fn test_generate_navigates_without_clearing_message() {
        let mut home = HomeView::new();
        home.set_message("summer outfits");
        assert_eq!(home.generate(), Route::GeneratedPage);
        assert_eq!(home.message(), "summer outfits");
    }

    #[test]
    fn test_try_for_free_route() {
        assert_eq!(HomeView::new().try_for_free().path(), "/try");
    }

    #[test]
    fn test_sign_up_opens_provider() {
        let provider = RecordingProvider::default();
        let home = HomeView::new();
        home.sign_up(&provider);
        home.sign_up(&provider);
        assert_eq!(provider.opened.get(), 2);
    }
}
