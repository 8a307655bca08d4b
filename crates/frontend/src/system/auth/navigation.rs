/// Full-page navigation.
pub trait Navigator {
    fn redirect(&self, path: &str);
}

/// Whether the current page is exempt from the load-time auth check.
pub trait PageContext {
    fn is_public_page(&self) -> bool;
}

/// Navigates via `window.location.href`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowNavigator;

impl Navigator for WindowNavigator {
    fn redirect(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            log::warn!("No window, cannot redirect to {}", path);
            return;
        };
        if window.location().set_href(path).is_err() {
            log::error!("Failed to redirect to {}", path);
        }
    }
}

/// Reads `<body data-public-page="true">`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BodyDataset;

impl PageContext for BodyDataset {
    fn is_public_page(&self) -> bool {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .and_then(|body| body.get_attribute("data-public-page"))
            .is_some_and(|value| value == "true")
    }
}

/// Page flag known up front (e.g. set by the route being rendered).
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedPage {
    pub public: bool,
}

impl PageContext for FixedPage {
    fn is_public_page(&self) -> bool {
        self.public
    }
}
