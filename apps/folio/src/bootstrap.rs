#![allow(dead_code)]

//! Page start-up: `Loading` runs exactly once and yields a `Ready` page.

use std::sync::Arc;

use tracing::info;

use crate::controllers::menu::MobileMenu;
use crate::controllers::navbar;
use crate::controllers::reveal::ScrollReveal;
use crate::controllers::scroll_spy::ScrollSpy;
use crate::controllers::theme::{ThemeController, ThemeStore};
use crate::loader::{load, PortfolioSource};
use crate::models::portfolio::PortfolioSnapshot;
use crate::view::document::Document;
use crate::view::render_all;
use crate::view::shell::host_page;

pub struct Loading {
    source: Arc<dyn PortfolioSource>,
    theme_store: Arc<dyn ThemeStore>,
}

/// A fully rendered page with its controllers attached.
pub struct Ready {
    pub snapshot: Arc<PortfolioSnapshot>,
    pub document: Document,
    pub reveal: ScrollReveal,
    pub theme: ThemeController,
    pub scroll_spy: ScrollSpy,
    pub menu: MobileMenu,
}

pub struct Bootstrapper<S> {
    state: S,
}

impl Bootstrapper<Loading> {
    pub fn new(source: Arc<dyn PortfolioSource>, theme_store: Arc<dyn ThemeStore>) -> Self {
        Self {
            state: Loading { source, theme_store },
        }
    }

    /// Loads the snapshot (falling back on failure), renders every section,
    /// then attaches the controllers. Consumes the loading state.
    pub async fn run(self) -> Bootstrapper<Ready> {
        let Loading { source, theme_store } = self.state;

        let snapshot = Arc::new(load(source.as_ref()).await.sorted());
        let mut document = host_page();

        // First pass sees only the shell's static markup.
        let mut reveal = ScrollReveal::default();
        reveal.arm(&document);

        render_all(&mut document, &snapshot);

        let theme = ThemeController::init(theme_store, &mut document).await;
        let scroll_spy = ScrollSpy::attach();
        navbar::apply(&mut document, 0.0);
        let menu = MobileMenu::attach();

        // Rendering replaced nodes the first pass registered.
        let observed = reveal.arm(&document);

        info!(
            "Page ready: theme={} observed={} mutations={}",
            theme.current(),
            observed,
            document.mutation_count()
        );

        Bootstrapper {
            state: Ready {
                snapshot,
                document,
                reveal,
                theme,
                scroll_spy,
                menu,
            },
        }
    }
}

impl Bootstrapper<Ready> {
    pub fn ready(&self) -> &Ready {
        &self.state
    }

    pub fn into_ready(self) -> Ready {
        self.state
    }
}
