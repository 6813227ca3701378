//! Yew front-end. Only built for `wasm32`.

mod dom;
mod hooks;
mod sections;
mod ui;
mod viewport;

use crate::config::LandingConfig;
use crate::content::SECTION_IDS;
use crate::logging::Logger;
use crate::theme::{Theme, ThemeStore};
use sections::{Cta, Features, Footer, Hero, LogoCloud, Navbar, ProductShowcase, Testimonials};
use serde_json::json;
use std::rc::Rc;
use viewport::ViewportHub;
use web_sys::window;
use yew::prelude::*;

const MOUNT_ID: &str = "app";

/// Page-wide services, fixed for the lifetime of the app.
#[derive(Clone)]
pub(crate) struct PageContext {
    pub config: Rc<LandingConfig>,
    pub logger: Logger,
    pub viewport: Rc<ViewportHub>,
    pub reduced_motion: bool,
}

impl PartialEq for PageContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.config, &other.config)
            && Rc::ptr_eq(&self.viewport, &other.viewport)
            && self.reduced_motion == other.reduced_motion
    }
}

/// Current theme plus the store that owns it.
#[derive(Clone)]
pub(crate) struct ThemeContext {
    pub store: Rc<ThemeStore>,
    pub theme: Theme,
}

impl PartialEq for ThemeContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store) && self.theme == other.theme
    }
}

#[derive(Properties)]
pub(crate) struct AppProps {
    pub page: PageContext,
    pub store: Rc<ThemeStore>,
}

impl PartialEq for AppProps {
    fn eq(&self, other: &Self) -> bool {
        self.page == other.page && Rc::ptr_eq(&self.store, &other.store)
    }
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let theme = use_state_eq(|| props.store.theme());

    {
        let store = props.store.clone();
        let page = props.page.clone();
        let theme = theme.clone();
        use_effect_with((), move |_| {
            let subscription = store.subscribe(move |next| theme.set(*next));
            page.viewport.attach(&page.logger);
            page.logger.info(
                "page.mounted",
                json!({ "sections": SECTION_IDS, "reduced_motion": page.reduced_motion }),
            );

            move || {
                drop(subscription);
                page.viewport.detach();
                store.teardown();
            }
        });
    }

    let theme_context = ThemeContext {
        store: props.store.clone(),
        theme: *theme,
    };

    html! {
        <ContextProvider<PageContext> context={props.page.clone()}>
            <ContextProvider<ThemeContext> context={theme_context}>
                <a class="skip-link" href="#content">{"Skip to main content"}</a>
                <Navbar />
                <main id="content">
                    <Hero />
                    <LogoCloud />
                    <Features />
                    <ProductShowcase />
                    <Testimonials />
                    <Cta />
                </main>
                <Footer />
            </ContextProvider<ThemeContext>>
        </ContextProvider<PageContext>>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();

    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MOUNT_ID))
    else {
        gloo::console::error!("missing #app mount point");
        return;
    };

    let config = LandingConfig::from_lookup(|name| dom::data_attribute(&root, name));
    let logger = Logger::console(config.log_level);
    let store = ThemeStore::init(dom::theme_host(), config.theme_key.clone(), logger.clone());
    let page = PageContext {
        config: Rc::new(config),
        logger,
        viewport: ViewportHub::new(),
        reduced_motion: dom::prefers_reduced_motion(),
    };

    yew::Renderer::<App>::with_root_and_props(root, AppProps { page, store }).render();
}
