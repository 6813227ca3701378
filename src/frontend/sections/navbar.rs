use crate::content::{Icon, BRAND, NAV_LINKS};
use crate::frontend::hooks::use_nav_state;
use crate::frontend::ui::{Button, Container, IconGlyph, ThemeToggle};
use crate::nav::NavAction;
use crate::variants::{ButtonSize, ButtonVariant};
use yew::prelude::*;

#[function_component(Navbar)]
pub(crate) fn navbar() -> Html {
    let state = use_nav_state();

    let on_toggle_menu = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(NavAction::ToggleMenu))
    };
    let on_navigate = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(NavAction::Navigate))
    };

    html! {
        <header class={state.header_class()}>
            <Container>
                <nav class="navbar-inner" aria-label="Primary">
                    <a class="brand" href="#">
                        <span class="brand-mark" aria-hidden="true"></span>
                        <span class="brand-name">{BRAND}</span>
                    </a>

                    <div class="navbar-links">
                        { for NAV_LINKS.iter().map(|link| html! {
                            <a class="navbar-link" href={link.href}>{link.label}</a>
                        }) }
                    </div>

                    <div class="navbar-actions">
                        <ThemeToggle />
                        <Button variant={ButtonVariant::Ghost} size={ButtonSize::Small}>{"Sign in"}</Button>
                        <Button variant={ButtonVariant::Primary} size={ButtonSize::Small}>{"Get Started"}</Button>
                    </div>

                    <div class="navbar-compact">
                        <ThemeToggle />
                        <button
                            type="button"
                            class="menu-toggle"
                            aria-label={state.menu_label()}
                            aria-expanded={state.menu_open.to_string()}
                            aria-controls="mobile-menu"
                            onclick={on_toggle_menu}
                        >
                            <IconGlyph icon={if state.menu_open { Icon::Close } else { Icon::Menu }} />
                        </button>
                    </div>
                </nav>
            </Container>

            if state.menu_open {
                <div id="mobile-menu" class="mobile-menu">
                    <Container>
                        <div class="mobile-menu-links">
                            { for NAV_LINKS.iter().map(|link| html! {
                                <a class="mobile-menu-link" href={link.href} onclick={on_navigate.clone()}>
                                    {link.label}
                                </a>
                            }) }
                            <div class="mobile-menu-actions">
                                <Button variant={ButtonVariant::Ghost}>{"Sign in"}</Button>
                                <Button variant={ButtonVariant::Primary}>{"Get Started"}</Button>
                            </div>
                        </div>
                    </Container>
                </div>
            }
        </header>
    }
}
