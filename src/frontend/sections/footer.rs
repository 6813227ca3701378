use crate::content::{BRAND, COPYRIGHT, FOOTER_COLUMNS, SOCIAL_LINKS, TAGLINE};
use crate::frontend::ui::{Container, IconGlyph};
use yew::prelude::*;

#[function_component(Footer)]
pub(crate) fn footer() -> Html {
    html! {
        <footer class="footer">
            <Container>
                <div class="footer-grid">
                    <div class="footer-brand">
                        <a class="brand" href="#">
                            <span class="brand-mark" aria-hidden="true"></span>
                            <span class="brand-name">{BRAND}</span>
                        </a>
                        <p class="footer-tagline">
                            {TAGLINE}{" Ship faster, scale effortlessly."}
                        </p>
                        <div class="footer-social">
                            { for SOCIAL_LINKS.iter().map(|social| html! {
                                <a class="social-link" href={social.href} aria-label={social.name}>
                                    <IconGlyph icon={social.icon} />
                                </a>
                            }) }
                        </div>
                    </div>

                    { for FOOTER_COLUMNS.iter().map(|column| html! {
                        <div class="footer-column">
                            <h3>{column.heading}</h3>
                            <ul>
                                { for column.links.iter().map(|link| html! {
                                    <li><a href={link.href}>{link.label}</a></li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>

                <div class="footer-bottom">
                    <p>{COPYRIGHT}</p>
                    <div class="footer-legal">
                        <a href="#">{"Privacy Policy"}</a>
                        <a href="#">{"Terms of Service"}</a>
                    </div>
                </div>
            </Container>
        </footer>
    }
}
