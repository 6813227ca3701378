use crate::content::{LOGOS, STATS};
use crate::frontend::ui::{Container, Reveal};
use yew::prelude::*;

#[function_component(LogoCloud)]
pub(crate) fn logo_cloud() -> Html {
    // Two copies so the marquee loops without a seam.
    let marquee = LOGOS.iter().chain(LOGOS.iter());

    html! {
        <section class="logo-cloud">
            <Container>
                <Reveal class="logo-cloud-caption">
                    <p>{"Trusted by industry leaders"}</p>
                </Reveal>

                <div class="marquee">
                    <div class="marquee-mask marquee-mask--left" aria-hidden="true"></div>
                    <div class="marquee-mask marquee-mask--right" aria-hidden="true"></div>
                    <div class="marquee-track">
                        { for marquee.enumerate().map(|(index, logo)| html! {
                            <span
                                class="marquee-item"
                                style={format!("min-width: {}px;", logo.width)}
                                aria-hidden={(index >= LOGOS.len()).then_some("true")}
                            >
                                {logo.name}
                            </span>
                        }) }
                    </div>
                </div>

                <Reveal class="stats" delay={0.2}>
                    { for STATS.iter().map(|stat| html! {
                        <div class="stat">
                            <p class="stat-value">{stat.value}</p>
                            <p class="stat-label">{stat.label}</p>
                        </div>
                    }) }
                </Reveal>
            </Container>
        </section>
    }
}
