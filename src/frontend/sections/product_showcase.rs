use super::SectionHeading;
use crate::content::{Icon, SECTION_PRODUCT, SHOWCASE_CARDS, SHOWCASE_IMAGE};
use crate::frontend::hooks::{use_page, use_scroll_progress};
use crate::frontend::ui::{Container, IconGlyph, Reveal};
use crate::motion::RevealPreset;
use crate::parallax::{showcase_frame, ShowcaseFrame, SHOWCASE_OFFSET, SHOWCASE_REST_PROGRESS};
use yew::prelude::*;

/// Entrance of each highlight card, paired with its position class.
const HIGHLIGHT_PLACEMENT: [(&str, RevealPreset, f64); 3] = [
    ("highlight--right", RevealPreset::SlideRight, 0.3),
    ("highlight--left", RevealPreset::SlideLeft, 0.4),
    ("highlight--bottom", RevealPreset::FadeUp, 0.5),
];

#[function_component(ProductShowcase)]
pub(crate) fn product_showcase() -> Html {
    let page = use_page();
    let node = use_node_ref();
    let progress = use_scroll_progress(&node, SHOWCASE_OFFSET, SHOWCASE_REST_PROGRESS);
    let frame = if page.reduced_motion {
        ShowcaseFrame::at_rest()
    } else {
        showcase_frame(progress)
    };

    html! {
        <section id={SECTION_PRODUCT} ref={node} class="section showcase">
            <div class="section-backdrop" aria-hidden="true">
                <div class="showcase-glow" style={frame.backdrop.to_style()}></div>
                <div class="orb orb--cyan" style={frame.orbs[0].to_style()}></div>
                <div class="orb orb--fuchsia" style={frame.orbs[1].to_style()}></div>
                <div class="crosshair"></div>
            </div>

            <Container class="section-body">
                <Reveal class="section-header" duration={0.5}>
                    <SectionHeading
                        eyebrow="Product"
                        lead="Designed for the"
                        highlight="modern developer"
                        summary="An intuitive interface that puts you in control. Every pixel has been crafted to help you work faster and smarter."
                    />
                </Reveal>

                <div class="showcase-stage" style={frame.stage.to_style()}>
                    <div class="browser group">
                        <div class="browser-halo" aria-hidden="true"></div>
                        <div class="browser-window">
                            <div class="browser-chrome">
                                <div class="browser-dots" aria-hidden="true">
                                    <span class="browser-dot browser-dot--red"></span>
                                    <span class="browser-dot browser-dot--yellow"></span>
                                    <span class="browser-dot browser-dot--green"></span>
                                </div>
                                <div class="browser-address">
                                    <IconGlyph icon={Icon::Lock} class="icon--xs icon--success" />
                                    {"app.nexus.dev"}
                                </div>
                            </div>
                            <div class="browser-viewport">
                                <img
                                    src={SHOWCASE_IMAGE}
                                    alt="Nexus dashboard interface"
                                    width="1600"
                                    height="1000"
                                />
                                <div class="browser-shade"></div>
                            </div>
                        </div>
                    </div>

                    { for SHOWCASE_CARDS.iter().zip(HIGHLIGHT_PLACEMENT).zip(frame.highlight_cards).map(
                        |((card, (placement, preset, delay)), drift)| html! {
                            <div class={classes!("highlight", placement)} style={drift.to_style()}>
                                <Reveal preset={preset} duration={0.5} delay={delay}>
                                    <div class="highlight-card">
                                        <span class="highlight-icon" style={card.gradient.to_css()}>
                                            <IconGlyph icon={card.icon} />
                                        </span>
                                        <div>
                                            <p class="highlight-title">{card.title}</p>
                                            <p class="highlight-caption">{card.caption}</p>
                                        </div>
                                    </div>
                                </Reveal>
                            </div>
                        }
                    ) }
                </div>
            </Container>
        </section>
    }
}
