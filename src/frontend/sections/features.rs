use super::SectionHeading;
use crate::content::{Icon, FEATURES, SECTION_FEATURES};
use crate::frontend::ui::{Card, Container, IconGlyph, Reveal};
use crate::motion::{stagger_delay, DEFAULT_STAGGER_STEP_SECS};
use crate::variants::{CardHover, CardVariant};
use yew::prelude::*;

const CARD_MARGIN_PX: u32 = 50;

#[function_component(Features)]
pub(crate) fn features() -> Html {
    html! {
        <section id={SECTION_FEATURES} class="section section--muted">
            <div class="section-backdrop" aria-hidden="true">
                <div class="orb orb--top-right"></div>
                <div class="orb orb--bottom-left"></div>
                <div class="dot-grid"></div>
            </div>

            <Container class="section-body">
                <Reveal class="section-header" duration={0.5}>
                    <SectionHeading
                        eyebrow="Features"
                        lead="Everything you need to"
                        highlight="ship faster"
                        summary="Powerful features designed to help you build, deploy, and scale your applications with confidence."
                    />
                </Reveal>

                <div class="card-grid">
                    { for FEATURES.iter().enumerate().map(|(index, feature)| html! {
                        <Reveal
                            key={feature.title}
                            class="group"
                            duration={0.5}
                            delay={stagger_delay(index, DEFAULT_STAGGER_STEP_SECS)}
                            margin={CARD_MARGIN_PX}
                        >
                            <Card variant={CardVariant::Default} hover={CardHover::Glow} class="feature-card">
                                <div class="feature-icon" style={feature.gradient.to_css()}>
                                    <IconGlyph icon={feature.icon} />
                                </div>
                                <h3 class="feature-title">{feature.title}</h3>
                                <p class="feature-description">{feature.description}</p>
                                <div class="feature-more">
                                    <span>{"Learn more"}</span>
                                    <IconGlyph icon={Icon::ChevronRight} class="nudge" />
                                </div>
                            </Card>
                        </Reveal>
                    }) }
                </div>
            </Container>
        </section>
    }
}
