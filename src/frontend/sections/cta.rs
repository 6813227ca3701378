use crate::content::{Icon, BRAND, SECTION_PRICING, TRUST_LINE};
use crate::frontend::ui::{Button, Container, IconGlyph, Reveal};
use crate::motion::RevealPreset;
use crate::variants::{ButtonSize, ButtonVariant};
use yew::prelude::*;

/// Closing call to action. Carries the pricing anchor the navigation links to.
#[function_component(Cta)]
pub(crate) fn cta() -> Html {
    html! {
        <section id={SECTION_PRICING} class="section cta">
            <div class="section-backdrop" aria-hidden="true">
                <div class="cta-wash"></div>
                <div class="cta-glow"></div>
            </div>
            <div class="line-grid" aria-hidden="true"></div>

            <Container class="section-body">
                <div class="cta-body">
                    <Reveal preset={RevealPreset::ScaleIn} duration={0.5}>
                        <span class="cta-pill">
                            <IconGlyph icon={Icon::Sparkles} class="icon--sm" />
                            {"Start building for free"}
                        </span>
                    </Reveal>

                    <Reveal>
                        <h2 class="cta-title">
                            {"Ready to build the "}
                            <span class="text-gradient">{"future?"}</span>
                        </h2>
                        <p class="cta-summary">
                            {"Join thousands of developers and teams who are already building amazing products with "}
                            {BRAND}{"."}
                        </p>
                    </Reveal>

                    <Reveal class="cta-actions" duration={0.5} delay={0.2}>
                        <Button variant={ButtonVariant::Primary} size={ButtonSize::Large} class="group">
                            {"Get Started Free"}
                            <IconGlyph icon={Icon::ArrowRight} class="nudge" />
                        </Button>
                        <Button variant={ButtonVariant::Outline} size={ButtonSize::Large}>
                            {"Contact Sales"}
                        </Button>
                    </Reveal>

                    <Reveal preset={RevealPreset::Fade} duration={0.5} delay={0.4}>
                        <p class="cta-trust">{TRUST_LINE}</p>
                    </Reveal>
                </div>
            </Container>
        </section>
    }
}
