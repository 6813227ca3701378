use crate::content::{Icon, HERO_IMAGE, TAGLINE};
use crate::frontend::hooks::use_scroll_progress;
use crate::frontend::ui::{Badge, Button, Container, IconGlyph};
use crate::parallax::{hero_frame, HERO_OFFSET};
use crate::variants::{BadgeVariant, ButtonSize, ButtonVariant};
use yew::prelude::*;

const PARTICLES: usize = 6;

/// Entrance delay of each intro line, in seconds.
fn intro_style(delay_secs: f64) -> String {
    format!("animation-delay: {delay_secs:.1}s;")
}

fn particle_style(index: usize) -> String {
    format!(
        "left: {}%; top: {}%; animation-duration: {:.1}s; animation-delay: {:.1}s;",
        15 + index * 15,
        20 + (index % 3) * 25,
        3.0 + index as f64 * 0.5,
        index as f64 * 0.5,
    )
}

#[function_component(Hero)]
pub(crate) fn hero() -> Html {
    let node = use_node_ref();
    let progress = use_scroll_progress(&node, HERO_OFFSET, 0.0);
    let frame = hero_frame(progress);

    html! {
        <section ref={node} class="hero">
            <div class="hero-backdrop" style={frame.background.to_style()}>
                <div class="hero-aurora"></div>
                <div class="hero-blob hero-blob--violet" style={frame.blobs.to_style()}></div>
                <div class="hero-blob hero-blob--indigo" style={frame.blobs.to_style()}></div>
                <div class="hero-blob hero-blob--pink" style={frame.center_blob.to_style()}></div>
            </div>
            <div class="hero-grid" aria-hidden="true"></div>
            <div class="hero-particles" aria-hidden="true">
                { for (0..PARTICLES).map(|index| html! {
                    <span class="hero-particle" style={particle_style(index)}></span>
                }) }
            </div>

            <Container class="hero-container">
                <div class="hero-content" style={frame.content.to_style()}>
                    <div class="intro" style={intro_style(0.0)}>
                        <Badge variant={BadgeVariant::Primary}>
                            <IconGlyph icon={Icon::Sparkles} class="icon--xs" />
                            {"Introducing Nexus 2.0"}
                        </Badge>
                    </div>

                    <h1 class="hero-title intro" style={intro_style(0.1)}>
                        {"Build the future"}
                        <span class="hero-title-accent">{"of the web"}</span>
                    </h1>

                    <p class="hero-summary intro" style={intro_style(0.2)}>
                        {TAGLINE}
                        {" Ship faster, scale effortlessly, and delight your users with every interaction."}
                    </p>

                    <div class="hero-actions intro" style={intro_style(0.3)}>
                        <Button variant={ButtonVariant::Primary} size={ButtonSize::Large} class="group">
                            {"Start Building"}
                            <IconGlyph icon={Icon::ArrowRight} class="nudge" />
                        </Button>
                        <Button variant={ButtonVariant::Outline} size={ButtonSize::Large}>
                            <IconGlyph icon={Icon::Play} />
                            {"Watch Demo"}
                        </Button>
                    </div>

                    <div class="hero-media intro intro--slow" style={frame.image.to_style()}>
                        <div class="hero-media-frame">
                            <img
                                src={HERO_IMAGE}
                                alt="Product dashboard preview"
                                width="1600"
                                height="900"
                            />
                            <div class="hero-media-fade"></div>
                        </div>

                        <div class="floating-card floating-card--top" style={frame.floating_cards[0].to_style()}>
                            <div class="floating-card-body bob">
                                <span class="floating-card-icon floating-card-icon--success">
                                    <IconGlyph icon={Icon::Check} />
                                </span>
                                <div>
                                    <p class="floating-card-title">{"Deploy successful"}</p>
                                    <p class="floating-card-caption">{"Just now"}</p>
                                </div>
                            </div>
                        </div>

                        <div class="floating-card floating-card--bottom" style={frame.floating_cards[1].to_style()}>
                            <div class="floating-card-body bob bob--late">
                                <div class="avatar-stack" aria-hidden="true">
                                    <span class="avatar-dot avatar-dot--violet"></span>
                                    <span class="avatar-dot avatar-dot--cyan"></span>
                                    <span class="avatar-dot avatar-dot--rose"></span>
                                </div>
                                <div>
                                    <p class="floating-card-title">{"+2.5k users"}</p>
                                    <p class="floating-card-caption">{"This week"}</p>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </Container>

            <div class="hero-bottom-fade" aria-hidden="true"></div>
        </section>
    }
}
