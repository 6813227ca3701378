use super::SectionHeading;
use crate::content::{Icon, SECTION_TESTIMONIALS, TESTIMONIALS};
use crate::frontend::ui::{Container, IconGlyph, Reveal};
use crate::motion::{stagger_delay, DEFAULT_STAGGER_STEP_SECS};
use yew::prelude::*;

const CARD_MARGIN_PX: u32 = 50;

#[function_component(Testimonials)]
pub(crate) fn testimonials() -> Html {
    html! {
        <section id={SECTION_TESTIMONIALS} class="section section--muted">
            <div class="section-backdrop" aria-hidden="true">
                <div class="orb orb--left"></div>
                <div class="orb orb--right"></div>
            </div>

            <Container class="section-body">
                <Reveal class="section-header" duration={0.5}>
                    <SectionHeading
                        eyebrow="Testimonials"
                        lead="Loved by"
                        highlight="developers"
                        trail="worldwide"
                        summary="Join thousands of developers who have already made the switch to a better way of building."
                    />
                </Reveal>

                <div class="card-grid">
                    { for TESTIMONIALS.iter().enumerate().map(|(index, testimonial)| html! {
                        <Reveal
                            key={testimonial.author}
                            class="group"
                            duration={0.5}
                            delay={stagger_delay(index, DEFAULT_STAGGER_STEP_SECS)}
                            margin={CARD_MARGIN_PX}
                        >
                            <figure class="testimonial-card">
                                <IconGlyph icon={Icon::Quote} class="testimonial-quote-mark" />
                                <div class="rating" role="img" aria-label={testimonial.rating_label()}>
                                    { for (0..testimonial.stars()).map(|_| html! {
                                        <IconGlyph icon={Icon::Star} class="rating-star" />
                                    }) }
                                </div>
                                <blockquote class="testimonial-quote">
                                    {"\u{201c}"}{testimonial.quote}{"\u{201d}"}
                                </blockquote>
                                <figcaption class="testimonial-author">
                                    <span class="avatar">
                                        <span class="avatar-ring" aria-hidden="true"></span>
                                        <img src={testimonial.avatar} alt={testimonial.author} width="48" height="48" />
                                    </span>
                                    <span>
                                        <span class="testimonial-name">{testimonial.author}</span>
                                        <span class="testimonial-role">{testimonial.role}</span>
                                    </span>
                                </figcaption>
                            </figure>
                        </Reveal>
                    }) }
                </div>
            </Container>
        </section>
    }
}
