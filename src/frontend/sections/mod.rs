mod cta;
mod features;
mod footer;
mod hero;
mod logo_cloud;
mod navbar;
mod product_showcase;
mod testimonials;

pub(crate) use cta::Cta;
pub(crate) use features::Features;
pub(crate) use footer::Footer;
pub(crate) use hero::Hero;
pub(crate) use logo_cloud::LogoCloud;
pub(crate) use navbar::Navbar;
pub(crate) use product_showcase::ProductShowcase;
pub(crate) use testimonials::Testimonials;

use super::ui::Badge;
use crate::variants::BadgeVariant;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SectionHeadingProps {
    pub eyebrow: AttrValue,
    pub lead: AttrValue,
    pub highlight: AttrValue,
    #[prop_or_default]
    pub trail: Option<AttrValue>,
    pub summary: AttrValue,
}

/// Badge, two-tone headline and summary shared by the content sections.
#[function_component(SectionHeading)]
pub(crate) fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <>
            <Badge variant={BadgeVariant::Primary} class="section-eyebrow">{ props.eyebrow.clone() }</Badge>
            <h2 class="section-title">
                { props.lead.clone() }{" "}
                <span class="text-gradient">{ props.highlight.clone() }</span>
                if let Some(trail) = props.trail.clone() {
                    {" "}{ trail }
                }
            </h2>
            <p class="section-summary">{ props.summary.clone() }</p>
        </>
    }
}
