//! Shared presentational primitives.

use super::hooks::{use_in_view, use_page, use_theme};
use crate::content::Icon;
use crate::motion::{RevealPreset, RevealTransition, DEFAULT_REVEAL_DURATION_SECS};
use crate::variants::{
    badge_class, button_class, card_class, BadgeVariant, ButtonSize, ButtonVariant, CardHover,
    CardVariant,
};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ContainerProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Container)]
pub(crate) fn container(props: &ContainerProps) -> Html {
    html! {
        <div class={classes!("container", props.class.clone())}>
            { props.children.clone() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    #[prop_or_default]
    pub class: Classes,
    /// Renders an anchor instead of a button.
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Button)]
pub(crate) fn button(props: &ButtonProps) -> Html {
    let class = classes!(button_class(props.variant, props.size), props.class.clone());

    match props.href.clone() {
        Some(href) => html! {
            <a
                class={class}
                href={href}
                aria-label={props.aria_label.clone()}
                onclick={props.onclick.clone()}
            >
                { props.children.clone() }
            </a>
        },
        None => html! {
            <button
                type="button"
                class={class}
                aria-label={props.aria_label.clone()}
                onclick={props.onclick.clone()}
            >
                { props.children.clone() }
            </button>
        },
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct BadgeProps {
    #[prop_or_default]
    pub variant: BadgeVariant,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Badge)]
pub(crate) fn badge(props: &BadgeProps) -> Html {
    html! {
        <span class={classes!(badge_class(props.variant), props.class.clone())}>
            { props.children.clone() }
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct CardProps {
    #[prop_or_default]
    pub variant: CardVariant,
    #[prop_or_default]
    pub hover: CardHover,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Card)]
pub(crate) fn card(props: &CardProps) -> Html {
    html! {
        <div class={classes!(card_class(props.variant, props.hover), props.class.clone())}>
            { props.children.clone() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct IconGlyphProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconGlyph)]
pub(crate) fn icon_glyph(props: &IconGlyphProps) -> Html {
    let (fill, stroke) = if props.icon.filled() {
        ("currentColor", "none")
    } else {
        ("none", "currentColor")
    };

    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            viewBox="0 0 24 24"
            fill={fill}
            stroke={stroke}
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for props.icon.paths().iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct RevealProps {
    #[prop_or_default]
    pub preset: RevealPreset,
    #[prop_or(DEFAULT_REVEAL_DURATION_SECS)]
    pub duration: f64,
    #[prop_or_default]
    pub delay: f64,
    #[prop_or(true)]
    pub once: bool,
    /// Overrides the configured viewport inset.
    #[prop_or_default]
    pub margin: Option<u32>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Plays `preset` the first time the wrapper scrolls into view.
#[function_component(Reveal)]
pub(crate) fn reveal(props: &RevealProps) -> Html {
    let page = use_page();
    let node = use_node_ref();
    let in_view = use_in_view(&node, props.once, props.margin);

    let frame = props.preset.frame(in_view);
    let style = if page.reduced_motion {
        frame.to_style()
    } else {
        let transition = RevealTransition::for_preset(props.preset, props.duration, props.delay);
        format!("{} {}", frame.to_style(), transition.to_css())
    };

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.class.clone())}
            data-reveal={props.preset.as_str()}
            style={style}
        >
            { props.children.clone() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ThemeToggleProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ThemeToggle)]
pub(crate) fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let theme = use_theme();
    let current = theme.theme;

    let onclick = {
        let store = theme.store.clone();
        Callback::from(move |_| {
            store.toggle();
        })
    };

    let icon = Icon::for_theme(current);

    html! {
        <button
            type="button"
            class={classes!("theme-toggle", current.is_dark().then_some("is-dark"), props.class.clone())}
            aria-label={current.toggle_label()}
            aria-pressed={current.pressed().to_string()}
            onclick={onclick}
        >
            <IconGlyph icon={icon} />
        </button>
    }
}
