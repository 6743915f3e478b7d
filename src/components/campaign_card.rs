//! Campaign card visuals.
//!
//! Two renderings of the same record: the grid tile with hover controls for
//! selection and editing, and the narrower stacked variant the bulk preview
//! pipes into the exporter.

use leptos::ev;
use leptos::prelude::*;
use phosphor_leptos::{Icon, CHECK, GIFT, HEART, PENCIL_SIMPLE, TREND_UP};

use crate::models::{CampaignCard, CardIcon, CardId};
use crate::utils::formatting::format_price;

/// Badge glyph for a card icon. Exhaustive over `CardIcon`, so adding an
/// icon without a phosphor mapping fails to compile.
#[component]
pub fn CardIconGlyph(
    icon: CardIcon,
    #[prop(default = "24px")] size: &'static str,
) -> impl IntoView {
    match icon {
        CardIcon::Gift => view! { <Icon icon=GIFT size=size /> },
        CardIcon::TrendingUp => view! { <Icon icon=TREND_UP size=size /> },
        CardIcon::Heart => view! { <Icon icon=HEART size=size /> },
    }
}

/// Primary price with the optional struck-through pre-discount amount.
#[component]
fn PriceRow(
    price: f64,
    original_price: Option<f64>,
    /// Smaller typography for the stacked preview variant.
    #[prop(default = false)]
    compact: bool,
) -> impl IntoView {
    let (price_class, strike_class, margin) = if compact {
        ("text-2xl font-bold", "text-white/60 line-through text-sm", "mb-4")
    } else {
        ("text-3xl font-bold", "text-white/60 line-through", "mb-6")
    };

    view! {
        <div class=format!("flex items-baseline gap-2 {margin}")>
            <span class=price_class>{format_price(price)}</span>
            {original_price.map(|original| view! {
                <span class=strike_class>{format_price(original)}</span>
            })}
        </div>
    }
}

#[component]
fn FeatureList(features: Vec<String>, #[prop(default = false)] compact: bool) -> impl IntoView {
    let (spacing, dot_outer, dot_inner) = if compact {
        ("space-y-2", "w-4 h-4", "w-1.5 h-1.5")
    } else {
        ("space-y-3", "w-5 h-5", "w-2 h-2")
    };

    view! {
        <div class=spacing>
            {features.into_iter().map(|feature| view! {
                <div class="flex items-center gap-2">
                    <div class=format!("{dot_outer} rounded-full bg-white/20 flex items-center justify-center shrink-0")>
                        <div class=format!("{dot_inner} rounded-full bg-white")></div>
                    </div>
                    <span class="text-sm">{feature}</span>
                </div>
            }).collect_view()}
        </div>
    }
}

/// Grid tile: gradient panel plus hover-revealed select/edit controls.
#[component]
pub fn CampaignCardView(
    card: CampaignCard,
    /// Whether this card is in the selection set
    is_selected: bool,
    /// Selection toggle requested
    on_toggle: Callback<CardId>,
    /// Edit requested with the card's current values
    on_edit: Callback<CampaignCard>,
) -> impl IntoView {
    let card_id = card.id;
    let edit_card = card.clone();

    let handle_toggle = move |evt: ev::MouseEvent| {
        evt.stop_propagation();
        on_toggle.run(card_id);
    };
    let handle_edit = move |evt: ev::MouseEvent| {
        evt.stop_propagation();
        on_edit.run(edit_card.clone());
    };

    let select_class = if is_selected {
        "p-2 rounded-full transition-colors bg-white text-black"
    } else {
        "p-2 rounded-full transition-colors bg-white/20 opacity-0 group-hover:opacity-100"
    };

    view! {
        <div class=format!(
            "rounded-3xl p-6 bg-gradient-to-r {} text-white transform hover:scale-105 transition-transform duration-200 relative group",
            card.background.class()
        )>
            <div class="absolute top-4 right-4 flex gap-2">
                <button
                    class=select_class
                    on:click=handle_toggle
                    aria-label="Kartı seç"
                >
                    <Icon icon=CHECK size="16px" />
                </button>
                <button
                    class="p-2 bg-white/20 rounded-full opacity-0 group-hover:opacity-100 transition-opacity"
                    on:click=handle_edit
                    aria-label="Kartı düzenle"
                >
                    <Icon icon=PENCIL_SIMPLE size="16px" />
                </button>
            </div>

            <div class="flex items-center gap-3 mb-4">
                <div class="p-3 bg-white/20 rounded-full">
                    <CardIconGlyph icon=card.icon />
                </div>
                <div>
                    <h2 class="font-bold text-xl">{card.title.clone()}</h2>
                    <p class="text-sm text-white/80">{card.description.clone()}</p>
                </div>
            </div>

            <PriceRow price=card.price original_price=card.original_price />
            <FeatureList features=card.features.clone() />
        </div>
    }
}

/// Stacked variant rendered inside the bulk preview at export width.
#[component]
pub fn CampaignCardStacked(card: CampaignCard) -> impl IntoView {
    view! {
        <div class=format!(
            "w-full max-w-[350px] rounded-3xl p-4 bg-gradient-to-r {} text-white",
            card.background.class()
        )>
            <div class="flex items-center gap-3 mb-3">
                <div class="p-2.5 bg-white/20 rounded-full">
                    <CardIconGlyph icon=card.icon />
                </div>
                <div>
                    <h2 class="font-bold text-lg">{card.title.clone()}</h2>
                    <p class="text-sm text-white/80">{card.description.clone()}</p>
                </div>
            </div>

            <PriceRow price=card.price original_price=card.original_price compact=true />
            {(!card.features.is_empty()).then(|| view! {
                <FeatureList features=card.features.clone() compact=true />
            })}
        </div>
    }
}
