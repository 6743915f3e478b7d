//! Bulk preview overlay.
//!
//! Renders the preview snapshot as a vertical stack on black and offers the
//! PNG download. A failed export is logged and otherwise swallowed; the
//! overlay stays open so the download control doubles as the retry.

use leptos::ev;
use leptos::prelude::*;
use phosphor_leptos::{Icon, DOWNLOAD_SIMPLE, X};

use crate::components::campaign_card::CampaignCardStacked;
use crate::models::CampaignCard;
use crate::services::export::download_cards_png;

#[component]
pub fn BulkPreview(
    /// Snapshot taken when the preview opened; store edits made while the
    /// overlay is up are not reflected here.
    cards: Vec<CampaignCard>,
    on_close: Callback<()>,
) -> impl IntoView {
    let stack = cards.clone();

    let handle_download = move |_: ev::MouseEvent| {
        if let Err(err) = download_cards_png(&cards) {
            log::error!("görsel indirme hatası: {err}");
        }
    };
    let handle_close = move |_: ev::MouseEvent| {
        on_close.run(());
    };

    view! {
        <div class="fixed inset-0 bg-black/90 overflow-y-auto z-50">
            <div class="sticky top-2 flex justify-end gap-2 z-10 px-2">
                <button
                    class="p-2 bg-white/10 hover:bg-white/20 rounded-full transition-colors"
                    on:click=handle_download
                    aria-label="Görseli indir"
                >
                    <Icon icon=DOWNLOAD_SIMPLE size="20px" />
                </button>
                <button
                    class="p-2 bg-white/10 hover:bg-white/20 rounded-full transition-colors"
                    on:click=handle_close
                    aria-label="Önizlemeyi kapat"
                >
                    <Icon icon=X size="20px" />
                </button>
            </div>

            <div class="flex flex-col items-center gap-3 p-4 bg-black">
                {stack.into_iter().map(|card| view! {
                    <CampaignCardStacked card=card />
                }).collect_view()}
            </div>
        </div>
    }
}
