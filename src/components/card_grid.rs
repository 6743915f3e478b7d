//! Paginated campaign grid.
//!
//! Shows a six-card window of the store plus a trailing "add new" tile,
//! header navigation arrows, the floating preview action, and the dot pager.

use leptos::prelude::*;
use phosphor_leptos::{Icon, CARET_LEFT, CARET_RIGHT, CLOCK, EYE, PLUS};

use crate::components::campaign_card::CampaignCardView;
use crate::services::app_state::{AppState, EditorSession};

#[component]
pub fn CardGrid(state: RwSignal<AppState>) -> impl IntoView {
    let on_toggle = Callback::new(move |id| state.update(|s| s.toggle_selection(id)));
    let on_edit =
        Callback::new(move |card| state.update(|s| s.open_editor(EditorSession::update(card))));

    let selected_count = Signal::derive(move || state.with(|s| s.selection.len()));

    view! {
        <div class="max-w-7xl mx-auto">
            // Header: page arrows around the title and preview action
            <div class="flex items-center justify-between mb-8">
                <button
                    class="p-2 hover:bg-gray-800 rounded-full disabled:opacity-50"
                    disabled=move || state.with(|s| s.on_first_page())
                    on:click=move |_| state.update(|s| s.prev_page())
                    aria-label="Önceki sayfa"
                >
                    <Icon icon=CARET_LEFT size="24px" />
                </button>

                <div class="flex items-center gap-4">
                    <div class="flex items-center gap-2">
                        <span class="text-red-500">
                            <Icon icon=CLOCK size="24px" />
                        </span>
                        <h1 class="text-2xl font-bold">"Özel Kampanyalar"</h1>
                    </div>
                    {move || {
                        let count = selected_count.get();
                        (count > 0).then(|| view! {
                            <button
                                class="px-4 py-2 bg-blue-500 hover:bg-blue-600 rounded-lg transition-colors flex items-center gap-2"
                                on:click=move |_| state.update(|s| s.open_preview())
                            >
                                <Icon icon=EYE size="16px" />
                                <span>{format!("{count} Kartı Önizle")}</span>
                            </button>
                        })
                    }}
                </div>

                <button
                    class="p-2 hover:bg-gray-800 rounded-full disabled:opacity-50"
                    disabled=move || state.with(|s| s.on_last_page())
                    on:click=move |_| state.update(|s| s.next_page())
                    aria-label="Sonraki sayfa"
                >
                    <Icon icon=CARET_RIGHT size="24px" />
                </button>
            </div>

            <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                {move || {
                    state
                        .with(|s| s.page_cards().to_vec())
                        .into_iter()
                        .map(|card| {
                            let is_selected = state.with(|s| s.is_selected(card.id));
                            view! {
                                <CampaignCardView
                                    card=card
                                    is_selected=is_selected
                                    on_toggle=on_toggle
                                    on_edit=on_edit
                                />
                            }
                        })
                        .collect_view()
                }}

                // Trailing "add new" tile, one grid cell
                <button
                    class="rounded-3xl p-6 border-2 border-dashed border-gray-700 hover:border-gray-500 flex items-center justify-center transition-colors h-full min-h-[300px]"
                    on:click=move |_| state.update(|s| s.open_editor(EditorSession::create()))
                >
                    <div class="flex flex-col items-center gap-2 text-gray-500 hover:text-gray-400">
                        <Icon icon=PLUS size="32px" />
                        <span class="font-medium">"Yeni Kampanya Ekle"</span>
                    </div>
                </button>
            </div>

            // Dot pager, only once the store spills onto a second page
            {move || {
                let total = state.with(|s| s.total_pages());
                (total > 1).then(|| view! {
                    <div class="flex justify-center mt-8 gap-2">
                        {(0..total).map(|page| {
                            let dot_class = move || {
                                if state.with(|s| s.current_page()) == page {
                                    "w-2 h-2 rounded-full transition-colors bg-white"
                                } else {
                                    "w-2 h-2 rounded-full transition-colors bg-white/50"
                                }
                            };
                            view! {
                                <button
                                    class=dot_class
                                    on:click=move |_| state.update(|s| s.go_to_page(page))
                                    aria-label=format!("Sayfa {}", page + 1)
                                ></button>
                            }
                        }).collect_view()}
                    </div>
                })
            }}
        </div>
    }
}
