use leptos::prelude::*;

use crate::components::{BulkPreview, CardEditor, CardGrid};
use crate::models::{seed_cards, CampaignCard};
use crate::services::app_state::{AppState, EditorMode};

/// Top-level application: owns the single state signal and wires the grid,
/// the editor modal, and the bulk preview to its transitions.
#[component]
pub fn App() -> impl IntoView {
    let state = RwSignal::new(AppState::new(seed_cards()));

    let on_save = Callback::new(move |(mode, card): (EditorMode, CampaignCard)| {
        state.update(|s| s.commit(mode, card));
    });
    let on_cancel = Callback::new(move |_: ()| state.update(|s| s.close_editor()));
    let on_close_preview = Callback::new(move |_: ()| state.update(|s| s.close_preview()));

    view! {
        <div class="min-h-screen bg-gray-900 text-white p-6">
            <CardGrid state=state />

            {move || state.with(|s| s.editor.clone()).map(|session| view! {
                <CardEditor session=session on_save=on_save on_cancel=on_cancel />
            })}

            {move || {
                let cards = state.with(|s| s.preview.clone());
                (!cards.is_empty()).then(|| view! {
                    <BulkPreview cards=cards on_close=on_close_preview />
                })
            }}
        </div>
    }
}
