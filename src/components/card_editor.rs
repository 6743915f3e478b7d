//! Card editor modal.
//!
//! Stages edits to a single card in a local signal, independent of the
//! store, and commits or discards the whole staged copy at once. The
//! create-vs-update decision is carried in by the session's `EditorMode`
//! rather than re-derived at save time.

use leptos::ev;
use leptos::prelude::*;
use phosphor_leptos::{Icon, PLUS, X};

use crate::models::{CampaignCard, CardGradient, CardIcon};
use crate::services::app_state::{EditorMode, EditorSession};

const FIELD_CLASS: &str = "w-full bg-gray-700 rounded-lg p-2 text-white";
const LABEL_CLASS: &str = "block text-sm font-medium mb-1";

/// Parse a price field. Non-numeric input degrades to zero, never an error.
fn parse_price(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

/// Parse the discount field. Cleared, non-numeric, or zero input drops the
/// discount entirely, which removes the strikethrough from the card.
fn parse_discount(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| *v != 0.0)
}

/// Replace the feature at `index`. A stale index (a removal raced the event)
/// is ignored rather than panicking the whole view.
fn set_feature(card: &mut CampaignCard, index: usize, value: String) {
    if let Some(slot) = card.features.get_mut(index) {
        *slot = value;
    }
}

/// Remove the feature at `index`, shifting later entries left. Stale indices
/// are ignored.
fn remove_feature(card: &mut CampaignCard, index: usize) {
    if index < card.features.len() {
        card.features.remove(index);
    }
}

#[component]
pub fn CardEditor(
    session: EditorSession,
    /// Commit the staged copy with the session's mode
    on_save: Callback<(EditorMode, CampaignCard)>,
    /// Discard the staged copy
    on_cancel: Callback<()>,
) -> impl IntoView {
    let mode = session.mode;
    let staged = RwSignal::new(session.seed);

    let heading = match mode {
        EditorMode::Create => "Yeni Kampanya",
        EditorMode::Update(_) => "Kampanyayı Düzenle",
    };

    let handle_save = move |_: ev::MouseEvent| {
        on_save.run((mode, staged.get()));
    };
    let handle_cancel = move |_: ev::MouseEvent| {
        on_cancel.run(());
    };

    view! {
        <div class="fixed inset-0 bg-black/50 flex items-start justify-center p-4 z-50 overflow-y-auto">
            <div
                class="bg-gray-800 rounded-2xl p-6 max-w-md w-full mt-2"
                on:click=move |evt: ev::MouseEvent| evt.stop_propagation()
            >
                <div class="flex justify-between items-center mb-6">
                    <h2 class="text-xl font-bold">{heading}</h2>
                    <button
                        class="p-2 hover:bg-gray-700 rounded-full"
                        on:click=handle_cancel
                        aria-label="Kapat"
                    >
                        <Icon icon=X size="20px" />
                    </button>
                </div>

                <div class="space-y-4">
                    <div>
                        <label class=LABEL_CLASS>"Başlık"</label>
                        <input
                            type="text"
                            class=FIELD_CLASS
                            prop:value=move || staged.with(|c| c.title.clone())
                            on:input=move |evt| {
                                staged.update(|c| c.title = event_target_value(&evt))
                            }
                        />
                    </div>

                    <div>
                        <label class=LABEL_CLASS>"Açıklama"</label>
                        <input
                            type="text"
                            class=FIELD_CLASS
                            prop:value=move || staged.with(|c| c.description.clone())
                            on:input=move |evt| {
                                staged.update(|c| c.description = event_target_value(&evt))
                            }
                        />
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div>
                            <label class=LABEL_CLASS>"Fiyat (TL)"</label>
                            <input
                                type="number"
                                class=FIELD_CLASS
                                prop:value=move || staged.with(|c| c.price.to_string())
                                on:input=move |evt| {
                                    staged.update(|c| c.price = parse_price(&event_target_value(&evt)))
                                }
                            />
                        </div>
                        <div>
                            <label class=LABEL_CLASS>"İndirimli Fiyat (TL)"</label>
                            <input
                                type="number"
                                class=FIELD_CLASS
                                prop:value=move || staged.with(|c| {
                                    c.original_price.map(|v| v.to_string()).unwrap_or_default()
                                })
                                on:input=move |evt| {
                                    staged.update(|c| {
                                        c.original_price = parse_discount(&event_target_value(&evt))
                                    })
                                }
                            />
                        </div>
                    </div>

                    <div>
                        <label class=LABEL_CLASS>"Renk"</label>
                        <select
                            class=FIELD_CLASS
                            prop:value=move || staged.with(|c| c.background.key())
                            on:change=move |evt| {
                                staged.update(|c| {
                                    c.background = CardGradient::from_key(&event_target_value(&evt))
                                })
                            }
                        >
                            {CardGradient::all().into_iter().map(|gradient| view! {
                                <option value=gradient.key()>{gradient.label()}</option>
                            }).collect_view()}
                        </select>
                    </div>

                    <div>
                        <label class=LABEL_CLASS>"İkon"</label>
                        <select
                            class=FIELD_CLASS
                            prop:value=move || staged.with(|c| c.icon.key())
                            on:change=move |evt| {
                                staged.update(|c| {
                                    c.icon = CardIcon::from_key(&event_target_value(&evt))
                                })
                            }
                        >
                            {CardIcon::all().into_iter().map(|icon| view! {
                                <option value=icon.key()>{icon.label()}</option>
                            }).collect_view()}
                        </select>
                    </div>

                    <div>
                        <label class="block text-sm font-medium mb-2">"Özellikler"</label>
                        // Rows are keyed by position so a keystroke patches the
                        // existing input in place instead of rebuilding the row,
                        // which would drop focus mid-word.
                        <For
                            each={move || (0..staged.with(|c| c.features.len())).collect::<Vec<_>>()}
                            key=|index| *index
                            children=move |index: usize| {
                                view! {
                                    <div class="flex gap-2 mb-2">
                                        <input
                                            type="text"
                                            class="flex-1 bg-gray-700 rounded-lg p-2 text-white"
                                            prop:value=move || staged.with(|c| {
                                                c.features.get(index).cloned().unwrap_or_default()
                                            })
                                            on:input=move |evt| {
                                                staged.update(|c| {
                                                    set_feature(c, index, event_target_value(&evt))
                                                })
                                            }
                                        />
                                        <button
                                            class="p-2 bg-red-500/20 hover:bg-red-500/30 rounded-lg"
                                            on:click=move |_| {
                                                staged.update(|c| remove_feature(c, index))
                                            }
                                            aria-label="Özelliği sil"
                                        >
                                            <Icon icon=X size="16px" />
                                        </button>
                                    </div>
                                }
                            }
                        />
                        <button
                            class="w-full p-2 bg-gray-700 hover:bg-gray-600 rounded-lg mt-2 flex items-center justify-center gap-2"
                            on:click=move |_| staged.update(|c| c.features.push(String::new()))
                        >
                            <Icon icon=PLUS size="16px" />
                            <span>"Özellik Ekle"</span>
                        </button>
                    </div>

                    <div class="flex gap-4 mt-6">
                        <button
                            class="flex-1 p-2 bg-gray-700 hover:bg-gray-600 rounded-lg"
                            on:click=handle_cancel
                        >
                            "İptal"
                        </button>
                        <button
                            class="flex-1 p-2 bg-blue-500 hover:bg-blue-600 rounded-lg"
                            on:click=handle_save
                        >
                            "Kaydet"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price_degrades_to_zero() {
        assert_eq!(parse_price("3500"), 3500.0);
        assert_eq!(parse_price("  700 "), 700.0);
        assert_eq!(parse_price(""), 0.0);
        assert_eq!(parse_price("abc"), 0.0);
    }

    #[test]
    fn test_parse_discount_clears_on_bad_input() {
        assert_eq!(parse_discount("5000"), Some(5000.0));
        assert_eq!(parse_discount(""), None);
        assert_eq!(parse_discount("abc"), None);
        // Zero means "no discount", matching the cleared field.
        assert_eq!(parse_discount("0"), None);
    }

    fn card_with_features(features: &[&str]) -> CampaignCard {
        CampaignCard {
            features: features.iter().map(|f| f.to_string()).collect(),
            ..CampaignCard::draft()
        }
    }

    #[test]
    fn test_set_feature_edits_only_that_position() {
        let mut card = card_with_features(&["a", "b", "c"]);
        // A per-keystroke sequence against the same row must keep landing on
        // that row, leaving its neighbors alone.
        set_feature(&mut card, 1, "b1".to_string());
        set_feature(&mut card, 1, "b12".to_string());
        assert_eq!(card.features, vec!["a", "b12", "c"]);
    }

    #[test]
    fn test_set_feature_ignores_stale_index() {
        let mut card = card_with_features(&["a"]);
        set_feature(&mut card, 5, "ghost".to_string());
        assert_eq!(card.features, vec!["a"]);
    }

    #[test]
    fn test_remove_feature_shifts_left() {
        let mut card = card_with_features(&["a", "b", "c", "d"]);
        remove_feature(&mut card, 1);
        assert_eq!(card.features, vec!["a", "c", "d"]);
        // The index that pointed at the last row is stale now; ignored.
        remove_feature(&mut card, 3);
        assert_eq!(card.features, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_remove_feature_can_empty_the_list() {
        let mut card = card_with_features(&["a"]);
        remove_feature(&mut card, 0);
        assert!(card.features.is_empty());
    }
}
