//! Campaign card UI components.

pub mod bulk_preview;
pub mod campaign_card;
pub mod card_editor;
pub mod card_grid;

// Re-exports
pub use bulk_preview::BulkPreview;
pub use campaign_card::{CampaignCardStacked, CampaignCardView, CardIconGlyph};
pub use card_editor::CardEditor;
pub use card_grid::CardGrid;
