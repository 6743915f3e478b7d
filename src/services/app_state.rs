//! Application state container.
//!
//! All mutable UI state lives in one explicit struct: the card store, the
//! selection set, the pagination cursor, the open editor session, and the
//! bulk-preview snapshot. Components hold it in a single `RwSignal<AppState>`
//! and go through the transition methods below, which keeps every state
//! change a plain function over plain data and unit-testable without a DOM.

use std::collections::HashSet;

use crate::models::{CampaignCard, CardId};

/// Cards shown per grid page.
pub const CARDS_PER_PAGE: usize = 6;

/// What the editor session will do on save. Carried explicitly so the save
/// path never has to infer create-vs-update from the staged card itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Update(CardId),
}

/// An open editor: the mode plus the card the staged copy is seeded from.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorSession {
    pub mode: EditorMode,
    pub seed: CampaignCard,
}

impl EditorSession {
    /// Session for a brand-new card.
    pub fn create() -> Self {
        Self {
            mode: EditorMode::Create,
            seed: CampaignCard::draft(),
        }
    }

    /// Session editing an existing card.
    pub fn update(card: CampaignCard) -> Self {
        Self {
            mode: EditorMode::Update(card.id),
            seed: card,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub cards: Vec<CampaignCard>,
    pub selection: HashSet<CardId>,
    pub page: usize,
    pub editor: Option<EditorSession>,
    /// Snapshot of the selected cards while the bulk preview is open.
    /// Empty means closed.
    pub preview: Vec<CampaignCard>,
}

impl AppState {
    pub fn new(cards: Vec<CampaignCard>) -> Self {
        Self {
            cards,
            selection: HashSet::new(),
            page: 0,
            editor: None,
            preview: Vec::new(),
        }
    }

    // Pagination

    pub fn total_pages(&self) -> usize {
        self.cards.len().div_ceil(CARDS_PER_PAGE).max(1)
    }

    /// Cursor clamped against the live collection, so a shrinking store can
    /// never leave it pointing past the last page.
    pub fn current_page(&self) -> usize {
        self.page.min(self.total_pages() - 1)
    }

    /// The cards visible on the current page, in store order.
    pub fn page_cards(&self) -> &[CampaignCard] {
        let start = (self.current_page() * CARDS_PER_PAGE).min(self.cards.len());
        let end = (start + CARDS_PER_PAGE).min(self.cards.len());
        &self.cards[start..end]
    }

    pub fn next_page(&mut self) {
        self.page = (self.current_page() + 1).min(self.total_pages() - 1);
    }

    pub fn prev_page(&mut self) {
        self.page = self.current_page().saturating_sub(1);
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.page = page.min(self.total_pages() - 1);
    }

    pub fn on_first_page(&self) -> bool {
        self.current_page() == 0
    }

    pub fn on_last_page(&self) -> bool {
        self.current_page() + 1 == self.total_pages()
    }

    // Editor

    pub fn open_editor(&mut self, session: EditorSession) {
        self.editor = Some(session);
    }

    pub fn close_editor(&mut self) {
        self.editor = None;
    }

    /// Commit a staged card back into the store and close the editor.
    ///
    /// `Update` replaces the matching card in place, preserving its position;
    /// if the id is no longer present the commit is a silent no-op. `Create`
    /// appends. No validation happens here: whatever the editor staged is
    /// stored as-is.
    pub fn commit(&mut self, mode: EditorMode, card: CampaignCard) {
        match mode {
            EditorMode::Update(id) => {
                if let Some(slot) = self.cards.iter_mut().find(|c| c.id == id) {
                    *slot = card;
                }
            }
            EditorMode::Create => self.cards.push(card),
        }
        self.editor = None;
    }

    // Selection

    pub fn toggle_selection(&mut self, id: CardId) {
        if !self.selection.insert(id) {
            self.selection.remove(&id);
        }
    }

    pub fn is_selected(&self, id: CardId) -> bool {
        self.selection.contains(&id)
    }

    // Bulk preview

    /// Snapshot the selected cards, in store order, and open the preview.
    /// Does nothing when the selection is empty.
    pub fn open_preview(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        self.preview = self
            .cards
            .iter()
            .filter(|c| self.selection.contains(&c.id))
            .cloned()
            .collect();
    }

    pub fn preview_open(&self) -> bool {
        !self.preview.is_empty()
    }

    /// Dismiss the preview. The selection does not survive a preview
    /// session; it is cleared along with the snapshot.
    pub fn close_preview(&mut self) {
        self.preview.clear();
        self.selection.clear();
    }
}
