//! Domain types for campaign cards.
//!
//! A `CampaignCard` is a single promotional offer: pricing, description,
//! feature bullets, and a fixed visual identity (gradient + icon). The
//! gradient and icon sets are closed enums so every value has an exhaustive
//! mapping to rendering parameters, both in the DOM and in the PNG exporter.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque, creation-time-assigned card identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(Uuid);

impl CardId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CardId {
    fn default() -> Self {
        Self::new()
    }
}

/// Background gradient options for a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CardGradient {
    #[default]
    PinkOrange,
    Emerald,
    Purple,
    Blue,
    Red,
}

impl CardGradient {
    pub fn label(&self) -> &'static str {
        match self {
            CardGradient::PinkOrange => "Pembe-Turuncu",
            CardGradient::Emerald => "Yeşil",
            CardGradient::Purple => "Mor",
            CardGradient::Blue => "Mavi",
            CardGradient::Red => "Kırmızı",
        }
    }

    /// Tailwind gradient classes for DOM rendering.
    pub fn class(&self) -> &'static str {
        match self {
            CardGradient::PinkOrange => "from-pink-500 to-orange-500",
            CardGradient::Emerald => "from-emerald-500 to-teal-500",
            CardGradient::Purple => "from-purple-500 to-indigo-500",
            CardGradient::Blue => "from-blue-500 to-cyan-500",
            CardGradient::Red => "from-red-500 to-pink-500",
        }
    }

    /// Start/end hex colors for the canvas rasterizer. Matches the
    /// Tailwind-500 palette the `class()` gradients resolve to.
    pub fn stops(&self) -> (&'static str, &'static str) {
        match self {
            CardGradient::PinkOrange => ("#ec4899", "#f97316"),
            CardGradient::Emerald => ("#10b981", "#14b8a6"),
            CardGradient::Purple => ("#a855f7", "#6366f1"),
            CardGradient::Blue => ("#3b82f6", "#06b6d4"),
            CardGradient::Red => ("#ef4444", "#ec4899"),
        }
    }

    /// Stable key used as the `<option>` value in the editor.
    pub fn key(&self) -> &'static str {
        match self {
            CardGradient::PinkOrange => "pink-orange",
            CardGradient::Emerald => "emerald",
            CardGradient::Purple => "purple",
            CardGradient::Blue => "blue",
            CardGradient::Red => "red",
        }
    }

    pub fn from_key(key: &str) -> Self {
        Self::all()
            .into_iter()
            .find(|g| g.key() == key)
            .unwrap_or_default()
    }

    pub fn all() -> Vec<Self> {
        vec![
            CardGradient::PinkOrange,
            CardGradient::Emerald,
            CardGradient::Purple,
            CardGradient::Blue,
            CardGradient::Red,
        ]
    }
}

/// Icon options for a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CardIcon {
    #[default]
    Gift,
    TrendingUp,
    Heart,
}

impl CardIcon {
    pub fn label(&self) -> &'static str {
        match self {
            CardIcon::Gift => "Hediye",
            CardIcon::TrendingUp => "Trend",
            CardIcon::Heart => "Kalp",
        }
    }

    /// Glyph drawn inside the icon badge by the canvas rasterizer.
    pub fn glyph(&self) -> &'static str {
        match self {
            CardIcon::Gift => "🎁",
            CardIcon::TrendingUp => "📈",
            CardIcon::Heart => "♥",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            CardIcon::Gift => "gift",
            CardIcon::TrendingUp => "trending-up",
            CardIcon::Heart => "heart",
        }
    }

    pub fn from_key(key: &str) -> Self {
        Self::all()
            .into_iter()
            .find(|i| i.key() == key)
            .unwrap_or_default()
    }

    pub fn all() -> Vec<Self> {
        vec![CardIcon::Gift, CardIcon::TrendingUp, CardIcon::Heart]
    }
}

/// A single promotional campaign card.
///
/// `original_price` is the pre-discount amount; nothing ties it to `price`,
/// so a "discount" may render higher than the price. That mirrors the
/// product behavior and is kept on purpose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignCard {
    pub id: CardId,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub original_price: Option<f64>,
    pub background: CardGradient,
    pub features: Vec<String>,
    pub icon: CardIcon,
}

impl CampaignCard {
    /// Creation seed for the editor: fresh id, empty fields, one blank
    /// feature line ready to be filled in.
    pub fn draft() -> Self {
        Self {
            id: CardId::new(),
            title: String::new(),
            description: String::new(),
            price: 0.0,
            original_price: None,
            background: CardGradient::default(),
            features: vec![String::new()],
            icon: CardIcon::default(),
        }
    }
}

/// The cards the app starts with.
pub fn seed_cards() -> Vec<CampaignCard> {
    vec![
        CampaignCard {
            id: CardId::new(),
            title: "Şubat Özel Kampanya".to_string(),
            description: "30-40K Takipçi + 30 Görsel Beğeni".to_string(),
            price: 3500.0,
            original_price: Some(5000.0),
            background: CardGradient::PinkOrange,
            features: vec![
                "Keşfet Garantili".to_string(),
                "Elit Kitle".to_string(),
                "Tüm Hediyeler".to_string(),
            ],
            icon: CardIcon::Gift,
        },
        CampaignCard {
            id: CardId::new(),
            title: "Reels Keşfet Paketi".to_string(),
            description: "5K Reels İzlenme".to_string(),
            price: 700.0,
            original_price: None,
            background: CardGradient::Emerald,
            features: vec![
                "Organik Artış".to_string(),
                "Gerçek İzleyiciler".to_string(),
                "Hızlı Teslimat".to_string(),
            ],
            icon: CardIcon::TrendingUp,
        },
        CampaignCard {
            id: CardId::new(),
            title: "Aylık Beğeni Paketi".to_string(),
            description: "30 Gün Beğeni Garantisi".to_string(),
            price: 2350.0,
            original_price: None,
            background: CardGradient::Purple,
            features: vec!["5 Görsele Beğeni".to_string(), "Düzenli Rapor".to_string()],
            icon: CardIcon::Heart,
        },
    ]
}
