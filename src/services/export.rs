//! Bulk export: rasterize a stack of campaign cards into one PNG.
//!
//! The preview overlay is not screenshotted; the cards are redrawn onto an
//! offscreen canvas with the same layout (gradient panel, icon badge, title,
//! price row, feature bullets), encoded with `toDataURL`, and handed to a
//! synthetic anchor click for download. The canvas backing store is sized at
//! `PIXEL_RATIO` times the CSS dimensions, so the file comes out at 3x
//! density on a solid black background.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlAnchorElement, HtmlCanvasElement};

use crate::models::CampaignCard;
use crate::utils::formatting::format_price;

/// Fixed name of the downloaded file.
pub const EXPORT_FILENAME: &str = "kampanyalar.png";

/// Backing-store density multiplier.
pub const PIXEL_RATIO: f64 = 3.0;

/// Rendered card width in CSS pixels, matching the preview's `max-w-[350px]`.
const CARD_WIDTH: f64 = 350.0;
/// Outer padding of the stack and inner padding of each card.
const PADDING: f64 = 16.0;
/// Vertical gap between stacked cards.
const GAP: f64 = 12.0;
/// Height of one feature bullet row.
const FEATURE_ROW: f64 = 24.0;
/// Icon badge diameter.
const BADGE: f64 = 44.0;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no browser window/document available")]
    NoDocument,
    #[error("canvas setup failed: {0}")]
    Canvas(String),
    #[error("drawing failed: {0}")]
    Draw(String),
    #[error("PNG encoding failed: {0}")]
    Encode(String),
    #[error("download trigger failed: {0}")]
    Download(String),
}

fn js_err(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Height of one card in CSS pixels. Grows with the feature count.
fn card_height(card: &CampaignCard) -> f64 {
    let features = card.features.len() as f64 * FEATURE_ROW;
    // top padding + header + spacing + price row + spacing + features + bottom padding
    PADDING + BADGE + 12.0 + 30.0 + 12.0 + features + PADDING
}

fn stack_dimensions(cards: &[CampaignCard]) -> (f64, f64) {
    let width = CARD_WIDTH + 2.0 * PADDING;
    let cards_h: f64 = cards.iter().map(card_height).sum();
    let gaps = GAP * (cards.len().saturating_sub(1)) as f64;
    (width, PADDING + cards_h + gaps + PADDING)
}

/// Rasterize `cards` stacked vertically and trigger a client-side download.
///
/// The failure mode is deliberate: callers log the error and leave the
/// preview open so the user can simply retry the download control.
pub fn download_cards_png(cards: &[CampaignCard]) -> Result<(), ExportError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(ExportError::NoDocument)?;

    let (width, height) = stack_dimensions(cards);

    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| ExportError::Canvas(js_err(e)))?
        .dyn_into()
        .map_err(|_| ExportError::Canvas("element is not a canvas".to_string()))?;
    canvas.set_width((width * PIXEL_RATIO) as u32);
    canvas.set_height((height * PIXEL_RATIO) as u32);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| ExportError::Canvas(js_err(e)))?
        .ok_or_else(|| ExportError::Canvas("2d context unavailable".to_string()))?
        .dyn_into()
        .map_err(|_| ExportError::Canvas("context has unexpected type".to_string()))?;
    ctx.scale(PIXEL_RATIO, PIXEL_RATIO)
        .map_err(|e| ExportError::Canvas(js_err(e)))?;

    // Solid dark backdrop behind the stack.
    ctx.set_fill_style_str("#000000");
    ctx.fill_rect(0.0, 0.0, width, height);

    let mut y = PADDING;
    for card in cards {
        draw_card(&ctx, card, PADDING, y).map_err(ExportError::Draw)?;
        y += card_height(card) + GAP;
    }

    let data_url = canvas
        .to_data_url_with_type("image/png")
        .map_err(|e| ExportError::Encode(js_err(e)))?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| ExportError::Download(js_err(e)))?
        .dyn_into()
        .map_err(|_| ExportError::Download("element is not an anchor".to_string()))?;
    anchor.set_download(EXPORT_FILENAME);
    anchor.set_href(&data_url);
    anchor.click();

    Ok(())
}

fn draw_card(
    ctx: &CanvasRenderingContext2d,
    card: &CampaignCard,
    x: f64,
    y: f64,
) -> Result<(), String> {
    let height = card_height(card);

    // Gradient panel with rounded corners.
    let gradient = ctx.create_linear_gradient(x, y, x + CARD_WIDTH, y);
    let (from, to) = card.background.stops();
    gradient.add_color_stop(0.0, from).map_err(js_err)?;
    gradient.add_color_stop(1.0, to).map_err(js_err)?;
    rounded_rect(ctx, x, y, CARD_WIDTH, height, 24.0)?;
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill();

    let inner_x = x + PADDING;
    let mut cursor = y + PADDING;

    // Icon badge: translucent circle with the icon glyph.
    let badge_cx = inner_x + BADGE / 2.0;
    let badge_cy = cursor + BADGE / 2.0;
    ctx.begin_path();
    ctx.arc(badge_cx, badge_cy, BADGE / 2.0, 0.0, std::f64::consts::TAU)
        .map_err(js_err)?;
    ctx.set_fill_style_str("rgba(255, 255, 255, 0.2)");
    ctx.fill();
    ctx.set_fill_style_str("#ffffff");
    ctx.set_font("20px sans-serif");
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text(card.icon.glyph(), badge_cx, badge_cy)
        .map_err(js_err)?;

    // Title and description beside the badge.
    let text_x = inner_x + BADGE + 12.0;
    ctx.set_text_align("left");
    ctx.set_text_baseline("alphabetic");
    ctx.set_font("bold 18px sans-serif");
    ctx.fill_text(&card.title, text_x, cursor + 18.0)
        .map_err(js_err)?;
    ctx.set_font("13px sans-serif");
    ctx.set_fill_style_str("rgba(255, 255, 255, 0.8)");
    ctx.fill_text(&card.description, text_x, cursor + 38.0)
        .map_err(js_err)?;
    cursor += BADGE + 12.0;

    // Price row, discount struck through right after the primary price.
    let price = format_price(card.price);
    ctx.set_fill_style_str("#ffffff");
    ctx.set_font("bold 24px sans-serif");
    ctx.fill_text(&price, inner_x, cursor + 24.0).map_err(js_err)?;
    if let Some(original) = card.original_price {
        let price_width = ctx.measure_text(&price).map_err(js_err)?.width();
        let strike = format_price(original);
        let strike_x = inner_x + price_width + 8.0;
        ctx.set_font("14px sans-serif");
        ctx.set_fill_style_str("rgba(255, 255, 255, 0.6)");
        ctx.fill_text(&strike, strike_x, cursor + 24.0).map_err(js_err)?;
        let strike_width = ctx.measure_text(&strike).map_err(js_err)?.width();
        ctx.set_stroke_style_str("rgba(255, 255, 255, 0.6)");
        ctx.set_line_width(1.0);
        ctx.begin_path();
        ctx.move_to(strike_x, cursor + 19.0);
        ctx.line_to(strike_x + strike_width, cursor + 19.0);
        ctx.stroke();
    }
    cursor += 30.0 + 12.0;

    // Feature bullets.
    for feature in &card.features {
        let bullet_cy = cursor + FEATURE_ROW / 2.0;
        ctx.begin_path();
        ctx.arc(inner_x + 8.0, bullet_cy, 8.0, 0.0, std::f64::consts::TAU)
            .map_err(js_err)?;
        ctx.set_fill_style_str("rgba(255, 255, 255, 0.2)");
        ctx.fill();
        ctx.begin_path();
        ctx.arc(inner_x + 8.0, bullet_cy, 3.0, 0.0, std::f64::consts::TAU)
            .map_err(js_err)?;
        ctx.set_fill_style_str("#ffffff");
        ctx.fill();

        ctx.set_font("13px sans-serif");
        ctx.set_text_baseline("middle");
        ctx.fill_text(feature, inner_x + 24.0, bullet_cy)
            .map_err(js_err)?;
        ctx.set_text_baseline("alphabetic");
        cursor += FEATURE_ROW;
    }

    Ok(())
}

fn rounded_rect(
    ctx: &CanvasRenderingContext2d,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    r: f64,
) -> Result<(), String> {
    ctx.begin_path();
    ctx.move_to(x + r, y);
    ctx.arc_to(x + w, y, x + w, y + h, r).map_err(js_err)?;
    ctx.arc_to(x + w, y + h, x, y + h, r).map_err(js_err)?;
    ctx.arc_to(x, y + h, x, y, r).map_err(js_err)?;
    ctx.arc_to(x, y, x + w, y, r).map_err(js_err)?;
    ctx.close_path();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed_cards;

    #[test]
    fn test_card_height_grows_with_features() {
        let mut card = CampaignCard::draft();
        card.features.clear();
        let empty = card_height(&card);
        card.features.push("Keşfet Garantili".to_string());
        assert_eq!(card_height(&card), empty + FEATURE_ROW);
    }

    #[test]
    fn test_stack_dimensions() {
        let cards = seed_cards();
        let (width, height) = stack_dimensions(&cards);
        assert_eq!(width, CARD_WIDTH + 2.0 * PADDING);

        let expected: f64 = cards.iter().map(card_height).sum::<f64>()
            + 2.0 * GAP
            + 2.0 * PADDING;
        assert_eq!(height, expected);
    }

    #[test]
    fn test_stack_dimensions_empty_has_no_gap() {
        let (_, height) = stack_dimensions(&[]);
        assert_eq!(height, 2.0 * PADDING);
    }
}
