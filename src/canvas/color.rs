//! Attention-weight color derivation.
//!
//! A pure function of `(attention_weight, priority, is_selected)`. The
//! attention score is stepped to the nearest 10% before interpolation so a
//! slowly drifting score does not repaint the node on every update.

use crate::constants::{
    BORDER_HIGH, BORDER_LOW, FILL_HIGH, FILL_LOW, NEUTRAL_BORDER, NEUTRAL_FILL, SELECTED_BORDER,
    SELECTED_FILL,
};

/// Border and fill colors for one graph node, as `#rrggbb` strings.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NodeColors {
    pub border: String,
    pub fill: String,
}

/// Derive render colors for a node.
///
/// Selection always wins; nodes with no priority and a near-zero attention
/// score render neutral black-on-white; everything else interpolates between
/// the fixed endpoints at the stepped attention value.
pub fn node_colors(attention_weight: f64, priority: i32, is_selected: bool) -> NodeColors {
    if is_selected {
        return NodeColors {
            border: SELECTED_BORDER.to_string(),
            fill: SELECTED_FILL.to_string(),
        };
    }

    let t = step_attention(attention_weight);
    if t == 0.0 && priority == 0 {
        return NodeColors {
            border: NEUTRAL_BORDER.to_string(),
            fill: NEUTRAL_FILL.to_string(),
        };
    }

    NodeColors {
        border: lerp_hex(BORDER_LOW, BORDER_HIGH, t),
        fill: lerp_hex(FILL_LOW, FILL_HIGH, t),
    }
}

/// Round an attention weight to the nearest 0.1 step, half up, clamped to
/// `[0.0, 1.0]`.
pub fn step_attention(attention_weight: f64) -> f64 {
    let clamped = attention_weight.clamp(0.0, 1.0);
    ((clamped * 10.0 + 0.5).floor() / 10.0).min(1.0)
}

fn lerp_hex(low: (u8, u8, u8), high: (u8, u8, u8), t: f64) -> String {
    let channel = |a: u8, b: u8| -> u8 {
        let v = a as f64 + (b as f64 - a as f64) * t;
        v.round() as u8
    };
    format!(
        "#{:02x}{:02x}{:02x}",
        channel(low.0, high.0),
        channel(low.1, high.1),
        channel(low.2, high.2)
    )
}
