//! Layout and persistence constants - these are the single source of truth
//! for the auto-layout grid, the fallback placement formula, and the color
//! interpolation endpoints.

/// Left edge of the first category column in auto-layout.
pub const CATEGORY_LEFT_OFFSET: f64 = 100.0;
/// Horizontal spacing between category columns.
pub const CATEGORY_SPACING: f64 = 250.0;
/// Row on which all categories sit.
pub const CATEGORY_ROW_Y: f64 = 120.0;
/// Row on which the root sits.
pub const ROOT_ROW_Y: f64 = 0.0;
/// The root is pulled slightly left of the exact category-span midpoint.
pub const ROOT_CENTERING_OFFSET: f64 = 60.0;
/// Horizontal indent per tree level below the category row.
pub const SUBCATEGORY_INDENT: f64 = 60.0;
/// Vertical spacing between consecutive layout slots.
pub const VERTICAL_SPACING: f64 = 80.0;

// Fallback placement for nodes that have never been positioned in manual
// mode. Cross-branch collisions are possible and accepted; the user is
// expected to drag-correct.
pub const FALLBACK_COLUMN_SPACING: f64 = 300.0;
pub const FALLBACK_ROW_SPACING: f64 = 120.0;

// Node visual defaults
pub const DEFAULT_NODE_WIDTH: f64 = 200.0;
pub const DEFAULT_NODE_HEIGHT: f64 = 80.0;
pub const DEFAULT_STICKY_WIDTH: f64 = 200.0;
pub const DEFAULT_STICKY_HEIGHT: f64 = 150.0;

/// Sticky notes render as a backdrop layer behind graph nodes.
pub const STICKY_LAYER: i32 = 0;
pub const GRAPH_LAYER: i32 = 1;

/// Idle window for coalescing save bursts into one write.
pub const SAVE_DEBOUNCE_MS: u64 = 500;

// Attention-weight color interpolation endpoints (RGB).
pub const BORDER_LOW: (u8, u8, u8) = (0xae, 0xc6, 0xe8); // pale blue
pub const BORDER_HIGH: (u8, u8, u8) = (0x10, 0x2a, 0x54); // navy
pub const FILL_LOW: (u8, u8, u8) = (0xf0, 0xf5, 0xfb); // pale blue
pub const FILL_HIGH: (u8, u8, u8) = (0x3b, 0x78, 0xc4); // saturated blue

// Fixed overrides that ignore the attention score.
pub const SELECTED_BORDER: &str = "#d4af37"; // gold
pub const SELECTED_FILL: &str = "#fff8dc"; // cream
pub const NEUTRAL_BORDER: &str = "#000000";
pub const NEUTRAL_FILL: &str = "#ffffff";
