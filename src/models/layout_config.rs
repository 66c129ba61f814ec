//! Layout configuration record shared by the parser, engine and serializer.

use crate::models::{LayoutMode, SlicerStyle, VisualKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Every parameter that drives zone computation and markup rendering.
///
/// Values are plain data: the control surface replaces the whole record on
/// each edit and the engine reads a snapshot. Fields that do not apply to the
/// active [`LayoutMode`] are ignored, and out-of-range values are clamped by
/// the engine rather than rejected here.
///
/// Serialized with camelCase keys; every field has a default so partial
/// documents load cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    // === Canvas ===
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Active topology
    pub layout_mode: LayoutMode,

    // === Spacing and shape ===
    /// Outer padding around the content area
    pub padding: u32,
    /// Gap between neighbouring zones
    pub gap: u32,
    /// Corner radius of content-like zones
    pub corner_radius: u32,
    /// Border width of non-frame zones (0 = no border)
    pub stroke_width: u32,

    // === Colors (opaque values handed to the renderer) ===
    /// Canvas background
    pub background_color: String,
    /// Card / content fill
    pub card_color: String,
    /// Header band fill
    pub header_color: String,
    /// Footer band fill
    pub footer_color: String,
    /// Trust bar fill
    pub trustbar_color: String,
    /// Header accent line
    pub accent_color: String,
    /// Sidebar and nav rail fill
    pub sidebar_color: String,
    /// Zone borders and hairlines
    pub stroke_color: String,
    /// Helper and label text
    pub text_color: String,
    /// Slicer band tint
    pub slicer_color: String,

    // === Background overlay ===
    /// Draw a full-canvas noise texture
    pub show_noise: bool,
    /// Opacity of the noise texture
    pub noise_opacity: f64,

    // === Bands shared by all modes ===
    /// Show the top trust bar
    pub show_trust_bar: bool,
    /// Trust bar height
    pub trust_bar_height: u32,
    /// Show the bottom footer
    pub show_footer: bool,
    /// Footer height
    pub footer_height: u32,
    /// Show the title zone (header slot in federal, top band elsewhere)
    pub show_title: bool,
    /// Title band height
    pub title_height: u32,
    /// Title zone width inside the federal header
    pub title_width: u32,
    /// Optional document title (used by reports)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_text: Option<String>,
    /// Show the slicer band
    pub show_slicer_zone: bool,
    /// Slicer band height
    pub slicer_zone_height: u32,
    /// Slicer band density preset
    pub slicer_style: SlicerStyle,
    /// Text drawn in the slicer band
    pub slicer_label: String,
    /// Draw the slicer label
    pub show_slicer_label: bool,
    /// Secondary caption line of the `full` slicer preset
    pub slicer_caption: String,
    /// Tint the slicer band in the `standard` and `full` presets
    pub slicer_tint: bool,

    // === Federal ===
    /// Show the federal header bar
    pub show_header: bool,
    /// Header bar height
    pub header_height: u32,
    /// Draw the 3px accent line under the header
    pub show_header_accent: bool,
    /// Show the logo square inside the header
    pub show_logo: bool,
    /// Requested logo size (capped at 60)
    pub logo_width: u32,
    /// Grid rows
    pub federal_rows: u32,
    /// Grid columns (uniform mode)
    pub federal_columns: u32,
    /// Show the left sidebar
    pub show_federal_sidebar: bool,
    /// Sidebar width (capped at 40% of content width)
    pub federal_sidebar_width: u32,
    /// Use `federal_row_columns` instead of the uniform column count
    pub federal_use_variable_columns: bool,
    /// Column count per row
    pub federal_row_columns: Vec<u32>,

    // === Sidebar ===
    /// Navigation rail width (capped at 35% of content width)
    pub nav_width: u32,
    /// Card grid rows under the KPI strip
    pub sidebar_rows: u32,
    /// Card grid columns under the KPI strip
    pub sidebar_columns: u32,

    // === KPI strip (sidebar, kpi, three-col, asymmetric) ===
    /// Show the KPI strip in modes where it is optional
    pub show_kpi_strip: bool,
    /// Number of KPI cells in the strip
    pub kpi_count: u32,
    /// KPI strip height
    pub kpi_height: u32,

    // === Grid ===
    /// Grid rows
    pub grid_rows: u32,
    /// Grid columns (uniform mode)
    pub grid_columns: u32,
    /// Use `grid_row_columns` instead of the uniform column count
    pub grid_use_variable_columns: bool,
    /// Column count per row
    pub grid_row_columns: Vec<u32>,

    // === KPI ===
    /// Content zones below the KPI strip
    pub kpi_visual_count: u32,
    /// Give the first content zone the full width
    pub main_chart_full_width: bool,
    /// Maximum columns of the grid below the strip
    pub kpi_grid_columns: u32,

    // === Three-column ===
    /// Stacked visuals in each of the three columns
    pub visuals_per_column: u32,

    // === Asymmetric ===
    /// Side cards stacked right of the main zone
    pub side_card_count: u32,

    // === Mobile ===
    /// Zones in the vertical stack
    pub mobile_visual_count: u32,

    // === Per-zone annotations, keyed by content index ===
    /// Visual kind per content zone
    #[serde(with = "index_map")]
    pub visual_types: BTreeMap<usize, VisualKind>,
    /// Label per content zone (newlines split lines)
    #[serde(with = "index_map")]
    pub visual_labels: BTreeMap<usize, String>,
    /// Kind used when `visual_types` has no entry
    pub default_visual_type: VisualKind,
    /// Draw the type badge on content zones
    pub show_type_indicators: bool,
    /// Draw label text on content zones
    pub show_labels: bool,
    /// Label font size in pixels
    pub label_font_size: u32,
    /// Warn when more than ten visuals are laid out
    pub warn_too_many_visuals: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            layout_mode: LayoutMode::default(),

            padding: 20,
            gap: 16,
            corner_radius: 8,
            stroke_width: 0,

            background_color: "#F3F4F6".to_string(),
            card_color: "#FFFFFF".to_string(),
            header_color: "#1F3A5F".to_string(),
            footer_color: "#E5E7EB".to_string(),
            trustbar_color: "#0B1F33".to_string(),
            accent_color: "#F2C94C".to_string(),
            sidebar_color: "#FFFFFF".to_string(),
            stroke_color: "#D1D5DB".to_string(),
            text_color: "#6B7280".to_string(),
            slicer_color: "#E8EEF6".to_string(),

            show_noise: false,
            noise_opacity: 0.05,

            show_trust_bar: false,
            trust_bar_height: 28,
            show_footer: false,
            footer_height: 36,
            show_title: true,
            title_height: 48,
            title_width: 420,
            title_text: None,
            show_slicer_zone: false,
            slicer_zone_height: 48,
            slicer_style: SlicerStyle::default(),
            slicer_label: "Filters".to_string(),
            show_slicer_label: true,
            slicer_caption: "Date · Region · Category".to_string(),
            slicer_tint: true,

            show_header: true,
            header_height: 72,
            show_header_accent: true,
            show_logo: true,
            logo_width: 48,
            federal_rows: 2,
            federal_columns: 3,
            show_federal_sidebar: true,
            federal_sidebar_width: 240,
            federal_use_variable_columns: false,
            federal_row_columns: vec![3, 2],

            nav_width: 220,
            sidebar_rows: 2,
            sidebar_columns: 2,

            show_kpi_strip: true,
            kpi_count: 4,
            kpi_height: 100,

            grid_rows: 2,
            grid_columns: 3,
            grid_use_variable_columns: false,
            grid_row_columns: vec![3, 2],

            kpi_visual_count: 3,
            main_chart_full_width: true,
            kpi_grid_columns: 2,

            visuals_per_column: 3,

            side_card_count: 3,

            mobile_visual_count: 4,

            visual_types: BTreeMap::new(),
            visual_labels: BTreeMap::new(),
            default_visual_type: VisualKind::default(),
            show_type_indicators: true,
            show_labels: false,
            label_font_size: 14,
            warn_too_many_visuals: true,
        }
    }
}

impl LayoutConfig {
    /// Returns a copy with a different canvas size.
    #[must_use]
    pub fn with_canvas(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Returns a copy with a different layout mode.
    #[must_use]
    pub fn with_mode(mut self, mode: LayoutMode) -> Self {
        self.layout_mode = mode;
        self
    }

    /// Visual kind annotated for a content index, or the configured default.
    #[must_use]
    pub fn visual_type_for(&self, index: usize) -> VisualKind {
        self.visual_types
            .get(&index)
            .copied()
            .unwrap_or(self.default_visual_type)
    }

    /// Label annotated for a content index; empty labels count as absent.
    #[must_use]
    pub fn label_for(&self, index: usize) -> Option<&str> {
        self.visual_labels
            .get(&index)
            .map(String::as_str)
            .filter(|label| !label.trim().is_empty())
    }
}

/// Serde adapter for maps keyed by content index.
///
/// Keys are written as strings so every supported file format (TOML in
/// particular) accepts them, and read back from either strings or integers.
mod index_map {
    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::BTreeMap;
    use std::fmt;

    #[derive(PartialEq, Eq, PartialOrd, Ord)]
    struct IndexKey(usize);

    impl<'de> Deserialize<'de> for IndexKey {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            struct KeyVisitor;

            impl Visitor<'_> for KeyVisitor {
                type Value = IndexKey;

                fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str("a non-negative zone index")
                }

                fn visit_u64<E: de::Error>(self, v: u64) -> Result<IndexKey, E> {
                    usize::try_from(v)
                        .map(IndexKey)
                        .map_err(|_| E::custom(format!("zone index {v} out of range")))
                }

                fn visit_i64<E: de::Error>(self, v: i64) -> Result<IndexKey, E> {
                    usize::try_from(v)
                        .map(IndexKey)
                        .map_err(|_| E::custom(format!("invalid zone index {v}")))
                }

                fn visit_str<E: de::Error>(self, v: &str) -> Result<IndexKey, E> {
                    v.trim()
                        .parse::<usize>()
                        .map(IndexKey)
                        .map_err(|_| E::custom(format!("invalid zone index '{v}'")))
                }
            }

            deserializer.deserialize_any(KeyVisitor)
        }
    }

    pub fn serialize<S, V>(map: &BTreeMap<usize, V>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        V: Serialize,
    {
        let keyed: BTreeMap<String, &V> = map.iter().map(|(k, v)| (k.to_string(), v)).collect();
        keyed.serialize(serializer)
    }

    pub fn deserialize<'de, D, V>(deserializer: D) -> Result<BTreeMap<usize, V>, D::Error>
    where
        D: Deserializer<'de>,
        V: Deserialize<'de>,
    {
        let raw = BTreeMap::<IndexKey, V>::deserialize(deserializer)?;
        Ok(raw.into_iter().map(|(key, value)| (key.0, value)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LayoutConfig::default();
        assert_eq!(config.width, 1280);
        assert_eq!(config.height, 720);
        assert_eq!(config.layout_mode, LayoutMode::Federal);
        assert!(config.visual_types.is_empty());
        assert_eq!(config.visual_type_for(3), VisualKind::Card);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: LayoutConfig =
            serde_json::from_str(r#"{"width": 1920, "layoutMode": "three-col"}"#).unwrap();
        assert_eq!(config.width, 1920);
        assert_eq!(config.height, 720);
        assert_eq!(config.layout_mode, LayoutMode::ThreeCol);
        assert_eq!(config.gap, 16);
    }

    #[test]
    fn test_annotation_maps_round_trip_json() {
        let mut config = LayoutConfig::default();
        config.visual_types.insert(0, VisualKind::Map);
        config.visual_labels.insert(2, "Sales\nby region".to_string());

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""visualTypes":{"0":"map"}"#));

        let loaded: LayoutConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_annotation_maps_from_toml() {
        let config: LayoutConfig = toml::from_str(
            r#"
width = 800

[visualTypes]
"1" = "pie-chart"

[visualLabels]
"1" = "Share"
"#,
        )
        .unwrap();
        assert_eq!(config.visual_type_for(1), VisualKind::PieChart);
        assert_eq!(config.label_for(1), Some("Share"));
    }

    #[test]
    fn test_annotation_maps_from_yaml_integer_keys() {
        let config: LayoutConfig = serde_yml::from_str(
            "visualLabels:\n  0: Revenue\n  4: Margin\n",
        )
        .unwrap();
        assert_eq!(config.label_for(0), Some("Revenue"));
        assert_eq!(config.label_for(4), Some("Margin"));
    }

    #[test]
    fn test_invalid_index_key_rejected() {
        let result: Result<LayoutConfig, _> =
            serde_json::from_str(r#"{"visualLabels": {"first": "x"}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_label_is_absent() {
        let mut config = LayoutConfig::default();
        config.visual_labels.insert(0, "   ".to_string());
        assert_eq!(config.label_for(0), None);
    }
}
