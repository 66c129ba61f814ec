//! SVG markup serializer for computed layouts.
//!
//! Turns a zone list into a standalone SVG document suitable as a dashboard
//! background. Rendering is a pure function of its inputs: the same
//! configuration, zones and theme always produce byte-identical output.

use crate::models::{LayoutConfig, SlicerStyle, ThemeMode, Zone, ZoneKind};
use std::fmt::Write as _;

/// Filter id referenced by shadowed zones.
pub const SHADOW_FILTER_ID: &str = "zone-shadow";

/// Filter id referenced by the noise overlay.
pub const NOISE_FILTER_ID: &str = "canvas-noise";

/// More content zones than this triggers the warning overlay.
pub const MAX_RECOMMENDED_VISUALS: usize = 10;

const FONT_FAMILY: &str = "Segoe UI, Arial, sans-serif";
const BADGE_RADIUS: f64 = 10.0;
const BADGE_INSET: f64 = 16.0;
const FROSTED_OPACITY: f64 = 0.7;
const SLICER_GUIDE_SPACING: f64 = 120.0;

/// Renders zones as an SVG document sized to the configured canvas.
///
/// Zones are drawn in the order given, each followed by its decorations, so
/// later zones paint over earlier ones.
///
/// # Examples
///
/// ```
/// use dashzones::export::render_markup;
/// use dashzones::models::{LayoutConfig, ThemeMode};
/// use dashzones::services::geometry::compute_layout;
///
/// let config = LayoutConfig::default();
/// let zones = compute_layout(config.layout_mode, &config);
/// let svg = render_markup(&config, &zones, ThemeMode::Flat);
/// assert!(svg.starts_with("<svg"));
/// ```
#[must_use]
pub fn render_markup(config: &LayoutConfig, zones: &[Zone], theme: ThemeMode) -> String {
    let width = f64::from(config.width);
    let height = f64::from(config.height);
    let mut output = String::new();

    let _ = writeln!(
        output,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = num(width),
        h = num(height)
    );

    write_defs(&mut output, config, theme);

    let _ = writeln!(
        output,
        r#"  <rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
        num(width),
        num(height),
        escape(&config.background_color)
    );
    if config.show_noise {
        let _ = writeln!(
            output,
            r#"  <rect x="0" y="0" width="{}" height="{}" filter="url(#{NOISE_FILTER_ID})" opacity="{}"/>"#,
            num(width),
            num(height),
            num(config.noise_opacity.clamp(0.0, 1.0))
        );
    }

    for zone in zones {
        write_zone(&mut output, config, zone, theme);
        write_decorations(&mut output, config, zone);
    }

    let content = zones.iter().filter(|z| z.kind.is_content()).count();
    if config.warn_too_many_visuals && content > MAX_RECOMMENDED_VISUALS {
        let _ = writeln!(
            output,
            r##"  <text x="{}" y="{}" text-anchor="end" font-family="{FONT_FAMILY}" font-size="12" fill="#B91C1C">{}</text>"##,
            num(width - 8.0),
            num(height - 8.0),
            escape(&format!(
                "Warning: {content} visuals (more than {MAX_RECOMMENDED_VISUALS} recommended)"
            ))
        );
    }

    output.push_str("</svg>\n");
    output
}

fn write_defs(output: &mut String, config: &LayoutConfig, theme: ThemeMode) {
    output.push_str("  <defs>\n");
    if theme == ThemeMode::Shadow {
        let _ = writeln!(
            output,
            r#"    <filter id="{SHADOW_FILTER_ID}" x="-10%" y="-10%" width="120%" height="130%"><feDropShadow dx="0" dy="2" stdDeviation="3" flood-color="rgb(0,0,0)" flood-opacity="0.18"/></filter>"#
        );
    }
    if config.show_noise {
        let _ = writeln!(
            output,
            r#"    <filter id="{NOISE_FILTER_ID}"><feTurbulence type="fractalNoise" baseFrequency="0.8" numOctaves="3" stitchTiles="stitch"/><feColorMatrix type="saturate" values="0"/></filter>"#
        );
    }
    output.push_str("  </defs>\n");
}

fn zone_fill<'a>(config: &'a LayoutConfig, zone: &'a Zone) -> &'a str {
    match zone.kind {
        ZoneKind::Trustbar => &config.trustbar_color,
        ZoneKind::Header => &config.header_color,
        ZoneKind::Footer => &config.footer_color,
        ZoneKind::Logo | ZoneKind::Title | ZoneKind::SlicerZone => "none",
        ZoneKind::Sidebar | ZoneKind::Nav => &config.sidebar_color,
        ZoneKind::KpiStrip | ZoneKind::Kpi | ZoneKind::Card | ZoneKind::Main => {
            zone.fill.as_deref().unwrap_or(&config.card_color)
        }
    }
}

fn write_zone(output: &mut String, config: &LayoutConfig, zone: &Zone, theme: ThemeMode) {
    let fill = zone_fill(config, zone);
    let _ = write!(
        output,
        r#"  <rect class="zone zone-{}" x="{}" y="{}" width="{}" height="{}" fill="{}""#,
        zone.kind,
        num(zone.x),
        num(zone.y),
        num(zone.w),
        num(zone.h),
        escape(fill)
    );

    if let Some(index) = zone.index {
        let _ = write!(output, r#" data-index="{index}""#);
    }

    if !zone.kind.is_frame() && config.corner_radius > 0 {
        let _ = write!(output, r#" rx="{}""#, config.corner_radius);
    }

    // Strokes and theme effects belong to content zones only
    if zone.kind.is_content() {
        if config.stroke_width > 0 {
            let _ = write!(
                output,
                r#" stroke="{}" stroke-width="{}""#,
                escape(&config.stroke_color),
                config.stroke_width
            );
        }
        match theme {
            ThemeMode::Shadow => {
                let _ = write!(output, r#" filter="url(#{SHADOW_FILTER_ID})""#);
            }
            ThemeMode::Frosted if fill != "none" => {
                let _ = write!(output, r#" fill-opacity="{}""#, num(FROSTED_OPACITY));
            }
            _ => {}
        }
    }

    output.push_str("/>\n");
}

fn write_decorations(output: &mut String, config: &LayoutConfig, zone: &Zone) {
    match zone.kind {
        ZoneKind::Trustbar => hline(output, zone.x, zone.right(), zone.bottom() - 0.5, 1.0, &config.stroke_color, false),
        ZoneKind::Header if config.show_header_accent => {
            let _ = writeln!(
                output,
                r#"  <rect x="{}" y="{}" width="{}" height="3" fill="{}"/>"#,
                num(zone.x),
                num(zone.bottom() - 3.0),
                num(zone.w),
                escape(&config.accent_color)
            );
        }
        ZoneKind::Footer => hline(output, zone.x, zone.right(), zone.y + 1.0, 2.0, &config.stroke_color, false),
        ZoneKind::Logo => {
            dashed_outline(output, zone, &config.stroke_color);
            let _ = writeln!(
                output,
                r#"  <text x="{}" y="{}" text-anchor="middle" dominant-baseline="middle" font-family="{FONT_FAMILY}" font-size="10" fill="{}">LOGO</text>"#,
                num(zone.center_x()),
                num(zone.center_y()),
                escape(&config.stroke_color)
            );
        }
        ZoneKind::Title => dashed_outline(output, zone, &config.stroke_color),
        ZoneKind::SlicerZone => write_slicer(output, config, zone),
        kind if kind.is_content() => write_content(output, config, zone),
        _ => {}
    }
}

fn write_content(output: &mut String, config: &LayoutConfig, zone: &Zone) {
    let Some(index) = zone.index else {
        return;
    };

    if config.show_type_indicators {
        let badge = config.visual_type_for(index).badge();
        let cx = zone.x + BADGE_INSET;
        let cy = zone.y + BADGE_INSET;
        let _ = writeln!(
            output,
            r#"  <circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            num(cx),
            num(cy),
            num(BADGE_RADIUS),
            badge.color
        );
        let _ = writeln!(
            output,
            r##"  <text x="{}" y="{}" text-anchor="middle" dominant-baseline="central" font-family="{FONT_FAMILY}" font-size="11" font-weight="bold" fill="#FFFFFF">{}</text>"##,
            num(cx),
            num(cy),
            badge.glyph
        );
        let _ = writeln!(
            output,
            r#"  <text x="{}" y="{}" dominant-baseline="central" font-family="{FONT_FAMILY}" font-size="11" fill="{}">{}</text>"#,
            num(cx + BADGE_RADIUS + 6.0),
            num(cy),
            escape(&config.text_color),
            escape(badge.label)
        );
    }

    if config.show_labels {
        if let Some(label) = config.label_for(index) {
            write_label(output, config, zone, label);
        }
    }
}

/// Centred label, one `<text>` per newline-delimited segment.
fn write_label(output: &mut String, config: &LayoutConfig, zone: &Zone, label: &str) {
    let font_size = f64::from(config.label_font_size.max(1));
    let line_height = font_size * 1.3;
    let lines: Vec<&str> = label.split('\n').collect();
    #[allow(clippy::cast_precision_loss)]
    let block = (lines.len() - 1) as f64 * line_height;
    let first_baseline = zone.center_y() - block / 2.0 + font_size * 0.35;

    for (i, line) in lines.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let y = first_baseline + i as f64 * line_height;
        let _ = writeln!(
            output,
            r#"  <text x="{}" y="{}" text-anchor="middle" font-family="{FONT_FAMILY}" font-size="{}" fill="{}">{}</text>"#,
            num(zone.center_x()),
            num(y),
            num(font_size),
            escape(&config.text_color),
            escape(line.trim())
        );
    }
}

fn write_slicer(output: &mut String, config: &LayoutConfig, zone: &Zone) {
    let stroke = &config.stroke_color;

    if config.slicer_style == SlicerStyle::Minimal {
        hline(output, zone.x, zone.right(), zone.y, 1.0, stroke, true);
        if config.show_slicer_label {
            slicer_text(output, config, zone.x + 8.0, zone.center_y(), "start", &config.slicer_label, 12.0);
        }
        return;
    }

    // Standard and full share the tinted band with solid edges.
    if config.slicer_tint {
        let _ = writeln!(
            output,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            num(zone.x),
            num(zone.y),
            num(zone.w),
            num(zone.h),
            escape(&config.slicer_color)
        );
    }
    hline(output, zone.x, zone.right(), zone.y, 1.0, stroke, false);
    hline(output, zone.x, zone.right(), zone.bottom(), 1.0, stroke, false);

    let full = config.slicer_style == SlicerStyle::Full;
    let label_y = if full { zone.center_y() - 7.0 } else { zone.center_y() };
    if config.show_slicer_label {
        slicer_text(output, config, zone.center_x(), label_y, "middle", &config.slicer_label, 13.0);
    }

    if full {
        vline(output, zone.x, zone.y, zone.bottom(), stroke, true);
        vline(output, zone.right(), zone.y, zone.bottom(), stroke, true);
        slicer_text(output, config, zone.center_x(), label_y + 16.0, "middle", &config.slicer_caption, 10.0);

        let mut x = zone.x + SLICER_GUIDE_SPACING;
        while x < zone.right() {
            let _ = writeln!(
                output,
                r#"  <line x1="{x}" y1="{}" x2="{x}" y2="{}" stroke="{}" stroke-width="1" stroke-opacity="0.4"/>"#,
                num(zone.y + 4.0),
                num(zone.bottom() - 4.0),
                escape(stroke),
                x = num(x)
            );
            x += SLICER_GUIDE_SPACING;
        }
    }
}

fn slicer_text(output: &mut String, config: &LayoutConfig, x: f64, y: f64, anchor: &str, text: &str, size: f64) {
    if text.trim().is_empty() {
        return;
    }
    let _ = writeln!(
        output,
        r#"  <text x="{}" y="{}" text-anchor="{anchor}" dominant-baseline="central" font-family="{FONT_FAMILY}" font-size="{}" fill="{}">{}</text>"#,
        num(x),
        num(y),
        num(size),
        escape(&config.text_color),
        escape(text)
    );
}

fn hline(output: &mut String, x1: f64, x2: f64, y: f64, width: f64, color: &str, dashed: bool) {
    let dash = if dashed { r#" stroke-dasharray="6 4""# } else { "" };
    let _ = writeln!(
        output,
        r#"  <line x1="{}" y1="{y}" x2="{}" y2="{y}" stroke="{}" stroke-width="{}"{dash}/>"#,
        num(x1),
        num(x2),
        escape(color),
        num(width),
        y = num(y)
    );
}

fn vline(output: &mut String, x: f64, y1: f64, y2: f64, color: &str, dashed: bool) {
    let dash = if dashed { r#" stroke-dasharray="6 4""# } else { "" };
    let _ = writeln!(
        output,
        r#"  <line x1="{x}" y1="{}" x2="{x}" y2="{}" stroke="{}" stroke-width="1"{dash}/>"#,
        num(y1),
        num(y2),
        escape(color),
        x = num(x)
    );
}

fn dashed_outline(output: &mut String, zone: &Zone, color: &str) {
    let _ = writeln!(
        output,
        r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="{}" stroke-width="1" stroke-dasharray="4 3"/>"#,
        num(zone.x),
        num(zone.y),
        num(zone.w),
        num(zone.h),
        escape(color)
    );
}

/// Formats a coordinate: integers without a fraction, otherwise at most two
/// decimals with trailing zeros removed.
#[must_use]
pub fn num(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        "0".to_string()
    } else if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        let text = format!("{rounded:.2}");
        text.trim_end_matches('0').to_string()
    }
}

/// Escapes text for XML content and attribute values.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
