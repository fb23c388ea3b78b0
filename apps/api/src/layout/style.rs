//! Style cascade: template defaults overridden field-by-field by the document.

use serde::{Deserialize, Serialize};

use crate::models::resume::StyleOverrides;
use crate::models::template::TemplateDescriptor;

/// Fully resolved style for one render. Built fresh per render and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveStyle {
    pub page_padding: f32,
    pub section_spacing: f32,
    pub paragraph_spacing: f32,
    pub header_size: f32,
    pub subheader_size: f32,
    pub base_font_size: f32,
    pub line_height: f32,
    pub theme_color: String,
}

/// Style handed to section renderers. Section spacing is always zero here
/// because the composer owns the gaps between sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionStyle {
    pub paragraph_spacing: f32,
    pub section_spacing: f32,
    pub subheader_size: f32,
    pub base_font_size: f32,
    pub line_height: f32,
    pub theme_color: String,
}

impl EffectiveStyle {
    pub fn section_style(&self) -> SectionStyle {
        SectionStyle {
            paragraph_spacing: self.paragraph_spacing,
            section_spacing: 0.0,
            subheader_size: self.subheader_size,
            base_font_size: self.base_font_size,
            line_height: self.line_height,
            theme_color: self.theme_color.clone(),
        }
    }
}

/// Merges document overrides onto template defaults.
///
/// Numeric overrides apply whenever present (zero included). A blank theme
/// color is treated as unset.
pub fn resolve_style(
    template: &TemplateDescriptor,
    overrides: Option<&StyleOverrides>,
) -> EffectiveStyle {
    let empty = StyleOverrides::default();
    let o = overrides.unwrap_or(&empty);
    let spacing = &template.spacing;
    let typography = &template.typography;

    EffectiveStyle {
        page_padding: o.page_padding.unwrap_or(spacing.content_padding),
        section_spacing: o.section_spacing.unwrap_or(spacing.section_gap),
        paragraph_spacing: o.paragraph_spacing.unwrap_or(spacing.item_gap),
        header_size: o.header_size.unwrap_or(typography.header_size),
        subheader_size: o.subheader_size.unwrap_or(typography.subheader_size),
        base_font_size: o.base_font_size.unwrap_or(typography.base_font_size),
        line_height: o.line_height.unwrap_or(typography.line_height),
        theme_color: o
            .theme_color
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(&template.color_scheme.primary)
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::registry::builtin_templates;

    fn template() -> TemplateDescriptor {
        builtin_templates()
            .into_iter()
            .find(|t| t.id == "popular-columns")
            .unwrap()
    }

    fn defaults_of(t: &TemplateDescriptor) -> EffectiveStyle {
        EffectiveStyle {
            page_padding: t.spacing.content_padding,
            section_spacing: t.spacing.section_gap,
            paragraph_spacing: t.spacing.item_gap,
            header_size: t.typography.header_size,
            subheader_size: t.typography.subheader_size,
            base_font_size: t.typography.base_font_size,
            line_height: t.typography.line_height,
            theme_color: t.color_scheme.primary.clone(),
        }
    }

    #[test]
    fn test_absent_overrides_use_all_defaults() {
        let t = template();
        assert_eq!(resolve_style(&t, None), defaults_of(&t));
        assert_eq!(
            resolve_style(&t, Some(&StyleOverrides::default())),
            defaults_of(&t)
        );
    }

    #[test]
    fn test_single_override_only_changes_that_attribute() {
        let t = template();
        let overrides = StyleOverrides {
            paragraph_spacing: Some(3.0),
            ..Default::default()
        };
        let style = resolve_style(&t, Some(&overrides));
        let expected = EffectiveStyle {
            paragraph_spacing: 3.0,
            ..defaults_of(&t)
        };
        assert_eq!(style, expected);
    }

    #[test]
    fn test_partial_overrides_mix_per_attribute() {
        let t = template();
        let overrides = StyleOverrides {
            page_padding: Some(40.0),
            header_size: Some(30.0),
            theme_color: Some("#ff0000".to_string()),
            ..Default::default()
        };
        let style = resolve_style(&t, Some(&overrides));
        assert_eq!(style.page_padding, 40.0);
        assert_eq!(style.header_size, 30.0);
        assert_eq!(style.theme_color, "#ff0000");
        assert_eq!(style.section_spacing, t.spacing.section_gap);
        assert_eq!(style.subheader_size, t.typography.subheader_size);
    }

    #[test]
    fn test_zero_override_is_respected() {
        let t = template();
        let overrides = StyleOverrides {
            page_padding: Some(0.0),
            ..Default::default()
        };
        assert_eq!(resolve_style(&t, Some(&overrides)).page_padding, 0.0);
    }

    #[test]
    fn test_blank_theme_color_uses_template_primary() {
        let t = template();
        let overrides = StyleOverrides {
            theme_color: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(
            resolve_style(&t, Some(&overrides)).theme_color,
            t.color_scheme.primary
        );
    }

    #[test]
    fn test_section_style_suppresses_section_spacing() {
        let t = template();
        let overrides = StyleOverrides {
            section_spacing: Some(24.0),
            paragraph_spacing: Some(6.0),
            ..Default::default()
        };
        let section = resolve_style(&t, Some(&overrides)).section_style();
        assert_eq!(section.section_spacing, 0.0);
        assert_eq!(section.paragraph_spacing, 6.0);
    }

    #[test]
    fn test_template_defaults_not_mutated() {
        let t = template();
        let before = t.clone();
        let overrides = StyleOverrides {
            header_size: Some(99.0),
            ..Default::default()
        };
        let _ = resolve_style(&t, Some(&overrides));
        assert_eq!(t, before);
    }
}
