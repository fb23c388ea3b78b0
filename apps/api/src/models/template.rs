use serde::{Deserialize, Serialize};

/// Selects the zone policy and composer strategy a template uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateLayout {
    /// Accent bar header, topic columns: experience/projects/education left.
    PopularColumns,
    /// Colored banner header, type columns: education/skills in right-hand cards.
    BannerColumns,
    /// Single column with a section navigation rail.
    ClassicNav,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorScheme {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub text: String,
}

/// Spacing defaults, in px.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacingDefaults {
    pub content_padding: f32,
    pub section_gap: f32,
    pub item_gap: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyDefaults {
    pub header_size: f32,
    pub subheader_size: f32,
    pub base_font_size: f32,
    pub line_height: f32,
}

impl Default for TypographyDefaults {
    fn default() -> Self {
        TypographyDefaults {
            header_size: 24.0,
            subheader_size: 16.0,
            base_font_size: 14.0,
            line_height: 1.5,
        }
    }
}

/// Read-only description of a template: colors, default spacing and
/// typography, and the layout variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDescriptor {
    pub id: String,
    pub name: String,
    pub layout: TemplateLayout,
    pub color_scheme: ColorScheme,
    pub spacing: SpacingDefaults,
    #[serde(default)]
    pub typography: TypographyDefaults,
}
