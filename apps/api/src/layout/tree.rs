//! Render tree: the serializable output of a composition.
//!
//! Values here are owned copies; nothing points back into the source document.

use serde::{Deserialize, Serialize};

use crate::layout::icons::IconHandle;
use crate::layout::style::{EffectiveStyle, SectionStyle};
use crate::layout::zones::Zone;
use crate::models::template::TemplateLayout;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderTree {
    pub template_id: String,
    pub layout: TemplateLayout,
    pub locale: String,
    pub style: EffectiveStyle,
    pub page: PageStyle,
    pub header: HeaderBlock,
    /// Navigation rail entries; empty for column templates.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub navigation: Vec<NavItem>,
    pub zones: Vec<ZoneBlock>,
    /// Panels appended after the last zone section.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extras: Vec<ExtraBlock>,
}

impl RenderTree {
    pub fn zone(&self, zone: Zone) -> Option<&ZoneBlock> {
        self.zones.iter().find(|z| z.zone == zone)
    }

    /// Ids of every section placed in any zone, zone by zone.
    pub fn placed_section_ids(&self) -> Vec<&str> {
        self.zones
            .iter()
            .flat_map(|z| z.sections.iter().map(|s| s.id.as_str()))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageStyle {
    pub background: String,
    pub text_color: String,
    pub padding: f32,
}

// ────────────────────────────────────────────────────────────────────────────
// Header
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decoration: Option<DecorationBar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<Heading>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basic: Option<BasicBlock>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<IconHandle>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extras: Vec<ExtraBlock>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecorationBar {
    pub color: String,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Heading {
    pub text: String,
    pub font_size: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    pub section_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconHandle>,
    pub font_size: f32,
}

/// Template-specific panel outside the section system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExtraBlock {
    GithubContributions { username: Option<String> },
}

// ────────────────────────────────────────────────────────────────────────────
// Zones and sections
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneBlock {
    pub zone: Zone,
    pub width_percent: u8,
    pub gap: f32,
    pub sections: Vec<SectionBlock>,
}

/// How a section's title is presented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum TitleStyle {
    Hidden,
    Plain,
    LeftRule { color: String },
    Card { border_color: String, title_color: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionBlock {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconHandle>,
    pub title_style: TitleStyle,
    /// Rule drawn below this section; never set on a zone's last section.
    pub separator_after: bool,
    pub style: SectionStyle,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum SectionBody {
    Basic(BasicBlock),
    Experience { entries: Vec<ExperienceItem> },
    Education { entries: Vec<EducationItem> },
    Projects { entries: Vec<ProjectItem> },
    Skills {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        summary: Option<String>,
        groups: Vec<SkillGroup>,
    },
    Custom { title: String, items: Vec<CustomItemBlock> },
}

// ────────────────────────────────────────────────────────────────────────────
// Section content
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicBlock {
    pub name: String,
    pub title: String,
    /// False when the template hides the title line under the name.
    pub show_title: bool,
    pub fields: Vec<FieldItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<PhotoBlock>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldItem {
    pub key: String,
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconHandle>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoBlock {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub corner_radius: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceItem {
    pub company: String,
    pub position: String,
    pub date: String,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationItem {
    pub school: String,
    pub major: String,
    pub degree: String,
    pub date_range: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectItem {
    pub name: String,
    pub role: String,
    pub date: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proficiency: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomItemBlock {
    pub title: String,
    pub subtitle: String,
    pub date_range: String,
    pub description: String,
}
