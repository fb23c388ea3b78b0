//! Resume document model as sent by the editor.
//!
//! The editor owns these values; the layout engine only ever borrows them.
//! Everything deserializes from camelCase JSON and tolerates missing collections.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ────────────────────────────────────────────────────────────────────────────
// Document root
// ────────────────────────────────────────────────────────────────────────────

/// A complete resume: personal info, typed entry collections, custom sections,
/// the user's section menu, and optional global style overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeDocument {
    pub basic: BasicInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub experience: Vec<ExperienceEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub education: Vec<EducationEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub projects: Vec<ProjectEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Vec<SkillEntry>,
    /// Free-form skills summary shown above the categorized skill list.
    pub skill_content: Option<String>,
    /// User-defined sections keyed by section id.
    #[serde(deserialize_with = "null_as_default")]
    pub custom_data: BTreeMap<String, Vec<CustomItem>>,
    #[serde(deserialize_with = "null_as_default")]
    pub menu_sections: Vec<SectionDescriptor>,
    pub global_settings: Option<StyleOverrides>,
}

/// One entry of the section menu. Identity is `id`, unique within a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionDescriptor {
    pub id: String,
    pub title: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub order: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

fn default_true() -> bool {
    true
}

// ────────────────────────────────────────────────────────────────────────────
// Basic info
// ────────────────────────────────────────────────────────────────────────────

/// Personal information block rendered as the resume heading.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BasicInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    /// ISO date (`YYYY-MM-DD` or `YYYY-MM`); formatted per locale on display.
    #[serde(deserialize_with = "null_as_default")]
    pub birth_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub employment_status: String,
    pub photo: Option<String>,
    pub photo_config: Option<PhotoConfig>,
    /// User-chosen order and visibility of the fixed fields. `None` means the
    /// fallback order applies.
    pub field_order: Option<Vec<BasicFieldType>>,
    #[serde(deserialize_with = "null_as_default")]
    pub custom_fields: Vec<CustomFieldType>,
    pub github_use_name: Option<String>,
    /// Access token for the contribution panel. Never copied into render output.
    #[serde(skip_serializing)]
    pub github_key: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub github_contributions_visible: bool,
    /// Any further scalar fields the editor attaches (e.g. `wechat`, `website`).
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl BasicInfo {
    /// Returns the raw value for a field key, as it is named in `fieldOrder`.
    ///
    /// Unknown keys are looked up in `extra`; non-string extras (numbers, bools)
    /// are rendered with their JSON text so they are not silently lost.
    pub fn field_value(&self, key: &str) -> Option<String> {
        let fixed = match key {
            "name" => Some(&self.name),
            "title" => Some(&self.title),
            "email" => Some(&self.email),
            "phone" => Some(&self.phone),
            "location" => Some(&self.location),
            "birthDate" => Some(&self.birth_date),
            "employmentStatus" => Some(&self.employment_status),
            _ => None,
        };
        if let Some(value) = fixed {
            return Some(value.clone());
        }

        match self.extra.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Returns the photo URL when a non-blank one is set.
    pub fn photo_url(&self) -> Option<&str> {
        self.photo
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

/// Display order entry for one of the fixed basic-info fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicFieldType {
    #[serde(deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(default)]
    #[serde(deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(default)]
    pub visible: Option<bool>,
}

/// Fully user-defined basic-info field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFieldType {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default)]
    #[serde(deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(default)]
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
    #[serde(default)]
    pub visible: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BorderRadius {
    #[default]
    None,
    Medium,
    Full,
    Custom,
}

/// Photo presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhotoConfig {
    pub width: u32,
    pub height: u32,
    pub border_radius: BorderRadius,
    pub custom_border_radius: u32,
    pub visible: Option<bool>,
}

impl Default for PhotoConfig {
    fn default() -> Self {
        PhotoConfig {
            width: 90,
            height: 120,
            border_radius: BorderRadius::None,
            custom_border_radius: 0,
            visible: None,
        }
    }
}

impl PhotoConfig {
    /// CSS corner radius for the configured border style.
    pub fn corner_radius(&self) -> String {
        match self.border_radius {
            BorderRadius::None => "0px".to_string(),
            BorderRadius::Medium => "8px".to_string(),
            BorderRadius::Full => "50%".to_string(),
            BorderRadius::Custom => format!("{}px", self.custom_border_radius),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Entry collections
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(deserialize_with = "null_as_default")]
    pub position: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub details: String,
    pub visible: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub school: String,
    #[serde(deserialize_with = "null_as_default")]
    pub major: String,
    #[serde(deserialize_with = "null_as_default")]
    pub degree: String,
    #[serde(deserialize_with = "null_as_default")]
    pub start_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub end_date: String,
    pub gpa: Option<String>,
    pub description: Option<String>,
    pub visible: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    pub link: Option<String>,
    pub visible: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<String>,
    pub proficiency: Option<String>,
}

/// Item of a user-defined section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomItem {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub subtitle: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date_range: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    pub visible: Option<bool>,
}

// ────────────────────────────────────────────────────────────────────────────
// Style overrides
// ────────────────────────────────────────────────────────────────────────────

/// Per-document style settings. Every field is optional; unset fields fall
/// back to the template's defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleOverrides {
    pub page_padding: Option<f32>,
    pub section_spacing: Option<f32>,
    pub paragraph_spacing: Option<f32>,
    pub header_size: Option<f32>,
    pub subheader_size: Option<f32>,
    pub base_font_size: Option<f32>,
    pub line_height: Option<f32>,
    pub theme_color: Option<String>,
}

/// Reads `null` the same as a missing value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// True unless the flag is explicitly `false`.
pub fn is_visible(flag: Option<bool>) -> bool {
    flag != Some(false)
}
