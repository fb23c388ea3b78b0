//! Section content dispatch.
//!
//! Section ids map onto a closed set of built-in kinds or an open custom kind.
//! Built-in kinds go through a renderer table chosen when the composer is
//! built; custom ids render from `customData` or produce nothing at all.

use serde::{Deserialize, Serialize};

use crate::layout::dates::DateFormatter;
use crate::layout::fields::resolve_fields;
use crate::layout::icons::IconRegistry;
use crate::layout::style::SectionStyle;
use crate::layout::tree::{
    BasicBlock, CustomItemBlock, EducationItem, ExperienceItem, FieldItem, PhotoBlock,
    ProjectItem, SectionBody, SkillGroup,
};
use crate::models::resume::{is_visible, CustomItem, ResumeDocument, SectionDescriptor};

// ────────────────────────────────────────────────────────────────────────────
// Section kinds
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinSection {
    Basic,
    Experience,
    Education,
    Projects,
    Skills,
}

impl BuiltinSection {
    pub const ALL: [BuiltinSection; 5] = [
        BuiltinSection::Basic,
        BuiltinSection::Experience,
        BuiltinSection::Education,
        BuiltinSection::Projects,
        BuiltinSection::Skills,
    ];

    pub fn id(self) -> &'static str {
        match self {
            BuiltinSection::Basic => "basic",
            BuiltinSection::Experience => "experience",
            BuiltinSection::Education => "education",
            BuiltinSection::Projects => "projects",
            BuiltinSection::Skills => "skills",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }
}

/// A section id classified as built-in or custom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind<'a> {
    Builtin(BuiltinSection),
    Custom(&'a str),
}

impl<'a> SectionKind<'a> {
    pub fn from_id(id: &'a str) -> Self {
        match BuiltinSection::from_id(id) {
            Some(kind) => SectionKind::Builtin(kind),
            None => SectionKind::Custom(id),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Renderer table
// ────────────────────────────────────────────────────────────────────────────

/// Everything a section renderer may read. Borrowed for one render.
pub struct SectionContext<'a> {
    pub document: &'a ResumeDocument,
    /// Style handed down to section content; also stamped on each section block.
    pub style: &'a SectionStyle,
    pub locale: &'a str,
    pub formatter: &'a dyn DateFormatter,
    pub icons: &'a IconRegistry,
}

pub type RenderFn = fn(&SectionContext<'_>) -> SectionBody;
pub type CustomRenderFn = fn(&SectionDescriptor, &[CustomItem], &SectionContext<'_>) -> SectionBody;

/// Renderer per built-in kind plus the custom-section renderer.
#[derive(Clone, Copy)]
pub struct SectionRenderers {
    pub basic: RenderFn,
    pub experience: RenderFn,
    pub education: RenderFn,
    pub projects: RenderFn,
    pub skills: RenderFn,
    pub custom: CustomRenderFn,
}

impl Default for SectionRenderers {
    fn default() -> Self {
        SectionRenderers {
            basic: render_basic,
            experience: render_experience,
            education: render_education,
            projects: render_projects,
            skills: render_skills,
            custom: render_custom,
        }
    }
}

impl SectionRenderers {
    pub fn for_kind(&self, kind: BuiltinSection) -> RenderFn {
        match kind {
            BuiltinSection::Basic => self.basic,
            BuiltinSection::Experience => self.experience,
            BuiltinSection::Education => self.education,
            BuiltinSection::Projects => self.projects,
            BuiltinSection::Skills => self.skills,
        }
    }

    /// Produces the body for a section, or `None` when a custom section has
    /// no `customData` entry. An empty but present item list still renders.
    pub fn render(
        &self,
        section: &SectionDescriptor,
        ctx: &SectionContext<'_>,
    ) -> Option<SectionBody> {
        match SectionKind::from_id(&section.id) {
            SectionKind::Builtin(kind) => Some((self.for_kind(kind))(ctx)),
            SectionKind::Custom(id) => ctx
                .document
                .custom_data
                .get(id)
                .map(|items| (self.custom)(section, items, ctx)),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Standard renderers
// ────────────────────────────────────────────────────────────────────────────

/// Default icon per fixed basic-info field key.
const FIELD_ICONS: &[(&str, &str)] = &[
    ("email", "Mail"),
    ("phone", "Phone"),
    ("location", "MapPin"),
    ("birthDate", "Calendar"),
    ("employmentStatus", "Briefcase"),
];

/// Builds the basic-info block: heading, resolved fields, and photo.
pub fn build_basic_block(ctx: &SectionContext<'_>) -> BasicBlock {
    let basic = &ctx.document.basic;

    let fields = resolve_fields(basic, ctx.locale, ctx.formatter)
        .into_iter()
        .map(|f| {
            let icon = FIELD_ICONS
                .iter()
                .find(|(key, _)| *key == f.key)
                .and_then(|(_, icon)| ctx.icons.lookup(icon));
            FieldItem {
                key: f.key,
                label: f.label,
                value: f.value,
                icon,
            }
        })
        .collect();

    let photo = basic.photo_url().and_then(|url| {
        let config = basic.photo_config.clone().unwrap_or_default();
        is_visible(config.visible).then(|| PhotoBlock {
            url: url.to_string(),
            width: config.width,
            height: config.height,
            corner_radius: config.corner_radius(),
        })
    });

    BasicBlock {
        name: basic.name.clone(),
        title: basic.title.clone(),
        show_title: true,
        fields,
        photo,
    }
}

fn render_basic(ctx: &SectionContext<'_>) -> SectionBody {
    SectionBody::Basic(build_basic_block(ctx))
}

fn render_experience(ctx: &SectionContext<'_>) -> SectionBody {
    let entries = ctx
        .document
        .experience
        .iter()
        .filter(|e| is_visible(e.visible))
        .map(|e| ExperienceItem {
            company: e.company.clone(),
            position: e.position.clone(),
            date: e.date.clone(),
            details: e.details.clone(),
        })
        .collect();
    SectionBody::Experience { entries }
}

fn render_education(ctx: &SectionContext<'_>) -> SectionBody {
    let entries = ctx
        .document
        .education
        .iter()
        .filter(|e| is_visible(e.visible))
        .map(|e| EducationItem {
            school: e.school.clone(),
            major: e.major.clone(),
            degree: e.degree.clone(),
            date_range: join_range(&e.start_date, &e.end_date),
            gpa: e.gpa.clone().filter(|g| !g.trim().is_empty()),
            description: e.description.clone().filter(|d| !d.trim().is_empty()),
        })
        .collect();
    SectionBody::Education { entries }
}

fn render_projects(ctx: &SectionContext<'_>) -> SectionBody {
    let entries = ctx
        .document
        .projects
        .iter()
        .filter(|p| is_visible(p.visible))
        .map(|p| ProjectItem {
            name: p.name.clone(),
            role: p.role.clone(),
            date: p.date.clone(),
            description: p.description.clone(),
            link: p.link.clone().filter(|l| !l.trim().is_empty()),
        })
        .collect();
    SectionBody::Projects { entries }
}

fn render_skills(ctx: &SectionContext<'_>) -> SectionBody {
    let summary = ctx
        .document
        .skill_content
        .clone()
        .filter(|s| !s.trim().is_empty());
    let groups = ctx
        .document
        .skills
        .iter()
        .map(|s| SkillGroup {
            category: s.category.clone(),
            items: s.items.clone(),
            proficiency: s.proficiency.clone(),
        })
        .collect();
    SectionBody::Skills { summary, groups }
}

fn render_custom(
    section: &SectionDescriptor,
    items: &[CustomItem],
    _ctx: &SectionContext<'_>,
) -> SectionBody {
    let items = items
        .iter()
        .filter(|i| is_visible(i.visible))
        .map(|i| CustomItemBlock {
            title: i.title.clone(),
            subtitle: i.subtitle.clone(),
            date_range: i.date_range.clone(),
            description: i.description.clone(),
        })
        .collect();
    SectionBody::Custom {
        title: display_title(section),
        items,
    }
}

/// Declared title, or the id when the title is blank.
pub fn display_title(section: &SectionDescriptor) -> String {
    if section.title.trim().is_empty() {
        section.id.clone()
    } else {
        section.title.clone()
    }
}

fn join_range(start: &str, end: &str) -> String {
    match (start.trim(), end.trim()) {
        ("", "") => String::new(),
        (s, "") => s.to_string(),
        ("", e) => e.to_string(),
        (s, e) => format!("{s} - {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::dates::MonthYearFormatter;
    use crate::models::resume::{
        BasicFieldType, BorderRadius, EducationEntry, ExperienceEntry, PhotoConfig,
    };

    fn section(id: &str, title: &str) -> SectionDescriptor {
        SectionDescriptor {
            id: id.to_string(),
            title: title.to_string(),
            enabled: true,
            order: 0,
            icon: None,
        }
    }

    fn style() -> SectionStyle {
        SectionStyle {
            paragraph_spacing: 12.0,
            section_spacing: 0.0,
            subheader_size: 16.0,
            base_font_size: 14.0,
            line_height: 1.5,
            theme_color: "#000000".to_string(),
        }
    }

    fn render(doc: &ResumeDocument, s: &SectionDescriptor) -> Option<SectionBody> {
        let style = style();
        let icons = IconRegistry::default();
        let ctx = SectionContext {
            document: doc,
            style: &style,
            locale: "en",
            formatter: &MonthYearFormatter,
            icons: &icons,
        };
        SectionRenderers::default().render(s, &ctx)
    }

    #[test]
    fn test_builtin_ids_classified() {
        assert_eq!(
            SectionKind::from_id("experience"),
            SectionKind::Builtin(BuiltinSection::Experience)
        );
        assert_eq!(SectionKind::from_id("hobbies"), SectionKind::Custom("hobbies"));
        assert_eq!(SectionKind::from_id("Skills"), SectionKind::Custom("Skills"));
        for kind in BuiltinSection::ALL {
            assert_eq!(BuiltinSection::from_id(kind.id()), Some(kind));
        }
    }

    #[test]
    fn test_custom_section_with_empty_items_renders_empty_block() {
        let mut doc = ResumeDocument::default();
        doc.custom_data.insert("hobbies".to_string(), vec![]);
        let body = render(&doc, &section("hobbies", "Hobbies")).unwrap();
        assert_eq!(
            body,
            SectionBody::Custom {
                title: "Hobbies".to_string(),
                items: vec![],
            }
        );
    }

    #[test]
    fn test_custom_section_without_data_renders_nothing() {
        let doc = ResumeDocument::default();
        assert!(render(&doc, &section("hobbies", "Hobbies")).is_none());
    }

    #[test]
    fn test_custom_section_blank_title_uses_id() {
        let mut doc = ResumeDocument::default();
        doc.custom_data.insert(
            "awards".to_string(),
            vec![CustomItem {
                title: "Best Paper".to_string(),
                ..Default::default()
            }],
        );
        match render(&doc, &section("awards", "")).unwrap() {
            SectionBody::Custom { title, items } => {
                assert_eq!(title, "awards");
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].title, "Best Paper");
            }
            other => panic!("expected custom body, got {other:?}"),
        }
    }

    #[test]
    fn test_hidden_entries_left_out() {
        let doc = ResumeDocument {
            experience: vec![
                ExperienceEntry {
                    company: "Acme".to_string(),
                    ..Default::default()
                },
                ExperienceEntry {
                    company: "Hidden Co".to_string(),
                    visible: Some(false),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        match render(&doc, &section("experience", "Experience")).unwrap() {
            SectionBody::Experience { entries } => {
                assert_eq!(entries.len(), 1);
                assert_eq!(entries[0].company, "Acme");
            }
            other => panic!("expected experience body, got {other:?}"),
        }
    }

    #[test]
    fn test_builtin_sections_render_even_when_empty() {
        let doc = ResumeDocument::default();
        assert_eq!(
            render(&doc, &section("projects", "Projects")),
            Some(SectionBody::Projects { entries: vec![] })
        );
    }

    #[test]
    fn test_education_date_range_joined() {
        let doc = ResumeDocument {
            education: vec![EducationEntry {
                school: "MIT".to_string(),
                start_date: "2010-09".to_string(),
                end_date: "2014-06".to_string(),
                gpa: Some(" ".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        };
        match render(&doc, &section("education", "Education")).unwrap() {
            SectionBody::Education { entries } => {
                assert_eq!(entries[0].date_range, "2010-09 - 2014-06");
                assert!(entries[0].gpa.is_none());
            }
            other => panic!("expected education body, got {other:?}"),
        }
    }

    #[test]
    fn test_basic_block_has_fields_icons_and_photo() {
        let mut doc = ResumeDocument::default();
        doc.basic.name = "Ada".to_string();
        doc.basic.email = "a@b.com".to_string();
        doc.basic.birth_date = "1990-05-01".to_string();
        doc.basic.field_order = Some(vec![
            BasicFieldType {
                key: "email".to_string(),
                label: "Email".to_string(),
                visible: Some(true),
            },
            BasicFieldType {
                key: "birthDate".to_string(),
                label: "Born".to_string(),
                visible: Some(true),
            },
        ]);
        doc.basic.photo = Some("https://img/ada.png".to_string());
        doc.basic.photo_config = Some(PhotoConfig {
            border_radius: BorderRadius::Medium,
            ..Default::default()
        });

        let block = match render(&doc, &section("basic", "Basic")).unwrap() {
            SectionBody::Basic(block) => block,
            other => panic!("expected basic body, got {other:?}"),
        };
        assert_eq!(block.name, "Ada");
        assert_eq!(block.fields.len(), 2);
        assert_eq!(block.fields[1].value, "May 1990");
        assert_eq!(block.fields[0].icon.as_ref().map(|i| i.glyph.as_str()), Some("mail"));
        let photo = block.photo.unwrap();
        assert_eq!((photo.width, photo.height), (90, 120));
        assert_eq!(photo.corner_radius, "8px");
    }

    #[test]
    fn test_hidden_photo_omitted() {
        let mut doc = ResumeDocument::default();
        doc.basic.photo = Some("https://img/ada.png".to_string());
        doc.basic.photo_config = Some(PhotoConfig {
            visible: Some(false),
            ..Default::default()
        });
        let ctx_style = style();
        let icons = IconRegistry::default();
        let ctx = SectionContext {
            document: &doc,
            style: &ctx_style,
            locale: "en",
            formatter: &MonthYearFormatter,
            icons: &icons,
        };
        assert!(build_basic_block(&ctx).photo.is_none());
    }

    #[test]
    fn test_renderer_table_is_pluggable() {
        fn empty_skills(_ctx: &SectionContext<'_>) -> SectionBody {
            SectionBody::Skills {
                summary: Some("replaced".to_string()),
                groups: vec![],
            }
        }
        let renderers = SectionRenderers {
            skills: empty_skills,
            ..SectionRenderers::default()
        };
        let doc = ResumeDocument::default();
        let style = style();
        let icons = IconRegistry::default();
        let ctx = SectionContext {
            document: &doc,
            style: &style,
            locale: "en",
            formatter: &MonthYearFormatter,
            icons: &icons,
        };
        match renderers.render(&section("skills", "Skills"), &ctx).unwrap() {
            SectionBody::Skills { summary, .. } => assert_eq!(summary.as_deref(), Some("replaced")),
            other => panic!("expected skills body, got {other:?}"),
        }
    }
}
