//! Template registry: built-in descriptors plus an optional JSON file of
//! additions/overrides. Loaded once at startup and read-only afterwards.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::models::template::{
    ColorScheme, SpacingDefaults, TemplateDescriptor, TemplateLayout, TypographyDefaults,
};

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to read template file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid template file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("template descriptor has a blank id")]
    BlankId,
}

#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    templates: BTreeMap<String, TemplateDescriptor>,
}

impl TemplateRegistry {
    /// Registry holding only the built-in templates.
    pub fn builtin() -> Self {
        TemplateRegistry {
            templates: builtin_templates()
                .into_iter()
                .map(|t| (t.id.clone(), t))
                .collect(),
        }
    }

    /// Builds a registry; later descriptors replace earlier ones with the same id.
    pub fn from_descriptors(
        descriptors: impl IntoIterator<Item = TemplateDescriptor>,
    ) -> Result<Self, RegistryError> {
        let mut templates = BTreeMap::new();
        for descriptor in descriptors {
            if descriptor.id.trim().is_empty() {
                return Err(RegistryError::BlankId);
            }
            templates.insert(descriptor.id.clone(), descriptor);
        }
        Ok(TemplateRegistry { templates })
    }

    /// Built-ins, extended (or overridden by id) with the descriptors in `path`
    /// when one is given. The file holds a JSON array of descriptors.
    pub fn load(path: Option<&Path>) -> Result<Self, RegistryError> {
        let Some(path) = path else {
            return Ok(Self::builtin());
        };

        let raw = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let extra: Vec<TemplateDescriptor> =
            serde_json::from_str(&raw).map_err(|source| RegistryError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        info!(
            count = extra.len(),
            path = %path.display(),
            "Loaded template descriptors from file"
        );

        Self::from_descriptors(builtin_templates().into_iter().chain(extra))
    }

    pub fn get(&self, id: &str) -> Option<&TemplateDescriptor> {
        self.templates.get(id)
    }

    /// All descriptors, ordered by id.
    pub fn list(&self) -> Vec<&TemplateDescriptor> {
        self.templates.values().collect()
    }

    pub fn count(&self) -> usize {
        self.templates.len()
    }
}

/// The templates that ship with the service.
pub fn builtin_templates() -> Vec<TemplateDescriptor> {
    vec![
        TemplateDescriptor {
            id: "popular-columns".to_string(),
            name: "Popular Columns".to_string(),
            layout: TemplateLayout::PopularColumns,
            color_scheme: ColorScheme {
                primary: "#2563eb".to_string(),
                secondary: "#64748b".to_string(),
                background: "#ffffff".to_string(),
                text: "#1f2937".to_string(),
            },
            spacing: SpacingDefaults {
                content_padding: 32.0,
                section_gap: 16.0,
                item_gap: 12.0,
            },
            typography: TypographyDefaults::default(),
        },
        TemplateDescriptor {
            id: "banner-columns".to_string(),
            name: "Banner Columns".to_string(),
            layout: TemplateLayout::BannerColumns,
            color_scheme: ColorScheme {
                primary: "#0f766e".to_string(),
                secondary: "#475569".to_string(),
                background: "#ffffff".to_string(),
                text: "#111827".to_string(),
            },
            spacing: SpacingDefaults {
                content_padding: 40.0,
                section_gap: 24.0,
                item_gap: 8.0,
            },
            typography: TypographyDefaults::default(),
        },
        TemplateDescriptor {
            id: "classic-nav".to_string(),
            name: "Classic Navigation".to_string(),
            layout: TemplateLayout::ClassicNav,
            color_scheme: ColorScheme {
                primary: "#1e40af".to_string(),
                secondary: "#d4af37".to_string(),
                background: "#f5f6fb".to_string(),
                text: "#111827".to_string(),
            },
            spacing: SpacingDefaults {
                content_padding: 32.0,
                section_gap: 24.0,
                item_gap: 12.0,
            },
            typography: TypographyDefaults {
                header_size: 24.0,
                subheader_size: 16.0,
                base_font_size: 14.0,
                line_height: 1.6,
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_registry_has_every_layout() {
        let registry = TemplateRegistry::builtin();
        assert_eq!(registry.count(), 3);
        let layouts: Vec<TemplateLayout> = registry.list().iter().map(|t| t.layout).collect();
        assert!(layouts.contains(&TemplateLayout::PopularColumns));
        assert!(layouts.contains(&TemplateLayout::BannerColumns));
        assert!(layouts.contains(&TemplateLayout::ClassicNav));
    }

    #[test]
    fn test_list_sorted_by_id() {
        let registry = TemplateRegistry::builtin();
        let ids: Vec<&str> = registry.list().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["banner-columns", "classic-nav", "popular-columns"]);
    }

    #[test]
    fn test_unknown_id_is_none() {
        assert!(TemplateRegistry::builtin().get("nope").is_none());
    }

    #[test]
    fn test_load_without_file_is_builtin() {
        let registry = TemplateRegistry::load(None).unwrap();
        assert_eq!(registry.count(), builtin_templates().len());
        let builtin = TemplateRegistry::builtin();
        assert_eq!(registry.list(), builtin.list());
    }

    #[test]
    fn test_load_file_adds_and_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r##"[
                {{
                    "id": "popular-columns",
                    "name": "Popular (red)",
                    "layout": "popular-columns",
                    "colorScheme": {{"primary": "#dc2626", "secondary": "#333", "background": "#fff", "text": "#000"}},
                    "spacing": {{"contentPadding": 20, "sectionGap": 10, "itemGap": 6}}
                }},
                {{
                    "id": "minimal",
                    "name": "Minimal",
                    "layout": "classic-nav",
                    "colorScheme": {{"primary": "#000", "secondary": "#999", "background": "#fff", "text": "#000"}},
                    "spacing": {{"contentPadding": 16, "sectionGap": 8, "itemGap": 4}}
                }}
            ]"##
        )
        .unwrap();

        let registry = TemplateRegistry::load(Some(file.path())).unwrap();
        assert_eq!(registry.count(), 4);
        let popular = registry.get("popular-columns").unwrap();
        assert_eq!(popular.color_scheme.primary, "#dc2626");
        assert_eq!(popular.typography, TypographyDefaults::default());
        assert_eq!(
            registry.get("minimal").unwrap().layout,
            TemplateLayout::ClassicNav
        );
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = TemplateRegistry::load(Some(Path::new("/definitely/not/here.json"))).unwrap_err();
        assert!(matches!(err, RegistryError::Io { .. }));
    }

    #[test]
    fn test_load_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = TemplateRegistry::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, RegistryError::Parse { .. }));
    }

    #[test]
    fn test_blank_id_rejected() {
        let mut descriptor = builtin_templates().remove(0);
        descriptor.id = "  ".to_string();
        assert!(matches!(
            TemplateRegistry::from_descriptors(vec![descriptor]),
            Err(RegistryError::BlankId)
        ));
    }
}
