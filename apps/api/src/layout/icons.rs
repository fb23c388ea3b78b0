//! Bounded icon vocabulary.
//!
//! Section descriptors and templates refer to icons by name. Only names in
//! `ACCEPTED_ICONS` resolve; anything else is treated as "no icon".

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Renderable icon handle carried in the render tree. `glyph` is the
/// front-end's icon identifier in kebab-case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconHandle {
    pub name: String,
    pub glyph: String,
}

/// (accepted name, glyph id). Names follow the editor's PascalCase icon picker.
const ACCEPTED_ICONS: &[(&str, &str)] = &[
    ("User", "user"),
    ("Briefcase", "briefcase"),
    ("GraduationCap", "graduation-cap"),
    ("FolderKanban", "folder-kanban"),
    ("FolderOpen", "folder-open"),
    ("Wrench", "wrench"),
    ("Code", "code"),
    ("Star", "star"),
    ("Heart", "heart"),
    ("Award", "award"),
    ("Trophy", "trophy"),
    ("BookOpen", "book-open"),
    ("Languages", "languages"),
    ("Globe", "globe"),
    ("Link", "link"),
    ("Mail", "mail"),
    ("Phone", "phone"),
    ("MapPin", "map-pin"),
    ("Calendar", "calendar"),
    ("Github", "github"),
    ("Lightbulb", "lightbulb"),
    ("Users", "users"),
    ("Download", "download"),
    ("Printer", "printer"),
    ("Share2", "share-2"),
];

#[derive(Debug, Clone)]
pub struct IconRegistry {
    icons: HashMap<&'static str, &'static str>,
}

impl Default for IconRegistry {
    fn default() -> Self {
        IconRegistry {
            icons: ACCEPTED_ICONS.iter().copied().collect(),
        }
    }
}

impl IconRegistry {
    /// Resolves an icon by exact name. Unknown names yield `None`.
    pub fn lookup(&self, name: &str) -> Option<IconHandle> {
        let (name, glyph) = self.icons.get_key_value(name.trim())?;
        Some(IconHandle {
            name: (*name).to_string(),
            glyph: (*glyph).to_string(),
        })
    }

    /// Like `lookup`, for optional names straight off a descriptor.
    pub fn lookup_opt(&self, name: Option<&str>) -> Option<IconHandle> {
        name.and_then(|n| self.lookup(n))
    }

    pub fn accepted_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.icons.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_icon_resolves() {
        let icons = IconRegistry::default();
        let handle = icons.lookup("Briefcase").unwrap();
        assert_eq!(handle.name, "Briefcase");
        assert_eq!(handle.glyph, "briefcase");
    }

    #[test]
    fn test_unknown_icon_is_none() {
        let icons = IconRegistry::default();
        assert!(icons.lookup("createElement").is_none());
        assert!(icons.lookup("").is_none());
        assert!(icons.lookup_opt(None).is_none());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let icons = IconRegistry::default();
        assert!(icons.lookup("briefcase").is_none());
    }

    #[test]
    fn test_accepted_names_sorted_and_complete() {
        let icons = IconRegistry::default();
        let names = icons.accepted_names();
        assert_eq!(names.len(), ACCEPTED_ICONS.len());
        assert!(names.windows(2).all(|w| w[0] <= w[1]));
    }
}
