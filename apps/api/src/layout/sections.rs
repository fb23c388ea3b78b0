//! Section menu filtering and ordering.

use crate::models::resume::SectionDescriptor;

/// Id of the basic-info section, which templates render as a fixed header.
pub const BASIC_SECTION_ID: &str = "basic";

/// Returns the enabled sections sorted ascending by `order`.
///
/// The sort is stable: sections sharing an `order` keep their declaration order.
pub fn active_ordered(sections: &[SectionDescriptor]) -> Vec<&SectionDescriptor> {
    let mut active: Vec<&SectionDescriptor> = sections.iter().filter(|s| s.enabled).collect();
    active.sort_by_key(|s| s.order);
    active
}

/// Active sections minus the basic-info header.
pub fn content_sections<'a>(active: &[&'a SectionDescriptor]) -> Vec<&'a SectionDescriptor> {
    active
        .iter()
        .copied()
        .filter(|s| s.id != BASIC_SECTION_ID)
        .collect()
}

/// The basic-info section, if it is active.
pub fn basic_section<'a>(active: &[&'a SectionDescriptor]) -> Option<&'a SectionDescriptor> {
    active.iter().copied().find(|s| s.id == BASIC_SECTION_ID)
}
