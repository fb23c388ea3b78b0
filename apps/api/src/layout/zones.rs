//! Zone assignment driven by declarative per-template routing tables.

use serde::{Deserialize, Serialize};

use crate::layout::dispatch::{BuiltinSection, SectionKind};
use crate::models::resume::SectionDescriptor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    Primary,
    Secondary,
}

/// Where unmatched sections land inside the fallback zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackPlacement {
    /// Keep each unmatched section at its sorted position among routed ones.
    Interleave,
    /// Place unmatched sections after all routed sections of the zone.
    Append,
}

/// Routing table: built-in kinds to zones, plus a rule for everything else
/// (custom sections and any built-in kind not listed).
#[derive(Debug)]
pub struct ZonePolicy {
    pub name: &'static str,
    pub routes: &'static [(BuiltinSection, Zone)],
    pub fallback: Zone,
    pub placement: FallbackPlacement,
}

/// Experience, projects and education in the main column; everything else beside it.
pub static COLUMNS_BY_TOPIC: ZonePolicy = ZonePolicy {
    name: "columns-by-topic",
    routes: &[
        (BuiltinSection::Experience, Zone::Primary),
        (BuiltinSection::Projects, Zone::Primary),
        (BuiltinSection::Education, Zone::Primary),
    ],
    fallback: Zone::Secondary,
    placement: FallbackPlacement::Interleave,
};

/// Experience and projects left, education and skills right; the rest are
/// appended to the left column.
pub static COLUMNS_BY_TYPE: ZonePolicy = ZonePolicy {
    name: "columns-by-type",
    routes: &[
        (BuiltinSection::Experience, Zone::Primary),
        (BuiltinSection::Projects, Zone::Primary),
        (BuiltinSection::Education, Zone::Secondary),
        (BuiltinSection::Skills, Zone::Secondary),
    ],
    fallback: Zone::Primary,
    placement: FallbackPlacement::Append,
};

pub static SINGLE_COLUMN: ZonePolicy = ZonePolicy {
    name: "single-column",
    routes: &[],
    fallback: Zone::Primary,
    placement: FallbackPlacement::Interleave,
};

impl ZonePolicy {
    /// Zone a section is routed to, and whether it went through the fallback rule.
    pub fn route(&self, section_id: &str) -> (Zone, bool) {
        let routed = match SectionKind::from_id(section_id) {
            SectionKind::Builtin(kind) => self
                .routes
                .iter()
                .find(|(k, _)| *k == kind)
                .map(|(_, zone)| *zone),
            SectionKind::Custom(_) => None,
        };
        match routed {
            Some(zone) => (zone, false),
            None => (self.fallback, true),
        }
    }

    /// True when the policy can ever place a section in the secondary zone.
    pub fn uses_secondary(&self) -> bool {
        self.fallback == Zone::Secondary || self.routes.iter().any(|(_, z)| *z == Zone::Secondary)
    }
}

/// Sections partitioned into zones, each zone in the incoming order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneAssignment<'a> {
    pub primary: Vec<&'a SectionDescriptor>,
    pub secondary: Vec<&'a SectionDescriptor>,
}

impl<'a> ZoneAssignment<'a> {
    pub fn get(&self, zone: Zone) -> &[&'a SectionDescriptor] {
        match zone {
            Zone::Primary => &self.primary,
            Zone::Secondary => &self.secondary,
        }
    }

    fn get_mut(&mut self, zone: Zone) -> &mut Vec<&'a SectionDescriptor> {
        match zone {
            Zone::Primary => &mut self.primary,
            Zone::Secondary => &mut self.secondary,
        }
    }
}

/// Partitions already-sorted content sections into zones. Does not re-sort.
pub fn assign_zones<'a>(
    policy: &ZonePolicy,
    sections: &[&'a SectionDescriptor],
) -> ZoneAssignment<'a> {
    let mut assignment = ZoneAssignment::default();
    let mut overflow: Vec<&'a SectionDescriptor> = Vec::new();

    for &section in sections {
        let (zone, via_fallback) = policy.route(&section.id);
        if via_fallback && policy.placement == FallbackPlacement::Append {
            overflow.push(section);
        } else {
            assignment.get_mut(zone).push(section);
        }
    }

    assignment.get_mut(policy.fallback).extend(overflow);
    assignment
}
