//! Template composition: style → active sections → zones → section content → render tree.
//!
//! # Architecture
//! - `TemplateComposer` runs the same pipeline for every template.
//! - A `LayoutStrategy` per `TemplateLayout` supplies what differs: zone policy,
//!   header shape, section title chrome, separators, navigation, and where the
//!   GitHub panel goes.
//! - Section bodies come from a `SectionRenderers` table fixed at construction.
//!
//! Composition is pure and synchronous; the same input always yields the same tree.

use tracing::debug;

use crate::layout::dates::{language, DateFormatter};
use crate::layout::dispatch::{display_title, SectionContext, SectionRenderers};
use crate::layout::icons::IconRegistry;
use crate::layout::sections::{active_ordered, basic_section, content_sections};
use crate::layout::style::{resolve_style, EffectiveStyle};
use crate::layout::tree::{
    BasicBlock, DecorationBar, ExtraBlock, HeaderBlock, Heading, NavItem, PageStyle, RenderTree,
    SectionBlock, SectionBody, TitleStyle, ZoneBlock,
};
use crate::layout::zones::{
    assign_zones, Zone, ZonePolicy, COLUMNS_BY_TOPIC, COLUMNS_BY_TYPE, SINGLE_COLUMN,
};
use crate::models::resume::{ResumeDocument, SectionDescriptor};
use crate::models::template::{TemplateDescriptor, TemplateLayout};

// ────────────────────────────────────────────────────────────────────────────
// Strategy trait
// ────────────────────────────────────────────────────────────────────────────

/// Where a template shows panels that live outside the section system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtrasPlacement {
    Header,
    BodyEnd,
}

/// Inputs available when building a header.
pub struct HeaderInput<'a> {
    pub template: &'a TemplateDescriptor,
    pub style: &'a EffectiveStyle,
    pub locale: &'a str,
    pub icons: &'a IconRegistry,
    /// Basic-info block when the basic section is active and shown in the header.
    pub basic: Option<BasicBlock>,
    pub extras: Vec<ExtraBlock>,
}

/// The per-template half of composition.
pub trait LayoutStrategy: Send + Sync {
    fn zone_policy(&self) -> &'static ZonePolicy;

    /// Column widths in percent, primary then secondary.
    fn zone_widths(&self) -> (u8, u8);

    fn header(&self, input: HeaderInput<'_>) -> HeaderBlock;

    fn title_style(&self, zone: Zone, style: &EffectiveStyle) -> TitleStyle;

    /// Whether consecutive sections in a zone are separated by a rule.
    fn separators(&self) -> bool;

    /// Single-column templates render the basic section in the body.
    fn basic_in_body(&self) -> bool {
        false
    }

    /// Whether the basic block shows the title line under the name.
    fn basic_shows_title(&self) -> bool {
        true
    }

    fn extras_placement(&self) -> Option<ExtrasPlacement>;

    fn navigation(
        &self,
        _active: &[&SectionDescriptor],
        _style: &EffectiveStyle,
        _icons: &IconRegistry,
    ) -> Vec<NavItem> {
        Vec::new()
    }
}

/// Strategy for a layout variant.
pub fn strategy_for(layout: TemplateLayout) -> &'static dyn LayoutStrategy {
    match layout {
        TemplateLayout::PopularColumns => &PopularColumnsLayout,
        TemplateLayout::BannerColumns => &BannerColumnsLayout,
        TemplateLayout::ClassicNav => &ClassicNavLayout,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Composer
// ────────────────────────────────────────────────────────────────────────────

/// Everything one render reads.
pub struct RenderInput<'a> {
    pub document: &'a ResumeDocument,
    pub template: &'a TemplateDescriptor,
    pub locale: &'a str,
    pub formatter: &'a dyn DateFormatter,
    pub icons: &'a IconRegistry,
}

pub struct TemplateComposer {
    strategy: &'static dyn LayoutStrategy,
    renderers: SectionRenderers,
}

impl TemplateComposer {
    pub fn for_layout(layout: TemplateLayout) -> Self {
        Self::with_renderers(layout, SectionRenderers::default())
    }

    pub fn with_renderers(layout: TemplateLayout, renderers: SectionRenderers) -> Self {
        TemplateComposer {
            strategy: strategy_for(layout),
            renderers,
        }
    }

    pub fn compose(&self, input: &RenderInput<'_>) -> RenderTree {
        let document = input.document;
        let template = input.template;
        let strategy = self.strategy;

        let style = resolve_style(template, document.global_settings.as_ref());
        let section_style = style.section_style();
        let ctx = SectionContext {
            document,
            style: &section_style,
            locale: input.locale,
            formatter: input.formatter,
            icons: input.icons,
        };

        let active = active_ordered(&document.menu_sections);
        let body_sections = if strategy.basic_in_body() {
            active.clone()
        } else {
            content_sections(&active)
        };

        let policy = strategy.zone_policy();
        let assignment = assign_zones(policy, &body_sections);
        let (primary_width, secondary_width) = strategy.zone_widths();

        let mut zones = vec![self.compose_zone(
            Zone::Primary,
            primary_width,
            assignment.get(Zone::Primary),
            &ctx,
            &style,
        )];
        if policy.uses_secondary() {
            zones.push(self.compose_zone(
                Zone::Secondary,
                secondary_width,
                assignment.get(Zone::Secondary),
                &ctx,
                &style,
            ));
        }

        let header_basic = if strategy.basic_in_body() {
            None
        } else {
            basic_section(&active).and_then(|s| match self.renderers.render(s, &ctx) {
                Some(SectionBody::Basic(mut block)) => {
                    block.show_title = strategy.basic_shows_title();
                    Some(block)
                }
                _ => None,
            })
        };

        let mut header_extras = Vec::new();
        let mut body_extras = Vec::new();
        if document.basic.github_contributions_visible {
            let panel = ExtraBlock::GithubContributions {
                username: document
                    .basic
                    .github_use_name
                    .clone()
                    .filter(|u| !u.trim().is_empty()),
            };
            match strategy.extras_placement() {
                Some(ExtrasPlacement::Header) => header_extras.push(panel),
                Some(ExtrasPlacement::BodyEnd) => body_extras.push(panel),
                None => {}
            }
        }

        let header = strategy.header(HeaderInput {
            template,
            style: &style,
            locale: input.locale,
            icons: input.icons,
            basic: header_basic,
            extras: header_extras,
        });
        let navigation = strategy.navigation(&active, &style, input.icons);

        let tree = RenderTree {
            template_id: template.id.clone(),
            layout: template.layout,
            locale: input.locale.to_string(),
            page: PageStyle {
                background: template.color_scheme.background.clone(),
                text_color: template.color_scheme.text.clone(),
                padding: style.page_padding,
            },
            style,
            header,
            navigation,
            zones,
            extras: body_extras,
        };

        debug!(
            template = %tree.template_id,
            policy = policy.name,
            active = active.len(),
            primary = tree.zone(Zone::Primary).map_or(0, |z| z.sections.len()),
            secondary = tree.zone(Zone::Secondary).map_or(0, |z| z.sections.len()),
            "Composed render tree"
        );

        tree
    }

    /// Renders one zone. Sections without content take no slot and no separator.
    fn compose_zone(
        &self,
        zone: Zone,
        width_percent: u8,
        sections: &[&SectionDescriptor],
        ctx: &SectionContext<'_>,
        style: &EffectiveStyle,
    ) -> ZoneBlock {
        let mut blocks: Vec<SectionBlock> = sections
            .iter()
            .filter_map(|section| {
                let mut body = self.renderers.render(section, ctx)?;
                if let SectionBody::Basic(block) = &mut body {
                    block.show_title = self.strategy.basic_shows_title();
                }
                Some(SectionBlock {
                    id: section.id.clone(),
                    title: display_title(section),
                    icon: ctx.icons.lookup_opt(section.icon.as_deref()),
                    title_style: self.strategy.title_style(zone, style),
                    separator_after: false,
                    style: ctx.style.clone(),
                    body,
                })
            })
            .collect();

        if self.strategy.separators() {
            let last = blocks.len().saturating_sub(1);
            for (i, block) in blocks.iter_mut().enumerate() {
                block.separator_after = i < last;
            }
        }

        ZoneBlock {
            zone,
            width_percent,
            gap: style.section_spacing,
            sections: blocks,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Layout strategies
// ────────────────────────────────────────────────────────────────────────────

/// Accent bar over a header holding the basic block and the GitHub panel;
/// topic columns below, separated by rules.
pub struct PopularColumnsLayout;

impl LayoutStrategy for PopularColumnsLayout {
    fn zone_policy(&self) -> &'static ZonePolicy {
        &COLUMNS_BY_TOPIC
    }

    fn zone_widths(&self) -> (u8, u8) {
        (67, 33)
    }

    fn header(&self, input: HeaderInput<'_>) -> HeaderBlock {
        HeaderBlock {
            decoration: Some(DecorationBar {
                color: input.style.theme_color.clone(),
                height: 12.0,
            }),
            basic: input.basic,
            extras: input.extras,
            ..Default::default()
        }
    }

    fn title_style(&self, _zone: Zone, _style: &EffectiveStyle) -> TitleStyle {
        TitleStyle::Plain
    }

    fn separators(&self) -> bool {
        true
    }

    fn extras_placement(&self) -> Option<ExtrasPlacement> {
        Some(ExtrasPlacement::Header)
    }
}

/// Banner in the theme color with action icons; type columns with ruled
/// headings on the left and carded sections on the right.
pub struct BannerColumnsLayout;

const BANNER_ACTIONS: &[&str] = &["Download", "Printer", "Share2"];

impl LayoutStrategy for BannerColumnsLayout {
    fn zone_policy(&self) -> &'static ZonePolicy {
        &COLUMNS_BY_TYPE
    }

    fn zone_widths(&self) -> (u8, u8) {
        (60, 38)
    }

    fn header(&self, input: HeaderInput<'_>) -> HeaderBlock {
        HeaderBlock {
            background: Some(input.style.theme_color.clone()),
            text_color: Some("#ffffff".to_string()),
            basic: input.basic,
            actions: BANNER_ACTIONS
                .iter()
                .filter_map(|name| input.icons.lookup(name))
                .collect(),
            extras: input.extras,
            ..Default::default()
        }
    }

    fn title_style(&self, zone: Zone, style: &EffectiveStyle) -> TitleStyle {
        match zone {
            Zone::Primary => TitleStyle::LeftRule {
                color: style.theme_color.clone(),
            },
            Zone::Secondary => TitleStyle::Card {
                // 25% alpha of the theme color.
                border_color: format!("{}40", style.theme_color),
                title_color: style.theme_color.clone(),
            },
        }
    }

    fn separators(&self) -> bool {
        false
    }

    fn basic_shows_title(&self) -> bool {
        false
    }

    fn extras_placement(&self) -> Option<ExtrasPlacement> {
        None
    }
}

/// Single column under a decorated page heading, with a navigation rail that
/// lists every active section.
pub struct ClassicNavLayout;

impl LayoutStrategy for ClassicNavLayout {
    fn zone_policy(&self) -> &'static ZonePolicy {
        &SINGLE_COLUMN
    }

    fn zone_widths(&self) -> (u8, u8) {
        (100, 0)
    }

    fn header(&self, input: HeaderInput<'_>) -> HeaderBlock {
        let text = if language(input.locale) == "zh" {
            "个人简历"
        } else {
            "Resume"
        };
        HeaderBlock {
            decoration: Some(DecorationBar {
                color: input.template.color_scheme.secondary.clone(),
                height: 6.0,
            }),
            heading: Some(Heading {
                text: text.to_string(),
                font_size: input.style.header_size + 6.0,
            }),
            basic: input.basic,
            extras: input.extras,
            ..Default::default()
        }
    }

    fn title_style(&self, _zone: Zone, _style: &EffectiveStyle) -> TitleStyle {
        TitleStyle::Hidden
    }

    fn separators(&self) -> bool {
        true
    }

    fn basic_in_body(&self) -> bool {
        true
    }

    fn basic_shows_title(&self) -> bool {
        false
    }

    fn extras_placement(&self) -> Option<ExtrasPlacement> {
        Some(ExtrasPlacement::BodyEnd)
    }

    fn navigation(
        &self,
        active: &[&SectionDescriptor],
        style: &EffectiveStyle,
        icons: &IconRegistry,
    ) -> Vec<NavItem> {
        active
            .iter()
            .map(|section| NavItem {
                section_id: section.id.clone(),
                title: display_title(section),
                icon: icons.lookup_opt(section.icon.as_deref()),
                font_size: style.subheader_size - 2.0,
            })
            .collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
