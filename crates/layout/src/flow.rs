//! Content-fidelity layout: a résumé as flowing, paginated plain text.
//!
//! The model is turned into a flat list of [`Block`]s (header, section
//! headings, summary paragraph, one block per experience or education entry,
//! the skills line) and the blocks are stacked top to bottom. A block is never
//! split; when one does not fit above `page_bottom` the page is closed first.

use crate::LayoutError;
use crate::algorithms::pagination::check_block_fit;
use crate::config::LayoutConfig;
use crate::text::{MetricsProvider, StandardFontMetrics};
use log::{debug, info, warn};
use vitae_types::{ContentModel, Document, Page, PlacedInstruction};

const EM_DASH: char = '\u{2014}';

pub const SUMMARY_HEADING: &str = "Summary";
pub const EXPERIENCE_HEADING: &str = "Experience";
pub const EDUCATION_HEADING: &str = "Education";
pub const SKILLS_HEADING: &str = "Skills";

/// Distance from a heading's baseline to the optional rule beneath it.
const RULE_OFFSET: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Header,
    Heading,
    Summary,
    ExperienceEntry,
    EducationEntry,
    Skills,
}

/// One unbreakable unit of content.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub kind: BlockKind,
    /// Instructions with `y` relative to the top of the block.
    pub instructions: Vec<PlacedInstruction>,
    pub height: f32,
    pub spacing_after: f32,
    /// Headings must land on the same page as the block that follows them.
    pub keep_with_next: bool,
}

/// Where a block ended up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockPlacement {
    pub kind: BlockKind,
    pub page: usize,
    pub top: f32,
    pub bottom: f32,
}

/// The single sequence point of a layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
struct LayoutCursor {
    page: usize,
    y: f32,
}

impl LayoutCursor {
    fn new(top: f32) -> Self {
        Self { page: 0, y: top }
    }

    fn next_page(&mut self, top: f32) {
        self.page += 1;
        self.y = top;
    }
}

struct BlockBuilder<'m, M: MetricsProvider + ?Sized> {
    metrics: &'m M,
    block: Block,
}

impl<'m, M: MetricsProvider + ?Sized> BlockBuilder<'m, M> {
    fn new(metrics: &'m M, kind: BlockKind) -> Self {
        Self {
            metrics,
            block: Block {
                kind,
                instructions: Vec::new(),
                height: 0.0,
                spacing_after: 0.0,
                keep_with_next: false,
            },
        }
    }

    /// Appends `text` wrapped to `max_width`, one instruction per line.
    fn text(mut self, text: &str, font_size: f32, x: f32, max_width: f32) -> Self {
        let measured = self.metrics.measure(text, font_size, max_width);
        let line_height = self.metrics.line_height(font_size);
        for (i, line) in measured.lines.into_iter().enumerate() {
            let y = self.block.height + i as f32 * line_height;
            self.block
                .instructions
                .push(PlacedInstruction::text(x, y, line, font_size));
        }
        self.block.height += measured.height;
        self
    }

    fn rule(mut self, x: f32, y: f32, width: f32, thickness: f32) -> Self {
        self.block
            .instructions
            .push(PlacedInstruction::rule(x, y, width, thickness));
        self
    }

    fn spacing(mut self, spacing: f32) -> Self {
        self.block.spacing_after = spacing;
        self
    }

    fn keep_with_next(mut self, keep: bool) -> Self {
        self.block.keep_with_next = keep;
        self
    }

    fn finish(self) -> Block {
        self.block
    }
}

/// Paginates a [`ContentModel`] into a [`Document`] of plain text lines.
pub struct FlowLayoutEngine<M: MetricsProvider = StandardFontMetrics> {
    config: LayoutConfig,
    metrics: M,
}

impl Default for FlowLayoutEngine<StandardFontMetrics> {
    fn default() -> Self {
        Self {
            config: LayoutConfig::default(),
            metrics: StandardFontMetrics,
        }
    }
}

impl<M: MetricsProvider> FlowLayoutEngine<M> {
    pub fn new(config: LayoutConfig, metrics: M) -> Result<Self, LayoutError> {
        config.validate()?;
        Ok(Self { config, metrics })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn metrics(&self) -> &M {
        &self.metrics
    }

    pub fn layout(&self, model: &ContentModel) -> Document {
        self.layout_traced(model).0
    }

    /// Like [`layout`](Self::layout), also reporting where every block went.
    pub fn layout_traced(&self, model: &ContentModel) -> (Document, Vec<BlockPlacement>) {
        let blocks = self.build_blocks(model);
        self.paginate(&blocks)
    }

    /// Converts the model into blocks, in render order.
    pub fn build_blocks(&self, model: &ContentModel) -> Vec<Block> {
        let cfg = &self.config;
        let fonts = &cfg.fonts;
        let x = cfg.margin_left;
        let width = cfg.text_width;
        let mut blocks = Vec::new();

        let identity = &model.identity;
        blocks.push(
            self.block(BlockKind::Header)
                .text(&identity.name, fonts.name, x, width)
                .text(&identity.title, fonts.title, x, width)
                .text(
                    &format!("{} | {}", identity.email, identity.phone),
                    fonts.contact,
                    x,
                    width,
                )
                .spacing(cfg.spacing.after_header)
                .finish(),
        );

        blocks.push(self.heading(SUMMARY_HEADING, true, 0.0));
        blocks.push(
            self.block(BlockKind::Summary)
                .text(&model.summary, fonts.body, x, width)
                .spacing(cfg.spacing.after_summary)
                .finish(),
        );

        blocks.push(self.heading(EXPERIENCE_HEADING, !model.experiences.is_empty(), 0.0));
        let bullet_x = x + cfg.bullet_indent;
        let bullet_width = width - cfg.bullet_indent;
        for exp in &model.experiences {
            let mut entry = self
                .block(BlockKind::ExperienceEntry)
                .text(
                    &format!("{} {EM_DASH} {}", exp.role, exp.company),
                    fonts.entry_title,
                    x,
                    width,
                )
                .text(&exp.period, fonts.entry_detail, x, width);
            for bullet in &exp.bullets {
                entry = entry.text(&format!("- {bullet}"), fonts.entry_detail, bullet_x, bullet_width);
            }
            blocks.push(entry.spacing(cfg.spacing.after_experience_entry).finish());
        }

        let education_spacing = if model.education.is_empty() {
            cfg.spacing.after_education
        } else {
            0.0
        };
        blocks.push(self.heading(
            EDUCATION_HEADING,
            !model.education.is_empty(),
            education_spacing,
        ));
        for (i, ed) in model.education.iter().enumerate() {
            let spacing = if i + 1 == model.education.len() {
                cfg.spacing.after_education
            } else {
                0.0
            };
            blocks.push(
                self.block(BlockKind::EducationEntry)
                    .text(
                        &format!("{} {EM_DASH} {} ({})", ed.school, ed.degree, ed.year),
                        fonts.body,
                        x,
                        width,
                    )
                    .spacing(spacing)
                    .finish(),
            );
        }

        blocks.push(self.heading(SKILLS_HEADING, !model.skills.is_empty(), 0.0));
        if !model.skills.is_empty() {
            blocks.push(
                self.block(BlockKind::Skills)
                    .text(&model.skills.join(", "), fonts.body, x, width)
                    .finish(),
            );
        }

        debug!("Built {} layout blocks.", blocks.len());
        blocks
    }

    /// Stacks blocks onto pages, breaking only between blocks.
    pub fn paginate(&self, blocks: &[Block]) -> (Document, Vec<BlockPlacement>) {
        let cfg = &self.config;
        let mut document = Document::new(cfg.page_size);
        let mut placements = Vec::with_capacity(blocks.len());
        let mut page = Page::new();
        let mut cursor = LayoutCursor::new(cfg.margin_top);
        // Set when a keep-with-next block opened the current page; its
        // follower then stays with it even if it does not fit.
        let mut anchored = false;

        for (i, block) in blocks.iter().enumerate() {
            let mut needed = block.height;
            if block.keep_with_next
                && let Some(next) = blocks.get(i + 1)
            {
                needed += block.spacing_after + next.height;
            }

            let page_has_content = !page.is_empty() && !anchored;
            let analysis = check_block_fit(cursor.y, needed, cfg.page_bottom, page_has_content);
            if analysis.should_break {
                debug!(
                    "Page {} full ({:.1}pt left, {:?} needs {:.1}pt); breaking.",
                    cursor.page + 1,
                    analysis.remaining_height,
                    block.kind,
                    needed
                );
                document.pages.push(std::mem::take(&mut page));
                cursor.next_page(cfg.margin_top);
            }

            if block.height > cfg.content_height() {
                warn!(
                    "{:?} block is {:.1}pt tall, more than a page ({:.1}pt); placing it unsplit.",
                    block.kind,
                    block.height,
                    cfg.content_height()
                );
            }

            let opens_page = page.is_empty();
            for instruction in &block.instructions {
                let mut placed = instruction.clone();
                placed.y += cursor.y;
                page.push(placed);
            }
            placements.push(BlockPlacement {
                kind: block.kind,
                page: cursor.page,
                top: cursor.y,
                bottom: cursor.y + block.height,
            });
            cursor.y += block.height + block.spacing_after;
            anchored = block.keep_with_next && opens_page;
        }

        document.pages.push(page);
        info!(
            "Laid out {} blocks onto {} page(s).",
            blocks.len(),
            document.page_count()
        );
        (document, placements)
    }

    fn block(&self, kind: BlockKind) -> BlockBuilder<'_, M> {
        BlockBuilder::new(&self.metrics, kind)
    }

    fn heading(&self, title: &str, keep_with_next: bool, spacing: f32) -> Block {
        let cfg = &self.config;
        let mut builder = self
            .block(BlockKind::Heading)
            .text(title, cfg.fonts.heading, cfg.margin_left, cfg.text_width);
        if cfg.section_rules {
            builder = builder.rule(
                cfg.margin_left,
                RULE_OFFSET,
                cfg.text_width,
                cfg.rule_thickness,
            );
        }
        builder.spacing(spacing).keep_with_next(keep_with_next).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitae_types::{Element, Experience};

    fn engine() -> FlowLayoutEngine {
        FlowLayoutEngine::default()
    }

    fn y_of(doc: &Document, text: &str) -> f32 {
        doc.pages
            .iter()
            .flat_map(|p| p.instructions.iter())
            .find(|i| i.as_text() == Some(text))
            .map(|i| i.y)
            .unwrap_or_else(|| panic!("'{text}' not laid out"))
    }

    fn model_with_experiences(entries: usize, bullets: usize) -> ContentModel {
        let mut model = ContentModel::starter();
        model.experiences = (1..=entries)
            .map(|e| Experience {
                role: format!("Role {e}"),
                company: "Company".to_string(),
                period: "2019 - 2020".to_string(),
                bullets: (1..=bullets).map(|b| format!("Entry {e} bullet {b}")).collect(),
            })
            .collect();
        model
    }

    #[test]
    fn starter_model_positions() {
        let doc = engine().layout(&ContentModel::starter());
        assert_eq!(doc.page_count(), 1);

        assert_eq!(y_of(&doc, "Your Name"), 40.0);
        assert_eq!(y_of(&doc, "Senior Product Designer"), 62.0);
        assert_eq!(y_of(&doc, "name@example.com | +00 000 000"), 77.0);
        assert_eq!(y_of(&doc, "Summary"), 96.0);
        assert_eq!(y_of(&doc, "Experience"), 134.0);
        assert_eq!(y_of(&doc, "Senior Designer \u{2014} Acme Inc"), 150.0);
        assert_eq!(y_of(&doc, "2020 \u{2014} Present"), 165.0);
        assert_eq!(y_of(&doc, "- Led product redesign"), 177.0);
        assert_eq!(y_of(&doc, "Education"), 207.0);
        assert_eq!(y_of(&doc, "University X \u{2014} B.A. Design (2017)"), 223.0);
        assert_eq!(y_of(&doc, "Skills"), 243.0);
        assert_eq!(y_of(&doc, "Product Design, Figma, Research"), 259.0);
    }

    #[test]
    fn bullets_are_indented() {
        let doc = engine().layout(&ContentModel::starter());
        let bullet = doc.pages[0]
            .instructions
            .iter()
            .find(|i| i.as_text() == Some("- Improved metrics by 32%"))
            .unwrap();
        assert_eq!(bullet.x, 46.0);
        match &bullet.element {
            Element::Text(t) => assert_eq!(t.font_size, 10.0),
            other => panic!("unexpected element {other:?}"),
        }
    }

    #[test]
    fn sections_appear_in_fixed_order() {
        let doc = engine().layout(&ContentModel::starter());
        let texts: Vec<&str> = doc.texts().collect();
        let pos = |t: &str| texts.iter().position(|x| *x == t).unwrap();
        assert!(pos("Your Name") < pos("Summary"));
        assert!(pos("Summary") < pos("Experience"));
        assert!(pos("Experience") < pos("Education"));
        assert!(pos("Education") < pos("Skills"));
    }

    #[test]
    fn empty_sections_keep_their_headings() {
        let mut model = ContentModel::starter();
        model.experiences.clear();
        model.education.clear();
        model.skills.clear();
        let doc = engine().layout(&model);
        let texts: Vec<&str> = doc.texts().collect();
        for heading in [EXPERIENCE_HEADING, EDUCATION_HEADING, SKILLS_HEADING] {
            assert!(texts.contains(&heading), "missing heading {heading}");
        }
        assert_eq!(texts.last(), Some(&SKILLS_HEADING));
    }

    #[test]
    fn entry_without_bullets_still_renders() {
        let mut model = ContentModel::starter();
        model.experiences[0].bullets.clear();
        let (doc, placements) = engine().layout_traced(&model);
        assert!(doc.texts().any(|t| t == "Senior Designer \u{2014} Acme Inc"));
        assert!(doc.texts().any(|t| t == "2020 \u{2014} Present"));
        let entry = placements
            .iter()
            .find(|p| p.kind == BlockKind::ExperienceEntry)
            .unwrap();
        assert_eq!(entry.bottom - entry.top, 27.0);
    }

    #[test]
    fn forced_break_never_splits_an_entry() {
        let model = model_with_experiences(8, 5);
        let (doc, placements) = engine().layout_traced(&model);
        assert!(doc.page_count() >= 2);

        for p in &placements {
            assert!(p.bottom <= 700.0, "{p:?} crosses the page bottom");
        }
        for e in 1..=8 {
            let role_page = doc.page_of_text(&format!("Role {e} \u{2014} Company")).unwrap();
            for b in 1..=5 {
                let bullet_page = doc.page_of_text(&format!("- Entry {e} bullet {b}")).unwrap();
                assert_eq!(bullet_page, role_page, "entry {e} split across pages");
            }
        }
    }

    #[test]
    fn page_break_resets_cursor_to_top_margin() {
        let model = model_with_experiences(8, 5);
        let (_, placements) = engine().layout_traced(&model);
        let first_on_page_two = placements.iter().find(|p| p.page == 1).unwrap();
        assert_eq!(first_on_page_two.top, 40.0);
    }

    #[test]
    fn heading_is_kept_with_its_first_entry() {
        // Push the Education heading right up against the page bottom.
        let model = {
            let mut m = model_with_experiences(6, 5);
            m.education = vec![vitae_types::Education {
                school: "School".into(),
                degree: "Degree".into(),
                year: "2000".into(),
            }];
            m
        };
        let (_, placements) = engine().layout_traced(&model);
        for pair in placements.windows(2) {
            if pair[0].kind == BlockKind::Heading && pair[1].kind != BlockKind::Heading {
                assert_eq!(pair[0].page, pair[1].page, "heading stranded: {pair:?}");
            }
        }
    }

    #[test]
    fn oversized_block_is_placed_whole() {
        let mut model = ContentModel::starter();
        model.experiences[0].bullets = (0..80).map(|i| format!("bullet {i}")).collect();
        let (doc, placements) = engine().layout_traced(&model);
        let entry_index = placements
            .iter()
            .position(|p| p.kind == BlockKind::ExperienceEntry)
            .unwrap();
        let heading = placements[entry_index - 1];
        let entry = placements[entry_index];
        assert_eq!(heading.page, 1);
        assert_eq!(heading.top, 40.0);
        assert_eq!(entry.page, 1);
        assert_eq!(entry.top, 56.0);
        assert!(entry.bottom > 700.0);
        let page = doc.page_of_text("- bullet 0").unwrap();
        assert_eq!(doc.page_of_text("- bullet 79"), Some(page));
    }

    #[test]
    fn section_rules_are_optional() {
        let plain = engine().layout(&ContentModel::starter());
        assert!(
            plain.pages[0]
                .instructions
                .iter()
                .all(|i| !matches!(i.element, Element::Rule(_)))
        );

        let config = LayoutConfig {
            section_rules: true,
            ..Default::default()
        };
        let ruled = FlowLayoutEngine::new(config, StandardFontMetrics).unwrap();
        let doc = ruled.layout(&ContentModel::starter());
        let rules: Vec<_> = doc.pages[0]
            .instructions
            .iter()
            .filter(|i| matches!(i.element, Element::Rule(_)))
            .collect();
        assert_eq!(rules.len(), 4);
        assert_eq!(rules[0].y, 100.0);
        // Rules take no vertical space.
        assert_eq!(y_of(&doc, "Experience"), 134.0);
    }

    #[test]
    fn layout_is_deterministic() {
        let model = model_with_experiences(12, 3);
        assert_eq!(engine().layout(&model), engine().layout(&model));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = LayoutConfig {
            page_bottom: 10.0,
            ..Default::default()
        };
        assert!(FlowLayoutEngine::new(config, StandardFontMetrics).is_err());
    }
}
