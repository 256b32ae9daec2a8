use crate::LayoutError;
use vitae_types::Size;

/// Font sizes, in points, for each kind of line the flow layout emits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSizes {
    pub name: f32,
    pub title: f32,
    pub contact: f32,
    pub heading: f32,
    /// Summary paragraph, education lines and the skills line.
    pub body: f32,
    /// The "role — company" line of an experience entry.
    pub entry_title: f32,
    /// The period line and bullets of an experience entry.
    pub entry_detail: f32,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            name: 18.0,
            title: 12.0,
            contact: 12.0,
            heading: 13.0,
            body: 11.0,
            entry_title: 12.0,
            entry_detail: 10.0,
        }
    }
}

/// Vertical space added after a block, by block kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacing {
    pub after_header: f32,
    pub after_summary: f32,
    pub after_experience_entry: f32,
    /// Added once, after the last education entry (or the heading of an
    /// empty education section).
    pub after_education: f32,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            after_header: 4.0,
            after_summary: 8.0,
            after_experience_entry: 6.0,
            after_education: 6.0,
        }
    }
}

/// Geometry and typography of the content-fidelity layout.
///
/// The defaults reproduce the reference ATS output on an A4 page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub page_size: Size,
    pub margin_left: f32,
    pub margin_top: f32,
    /// The lowest Y any block may reach before a page break is forced.
    pub page_bottom: f32,
    pub text_width: f32,
    pub bullet_indent: f32,
    pub fonts: FontSizes,
    pub spacing: Spacing,
    /// Draw a thin rule under every section heading.
    pub section_rules: bool,
    pub rule_thickness: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_size: Size::a4(),
            margin_left: 40.0,
            margin_top: 40.0,
            page_bottom: 700.0,
            text_width: 480.0,
            bullet_indent: 6.0,
            fonts: FontSizes::default(),
            spacing: Spacing::default(),
            section_rules: false,
            rule_thickness: 0.5,
        }
    }
}

impl LayoutConfig {
    /// Height available to blocks on a fresh page.
    pub fn content_height(&self) -> f32 {
        self.page_bottom - self.margin_top
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        let fonts = &self.fonts;
        let sizes = [
            fonts.name,
            fonts.title,
            fonts.contact,
            fonts.heading,
            fonts.body,
            fonts.entry_title,
            fonts.entry_detail,
        ];
        if sizes.iter().any(|s| !s.is_finite() || *s <= 0.0) {
            return Err(LayoutError::InvalidConfig(
                "font sizes must be positive".to_string(),
            ));
        }
        if !(self.text_width > self.bullet_indent && self.bullet_indent >= 0.0) {
            return Err(LayoutError::InvalidConfig(format!(
                "text width {:.2} must exceed bullet indent {:.2}",
                self.text_width, self.bullet_indent
            )));
        }
        if self.margin_left + self.text_width > self.page_size.width {
            return Err(LayoutError::InvalidConfig(format!(
                "text column ({:.2} + {:.2}) is wider than the page ({:.2})",
                self.margin_left, self.text_width, self.page_size.width
            )));
        }
        if !(self.margin_top >= 0.0
            && self.page_bottom > self.margin_top
            && self.page_bottom <= self.page_size.height)
        {
            return Err(LayoutError::InvalidConfig(format!(
                "page bottom {:.2} must lie between the top margin {:.2} and the page height {:.2}",
                self.page_bottom, self.margin_top, self.page_size.height
            )));
        }
        let spacing = &self.spacing;
        if [
            spacing.after_header,
            spacing.after_summary,
            spacing.after_experience_entry,
            spacing.after_education,
        ]
        .iter()
        .any(|s| *s < 0.0)
        {
            return Err(LayoutError::InvalidConfig(
                "block spacing cannot be negative".to_string(),
            ));
        }
        Ok(())
    }
}
