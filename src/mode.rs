use std::fmt;

/// Which fidelity an export preserves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportMode {
    /// The on-screen appearance, embedded as one image.
    Styled,
    /// Machine-readable text in a single column.
    Ats,
}

impl ExportMode {
    /// Suffix used in output file names.
    pub fn tag(self) -> &'static str {
        match self {
            ExportMode::Styled => "styled",
            ExportMode::Ats => "ats",
        }
    }
}

impl fmt::Display for ExportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// The separators a name is split on: Unicode whitespace plus the byte order
/// mark, without NEL (U+0085).
fn is_name_separator(ch: char) -> bool {
    ch == '\u{FEFF}' || (ch.is_whitespace() && ch != '\u{0085}')
}

/// Output file name: the person's name with every whitespace run collapsed
/// to `_`, then `_<mode>.pdf`. Nothing else is altered.
pub fn export_file_name(name: &str, mode: ExportMode) -> String {
    let mut stem = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for ch in name.chars() {
        if is_name_separator(ch) {
            if !in_whitespace {
                stem.push('_');
            }
            in_whitespace = true;
        } else {
            stem.push(ch);
            in_whitespace = false;
        }
    }
    format!("{stem}_{}.pdf", mode.tag())
}
