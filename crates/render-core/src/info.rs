/// Entries of the PDF document information dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub producer: Option<String>,
    /// Already in PDF date syntax, see [`crate::utils::pdf_date`].
    pub creation_date: Option<String>,
}

impl DocumentInfo {
    pub fn is_empty(&self) -> bool {
        self.entries().next().is_none()
    }

    /// Present entries as `(key, value)` pairs, in dictionary key order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("CreationDate", &self.creation_date),
            ("Producer", &self.producer),
            ("Title", &self.title),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
    }
}
