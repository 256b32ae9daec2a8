/// Greedy word wrap.
///
/// Words are the whitespace-separated runs of `text`; any run of whitespace,
/// newlines included, counts as one separator. A line is closed before the
/// first word that would push it past `max_width`. A word wider than
/// `max_width` on its own still gets a line to itself, untruncated.
///
/// `width_of` must be additive over concatenation (no kerning), which holds
/// for the standard Type1 metrics this crate ships.
pub fn wrap_words<F>(text: &str, max_width: f32, width_of: F) -> Vec<String>
where
    F: Fn(&str) -> f32,
{
    const EPSILON: f32 = 0.01;
    let space_width = width_of(" ");

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0f32;

    for word in text.split_whitespace() {
        let word_width = width_of(word);
        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        let candidate = current_width + space_width + word_width;
        if candidate > max_width + EPSILON {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        } else {
            current.push(' ');
            current.push_str(word);
            current_width = candidate;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
