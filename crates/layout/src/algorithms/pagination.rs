pub struct BreakAnalysis {
    pub should_break: bool,
    pub remaining_height: f32,
}

/// Decides whether a block of `block_height` still fits above `page_bottom`.
///
/// * `cursor_y`: The current Y position on the page.
/// * `block_height`: The height the block (plus anything kept with it) needs.
/// * `page_bottom`: The lowest Y content may reach.
/// * `page_has_content`: An empty page never breaks, so oversized blocks are
///   placed instead of producing blank pages.
pub fn check_block_fit(
    cursor_y: f32,
    block_height: f32,
    page_bottom: f32,
    page_has_content: bool,
) -> BreakAnalysis {
    let available = (page_bottom - cursor_y).max(0.0);
    // Use a small epsilon to handle floating point inaccuracies
    const EPSILON: f32 = 0.01;
    BreakAnalysis {
        should_break: page_has_content && block_height > available + EPSILON,
        remaining_height: available,
    }
}
