//! Selector block location.
//!
//! Only two fixed selectors are ever looked up (`:root` and `.dark`), so this
//! is a text search rather than a CSS parser: find `<selector> {` and return
//! everything up to the brace that closes it.

/// Returns the inner text of the first `<selector> { ... }` block.
///
/// Whitespace between the selector and the opening brace is optional. An
/// occurrence followed by anything else (`.darker {`, `.dark .card {`) is not
/// a match and the search moves on. Nested `{ ... }` regions inside the block
/// are kept as part of the inner text.
///
/// Returns `None` when the selector never opens a block, or when the block is
/// never closed.
///
/// # Example
///
/// ```rust
/// use themegrab::locate_block;
///
/// let css = ":root { --ring: hsl(0 0% 0%); }";
/// assert_eq!(locate_block(css, ":root"), Some(" --ring: hsl(0 0% 0%); "));
/// assert_eq!(locate_block(css, ".dark"), None);
/// ```
pub fn locate_block<'a>(text: &'a str, selector: &str) -> Option<&'a str> {
    if selector.is_empty() {
        return None;
    }

    let mut search_from = 0;
    while let Some(offset) = text[search_from..].find(selector) {
        let after = search_from + offset + selector.len();
        let rest = &text[after..];
        let trimmed = rest.trim_start();

        if trimmed.starts_with('{') {
            let open = after + (rest.len() - trimmed.len());
            if let Some(inner) = block_body(text, open) {
                return Some(inner);
            }
        }

        search_from = after;
    }

    None
}

/// Inner text of the block whose opening brace sits at byte offset `open`.
fn block_body(text: &str, open: usize) -> Option<&str> {
    let body_start = open + 1;
    let mut depth = 1usize;

    for (i, c) in text[body_start..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[body_start..body_start + i]);
                }
            }
            _ => {}
        }
    }

    None
}
