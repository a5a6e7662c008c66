// Tag handlers for Markdown rendering.
//
// One handler per recognized tag (or tag group). Each writes its opening
// markup, walks the children, then writes its closing markup. Unknown tags
// only walk their children.

use super::{ListMarker, State};
use crate::node::{Tag, Visit};

/// Dispatch a tag to its handler.
pub(crate) fn handle(state: &mut State, tag: &Tag) {
    match tag.name.as_str() {
        "p" => handle_paragraph(state, tag),
        "br" => state.output.push('\n'),
        "h1" => handle_heading(state, tag, 1),
        "h2" => handle_heading(state, tag, 2),
        "h3" => handle_heading(state, tag, 3),
        "h4" => handle_heading(state, tag, 4),
        "h5" => handle_heading(state, tag, 5),
        "h6" => handle_heading(state, tag, 6),
        "b" | "strong" => wrap(state, tag, "**"),
        "i" | "em" => wrap(state, tag, "*"),
        "u" => wrap(state, tag, "__"),
        "pre" => handle_pre(state, tag),
        "code" => handle_code(state, tag),
        "a" => handle_link(state, tag),
        "img" => handle_image(state, tag),
        "ul" => handle_list(state, tag, ListMarker::Bullet),
        "ol" => handle_list(state, tag, ListMarker::Ordered),
        "li" => handle_list_item(state, tag),
        "hr" => state.output.push_str("\n\n---\n\n"),
        _ => state.visit_children(tag),
    }
}

/// Surround the children with the same marker on both sides.
fn wrap(state: &mut State, tag: &Tag, marker: &str) {
    state.output.push_str(marker);
    state.visit_children(tag);
    state.output.push_str(marker);
}

// ---------------------------------------------------------------------------
// Flow (block) handlers
// ---------------------------------------------------------------------------

fn handle_paragraph(state: &mut State, tag: &Tag) {
    state.output.push_str("\n\n");
    state.visit_children(tag);
    state.output.push_str("\n\n");
}

// ATX only, without a closing sequence. Headings don't end their line, so
// `<h1>a</h1>b` renders as `# ab`.
fn handle_heading(state: &mut State, tag: &Tag, depth: usize) {
    state.output.push_str(&"#".repeat(depth));
    state.output.push(' ');
    state.visit_children(tag);
}

fn handle_pre(state: &mut State, tag: &Tag) {
    let was_in_code_block = state.in_code_block;
    state.in_code_block = true;
    state.output.push_str("```\n");
    state.visit_children(tag);
    state.output.push_str("\n```");
    state.in_code_block = was_in_code_block;
}

fn handle_list(state: &mut State, tag: &Tag, marker: ListMarker) {
    state.list_markers.push(marker);
    state.output.push('\n');
    state.visit_children(tag);
    state.output.push('\n');
    state.list_markers.pop();
}

fn handle_list_item(state: &mut State, tag: &Tag) {
    let marker = state.current_marker();
    state.output.push('\n');
    state.output.push_str(marker.as_str());
    state.output.push(' ');
    state.visit_children(tag);
}

// ---------------------------------------------------------------------------
// Phrasing (inline) handlers
// ---------------------------------------------------------------------------

/// Inline code, unless we're already inside a fenced block.
fn handle_code(state: &mut State, tag: &Tag) {
    if state.in_code_block {
        state.visit_children(tag);
    } else {
        wrap(state, tag, "`");
    }
}

fn handle_link(state: &mut State, tag: &Tag) {
    let Some(href) = tag.non_empty_attr("href") else {
        state.visit_children(tag);
        return;
    };
    state.output.push('[');
    state.visit_children(tag);
    state.output.push_str("](");
    state.output.push_str(href);
    state.output.push(')');
}

/// `![alt](src)`, taking the text from `alt`, then `title`. Children are
/// ignored when there is a `src`.
fn handle_image(state: &mut State, tag: &Tag) {
    let Some(src) = tag.non_empty_attr("src") else {
        state.visit_children(tag);
        return;
    };
    let alt = tag
        .non_empty_attr("alt")
        .or_else(|| tag.non_empty_attr("title"))
        .unwrap_or_default();
    state.output.push_str("![");
    state.output.push_str(alt);
    state.output.push_str("](");
    state.output.push_str(src);
    state.output.push(')');
}
