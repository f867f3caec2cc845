//! Heap view - paints a [`StepEvent`] into a [`FrameBuffer`].
//!
//! # Screen layout
//!
//! ```text
//! ┌ row 0        title bar: state, speed, step kind, sorted count
//! │ rows 2..     tree area: node boxes, edges to children
//! │ row h-4      array strip: values in index order
//! │ row h-3      index labels under the strip
//! └ row h-1      key help
//! ```
//!
//! Tree geometry: level `l = floor(log2(i+1))` holds `2^l` slots. A node at
//! slot `p` of its level is centered at `x = width/(2^l+1) * (p+1)` and
//! `y = levelHeight * (l + 0.5)`, with the height split evenly over
//! `ceil(log2(n+1))` levels.

use crate::animation::RunState;
use crate::sort::StepEvent;
use crate::types::{Attr, Color};

use super::buffer::FrameBuffer;

/// Smallest terminal the view will draw into.
pub const MIN_WIDTH: u16 = 24;
pub const MIN_HEIGHT: u16 = 10;

const TITLE_BG: Color = Color::hex(0x2c3e50);
const EDGE_FG: Color = Color::hex(0x7f8c8d);
const TEXT_FG: Color = Color::hex(0xecf0f1);

// =============================================================================
// Node state
// =============================================================================

/// How a node is highlighted in the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    Idle,
    Compared,
    Swapped,
    Sorted,
}

impl NodeState {
    /// Classify index `i`. Sorted wins over swapped, swapped over compared.
    pub fn of<T>(event: &StepEvent<T>, i: usize) -> Self {
        if event.is_sorted(i) {
            NodeState::Sorted
        } else if event.swapped.contains(&i) {
            NodeState::Swapped
        } else if event.compared.contains(&i) {
            NodeState::Compared
        } else {
            NodeState::Idle
        }
    }

    /// Node box background for this state.
    pub fn color(self) -> Color {
        match self {
            NodeState::Idle => Color::hex(0x3498db),
            NodeState::Compared => Color::hex(0xe67e22),
            NodeState::Swapped => Color::hex(0xf44336),
            NodeState::Sorted => Color::hex(0x2ecc71),
        }
    }
}

// =============================================================================
// Status
// =============================================================================

/// Controller state shown in the title and help rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    pub state: RunState,
    pub speed_ms: u64,
    pub allow_cancel: bool,
}

impl Default for Status {
    fn default() -> Self {
        Self {
            state: RunState::Idle,
            speed_ms: crate::config::DEFAULT_SPEED_MS,
            allow_cancel: false,
        }
    }
}

// =============================================================================
// Geometry
// =============================================================================

/// A rectangle of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Area {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

/// Tree level of heap index `i` (root is level 0).
#[inline]
pub fn level_of(i: usize) -> u32 {
    (i + 1).ilog2()
}

/// Number of levels a heap of `n` nodes spans.
pub fn level_count(n: usize) -> u32 {
    if n == 0 { 0 } else { level_of(n - 1) + 1 }
}

/// Center cell of node `i` in a tree of `n` nodes laid out over `area`.
pub fn node_center(i: usize, n: usize, area: Area) -> (u16, u16) {
    let level = level_of(i);
    let slots = 1usize << level;
    let slot = i + 1 - slots;

    let x = area.width as f32 / (slots + 1) as f32 * (slot + 1) as f32;
    let level_height = area.height as f32 / level_count(n).max(1) as f32;
    let y = level_height * (level as f32 + 0.5);

    (area.x + x as u16, area.y + y as u16)
}

/// Columns needed for the widest value plus one cell of padding each side.
fn label_width<T: ToString>(data: &[T]) -> u16 {
    let widest = data.iter().map(|v| v.to_string().len()).max().unwrap_or(1);
    widest as u16 + 2
}

// =============================================================================
// Painting
// =============================================================================

/// Paint a full frame for `event`.
pub fn paint<T: ToString>(buf: &mut FrameBuffer, event: &StepEvent<T>, status: &Status) {
    buf.clear();
    let (w, h) = (buf.width(), buf.height());
    if w < MIN_WIDTH || h < MIN_HEIGHT {
        buf.draw_text(0, 0, "terminal too small", TEXT_FG, None, Attr::BOLD);
        return;
    }

    paint_title(buf, event, status);
    let tree = Area {
        x: 0,
        y: 2,
        width: w,
        height: h - 7,
    };
    paint_tree(buf, event, tree);
    paint_strip(buf, event, h - 4);
    paint_help(buf, status, h - 1);
}

fn paint_title<T>(buf: &mut FrameBuffer, event: &StepEvent<T>, status: &Status) {
    let w = buf.width();
    buf.fill_rect(0, 0, w, 1, TITLE_BG);
    buf.draw_text(1, 0, "Heap Sort", TEXT_FG, None, Attr::BOLD);

    let info = format!(
        "{} | {} | {} ms/step | sorted {}/{} ",
        status.state.label(),
        event.kind.label(),
        status.speed_ms,
        event.sorted_count.min(event.data.len()),
        event.data.len(),
    );
    let x = w.saturating_sub(info.chars().count() as u16);
    buf.draw_text(x.max(11), 0, &info, TEXT_FG, None, Attr::NONE);
}

fn paint_tree<T: ToString>(buf: &mut FrameBuffer, event: &StepEvent<T>, area: Area) {
    let n = event.data.len();
    let label_w = label_width(&event.data);

    // edges first so node boxes cover their ends
    for i in 0..n {
        let parent = node_center(i, n, area);
        for child in [2 * i + 1, 2 * i + 2] {
            if child < n {
                draw_edge(buf, parent, node_center(child, n, area));
            }
        }
    }

    for (i, value) in event.data.iter().enumerate() {
        let (cx, cy) = node_center(i, n, area);
        let x = cx.saturating_sub(label_w / 2);
        draw_node(buf, x, cy, label_w, &value.to_string(), NodeState::of(event, i));
    }
}

/// Slanted edge between two node centers, one character per row.
fn draw_edge(buf: &mut FrameBuffer, from: (u16, u16), to: (u16, u16)) {
    let (fx, fy) = (from.0 as i32, from.1 as i32);
    let (tx, ty) = (to.0 as i32, to.1 as i32);
    let rows = ty - fy;
    if rows < 2 {
        return;
    }
    let ch = if tx < fx { '/' } else { '\\' };
    for step in 1..rows {
        let x = fx + (tx - fx) * step / rows;
        buf.draw_char(x as u16, (fy + step) as u16, ch, EDGE_FG, None, Attr::NONE);
    }
}

fn draw_node(buf: &mut FrameBuffer, x: u16, y: u16, width: u16, label: &str, state: NodeState) {
    let bg = state.color();
    buf.fill_rect(x, y, width, 1, bg);
    buf.draw_text_centered(x, y, width, label, Color::WHITE, Some(bg), Attr::BOLD);
}

fn paint_strip<T: ToString>(buf: &mut FrameBuffer, event: &StepEvent<T>, y: u16) {
    let label_w = label_width(&event.data);
    let pitch = label_w as usize + 1;
    let width = buf.width() as usize;
    let total = pitch.saturating_mul(event.data.len());
    let mut x = width.saturating_sub(total) / 2;

    // a strip wider than the frame is cut at the right edge
    for (i, value) in event.data.iter().enumerate() {
        if x >= width {
            break;
        }
        let col = x as u16;
        draw_node(buf, col, y, label_w, &value.to_string(), NodeState::of(event, i));
        buf.draw_text_centered(col, y + 1, label_w, &i.to_string(), EDGE_FG, None, Attr::DIM);
        x += pitch;
    }
}

fn paint_help(buf: &mut FrameBuffer, status: &Status, y: u16) {
    let mut help = String::from(" s start   r reset   +/- speed   q quit");
    if status.allow_cancel {
        help.push_str("   esc cancel");
    }
    let attrs = if status.state == RunState::Running {
        Attr::DIM
    } else {
        Attr::NONE
    };
    buf.draw_text(0, y, &help, TEXT_FG, None, attrs);
}

// =============================================================================
// Tests
// =============================================================================
