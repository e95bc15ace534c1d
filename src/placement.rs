//! ### Placement
//! Resolves logical cursor positions into screen rectangles through a [TextSurface].

use crate::api::surface::{Placement, Rect, TextSurface};
use crate::api::{Cursor, Position};
use crate::errors::{PlacementError, PlacementResult};

/// Resolve where `cursor` should be drawn on `surface`.
///
/// The position is clamped to the current document length first. The caret sits at the end of
/// the selection, and a selection produces one highlight block per visual line it spans.
pub fn resolve<S: TextSurface + ?Sized>(surface: &S, cursor: &Cursor) -> PlacementResult<Placement> {
	let position = cursor.position.clamp(surface.length());
	let scroll = surface.scroll_top();

	if surface.leaf(position.index).is_none() {
		return Err(PlacementError::Leaf(position.index));
	}

	let head = surface.bounds(position.end())
		.ok_or(PlacementError::Bounds(position.end()))?;
	let caret = Rect {
		top: head.top + scroll,
		left: head.left,
		width: 0.0,
		height: head.height,
	};

	let selection = if position.is_caret() {
		Vec::new()
	} else {
		selection_blocks(surface, position, scroll)?
	};

	let (flag_width, flag_height) = surface.flag_size(cursor);
	Ok(Placement {
		near_top: caret.top <= flag_height,
		near_left: caret.left <= flag_width,
		near_right: surface.width() - caret.left <= flag_width,
		caret,
		selection,
	})
}

// consecutive units sharing a `top` belong to the same visual line
fn selection_blocks<S: TextSurface + ?Sized>(surface: &S, position: Position, scroll: f64) -> PlacementResult<Vec<Rect>> {
	let mut blocks: Vec<Rect> = Vec::new();
	for index in position.index..position.end() {
		let bounds = surface.bounds(index).ok_or(PlacementError::Bounds(index))?;
		let top = bounds.top + scroll;
		match blocks.last_mut() {
			Some(block) if block.top == top => {
				block.width = bounds.left + bounds.width - block.left;
				block.height = block.height.max(bounds.height);
			},
			_ => blocks.push(Rect { top, left: bounds.left, width: bounds.width, height: bounds.height }),
		}
	}
	blocks.retain(|block| block.width > 0.0);
	Ok(blocks)
}

#[cfg(test)]
mod tests {
	use crate::api::{Cursor, Position, Rect};
	use crate::errors::PlacementError;
	use crate::mock::{MockSurface, LINE, UNIT_H, UNIT_W};

	fn cursor(position: Position) -> Cursor {
		Cursor::new("alice".into(), position, "Alice".into(), "red".into())
	}

	#[test]
	fn caret_lands_on_unit_bounds() {
		let surface = MockSurface::new(30);
		let placement = super::resolve(&surface, &cursor(Position::caret(12))).unwrap();
		assert_eq!(placement.caret, Rect { top: UNIT_H, left: 2.0 * UNIT_W, width: 0.0, height: UNIT_H });
		assert!(placement.selection.is_empty());
	}

	#[test]
	fn scroll_offsets_every_rectangle() {
		let mut surface = MockSurface::new(30);
		surface.scroll = 100.0;
		let placement = super::resolve(&surface, &cursor(Position::range(2, 3))).unwrap();
		assert_eq!(placement.caret.top, 100.0);
		assert_eq!(placement.selection[0].top, 100.0);
	}

	#[test]
	fn selection_within_a_line_is_one_block() {
		let surface = MockSurface::new(30);
		let placement = super::resolve(&surface, &cursor(Position::range(2, 5))).unwrap();
		assert_eq!(placement.selection, vec![
			Rect { top: 0.0, left: 2.0 * UNIT_W, width: 5.0 * UNIT_W, height: UNIT_H },
		]);
		assert_eq!(placement.caret.left, 7.0 * UNIT_W);
	}

	#[test]
	fn selection_across_lines_has_a_block_per_line() {
		let surface = MockSurface::new(40);
		// 8..25 spans the end of line 0, all of line 1, the start of line 2
		let placement = super::resolve(&surface, &cursor(Position::range(8, 17))).unwrap();
		assert_eq!(placement.selection.len(), 3);
		assert_eq!(placement.selection[0].left, 8.0 * UNIT_W);
		assert_eq!(placement.selection[0].width, 2.0 * UNIT_W);
		assert_eq!(placement.selection[1].top, UNIT_H);
		assert_eq!(placement.selection[1].width, LINE as f64 * UNIT_W);
		assert_eq!(placement.selection[2].top, 2.0 * UNIT_H);
		assert_eq!(placement.selection[2].width, 5.0 * UNIT_W);
	}

	#[test]
	fn last_unit_of_a_wrapped_line_is_highlighted() {
		let surface = MockSurface::new(30);
		let placement = super::resolve(&surface, &cursor(Position::range(LINE - 1, 1))).unwrap();
		assert_eq!(placement.selection, vec![
			Rect { top: 0.0, left: (LINE - 1) as f64 * UNIT_W, width: UNIT_W, height: UNIT_H },
		]);
		assert_eq!(placement.caret.top, UNIT_H);
	}

	#[test]
	fn range_end_is_clamped_to_document() {
		let surface = MockSurface::new(6);
		let placement = super::resolve(&surface, &cursor(Position::range(2, 40))).unwrap();
		assert_eq!(placement.caret.left, 6.0 * UNIT_W);
	}

	#[test]
	fn missing_leaf_is_reported() {
		let mut surface = MockSurface::new(10);
		surface.detached.push(4);
		let err = super::resolve(&surface, &cursor(Position::caret(4))).unwrap_err();
		assert_eq!(err, PlacementError::Leaf(4));
	}

	#[test]
	fn flag_flips_near_edges() {
		let mut surface = MockSurface::new(30);
		surface.flag = (3.0 * UNIT_W, UNIT_H);
		surface.width = LINE as f64 * UNIT_W;
		let placement = super::resolve(&surface, &cursor(Position::caret(1))).unwrap();
		assert!(placement.near_top && placement.near_left && !placement.near_right);
		let placement = super::resolve(&surface, &cursor(Position::caret(28))).unwrap();
		assert!(!placement.near_top && !placement.near_left && placement.near_right);
	}
}
