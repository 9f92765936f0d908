use std::cell::{Cell, RefCell};
use std::rc::Rc;

use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;

fn mixed() -> SuggestionList {
	SuggestionList::new(
		vec![
			SuggestionItem::Leaf(ItemInfo::new("a", "Alpha").with_icon("•")),
			SuggestionItem::group(
				ItemInfo::new("b", "Bravo").with_hint("2 items"),
				vec![ItemInfo::new("b1", "B-One"), ItemInfo::new("b2", "B-Two")],
			),
		],
		10,
	)
}

fn active(selected_index: usize, submenu_open: bool) -> MenuState {
	MenuState {
		active: true,
		from: 0,
		to: 1,
		selected_index,
		submenu_open,
		..MenuState::default()
	}
}

const VIEWPORT: Rect = Rect::new(0, 0, 80, 24);

#[rstest]
#[case::below(ScreenPos::new(10, 5), 20, 4, Rect::new(10, 6, 20, 4))]
#[case::flips_above(ScreenPos::new(10, 22), 20, 4, Rect::new(10, 18, 20, 4))]
#[case::shifts_left(ScreenPos::new(75, 5), 20, 4, Rect::new(60, 6, 20, 4))]
#[case::clamps_to_larger_side(ScreenPos::new(0, 3), 10, 30, Rect::new(0, 4, 10, 20))]
#[case::caret_below_viewport(ScreenPos::new(0, 50), 10, 3, Rect::new(0, 20, 10, 3))]
#[case::caret_below_viewport_tall_menu(ScreenPos::new(0, 50), 10, 40, Rect::new(0, 0, 10, 23))]
fn menu_placement(#[case] anchor: ScreenPos, #[case] width: u16, #[case] height: u16, #[case] expected: Rect) {
	let placed = place_menu(anchor, width, height, VIEWPORT);
	assert_eq!(placed, expected);
	assert!(placed.bottom() <= VIEWPORT.bottom());
}

#[test]
fn caret_below_short_viewport_stays_inside() {
	let viewport = Rect::new(0, 0, 80, 10);
	let placed = place_menu(ScreenPos::new(0, 50), 10, 3, viewport);
	assert_eq!(placed, Rect::new(0, 6, 10, 3));
	assert!(placed.bottom() <= viewport.bottom());
}

#[test]
fn menu_placement_respects_viewport_origin() {
	let viewport = Rect::new(10, 10, 40, 10);
	assert_eq!(place_menu(ScreenPos::new(45, 12), 12, 3, viewport), Rect::new(38, 13, 12, 3));
}

#[test]
fn submenu_opens_right_then_left() {
	let list = Rect::new(10, 6, 20, 4);
	assert_eq!(place_submenu(list, 1, 12, 2, VIEWPORT), Rect::new(30, 7, 12, 2));

	let list = Rect::new(60, 6, 20, 4);
	assert_eq!(place_submenu(list, 1, 12, 2, VIEWPORT), Rect::new(48, 7, 12, 2));
}

#[test]
fn submenu_shifts_up_at_bottom_edge() {
	let list = Rect::new(10, 20, 20, 4);
	assert_eq!(place_submenu(list, 3, 12, 5, VIEWPORT), Rect::new(30, 19, 12, 5));
}

#[test]
fn inactive_state_has_no_view() {
	assert_eq!(MenuView::build(&MenuState::inactive(), &mixed(), ScreenPos::new(0, 0), VIEWPORT), None);
}

#[test]
fn view_marks_selection_and_groups() {
	let view = MenuView::build(&active(1, false), &mixed(), ScreenPos::new(4, 2), VIEWPORT).unwrap();
	assert_eq!(view.rows.len(), 2);
	assert!(!view.rows[0].selected);
	assert!(view.rows[1].selected);
	assert!(view.rows[1].is_group);
	assert_eq!(view.rows[0].text(), "• Alpha");
	assert_eq!(view.rows[1].text(), "Bravo  2 items ›");
	assert_eq!(view.submenu, None);
	assert_eq!(view.layout.list, Rect::new(4, 3, 18, 2));
}

#[test]
fn view_includes_open_submenu_beside_selected_row() {
	let mut state = active(1, true);
	state.selected_child_index = 1;
	let view = MenuView::build(&state, &mixed(), ScreenPos::new(4, 2), VIEWPORT).unwrap();
	let children = view.submenu.as_ref().unwrap();
	assert_eq!(children.len(), 2);
	assert!(children[1].selected);
	assert_eq!(view.layout.submenu, Some(Rect::new(22, 4, 7, 2)));
}

#[test]
fn empty_list_reserves_placeholder_row() {
	let view = MenuView::build(&active(0, false), &SuggestionList::default(), ScreenPos::new(0, 0), VIEWPORT).unwrap();
	assert!(view.rows.is_empty());
	assert_eq!(view.layout.list.height, 1);
	assert_eq!(view.hit_test(ScreenPos::new(1, 1)), None);
}

#[test]
fn hit_test_maps_rows() {
	let mut state = active(1, true);
	state.selected_child_index = 0;
	let view = MenuView::build(&state, &mixed(), ScreenPos::new(4, 2), VIEWPORT).unwrap();
	assert_eq!(view.hit_test(ScreenPos::new(5, 3)), Some(MenuHit::Item(0)));
	assert_eq!(view.hit_test(ScreenPos::new(5, 4)), Some(MenuHit::Item(1)));
	assert_eq!(view.hit_test(ScreenPos::new(23, 5)), Some(MenuHit::Child(1)));
	assert_eq!(view.hit_test(ScreenPos::new(0, 0)), None);
}

#[test]
fn subscription_drop_unregisters() {
	let events = ViewportEvents::new();
	let seen = Rc::new(Cell::new(0));

	let sub = {
		let seen = seen.clone();
		events.subscribe(move |_| seen.set(seen.get() + 1))
	};
	events.emit(ViewportEvent::Scrolled);
	assert_eq!(seen.get(), 1);
	assert_eq!(events.len(), 1);

	drop(sub);
	events.emit(ViewportEvent::Scrolled);
	assert_eq!(seen.get(), 1);
	assert!(events.is_empty());
}

#[test]
fn listeners_may_unsubscribe_during_delivery() {
	let events = ViewportEvents::new();
	let slot: Rc<RefCell<Option<Subscription>>> = Rc::default();
	let seen = Rc::new(Cell::new(0));

	let sub = {
		let slot = slot.clone();
		let seen = seen.clone();
		events.subscribe(move |_| {
			seen.set(seen.get() + 1);
			slot.borrow_mut().take();
		})
	};
	*slot.borrow_mut() = Some(sub);

	events.emit(ViewportEvent::Resized(VIEWPORT));
	events.emit(ViewportEvent::Resized(VIEWPORT));
	assert_eq!(seen.get(), 1);
	assert!(events.is_empty());
}

#[test]
fn nested_emit_is_queued_and_later_drops_still_unregister() {
	let events = ViewportEvents::new();
	let victim_seen = Rc::new(Cell::new(0));
	let scrolls_seen = Rc::new(Cell::new(0));
	let victim_slot: Rc<RefCell<Option<Subscription>>> = Rc::default();

	let _outer = {
		let events = events.clone();
		let victim_slot = victim_slot.clone();
		let scrolls_seen = scrolls_seen.clone();
		events.clone().subscribe(move |event| match event {
			ViewportEvent::Resized(_) => {
				events.emit(ViewportEvent::Scrolled);
				victim_slot.borrow_mut().take();
			}
			ViewportEvent::Scrolled => scrolls_seen.set(scrolls_seen.get() + 1),
		})
	};
	let victim = {
		let victim_seen = victim_seen.clone();
		events.subscribe(move |_| victim_seen.set(victim_seen.get() + 1))
	};
	*victim_slot.borrow_mut() = Some(victim);

	events.emit(ViewportEvent::Resized(VIEWPORT));
	assert_eq!(scrolls_seen.get(), 1);
	assert_eq!(events.len(), 1);
	let victim_after_drop = victim_seen.get();
	assert!(victim_after_drop <= 1);

	events.emit(ViewportEvent::Scrolled);
	assert_eq!(victim_seen.get(), victim_after_drop);
	assert_eq!(scrolls_seen.get(), 2);
	assert_eq!(events.len(), 1);
}

#[test]
fn subscription_outliving_registry_is_harmless() {
	let events = ViewportEvents::new();
	let sub = events.subscribe(|_| {});
	drop(events);
	drop(sub);
}
