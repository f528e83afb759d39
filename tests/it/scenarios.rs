//! End-to-end interaction scenarios.

use slidedeck::carousel::event::{Control, InputEvent, Key, PointerSource};
use slidedeck::carousel::host::{Overlay, Point, RootFlag, SlideFlag};

use crate::helpers::{Effect, HostBuilder};

#[test]
fn walking_five_slides_stops_at_the_end() {
    let mut s = HostBuilder::new().slides(5).attach();
    assert_eq!(s.index(), 0);
    for _ in 0..4 {
        s.click_control(Control::NextArrow);
    }
    assert_eq!(s.index(), 4);

    let before = s.host.effects.len();
    s.click_control(Control::NextArrow);
    assert_eq!(s.index(), 4);
    assert_eq!(s.host.effects.len(), before);
    assert_eq!(s.host.active_slides(), vec![4]);
}

#[test]
fn expanding_always_starts_at_the_first_slide() {
    let mut s = HostBuilder::new().slides(5).attach();
    s.click_control(Control::Dot(3));
    assert_eq!(s.index(), 3);

    s.expand();
    assert_eq!(s.index(), 0);
    assert_eq!(s.host.active_slides(), vec![0]);
    assert!(s.host.effects.contains(&Effect::Root(RootFlag::Expanded, true)));
    assert_eq!(s.host.notifications(), 1);
}

#[test]
fn drag_past_a_quarter_snaps_to_the_next_slide() {
    let mut s = HostBuilder::new().slides(5).track_width(400.0).attach();
    s.expand();

    s.send(InputEvent::PointerDown {
        source: PointerSource::Mouse,
        position: Point::new(300.0, 100.0),
    });
    s.send(InputEvent::PointerMove {
        source: PointerSource::Mouse,
        position: Point::new(150.0, 100.0),
    });
    assert_eq!(s.carousel.state().start_x(), Some(300.0));
    assert_eq!(s.carousel.state().current_x(), Some(150.0));
    assert_eq!(s.carousel.state().adjacent_index(), Some(1));

    let preview = s.host.effects.iter().rev().find_map(|e| match e {
        Effect::SlideStyle(1, style) => Some(*style),
        _ => None,
    });
    let preview = preview.expect("adjacent slide styled during drag");
    assert_eq!(preview.opacity, 0.75);
    assert_eq!(preview.translate_x, 100.0);

    s.send(InputEvent::PointerUp {
        source: PointerSource::Mouse,
    });
    assert_eq!(s.index(), 0, "commit waits for the animation");
    s.advance(250);
    assert_eq!(s.index(), 1);
    assert_eq!(s.host.active_slides(), vec![1]);
    assert!(s.carousel.state().drag.is_idle());
}

#[test]
fn short_drag_never_changes_the_slide() {
    let mut s = HostBuilder::new().slides(5).attach();
    s.expand();
    s.drag(300.0, 201.0);
    s.advance(1000);
    assert_eq!(s.index(), 0);
    assert_eq!(s.host.active_slides(), vec![0]);
}

#[test]
fn cancelled_drag_reverts_even_when_far() {
    let mut s = HostBuilder::new().slides(5).attach();
    s.expand();
    s.send(InputEvent::PointerDown {
        source: PointerSource::Touch,
        position: Point::new(350.0, 100.0),
    });
    s.send(InputEvent::PointerMove {
        source: PointerSource::Touch,
        position: Point::new(10.0, 100.0),
    });
    s.send(InputEvent::PointerCancel {
        source: PointerSource::Touch,
    });
    s.advance(300);
    assert_eq!(s.index(), 0);
}

#[test]
fn drag_progress_grows_with_distance_and_saturates() {
    let mut s = HostBuilder::new().slides(3).attach();
    s.expand();
    s.send(InputEvent::PointerDown {
        source: PointerSource::Mouse,
        position: Point::new(390.0, 100.0),
    });
    let mut last = 0.0;
    for x in (0..=380).rev().step_by(20) {
        s.send(InputEvent::PointerMove {
            source: PointerSource::Mouse,
            position: Point::new(f64::from(x), 100.0),
        });
        let Some(Effect::SlideStyle(1, style)) = s.host.effects.last().cloned() else {
            panic!("adjacent slide not styled at x={x}");
        };
        assert!((0.0..=1.0).contains(&style.opacity));
        assert!(style.opacity >= last);
        last = style.opacity;
    }
    assert_eq!(last, 1.0);
}

#[test]
fn scrolling_half_the_panel_collapses_it() {
    let mut s = HostBuilder::new().slides(3).content_height(800.0).attach();
    s.expand();
    assert_eq!(s.carousel.state().expanded_track_height(), Some(800.0));

    s.scroll_to(200.0);
    assert!(s.carousel.state().is_scroll_dismissing());
    assert_eq!(s.host.last_height(), Some(Some(600.0)));

    s.scroll_to(500.0);
    assert!(!s.carousel.is_expanded());
    assert!(s.host.effects.contains(&Effect::Root(RootFlag::Expanded, false)));
    assert_eq!(s.host.last_height(), Some(None));

    s.advance(0);
    assert_eq!(s.host.effects.last(), Some(&Effect::ScrollToTop));
}

#[test]
fn scroll_is_measured_from_where_expansion_began() {
    let mut s = HostBuilder::new().slides(3).scroll_y(1000.0).attach();
    s.expand();
    s.scroll_to(1300.0);
    assert!(s.carousel.is_expanded());
    s.scroll_to(900.0);
    assert!(!s.carousel.state().is_scroll_dismissing());
    assert_eq!(s.host.last_height(), Some(None));
}

#[test]
fn wheel_burst_moves_one_slide() {
    let mut s = HostBuilder::new().slides(5).attach();
    s.expand();
    for _ in 0..5 {
        assert!(s.wheel(8.0).is_prevented());
        s.advance(40);
    }
    assert_eq!(s.index(), 1);

    s.advance(200);
    s.wheel(8.0);
    assert_eq!(s.index(), 2);
}

#[test]
fn wheel_at_the_last_slide_lets_the_page_scroll() {
    let mut s = HostBuilder::new().slides(2).attach();
    s.expand();
    assert!(s.wheel(10.0).is_prevented());
    s.advance(500);
    assert!(!s.wheel(10.0).is_prevented());
    assert_eq!(s.index(), 1);
}

#[test]
fn keyboard_moves_and_escape_collapses() {
    let mut s = HostBuilder::new().slides(3).attach();
    assert!(!s.key(Key::ArrowRight).is_prevented());
    s.expand();
    s.key(Key::ArrowRight);
    s.key(Key::ArrowRight);
    s.key(Key::ArrowRight);
    assert_eq!(s.index(), 2);
    assert!(s.host.effects.contains(&Effect::SlideFlag(2, SlideFlag::EnterFromRight, true)));

    assert!(s.key(Key::Escape).is_prevented());
    assert!(!s.carousel.is_expanded());
}

#[test]
fn outside_click_collapses_but_overlays_do_not() {
    let mut s = HostBuilder::new()
        .slides(3)
        .overlay(Overlay::ThemeToggle, (500.0, 0.0), (600.0, 40.0))
        .attach();
    s.expand();

    s.click(550.0, 20.0);
    assert!(s.carousel.is_expanded());
    s.click(200.0, 200.0);
    assert!(s.carousel.is_expanded());

    s.click(200.0, 700.0);
    assert!(!s.carousel.is_expanded());
}

#[test]
fn release_click_is_swallowed_by_the_cooldown() {
    let mut s = HostBuilder::new().slides(3).attach();
    s.expand();
    s.drag(300.0, 280.0);
    s.click(200.0, 700.0);
    assert!(s.carousel.is_expanded());

    s.advance(100);
    s.click(200.0, 700.0);
    assert!(!s.carousel.is_expanded());
}

#[test]
fn escape_mid_drag_does_not_block_later_outside_clicks() {
    let mut s = HostBuilder::new().slides(3).attach();
    s.expand();

    let source = PointerSource::Mouse;
    s.send(InputEvent::PointerDown {
        source,
        position: Point::new(300.0, 100.0),
    });
    s.send(InputEvent::PointerMove {
        source,
        position: Point::new(250.0, 100.0),
    });
    assert!(s.key(Key::Escape).is_prevented());
    s.send(InputEvent::PointerUp { source });
    assert!(!s.carousel.is_expanded());

    s.advance(10_000);
    s.expand();
    s.advance(10_000);
    s.click(200.0, 700.0);
    assert!(!s.carousel.is_expanded());
}
