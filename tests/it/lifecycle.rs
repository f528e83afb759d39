//! Attach, re-registration and teardown.

use slidedeck::carousel::event::{Control, InputEvent, Key, PointerSource};
use slidedeck::carousel::host::{Notification, Point};
use slidedeck::{Carousel, CarouselConfig, CarouselError};

use crate::helpers::{Effect, HostBuilder, Session};

#[test]
fn a_host_without_slides_is_refused() {
    let mut host = HostBuilder::new().slides(0).build();
    let err = Carousel::attach(&mut host, CarouselConfig::default()).unwrap_err();
    assert_eq!(err, CarouselError::NoSlides);
    assert_eq!(err.to_string(), "carousel has no slides");
    assert!(host.effects.is_empty());
}

#[test]
fn deep_link_opens_expanded_and_announces_once() {
    let mut s = HostBuilder::new().slides(4).deep_link().attach();
    assert!(s.carousel.is_expanded());
    s.advance(0);
    s.advance(16);
    assert_eq!(s.host.notifications(), 1);
    assert!(s.host.effects.contains(&Effect::Focus));
    assert!(s.host.effects.contains(&Effect::Focusable(true)));
}

#[test]
fn every_expansion_is_announced_exactly_once() {
    let mut s = HostBuilder::new().slides(3).attach();
    s.expand();
    s.click_control(Control::CollapseTrigger);
    s.advance(0);
    s.expand();
    s.advance(0);
    assert_eq!(
        s.host
            .effects
            .iter()
            .filter(|e| **e == Effect::Notify(Notification::Expanded))
            .count(),
        2
    );
}

#[test]
fn missing_controls_degrade_gracefully() {
    let mut s = HostBuilder::new().slides(3).without_controls().attach();
    assert!(!s.host.effects.iter().any(|e| matches!(e, Effect::Dot(..) | Effect::Arrow(..))));

    assert!(!s.click_control(Control::NextArrow).is_prevented());
    assert!(!s.click_control(Control::ExpandTrigger).is_prevented());
    assert_eq!(s.index(), 0);

    s.expand();
    s.key(Key::ArrowRight);
    assert_eq!(s.index(), 1);
}

#[test]
fn re_registering_keeps_a_single_set_of_listeners() {
    let s = HostBuilder::new().slides(3).attach();
    let count = s.carousel.listeners().count();
    let again = s.carousel.register();
    assert!(again.is_empty());
    assert_eq!(s.carousel.listeners().count(), count);
}

#[test]
fn after_teardown_no_input_has_any_effect() {
    let mut s = HostBuilder::new().slides(5).attach();
    s.expand();
    s.key(Key::ArrowRight);
    s.tear_down();
    assert_eq!(s.carousel.listeners().count(), 0);

    let effects = s.host.effects.len();
    let index = s.index();

    let source = PointerSource::Mouse;
    s.send(InputEvent::PointerDown {
        source,
        position: Point::new(300.0, 100.0),
    });
    s.send(InputEvent::PointerMove {
        source,
        position: Point::new(50.0, 100.0),
    });
    s.send(InputEvent::PointerUp { source });
    assert!(!s.wheel(40.0).is_prevented());
    assert!(!s.key(Key::ArrowRight).is_prevented());
    assert!(!s.key(Key::Escape).is_prevented());
    s.click(200.0, 900.0);
    s.click_control(Control::Dot(4));
    s.scroll_to(700.0);
    s.advance(1000);

    assert_eq!(s.host.effects.len(), effects);
    assert_eq!(s.index(), index);
    assert!(s.carousel.is_expanded());
    assert!(!s.carousel.state().is_dragging());
}

#[test]
fn timers_pending_at_teardown_never_fire() {
    let mut s = HostBuilder::new().slides(5).attach();
    s.expand();
    s.drag(300.0, 100.0);
    s.tear_down();
    let effects = s.host.effects.len();
    s.advance(1000);
    assert_eq!(s.index(), 0);
    assert_eq!(s.host.effects.len(), effects);
}

#[test]
fn custom_timing_is_honoured() {
    let host = HostBuilder::new().slides(4).build();
    let config = CarouselConfig::default()
        .with_gesture_gap(std::time::Duration::from_millis(50))
        .with_animation_duration(std::time::Duration::from_millis(80));
    let mut s = Session::attach(host, config);
    s.expand();

    s.wheel(5.0);
    s.advance(50);
    s.wheel(5.0);
    assert_eq!(s.index(), 2);

    s.drag(300.0, 100.0);
    s.advance(80);
    assert_eq!(s.index(), 3);
}

#[test]
fn collapsing_before_the_first_frame_still_announces() {
    let mut s = HostBuilder::new().slides(3).attach();
    s.carousel.expand(&mut s.host);
    s.carousel.collapse(&mut s.host);
    s.advance(0);
    assert_eq!(s.host.notifications(), 1);
    assert!(!s.host.effects.contains(&Effect::Focus));

    s.advance(16);
    assert_eq!(s.host.notifications(), 1);
}
