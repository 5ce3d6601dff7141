use super::{given_an_initial_effect, given_no_initial_effect, CounterEvent};
use surface_mvu::Effect;

#[test]
fn given_no_initial_effect_should_render_initial_props() {
    let (_driver, renderer) = given_no_initial_effect();

    assert_eq!(renderer.count(), 1);
    renderer.with_renders(|renders| {
        assert_eq!(renders[0].count, 0);
    });
}

#[test]
fn given_an_initial_increment_effect_should_render_twice() {
    let (mut driver, renderer) = given_an_initial_effect(Effect::just(CounterEvent::Increment));

    driver.process_events();

    assert_eq!(renderer.count(), 2);
    renderer.with_renders(|renders| {
        assert_eq!(renders[0].count, 0);
        assert_eq!(renders[1].count, 1);
    });
}

#[test]
fn given_no_initial_effect_when_props_callback_invoked_should_render_again() {
    let (mut driver, renderer) = given_no_initial_effect();

    renderer.with_renders(|renders| {
        (renders[0].on_increment)();
    });

    driver.process_events();

    // Verify new render was emitted with incremented count
    assert_eq!(renderer.count(), 2);
    renderer.with_renders(|renders| {
        assert_eq!(renders[1].count, 1);
    });
}

#[test]
fn given_a_torn_down_runtime_emitting_should_be_discarded() {
    let (driver, renderer) = given_no_initial_effect();

    drop(driver);

    // The captured props outlive the runtime; their callbacks now point at
    // a closed channel and must degrade to silent no-ops.
    renderer.with_renders(|renders| {
        (renders[0].on_increment)();
    });

    assert_eq!(renderer.count(), 1);
}
