use super::{given_an_initial_effect, given_an_on_increment_side_effect, CounterEvent};
use surface_mvu::Effect;

#[test]
fn given_a_batch_of_effects_as_initial_effect_should_execute_all_effects() {
    let (mut driver, renderer) = given_an_initial_effect(Effect::batch(vec![
        Effect::just(CounterEvent::Increment),
        Effect::just(CounterEvent::Increment),
        Effect::just(CounterEvent::Increment),
    ]));

    driver.process_events();

    // Should have 4 renders total:
    // 1. Initial render (count=0)
    // 2. After first increment (count=1)
    // 3. After second increment (count=2)
    // 4. After third increment (count=3)
    assert_eq!(renderer.count(), 4);
    renderer.with_renders(|renders| {
        assert_eq!(renders[0].count, 0);
        assert_eq!(renders[1].count, 1);
        assert_eq!(renders[2].count, 2);
        assert_eq!(renders[3].count, 3);
    });
}

#[test]
fn given_a_task_as_initial_effect_should_deliver_its_events() {
    let (mut driver, renderer) = given_an_initial_effect(Effect::task(|emitter| async move {
        emitter.emit(CounterEvent::Increment);
    }));

    driver.process_events();

    assert_eq!(renderer.count(), 2);
    renderer.with_renders(|renders| {
        assert_eq!(renders[0].count, 0);
        assert_eq!(renders[1].count, 1);
    });
}

#[test]
fn given_an_on_increment_side_effect_when_increment_triggered_should_execute_side_effect() {
    let (mut driver, renderer) =
        given_an_on_increment_side_effect(Effect::just(CounterEvent::Increment));

    // Trigger an increment event via props callback
    renderer.with_renders(|renders| {
        (renders[0].on_increment)();
    });

    // Process the increment event and the side effect it queues
    driver.process_events();

    // The side effect triggered another increment, so 3 renders total:
    // 1. Initial render (count=0)
    // 2. After on_increment (count=1)
    // 3. After the side-effect increment (count=2)
    assert_eq!(renderer.count(), 3);
    renderer.with_renders(|renders| {
        assert_eq!(renders[0].count, 0);
        assert_eq!(renders[1].count, 1);
        assert_eq!(renders[2].count, 2);
    });
}
