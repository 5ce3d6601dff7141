mod counter;

use surface_mvu::{create_test_spawner, Effect, TestDriver, TestRenderer, TestRuntime};

pub(crate) use counter::*;

mod effect_tests;
mod reduction_tests;

pub(crate) fn given_an_initial_effect(
    effect: Effect<CounterEvent>,
) -> (
    TestDriver<CounterEvent, CounterModel, CounterProps>,
    TestRenderer<CounterProps>,
) {
    create_test_driver_and_renderer(TestCreationParameters {
        initial_effect: effect,
        on_increment_effect: Effect::none(),
    })
}

pub(crate) fn given_no_initial_effect() -> (
    TestDriver<CounterEvent, CounterModel, CounterProps>,
    TestRenderer<CounterProps>,
) {
    create_test_driver_and_renderer(TestCreationParameters {
        initial_effect: Effect::none(),
        on_increment_effect: Effect::none(),
    })
}

// Assumes Effect::none is returned by the component's init function
pub(crate) fn given_an_on_increment_side_effect(
    effect: Effect<CounterEvent>,
) -> (
    TestDriver<CounterEvent, CounterModel, CounterProps>,
    TestRenderer<CounterProps>,
) {
    create_test_driver_and_renderer(TestCreationParameters {
        initial_effect: Effect::none(),
        on_increment_effect: effect,
    })
}

struct TestCreationParameters {
    initial_effect: Effect<CounterEvent>,
    on_increment_effect: Effect<CounterEvent>,
}

fn create_test_driver_and_renderer(
    test_creation_parameters: TestCreationParameters,
) -> (
    TestDriver<CounterEvent, CounterModel, CounterProps>,
    TestRenderer<CounterProps>,
) {
    let renderer = TestRenderer::new();
    let model = CounterModel { count: 0 };

    let mut mock_mount_effects = MockMountEffectsDependency::new();
    mock_mount_effects
        .expect_on_mount()
        .return_once(move || test_creation_parameters.initial_effect);

    // The scenario effect fires on the first increment only; later
    // increments fall through to the no-op expectation, which keeps a
    // self-triggering side effect from looping forever.
    let mut mock_effects = MockEffectsDependency::new();
    mock_effects
        .expect_on_increment_side_effect()
        .times(0..=1)
        .return_once(move || test_creation_parameters.on_increment_effect);
    mock_effects
        .expect_on_increment_side_effect()
        .returning(Effect::none);

    let logic = Box::new(CounterLogic {
        mount_effects: Box::new(mock_mount_effects),
        effects: Box::new(mock_effects),
    });

    let runtime = TestRuntime::new(model, logic, renderer.boxed(), create_test_spawner());
    let driver = runtime.run();

    (driver, renderer)
}
