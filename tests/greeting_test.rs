use pretty_assertions::assert_eq;
use surface_mvu::{
    create_test_spawner, Greeting, GreetingEvent, GreetingModel, Role, Surface, TestDriver,
    TestRenderer, TestRuntime,
};

fn render_greeting() -> (
    TestDriver<GreetingEvent, GreetingModel, Surface>,
    TestRenderer<Surface>,
) {
    let renderer = TestRenderer::new();
    let runtime = TestRuntime::new(
        GreetingModel::default(),
        Box::new(Greeting),
        renderer.boxed(),
        create_test_spawner(),
    );
    let driver = runtime.run();

    (driver, renderer)
}

#[test]
fn renders_hello_world_as_a_text() {
    let (_driver, renderer) = render_greeting();

    renderer.with_renders(|renders| {
        assert!(renders[0].query_by_text_contains("hello world").is_some());
    });
}

#[test]
fn renders_good_to_see_you_if_the_button_was_not_pressed() {
    let (_driver, renderer) = render_greeting();

    renderer.with_renders(|renders| {
        let status = renders[0].get_by_text_contains("good to see you");
        assert_eq!(status.role(), Role::Paragraph);
        assert!(renders[0].query_by_text("Changed!").is_none());
    });
}

#[test]
fn renders_changed_if_the_button_was_pressed() {
    let (mut driver, renderer) = render_greeting();

    renderer.with_renders(|renders| {
        assert!(renders[0].get_by_role(Role::Button).press());
    });
    driver.process_events();

    renderer.with_renders(|renders| {
        let latest = renders.last().unwrap();
        assert!(latest.query_by_text("Changed!").is_some());
        // The greeting itself stays up in every state
        assert!(latest.query_by_text_contains("hello world").is_some());
    });
}

#[test]
fn does_not_render_good_to_see_you_if_the_button_was_pressed() {
    let (mut driver, renderer) = render_greeting();

    renderer.with_renders(|renders| {
        renders[0].get_by_role(Role::Button).press();
    });
    driver.process_events();

    renderer.with_renders(|renders| {
        let latest = renders.last().unwrap();
        assert!(latest.query_by_text_contains("good to see you").is_none());
    });
}

#[test]
fn pressing_the_button_twice_renders_the_same_output() {
    let (mut driver, renderer) = render_greeting();

    renderer.with_renders(|renders| {
        renders[0].get_by_role(Role::Button).press();
    });
    driver.process_events();
    let after_one_press = renderer.with_renders(|renders| renders.last().unwrap().texts());

    renderer.with_renders(|renders| {
        renders.last().unwrap().get_by_role(Role::Button).press();
    });
    driver.process_events();
    let after_two_presses = renderer.with_renders(|renders| renders.last().unwrap().texts());

    assert_eq!(after_one_press, after_two_presses);
}
