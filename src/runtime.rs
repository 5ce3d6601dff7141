//! The MVU runtime that orchestrates the event loop.

use core::future::Future;
use core::pin::Pin;

use flume::Receiver;

use crate::{Component, Emitter, Renderer};

/// A spawner trait for executing effect futures on an async runtime.
///
/// This abstraction allows you to use whatever concurrency model you want
/// (tokio, async-std, a blocking executor in tests, etc.).
///
/// Function pointers and closures automatically implement this trait via the
/// blanket implementation.
pub trait Spawner {
    /// Spawn a future on the async runtime.
    fn spawn(&self, future: Pin<Box<dyn Future<Output = ()> + Send>>);
}

/// Implement Spawner for any callable type that matches the signature.
///
/// This includes function pointers, closures, and function items.
impl<F> Spawner for F
where
    F: Fn(Pin<Box<dyn Future<Output = ()> + Send>>),
{
    fn spawn(&self, future: Pin<Box<dyn Future<Output = ()> + Send>>) {
        self(future)
    }
}

/// The MVU runtime that orchestrates the event loop.
///
/// This is the core of the framework. It:
/// 1. Initializes the Model and mount-time Effects via [`Component::init`]
/// 2. Processes events through [`Component::update`]
/// 3. Reduces the Model to Props via [`Component::view`]
/// 4. Delivers Props to the [`Renderer`] for rendering
///
/// The runtime creates a single [`Emitter`] that can send events from any
/// thread. Events are queued via a lock-free channel and processed
/// sequentially on the task where [`Runtime::run`] is awaited.
///
/// For testing with manual control, use [`TestRuntime`] with a
/// [`crate::TestRenderer`].
///
/// See the [crate-level documentation](crate) for a complete example.
///
/// # Type Parameters
///
/// * `Event` - The event type for your component
/// * `Model` - The model/state type for your component
/// * `Props` - The props type produced by the view function
/// * `Logic` - The component implementation type (implements [`Component`])
/// * `Render` - The renderer implementation type (implements [`Renderer`])
/// * `Spawn` - The spawner implementation type (implements [`Spawner`])
pub struct Runtime<Event, Model, Props, Logic, Render, Spawn>
where
    Event: Send,
    Model: Clone,
    Logic: Component<Event, Model, Props>,
    Render: Renderer<Props>,
    Spawn: Spawner,
{
    logic: Logic,
    renderer: Render,
    event_receiver: Receiver<Event>,
    model: Model,
    emitter: Emitter<Event>,
    spawner: Spawn,
    _props: core::marker::PhantomData<Props>,
}

impl<Event, Model, Props, Logic, Render, Spawn>
    Runtime<Event, Model, Props, Logic, Render, Spawn>
where
    Event: Send + 'static,
    Model: Clone + 'static,
    Props: 'static,
    Logic: Component<Event, Model, Props>,
    Render: Renderer<Props>,
    Spawn: Spawner,
{
    /// Create a new runtime.
    ///
    /// The runtime will not be started until [`Runtime::run`] is called.
    ///
    /// # Arguments
    ///
    /// * `init_model` - The initial state
    /// * `logic` - Component implementation
    /// * `renderer` - Platform rendering implementation for rendering Props
    /// * `spawner` - Spawner to execute async effects on your chosen runtime
    pub fn new(init_model: Model, logic: Logic, renderer: Render, spawner: Spawn) -> Self {
        let (event_sender, event_receiver) = flume::unbounded();
        let emitter = Emitter::new(event_sender);

        Runtime {
            logic,
            renderer,
            event_receiver,
            model: init_model,
            emitter,
            spawner,
            _props: core::marker::PhantomData,
        }
    }

    /// Initialize the runtime and run the event processing loop.
    ///
    /// - Uses [`Component::init`] to commit the mounted model and enqueue
    ///   initial side effects.
    /// - Reduces the mounted Model to Props via [`Component::view`].
    /// - Renders the initial Props.
    /// - Processes events from the channel in a loop.
    ///
    /// This is an async function that runs the event loop. You can spawn it
    /// on your chosen runtime, or await it directly.
    ///
    /// Events can be emitted from any thread via the [`Emitter`], but are
    /// always processed sequentially where this future is awaited.
    pub async fn run(&mut self) {
        let (init_model, init_effect) = self.logic.init(self.model.clone());
        self.model = init_model;

        let initial_props = self.logic.view(&self.model, &self.emitter);
        self.renderer.render(initial_props);

        // Execute the mount effect by spawning it
        let future = init_effect.execute(&self.emitter);
        self.spawner.spawn(future);

        tracing::debug!("runtime started");

        // Event processing loop
        loop {
            match self.event_receiver.recv_async().await {
                Ok(event) => self.step(event),
                Err(_) => break, // Channel closed
            }
        }

        tracing::debug!("event channel closed; runtime stopped");
    }

    fn step(&mut self, event: Event) {
        // Update model with event
        let (new_model, effect) = self.logic.update(event, &self.model);

        // Reduce to props and render
        let props = self.logic.view(&new_model, &self.emitter);
        self.renderer.render(props);

        // Commit model
        self.model = new_model;
        tracing::trace!("event applied; new props rendered");

        // Execute the effect
        let future = effect.execute(&self.emitter);
        self.spawner.spawn(future);
    }

    #[cfg(any(test, feature = "testing"))]
    fn process_queued_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.step(event);
        }
    }
}

#[cfg(any(test, feature = "testing"))]
/// Test spawner function that executes futures synchronously.
///
/// This blocks on the future immediately rather than spawning it on an async
/// runtime.
pub fn test_spawner_fn(fut: Pin<Box<dyn Future<Output = ()> + Send>>) {
    // Execute the future synchronously for deterministic testing
    futures::executor::block_on(fut);
}

#[cfg(any(test, feature = "testing"))]
/// Creates a test spawner that executes futures synchronously.
///
/// This is useful for testing - it blocks on the future immediately rather
/// than spawning it on an async runtime. Use this with [`TestRuntime`] in
/// test scenarios.
///
/// Returns a function pointer that can be passed directly to runtime
/// constructors without heap allocation.
pub fn create_test_spawner() -> fn(Pin<Box<dyn Future<Output = ()> + Send>>) {
    test_spawner_fn
}

#[cfg(any(test, feature = "testing"))]
type BoxedRuntime<Event, Model, Props> = Runtime<
    Event,
    Model,
    Props,
    Box<dyn Component<Event, Model, Props> + Send>,
    Box<dyn Renderer<Props> + Send>,
    fn(Pin<Box<dyn Future<Output = ()> + Send>>),
>;

#[cfg(any(test, feature = "testing"))]
/// Test runtime driver for manual event processing control.
///
/// Only available with the `testing` feature or during tests.
///
/// Returned by [`TestRuntime::run`]. Provides methods to process the event
/// queue and inspect the committed model for precise control in tests.
///
/// See [`TestRuntime`] for usage.
pub struct TestDriver<Event, Model, Props>
where
    Event: Send + 'static,
    Model: Clone + 'static,
    Props: 'static,
{
    runtime: BoxedRuntime<Event, Model, Props>,
}

#[cfg(any(test, feature = "testing"))]
impl<Event, Model, Props> TestDriver<Event, Model, Props>
where
    Event: Send + 'static,
    Model: Clone + 'static,
    Props: 'static,
{
    /// Process all queued events.
    ///
    /// This processes events until the queue is empty. Call this after
    /// emitting events (e.g. by pressing a rendered button) to drive the
    /// event loop in tests.
    pub fn process_events(&mut self) {
        self.runtime.process_queued_events();
    }

    /// The model as committed by the most recent processed event.
    ///
    /// Useful for asserting on state that the view deliberately does not
    /// render, such as an error state held after a failed fetch.
    pub fn model(&self) -> &Model {
        &self.runtime.model
    }
}

#[cfg(any(test, feature = "testing"))]
/// Test runtime for MVU with manual event processing control.
///
/// Only available with the `testing` feature or during tests.
///
/// Unlike [`Runtime`], this runtime does not automatically process events
/// when they are emitted. Instead, tests must manually call
/// [`process_events`](TestDriver::process_events) on the returned driver to
/// process the event queue.
///
/// This provides precise control over event timing in tests.
///
/// ```rust
/// use surface_mvu::{
///     create_test_spawner, Greeting, GreetingEvent, GreetingModel, Role, Surface,
///     TestRenderer, TestRuntime,
/// };
///
/// let renderer = TestRenderer::new();
/// let runtime = TestRuntime::<GreetingEvent, GreetingModel, Surface>::new(
///     GreetingModel::default(),
///     Box::new(Greeting),
///     renderer.boxed(),
///     create_test_spawner(),
/// );
/// let mut driver = runtime.run();
///
/// renderer.with_renders(|renders| {
///     renders[0].get_by_role(Role::Button).press();
/// });
/// driver.process_events(); // Manually process the press
///
/// assert_eq!(renderer.count(), 2);
/// ```
pub struct TestRuntime<Event, Model, Props>
where
    Event: Send + 'static,
    Model: Clone + 'static,
    Props: 'static,
{
    runtime: BoxedRuntime<Event, Model, Props>,
}

#[cfg(any(test, feature = "testing"))]
impl<Event, Model, Props> TestRuntime<Event, Model, Props>
where
    Event: Send + 'static,
    Model: Clone + 'static,
    Props: 'static,
{
    /// Create a new test runtime.
    ///
    /// Creates an emitter that enqueues events without automatically
    /// processing them.
    ///
    /// # Arguments
    ///
    /// * `init_model` - The initial state
    /// * `logic` - Component implementation
    /// * `renderer` - Rendering implementation, typically
    ///   [`TestRenderer::boxed`](crate::TestRenderer::boxed)
    /// * `spawner` - Spawner to execute async effects, typically
    ///   [`create_test_spawner`]
    pub fn new(
        init_model: Model,
        logic: Box<dyn Component<Event, Model, Props> + Send>,
        renderer: Box<dyn Renderer<Props> + Send>,
        spawner: fn(Pin<Box<dyn Future<Output = ()> + Send>>),
    ) -> Self {
        let (event_sender, event_receiver) = flume::unbounded();

        TestRuntime {
            runtime: Runtime {
                logic,
                renderer,
                event_receiver,
                model: init_model,
                emitter: Emitter::new(event_sender),
                spawner,
                _props: core::marker::PhantomData,
            },
        }
    }

    /// Initializes the runtime and returns a driver for manual event
    /// processing.
    ///
    /// This processes mount effects and renders the initial state, then
    /// returns a [`TestDriver`] that provides manual control over event
    /// processing.
    pub fn run(mut self) -> TestDriver<Event, Model, Props> {
        let (init_model, init_effect) = self.runtime.logic.init(self.runtime.model.clone());
        self.runtime.model = init_model;

        let initial_props = self
            .runtime
            .logic
            .view(&self.runtime.model, &self.runtime.emitter);
        self.runtime.renderer.render(initial_props);

        // Execute the mount effect by spawning it
        let future = init_effect.execute(&self.runtime.emitter);
        self.runtime.spawner.spawn(future);

        TestDriver {
            runtime: self.runtime,
        }
    }
}
