//! Declarative effect system for describing deferred event processing.

use core::future::Future;
use core::pin::Pin;

use crate::Emitter;

type TaskFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

enum Inner<Event> {
    None,
    Just(Event),
    Task(Box<dyn FnOnce(Emitter<Event>) -> TaskFuture + Send>),
    Batch(Vec<Effect<Event>>),
}

/// Declarative description of events to be processed.
///
/// Effects describe asynchronous or deferred work that will produce events.
/// They are returned from [`Component::init`](crate::Component::init) and
/// [`Component::update`](crate::Component::update) alongside the new model
/// state, and executed by the runtime's [`Spawner`](crate::Spawner).
///
/// # Example
///
/// ```rust
/// use surface_mvu::Effect;
///
/// enum Event {
///     Refresh,
///     Loaded(String),
/// }
///
/// // Trigger a follow-up event
/// let effect = Effect::just(Event::Refresh);
///
/// // Run an async task that reports back through the emitter
/// let effect = Effect::task(|emitter| async move {
///     emitter.emit(Event::Loaded("fresh".to_string()));
/// });
///
/// // Combine multiple effects
/// let effect = Effect::batch(vec![
///     Effect::just(Event::Refresh),
///     Effect::just(Event::Loaded("cached".to_string())),
/// ]);
///
/// // No side effects
/// let effect: Effect<Event> = Effect::none();
/// ```
pub struct Effect<Event>(Inner<Event>);

impl<Event: Send + 'static> Effect<Event> {
    /// Create an empty effect.
    ///
    /// Prefer this when semantically indicating "no side effects".
    pub fn none() -> Self {
        Self(Inner::None)
    }

    /// Create an effect from a single event.
    ///
    /// Useful for triggering immediate follow-up events.
    pub fn just(event: Event) -> Self {
        Self(Inner::Just(event))
    }

    /// Create an effect from an async task.
    ///
    /// The task receives its own [`Emitter`] and may emit any number of
    /// result events when it completes. This is the seam for fetches and
    /// other I/O: the task owns whatever it needs, and the runtime hands
    /// the resulting future to the configured [`Spawner`](crate::Spawner).
    ///
    /// Errors must be handled inside the task (typically by emitting a
    /// failure event); the future's output is `()`.
    pub fn task<F, Fut>(task: F) -> Self
    where
        F: FnOnce(Emitter<Event>) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self(Inner::Task(Box::new(move |emitter| Box::pin(task(emitter)))))
    }

    /// Combine multiple effects into a single effect.
    ///
    /// All effects execute in order; all events from all effects will be
    /// queued for processing.
    pub fn batch(effects: Vec<Effect<Event>>) -> Self {
        Self(Inner::Batch(effects))
    }

    /// Consume the effect, producing the future the runtime will spawn.
    pub(crate) fn execute(self, emitter: &Emitter<Event>) -> TaskFuture {
        let emitter = emitter.clone();
        match self.0 {
            Inner::None => Box::pin(async {}),
            Inner::Just(event) => Box::pin(async move {
                emitter.emit(event);
            }),
            Inner::Task(task) => task(emitter),
            Inner::Batch(effects) => Box::pin(async move {
                for effect in effects {
                    effect.execute(&emitter).await;
                }
            }),
        }
    }
}
