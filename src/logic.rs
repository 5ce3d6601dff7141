//! Component trait defining the MVU contract.

use crate::{Effect, Emitter};

/// Component trait defining the MVU contract.
///
/// Implementations must provide three pure functions:
/// - [`init`](Self::init): Initialize the model and produce mount-time effects
/// - [`update`](Self::update): Transform (Event, Model) → (Model, Effect)
/// - [`view`](Self::view): Derive Props from Model with event emitter capability
///
/// See the [crate-level documentation](crate) for a complete example.
pub trait Component<Event: Send, Model, Props> {
    /// Initialize the component from an initial model with effects and state
    /// changes as needed.
    ///
    /// This is called exactly once, when the runtime starts — it is the
    /// mount point of the component. Use it to set up initial state and
    /// trigger any one-time work such as an initial fetch.
    ///
    /// # Returns
    ///
    /// A tuple of `(Model, Effect<Event>)` containing the initialized model
    /// and any effects to process during startup.
    fn init(&self, model: Model) -> (Model, Effect<Event>);

    /// Reduce an event to an updated model and side effects.
    ///
    /// This function takes an event and the current model, returning
    /// the new model and any effects to process. All state changes must
    /// happen through this function.
    ///
    /// # Returns
    ///
    /// A tuple of `(Model, Effect<Event>)` containing the updated model
    /// and any effects to process.
    fn update(&self, event: Event, model: &Model) -> (Model, Effect<Event>);

    /// Reduce to Props from the current model.
    ///
    /// This function creates a renderable representation (Props) from
    /// the model. The provided [`Emitter`] allows Props to contain callbacks
    /// that can trigger new events.
    ///
    /// # Returns
    ///
    /// Props derived from the model, ready for rendering via
    /// [`Renderer::render`](crate::Renderer::render).
    fn view(&self, model: &Model, emitter: &Emitter<Event>) -> Props;
}

impl<Event, Model, Props, Logic> Component<Event, Model, Props> for Box<Logic>
where
    Event: Send,
    Logic: Component<Event, Model, Props> + ?Sized,
{
    fn init(&self, model: Model) -> (Model, Effect<Event>) {
        (**self).init(model)
    }

    fn update(&self, event: Event, model: &Model) -> (Model, Effect<Event>) {
        (**self).update(event, model)
    }

    fn view(&self, model: &Model, emitter: &Emitter<Event>) -> Props {
        (**self).view(model, emitter)
    }
}
