//! Greeting component: a one-way text toggle.

use crate::components::output::output;
use crate::surface::{Node, Surface};
use crate::{Component, Effect, Emitter};

/// Events produced by [`Greeting`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GreetingEvent {
    ChangeTextClicked,
}

/// State held by [`Greeting`].
///
/// `changed` starts out `false`. The transition is one-way: once the button
/// has been pressed it stays `true` for the life of the component, and
/// further presses leave the value untouched.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GreetingModel {
    pub changed: bool,
}

/// A greeting with a status line that flips once, on button press.
///
/// Renders a "Hello World!" heading in every state. While unchanged, the
/// status line reads "It's good to see you!"; after the button is pressed
/// it reads "Changed!" instead. Both status lines go through the
/// [`output`] child.
pub struct Greeting;

impl Component<GreetingEvent, GreetingModel, Surface> for Greeting {
    fn init(&self, model: GreetingModel) -> (GreetingModel, Effect<GreetingEvent>) {
        (model, Effect::none())
    }

    fn update(
        &self,
        event: GreetingEvent,
        _model: &GreetingModel,
    ) -> (GreetingModel, Effect<GreetingEvent>) {
        match event {
            GreetingEvent::ChangeTextClicked => {
                (GreetingModel { changed: true }, Effect::none())
            }
        }
    }

    fn view(&self, model: &GreetingModel, emitter: &Emitter<GreetingEvent>) -> Surface {
        let emitter = emitter.clone();

        let status = if model.changed {
            output("Changed!")
        } else {
            output("It's good to see you!")
        };

        Surface::new(vec![
            Node::heading("Hello World!"),
            status,
            Node::button("Change Text!", move || {
                emitter.emit(GreetingEvent::ChangeTextClicked);
            }),
        ])
    }
}
