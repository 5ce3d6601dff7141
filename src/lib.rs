//! A lightweight Model-View-Update (MVU) runtime with a queryable render
//! surface and built-in testing utilities.
//!
//! Components declare three pure functions - `init`, `update`, `view` - and
//! the runtime drives them: events flow through an [`Emitter`], state
//! changes happen only in `update`, and side effects are declarative
//! [`Effect`] values executed on whatever async runtime the [`Spawner`] is
//! wired to.
//!
//! Views can produce any Props type. The built-in components render a
//! [`Surface`]: a tree of text and button primitives that tests query by
//! text or role and interact with through simulated presses, while a
//! [`TestRuntime`] processes the resulting events deterministically.
//!
//! ## Example
//!
//! ```rust
//! use surface_mvu::{Component, Effect, Emitter, Renderer, Runtime};
//!
//! #[derive(Clone)]
//! enum Event { Pressed }
//!
//! #[derive(Clone)]
//! struct Model { presses: u32 }
//!
//! struct Props { presses: u32, on_press: Box<dyn Fn() + Send> }
//!
//! struct Counter;
//!
//! impl Component<Event, Model, Props> for Counter {
//!     fn init(&self, model: Model) -> (Model, Effect<Event>) {
//!         (model, Effect::none())
//!     }
//!
//!     fn update(&self, event: Event, model: &Model) -> (Model, Effect<Event>) {
//!         match event {
//!             Event::Pressed => (Model { presses: model.presses + 1 }, Effect::none()),
//!         }
//!     }
//!
//!     fn view(&self, model: &Model, emitter: &Emitter<Event>) -> Props {
//!         let emitter = emitter.clone();
//!         Props {
//!             presses: model.presses,
//!             on_press: Box::new(move || emitter.emit(Event::Pressed)),
//!         }
//!     }
//! }
//!
//! struct ConsoleRenderer;
//!
//! impl Renderer<Props> for ConsoleRenderer {
//!     fn render(&mut self, props: Props) {
//!         println!("{} presses", props.presses);
//!     }
//! }
//!
//! // Create a spawner for your async runtime (no heap allocation needed)
//! let spawner = |future: core::pin::Pin<Box<dyn core::future::Future<Output = ()> + Send>>| {
//!     // Spawn the future on your chosen runtime
//!     // e.g., tokio::spawn(future); or async_std::task::spawn(future);
//!     drop(future);
//! };
//!
//! let runtime = Runtime::new(Model { presses: 0 }, Counter, ConsoleRenderer, spawner);
//! // Await `runtime.run()` on your executor of choice to start the loop.
//! # drop(runtime);
//! ```

// Module declarations
mod components;
mod effect;
mod emitter;
mod gateway;
mod logic;
mod renderer;
mod runtime;
mod surface;

// Public re-exports
pub use components::greeting::{Greeting, GreetingEvent, GreetingModel};
pub use components::output::output;
pub use components::posts::{LoadState, PostList, PostListEvent, PostListModel};
pub use effect::Effect;
pub use emitter::Emitter;
pub use gateway::{FetchError, HttpPostsGateway, Post, PostsGateway, POSTS_URL};
pub use logic::Component;
pub use renderer::Renderer;
pub use runtime::{Runtime, Spawner};
pub use surface::{Node, Role, Surface};

// Test utilities (only available with 'testing' feature or during tests)
#[cfg(any(test, feature = "testing"))]
pub use renderer::TestRenderer;
#[cfg(any(test, feature = "testing"))]
pub use runtime::{create_test_spawner, TestDriver, TestRuntime};
