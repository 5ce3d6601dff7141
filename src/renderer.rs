//! Renderer abstraction for rendering Props.

#[cfg(any(test, feature = "testing"))]
use std::sync::Arc;

#[cfg(any(test, feature = "testing"))]
use parking_lot::Mutex;

/// Renderer abstraction for rendering Props.
///
/// Implement this trait to integrate surface-mvu with your rendering system
/// (UI framework, terminal, plain stdout, etc.).
///
/// The [`render`](Self::render) method is called whenever the model changes,
/// receiving fresh Props derived from the current state via
/// [`Component::view`](crate::Component::view).
///
/// # Example
///
/// ```rust
/// use surface_mvu::Renderer;
///
/// struct Props {
///     message: &'static str,
/// }
///
/// struct ConsoleRenderer;
///
/// impl Renderer<Props> for ConsoleRenderer {
///     fn render(&mut self, props: Props) {
///         println!("{}", props.message);
///     }
/// }
/// ```
pub trait Renderer<Props> {
    /// Render the given props.
    ///
    /// Props may contain callbacks (via [`Emitter`](crate::Emitter)) that
    /// can trigger new events.
    fn render(&mut self, props: Props);
}

impl<Props, Render> Renderer<Props> for Box<Render>
where
    Render: Renderer<Props> + ?Sized,
{
    fn render(&mut self, props: Props) {
        (**self).render(props)
    }
}

#[cfg(any(test, feature = "testing"))]
/// Test renderer that captures all rendered Props for assertions.
///
/// Only available with the `testing` feature.
///
/// Use this with [`TestRuntime`](crate::TestRuntime) to capture and inspect
/// Props in integration tests. Clones share the same capture storage.
///
/// # Example
///
/// ```rust
/// use surface_mvu::TestRenderer;
///
/// let renderer = TestRenderer::<String>::new();
/// assert_eq!(renderer.count(), 0);
///
/// renderer.with_renders(|renders| {
///     assert!(renders.is_empty());
/// });
/// ```
pub struct TestRenderer<Props> {
    renders: Arc<Mutex<Vec<Props>>>,
}

#[cfg(any(test, feature = "testing"))]
struct InternalTestRenderer<Props> {
    renders: Arc<Mutex<Vec<Props>>>,
}

#[cfg(any(test, feature = "testing"))]
impl<Props> Renderer<Props> for InternalTestRenderer<Props> {
    fn render(&mut self, props: Props) {
        self.renders.lock().push(props);
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props> Clone for TestRenderer<Props> {
    fn clone(&self) -> Self {
        Self {
            renders: self.renders.clone(),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props> Renderer<Props> for TestRenderer<Props> {
    fn render(&mut self, props: Props) {
        self.renders.lock().push(props);
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props: 'static + Send> Default for TestRenderer<Props> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props: 'static + Send> TestRenderer<Props> {
    pub fn new() -> Self {
        Self {
            renders: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a boxed renderer to pass to the runtime.
    ///
    /// The returned renderer shares the same capture storage as this
    /// TestRenderer, so you can use [`with_renders`](Self::with_renders) to
    /// inspect captured Props.
    pub fn boxed(&self) -> Box<dyn Renderer<Props> + Send> {
        Box::new(InternalTestRenderer {
            renders: self.renders.clone(),
        })
    }

    /// Get the number of renders that have occurred.
    pub fn count(&self) -> usize {
        self.renders.lock().len()
    }

    /// Access the captured renders with a closure.
    ///
    /// The closure receives a reference to the Vec of all captured Props.
    /// This allows you to make assertions on Props emissions or execute
    /// callbacks for further testing (for example, pressing a rendered
    /// button node).
    pub fn with_renders<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Vec<Props>) -> R,
    {
        let renders = self.renders.lock();
        f(&renders)
    }
}
