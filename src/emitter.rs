//! Event emitter for embedding callbacks in Props.

/// Event emitter that can be embedded in Props.
///
/// Clone this handle to create callbacks in your Props that can trigger
/// events when invoked (e.g., by user interaction).
///
/// `Emitter` wraps an unbounded channel sender, making it cheap to clone
/// and thread-safe without any locking overhead.
///
/// Events emitted after the owning runtime has been torn down are silently
/// discarded. A late-arriving effect result (for example, a fetch that
/// resolves after the component is gone) is therefore a harmless no-op.
pub struct Emitter<Event>(pub(crate) flume::Sender<Event>);

impl<Event> Clone for Emitter<Event> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<Event: Send> Emitter<Event> {
    /// Create a new emitter from a channel sender.
    pub(crate) fn new(sender: flume::Sender<Event>) -> Self {
        Self(sender)
    }

    /// Emit an event.
    ///
    /// This queues the event for processing by the runtime. Multiple threads
    /// can safely call this method concurrently via the lock-free channel.
    /// If the runtime no longer exists, the event is dropped.
    pub fn emit(&self, event: Event) {
        self.0.send(event).ok();
    }
}
