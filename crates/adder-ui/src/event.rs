use std::collections::BTreeMap;
use std::fmt;

/// Fired by the frame loop on a primary press edge over a component.
pub const ONCLICK: &str = "onclick";
/// Fired on a second press edge over the same component within the
/// double-click window.
pub const ONDOUBLECLICK: &str = "ondoubleclick";

/// Event names every component's table is guaranteed to contain.
pub const RESERVED_EVENTS: [&str; 2] = [ONCLICK, ONDOUBLECLICK];

// ── Commands ──────────────────────────────────────────────────────────────

/// A named request emitted by a callback, handled by the application after
/// the frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    name: String,
}

impl Command {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Outbox handed to every callback.
///
/// Callbacks never touch UI state directly; they push commands here and the
/// owner of the `UiContext` drains them once the frame is done.
#[derive(Debug, Default)]
pub struct Commands {
    queue: Vec<Command>,
}

impl Commands {
    pub fn push(&mut self, name: impl Into<String>) {
        self.queue.push(Command::new(name));
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.queue.iter()
    }

    /// Removes and returns every queued command in push order.
    pub fn drain(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.queue)
    }
}

// ── Callback ──────────────────────────────────────────────────────────────

/// Boxed event handler.
pub struct Callback(Box<dyn FnMut(&mut Commands)>);

impl Callback {
    pub fn new(f: impl FnMut(&mut Commands) + 'static) -> Self {
        Self(Box::new(f))
    }

    /// Handler that does nothing.
    pub fn noop() -> Self {
        Self::new(|_| {})
    }

    /// Handler that pushes `command` each time it runs.
    pub fn emit(command: impl Into<String>) -> Self {
        let command = command.into();
        Self::new(move |out| out.push(command.clone()))
    }

    #[inline]
    pub fn call(&mut self, commands: &mut Commands) {
        (self.0)(commands)
    }
}

impl Default for Callback {
    fn default() -> Self {
        Self::noop()
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

// ── EventTable ────────────────────────────────────────────────────────────

/// Name → handler mapping owned by a component.
///
/// Built once from the caller's handlers; reserved names that were not
/// supplied get a no-op so they can always be fired.
#[derive(Debug)]
pub struct EventTable {
    handlers: BTreeMap<String, Callback>,
}

impl EventTable {
    pub fn new<I>(handlers: I) -> Self
    where
        I: IntoIterator<Item = (String, Callback)>,
    {
        let mut handlers: BTreeMap<String, Callback> = handlers.into_iter().collect();
        for name in RESERVED_EVENTS {
            handlers.entry(name.to_string()).or_default();
        }
        Self { handlers }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Event names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Callback> {
        self.handlers.get_mut(name)
    }

    /// Runs the handler for `name`. Returns `false` if the table has none.
    pub fn fire(&mut self, name: &str, commands: &mut Commands) -> bool {
        match self.handlers.get_mut(name) {
            Some(cb) => {
                cb.call(commands);
                true
            }
            None => false,
        }
    }
}

impl Default for EventTable {
    fn default() -> Self {
        Self::new(std::iter::empty())
    }
}
