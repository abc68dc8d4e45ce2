//! Client-supplied behaviors that parameterize a [`crate::Graph`].
//!
//! A graph is generic over its vertex payload and never inspects it directly.
//! Vertex identity, teardown and diagnostic output are delegated to the
//! capabilities handed over once at construction through [`Capabilities`].

use std::fmt;

/// Decides whether two vertex payloads denote the same vertex.
///
/// This is an identity predicate, not an ordering. It must be reflexive and
/// symmetric for the uniqueness guarantees of the graph to hold.
pub trait Equatable<T> {
    /// Returns true when `a` and `b` identify the same vertex.
    fn equals(&self, a: &T, b: &T) -> bool;
}

impl<T, F> Equatable<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn equals(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Equality capability backed by the payload's [`PartialEq`] implementation.
#[derive(Clone, Copy, Debug, Default)]
pub struct PartialEqMatch;

impl<T: PartialEq> Equatable<T> for PartialEqMatch {
    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

/// Cleanup hook run on every payload still owned by a graph at teardown.
pub trait Destroyable<T> {
    /// Consumes a vertex payload released by the graph.
    fn destroy(&self, vertex: T);
}

impl<T, F> Destroyable<T> for F
where
    F: Fn(T),
{
    fn destroy(&self, vertex: T) {
        self(vertex)
    }
}

/// Diagnostic rendering used by [`crate::Graph::iterate`].
pub trait Printable<T> {
    /// Writes the line prefix for a vertex.
    fn print_vertex(&self, vertex: &T, out: &mut dyn fmt::Write) -> fmt::Result;

    /// Writes one entry of a vertex's adjacency list.
    fn print_neighbor(&self, neighbor: &T, out: &mut dyn fmt::Write) -> fmt::Result;
}

/// Printer rendering payloads through [`fmt::Debug`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DebugPrinter;

impl<T: fmt::Debug> Printable<T> for DebugPrinter {
    fn print_vertex(&self, vertex: &T, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "  vertex: {vertex:>3?}\tadjacency lst: [")
    }

    fn print_neighbor(&self, neighbor: &T, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "{neighbor:>4?} ")
    }
}

/// Printer rendering payloads through [`fmt::Display`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DisplayPrinter;

impl<T: fmt::Display> Printable<T> for DisplayPrinter {
    fn print_vertex(&self, vertex: &T, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "  vertex: {vertex:>3}\tadjacency lst: [")
    }

    fn print_neighbor(&self, neighbor: &T, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "{neighbor:>4} ")
    }
}

/// Bundle of capabilities supplied to [`crate::Graph::create`].
///
/// Every capability is `Send + Sync` so a graph can move between threads.
pub struct Capabilities<T> {
    pub(crate) equals: Box<dyn Equatable<T> + Send + Sync>,
    pub(crate) destroyer: Option<Box<dyn Destroyable<T> + Send + Sync>>,
    pub(crate) printer: Option<Box<dyn Printable<T> + Send + Sync>>,
}

impl<T> Capabilities<T> {
    /// Creates a bundle with the mandatory equality capability.
    pub fn new(equals: impl Equatable<T> + Send + Sync + 'static) -> Self {
        Self {
            equals: Box::new(equals),
            destroyer: None,
            printer: None,
        }
    }

    /// Sets the teardown hook.
    pub fn destroyer(mut self, destroyer: impl Destroyable<T> + Send + Sync + 'static) -> Self {
        self.destroyer = Some(Box::new(destroyer));
        self
    }

    /// Sets the diagnostic printer.
    pub fn printer(mut self, printer: impl Printable<T> + Send + Sync + 'static) -> Self {
        self.printer = Some(Box::new(printer));
        self
    }

    /// Returns true when a teardown hook was supplied.
    pub fn has_destroyer(&self) -> bool {
        self.destroyer.is_some()
    }

    /// Returns true when a printer was supplied.
    pub fn has_printer(&self) -> bool {
        self.printer.is_some()
    }
}

impl<T: PartialEq> Capabilities<T> {
    /// Bundle using [`PartialEqMatch`] and no optional capabilities.
    pub fn partial_eq() -> Self {
        Self::new(PartialEqMatch)
    }
}

impl<T: PartialEq> Default for Capabilities<T> {
    fn default() -> Self {
        Self::partial_eq()
    }
}

impl<T> fmt::Debug for Capabilities<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Capabilities")
            .field("destroyer", &self.destroyer.is_some())
            .field("printer", &self.printer.is_some())
            .finish()
    }
}
