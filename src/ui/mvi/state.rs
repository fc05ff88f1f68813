//! State side of the MVI loop.

/// A snapshot a reducer consumes and replaces.
///
/// `Default` gives the empty snapshot a reducer can be seeded with, and
/// `PartialEq` lets tests and callers tell whether a command changed anything.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
