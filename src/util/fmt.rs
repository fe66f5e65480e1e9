use std::fmt::{self, Debug, Formatter};

/// Writes the contained string verbatim when debug formatted, so that pre-rendered fragments can
/// be passed to [`Formatter::debug_list`] and friends without being quoted.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
