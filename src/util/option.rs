pub(crate) trait OptionExtension<T> {
    fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    /// Acts similarly to [`Option::unwrap`] but with [`unreachable!`] in the none branch. Callers
    /// state why None is impossible in an `UNREACHABLE:` comment at the call site.
    fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None => unreachable!(),
        }
    }
}
