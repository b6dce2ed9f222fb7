use derive_more::IsVariant;

/// Signals whether an early-exit iteration, such as [`Enumerable::until`](super::Enumerable::until),
/// should carry on to the next element.
///
/// Actions passed to `until` can return anything that converts into a Flow. Only `false` and
/// [`Flow::Break`] stop iteration; `true` and `()` both continue.
///
/// # Examples
/// ```
/// # use enumerable_lib::collections::Flow;
/// assert!(Flow::from(false).is_break());
/// assert!(Flow::from(true).is_continue());
/// assert!(Flow::from(()).is_continue());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum Flow {
    Continue,
    Break,
}

impl From<bool> for Flow {
    fn from(value: bool) -> Self {
        if value { Flow::Continue } else { Flow::Break }
    }
}

impl From<()> for Flow {
    fn from(_: ()) -> Self {
        Flow::Continue
    }
}
