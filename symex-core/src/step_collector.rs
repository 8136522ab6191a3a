/// Receives the steps taken by the simplifier, in the order they are taken.
///
/// The rules take a `&mut dyn StepCollector<Step>` so that [`simplify`](crate::simplify()) and
/// [`simplify_with_steps`](crate::simplify_with_steps()) share one code path; the former passes `()`.
///
/// [`StepCollector`] is also implemented for the unit type `()`, which discards every step. Use it
/// when only the result of the algorithm is needed.
pub trait StepCollector<S> {
    /// Records one step.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}
