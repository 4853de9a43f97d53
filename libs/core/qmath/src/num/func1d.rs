// -----------------------------------------------------------------------------
// Func1d
// -----------------------------------------------------------------------------
/// One-dimensional function which may fail to evaluate at some arguments.
///
/// The error case is the function's own way of saying "not defined here".
/// Callers must not replace it with a sentinel value.
pub trait Func1d<Arg> {
    type Output;
    type Error;

    fn eval(&self, arg: &Arg) -> Result<Self::Output, Self::Error>;
}

impl<Arg, F: Func1d<Arg> + ?Sized> Func1d<Arg> for &F {
    type Output = F::Output;
    type Error = F::Error;

    #[inline]
    fn eval(&self, arg: &Arg) -> Result<Self::Output, Self::Error> {
        (**self).eval(arg)
    }
}

// -----------------------------------------------------------------------------
// Integrable1d
// -----------------------------------------------------------------------------
/// Function with a closed-form definite integral.
pub trait Integrable1d<Arg>: Func1d<Arg> {
    type Integrated;

    fn integrate(&self, from: &Arg, to: &Arg) -> Result<Self::Integrated, Self::Error>;
}

// -----------------------------------------------------------------------------
// FromFn
// -----------------------------------------------------------------------------
/// Adapter to use a plain closure as a [`Func1d`].
///
/// # Example
/// ```
/// use qmath::num::{from_fn, Func1d};
///
/// let recip = from_fn(|x: &f64| if *x == 0.0 { Err("pole") } else { Ok(1.0 / x) });
/// assert_eq!(recip.eval(&2.0), Ok(0.5));
/// assert_eq!(recip.eval(&0.0), Err("pole"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FromFn<F>(F);

#[inline]
pub fn from_fn<F>(f: F) -> FromFn<F> {
    FromFn(f)
}

impl<Arg, V, E, F> Func1d<Arg> for FromFn<F>
where
    F: Fn(&Arg) -> Result<V, E>,
{
    type Output = V;
    type Error = E;

    #[inline]
    fn eval(&self, arg: &Arg) -> Result<V, E> {
        (self.0)(arg)
    }
}
