use std::fmt::{self, Debug, Formatter};
use std::rc::Rc;

/// A cloneable handle to a handler that receives a borrowed `A` when invoked.
///
/// Two Delegates are equal only if they are clones of the same handle. Wrapping the same closure
/// twice creates two distinct Delegates.
///
/// # Examples
/// ```
/// # use enumerable_lib::event::Delegate;
/// let greet = Delegate::new(|name: &str| println!("Hello, {name}!"));
/// let copy = greet.clone();
///
/// assert_eq!(greet, copy);
/// assert_ne!(greet, Delegate::new(|name: &str| println!("Hello, {name}!")));
/// greet.invoke("world");
/// ```
pub struct Delegate<A: ?Sized> {
    handler: Rc<dyn Fn(&A)>,
}

impl<A: ?Sized> Delegate<A> {
    /// Wraps `handler` in a new Delegate.
    pub fn new<F>(handler: F) -> Delegate<A>
    where
        F: Fn(&A) + 'static,
    {
        Delegate {
            handler: Rc::new(handler),
        }
    }

    /// Calls the handler with `args`. Panics raised by the handler propagate to the caller.
    pub fn invoke(&self, args: &A) {
        (self.handler)(args)
    }
}

impl<A: ?Sized> Clone for Delegate<A> {
    fn clone(&self) -> Self {
        Delegate {
            handler: Rc::clone(&self.handler),
        }
    }
}

impl<A: ?Sized> PartialEq for Delegate<A> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.handler, &other.handler)
    }
}

impl<A: ?Sized> Eq for Delegate<A> {}

impl<A: ?Sized> Debug for Delegate<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Delegate")
            .field("handler", &Rc::as_ptr(&self.handler).cast::<()>())
            .field("handles", &Rc::strong_count(&self.handler))
            .finish()
    }
}
