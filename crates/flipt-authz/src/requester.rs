use crate::Request;

/// Capability shared by every operation input: describe yourself for an
/// access check.
///
/// Implementations must be pure functions of the input's own fields. The
/// transport calls this before dispatching to the business handler and never
/// needs the concrete operation type.
pub trait Requester {
    fn request(&self) -> Request;
}

impl<T: Requester + ?Sized> Requester for &T {
    fn request(&self) -> Request {
        (**self).request()
    }
}

impl<T: Requester + ?Sized> Requester for Box<T> {
    fn request(&self) -> Request {
        (**self).request()
    }
}

impl Requester for Request {
    fn request(&self) -> Request {
        self.clone()
    }
}
