//! Persistent environment.
//!
//! A singly linked list of reference-counted frames, newest first. `bind`
//! pushes a frame in front of a shared tail, so extending an environment is
//! O(1) and never disturbs anyone still holding the old one. Closures rely
//! on this: they keep the environment of their declaration alive simply by
//! holding a clone of it.

use std::fmt;
use std::rc::Rc;

use imp_ir::Name;

use crate::Denotable;

struct Frame {
    name: Name,
    value: Denotable,
    parent: Option<Rc<Frame>>,
}

/// Immutable name to `Denotable` mapping.
#[derive(Clone, Default)]
pub struct Environment {
    head: Option<Rc<Frame>>,
}

impl Environment {
    pub fn new() -> Self {
        Environment { head: None }
    }

    /// New environment with `name` bound to `value`, shadowing any earlier
    /// binding of `name`. `self` is unchanged.
    #[must_use]
    pub fn bind(&self, name: Name, value: Denotable) -> Environment {
        Environment {
            head: Some(Rc::new(Frame {
                name,
                value,
                parent: self.head.clone(),
            })),
        }
    }

    /// Innermost binding of `name`.
    pub fn lookup(&self, name: Name) -> Option<&Denotable> {
        self.iter()
            .find(|(bound, _)| *bound == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: Name) -> bool {
        self.lookup(name).is_some()
    }

    /// All bindings, newest first, shadowed ones included.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Number of frames, shadowed bindings included.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Whether both environments are the very same frame chain.
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        match (&self.head, &other.head) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl Drop for Environment {
    // Unlink uniquely owned frames one at a time; the default recursive
    // drop overflows the stack on long chains.
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(frame) = next {
            match Rc::try_unwrap(frame) {
                Ok(mut frame) => next = frame.parent.take(),
                Err(_) => break,
            }
        }
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(name, value)| (name, value.describe())))
            .finish()
    }
}

/// Iterator over an environment's bindings, newest first.
pub struct Iter<'a> {
    next: Option<&'a Frame>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (Name, &'a Denotable);

    fn next(&mut self) -> Option<Self::Item> {
        let frame = self.next?;
        self.next = frame.parent.as_deref();
        Some((frame.name, &frame.value))
    }
}
