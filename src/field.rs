//! Field operators as seen by the contraction engine.
//!
//! The engine only ever reads a field's name. Anything that can hand out a
//! name implements [`Named`]; [`Field`] is the concrete value the physics
//! layer builds, carrying its spacetime coordinate symbols along.

/// A field-operator handle exposing its identifying name.
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for str {
    fn name(&self) -> &str {
        self
    }
}

impl Named for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

impl<T: Named + ?Sized> Named for &T {
    fn name(&self) -> &str {
        (**self).name()
    }
}

/// A field variable and the coordinates it depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub coords: Vec<String>,
}

impl Field {
    /// Field depending on the given coordinate symbols, in order.
    pub fn new(name: impl Into<String>, coords: &[&str]) -> Self {
        Self {
            name: name.into(),
            coords: coords.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Real scalar field on 4D spacetime, coordinates `t x y z`.
    pub fn real_scalar_4d(name: impl Into<String>) -> Self {
        Self::new(name, &["t", "x", "y", "z"])
    }

    /// Number of spacetime dimensions the field lives on.
    #[inline(always)]
    pub fn dim(&self) -> usize {
        self.coords.len()
    }
}

impl Named for Field {
    fn name(&self) -> &str {
        &self.name
    }
}
