use super::Descriptor;

/// A recognized occurrence of a [`Descriptor`] in one parse.
///
/// The instance borrows its descriptor, so it cannot outlive the table the
/// parser was built from.
#[derive(Debug, Clone)]
pub struct Instance<'a> {
    descriptor: &'a Descriptor,
    value: String,
}

impl<'a> Instance<'a> {
    pub fn new(descriptor: &'a Descriptor, value: impl Into<String>) -> Self {
        Self {
            descriptor,
            value: value.into(),
        }
    }

    pub fn descriptor(&self) -> &'a Descriptor {
        self.descriptor
    }

    /// Empty for verbs, otherwise the token text following the matched prefix.
    pub fn value(&self) -> &str {
        &self.value
    }
}
