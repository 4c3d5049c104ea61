use std::{cell::RefCell, fmt, rc::Rc};

/// Shared handle to a caller-owned string.
///
/// Clones point at the same string, so the caller keeps one handle and gives
/// another to the field; edits made through either are visible to both.
#[derive(Clone, Default)]
pub struct TextBinding {
    value: Rc<RefCell<String>>,
}

impl TextBinding {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Rc::new(RefCell::new(value.into())),
        }
    }

    /// Copy of the current value.
    pub fn get(&self) -> String {
        self.value.borrow().clone()
    }

    /// Run `read` against the current value without cloning it.
    pub fn with<R>(&self, read: impl FnOnce(&str) -> R) -> R {
        read(&self.value.borrow())
    }

    pub fn set(&self, value: impl Into<String>) {
        *self.value.borrow_mut() = value.into();
    }

    pub fn update<R>(&self, edit: impl FnOnce(&mut String) -> R) -> R {
        edit(&mut self.value.borrow_mut())
    }

    pub fn clear(&self) {
        self.value.borrow_mut().clear();
    }

    pub fn is_empty(&self) -> bool {
        self.value.borrow().is_empty()
    }
}

impl fmt::Debug for TextBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TextBinding")
            .field(&*self.value.borrow())
            .finish()
    }
}

impl From<&str> for TextBinding {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TextBinding {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
