//! Transient contents of the login screen.

use std::fmt;

use zeroize::Zeroizing;

use crate::domain::navigation::Field;

/// Masking glyph used for each password character.
pub const PASSWORD_MASK: char = '•';

/// The two login inputs and which one has focus.
///
/// ## Invariants
/// - `password` is wiped from memory when replaced or dropped, and never
///   appears in `Debug` output.
/// - Values are kept exactly as typed; no trimming happens here or in
///   validation.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginForm {
    login: String,
    password: Zeroizing<String>,
    focus: Field,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            login: String::new(),
            password: Zeroizing::new(String::new()),
            focus: Field::Login,
        }
    }
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("login", &self.login)
            .field("password", &self.masked_password())
            .field("focus", &self.focus)
            .finish()
    }
}

impl LoginForm {
    /// Current contents of the user name input.
    #[must_use]
    pub const fn login(&self) -> &str {
        self.login.as_str()
    }

    /// Current contents of the password input.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Input that currently has focus.
    #[must_use]
    pub const fn focus(&self) -> Field {
        self.focus
    }

    /// One mask glyph per password character.
    #[must_use]
    pub fn masked_password(&self) -> String {
        self.password.chars().map(|_| PASSWORD_MASK).collect()
    }

    /// Replace the contents of `field` and move focus to it.
    pub fn set(&mut self, field: Field, text: String) {
        match field {
            Field::Login => self.login = text,
            Field::Password => self.password = Zeroizing::new(text),
        }
        self.focus = field;
    }

    /// Empty `field`, leaving the other input and focus alone.
    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Login => self.login.clear(),
            Field::Password => self.password = Zeroizing::new(String::new()),
        }
    }

    /// Move focus to `field`.
    pub const fn focus_on(&mut self, field: Field) {
        self.focus = field;
    }

    /// Empty both inputs and return focus to the user name.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
