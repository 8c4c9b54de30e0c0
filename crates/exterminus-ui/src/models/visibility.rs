//! Masked/revealed state of a password input

/// Input `type` of a masked field
pub const MASKED_INPUT_TYPE: &str = "password";
/// Input `type` of a revealed field
pub const REVEALED_INPUT_TYPE: &str = "text";

/// Whether a password input currently shows its characters
///
/// # Examples
///
/// ```
/// use exterminus_ui::models::Visibility;
///
/// let state = Visibility::from_input_type("password");
/// assert_eq!(state, Visibility::Masked);
/// assert_eq!(state.toggled().input_type(), "text");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Characters are obscured (`type="password"`)
    #[default]
    Masked,
    /// Characters are shown as plain text (`type="text"`)
    Revealed,
}

impl Visibility {
    /// Reads the state off an input's `type` attribute.
    ///
    /// Only an exact `"text"` counts as revealed; any other type (including
    /// `"password"`, `"email"` or an empty string) is treated as masked.
    #[must_use]
    pub fn from_input_type(input_type: &str) -> Self {
        if input_type == REVEALED_INPUT_TYPE {
            Self::Revealed
        } else {
            Self::Masked
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Masked => Self::Revealed,
            Self::Revealed => Self::Masked,
        }
    }

    #[must_use]
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }

    /// Value for the input's `type` attribute
    #[must_use]
    pub const fn input_type(self) -> &'static str {
        match self {
            Self::Masked => MASKED_INPUT_TYPE,
            Self::Revealed => REVEALED_INPUT_TYPE,
        }
    }

    /// Value for the toggle button's `aria-pressed` attribute
    #[must_use]
    pub const fn aria_pressed(self) -> &'static str {
        if self.is_revealed() { "true" } else { "false" }
    }

    /// Picks the label describing what the button will do next.
    ///
    /// A masked field offers to show, a revealed field offers to hide.
    #[must_use]
    pub const fn pick<'a>(self, when_masked: &'a str, when_revealed: &'a str) -> &'a str {
        match self {
            Self::Masked => when_masked,
            Self::Revealed => when_revealed,
        }
    }
}
