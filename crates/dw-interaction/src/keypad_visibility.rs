#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeypadVisibility {
    #[default]
    Visible,
    Hidden,
    /// A source currency was chosen; the keypad returns once the picker has collapsed
    AwaitingPickerCollapse,
}

/// Keypad visibility on the amount screen.
///
/// The keypad and the source-currency picker share the bottom of the screen, so the
/// keypad only reappears after the picker reports that its collapse finished.
#[derive(Debug, Clone, Default)]
pub struct KeypadVisibilityMachine {
    state: KeypadVisibility,
}

impl KeypadVisibilityMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> KeypadVisibility {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == KeypadVisibility::Visible
    }

    pub fn tap_field(&mut self) -> KeypadVisibility {
        self.state = KeypadVisibility::Visible;
        self.state
    }

    pub fn tap_selector(&mut self) -> KeypadVisibility {
        self.state = KeypadVisibility::Hidden;
        self.state
    }

    pub fn choose_source(&mut self) -> KeypadVisibility {
        if self.state != KeypadVisibility::Visible {
            self.state = KeypadVisibility::AwaitingPickerCollapse;
        }
        self.state
    }

    pub fn on_picker_collapsed(&mut self) -> KeypadVisibility {
        if self.state == KeypadVisibility::AwaitingPickerCollapse {
            self.state = KeypadVisibility::Visible;
        }
        self.state
    }
}
