use log::warn;

/// # Keypad
/// Chip-8 input is generated with a hexadecimal keypad.
///
/// ```text
/// |1|2|3|C|
/// |4|5|6|D|
/// |7|8|9|E|
/// |A|0|B|F|
/// ```
///
/// Tracks which keys are held and the most recent released-to-pressed edge,
/// which is what `LD Vx, K` waits for.
#[derive(Debug, Default, Copy, Clone)]
pub struct Keypad {
    pressed: [bool; 16],
    last_press: Option<u8>,
}

impl Keypad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pressed status of `key`
    pub fn press(&mut self, key: u8) {
        let Some(key) = Keypad::checked(key) else {
            return;
        };
        if !self.pressed[key] {
            self.last_press = Some(key as u8);
        }
        self.pressed[key] = true;
    }

    /// Unset the pressed status of `key`
    pub fn release(&mut self, key: u8) {
        if let Some(key) = Keypad::checked(key) {
            self.pressed[key] = false;
        }
    }

    /// Replaces the whole key state, deriving press edges from the previous state
    pub fn set(&mut self, snapshot: [bool; 16]) {
        for (key, (&now, &before)) in snapshot.iter().zip(self.pressed.iter()).enumerate() {
            if now && !before {
                self.last_press = Some(key as u8);
            }
        }
        self.pressed = snapshot;
    }

    /// Whether `key` is held; only the low nibble of `key` is considered
    pub fn is_pressed(&self, key: u8) -> bool {
        self.pressed[(key & 0xF) as usize]
    }

    pub fn snapshot(&self) -> [bool; 16] {
        self.pressed
    }

    /// Consumes the most recent press edge
    pub fn take_press(&mut self) -> Option<u8> {
        self.last_press.take()
    }

    /// Forgets any press edge seen so far
    pub fn clear_press(&mut self) {
        self.last_press = None;
    }

    fn checked(key: u8) -> Option<usize> {
        if key > 0xF {
            warn!("ignoring out of range key {:#04X}", key);
            return None;
        }
        Some(key as usize)
    }
}
