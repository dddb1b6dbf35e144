/// Keyboard handling: crossterm events become discrete `InputEvent`s plus a
/// per-frame snapshot of held direction keys.

use std::collections::HashMap;
use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::entities::Controls;

/// Once a key is auto-repeating, it stays "held" while its last press/repeat
/// arrived within this many frames.  OS repeat runs at 15 Hz or faster, so
/// 8 frames (≈133 ms at 60 FPS) bridge the gap between two repeats.
pub const HOLD_WINDOW: u64 = 8;

/// Window for a key seen exactly once.  The OS waits 250–600 ms before the
/// first repeat; 40 frames (≈667 ms at 60 FPS) cover that delay.
pub const FIRST_PRESS_WINDOW: u64 = 40;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Fire,
    Restart,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    /// The terminal changed size (columns, rows).
    Resize(u16, u16),
}

/// Map a terminal key to a game key.  Anything unrecognised is `None`.
pub fn translate_key(code: KeyCode, modifiers: KeyModifiers) -> Option<Key> {
    match code {
        KeyCode::Char('c') | KeyCode::Char('C') if modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Key::Quit)
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::Right),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Key::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Key::Down),
        KeyCode::Char(' ') => Some(Key::Fire),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Key::Restart),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Key::Quit),
        _ => None,
    }
}

// ── Held-key tracking ────────────────────────────────────────────────────────

/// When a key was last seen, and whether it has started repeating.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Hold {
    last: u64,
    repeating: bool,
}

impl Hold {
    fn window(&self) -> u64 {
        if self.repeating {
            HOLD_WINDOW
        } else {
            FIRST_PRESS_WINDOW
        }
    }
}

/// Maps each held key to the frame it was last seen (press or repeat).
///
/// Works on two classes of terminal:
/// * **Keyboard-enhancement capable** (kitty protocol): proper
///   `Press` / `Repeat` / `Release` events, keys are removed on release.
/// * **Classic terminals**: only `Press` events (OS key-repeat shows as
///   repeated `Press`).  A lone press lasts `FIRST_PRESS_WINDOW` frames,
///   long enough for auto-repeat to kick in; after that keys expire
///   `HOLD_WINDOW` frames after the last repeat.  A quick tap therefore
///   keeps moving for up to `FIRST_PRESS_WINDOW` frames on these terminals.
#[derive(Debug, Default)]
pub struct KeyTracker {
    holds: HashMap<Key, Hold>,
    frame: u64,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_frame(&mut self) {
        self.frame += 1;
    }

    /// Record one terminal event.  Only presses produce a discrete event, so
    /// holding Space (which arrives as `Repeat` on enhanced terminals) fires once.
    pub fn observe(&mut self, event: &Event) -> Option<InputEvent> {
        match event {
            Event::Key(KeyEvent {
                code,
                modifiers,
                kind,
                ..
            }) => {
                let key = translate_key(*code, *modifiers)?;
                match kind {
                    KeyEventKind::Press => {
                        // A press while still held is the OS repeating it.
                        let repeating = self.is_held(key);
                        self.touch(key, repeating);
                        Some(match key {
                            Key::Quit => InputEvent::Quit,
                            other => InputEvent::KeyDown(other),
                        })
                    }
                    KeyEventKind::Repeat => {
                        self.touch(key, true);
                        None
                    }
                    KeyEventKind::Release => {
                        self.holds.remove(&key);
                        None
                    }
                }
            }
            Event::Resize(cols, rows) => Some(InputEvent::Resize(*cols, *rows)),
            _ => None,
        }
    }

    fn touch(&mut self, key: Key, repeating: bool) {
        self.holds.insert(
            key,
            Hold {
                last: self.frame,
                repeating,
            },
        );
    }

    /// Returns true if `key` was seen recently enough for its hold window.
    pub fn is_held(&self, key: Key) -> bool {
        self.holds
            .get(&key)
            .map(|hold| self.frame.saturating_sub(hold.last) <= hold.window())
            .unwrap_or(false)
    }

    pub fn controls(&self) -> Controls {
        Controls {
            left: self.is_held(Key::Left),
            right: self.is_held(Key::Right),
            up: self.is_held(Key::Up),
            down: self.is_held(Key::Down),
        }
    }
}

// ── Input sources ────────────────────────────────────────────────────────────

/// Where the loop gets its input from.
pub trait InputSource {
    /// Drain discrete events that arrived since the last call.  Called once
    /// per frame.
    fn poll_events(&mut self) -> io::Result<Vec<InputEvent>>;

    /// Held direction keys as of the last `poll_events`.
    fn controls(&self) -> Controls;
}

/// Non-blocking reads from the real terminal, on the loop thread.
#[derive(Debug, Default)]
pub struct TerminalInput {
    tracker: KeyTracker,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InputSource for TerminalInput {
    fn poll_events(&mut self) -> io::Result<Vec<InputEvent>> {
        self.tracker.begin_frame();
        let mut events = Vec::new();
        while event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            if let Some(input) = self.tracker.observe(&ev) {
                events.push(input);
            }
        }
        Ok(events)
    }

    fn controls(&self) -> Controls {
        self.tracker.controls()
    }
}
