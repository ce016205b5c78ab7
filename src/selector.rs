//! Host-side state: the selected key and the view that redraws on change.
//!
//! The theory and rendering layers never hold the selection. A host keeps
//! a `KeySelector`, feeds it dropdown events, and wires its change
//! notifications to a `FretboardView` (or its own canvas adapter).

use crate::error::Result;
use crate::model::{IntoPitchClass, PitchClass};
use crate::options::FretboardOptions;
use crate::renderer::{commands_to_svg, render_fretboard, DrawCommand, DrawSurface};

/// Dropdown entries, in note-table order.
pub fn key_names() -> Vec<&'static str> {
    PitchClass::ALL.iter().map(|pc| pc.name()).collect()
}

type Listener = Box<dyn FnMut(PitchClass)>;

/// The currently selected root key plus change subscribers.
pub struct KeySelector {
    selected: PitchClass,
    listeners: Vec<Listener>,
}

impl Default for KeySelector {
    fn default() -> Self {
        Self::new(PitchClass::C)
    }
}

impl KeySelector {
    pub fn new(initial: PitchClass) -> Self {
        Self {
            selected: initial,
            listeners: Vec::new(),
        }
    }

    pub fn selected(&self) -> PitchClass {
        self.selected
    }

    pub fn options(&self) -> Vec<&'static str> {
        key_names()
    }

    /// Register a callback run after every change of selection.
    pub fn subscribe(&mut self, listener: impl FnMut(PitchClass) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Apply a selection event. Returns whether the key changed; listeners
    /// only run when it did. Invalid input leaves the selection untouched.
    pub fn select(&mut self, key: impl IntoPitchClass) -> Result<bool> {
        let key = key.into_pitch_class()?;
        if key == self.selected {
            return Ok(false);
        }
        log::debug!("key changed: {} -> {}", self.selected, key);
        self.selected = key;
        for listener in &mut self.listeners {
            listener(key);
        }
        Ok(true)
    }
}

/// Holds the most recent render for one drawing surface.
#[derive(Debug, Clone)]
pub struct FretboardView {
    options: FretboardOptions,
    root: PitchClass,
    commands: Vec<DrawCommand>,
}

impl FretboardView {
    pub fn new(options: FretboardOptions, root: PitchClass) -> Result<Self> {
        options.validate()?;
        let commands = render_fretboard(root, options.width, options.height);
        Ok(Self { options, root, commands })
    }

    pub fn options(&self) -> &FretboardOptions {
        &self.options
    }

    pub fn root(&self) -> PitchClass {
        self.root
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Discard the previous drawing and render `root` from scratch.
    pub fn redraw(&mut self, root: PitchClass) {
        self.root = root;
        self.commands = render_fretboard(root, self.options.width, self.options.height);
    }

    /// Clear `surface` and paint the current drawing onto it.
    pub fn paint(&self, surface: &mut impl DrawSurface) {
        surface.clear();
        surface.draw_all(&self.commands);
    }

    pub fn to_svg(&self) -> String {
        commands_to_svg(&self.commands, &self.options)
    }
}
