//! Conlang document store
//!
//! The in-memory project document read and written by the editor panels. It is
//! passed explicitly to each panel as a `SharedDocument` instead of living in a
//! global. Only the glyph-bearing sections are modelled here: the phoneme
//! inventory and the script's letters.
//!
//! Empty fields are skipped when saving.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::path::Path;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::glyph::{compress, decompress, Grid};
use crate::{GlyphError, GridEditor, Result};

/// Document handle shared between panels
pub type SharedDocument = Rc<RefCell<ConlangDocument>>;

/// The conlang project document
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConlangDocument {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    pub phonology: PhonologySection,

    pub script: ScriptSection,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhonologySection {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub phonemes: Vec<Phoneme>,
}

/// One entry of the phoneme inventory
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Phoneme {
    /// IPA symbol
    pub ipa: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub romanization: String,

    /// Compressed glyph, empty if none was drawn
    #[serde(skip_serializing_if = "String::is_empty")]
    pub glyph: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptSection {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub letters: Vec<ScriptLetter>,
}

/// One letter of the script
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptLetter {
    pub name: String,

    /// Sound the letter writes (IPA)
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sound: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub glyph: String,
}

/// Addresses a glyph stored in the document
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GlyphSlot {
    Phoneme(usize),
    Letter(usize),
}

impl fmt::Display for GlyphSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlyphSlot::Phoneme(i) => write!(f, "phoneme #{i}"),
            GlyphSlot::Letter(i) => write!(f, "letter #{i}"),
        }
    }
}

impl ConlangDocument {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Wrap into a handle that can be given to several panels
    pub fn into_shared(self) -> SharedDocument {
        Rc::new(RefCell::new(self))
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Section accessors
    // ═══════════════════════════════════════════════════════════════════════

    pub fn phonology(&self) -> &PhonologySection {
        &self.phonology
    }

    pub fn phonology_mut(&mut self) -> &mut PhonologySection {
        &mut self.phonology
    }

    pub fn script(&self) -> &ScriptSection {
        &self.script
    }

    pub fn script_mut(&mut self) -> &mut ScriptSection {
        &mut self.script
    }

    /// Append a phoneme, returns its slot
    pub fn add_phoneme(&mut self, ipa: impl Into<String>, romanization: impl Into<String>) -> GlyphSlot {
        self.phonology.phonemes.push(Phoneme {
            ipa: ipa.into(),
            romanization: romanization.into(),
            glyph: String::new(),
        });
        GlyphSlot::Phoneme(self.phonology.phonemes.len() - 1)
    }

    /// Append a letter, returns its slot
    pub fn add_letter(&mut self, name: impl Into<String>, sound: impl Into<String>) -> GlyphSlot {
        self.script.letters.push(ScriptLetter {
            name: name.into(),
            sound: sound.into(),
            glyph: String::new(),
        });
        GlyphSlot::Letter(self.script.letters.len() - 1)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Glyphs
    // ═══════════════════════════════════════════════════════════════════════

    /// Compressed glyph stored at a slot (empty if none)
    pub fn glyph(&self, slot: GlyphSlot) -> Result<&str> {
        Ok(match slot {
            GlyphSlot::Phoneme(i) => self.phonology.phonemes.get(i).ok_or_else(|| unknown(slot))?.glyph.as_str(),
            GlyphSlot::Letter(i) => self.script.letters.get(i).ok_or_else(|| unknown(slot))?.glyph.as_str(),
        })
    }

    pub fn set_glyph(&mut self, slot: GlyphSlot, glyph: String) -> Result<()> {
        let target = match slot {
            GlyphSlot::Phoneme(i) => &mut self.phonology.phonemes.get_mut(i).ok_or_else(|| unknown(slot))?.glyph,
            GlyphSlot::Letter(i) => &mut self.script.letters.get_mut(i).ok_or_else(|| unknown(slot))?.glyph,
        };
        *target = glyph;
        Ok(())
    }

    /// Every slot in document order, phonemes first
    pub fn glyph_slots(&self) -> impl Iterator<Item = GlyphSlot> {
        (0..self.phonology.phonemes.len())
            .map(GlyphSlot::Phoneme)
            .chain((0..self.script.letters.len()).map(GlyphSlot::Letter))
    }

    /// Slots whose stored glyph does not decode at `resolution`
    pub fn invalid_glyphs(&self, resolution: usize) -> Vec<(GlyphSlot, GlyphError)> {
        let mut invalid = Vec::new();
        for slot in self.glyph_slots() {
            let Ok(glyph) = self.glyph(slot) else {
                continue;
            };
            if glyph.is_empty() {
                continue;
            }
            if let Err(err) = decompress(glyph, resolution) {
                log::warn!("{slot} has an unreadable glyph: {err}");
                invalid.push((slot, err));
            }
        }
        invalid
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Persistence
    // ═══════════════════════════════════════════════════════════════════════

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

fn unknown(slot: GlyphSlot) -> GlyphError {
    match slot {
        GlyphSlot::Phoneme(index) => GlyphError::UnknownEntry { kind: "phoneme", index },
        GlyphSlot::Letter(index) => GlyphError::UnknownEntry { kind: "letter", index },
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Slot editor
// ═══════════════════════════════════════════════════════════════════════════

/// A grid editor bound to one glyph slot of a shared document
///
/// Opening a slot loads its glyph; every committed change in the editor is
/// written back to the open slot. A blank grid is stored as an empty glyph.
pub struct GlyphSlotEditor {
    editor: GridEditor,
    document: SharedDocument,
    slot: Rc<Cell<Option<GlyphSlot>>>,
}

impl GlyphSlotEditor {
    /// Bind an editor to a document. Replaces the editor's change callback.
    pub fn new(mut editor: GridEditor, document: SharedDocument) -> Result<Self> {
        let slot = Rc::new(Cell::new(None));
        let blank = compress(&Grid::new(editor.resolution())?)?;

        let target = Rc::clone(&slot);
        let store = Rc::clone(&document);
        editor.set_on_change(move |compressed| {
            let Some(slot) = target.get() else {
                return;
            };
            let glyph = if compressed == blank { String::new() } else { compressed.to_string() };
            let Ok(mut document) = store.try_borrow_mut() else {
                log::warn!("Document busy, glyph change for {slot} dropped");
                return;
            };
            if let Err(err) = document.set_glyph(slot, glyph) {
                log::warn!("Failed to store glyph for {slot}: {err}");
            }
        });

        Ok(Self { editor, document, slot })
    }

    /// Load a slot's glyph into the editor and start writing changes to it
    ///
    /// On error the previously open slot stays open and the editor is unchanged.
    pub fn open(&mut self, slot: GlyphSlot) -> Result<()> {
        let glyph = self.document.borrow().glyph(slot)?.to_string();

        let previous = self.slot.replace(None);
        let result = if glyph.is_empty() {
            self.editor.clear()
        } else {
            self.editor.load_glyph(&glyph, None)
        };
        match result {
            Ok(()) => {
                self.slot.set(Some(slot));
                Ok(())
            }
            Err(err) => {
                self.slot.set(previous);
                Err(err)
            }
        }
    }

    /// Stop writing changes to the document
    pub fn close(&mut self) {
        self.slot.set(None);
    }

    pub fn slot(&self) -> Option<GlyphSlot> {
        self.slot.get()
    }

    pub fn editor(&self) -> &GridEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut GridEditor {
        &mut self.editor
    }

    pub fn document(&self) -> &SharedDocument {
        &self.document
    }
}
