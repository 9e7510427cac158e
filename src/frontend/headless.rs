//! Frontends that draw nothing.
//!
//! [`Headless`] discards everything; [`Recorder`] keeps a log of redraws
//! and slides so a test or a replay tool can inspect what a real renderer
//! would have been asked to do. [`ScriptedInput`] feeds a fixed sequence
//! of intents.

use super::traits::{Anchor, Animator, Input, InputSource, Intent, Renderer, Slide};
use crate::automation::DragonTriggers;
use crate::board::{Board, ChangedSet, SlotId};
use crate::core::Card;

/// Ignores redraws and slides.
#[derive(Clone, Copy, Debug, Default)]
pub struct Headless;

impl Renderer for Headless {
    fn redraw(&mut self, _board: &Board, _changed: ChangedSet, _triggers: DragonTriggers) {}
}

impl Animator for Headless {
    fn slide(&mut self, _slide: &Slide<'_>) {}
}

/// A slide as recorded by [`Recorder`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedSlide {
    pub from: Anchor,
    pub to: Anchor,
    pub cards: Vec<Card>,
    pub frames: u8,
}

/// Records every redraw and slide.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    /// Changed sets, one per redraw.
    pub redraws: Vec<ChangedSet>,
    pub slides: Vec<RecordedSlide>,
    /// Trigger state at the most recent redraw.
    pub triggers: DragonTriggers,
}

impl Recorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.redraws.clear();
        self.slides.clear();
    }

    /// How many redraws included `slot`.
    #[must_use]
    pub fn redraw_count(&self, slot: SlotId) -> usize {
        self.redraws.iter().filter(|set| set.contains(slot)).count()
    }
}

impl Renderer for Recorder {
    fn redraw(&mut self, _board: &Board, changed: ChangedSet, triggers: DragonTriggers) {
        self.redraws.push(changed);
        self.triggers = triggers;
    }
}

impl Animator for Recorder {
    fn slide(&mut self, slide: &Slide<'_>) {
        self.slides.push(RecordedSlide {
            from: slide.from,
            to: slide.to,
            cards: slide.cards.to_vec(),
            frames: slide.frames,
        });
    }
}

/// Plays back intents from an iterator, then quits.
#[derive(Clone, Debug)]
pub struct ScriptedInput<I> {
    intents: I,
}

impl<I: Iterator<Item = Intent>> ScriptedInput<I> {
    pub fn new<T: IntoIterator<IntoIter = I>>(intents: T) -> Self {
        Self {
            intents: intents.into_iter(),
        }
    }
}

impl<I: Iterator<Item = Intent>> InputSource for ScriptedInput<I> {
    fn poll(&mut self) -> Input {
        self.intents.next().map_or(Input::Quit, Input::Intent)
    }
}
