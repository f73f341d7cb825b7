use super::catalog::{ChoiceItem, ChoiceTag};
use crate::error::{Result, WordmlError};
use crate::xml::{RawElement, XmlSink};

/// One position in a [`ChildSequence`].
#[derive(Clone, Debug, PartialEq)]
pub enum Slot<I> {
    Item(I),
    /// Unrecognised element kept in document order.
    Foreign(RawElement),
}

impl<I> Slot<I> {
    pub fn as_item(&self) -> Option<&I> {
        match self {
            Slot::Item(item) => Some(item),
            Slot::Foreign(_) => None,
        }
    }

    pub fn as_item_mut(&mut self) -> Option<&mut I> {
        match self {
            Slot::Item(item) => Some(item),
            Slot::Foreign(_) => None,
        }
    }
}

/// Ordered heterogeneous child sequence.
///
/// Holds the children of one choice group in document order. Every
/// tag-scoped operation counts only the slots carrying that tag, so "the
/// second paragraph" stays the second paragraph whatever markup sits
/// between paragraphs. Foreign slots keep their position but are never
/// counted.
///
/// Lookups are linear scans over the slots.
#[derive(Clone, Debug, PartialEq)]
pub struct ChildSequence<I> {
    slots: Vec<Slot<I>>,
}

impl<I> Default for ChildSequence<I> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<I: ChoiceItem> ChildSequence<I> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots, foreign ones included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[Slot<I>] {
        &self.slots
    }

    pub fn items(&self) -> impl Iterator<Item = &I> {
        self.slots.iter().filter_map(Slot::as_item)
    }

    pub fn items_mut(&mut self) -> impl Iterator<Item = &mut I> {
        self.slots.iter_mut().filter_map(Slot::as_item_mut)
    }

    pub fn tags(&self) -> impl Iterator<Item = I::Tag> + '_ {
        self.items().map(ChoiceItem::tag)
    }

    pub fn push(&mut self, item: I) {
        self.slots.push(Slot::Item(item));
    }

    pub fn push_foreign(&mut self, element: RawElement) {
        self.slots.push(Slot::Foreign(element));
    }

    pub fn count_of(&self, tag: I::Tag) -> usize {
        self.iter_of(tag).count()
    }

    pub fn iter_of(&self, tag: I::Tag) -> impl Iterator<Item = &I> {
        self.items().filter(move |item| item.tag() == tag)
    }

    pub fn nth_of(&self, tag: I::Tag, n: usize) -> Option<&I> {
        self.iter_of(tag).nth(n)
    }

    pub fn nth_of_mut(&mut self, tag: I::Tag, n: usize) -> Option<&mut I> {
        self.items_mut().filter(|item| item.tag() == tag).nth(n)
    }

    /// Appends a default value of the type `tag` stands for.
    pub fn append_new(&mut self, tag: I::Tag) -> &mut I {
        let index = self.slots.len();
        self.slots.push(Slot::Item(I::new_default(tag)));
        self.item_at(index)
    }

    /// Inserts a default value of the type `tag` stands for before the
    /// `n`th occurrence of `tag`. When there is no such occurrence the value
    /// is appended at the tail.
    pub fn insert_before_nth(&mut self, tag: I::Tag, n: usize) -> &mut I {
        self.insert_item_before_nth(n, I::new_default(tag))
    }

    /// Inserts `item` before the `n`th occurrence of its own tag, or at the
    /// tail when there is no such occurrence.
    pub fn insert_item_before_nth(&mut self, n: usize, item: I) -> &mut I {
        let index = self
            .position_of(item.tag(), n)
            .unwrap_or(self.slots.len());
        self.slots.insert(index, Slot::Item(item));
        self.item_at(index)
    }

    /// Overwrites the `n`th occurrence of `tag` and returns the old value.
    ///
    /// The container is left untouched when `item` is not of the variant
    /// `tag` stands for or when there is no such occurrence.
    pub fn replace_nth(&mut self, tag: I::Tag, n: usize, item: I) -> Result<I> {
        if item.tag() != tag {
            return Err(WordmlError::TypeMismatch {
                expected: tag.entry().type_name(),
                found: item.type_name(),
            });
        }
        let index = self
            .position_of(tag, n)
            .ok_or_else(|| WordmlError::SlotNotFound {
                tag: tag.name().local_name.to_string(),
                index: n,
            })?;
        match std::mem::replace(&mut self.slots[index], Slot::Item(item)) {
            Slot::Item(old) => Ok(old),
            Slot::Foreign(_) => unreachable!("position_of only yields item slots"),
        }
    }

    /// Removes the `n`th occurrence of `tag`; `None` when there is none.
    pub fn remove_nth(&mut self, tag: I::Tag, n: usize) -> Option<I> {
        let index = self.position_of(tag, n)?;
        match self.slots.remove(index) {
            Slot::Item(item) => Some(item),
            Slot::Foreign(_) => None,
        }
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn write(&self, out: &mut XmlSink<'_>) -> Result<()> {
        for slot in &self.slots {
            match slot {
                Slot::Item(item) => item.encode(out)?,
                Slot::Foreign(element) => element.write(out)?,
            }
        }
        Ok(())
    }

    fn position_of(&self, tag: I::Tag, n: usize) -> Option<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| matches!(slot, Slot::Item(item) if item.tag() == tag))
            .nth(n)
            .map(|(index, _)| index)
    }

    fn item_at(&mut self, index: usize) -> &mut I {
        match &mut self.slots[index] {
            Slot::Item(item) => item,
            Slot::Foreign(_) => unreachable!("slot {} was just filled with an item", index),
        }
    }
}

impl<I: ChoiceItem> FromIterator<I> for ChildSequence<I> {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Self {
            slots: iter.into_iter().map(Slot::Item).collect(),
        }
    }
}

impl<I: ChoiceItem> Extend<I> for ChildSequence<I> {
    fn extend<T: IntoIterator<Item = I>>(&mut self, iter: T) {
        self.slots.extend(iter.into_iter().map(Slot::Item));
    }
}
