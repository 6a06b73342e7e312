//! Shared, sentinel-framed text referenced by every node of a tree.

use std::ops::Range;
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::IndexType;

/// One or more framed strings stored back to back in a single
/// reference-counted buffer.
///
/// Nodes never copy characters; they store index ranges into this buffer.
/// Each string is expected to start and end with a sentinel that occurs
/// nowhere else in it, so no suffix is a prefix of another and every suffix
/// start has a character to its left.
///
/// # Examples
///
/// ```
/// use repeat_suffix_tree::TextBuffer;
/// let mut text = TextBuffer::framed(&['a', 'b'], '$').unwrap();
/// text.push_framed(&['b', 'c'], '$').unwrap();
/// assert_eq!(text.as_slice(), &['$', 'a', 'b', '$', '$', 'b', 'c', '$']);
/// assert_eq!(text.string_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct TextBuffer<C> {
    data: Rc<Vec<C>>,
    strings: Vec<Range<IndexType>>,
}

impl<C> Default for TextBuffer<C> {
    fn default() -> Self {
        Self {
            data: Rc::new(Vec::new()),
            strings: Vec::new(),
        }
    }
}

impl<C: Copy + Eq> TextBuffer<C> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer holding `body` framed by `sentinel` on both sides.
    pub fn framed(body: &[C], sentinel: C) -> Result<Self> {
        let mut text = Self::new();
        text.push_framed(body, sentinel)?;
        Ok(text)
    }

    /// Buffer holding one string the caller has already framed.
    ///
    /// The framing is not checked.
    pub fn from_framed(framed: Vec<C>) -> Result<Self> {
        let mut text = Self::new();
        text.push_preframed(&framed)?;
        Ok(text)
    }

    /// Frames `body` with `sentinel` and appends it as a new string.
    /// Returns the buffer range of the framed string.
    pub fn push_framed(&mut self, body: &[C], sentinel: C) -> Result<Range<IndexType>> {
        if let Some(offset) = body.iter().position(|&ch| ch == sentinel) {
            return Err(Error::SentinelInText {
                string: self.strings.len(),
                offset,
            });
        }
        self.check_capacity(body.len() + 2)?;

        let data = Rc::make_mut(&mut self.data);
        let start = data.len() as IndexType;
        data.push(sentinel);
        data.extend_from_slice(body);
        data.push(sentinel);
        Ok(self.close_string(start))
    }

    /// Appends a string that already carries its sentinels.
    pub fn push_preframed(&mut self, framed: &[C]) -> Result<Range<IndexType>> {
        self.check_capacity(framed.len())?;

        let data = Rc::make_mut(&mut self.data);
        let start = data.len() as IndexType;
        data.extend_from_slice(framed);
        Ok(self.close_string(start))
    }

    fn close_string(&mut self, start: IndexType) -> Range<IndexType> {
        let range = start..self.data.len() as IndexType;
        self.strings.push(range.clone());
        range
    }

    fn check_capacity(&self, extra: usize) -> Result<()> {
        let len = self.data.len() + extra;
        let max = IndexType::MAX as usize;
        if len > max {
            return Err(Error::TextTooLong { len, max });
        }
        Ok(())
    }

    /// Character immediately left of `index`, or `None` at the very start.
    ///
    /// `None` compares unequal to every character, so occurrences at the
    /// start of the text always count as left-diverse.
    #[inline]
    pub fn left_context(&self, index: IndexType) -> Option<C> {
        index.checked_sub(1).map(|left| self.data[left as usize])
    }

    /// Whether `index` holds the closing sentinel of one of the strings.
    pub fn is_terminator(&self, index: IndexType) -> bool {
        self.strings
            .binary_search_by_key(&(index + 1), |string| string.end)
            .is_ok()
    }

    /// Whether positions `a` and `b` hold the same symbol.
    ///
    /// Every string's closing sentinel is a symbol of its own: it matches
    /// nothing, not even the closing sentinel of another string with the
    /// same character. Identical suffixes of different strings therefore
    /// part at their terminators instead of sharing a leaf.
    #[inline]
    pub(crate) fn same_symbol(&self, a: IndexType, b: IndexType) -> bool {
        self.data[a as usize] == self.data[b as usize] && !self.is_terminator(a) && !self.is_terminator(b)
    }

    /// Whether position `index` holds `ch`. Closing sentinels match no
    /// character.
    #[inline]
    pub(crate) fn symbol_is(&self, index: IndexType, ch: C) -> bool {
        self.data[index as usize] == ch && !self.is_terminator(index)
    }

    #[inline]
    pub fn slice(&self, begin: IndexType, end: IndexType) -> &[C] {
        &self.data[begin as usize..end as usize]
    }

    pub fn as_slice(&self) -> &[C] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn string_count(&self) -> usize {
        self.strings.len()
    }

    /// Buffer ranges of the framed strings, in insertion order.
    pub fn strings(&self) -> &[Range<IndexType>] {
        &self.strings
    }

    /// The `index`-th framed string, sentinels included.
    pub fn string(&self, index: usize) -> Option<&[C]> {
        self.strings
            .get(index)
            .map(|range| self.slice(range.start, range.end))
    }
}

/// Start indices of the suffixes indexed for one framed string.
///
/// The suffix at the leading sentinel and the one-character suffix at the
/// trailing sentinel are left out.
pub(crate) fn suffix_starts(string: &Range<IndexType>) -> Range<IndexType> {
    let first = string.start + 1;
    let last = string.end.saturating_sub(1).max(first);
    first..last
}
