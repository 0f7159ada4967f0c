//! Ordered values of a non-functional property.

use std::cmp::Ordering;
use std::fmt;
use std::ptr;

use chrono::{DateTime, Duration, FixedOffset};
use serde_json::Value;

use crate::catalog::PropertyEntry;
use crate::error::{Error, Result};
use crate::iri::Iri;
use crate::literal::Literal;
use crate::manager::Decoder;
use crate::record::TypeRecord;
use crate::value::{Member, PropertyValue};

/// The values of one non-functional property, indexed `0..len`.
///
/// Indices stay contiguous through every mutation. Borrowing a [`Cursor`]
/// freezes the list, so a cursor never observes a stale position.
///
/// Equality and order look at the values as written: plain values in list
/// order, then `<name>Map`-keyed values in list order, skipping empty ones.
/// Two lists that differ only in how the two groups interleave are equal.
#[derive(Clone)]
pub struct PropertyList {
    entry: &'static PropertyEntry,
    values: Vec<PropertyValue>,
}

macro_rules! typed_mutators {
    ($(
        $label:literal => $append:ident, $prepend:ident, $set:ident ($owned:ty), |$v:ident| $member:expr;
    )+) => {
        $(
            #[doc = concat!("Adds ", $label, " at the end.")]
            ///
            /// # Errors
            ///
            /// [`Error::KindNotDeclared`] if the property does not declare the kind.
            pub fn $append(&mut self, $v: $owned) -> Result<()> {
                self.append($member)
            }

            #[doc = concat!("Adds ", $label, " at the front.")]
            ///
            /// # Errors
            ///
            /// [`Error::KindNotDeclared`] if the property does not declare the kind.
            pub fn $prepend(&mut self, $v: $owned) -> Result<()> {
                self.prepend($member)
            }

            #[doc = concat!("Replaces the value at `index` with ", $label, ", returning the old one.")]
            ///
            /// # Errors
            ///
            /// [`Error::IndexOutOfRange`] unless `index < len`, or
            /// [`Error::KindNotDeclared`] if the property does not declare the kind.
            pub fn $set(&mut self, index: usize, $v: $owned) -> Result<PropertyValue> {
                self.set(index, $member)
            }
        )+
    };
}

impl PropertyList {
    /// An empty list of the property described by `entry`.
    #[must_use]
    pub fn new(entry: &'static PropertyEntry) -> Self {
        Self {
            entry,
            values: Vec::new(),
        }
    }

    /// The property the list holds values of.
    #[must_use]
    pub fn entry(&self) -> &'static PropertyEntry {
        self.entry
    }

    /// The property's local name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.entry.name()
    }

    /// Number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if the list holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The value at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PropertyValue> {
        self.values.get(index)
    }

    /// Mutable access to the value at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut PropertyValue> {
        self.values.get_mut(index)
    }

    /// A cursor at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] unless `index < len`.
    pub fn at(&self, index: usize) -> Result<Cursor<'_>> {
        self.check(index)?;
        Ok(Cursor { list: self, index })
    }

    /// A cursor at the first value; equal to [`end`](Self::end) when empty.
    #[must_use]
    pub fn begin(&self) -> Cursor<'_> {
        Cursor { list: self, index: 0 }
    }

    /// The past-the-end cursor.
    #[must_use]
    pub fn end(&self) -> Cursor<'_> {
        Cursor {
            list: self,
            index: self.values.len(),
        }
    }

    /// Iterates over the values in order.
    pub fn iter(&self) -> std::slice::Iter<'_, PropertyValue> {
        self.values.iter()
    }

    fn check(&self, index: usize) -> Result<()> {
        if index < self.values.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index,
                len: self.values.len(),
            })
        }
    }

    fn make(&self, member: Member) -> Result<PropertyValue> {
        let mut value = PropertyValue::new(self.entry);
        value.set(member)?;
        Ok(value)
    }

    /// Adds a value at the end.
    ///
    /// # Errors
    ///
    /// [`Error::KindNotDeclared`] if the property does not admit `member`.
    pub fn append(&mut self, member: Member) -> Result<()> {
        let value = self.make(member)?;
        self.values.push(value);
        Ok(())
    }

    /// Adds a value at the front, shifting every index up by one.
    ///
    /// # Errors
    ///
    /// [`Error::KindNotDeclared`] if the property does not admit `member`.
    pub fn prepend(&mut self, member: Member) -> Result<()> {
        self.insert(0, member)
    }

    /// Inserts a value so that it ends up at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index > len`, or
    /// [`Error::KindNotDeclared`] if the property does not admit `member`.
    pub fn insert(&mut self, index: usize, member: Member) -> Result<()> {
        if index > self.values.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.values.len(),
            });
        }
        let value = self.make(member)?;
        self.values.insert(index, value);
        Ok(())
    }

    /// Replaces the value at `index`, returning the old one.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] unless `index < len`, or
    /// [`Error::KindNotDeclared`] if the property does not admit `member`.
    pub fn set(&mut self, index: usize, member: Member) -> Result<PropertyValue> {
        self.check(index)?;
        let value = self.make(member)?;
        Ok(std::mem::replace(&mut self.values[index], value))
    }

    /// Removes and returns the value at `index`, shifting later indices down.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] unless `index < len`.
    pub fn remove(&mut self, index: usize) -> Result<PropertyValue> {
        self.check(index)?;
        Ok(self.values.remove(index))
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Adds an IRI reference at the end.
    pub fn append_iri(&mut self, iri: Iri) {
        self.values.push(PropertyValue::with(self.entry, Member::Iri(iri)));
    }

    /// Adds an IRI reference at the front.
    pub fn prepend_iri(&mut self, iri: Iri) {
        self.values.insert(0, PropertyValue::with(self.entry, Member::Iri(iri)));
    }

    /// Replaces the value at `index` with an IRI reference, returning the
    /// old one.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] unless `index < len`.
    pub fn set_iri(&mut self, index: usize, iri: Iri) -> Result<PropertyValue> {
        self.set(index, Member::Iri(iri))
    }

    typed_mutators! {
        "a nested document" => append_record, prepend_record, set_record(TypeRecord), |v| Member::Record(Box::new(v));
        "an `xsd:string`" => append_xsd_string, prepend_xsd_string, set_xsd_string(impl Into<String>), |v| Member::Literal(Literal::String(v.into()));
        "an `xsd:boolean`" => append_xsd_boolean, prepend_xsd_boolean, set_xsd_boolean(bool), |v| Member::Literal(Literal::Boolean(v));
        "an `xsd:dateTime`" => append_xsd_date_time, prepend_xsd_date_time, set_xsd_date_time(DateTime<FixedOffset>), |v| Member::Literal(Literal::DateTime(v));
        "an `xsd:duration`" => append_xsd_duration, prepend_xsd_duration, set_xsd_duration(Duration), |v| Member::Literal(Literal::Duration(v));
        "an `xsd:float`" => append_xsd_float, prepend_xsd_float, set_xsd_float(f64), |v| Member::Literal(Literal::Float(v));
        "an `xsd:nonNegativeInteger`" => append_xsd_non_negative_integer, prepend_xsd_non_negative_integer, set_xsd_non_negative_integer(u64), |v| Member::Literal(Literal::NonNegativeInteger(v));
        "an `xsd:anyURI`" => append_xsd_any_uri, prepend_xsd_any_uri, set_xsd_any_uri(Iri), |v| Member::Literal(Literal::AnyUri(v));
        "a BCP 47 language tag" => append_bcp47, prepend_bcp47, set_bcp47(impl Into<String>), |v| Member::Literal(Literal::LanguageTag(v.into()));
        "an RFC 2045 media type" => append_rfc2045, prepend_rfc2045, set_rfc2045(impl Into<String>), |v| Member::Literal(Literal::MediaType(v.into()));
        "an RFC 5988 link relation" => append_rfc5988, prepend_rfc5988, set_rfc5988(impl Into<String>), |v| Member::Literal(Literal::LinkRelation(v.into()));
    }

    /// Non-empty values in written order: plain values, then map-keyed ones.
    fn written(&self) -> impl Iterator<Item = &PropertyValue> + '_ {
        let held = self.values.iter().filter(|v| !v.is_empty());
        let plain = held.clone().filter(|v| !v.is_map_keyed());
        plain.chain(held.filter(|v| v.is_map_keyed()))
    }

    /// Lexicographic order over the values as written, a proper prefix
    /// first.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        let mut ours = self.written();
        let mut theirs = other.written();
        loop {
            match (ours.next(), theirs.next()) {
                (None, None) => return Ordering::Equal,
                (None, Some(_)) => return Ordering::Less,
                (Some(_), None) => return Ordering::Greater,
                (Some(a), Some(b)) => match a.compare(b) {
                    Ordering::Equal => {}
                    unequal => return unequal,
                },
            }
        }
    }

    /// Strict order under [`compare`](Self::compare).
    #[must_use]
    pub fn less_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Less
    }

    /// Reads the property's plain key (one value or an array of them) and
    /// its `<name>Map` key (one map or an array of maps). Plain values come
    /// first.
    pub(crate) fn decode(
        entry: &'static PropertyEntry,
        raw: Option<&Value>,
        raw_maps: Option<&Value>,
        decoder: &Decoder<'_>,
    ) -> Result<Self> {
        let mut list = Self::new(entry);
        for item in raw.into_iter().flat_map(elements) {
            list.values.push(PropertyValue::decode(entry, item, decoder)?);
        }
        for item in raw_maps.into_iter().flat_map(elements) {
            list.values
                .push(PropertyValue::decode_language(entry, item, decoder)?);
        }
        Ok(list)
    }

    /// Writes the values: plain values for the property's key and
    /// natural-language maps for its `<name>Map` key. A single value is
    /// written bare unless the property keeps arrays.
    #[must_use]
    pub fn serialize(&self) -> (Option<Value>, Option<Value>) {
        let mut plain = Vec::new();
        let mut maps = Vec::new();
        for value in &self.values {
            let Some(json) = value.serialize() else { continue };
            if value.is_map_keyed() {
                maps.push(json);
            } else {
                plain.push(json);
            }
        }
        let collapse = self.entry.property().collapse_single;
        (pack(plain, collapse), pack(maps, collapse))
    }
}

fn elements(raw: &Value) -> std::slice::Iter<'_, Value> {
    match raw {
        Value::Array(items) => items.iter(),
        single => std::slice::from_ref(single).iter(),
    }
}

/// A lone array is never collapsed: it would read back as its elements.
fn pack(mut values: Vec<Value>, collapse: bool) -> Option<Value> {
    let nested = matches!(values.as_slice(), [Value::Array(_)]);
    match values.len() {
        0 => None,
        1 if collapse && !nested => values.pop(),
        _ => Some(Value::Array(values)),
    }
}

impl fmt::Debug for PropertyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyList")
            .field("property", &self.name())
            .field("values", &self.values)
            .finish()
    }
}

impl PartialEq for PropertyList {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.entry, other.entry) && self.written().eq(other.written())
    }
}

impl<'a> IntoIterator for &'a PropertyList {
    type Item = &'a PropertyValue;
    type IntoIter = std::slice::Iter<'a, PropertyValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// A position in a [`PropertyList`], from the first value to one past the
/// last.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    list: &'a PropertyList,
    index: usize,
}

impl<'a> Cursor<'a> {
    /// The position.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// True at the past-the-end position.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.index >= self.list.len()
    }

    /// The value here; `None` at the end.
    #[must_use]
    pub fn value(&self) -> Option<&'a PropertyValue> {
        self.list.values.get(self.index)
    }

    /// The following position; stays at the end once there.
    #[must_use]
    pub fn next(self) -> Cursor<'a> {
        Cursor {
            list: self.list,
            index: (self.index + 1).min(self.list.len()),
        }
    }

    /// The preceding position; `None` before the first value.
    #[must_use]
    pub fn prev(self) -> Option<Cursor<'a>> {
        self.index.checked_sub(1).map(|index| Cursor {
            list: self.list,
            index,
        })
    }
}

impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.list, other.list) && self.index == other.index
    }
}

impl Eq for Cursor<'_> {}
