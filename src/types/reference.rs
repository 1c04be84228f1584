use crate::types::PdfValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PdfReference {
    pub object_number: u32,
    pub generation_number: u16,
}

impl PdfReference {
    pub fn new(object_number: u32, generation_number: u16) -> Self {
        PdfReference {
            object_number,
            generation_number,
        }
    }

    pub fn id(&self) -> ObjectId {
        ObjectId {
            number: self.object_number,
            generation: self.generation_number,
        }
    }
}

impl fmt::Display for PdfReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} R", self.object_number, self.generation_number)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId {
    pub number: u32,
    pub generation: u16,
}

impl ObjectId {
    pub fn new(number: u32, generation: u16) -> Self {
        ObjectId { number, generation }
    }

    pub fn to_reference(&self) -> PdfReference {
        PdfReference::new(self.number, self.generation)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} obj", self.number, self.generation)
    }
}

impl From<ObjectId> for PdfReference {
    fn from(id: ObjectId) -> Self {
        id.to_reference()
    }
}

impl From<PdfReference> for ObjectId {
    fn from(reference: PdfReference) -> Self {
        reference.id()
    }
}

/// Dereferences indirect references.
///
/// Implemented by whatever owns the document's objects. The resource table only
/// stores references and asks a resolver for the pointee on lookup.
pub trait IndirectResolver {
    fn resolve(&self, reference: &PdfReference) -> Option<&PdfValue>;
}

/// Mutable counterpart of [`IndirectResolver`], used when an edit has to
/// reach an object stored by reference.
pub trait IndirectResolverMut: IndirectResolver {
    fn resolve_mut(&mut self, reference: &PdfReference) -> Option<&mut PdfValue>;
}

/// In-memory table of indirect objects.
///
/// Object numbers are handed out sequentially from 1 with generation 0.
#[derive(Debug, Clone)]
pub struct ObjectStore {
    objects: IndexMap<ObjectId, PdfValue>,
    /// `None` once object number `u32::MAX` has been used.
    next_number: Option<u32>,
}

impl ObjectStore {
    pub fn new() -> Self {
        ObjectStore {
            objects: IndexMap::new(),
            next_number: Some(1),
        }
    }

    /// Store `value` as a new indirect object and return a reference to it.
    ///
    /// `None` when every object number up to `u32::MAX` is spent.
    pub fn add(&mut self, value: impl Into<PdfValue>) -> Option<PdfReference> {
        let number = self.next_number?;
        self.next_number = number.checked_add(1);
        let id = ObjectId::new(number, 0);
        self.objects.insert(id, value.into());
        Some(id.to_reference())
    }

    /// Store `value` under an explicit id, e.g. when loading existing objects.
    /// Returns the value previously stored under that id.
    pub fn insert(&mut self, id: ObjectId, value: impl Into<PdfValue>) -> Option<PdfValue> {
        if self.next_number.is_some_and(|next| id.number >= next) {
            self.next_number = id.number.checked_add(1);
        }
        self.objects.insert(id, value.into())
    }

    pub fn get(&self, id: ObjectId) -> Option<&PdfValue> {
        self.objects.get(&id)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut PdfValue> {
        self.objects.get_mut(&id)
    }

    pub fn remove(&mut self, id: ObjectId) -> Option<PdfValue> {
        self.objects.shift_remove(&id)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for ObjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl IndirectResolver for ObjectStore {
    fn resolve(&self, reference: &PdfReference) -> Option<&PdfValue> {
        self.objects.get(&reference.id())
    }
}

impl IndirectResolverMut for ObjectStore {
    fn resolve_mut(&mut self, reference: &PdfReference) -> Option<&mut PdfValue> {
        self.objects.get_mut(&reference.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_display() {
        assert_eq!(PdfReference::new(12, 0).to_string(), "12 0 R");
        assert_eq!(ObjectId::new(3, 1).to_string(), "3 1 obj");
    }

    #[test]
    fn test_store_allocates_sequential_numbers() {
        let mut store = ObjectStore::new();
        let a = store.add(PdfValue::Integer(1)).unwrap();
        let b = store.add(PdfValue::Integer(2)).unwrap();
        assert_eq!(a, PdfReference::new(1, 0));
        assert_eq!(b, PdfReference::new(2, 0));
        assert_eq!(store.resolve(&b), Some(&PdfValue::Integer(2)));
        assert_eq!(store.resolve(&PdfReference::new(9, 0)), None);
    }

    #[test]
    fn test_store_insert_moves_counter_forward() {
        let mut store = ObjectStore::default();
        store.insert(ObjectId::new(10, 0), PdfValue::Null);
        let next = store.add(PdfValue::Boolean(true)).unwrap();
        assert_eq!(next.object_number, 11);
        assert_eq!(store.len(), 2);

        // lower ids leave the counter alone
        store.insert(ObjectId::new(4, 0), PdfValue::Null);
        assert_eq!(store.add(PdfValue::Null).unwrap().object_number, 12);

        assert_eq!(store.remove(ObjectId::new(10, 0)), Some(PdfValue::Null));
        assert!(store.get(ObjectId::new(10, 0)).is_none());
    }

    #[test]
    fn test_store_stops_at_last_object_number() {
        let mut store = ObjectStore::new();
        store.insert(ObjectId::new(1, 0), PdfValue::Integer(1));
        store.insert(ObjectId::new(u32::MAX, 0), PdfValue::Null);

        assert_eq!(store.add(PdfValue::Boolean(true)), None);
        assert_eq!(store.get(ObjectId::new(1, 0)), Some(&PdfValue::Integer(1)));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_last_object_number_can_be_added_once() {
        let mut store = ObjectStore::new();
        store.insert(ObjectId::new(u32::MAX - 1, 0), PdfValue::Null);
        assert_eq!(store.add(PdfValue::Null), Some(PdfReference::new(u32::MAX, 0)));
        assert_eq!(store.add(PdfValue::Null), None);
    }

    #[test]
    fn test_resolve_mut_edits_in_place() {
        let mut store = ObjectStore::new();
        let reference = store.add(PdfValue::Integer(1)).unwrap();
        *store.resolve_mut(&reference).unwrap() = PdfValue::Integer(2);
        assert_eq!(store.resolve(&reference), Some(&PdfValue::Integer(2)));
        assert!(store.resolve_mut(&PdfReference::new(7, 0)).is_none());
    }
}
