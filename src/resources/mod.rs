//! Resource dictionaries (PDF 32000-1, 7.8.3).
//!
//! A [`PdfResources`] wraps the `/Resources` dictionary of a page, form
//! XObject or pattern. Each [`ResourceType`] gets its own sub-dictionary that
//! maps names such as `/Ft0` to the resource objects, normally by indirect
//! reference. Content streams refer to resources by those names, so the table
//! can also generate names that are not in use yet.

pub mod config;
pub mod kind;

pub use config::ResourcesConfig;
pub use kind::ResourceType;

use crate::constants::keys;
use crate::error::{PdfError, PdfResult};
use crate::types::{
    AsNameKey, IndirectResolver, IndirectResolverMut, PdfArray, PdfDictionary, PdfName, PdfValue,
};
use log::{debug, trace, warn};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PdfResources {
    dict: PdfDictionary,
    /// Per category, where the next name search starts. Only moves forward.
    current_ids: [u32; ResourceType::COUNT],
}

impl PdfResources {
    /// Empty resources, e.g. for a form XObject built from scratch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a resource dictionary loaded from an existing document.
    pub fn from_dictionary(dict: PdfDictionary) -> Self {
        PdfResources {
            dict,
            current_ids: [0; ResourceType::COUNT],
        }
    }

    /// Wrap `value` if it is a dictionary.
    pub fn try_from_value(value: PdfValue) -> Option<Self> {
        match value {
            PdfValue::Dictionary(dict) => Some(Self::from_dictionary(dict)),
            _ => None,
        }
    }

    /// Resources for a freshly created canvas, with the default `/ProcSet`.
    pub fn for_canvas() -> Self {
        Self::for_canvas_with(&ResourcesConfig::default())
    }

    pub fn for_canvas_with(config: &ResourcesConfig) -> Self {
        let mut resources = Self::new();
        if config.write_proc_set {
            let procset: PdfArray = config.proc_set.iter().cloned().map(PdfValue::Name).collect();
            resources.dict.insert(keys::PROC_SET, procset);
        }
        resources
    }

    pub fn dictionary(&self) -> &PdfDictionary {
        &self.dict
    }

    pub fn dictionary_mut(&mut self) -> &mut PdfDictionary {
        &mut self.dict
    }

    pub fn into_dictionary(self) -> PdfDictionary {
        self.dict
    }

    /// Where the next name search for `ty` starts.
    pub fn current_id(&self, ty: ResourceType) -> u32 {
        self.current_ids[ty.index()]
    }

    /// Store `value` under a newly generated name and return that name.
    ///
    /// Names are the category prefix followed by a decimal counter, e.g.
    /// `/XOb0`, `/XOb1`. The counter skips names present in the category at
    /// the time of the call. Pass a [`PdfReference`](crate::types::PdfReference)
    /// to store the resource indirectly.
    ///
    /// A category dictionary stored by reference is edited in place through
    /// `resolver`. Fails with [`PdfError::InvalidDataType`] when that
    /// reference does not lead to a dictionary.
    pub fn add_resource<R>(
        &mut self,
        ty: ResourceType,
        value: impl Into<PdfValue>,
        resolver: &mut R,
    ) -> PdfResult<PdfName>
    where
        R: IndirectResolverMut + ?Sized,
    {
        let prefix = ty.prefix();
        let mut id = self.current_ids[ty.index()];
        let dict = category_dict_mut(&mut self.dict, ty.name(), resolver)?;

        let mut candidate = String::with_capacity(prefix.len() + 4);
        loop {
            candidate.clear();
            candidate.push_str(prefix);
            candidate.push_str(&id.to_string());
            if !dict.contains_key(candidate.as_str()) {
                break;
            }
            trace!("Resource name {} already taken in {}", candidate, ty);
            id += 1;
        }

        // prefix and digits are ASCII, so the raw bytes are the text
        let name = PdfName::from_raw(candidate.into_bytes());
        dict.insert(name.clone(), value);
        self.current_ids[ty.index()] = id;
        debug!("Added resource {} to {}", name, ty);
        Ok(name)
    }

    /// Store `value` under `key`, replacing any previous entry.
    pub fn add_named_resource<R>(
        &mut self,
        ty: ResourceType,
        key: PdfName,
        value: impl Into<PdfValue>,
        resolver: &mut R,
    ) -> PdfResult<()>
    where
        R: IndirectResolverMut + ?Sized,
    {
        self.add_resource_to(ty.name(), key, value, resolver)
    }

    /// Like [`PdfResources::add_named_resource`] for a category given by name.
    pub fn add_resource_to<R>(
        &mut self,
        category: &PdfName,
        key: PdfName,
        value: impl Into<PdfValue>,
        resolver: &mut R,
    ) -> PdfResult<()>
    where
        R: IndirectResolverMut + ?Sized,
    {
        category_dict_mut(&mut self.dict, category, resolver)?.insert(key, value);
        Ok(())
    }

    /// Look up a resource and dereference it.
    ///
    /// `None` when the category or key is missing, or when a reference does
    /// not resolve. Category dictionaries stored by reference are followed
    /// too.
    pub fn get_resource<'a, K, R>(
        &'a self,
        ty: ResourceType,
        key: &K,
        resolver: &'a R,
    ) -> Option<&'a PdfValue>
    where
        K: AsNameKey + ?Sized,
        R: IndirectResolver + ?Sized,
    {
        self.get_resource_in(ty.name(), key, resolver)
    }

    pub fn get_resource_in<'a, C, K, R>(
        &'a self,
        category: &C,
        key: &K,
        resolver: &'a R,
    ) -> Option<&'a PdfValue>
    where
        C: AsNameKey + ?Sized,
        K: AsNameKey + ?Sized,
        R: IndirectResolver + ?Sized,
    {
        self.category(category, resolver)?.get(key)?.resolve(resolver)
    }

    /// The entry stored for `key`, without dereferencing it.
    pub fn find_resource<'a, K, R>(
        &'a self,
        ty: ResourceType,
        key: &K,
        resolver: &'a R,
    ) -> Option<&'a PdfValue>
    where
        K: AsNameKey + ?Sized,
        R: IndirectResolver + ?Sized,
    {
        self.category(ty.name(), resolver)?.get(key)
    }

    pub fn has_resources<R: IndirectResolver + ?Sized>(&self, ty: ResourceType, resolver: &R) -> bool {
        self.category(ty.name(), resolver).is_some()
    }

    /// Entries of a category in insertion order; empty when the category is
    /// missing or does not lead to a dictionary.
    pub fn resources<'a, R: IndirectResolver + ?Sized>(
        &'a self,
        ty: ResourceType,
        resolver: &'a R,
    ) -> impl Iterator<Item = (&'a PdfName, &'a PdfValue)> + 'a {
        self.resources_in(ty.name(), resolver)
    }

    pub fn resources_in<'a, C, R>(
        &'a self,
        category: &C,
        resolver: &'a R,
    ) -> impl Iterator<Item = (&'a PdfName, &'a PdfValue)> + 'a
    where
        C: AsNameKey + ?Sized,
        R: IndirectResolver + ?Sized,
    {
        let dict = self.category(category, resolver);
        dict.into_iter().flat_map(PdfDictionary::iter)
    }

    /// Remove one entry. Does not rewind name generation.
    pub fn remove_resource<K, R>(&mut self, ty: ResourceType, key: &K, resolver: &mut R)
    where
        K: AsNameKey + ?Sized,
        R: IndirectResolverMut + ?Sized,
    {
        self.remove_resource_in(ty.name(), key, resolver);
    }

    pub fn remove_resource_in<C, K, R>(&mut self, category: &C, key: &K, resolver: &mut R)
    where
        C: AsNameKey + ?Sized,
        K: AsNameKey + ?Sized,
        R: IndirectResolverMut + ?Sized,
    {
        let dict = match self.dict.get_mut(category) {
            Some(PdfValue::Dictionary(dict)) => Some(dict),
            Some(PdfValue::Reference(reference)) => {
                let reference = *reference;
                resolver.resolve_mut(&reference).and_then(PdfValue::as_dict_mut)
            }
            _ => None,
        };
        match dict {
            Some(dict) => {
                dict.remove(key);
            }
            None => trace!("No resource category to remove from"),
        }
    }

    /// Remove a whole category. Does not rewind name generation.
    pub fn remove_resources(&mut self, ty: ResourceType) {
        self.remove_resources_in(ty.name());
    }

    /// Drops the category entry itself; an indirect category object is left
    /// in the store.
    pub fn remove_resources_in<C: AsNameKey + ?Sized>(&mut self, category: &C) {
        if self.dict.remove(category).is_none() {
            trace!("Resource category already absent");
        }
    }

    fn category<'a, C, R>(&'a self, category: &C, resolver: &'a R) -> Option<&'a PdfDictionary>
    where
        C: AsNameKey + ?Sized,
        R: IndirectResolver + ?Sized,
    {
        self.dict.get(category)?.resolve(resolver)?.as_dict()
    }
}

/// The category dictionary to edit, created when missing.
///
/// A reference is followed, never overwritten. Any other non-dictionary
/// value is replaced.
fn category_dict_mut<'a, R>(
    resources: &'a mut PdfDictionary,
    category: &PdfName,
    resolver: &'a mut R,
) -> PdfResult<&'a mut PdfDictionary>
where
    R: IndirectResolverMut + ?Sized,
{
    let slot = resources
        .entry(category.clone())
        .or_insert_with(|| PdfValue::Dictionary(PdfDictionary::new()));
    match slot {
        PdfValue::Dictionary(dict) => Ok(dict),
        PdfValue::Reference(reference) => {
            let reference = *reference;
            match resolver.resolve_mut(&reference) {
                Some(PdfValue::Dictionary(dict)) => Ok(dict),
                Some(other) => Err(PdfError::InvalidDataType {
                    expected: "dictionary",
                    found: other.type_name(),
                }),
                None => Err(PdfError::InvalidDataType {
                    expected: "dictionary",
                    found: "unresolved reference",
                }),
            }
        }
        other => {
            warn!(
                "Resource category {} holds a {}, replacing it with a dictionary",
                category,
                other.type_name()
            );
            *other = PdfValue::Dictionary(PdfDictionary::new());
            match other {
                PdfValue::Dictionary(dict) => Ok(dict),
                _ => unreachable!("category slot was just set to a dictionary"),
            }
        }
    }
}

impl TryFrom<PdfValue> for PdfResources {
    type Error = PdfError;

    fn try_from(value: PdfValue) -> Result<Self, Self::Error> {
        match value {
            PdfValue::Dictionary(dict) => Ok(Self::from_dictionary(dict)),
            other => Err(PdfError::InvalidDataType {
                expected: "dictionary",
                found: other.type_name(),
            }),
        }
    }
}
