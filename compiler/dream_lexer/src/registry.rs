//! Classification tables.
//!
//! Pre-computes a lookup table from token type to display categories. Each
//! taxonomy owns one table, built lazily on first use and immutable after.

use rustc_hash::FxHashMap;

use crate::category::DisplayCategory;
use crate::error::ContractViolation;
use crate::taxonomy::{Taxonomy, TokenType};

/// Mapping from token type to ordered display categories.
///
/// Read-only once built and `Sync`, so any number of threads may classify
/// concurrently without coordination.
#[derive(Debug)]
pub struct ClassificationTable<Ty: TokenType> {
    taxonomy: &'static str,
    entries: FxHashMap<Ty, &'static [DisplayCategory]>,
}

impl<Ty: TokenType> ClassificationTable<Ty> {
    /// Build the table for taxonomy `T` from its category rules.
    pub fn build<T: Taxonomy<Type = Ty>>() -> Self {
        let mut entries = FxHashMap::default();
        entries.reserve(Ty::ALL.len());
        for &ty in Ty::ALL {
            entries.insert(ty, T::categories(ty));
        }
        tracing::debug!(
            taxonomy = T::NAME,
            version = T::VERSION,
            entries = entries.len(),
            "built classification table"
        );
        Self {
            taxonomy: T::NAME,
            entries,
        }
    }

    /// Build a table from explicit entries.
    ///
    /// Types missing from `entries` stay unregistered; [`try_classify`]
    /// reports them.
    ///
    /// [`try_classify`]: Self::try_classify
    pub fn from_entries(
        taxonomy: &'static str,
        entries: impl IntoIterator<Item = (Ty, &'static [DisplayCategory])>,
    ) -> Self {
        Self {
            taxonomy,
            entries: entries.into_iter().collect(),
        }
    }

    /// Name of the taxonomy this table belongs to.
    pub fn taxonomy(&self) -> &'static str {
        self.taxonomy
    }

    /// Categories for `ty`, most specific first. Empty means "no special
    /// styling".
    #[inline]
    pub fn try_classify(&self, ty: Ty) -> Result<&'static [DisplayCategory], ContractViolation> {
        self.entries
            .get(&ty)
            .copied()
            .ok_or_else(|| ContractViolation::UnregisteredType {
                taxonomy: self.taxonomy,
                token_type: ty.name(),
            })
    }

    /// Like [`try_classify`](Self::try_classify), but an unregistered type
    /// is a programmer error.
    ///
    /// # Panics
    ///
    /// Panics if `ty` is not registered.
    #[inline]
    pub fn classify(&self, ty: Ty) -> &'static [DisplayCategory] {
        self.try_classify(ty)
            .unwrap_or_else(|violation| panic!("{violation}"))
    }

    /// Number of registered token types.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered entries in `TokenType::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Ty, &'static [DisplayCategory])> + '_ {
        Ty::ALL
            .iter()
            .filter_map(|ty| self.entries.get(ty).map(|cats| (*ty, *cats)))
    }
}

/// Categories for `ty` in taxonomy `T`'s table.
#[inline]
pub fn classify<T: Taxonomy>(ty: T::Type) -> &'static [DisplayCategory] {
    T::registry().classify(ty)
}

/// Categories for `ty`, or the violation if it is unregistered.
#[inline]
pub fn try_classify<T: Taxonomy>(
    ty: T::Type,
) -> Result<&'static [DisplayCategory], ContractViolation> {
    T::registry().try_classify(ty)
}
