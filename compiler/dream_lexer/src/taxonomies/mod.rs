//! Taxonomy versions.
//!
//! Each revision of the Dream highlighter refined the previous token set:
//!
//! | taxonomy   | version | adds                                              |
//! |------------|---------|---------------------------------------------------|
//! | [`Basic`]    | 1 | keywords, literals, comments, one operator type   |
//! | [`Standard`] | 2 | operator families, punctuation, chars, doc comments |
//! | [`Extended`] | 3 | keyword subclasses, declaration/call/parameter roles |

/// Define a taxonomy's token type enum and its [`TokenType`] impl.
///
/// Each generated type has:
/// - one fieldless variant per entry, with the given stable name
/// - `ALL` listing the variants in declaration order
/// - `is_trivia()` true exactly for the listed trivia variants
///
/// [`TokenType`]: crate::TokenType
macro_rules! token_types {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal, )+
        }
        trivia: $( $trivia:ident )|+ ;
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $crate::TokenType for $name {
            const ALL: &'static [Self] = &[ $( Self::$variant, )+ ];

            fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => $text, )+
                }
            }

            fn is_trivia(self) -> bool {
                matches!(self, $( Self::$trivia )|+)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::TokenType::name(*self))
            }
        }
    };
}

pub(crate) use token_types;

mod basic;
mod extended;
mod standard;

pub use basic::{Basic, BasicType};
pub use extended::{Extended, ExtendedType};
pub use standard::{Standard, StandardType};

/// Look up a taxonomy by its command-line name.
pub fn by_name(name: &str) -> Option<TaxonomyKind> {
    TaxonomyKind::ALL
        .iter()
        .copied()
        .find(|kind| kind.name().eq_ignore_ascii_case(name))
}

/// Runtime handle for choosing a taxonomy, e.g. from a CLI flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum TaxonomyKind {
    Basic,
    #[default]
    Standard,
    Extended,
}

impl TaxonomyKind {
    pub const ALL: &'static [TaxonomyKind] = &[Self::Basic, Self::Standard, Self::Extended];

    pub const fn name(self) -> &'static str {
        use crate::Taxonomy;
        match self {
            Self::Basic => Basic::NAME,
            Self::Standard => Standard::NAME,
            Self::Extended => Extended::NAME,
        }
    }

    pub const fn version(self) -> u32 {
        use crate::Taxonomy;
        match self {
            Self::Basic => Basic::VERSION,
            Self::Standard => Standard::VERSION,
            Self::Extended => Extended::VERSION,
        }
    }
}

impl std::str::FromStr for TaxonomyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        by_name(s).ok_or_else(|| {
            let known: Vec<_> = Self::ALL.iter().map(|k| k.name()).collect();
            format!("unknown taxonomy '{s}' (expected one of: {})", known.join(", "))
        })
    }
}
