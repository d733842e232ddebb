//! Translation Resolution
//!
//! Flattens an entity carrying per-locale translation records into a single
//! entity whose localizable fields hold the requested language.
//!
//! One translation record is chosen as the source:
//!
//! 1. the first translation whose locale equals the requested locale,
//! 2. otherwise the first translation in the default language,
//! 3. otherwise none, and the entity keeps its base values.
//!
//! Each localizable field takes the source's value when it is present and
//! non-empty, and keeps the base value otherwise. A blank translated title
//! never hides the base title. Nested categories are resolved with the same locale and
//! the resolved entity comes back with an empty `translations` list.

use crate::locale::DEFAULT_LANGUAGE;

/// A per-locale translation record.
pub trait TranslationRecord {
    /// Locale tag of the record, e.g. `"am"`.
    fn locale(&self) -> &str;
}

/// A localizable field slot on an entity.
///
/// Implemented for required (`String`) and nullable (`Option<String>`)
/// fields.
pub trait LocalizedValue {
    fn assign(&mut self, value: &str);
}

impl LocalizedValue for String {
    fn assign(&mut self, value: &str) {
        self.clear();
        self.push_str(value);
    }
}

impl LocalizedValue for Option<String> {
    fn assign(&mut self, value: &str) {
        *self = Some(value.to_owned());
    }
}

/// One row of an entity kind's field table.
pub struct LocalizedField<E, T> {
    /// Field name as it appears in the JSON payload
    pub name: &'static str,
    /// Reads the translated value from a translation record
    pub translated: fn(&T) -> Option<&str>,
    /// Writes a chosen value onto the entity
    pub apply: fn(&mut E, &str),
}

impl<E, T> std::fmt::Debug for LocalizedField<E, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalizedField")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// An entity kind that can be resolved to a single locale.
///
/// Implementations are generated with the `translatable!` macro from the
/// entity's field list.
pub trait Translatable: Clone + 'static {
    type Translation: TranslationRecord + 'static;

    /// Short name of the entity kind, used in logs.
    const KIND: &'static str;

    /// The localizable fields, in payload order.
    const FIELDS: &'static [LocalizedField<Self, Self::Translation>];

    fn id(&self) -> u64;

    fn translations(&self) -> &[Self::Translation];

    /// Remove and return the translation records, leaving an empty list.
    fn take_translations(&mut self) -> Vec<Self::Translation>;

    /// Resolve nested resolvable relations. No-op for kinds without one.
    fn resolve_related(&mut self, _resolver: &ContentResolver, _locale: &str) {}
}

/// Resolves entities against a fixed default language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentResolver {
    default_language: String,
}

impl ContentResolver {
    pub fn new(default_language: impl Into<String>) -> Self {
        Self {
            default_language: default_language.into(),
        }
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Resolve a borrowed entity into a new, flattened one.
    pub fn resolve<E: Translatable>(&self, entity: &E, locale: &str) -> E {
        self.resolve_owned(entity.clone(), locale)
    }

    /// Resolve an entity in place of a copy.
    pub fn resolve_owned<E: Translatable>(&self, mut entity: E, locale: &str) -> E {
        let translations = entity.take_translations();

        match self.select(&translations, locale) {
            Some(source) => {
                vitrine_log::trace!(
                    target: "vitrine::resolver",
                    "{} {} requested '{}', using '{}' translation",
                    E::KIND,
                    entity.id(),
                    locale,
                    source.locale()
                );
                for field in E::FIELDS {
                    if let Some(value) = (field.translated)(source).filter(|v| !v.is_empty()) {
                        (field.apply)(&mut entity, value);
                    }
                }
            }
            None => {
                vitrine_log::trace!(
                    target: "vitrine::resolver",
                    "{} {} requested '{}', keeping base fields",
                    E::KIND,
                    entity.id(),
                    locale
                );
            }
        }

        entity.resolve_related(self, locale);
        entity
    }

    /// Locale of the translation record that would feed `resolve`, or
    /// `None` when the entity keeps its base values.
    pub fn source_locale<'a, E: Translatable>(
        &self,
        entity: &'a E,
        locale: &str,
    ) -> Option<&'a str> {
        self.select(entity.translations(), locale)
            .map(TranslationRecord::locale)
    }

    /// Resolve every entity of a list with the same locale.
    pub fn resolve_all<E: Translatable>(&self, entities: &[E], locale: &str) -> Vec<E> {
        entities.iter().map(|e| self.resolve(e, locale)).collect()
    }

    /// Choose the translation record that feeds the resolved fields.
    ///
    /// The default-language record is only consulted when no record matches
    /// the requested locale.
    pub fn select<'a, T: TranslationRecord>(
        &self,
        candidates: &'a [T],
        locale: &str,
    ) -> Option<&'a T> {
        candidates
            .iter()
            .find(|tr| tr.locale() == locale)
            .or_else(|| {
                candidates
                    .iter()
                    .find(|tr| tr.locale() == self.default_language)
            })
    }
}

impl Default for ContentResolver {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE)
    }
}

/// Implement [`Translatable`] and [`TranslationRecord`] for an entity kind.
///
/// ```text
/// translatable! {
///     Blog => BlogTranslation, kind: "blog",
///     fields: [title, slug, content, excerpt],
///     related: category,
/// }
/// ```
///
/// Every listed field must be an `Option<String>` on the translation and a
/// `String` or `Option<String>` on the entity. `related` names an
/// `Option<_>` field holding another translatable entity.
macro_rules! translatable {
    (
        $entity:ty => $translation:ty, kind: $kind:literal,
        fields: [$($field:ident),+ $(,)?]
        $(, related: $related:ident)?
        $(,)?
    ) => {
        impl $crate::resolver::Translatable for $entity {
            type Translation = $translation;

            const KIND: &'static str = $kind;

            const FIELDS: &'static [$crate::resolver::LocalizedField<Self, $translation>] = &[
                $(
                    $crate::resolver::LocalizedField {
                        name: stringify!($field),
                        translated: |tr: &$translation| tr.$field.as_deref(),
                        apply: |entity: &mut $entity, value: &str| {
                            $crate::resolver::LocalizedValue::assign(&mut entity.$field, value)
                        },
                    },
                )+
            ];

            fn id(&self) -> u64 {
                self.id
            }

            fn translations(&self) -> &[$translation] {
                &self.translations
            }

            fn take_translations(&mut self) -> Vec<$translation> {
                std::mem::take(&mut self.translations)
            }

            $(
                fn resolve_related(
                    &mut self,
                    resolver: &$crate::resolver::ContentResolver,
                    locale: &str,
                ) {
                    if let Some(related) = self.$related.take() {
                        self.$related = Some(resolver.resolve_owned(related, locale));
                    }
                }
            )?
        }

        impl $crate::resolver::TranslationRecord for $translation {
            fn locale(&self) -> &str {
                &self.locale
            }
        }
    };
}

pub(crate) use translatable;
