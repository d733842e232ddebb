// Vitrine - multi-locale content resolution for marketing sites
//
// Resolves content records carrying per-locale translations into
// single-language records, and serves pre-translated page, section and
// layout documents by language.

// Re-export the content layer
pub use vitrine_i18n::*;

// Re-export supporting crates
pub use vitrine_config;
pub use vitrine_log;

// Prelude for common imports
pub mod prelude {
    pub use vitrine_i18n::prelude::*;
}
