//! Typed content records.
//!
//! JSON field names follow the data files (`portavoze`, `plataformas`,
//! `tiposConteudo`, camelCase record fields) so the API serves the same shape
//! the site already consumes.

mod article;
mod catalog;
mod person;

pub use article::Article;
pub use catalog::{
    ArticlesData, ArticlesMetadata, Categories, ContentType, DbData, DbMetadata, Theme,
};
pub use person::{Link, LinkKind, Member, Platform, Spokesperson, StatValue, Stats};
