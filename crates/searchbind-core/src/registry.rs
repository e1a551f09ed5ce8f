//! Template registry — the closed map from record kind to search template.
//!
//! Built once through [`RegistryBuilder`] during start-up and frozen by
//! [`RegistryBuilder::build`]. A [`TemplateRegistry`] has no mutating methods,
//! so it can be shared by reference across threads without locking.

use crate::config::SearchConfig;
use crate::error::{SearchError, TemplateError};
use crate::template::Template;
use crate::types::{Blog, BlogPost, Comment, RecordKind};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateRegistry {
    templates: HashMap<RecordKind, Template>,
}

/// Append-only registration, consumed by [`RegistryBuilder::build`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    templates: HashMap<RecordKind, Template>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `template` for its kind. A kind may be registered only once.
    pub fn register(mut self, template: Template) -> Result<Self, TemplateError> {
        let kind = template.kind();
        if self.templates.contains_key(&kind) {
            return Err(TemplateError::Duplicate(kind));
        }
        tracing::debug!(kind = %kind, template = %template.body(), "registered search template");
        self.templates.insert(kind, template);
        Ok(self)
    }

    pub fn build(self) -> TemplateRegistry {
        TemplateRegistry {
            templates: self.templates,
        }
    }
}

impl TemplateRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// A registry with no templates: every lookup fails.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in templates, authored in code.
    ///
    /// - `Blog`: Name contains text
    /// - `BlogPost`: Name contains text, or Content contains text
    /// - `Comment`: Title contains text, or Text contains text
    pub fn reference() -> Self {
        Self::try_reference().expect("built-in search templates must be valid")
    }

    fn try_reference() -> Result<Self, TemplateError> {
        Ok(Self::builder()
            .register(Template::build::<Blog>(|blog, text| {
                blog.field("Name").contains(text)
            })?)?
            .register(Template::build::<BlogPost>(|post, text| {
                post.clone()
                    .field("Name")
                    .contains(text.clone())
                    .or(post.field("Content").contains(text))
            })?)?
            .register(Template::build::<Comment>(|comment, text| {
                comment
                    .clone()
                    .field("Title")
                    .contains(text.clone())
                    .or(comment.field("Text").contains(text))
            })?)?
            .build())
    }

    /// Build from the `[search.templates]` table: each kind maps to the fields any
    /// of which may contain the search text.
    pub fn from_config(config: &SearchConfig) -> Result<Self, TemplateError> {
        let mut builder = Self::builder();
        for (kind, fields) in &config.templates {
            builder = builder.register(Template::any_field_contains(*kind, fields.as_slice())?)?;
        }
        Ok(builder.build())
    }

    /// The template for `kind`.
    pub fn lookup(&self, kind: RecordKind) -> Result<&Template, SearchError> {
        self.templates
            .get(&kind)
            .ok_or(SearchError::UnsupportedType(kind))
    }

    pub fn contains(&self, kind: RecordKind) -> bool {
        self.templates.contains_key(&kind)
    }

    /// Registered kinds in declaration order of [`RecordKind`].
    pub fn kinds(&self) -> Vec<RecordKind> {
        RecordKind::ALL
            .into_iter()
            .filter(|kind| self.templates.contains_key(kind))
            .collect()
    }

    /// Registered templates, ordered like [`TemplateRegistry::kinds`].
    pub fn templates(&self) -> impl Iterator<Item = &Template> {
        self.kinds()
            .into_iter()
            .filter_map(move |kind| self.templates.get(&kind))
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
