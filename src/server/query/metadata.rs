//! Entity metadata used by the query builders.
//!
//! Descriptors are declared statically (see `registry`) and assembled once at startup
//! into an `EntityRegistry`. Builders never inspect SeaORM models at runtime; every
//! field name a caller may use has to be declared here.

use std::collections::HashMap;

use crate::server::error::query::QueryError;

/// Alias of the base entity in every assembled query.
pub const BASE_ALIAS: &str = "a";

/// Semantic type of a scalar field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Float,
    Boolean,
    Date,
    DateTime,
    Time,
}

/// Shape of a field: a stored scalar or a relation to another entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Scalar(FieldKind),
    /// Reference stored as a foreign key column on this entity.
    ToOne { target: &'static str },
    /// Collection owned by the target entity; never stored on this entity.
    ToMany { target: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Name used by API callers (camelCase).
    pub name: &'static str,
    /// Storage column. `None` only for to-many relations.
    pub column: Option<&'static str>,
    pub ty: FieldType,
    pub nullable: bool,
}

impl FieldDescriptor {
    pub const fn scalar(name: &'static str, column: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            column: Some(column),
            ty: FieldType::Scalar(kind),
            nullable: false,
        }
    }

    pub const fn to_one(name: &'static str, column: &'static str, target: &'static str) -> Self {
        Self {
            name,
            column: Some(column),
            ty: FieldType::ToOne { target },
            nullable: false,
        }
    }

    pub const fn to_many(name: &'static str, target: &'static str) -> Self {
        Self {
            name,
            column: None,
            ty: FieldType::ToMany { target },
            nullable: true,
        }
    }

    pub const fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Scalar kind, or `None` for relations.
    pub fn kind(&self) -> Option<FieldKind> {
        match self.ty {
            FieldType::Scalar(kind) => Some(kind),
            _ => None,
        }
    }
}

/// Immutable description of one entity type.
#[derive(Debug, Clone)]
pub struct EntityDescriptor {
    name: &'static str,
    resource: &'static str,
    table: &'static str,
    id: &'static str,
    fields: &'static [FieldDescriptor],
    join_aliases: HashMap<&'static str, String>,
}

impl EntityDescriptor {
    /// Builds a descriptor and derives the join alias of every to-one relation.
    ///
    /// An alias is the first two characters of the relation name. When that is taken
    /// by an earlier relation (or is the base alias), a numeric suffix starting at 2
    /// is appended. Aliases only depend on declaration order, so they are stable
    /// across requests.
    ///
    /// # Arguments
    /// - `name` - Entity name used by `EntityRegistry::describe`
    /// - `resource` - Plural path segment used by the list endpoint
    /// - `table` - Storage table
    /// - `id` - Identifier field, which must also appear in `fields`
    /// - `fields` - Ordered field list
    pub fn new(
        name: &'static str,
        resource: &'static str,
        table: &'static str,
        id: &'static str,
        fields: &'static [FieldDescriptor],
    ) -> Self {
        let mut join_aliases: HashMap<&'static str, String> = HashMap::new();

        for field in fields {
            if !matches!(field.ty, FieldType::ToOne { .. }) {
                continue;
            }

            let prefix: String = field.name.chars().take(2).collect::<String>().to_lowercase();
            let taken = |candidate: &str, aliases: &HashMap<&'static str, String>| {
                candidate == BASE_ALIAS || aliases.values().any(|alias| alias == candidate)
            };

            let mut alias = prefix.clone();
            let mut suffix = 2;
            while taken(&alias, &join_aliases) {
                alias = format!("{}{}", prefix, suffix);
                suffix += 1;
            }

            join_aliases.insert(field.name, alias);
        }

        Self {
            name,
            resource,
            table,
            id,
            fields,
            join_aliases,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn resource(&self) -> &'static str {
        self.resource
    }

    pub fn table(&self) -> &'static str {
        self.table
    }

    /// Identifier field name (also its column).
    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn fields(&self) -> &'static [FieldDescriptor] {
        self.fields
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Returns the type of `name`.
    ///
    /// # Returns
    /// - `Ok(FieldType)` - Declared type of the field
    /// - `Err(QueryError::UnknownField)` - No such field on this entity
    pub fn field_type(&self, name: &str) -> Result<FieldType, QueryError> {
        self.field(name)
            .map(|field| field.ty)
            .ok_or_else(|| self.unknown_field(name))
    }

    /// Fields holding a stored scalar value, in declaration order.
    pub fn scalar_fields(&self) -> impl Iterator<Item = (&'static FieldDescriptor, FieldKind)> {
        self.fields
            .iter()
            .filter_map(|field| field.kind().map(|kind| (field, kind)))
    }

    /// To-one relation fields with their target entity name, in declaration order.
    pub fn to_one_relations(&self) -> impl Iterator<Item = (&'static FieldDescriptor, &'static str)> {
        self.fields.iter().filter_map(|field| match field.ty {
            FieldType::ToOne { target } => Some((field, target)),
            _ => None,
        })
    }

    /// Join alias derived for a to-one relation of this entity.
    pub fn join_alias(&self, relation: &str) -> Option<&str> {
        self.join_aliases.get(relation).map(String::as_str)
    }

    pub(crate) fn unknown_field(&self, name: &str) -> QueryError {
        QueryError::UnknownField {
            entity: self.name.to_string(),
            field: name.to_string(),
        }
    }
}

/// Process-lifetime lookup of entity descriptors.
///
/// Built once before the server starts and shared read-only behind an `Arc`.
#[derive(Debug, Default)]
pub struct EntityRegistry {
    entities: HashMap<&'static str, EntityDescriptor>,
    resources: HashMap<&'static str, &'static str>,
}

impl EntityRegistry {
    pub fn new(descriptors: impl IntoIterator<Item = EntityDescriptor>) -> Self {
        let mut registry = Self::default();

        for descriptor in descriptors {
            registry
                .resources
                .insert(descriptor.resource(), descriptor.name());
            registry.entities.insert(descriptor.name(), descriptor);
        }

        registry
    }

    /// Looks up an entity by name.
    ///
    /// # Returns
    /// - `Ok(&EntityDescriptor)` - Registered descriptor
    /// - `Err(QueryError::UnknownEntity)` - Name is not registered
    pub fn describe(&self, name: &str) -> Result<&EntityDescriptor, QueryError> {
        self.entities
            .get(name)
            .ok_or_else(|| QueryError::UnknownEntity(name.to_string()))
    }

    /// Looks up an entity by the resource segment of the list endpoint.
    pub fn by_resource(&self, resource: &str) -> Result<&EntityDescriptor, QueryError> {
        let name = self
            .resources
            .get(resource)
            .ok_or_else(|| QueryError::UnknownEntity(resource.to_string()))?;

        self.describe(name)
    }

    pub fn entities(&self) -> impl Iterator<Item = &EntityDescriptor> {
        self.entities.values()
    }
}
