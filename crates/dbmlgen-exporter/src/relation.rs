//! Relation classification.
//!
//! Relation fields are paired up by relation name and the pair of models they
//! connect. Each pair is then classified once into [`Relation::OneToOne`],
//! [`Relation::OneToMany`] or [`Relation::ManyToMany`] by looking at which side
//! holds the foreign key, whether that key is unique, and whether the
//! back-reference is a list.

use std::collections::HashMap;

use dbmlgen_core::{Datamodel, FieldDef, ModelDef, ReferenceAction, RelationDef};
use dbmlgen_naming::{effective_relation_name, is_explicit_relation_name};

use crate::error::DbmlError;

/// One side of a relation: a relation field on a model.
#[derive(Debug, Clone, Copy)]
pub struct Endpoint<'a> {
    pub model: &'a ModelDef,
    pub field: &'a FieldDef,
    /// Model the field points at.
    pub target: &'a ModelDef,
    /// (model index, field index) in declaration order.
    position: (usize, usize),
}

impl<'a> Endpoint<'a> {
    fn relation(&self) -> Option<&'a RelationDef> {
        self.field.relation.as_ref()
    }

    fn holds_foreign_key(&self) -> bool {
        self.field.holds_foreign_key()
    }
}

/// A one-to-one or one-to-many relation, seen from the foreign key side.
#[derive(Debug, Clone, Copy)]
pub struct DirectRelation<'a> {
    /// Side holding the FK scalar fields.
    pub fk: Endpoint<'a>,
    /// Back-reference on the referenced model.
    pub referenced: Endpoint<'a>,
    pub from_fields: &'a [String],
    pub to_fields: &'a [String],
    pub on_delete: Option<ReferenceAction>,
}

impl DirectRelation<'_> {
    /// The model whose fields are referenced.
    pub fn referenced_model(&self) -> &ModelDef {
        self.fk.target
    }
}

/// A many-to-many relation, endpoints in encounter order.
#[derive(Debug, Clone)]
pub struct ManyToManyRelation<'a> {
    /// Explicit name, or the default `<A>To<B>` name.
    pub name: String,
    /// Whether the name was given explicitly when the relation was declared.
    pub explicit_name: bool,
    pub first: Endpoint<'a>,
    pub second: Endpoint<'a>,
}

#[derive(Debug, Clone)]
pub enum Relation<'a> {
    OneToOne(DirectRelation<'a>),
    OneToMany(DirectRelation<'a>),
    ManyToMany(ManyToManyRelation<'a>),
}

impl<'a> Relation<'a> {
    /// Position used for output ordering: the FK field for direct relations,
    /// the first endpoint for many-to-many ones.
    fn anchor(&self) -> (usize, usize) {
        match self {
            Relation::OneToOne(r) | Relation::OneToMany(r) => r.fk.position,
            Relation::ManyToMany(r) => r.first.position,
        }
    }

    pub fn as_direct(&self) -> Option<&DirectRelation<'a>> {
        match self {
            Relation::OneToOne(r) | Relation::OneToMany(r) => Some(r),
            Relation::ManyToMany(_) => None,
        }
    }

    pub fn as_many_to_many(&self) -> Option<&ManyToManyRelation<'a>> {
        match self {
            Relation::ManyToMany(r) => Some(r),
            _ => None,
        }
    }
}

/// Relation fields sharing a name and a model pair.
struct RelationGroup<'a> {
    name: String,
    explicit_name: bool,
    endpoints: Vec<Endpoint<'a>>,
}

/// Classify every relation of `datamodel`.
///
/// Direct relations are ordered by the position of their FK field,
/// many-to-many relations by their first endpoint.
pub fn classify_relations(datamodel: &Datamodel) -> Result<Vec<Relation<'_>>, DbmlError> {
    let groups = group_relation_fields(datamodel)?;

    let mut relations = groups
        .into_iter()
        .map(classify_group)
        .collect::<Result<Vec<_>, _>>()?;
    relations.sort_by_key(Relation::anchor);

    for relation in &relations {
        match relation {
            Relation::OneToOne(r) | Relation::OneToMany(r) => tracing::debug!(
                from = %r.fk.model.name,
                to = %r.referenced_model().name,
                one_to_one = matches!(relation, Relation::OneToOne(_)),
                "classified direct relation"
            ),
            Relation::ManyToMany(r) => {
                tracing::debug!(name = %r.name, "classified many-to-many relation")
            }
        }
    }

    Ok(relations)
}

fn group_relation_fields(datamodel: &Datamodel) -> Result<Vec<RelationGroup<'_>>, DbmlError> {
    // Group by (name, sorted model pair), preserving order of first occurrence
    let mut groups: Vec<RelationGroup<'_>> = Vec::new();
    let mut index: HashMap<(String, String, String), usize> = HashMap::new();

    for (model_idx, model) in datamodel.models.iter().enumerate() {
        for (field_idx, field) in model.fields.iter().enumerate() {
            if !field.is_relation() {
                continue;
            }
            let declared = field.relation.as_ref().and_then(|r| r.name.as_deref());
            let name = effective_relation_name(declared, &model.name, &field.r#type);

            let Some(target) = datamodel.model(&field.r#type) else {
                return Err(DbmlError::unclassifiable(
                    name,
                    format!(
                        "field {}.{} points at unknown model '{}'",
                        model.name, field.name, field.r#type
                    ),
                ));
            };

            let (low, high) = if model.name <= target.name {
                (model.name.clone(), target.name.clone())
            } else {
                (target.name.clone(), model.name.clone())
            };
            let endpoint = Endpoint {
                model,
                field,
                target,
                position: (model_idx, field_idx),
            };

            match index.get(&(name.clone(), low.clone(), high.clone())) {
                Some(&i) => groups[i].endpoints.push(endpoint),
                None => {
                    index.insert((name.clone(), low, high), groups.len());
                    groups.push(RelationGroup {
                        explicit_name: is_explicit_relation_name(
                            declared,
                            &model.name,
                            &target.name,
                        ),
                        name,
                        endpoints: vec![endpoint],
                    });
                }
            }
        }
    }

    Ok(groups)
}

fn classify_group(group: RelationGroup<'_>) -> Result<Relation<'_>, DbmlError> {
    let RelationGroup {
        name,
        explicit_name,
        endpoints,
    } = group;

    let [first, second] = endpoints[..] else {
        return Err(DbmlError::unclassifiable(
            name,
            format!("expected 2 relation fields, found {}", endpoints.len()),
        ));
    };

    match (first.holds_foreign_key(), second.holds_foreign_key()) {
        (true, true) => Err(DbmlError::unclassifiable(
            name,
            "both sides hold a foreign key",
        )),
        (true, false) => classify_direct(name, first, second),
        (false, true) => classify_direct(name, second, first),
        (false, false) if first.field.is_list && second.field.is_list => {
            Ok(Relation::ManyToMany(ManyToManyRelation {
                name,
                explicit_name,
                first,
                second,
            }))
        }
        (false, false) => Err(DbmlError::unclassifiable(
            name,
            "neither side holds a foreign key and the relation is not list-to-list",
        )),
    }
}

fn classify_direct<'a>(
    name: String,
    fk: Endpoint<'a>,
    referenced: Endpoint<'a>,
) -> Result<Relation<'a>, DbmlError> {
    let Some(relation) = fk.relation() else {
        return Err(DbmlError::unclassifiable(name, "missing relation descriptor"));
    };
    if relation.to_fields.len() != relation.from_fields.len() {
        return Err(DbmlError::unclassifiable(
            name,
            format!(
                "{}.{} lists {} foreign key field(s) but {} referenced field(s)",
                fk.model.name,
                fk.field.name,
                relation.from_fields.len(),
                relation.to_fields.len()
            ),
        ));
    }
    if fk.field.is_list {
        return Err(DbmlError::unclassifiable(
            name,
            format!("foreign key side {}.{} is a list", fk.model.name, fk.field.name),
        ));
    }

    let direct = DirectRelation {
        fk,
        referenced,
        from_fields: &relation.from_fields,
        to_fields: &relation.to_fields,
        on_delete: relation.on_delete,
    };
    let unique_fk = fk.model.is_unique_key(&relation.from_fields);

    match (referenced.field.is_list, unique_fk) {
        (true, false) => Ok(Relation::OneToMany(direct)),
        (false, true) => Ok(Relation::OneToOne(direct)),
        (true, true) => Err(DbmlError::unclassifiable(
            name,
            "foreign key is unique but the back-reference is a list",
        )),
        (false, false) => Err(DbmlError::unclassifiable(
            name,
            "foreign key is not unique but the back-reference is singular",
        )),
    }
}
