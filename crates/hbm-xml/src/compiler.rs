use crate::{Document, Element};

use hbm_core::{
    mapping::{
        AssociationKind, ClassMapping, Collection, Component, CustomType, Discriminator,
        IdMapping, Join, ManyToOne, OneToOne, Property, Rule, Subclass,
    },
    Error, Result, TypeMap, ValueTy,
};

/// Compiles a [`ClassMapping`] into a mapping document.
///
/// Compilation is a read-only walk over the mapping: child rules render in
/// declaration order, and every unset field resolves through the naming
/// conventions or the configured [`TypeMap`]. A failure aborts the whole
/// compilation; no partial document is produced.
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    types: TypeMap,
}

impl Compiler {
    pub fn new() -> Compiler {
        Compiler::default()
    }

    /// Uses `types` for storage-type resolution instead of the defaults.
    pub fn with_types(types: TypeMap) -> Compiler {
        Compiler { types }
    }

    pub fn compile(&self, mapping: &ClassMapping) -> Result<Document> {
        let Some(id) = &mapping.id else {
            return Err(Error::missing_identity(mapping.name()));
        };

        let mut root = Element::new("hibernate-mapping");
        root.set_attr("assembly", mapping.ty.assembly.clone());
        root.set_attr("namespace", mapping.ty.namespace.clone());

        let mut class = Element::new("class");
        class.set_attr("name", mapping.name());
        class.set_attr("table", mapping.table_name());
        if let Some(schema) = &mapping.schema {
            class.set_attr("schema", schema.clone());
        }
        if let Some(value) = mapping
            .discriminator
            .as_ref()
            .and_then(|discriminator| discriminator.class_value.as_ref())
        {
            class.set_attr("discriminator-value", value.clone());
        }

        class.push(self.id_element(mapping.name(), id)?);

        if let Some(discriminator) = &mapping.discriminator {
            class.push(self.discriminator_element(mapping.name(), discriminator)?);
        }

        for rule in &mapping.rules {
            class.push(self.rule_element(mapping.name(), rule)?);
        }

        for subclass in &mapping.subclasses {
            class.push(self.subclass_element(subclass)?);
        }

        for join in &mapping.joins {
            class.push(self.join_element(mapping.name(), join)?);
        }

        root.push(class);
        Ok(Document::new(root))
    }

    fn rule_element(&self, owner: &str, rule: &Rule) -> Result<Element> {
        match rule {
            Rule::Property(property) => self.property_element(owner, property),
            Rule::ManyToOne(many_to_one) => Ok(many_to_one_element(owner, many_to_one)),
            Rule::OneToOne(one_to_one) => Ok(one_to_one_element(owner, one_to_one)),
            Rule::Collection(collection) => Ok(collection_element(owner, collection)),
            Rule::Component(component) => self.component_element(owner, component),
        }
    }

    fn id_element(&self, owner: &str, id: &IdMapping) -> Result<Element> {
        let mut element = Element::new("id");
        element.set_attr("name", id.member.name.clone());
        element.set_attr("column", id.column_name());
        element.set_attr("type", self.storage_ty(owner, &id.member.name, &id.member.ty)?);

        let mut generator = Element::new("generator");
        generator.set_attr("class", id.generator_class());
        element.push(generator);

        Ok(element)
    }

    fn property_element(&self, owner: &str, property: &Property) -> Result<Element> {
        let mut element = Element::new("property");
        element.set_attr("name", property.member.name.clone());

        // Enumerations take the structured descriptor unless one was set
        // explicitly; everything else resolves through the type map.
        let custom = property
            .custom_type
            .clone()
            .or_else(|| property.member.ty.as_enum().map(CustomType::enum_mapper));

        match custom {
            Some(custom) => {
                element.set_attr("type", custom.type_name);

                let mut column = Element::new("column");
                column.set_attr("name", property.column_name());
                column.set_attr("sql-type", custom.sql_type);
                column.set_attr("length", custom.length.to_string());
                element.push(column);
            }
            None => {
                element.set_attr("column", property.column_name());
                element.set_attr(
                    "type",
                    self.storage_ty(owner, &property.member.name, &property.member.ty)?,
                );
            }
        }

        if property.unique {
            element.set_attr("unique", "true");
        }

        Ok(element)
    }

    fn component_element(&self, owner: &str, component: &Component) -> Result<Element> {
        let mut element = Element::new("component");
        element.set_attr("name", component.member.name.clone());
        element.set_attr("insert", flag(component.insert));
        element.set_attr("update", flag(component.update));

        for rule in &component.rules {
            element.push(self.rule_element(owner, rule)?);
        }

        Ok(element)
    }

    fn discriminator_element(&self, owner: &str, discriminator: &Discriminator) -> Result<Element> {
        let mut element = Element::new("discriminator");
        element.set_attr("column", discriminator.column.clone());
        element.set_attr(
            "type",
            self.storage_ty(owner, &discriminator.column, &discriminator.ty)?,
        );
        Ok(element)
    }

    fn subclass_element(&self, subclass: &Subclass) -> Result<Element> {
        let mut element = Element::new("subclass");
        element.set_attr("name", subclass.ty.qualified());
        element.set_attr("discriminator-value", subclass.discriminator_value.clone());

        for rule in &subclass.rules {
            element.push(self.rule_element(&subclass.ty.name, rule)?);
        }

        Ok(element)
    }

    fn join_element(&self, owner: &str, join: &Join) -> Result<Element> {
        let mut element = Element::new("join");
        element.set_attr("table", join.table.clone());

        for rule in &join.rules {
            element.push(self.rule_element(owner, rule)?);
        }

        Ok(element)
    }

    fn storage_ty(&self, entity: &str, member: &str, ty: &ValueTy) -> Result<String> {
        self.types
            .resolve(ty)
            .ok_or_else(|| Error::unresolvable_type(entity, member, ty))
    }
}

fn many_to_one_element(owner: &str, many_to_one: &ManyToOne) -> Element {
    let mut element = Element::new("many-to-one");
    element.set_attr("name", many_to_one.member.name.clone());
    element.set_attr("column", many_to_one.column_name());
    if let Some(cascade) = many_to_one.cascade {
        element.set_attr("cascade", cascade.as_str());
    }
    if let Some(fetch) = many_to_one.fetch {
        element.set_attr("fetch", fetch.as_str());
    }
    if let Some(name) = many_to_one.foreign_key_name(owner) {
        element.set_attr("foreign-key", name);
    }
    element
}

fn one_to_one_element(owner: &str, one_to_one: &OneToOne) -> Element {
    let mut element = Element::new("one-to-one");
    element.set_attr("name", one_to_one.member.name.clone());
    element.set_attr("class", one_to_one.target.qualified());
    if let Some(cascade) = one_to_one.cascade {
        element.set_attr("cascade", cascade.as_str());
    }
    if let Some(fetch) = one_to_one.fetch {
        element.set_attr("fetch", fetch.as_str());
    }
    if let Some(name) = one_to_one.foreign_key_name(owner) {
        element.set_attr("foreign-key", name);
    }
    element
}

fn collection_element(owner: &str, collection: &Collection) -> Element {
    let mut element = Element::new(collection.repr.element_name());
    element.set_attr("name", collection.member.name.clone());
    if collection.kind == AssociationKind::ManyToMany {
        element.set_attr("table", collection.table_name(owner));
    }
    if let Some(lazy) = collection.lazy {
        element.set_attr("lazy", flag(lazy));
    }
    if let Some(inverse) = collection.inverse {
        element.set_attr("inverse", flag(inverse));
    }
    if let Some(cascade) = collection.cascade {
        element.set_attr("cascade", cascade.as_str());
    }

    let mut key = Element::new("key");
    key.set_attr("column", collection.parent_key_column(owner));
    element.push(key);

    element.push(match collection.kind {
        AssociationKind::OneToMany => {
            let mut one_to_many = Element::new("one-to-many");
            one_to_many.set_attr("class", collection.child.qualified());
            one_to_many
        }
        AssociationKind::ManyToMany => {
            let mut many_to_many = Element::new("many-to-many");
            many_to_many.set_attr("class", collection.child.qualified());
            many_to_many.set_attr("column", collection.child_key_column());
            if let Some(fetch) = collection.fetch {
                many_to_many.set_attr("fetch", fetch.as_str());
            }
            many_to_many
        }
    });

    element
}

fn flag(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
