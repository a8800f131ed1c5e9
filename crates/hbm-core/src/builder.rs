use crate::{
    mapping::{
        AssociationKind, ClassMapping, Collection, Component, Discriminator, IdMapping, Join,
        ManyToOne, OneToOne, Property, Rule, Subclass,
    },
    EntityDef, Error, Result, ValueTy,
};

/// Fluent builder for a [`ClassMapping`].
///
/// Borrows the entity definition so every rule-creating call can resolve
/// the named member at build time. Each call appends the rule and returns
/// a `&mut` handle bound to that rule instance, so overrides chain onto
/// the declaration and mutate it in place.
pub struct ClassMap<'a> {
    def: &'a EntityDef,
    mapping: ClassMapping,
}

impl<'a> ClassMap<'a> {
    /// Starts a mapping for the defined entity.
    pub fn new(def: &'a EntityDef) -> ClassMap<'a> {
        ClassMap {
            def,
            mapping: ClassMapping::new(def.ty.clone()),
        }
    }

    /// The mapping built so far.
    pub fn mapping(&self) -> &ClassMapping {
        &self.mapping
    }

    /// Releases the finished mapping.
    pub fn into_mapping(self) -> ClassMapping {
        self.mapping
    }

    /// Overrides the table name.
    pub fn table(&mut self, table: impl Into<String>) -> &mut Self {
        self.mapping.table = Some(table.into());
        self
    }

    /// Sets the schema qualifier.
    pub fn schema(&mut self, schema: impl Into<String>) -> &mut Self {
        self.mapping.schema = Some(schema.into());
        self
    }

    /// Maps the identity member. Declaring it again replaces the previous
    /// id rule.
    pub fn id(&mut self, member: &str) -> Result<&mut IdMapping> {
        let member = self.def.member(member)?.clone();
        Ok(self.mapping.id.insert(IdMapping::new(member)))
    }

    /// Maps a scalar member onto a column.
    pub fn property(&mut self, member: &str) -> Result<&mut Property> {
        add_property(self.def, &mut self.mapping.rules, member)
    }

    /// Maps a reference member onto a foreign-key column.
    pub fn references(&mut self, member: &str) -> Result<&mut ManyToOne> {
        add_many_to_one(self.def, &mut self.mapping.rules, member)
    }

    /// Maps a one-to-one association with the member's declared class.
    pub fn has_one(&mut self, member: &str) -> Result<&mut OneToOne> {
        add_one_to_one(self.def, &mut self.mapping.rules, member)
    }

    /// Maps a collection member as a one-to-many association.
    pub fn has_many(&mut self, member: &str) -> Result<&mut Collection> {
        add_collection(self.def, &mut self.mapping.rules, member, AssociationKind::OneToMany)
    }

    /// Maps a collection member as a many-to-many association through a
    /// join table.
    pub fn has_many_to_many(&mut self, member: &str) -> Result<&mut Collection> {
        add_collection(self.def, &mut self.mapping.rules, member, AssociationKind::ManyToMany)
    }

    /// Maps a member onto a column group. `build` declares the nested
    /// rules, resolved against the component type's own definition.
    pub fn component(
        &mut self,
        member: &str,
        def: &EntityDef,
        build: impl FnOnce(&mut RuleSet<'_>) -> Result<()>,
    ) -> Result<&mut Component> {
        add_component(self.def, &mut self.mapping.rules, member, def, build)
    }

    /// Spans the mapping across a secondary table whose rules are declared
    /// by `build` in an isolated scope.
    pub fn with_table(
        &mut self,
        table: impl Into<String>,
        build: impl FnOnce(&mut RuleSet<'_>) -> Result<()>,
    ) -> Result<&mut Join> {
        let mut join = Join::new(table);
        build(&mut RuleSet {
            def: self.def,
            rules: &mut join.rules,
        })?;
        self.mapping.joins.push(join);
        Ok(self.mapping.joins.last_mut().unwrap())
    }

    /// Declares the discriminator column and opens the subclass surface.
    ///
    /// Subclasses are only reachable through the returned handle, so a
    /// mapping can never hold subclasses without a discriminator.
    pub fn discriminate_subclasses_on_column(
        &mut self,
        column: impl Into<String>,
        ty: ValueTy,
    ) -> Discriminating<'_> {
        Discriminating {
            discriminator: self
                .mapping
                .discriminator
                .insert(Discriminator::new(column, ty)),
            subclasses: &mut self.mapping.subclasses,
        }
    }
}

/// Rule scope handed to component, subclass, and secondary-table closures.
///
/// Members resolve against the scope's own entity definition.
pub struct RuleSet<'a> {
    def: &'a EntityDef,
    rules: &'a mut Vec<Rule>,
}

impl RuleSet<'_> {
    /// Maps a scalar member onto a column.
    pub fn property(&mut self, member: &str) -> Result<&mut Property> {
        add_property(self.def, self.rules, member)
    }

    /// Maps a reference member onto a foreign-key column.
    pub fn references(&mut self, member: &str) -> Result<&mut ManyToOne> {
        add_many_to_one(self.def, self.rules, member)
    }

    /// Maps a one-to-one association with the member's declared class.
    pub fn has_one(&mut self, member: &str) -> Result<&mut OneToOne> {
        add_one_to_one(self.def, self.rules, member)
    }

    /// Maps a collection member as a one-to-many association.
    pub fn has_many(&mut self, member: &str) -> Result<&mut Collection> {
        add_collection(self.def, self.rules, member, AssociationKind::OneToMany)
    }

    /// Maps a collection member as a many-to-many association through a
    /// join table.
    pub fn has_many_to_many(&mut self, member: &str) -> Result<&mut Collection> {
        add_collection(self.def, self.rules, member, AssociationKind::ManyToMany)
    }

    /// Maps a member onto a nested column group.
    pub fn component(
        &mut self,
        member: &str,
        def: &EntityDef,
        build: impl FnOnce(&mut RuleSet<'_>) -> Result<()>,
    ) -> Result<&mut Component> {
        add_component(self.def, self.rules, member, def, build)
    }
}

/// Subclass declaration surface, returned once a discriminator is set.
///
/// By value, so declarations chain: set the class-level value, then add
/// subclasses one after another.
pub struct Discriminating<'a> {
    discriminator: &'a mut Discriminator,
    subclasses: &'a mut Vec<Subclass>,
}

impl Discriminating<'_> {
    /// Sets the discriminator value identifying the base class itself.
    pub fn class_value(self, value: impl Into<String>) -> Self {
        self.discriminator.class_value = Some(value.into());
        self
    }

    /// Maps a subclass: its identity, the discriminator value selecting
    /// it, and rules resolved against its own definition.
    pub fn subclass(
        self,
        def: &EntityDef,
        value: impl Into<String>,
        build: impl FnOnce(&mut RuleSet<'_>) -> Result<()>,
    ) -> Result<Self> {
        let mut subclass = Subclass::new(def.ty.clone(), value);
        build(&mut RuleSet {
            def,
            rules: &mut subclass.rules,
        })?;
        self.subclasses.push(subclass);
        Ok(self)
    }
}

fn add_property<'r>(
    def: &EntityDef,
    rules: &'r mut Vec<Rule>,
    member: &str,
) -> Result<&'r mut Property> {
    let member = def.member(member)?.clone();
    rules.push(Rule::Property(Property::new(member)));
    Ok(rules.last_mut().unwrap().expect_property_mut())
}

fn add_many_to_one<'r>(
    def: &EntityDef,
    rules: &'r mut Vec<Rule>,
    member: &str,
) -> Result<&'r mut ManyToOne> {
    let member = def.member(member)?.clone();
    rules.push(Rule::ManyToOne(ManyToOne::new(member)));
    Ok(rules.last_mut().unwrap().expect_many_to_one_mut())
}

fn add_one_to_one<'r>(
    def: &EntityDef,
    rules: &'r mut Vec<Rule>,
    member: &str,
) -> Result<&'r mut OneToOne> {
    let member = def.member(member)?.clone();
    let Some(target) = member.ty.as_entity().cloned() else {
        return Err(Error::member_not_a_reference(&def.ty.name, &member.name));
    };
    rules.push(Rule::OneToOne(OneToOne::new(member, target)));
    Ok(rules.last_mut().unwrap().expect_one_to_one_mut())
}

fn add_collection<'r>(
    def: &EntityDef,
    rules: &'r mut Vec<Rule>,
    member: &str,
    kind: AssociationKind,
) -> Result<&'r mut Collection> {
    let member = def.member(member)?.clone();
    let Some(child) = member.ty.as_list().cloned() else {
        return Err(Error::member_not_a_collection(&def.ty.name, &member.name));
    };
    rules.push(Rule::Collection(Collection::new(member, kind, child)));
    Ok(rules.last_mut().unwrap().expect_collection_mut())
}

fn add_component<'r>(
    def: &EntityDef,
    rules: &'r mut Vec<Rule>,
    member: &str,
    component_def: &EntityDef,
    build: impl FnOnce(&mut RuleSet<'_>) -> Result<()>,
) -> Result<&'r mut Component> {
    let member = def.member(member)?.clone();
    let mut component = Component::new(member);
    build(&mut RuleSet {
        def: component_def,
        rules: &mut component.rules,
    })?;
    rules.push(Rule::Component(component));
    Ok(rules.last_mut().unwrap().expect_component_mut())
}
