use hbm_core::{ClassMap, EntityDef, TypeIdent, ValueTy};

fn domain_ty(name: &str) -> TypeIdent {
    TypeIdent::new(name, "Domain.Model", "Domain")
}

fn mapped_object() -> EntityDef {
    EntityDef::new(domain_ty("MappedObject"))
        .with_member("Id", ValueTy::I64)
        .with_member("Name", ValueTy::String)
        .with_member("Parent", ValueTy::Entity(domain_ty("SecondMappedObject")))
        .with_member("Children", ValueTy::List(domain_ty("ChildObject")))
        .with_member("Component", ValueTy::Entity(domain_ty("ComponentOfMappedObject")))
}

fn component_of_mapped_object() -> EntityDef {
    EntityDef::new(domain_ty("ComponentOfMappedObject"))
        .with_member("Name", ValueTy::String)
        .with_member("Another", ValueTy::String)
}

#[test]
fn undeclared_members_are_rejected() {
    let def = mapped_object();
    let mut map = ClassMap::new(&def);

    let err = map.property("Ghost").unwrap_err();
    assert!(err.is_unknown_member());
    assert_eq!(err.to_string(), "unknown member `Ghost` on `MappedObject`");

    assert!(map.id("Ghost").is_err());
    assert!(map.references("Ghost").is_err());
    assert!(map.has_one("Ghost").is_err());
    assert!(map.has_many("Ghost").is_err());
    assert!(map.has_many_to_many("Ghost").is_err());
}

#[test]
fn declared_members_resolve() {
    let def = mapped_object();
    let mut map = ClassMap::new(&def);

    assert!(map.id("Id").is_ok());
    assert!(map.property("Name").is_ok());
    assert!(map.references("Parent").is_ok());
    assert!(map.has_one("Parent").is_ok());
    assert!(map.has_many("Children").is_ok());
    assert!(map.has_many_to_many("Children").is_ok());
}

#[test]
fn has_one_rejects_members_that_are_not_references() {
    let def = mapped_object();
    let mut map = ClassMap::new(&def);

    let err = map.has_one("Name").unwrap_err();
    assert!(err.is_unknown_member());
    assert_eq!(
        err.to_string(),
        "member `Name` of `MappedObject` does not reference a mapped class"
    );
}

#[test]
fn collections_reject_members_that_are_not_collections() {
    let def = mapped_object();
    let mut map = ClassMap::new(&def);

    let err = map.has_many("Parent").unwrap_err();
    assert!(err.is_unknown_member());
    assert_eq!(
        err.to_string(),
        "member `Parent` of `MappedObject` is not a collection of a mapped class"
    );

    let err = map.has_many_to_many("Name").unwrap_err();
    assert_eq!(
        err.to_string(),
        "member `Name` of `MappedObject` is not a collection of a mapped class"
    );
}

#[test]
fn component_rules_resolve_against_the_component_definition() {
    let def = mapped_object();
    let component_def = component_of_mapped_object();
    let mut map = ClassMap::new(&def);

    map.component("Component", &component_def, |rules| {
        rules.property("Another")?;
        Ok(())
    })
    .unwrap();

    // `Parent` is declared on the owner, not on the component.
    let err = map
        .component("Component", &component_def, |rules| {
            rules.property("Parent").map(|_| ())
        })
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown member `Parent` on `ComponentOfMappedObject`"
    );
}

#[test]
fn subclass_rules_resolve_against_the_subclass_definition() {
    let def = mapped_object();
    let red_def = EntityDef::new(domain_ty("RedObject")).with_member("Tint", ValueTy::I32);
    let mut map = ClassMap::new(&def);

    map.discriminate_subclasses_on_column("Type", ValueTy::String)
        .subclass(&red_def, "red", |rules| {
            rules.property("Tint")?;
            Ok(())
        })
        .unwrap();

    let subclass = &map.mapping().subclasses[0];
    assert_eq!(subclass.ty.name, "RedObject");
    assert_eq!(subclass.rules.len(), 1);
}

#[test]
fn secondary_table_rules_resolve_against_the_owner() {
    let def = mapped_object();
    let mut map = ClassMap::new(&def);

    map.with_table("tableTwo", |rules| {
        rules.property("Name")?;
        rules.references("Parent")?;
        Ok(())
    })
    .unwrap();

    assert_eq!(map.mapping().joins[0].rules.len(), 2);
}

#[test]
fn a_failed_declaration_scope_leaves_no_rule_behind() {
    let def = mapped_object();
    let component_def = component_of_mapped_object();
    let mut map = ClassMap::new(&def);

    assert!(map
        .with_table("tableTwo", |rules| rules.property("Ghost").map(|_| ()))
        .is_err());
    assert!(map
        .component("Component", &component_def, |rules| {
            rules.property("Ghost").map(|_| ())
        })
        .is_err());

    assert!(map.mapping().joins.is_empty());
    assert!(map.mapping().rules.is_empty());
}
