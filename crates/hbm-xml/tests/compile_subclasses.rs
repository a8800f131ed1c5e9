use hbm_core::{ClassMap, EntityDef, TypeIdent, ValueTy};
use hbm_xml::{Compiler, Document};

fn domain_ty(name: &str) -> TypeIdent {
    TypeIdent::new(name, "Domain.Model", "Domain")
}

fn mapped_object() -> EntityDef {
    EntityDef::new(domain_ty("MappedObject"))
        .with_member("Id", ValueTy::I64)
        .with_member("Name", ValueTy::String)
}

fn red_object() -> EntityDef {
    EntityDef::new(domain_ty("RedObject")).with_member("Tint", ValueTy::I32)
}

fn compile(map: &ClassMap<'_>) -> Document {
    Compiler::new().compile(map.mapping()).unwrap()
}

#[test]
fn discriminator_renders_between_the_id_and_the_rules() {
    let def = mapped_object();
    let mut map = ClassMap::new(&def);
    map.id("Id").unwrap();
    map.property("Name").unwrap();
    map.discriminate_subclasses_on_column("Type", ValueTy::String);

    let doc = compile(&map);
    let class = doc.find("class").unwrap();
    let names: Vec<_> = class.children().iter().map(|child| child.name).collect();
    assert_eq!(names, ["id", "discriminator", "property"]);

    let discriminator = class.child("discriminator").unwrap();
    assert_eq!(discriminator.attr("column"), Some("Type"));
    assert_eq!(discriminator.attr("type"), Some("String"));

    // Without a class-level value the class node stays unmarked.
    assert_eq!(class.attr("discriminator-value"), None);
}

#[test]
fn class_value_renders_on_the_class_node() {
    let def = mapped_object();
    let mut map = ClassMap::new(&def);
    map.id("Id").unwrap();
    map.discriminate_subclasses_on_column("Type", ValueTy::String)
        .class_value("base");

    let doc = compile(&map);
    assert_eq!(
        doc.find("class").unwrap().attr("discriminator-value"),
        Some("base")
    );
}

#[test]
fn subclasses_render_inside_the_class_node() {
    let def = mapped_object();
    let red_def = red_object();
    let mut map = ClassMap::new(&def);
    map.id("Id").unwrap();
    map.discriminate_subclasses_on_column("Type", ValueTy::String)
        .subclass(&red_def, "red", |rules| {
            rules.property("Tint")?;
            Ok(())
        })
        .unwrap();

    let doc = compile(&map);
    let subclass = doc.find("class/subclass").unwrap();
    assert_eq!(subclass.attr("name"), Some("Domain.Model.RedObject, Domain"));
    assert_eq!(subclass.attr("discriminator-value"), Some("red"));

    let property = subclass.child("property").unwrap();
    assert_eq!(property.attr("name"), Some("Tint"));
    assert_eq!(property.attr("type"), Some("Int32"));

    // Consumers locate subclasses by name, independent of nesting depth.
    assert_eq!(doc.find_descendant("subclass"), doc.find("class/subclass"));
}

#[test]
fn subclasses_keep_declaration_order() {
    let def = mapped_object();
    let red_def = red_object();
    let blue_def = EntityDef::new(domain_ty("BlueObject")).with_member("Depth", ValueTy::I32);
    let mut map = ClassMap::new(&def);
    map.id("Id").unwrap();
    map.discriminate_subclasses_on_column("Type", ValueTy::String)
        .subclass(&red_def, "red", |rules| {
            rules.property("Tint")?;
            Ok(())
        })
        .unwrap()
        .subclass(&blue_def, "blue", |rules| {
            rules.property("Depth")?;
            Ok(())
        })
        .unwrap();

    let doc = compile(&map);
    let class = doc.find("class").unwrap();
    let values: Vec<_> = class
        .children_named("subclass")
        .map(|subclass| subclass.attr("discriminator-value").unwrap())
        .collect();
    assert_eq!(values, ["red", "blue"]);
}

#[test]
fn a_discriminator_with_no_storage_type_does_not_compile() {
    let def = mapped_object();
    let mut map = ClassMap::new(&def);
    map.id("Id").unwrap();
    map.discriminate_subclasses_on_column("Type", ValueTy::Enum(domain_ty("TypeEnum")));

    let err = Compiler::new().compile(map.mapping()).unwrap_err();
    assert!(err.is_unresolvable_type());
}
