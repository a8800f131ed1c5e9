use hbm_core::{ClassMap, EntityDef, TypeIdent, ValueTy};
use hbm_xml::{Compiler, Document};

fn domain_ty(name: &str) -> TypeIdent {
    TypeIdent::new(name, "Domain.Model", "Domain")
}

fn mapped_object() -> EntityDef {
    EntityDef::new(domain_ty("MappedObject"))
        .with_member("Id", ValueTy::I64)
        .with_member("Component", ValueTy::Entity(domain_ty("ComponentOfMappedObject")))
}

fn component_of_mapped_object() -> EntityDef {
    EntityDef::new(domain_ty("ComponentOfMappedObject"))
        .with_member("Name", ValueTy::String)
        .with_member("Inner", ValueTy::Entity(domain_ty("InnerComponent")))
}

fn compile(map: &ClassMap<'_>) -> Document {
    Compiler::new().compile(map.mapping()).unwrap()
}

#[test]
fn components_render_insert_and_update_flags() {
    let def = mapped_object();
    let component_def = component_of_mapped_object();
    let mut map = ClassMap::new(&def);
    map.id("Id").unwrap();
    map.component("Component", &component_def, |rules| {
        rules.property("Name")?;
        Ok(())
    })
    .unwrap();

    let doc = compile(&map);
    let component = doc.find("class/component").unwrap();
    assert_eq!(component.attr("name"), Some("Component"));
    assert_eq!(component.attr("insert"), Some("true"));
    assert_eq!(component.attr("update"), Some("true"));

    let property = component.child("property").unwrap();
    assert_eq!(property.attr("name"), Some("Name"));
    assert_eq!(property.attr("column"), Some("Name"));
    assert_eq!(property.attr("type"), Some("String"));
}

#[test]
fn disabled_flags_render_false() {
    let def = mapped_object();
    let component_def = component_of_mapped_object();
    let mut map = ClassMap::new(&def);
    map.id("Id").unwrap();
    map.component("Component", &component_def, |rules| {
        rules.property("Name")?;
        Ok(())
    })
    .unwrap()
    .insert(false)
    .update(false);

    let doc = compile(&map);
    let component = doc.find("class/component").unwrap();
    assert_eq!(component.attr("insert"), Some("false"));
    assert_eq!(component.attr("update"), Some("false"));
}

#[test]
fn components_nest() {
    let def = mapped_object();
    let component_def = component_of_mapped_object();
    let inner_def =
        EntityDef::new(domain_ty("InnerComponent")).with_member("Depth", ValueTy::I32);
    let mut map = ClassMap::new(&def);
    map.id("Id").unwrap();
    map.component("Component", &component_def, |rules| {
        rules.component("Inner", &inner_def, |rules| {
            rules.property("Depth")?;
            Ok(())
        })?;
        Ok(())
    })
    .unwrap();

    let doc = compile(&map);
    let inner = doc.find("class/component/component").unwrap();
    assert_eq!(inner.attr("name"), Some("Inner"));
    assert_eq!(inner.attr("insert"), Some("true"));
    assert_eq!(
        inner.child("property").unwrap().attr("name"),
        Some("Depth")
    );
}

#[test]
fn component_rules_keep_declaration_order() {
    let def = mapped_object();
    let component_def = EntityDef::new(domain_ty("ComponentOfMappedObject"))
        .with_member("Name", ValueTy::String)
        .with_member("Another", ValueTy::String);
    let mut map = ClassMap::new(&def);
    map.id("Id").unwrap();
    map.component("Component", &component_def, |rules| {
        rules.property("Another")?;
        rules.property("Name")?;
        Ok(())
    })
    .unwrap();

    let doc = compile(&map);
    let component = doc.find("class/component").unwrap();
    let names: Vec<_> = component
        .children_named("property")
        .map(|property| property.attr("name").unwrap())
        .collect();
    assert_eq!(names, ["Another", "Name"]);
}
