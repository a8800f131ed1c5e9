/// A compiled mapping document: the root element of the rendered tree.
///
/// The tree is the output contract. Consumers either walk it structurally
/// ([`Document::find`]) or serialize it with [`Document::to_xml`]; the
/// by-name descendant search exists for inspection and tests, the compiler
/// itself never uses it.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub root: Element,
}

/// An element in the document tree, with ordered attributes and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Element name. Attribute and element names are fixed by the dialect,
    /// so both are static.
    pub name: &'static str,

    attrs: Vec<(&'static str, String)>,
    children: Vec<Element>,
}

impl Document {
    pub fn new(root: Element) -> Document {
        Document { root }
    }

    /// First element matching a slash-separated path below the root,
    /// e.g. `"class/bag/key"`.
    pub fn find(&self, path: &str) -> Option<&Element> {
        self.root.find(path)
    }

    /// First element with the given name, searching the whole tree
    /// depth-first in document order.
    pub fn find_descendant(&self, name: &str) -> Option<&Element> {
        self.root.find_descendant(name)
    }
}

impl Element {
    pub fn new(name: &'static str) -> Element {
        Element {
            name,
            attrs: vec![],
            children: vec![],
        }
    }

    /// Sets an attribute, replacing in place if already present so the
    /// original declaration order holds.
    pub fn set_attr(&mut self, name: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(attr, _)| *attr == name) {
            Some((_, existing)) => *existing = value,
            None => self.attrs.push((name, value)),
        }
    }

    /// Appends a child element.
    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Attribute value, if set.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(attr, _)| *attr == name)
            .map(|(_, value)| value.as_str())
    }

    /// Attributes in declaration order.
    pub fn attrs(&self) -> &[(&'static str, String)] {
        &self.attrs
    }

    /// First child with the given name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Children in declaration order.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Children with the given name, in declaration order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// First element matching a slash-separated path below this element.
    pub fn find(&self, path: &str) -> Option<&Element> {
        let mut current = self;
        for segment in path.split('/') {
            current = current.child(segment)?;
        }
        Some(current)
    }

    /// First element with the given name anywhere below this element,
    /// depth-first in document order.
    pub fn find_descendant(&self, name: &str) -> Option<&Element> {
        for child in &self.children {
            if child.name == name {
                return Some(child);
            }
            if let Some(found) = child.find_descendant(name) {
                return Some(found);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Element {
        let mut key = Element::new("key");
        key.set_attr("column", "MappedObject_id");

        let mut bag = Element::new("bag");
        bag.set_attr("name", "Children");
        bag.push(key);

        let mut class = Element::new("class");
        class.set_attr("name", "MappedObject");
        class.push(bag);

        let mut root = Element::new("hibernate-mapping");
        root.push(class);
        root
    }

    #[test]
    fn find_follows_path_segments() {
        let doc = Document::new(tree());
        let key = doc.find("class/bag/key").unwrap();
        assert_eq!(key.attr("column"), Some("MappedObject_id"));
        assert!(doc.find("class/set/key").is_none());
    }

    #[test]
    fn find_descendant_ignores_depth() {
        let doc = Document::new(tree());
        let key = doc.find_descendant("key").unwrap();
        assert_eq!(key.attr("column"), Some("MappedObject_id"));
        assert!(doc.find_descendant("subclass").is_none());
    }

    #[test]
    fn set_attr_replaces_in_place() {
        let mut element = Element::new("id");
        element.set_attr("column", "Id");
        element.set_attr("type", "Int64");
        element.set_attr("column", "id");

        assert_eq!(element.attr("column"), Some("id"));
        assert_eq!(element.attrs().len(), 2);
        assert_eq!(element.attrs()[0].0, "column");
    }
}
