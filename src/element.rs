// citexml
// Copyright 2016 citexml developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::{escape, escape_attribute, Xml};

use indexmap::IndexMap;
use std::fmt::{self, Write};
use std::slice;

const INDENT: &str = "  ";

#[derive(Clone, PartialEq, Debug)]
/// A struct representing an XML element
pub struct Element {
    /// The element's name
    pub name: String,
    /// The element's attributes, in insertion order
    pub attributes: IndexMap<String, String>,
    /// The element's child `Xml` nodes
    pub children: Vec<Xml>,
}

fn fmt_start(elem: &Element, f: &mut impl Write) -> fmt::Result {
    write!(f, "<{}", elem.name)?;
    for (name, value) in &elem.attributes {
        write!(f, " {}=\"{}\"", name, escape_attribute(value))?;
    }
    Ok(())
}

fn fmt_elem(elem: &Element, f: &mut fmt::Formatter) -> fmt::Result {
    fmt_start(elem, f)?;

    if elem.children.is_empty() {
        write!(f, "/>")
    } else {
        write!(f, ">")?;
        for child in &elem.children {
            fmt::Display::fmt(child, f)?;
        }
        write!(f, "</{}>", elem.name)
    }
}

// Elements holding only character data stay on one line; anything with
// element children gets one child per line, indented one level deeper.
fn fmt_pretty(elem: &Element, depth: usize, out: &mut String) -> fmt::Result {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    fmt_start(elem, out)?;

    if elem.children.is_empty() {
        return writeln!(out, "/>");
    }

    let inline = elem
        .children
        .iter()
        .all(|child| matches!(*child, Xml::CharacterNode(_)));
    if inline {
        write!(out, ">")?;
        for child in &elem.children {
            write!(out, "{}", child)?;
        }
        return writeln!(out, "</{}>", elem.name);
    }

    writeln!(out, ">")?;
    for child in &elem.children {
        match *child {
            Xml::ElementNode(ref child) => fmt_pretty(child, depth + 1, out)?,
            Xml::CharacterNode(ref data) => {
                for _ in 0..=depth {
                    out.push_str(INDENT);
                }
                writeln!(out, "{}", escape(data))?;
            }
        }
    }
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    writeln!(out, "</{}>", elem.name)
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_elem(self, f)
    }
}

/// An iterator returning filtered child `Element`s of another `Element`
pub struct ChildElements<'a, 'b> {
    elems: slice::Iter<'a, Xml>,
    name: &'b str,
}

impl<'a, 'b> Iterator for ChildElements<'a, 'b> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<&'a Element> {
        let name = self.name;
        self.elems
            .by_ref()
            .filter_map(|child| {
                if let Xml::ElementNode(ref elem) = *child {
                    if name == elem.name {
                        return Some(elem);
                    }
                }
                None
            })
            .next()
    }
}

impl Element {
    /// Create a new `Element` with the specified name.
    /// Attributes are specified as `(name, value)` pairs and keep their order.
    pub fn new<A>(name: String, attrs: A) -> Element
    where
        A: IntoIterator<Item = (String, String)>,
    {
        Element {
            name,
            attributes: attrs.into_iter().collect(),
            children: Vec::new(),
        }
    }

    /// Renders the element as indented XML, two spaces per level, ending in a newline.
    pub fn to_pretty_string(&self) -> String {
        let mut out = String::new();
        // Writing into a `String` cannot fail.
        let _ = fmt_pretty(self, 0, &mut out);
        out
    }

    /// Returns the character data contained in the element.
    pub fn content_str(&self) -> String {
        let mut res = String::new();
        for child in &self.children {
            match *child {
                Xml::ElementNode(ref elem) => res.push_str(&elem.content_str()),
                Xml::CharacterNode(ref data) => res.push_str(data),
            }
        }
        res
    }

    /// Gets an attribute with the specified name. When an attribute with the
    /// specified name does not exist `None` is returned.
    pub fn get_attribute<'a>(&'a self, name: &str) -> Option<&'a str> {
        self.attributes.get(name).map(|x| &x[..])
    }

    /// Sets the attribute with the specified name.
    /// Returns the original value.
    pub fn set_attribute(&mut self, name: String, value: String) -> Option<String> {
        self.attributes.insert(name, value)
    }

    /// Remove the attribute with the specified name.
    /// Returns the original value.
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        self.attributes.shift_remove(name)
    }

    /// Gets the first child `Element` with the specified name. When no child
    /// with the specified name exists `None` is returned.
    pub fn get_child<'a>(&'a self, name: &str) -> Option<&'a Element> {
        self.get_children(name).next()
    }

    /// Get all children `Element` with the specified name.
    pub fn get_children<'a, 'b>(&'a self, name: &'b str) -> ChildElements<'a, 'b> {
        ChildElements {
            elems: self.children.iter(),
            name,
        }
    }

    /// Appends a child element. Returns a reference to the added element.
    pub fn tag(&mut self, child: Element) -> &mut Element {
        self.children.push(Xml::ElementNode(child));
        match self.children.last_mut() {
            Some(Xml::ElementNode(elem)) => elem,
            _ => unreachable!("last child was just pushed as an element"),
        }
    }

    /// Appends a child element. Returns a mutable reference to self.
    pub fn tag_stay(&mut self, child: Element) -> &mut Element {
        self.children.push(Xml::ElementNode(child));
        self
    }

    /// Appends characters. Returns a mutable reference to self.
    pub fn text(&mut self, text: String) -> &mut Element {
        self.children.push(Xml::CharacterNode(text));
        self
    }
}
