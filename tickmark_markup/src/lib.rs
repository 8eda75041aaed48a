// Copyright 2026 the Tickmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A tiny SVG-style element tree.
//!
//! Guide generators (axes, and anything else that emits drawable primitives)
//! build a tree of [`Element`]s: a tag name, an ordered list of string
//! attributes, optional text content, and ordered children. The tree is
//! renderer-agnostic until it is serialized with [`Element::to_svg_string`].
//!
//! Tag and attribute names are `&'static str`: they come from a fixed SVG
//! vocabulary, while attribute values and text are owned strings.

#![no_std]

extern crate alloc;

mod svg;

use alloc::string::String;
use alloc::vec::Vec;

use smallvec::SmallVec;

pub use svg::{SVG_NAMESPACE, svg_document};

/// A single node of the markup tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    attributes: SmallVec<[(&'static str, String); 8]>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    /// Creates an element with no attributes, text, or children.
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attributes: SmallVec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Returns the tag name (e.g. `g`, `line`, `text`).
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Sets an attribute and returns the element.
    pub fn with_attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Sets an attribute.
    ///
    /// Setting an attribute that already exists replaces its value without changing
    /// its position in the attribute order.
    pub fn set_attribute(&mut self, name: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Returns the value of an attribute, if set.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns all attributes in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.attributes.iter().map(|(n, v)| (*n, v.as_str()))
    }

    /// Sets the text content and returns the element.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    /// Sets the text content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Returns the text content, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Appends a child element, after any existing children.
    pub fn append(&mut self, child: Self) {
        self.children.push(child);
    }

    /// Creates a new element as the last child of `self` and returns it.
    pub fn sub_element(&mut self, tag: &'static str) -> &mut Self {
        let index = self.children.len();
        self.children.push(Self::new(tag));
        &mut self.children[index]
    }

    /// Returns the children in append order.
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Returns the children with the given tag, in order.
    pub fn children_by_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Self> + 'a {
        self.children.iter().filter(move |c| c.tag == tag)
    }
}
