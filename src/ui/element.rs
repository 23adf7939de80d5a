//! Retained overlay elements for the editing surface.
//!
//! The editor positions handles, vertices, and control knobs above the map.
//! This module models that surface as a small retained tree owned by the
//! plugin: elements carry a tag, classes, attributes, an inline style, and a
//! caller-assigned bounding rectangle. There is no layout engine and no
//! rendering here.

use crate::{
    core::{bounds::Bounds, geo::Point},
    input::events::PointerEvent,
    prelude::HashMap,
    ui::style::StyleSupport,
    DrawError, Result,
};

/// Identifies an element on an [`OverlaySurface`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(u64);

/// One overlay element
#[derive(Debug, Clone)]
pub struct Element {
    pub tag: String,
    pub classes: Vec<String>,
    pub attributes: HashMap<String, String>,
    /// Inline style, keyed by resolved property name
    pub style: HashMap<String, String>,
    /// Bounding rectangle in client coordinates, caller-assigned
    pub rect: Bounds,
    /// Border insets at the top-left corner (the `clientLeft`/`clientTop`
    /// counterparts)
    pub border: Point,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            classes: Vec::new(),
            attributes: HashMap::default(),
            style: HashMap::default(),
            rect: Bounds::default(),
            border: Point::default(),
            parent: None,
            children: Vec::new(),
        }
    }

    /// The parent element, if attached
    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    /// Child elements in append order
    pub fn children(&self) -> &[ElementId] {
        &self.children
    }

    /// Whether the element carries the given class
    pub fn has_class(&self, class_name: &str) -> bool {
        self.classes.iter().any(|c| c == class_name)
    }
}

/// The overlay element tree, plus the surface-wide style state
pub struct OverlaySurface {
    elements: HashMap<ElementId, Element>,
    root_style: HashMap<String, String>,
    saved_selection: Option<String>,
    support: StyleSupport,
    element_counter: u64,
}

impl OverlaySurface {
    /// Creates an empty surface with the given resolved style support
    pub fn new(support: StyleSupport) -> Self {
        Self {
            elements: HashMap::default(),
            root_style: HashMap::default(),
            saved_selection: None,
            support,
            element_counter: 0,
        }
    }

    /// Builds an element
    ///
    /// Optionally sets a class name, applies attributes, and appends the
    /// element to a container. Returns the new element's id.
    pub fn create(
        &mut self,
        tag: &str,
        class_name: Option<&str>,
        container: Option<ElementId>,
        attributes: Option<&[(&str, &str)]>,
    ) -> Result<ElementId> {
        let id = ElementId(self.element_counter);
        self.element_counter += 1;

        let mut element = Element::new(tag);
        if let Some(class_name) = class_name {
            element.classes.push(class_name.to_string());
        }
        if let Some(attributes) = attributes {
            for (key, value) in attributes {
                element.attributes.insert(key.to_string(), value.to_string());
            }
        }

        if let Some(container) = container {
            let parent = self.elements.get_mut(&container).ok_or_else(|| {
                DrawError::Element(format!("no such container element: {:?}", container))
            })?;
            parent.children.push(id);
            element.parent = Some(container);
        }

        log::trace!("created <{}> element {:?}", tag, id);
        self.elements.insert(id, element);
        Ok(id)
    }

    /// Removes an element and its subtree
    ///
    /// Fails if the element does not exist or has no parent.
    pub fn destroy(&mut self, id: ElementId) -> Result<()> {
        let parent = match self.elements.get(&id) {
            Some(element) => element.parent,
            None => {
                return Err(DrawError::Element(format!("no such element: {:?}", id)).into());
            }
        };

        let parent = parent.ok_or_else(|| {
            DrawError::Element(format!("element {:?} has no parent", id))
        })?;

        if let Some(parent) = self.elements.get_mut(&parent) {
            parent.children.retain(|child| *child != id);
        }

        let mut pending = vec![id];
        while let Some(next) = pending.pop() {
            if let Some(element) = self.elements.remove(&next) {
                pending.extend(element.children);
            }
        }

        Ok(())
    }

    /// Removes a class name from each element in order
    pub fn remove_class(&mut self, ids: &[ElementId], class_name: &str) {
        for id in ids {
            if let Some(element) = self.elements.get_mut(id) {
                element.classes.retain(|c| c != class_name);
            }
        }
    }

    /// Sets the element's transform in its inline style
    ///
    /// Uses the property name resolved at surface construction; does nothing
    /// when the host supports no transform property.
    pub fn set_transform(&mut self, id: ElementId, value: &str) -> Result<()> {
        let element = self.elements.get_mut(&id).ok_or_else(|| {
            DrawError::Element(format!("no such element: {:?}", id))
        })?;

        if let Some(prop) = self.support.transform_prop() {
            element.style.insert(prop.to_string(), value.to_string());
        }
        Ok(())
    }

    /// Suppresses text selection on the surface, saving the prior value
    ///
    /// A second call before [`enable_selection`](Self::enable_selection)
    /// overwrites the saved value.
    pub fn disable_selection(&mut self) {
        if let Some(prop) = self.support.select_prop() {
            self.saved_selection =
                Some(self.root_style.get(prop).cloned().unwrap_or_default());
            self.root_style.insert(prop.to_string(), "none".to_string());
        }
    }

    /// Restores the selection style saved by
    /// [`disable_selection`](Self::disable_selection)
    pub fn enable_selection(&mut self) {
        if let Some(prop) = self.support.select_prop() {
            if let Some(saved) = self.saved_selection.take() {
                if saved.is_empty() {
                    self.root_style.remove(prop);
                } else {
                    self.root_style.insert(prop.to_string(), saved);
                }
            }
        }
    }

    /// Captures the pointer position in element-local pixel coordinates,
    /// adjusting for the element's border insets
    pub fn mouse_pos(&self, event: &PointerEvent, id: ElementId) -> Result<Point> {
        let element = self.get(id).ok_or_else(|| {
            DrawError::Element(format!("no such element: {:?}", id))
        })?;

        Ok(Point::new(
            event.client.x - element.rect.min.x - element.border.x,
            event.client.y - element.rect.min.y - element.border.y,
        ))
    }

    /// Gets an element by id
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    /// Gets a mutable reference to an element by id
    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(&id)
    }

    /// The surface-wide root style
    pub fn root_style(&self) -> &HashMap<String, String> {
        &self.root_style
    }

    /// The number of live elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Default for OverlaySurface {
    fn default() -> Self {
        Self::new(StyleSupport::default())
    }
}
