//! Ordered registry of the page sections that take part in navigation.
//!
//! Sections register a bounds provider when they mount, so the scroll
//! tracker and the navigator never have to query the document for them.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::HtmlElement;
use yew::prelude::*;

/// The six navigation anchors, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionId {
    Home,
    About,
    Services,
    Projects,
    Testimonials,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Services,
        SectionId::Projects,
        SectionId::Testimonials,
        SectionId::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Services => "services",
            SectionId::Projects => "projects",
            SectionId::Testimonials => "testimonials",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Services => "Services",
            SectionId::Projects => "Projects",
            SectionId::Testimonials => "Testimonials",
            SectionId::Contact => "Contact",
        }
    }

    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.as_str() == id)
    }
}

/// Vertical span of a section in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Half-open: a point on the bottom edge belongs to the next section.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

pub trait BoundsProvider {
    /// `None` while the section isn't rendered.
    fn bounds(&self) -> Option<SectionBounds>;
}

impl BoundsProvider for NodeRef {
    fn bounds(&self) -> Option<SectionBounds> {
        let element = self.cast::<HtmlElement>()?;
        Some(SectionBounds::new(
            f64::from(element.offset_top()),
            f64::from(element.offset_height()),
        ))
    }
}

struct Entry {
    id: SectionId,
    provider: Rc<dyn BoundsProvider>,
}

#[derive(Default)]
pub struct SectionRegistry {
    entries: Vec<Entry>,
}

impl SectionRegistry {
    /// Mount order isn't guaranteed to match document order, so entries are
    /// kept sorted by id. Registering an id twice replaces the provider.
    pub fn register(&mut self, id: SectionId, provider: Rc<dyn BoundsProvider>) {
        match self.entries.binary_search_by_key(&id, |entry| entry.id) {
            Ok(index) => self.entries[index].provider = provider,
            Err(index) => self.entries.insert(index, Entry { id, provider }),
        }
    }

    pub fn unregister(&mut self, id: SectionId) {
        self.entries.retain(|entry| entry.id != id);
    }

    pub fn bounds_of(&self, id: SectionId) -> Option<SectionBounds> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .and_then(|entry| entry.provider.bounds())
    }

    /// First section, in document order, whose span contains `y`.
    pub fn first_containing(&self, y: f64) -> Option<SectionId> {
        self.entries
            .iter()
            .find(|entry| entry.provider.bounds().is_some_and(|bounds| bounds.contains(y)))
            .map(|entry| entry.id)
    }
}

/// Context handle so every section on the page registers into the same list.
#[derive(Clone, Default)]
pub struct SharedRegistry(Rc<RefCell<SectionRegistry>>);

impl SharedRegistry {
    pub fn register(&self, id: SectionId, provider: Rc<dyn BoundsProvider>) {
        self.0.borrow_mut().register(id, provider);
    }

    pub fn unregister(&self, id: SectionId) {
        self.0.borrow_mut().unregister(id);
    }

    pub fn with<R>(&self, f: impl FnOnce(&SectionRegistry) -> R) -> R {
        f(&self.0.borrow())
    }
}

impl PartialEq for SharedRegistry {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Registers the returned node as section `id` for as long as the calling
/// component is mounted. Attach it to the `<section>` element.
#[hook]
pub fn use_section(id: SectionId) -> NodeRef {
    let node = use_node_ref();
    let registry = use_context::<SharedRegistry>();

    {
        let node = node.clone();
        use_effect_with_deps(
            move |(id, registry)| {
                let id = *id;
                let registry = registry.clone();
                match &registry {
                    Some(registry) => registry.register(id, Rc::new(node)),
                    None => log::warn!("section `{}` mounted outside a registry", id.as_str()),
                }
                move || {
                    if let Some(registry) = registry {
                        registry.unregister(id);
                    }
                }
            },
            (id, registry),
        );
    }

    node
}
