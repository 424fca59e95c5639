use crate::core::data::{Section, SectionId};
use crate::core::sections::errors::RegistryError;
use std::collections::HashSet;

/// Section ids and navbar labels of the stock portfolio layout, in page order.
pub const PORTFOLIO_SECTIONS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("about", "About"),
    ("experience", "Experience"),
    ("projects", "Projects"),
    ("skills", "Skills"),
    ("contact", "Contact"),
];

/// Ordered, immutable list of the page's sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    /// Builds a registry from `(id, label)` pairs in page order.
    ///
    /// Ordinals follow the iteration order.
    pub fn new<I, L>(entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (SectionId, L)>,
        L: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut sections = Vec::new();

        for (ordinal, (id, label)) in entries.into_iter().enumerate() {
            if !seen.insert(id.clone()) {
                return Err(RegistryError::DuplicateId(id));
            }

            sections.push(Section::new(id, ordinal, label));
        }

        if sections.is_empty() {
            return Err(RegistryError::Empty);
        }

        Ok(Self { sections })
    }

    #[must_use]
    pub fn portfolio() -> Self {
        let sections = PORTFOLIO_SECTIONS
            .iter()
            .enumerate()
            .map(|(ordinal, (id, label))| {
                Section::new(SectionId::from_static(*id), ordinal, *label)
            })
            .collect();

        Self { sections }
    }

    /// The section a freshly mounted page starts on.
    #[must_use]
    pub fn first(&self) -> &Section {
        &self.sections[0]
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.sections.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl<'a> IntoIterator for &'a SectionRegistry {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: &str) -> SectionId {
        SectionId::new(value).unwrap()
    }

    #[test]
    fn portfolio_registry_starts_at_home_and_keeps_page_order() {
        let registry = SectionRegistry::portfolio();

        assert_eq!(registry.first().id(), "home");
        assert_eq!(registry.len(), 6);

        let order: Vec<&str> = registry.iter().map(|s| s.id().as_str()).collect();
        assert_eq!(
            order,
            ["home", "about", "experience", "projects", "skills", "contact"]
        );

        for (index, section) in registry.iter().enumerate() {
            assert_eq!(section.ordinal(), index);
        }
    }

    #[test]
    fn lookup_by_id() {
        let registry = SectionRegistry::portfolio();

        assert_eq!(registry.get("skills").map(Section::label), Some("Skills"));
        assert!(registry.contains("contact"));
        assert!(!registry.contains("blog"));
    }

    #[test]
    fn empty_registry_is_rejected() {
        let result = SectionRegistry::new(Vec::<(SectionId, &str)>::new());

        assert_eq!(result, Err(RegistryError::Empty));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = SectionRegistry::new([
            (id("home"), "Home"),
            (id("about"), "About"),
            (id("home"), "Start"),
        ]);

        assert_eq!(result, Err(RegistryError::DuplicateId(id("home"))));
    }

    #[test]
    fn custom_registry_uses_given_order() {
        let registry =
            SectionRegistry::new([(id("intro"), "Intro"), (id("work"), "Work")]).unwrap();

        assert_eq!(registry.first().id(), "intro");
        assert_eq!(registry.get("work").map(Section::ordinal), Some(1));
    }
}
