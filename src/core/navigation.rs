//! Tab navigation across content sections
//!
//! Exactly one section is active at a time. Activating a section deactivates
//! its tab and panel together with every other section.

use crate::config::{SectionConfig, SectionKind};

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub kind: SectionKind,
    pub body: String,
}

impl From<&SectionConfig> for Section {
    fn from(cfg: &SectionConfig) -> Self {
        Self {
            id: cfg.id.clone(),
            title: cfg.title.clone(),
            kind: cfg.kind,
            body: cfg.body.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Navigator {
    sections: Vec<Section>,
    active: usize,
}

impl Navigator {
    /// Build from a non-empty list of sections. The first section starts active.
    pub fn new(sections: Vec<Section>) -> Self {
        debug_assert!(!sections.is_empty(), "navigator needs at least one section");
        Self { sections, active: 0 }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> Option<&Section> {
        self.sections.get(self.active)
    }

    #[cfg(test)]
    pub fn is_active(&self, index: usize) -> bool {
        index == self.active
    }

    /// Activate a section by position. Out-of-range indices change nothing.
    pub fn activate(&mut self, index: usize) -> bool {
        if index >= self.sections.len() {
            return false;
        }
        if index != self.active {
            tracing::info!(
                "Switched section: {} -> {}",
                self.sections[self.active].id,
                self.sections[index].id
            );
        }
        self.active = index;
        true
    }

    pub fn activate_by_id(&mut self, id: &str) -> bool {
        match self.sections.iter().position(|s| s.id == id) {
            Some(idx) => self.activate(idx),
            None => {
                tracing::warn!("Unknown section id: {}", id);
                false
            }
        }
    }

    /// Next section, wrapping to the first
    pub fn next(&mut self) {
        if !self.sections.is_empty() {
            self.activate((self.active + 1) % self.sections.len());
        }
    }

    /// Previous section, wrapping to the last
    pub fn prev(&mut self) {
        if !self.sections.is_empty() {
            let prev = if self.active == 0 {
                self.sections.len() - 1
            } else {
                self.active - 1
            };
            self.activate(prev);
        }
    }
}
