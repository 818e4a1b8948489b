//! Domain model for user-defined expense categories.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// Categorises purchases for reporting. Users pick an emoji as the visual
/// marker shown alongside the name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub emoji: String,
}

impl Category {
    pub fn new(name: impl Into<String>, emoji: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            emoji: emoji.into(),
        }
    }
}

impl Identifiable for Category {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Category {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Category {
    fn display_label(&self) -> String {
        format!("{} {}", self.emoji, self.name)
    }
}
