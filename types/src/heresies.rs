//! Heresies checklist document.

use serde::{Deserialize, Serialize};

use crate::Document;

/// A named false-teaching/correct-teaching pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heresy {
    pub name: String,
    pub false_teaching: String,
    pub catholic_truth: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeresiesChecklist {
    pub catholic_teachings_about_jesus: Vec<String>,
    pub heresies: Vec<Heresy>,
}

impl Document for HeresiesChecklist {
    const RESOURCE_PATH: &'static str = "heresies_checklist.json";
    const REQUIRED_FIELDS: &'static [&'static str] = &["heresies", "catholic_teachings_about_jesus"];
    const LABEL: &'static str = "heresies checklist";
}
