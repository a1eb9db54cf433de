//! Categorized verse cheatsheet.

use serde::{Deserialize, Serialize};

use crate::Document;

/// A scripture reference/text pair with an optional annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    pub reference: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subcategory {
    pub name: String,
    pub verses: Vec<Verse>,
}

/// A named top-level grouping of verses, optionally subdivided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subcategories: Vec<Subcategory>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub verses: Vec<Verse>,
}

/// What an expanded category shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryBody<'a> {
    Subcategories(&'a [Subcategory]),
    Verses(&'a [Verse]),
    /// Neither list has entries; rendered as a placeholder.
    Empty,
}

impl Category {
    /// Subcategories take precedence over direct verses.
    #[must_use]
    pub fn body(&self) -> CategoryBody<'_> {
        if !self.subcategories.is_empty() {
            CategoryBody::Subcategories(&self.subcategories)
        } else if !self.verses.is_empty() {
            CategoryBody::Verses(&self.verses)
        } else {
            CategoryBody::Empty
        }
    }

    /// Total verses reachable from this category.
    #[must_use]
    pub fn verse_count(&self) -> usize {
        match self.body() {
            CategoryBody::Subcategories(subs) => subs.iter().map(|s| s.verses.len()).sum(),
            CategoryBody::Verses(verses) => verses.len(),
            CategoryBody::Empty => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseCheatsheet {
    pub categories: Vec<Category>,
}

impl VerseCheatsheet {
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    #[must_use]
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.name == name)
    }
}

impl Document for VerseCheatsheet {
    const RESOURCE_PATH: &'static str = "bible_verse_cheatsheet.json";
    const REQUIRED_FIELDS: &'static [&'static str] = &["categories"];
    const LABEL: &'static str = "verse cheatsheet";
}

#[cfg(test)]
mod tests {
    use super::{Category, CategoryBody, Subcategory, Verse, VerseCheatsheet};

    fn verse(reference: &str) -> Verse {
        Verse {
            reference: reference.to_string(),
            text: "text".to_string(),
            note: None,
        }
    }

    fn category(name: &str) -> Category {
        Category {
            name: name.to_string(),
            description: None,
            subcategories: Vec::new(),
            verses: Vec::new(),
        }
    }

    #[test]
    fn subcategories_take_precedence() {
        let mut cat = category("Mary");
        cat.verses.push(verse("Lk 1:28"));
        cat.subcategories.push(Subcategory {
            name: "Immaculate Conception".to_string(),
            verses: vec![verse("Gen 3:15")],
        });
        assert!(matches!(cat.body(), CategoryBody::Subcategories(subs) if subs.len() == 1));
        assert_eq!(cat.verse_count(), 1);
    }

    #[test]
    fn direct_verses_when_no_subcategories() {
        let mut cat = category("Faith");
        cat.verses.push(verse("Heb 11:1"));
        assert!(matches!(cat.body(), CategoryBody::Verses([v]) if v.reference == "Heb 11:1"));
    }

    #[test]
    fn neither_list_is_empty_body() {
        assert_eq!(category("Purgatory").body(), CategoryBody::Empty);
    }

    #[test]
    fn absent_lists_deserialize_as_empty() {
        let cat: Category = serde_json::from_str(r#"{ "name": "Saints" }"#).unwrap();
        assert_eq!(cat.body(), CategoryBody::Empty);
        assert!(cat.description.is_none());
    }

    #[test]
    fn lookup_by_name_keeps_order() {
        let doc = VerseCheatsheet {
            categories: vec![category("A"), category("B"), category("C")],
        };
        assert_eq!(doc.category_names().collect::<Vec<_>>(), ["A", "B", "C"]);
        assert_eq!(doc.position("B"), Some(1));
        assert!(doc.category("Z").is_none());
    }
}
