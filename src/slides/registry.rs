use std::collections::BTreeSet;

use crate::foundation::{
    core::{Category, SlideId},
    error::{SliderError, SliderResult},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SlideRecord {
    pub id: String,
    pub category: Category,
    /// Opaque reference the renderer resolves (image path, asset key, ...).
    pub content: String,
    /// Text blocks in reveal order (heading, body, subtext).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub text: Vec<String>,
}

/// Share of the progress bar covered by one category.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CategoryShare {
    pub category: Category,
    pub slides: usize,
    pub percent: f64,
}

/// Fixed, ordered slide list. Registry order defines absolute slide indices.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<SlideRecord>", into = "Vec<SlideRecord>")]
pub struct SlideRegistry {
    records: Vec<SlideRecord>,
}

impl SlideRegistry {
    pub fn new(records: Vec<SlideRecord>) -> SliderResult<Self> {
        let reg = Self { records };
        reg.validate()?;
        Ok(reg)
    }

    pub fn from_json(s: &str) -> SliderResult<Self> {
        let records: Vec<SlideRecord> = serde_json::from_str(s)?;
        Self::new(records)
    }

    pub fn validate(&self) -> SliderResult<()> {
        if self.records.is_empty() {
            return Err(SliderError::registry("registry must contain at least one slide"));
        }

        let mut seen = BTreeSet::new();
        for rec in &self.records {
            if rec.id.trim().is_empty() {
                return Err(SliderError::registry("slide id must be non-empty"));
            }
            if rec.category.as_str().trim().is_empty() {
                return Err(SliderError::registry(format!(
                    "slide '{}' has an empty category",
                    rec.id
                )));
            }
            if !seen.insert(rec.id.as_str()) {
                return Err(SliderError::registry(format!(
                    "duplicate slide id '{}'",
                    rec.id
                )));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: SlideId) -> Option<&SlideRecord> {
        self.records.get(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SlideId, &SlideRecord)> {
        self.records.iter().enumerate().map(|(i, r)| (SlideId(i), r))
    }

    /// Slide count per category, in order of first appearance.
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        let mut out: Vec<(Category, usize)> = Vec::new();
        for rec in &self.records {
            match out.iter_mut().find(|(c, _)| *c == rec.category) {
                Some((_, n)) => *n += 1,
                None => out.push((rec.category.clone(), 1)),
            }
        }
        out
    }

    pub fn category_shares(&self) -> Vec<CategoryShare> {
        let total = self.records.len() as f64;
        self.category_counts()
            .into_iter()
            .map(|(category, slides)| CategoryShare {
                category,
                slides,
                percent: slides as f64 / total * 100.0,
            })
            .collect()
    }
}

impl TryFrom<Vec<SlideRecord>> for SlideRegistry {
    type Error = SliderError;

    fn try_from(records: Vec<SlideRecord>) -> SliderResult<Self> {
        Self::new(records)
    }
}

impl From<SlideRegistry> for Vec<SlideRecord> {
    fn from(reg: SlideRegistry) -> Self {
        reg.records
    }
}

#[cfg(test)]
#[path = "../../tests/unit/slides/registry.rs"]
mod tests;
