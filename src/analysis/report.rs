//! Max/min extraction with ties and the natural-language answers built on it

use crate::error::{Error, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Extremum {
    Max,
    Min,
}

/// The extreme count of an aggregate and every name holding it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TiedExtremum {
    pub count: usize,
    /// Names in encounter order
    pub names: Vec<String>,
}

impl TiedExtremum {
    pub fn is_tie(&self) -> bool {
        self.names.len() > 1
    }
}

/// Select the max or min count and all names sharing it.
///
/// Returns `None` for an empty aggregate.
pub fn tied_extremum<I, N>(entries: I, extremum: Extremum) -> Option<TiedExtremum>
where
    I: IntoIterator<Item = (N, usize)>,
    N: AsRef<str>,
{
    let mut by_count: BTreeMap<usize, Vec<String>> = BTreeMap::new();
    for (name, count) in entries {
        by_count
            .entry(count)
            .or_default()
            .push(name.as_ref().to_string());
    }

    let (count, names) = match extremum {
        Extremum::Max => by_count.pop_last()?,
        Extremum::Min => by_count.pop_first()?,
    };

    Some(TiedExtremum { count, names })
}

/// Question line plus singular and plural answer lines.
///
/// Answers may use `{names}` and `{count}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTemplate {
    pub question: String,
    pub singular: String,
    pub plural: String,
}

impl ReportTemplate {
    pub fn new(
        question: impl Into<String>,
        singular: impl Into<String>,
        plural: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            singular: singular.into(),
            plural: plural.into(),
        }
    }

    pub fn most_recipes_by_category() -> Self {
        Self::new(
            "Q1: Which categor(ies) has most recipes?",
            "A1: The category with the most recipes is {names}, having {count} recipes.",
            "A1: The categories with the most recipes are {names}, which have {count} recipes each.",
        )
    }

    pub fn fewest_recipes_by_ingredient(area: &str, category: &str) -> Self {
        let subset = format!("{area} {}", category.to_lowercase());
        Self::new(
            format!("Q2: Which {subset} ingredient(s) has the fewest recipes?"),
            format!(
                "A2: The ingredient used the least in {subset} recipes is {{names}}, having {{count}} recipes."
            ),
            format!(
                "A2: The ingredients used the least in {subset} recipes are {{names}}, which have {{count}} recipes each."
            ),
        )
    }

    pub fn answer(&self, winner: &TiedExtremum) -> String {
        let template = if winner.is_tie() {
            &self.plural
        } else {
            &self.singular
        };

        expand_placeholders(template, &winner.names.join(", "), winner.count)
    }
}

/// Single left-to-right pass so substituted names are never expanded again.
fn expand_placeholders(template: &str, names: &str, count: usize) -> String {
    let mut out = String::with_capacity(template.len() + names.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        if let Some(after) = tail.strip_prefix("{names}") {
            out.push_str(names);
            rest = after;
        } else if let Some(after) = tail.strip_prefix("{count}") {
            out.push_str(&count.to_string());
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }

    out.push_str(rest);
    out
}

/// A printed answer to one of the analysis questions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtremalReport {
    pub question: String,
    pub answer: String,
    pub extremum: TiedExtremum,
}

impl ExtremalReport {
    /// Build the report, failing on an empty aggregate which has no extremum.
    pub fn build<I, N>(entries: I, extremum: Extremum, template: &ReportTemplate) -> Result<Self>
    where
        I: IntoIterator<Item = (N, usize)>,
        N: AsRef<str>,
    {
        let winner = tied_extremum(entries, extremum).ok_or_else(|| {
            Error::EmptyAggregate(format!("no values to answer \"{}\"", template.question))
        })?;

        Ok(Self {
            question: template.question.clone(),
            answer: template.answer(&winner),
            extremum: winner,
        })
    }
}

impl fmt::Display for ExtremalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.question)?;
        write!(f, "{}", self.answer)
    }
}
