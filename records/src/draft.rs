//! Form drafts: typed, form-shape copies of an entity being created or edited.
//!
//! DESIGN
//! ======
//! Inputs are always strings while the user types. A draft keeps them that
//! way and only converts to the API shape in [`Draft::to_payload`], through a
//! [`Coercer`] that collects every missing or malformed field in one pass.
//! Field identity is an enum per entity, so a renamed field is a compile
//! error rather than a silently dropped key.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use std::fmt::Debug;

use serde::Serialize;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::{Record, RefKind};

/// How a field is rendered and parsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Text,
    Email,
    /// `YYYY-MM-DD`.
    Date,
    Number,
    Choice(&'static [&'static str]),
    Reference(RefKind),
}

/// Static description of one form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// Form-shape key (camelCase, as bound to inputs).
    pub name: &'static str,
    pub label: &'static str,
    pub input: Input,
}

/// A field identifier for one draft type.
pub trait FormField: Copy + Eq + Debug + Send + Sync + 'static {
    fn spec(self) -> FieldSpec;

    fn name(self) -> &'static str {
        self.spec().name
    }
}

/// An editable, form-shape copy of one backend entity.
pub trait Draft: Clone + Default + Debug + PartialEq + Send + Sync + 'static {
    type Field: FormField;
    type Record: Record;
    type Payload: Serialize;

    /// Every scalar field in display order.
    const FIELDS: &'static [Self::Field];
    /// Fields that must be non-blank before submission.
    const REQUIRED: &'static [Self::Field];

    /// Existing entity id; `None` for a draft that has never been saved.
    fn id(&self) -> Option<i64>;

    fn value(&self, field: Self::Field) -> &str;

    /// Overwrite exactly one field.
    fn set_field(&mut self, field: Self::Field, value: String);

    /// Pre-populate a draft from a fetched record.
    fn from_record(record: &Self::Record) -> Self;

    /// Convert to the API body, renaming keys and coercing types.
    ///
    /// # Errors
    ///
    /// Returns every missing or malformed field.
    fn to_payload(&self) -> Result<Self::Payload, ValidationError>;

    /// Required fields that are currently blank.
    fn missing(&self) -> Vec<Self::Field> {
        Self::REQUIRED
            .iter()
            .copied()
            .filter(|field| self.value(*field).trim().is_empty())
            .collect()
    }

    /// Fields that attach the entity to a parent record. Changing one on an
    /// existing entity moves it between owners, so saving needs an explicit
    /// confirmation. Defaults to every reference field.
    fn ownership_fields() -> Vec<Self::Field> {
        Self::FIELDS.iter().copied().filter(|field| matches!(field.spec().input, Input::Reference(_))).collect()
    }

    /// Labels of ownership fields that differ from `original`.
    fn ownership_changes(&self, original: &Self) -> Vec<&'static str> {
        Self::ownership_fields()
            .into_iter()
            .filter(|field| self.value(*field).trim() != original.value(*field).trim())
            .map(|field| field.spec().label)
            .collect()
    }

    /// Look up a field by its form-shape name.
    fn field_named(name: &str) -> Option<Self::Field> {
        Self::FIELDS.iter().copied().find(|field| field.name() == name)
    }
}

/// Client-side validation failure; never sent to the server.
#[derive(Clone, Debug, Default, PartialEq, Eq, thiserror::Error)]
#[error("{}", describe(.missing, .malformed))]
pub struct ValidationError {
    pub missing: Vec<&'static str>,
    pub malformed: Vec<&'static str>,
}

impl ValidationError {
    #[must_use]
    pub fn for_fields<F: FormField>(fields: &[F]) -> Self {
        Self { missing: fields.iter().map(|f| f.spec().label).collect(), malformed: Vec::new() }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.malformed.is_empty()
    }
}

fn describe(missing: &[&str], malformed: &[&str]) -> String {
    match (missing.is_empty(), malformed.is_empty()) {
        (false, true) => format!("required: {}", missing.join(", ")),
        (true, false) => format!("invalid: {}", malformed.join(", ")),
        (false, false) => format!("required: {}; invalid: {}", missing.join(", "), malformed.join(", ")),
        (true, true) => "invalid form".to_owned(),
    }
}

/// Accumulates coercion failures while building a payload.
#[derive(Debug, Default)]
pub struct Coercer {
    errors: ValidationError,
}

impl Coercer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Trimmed text; records `label` as missing when blank.
    pub fn required_text(&mut self, label: &'static str, raw: &str) -> String {
        let value = raw.trim();
        if value.is_empty() {
            self.errors.missing.push(label);
        }
        value.to_owned()
    }

    /// Trimmed text, `None` when blank.
    pub fn optional_text(&mut self, raw: &str) -> Option<String> {
        let value = raw.trim();
        (!value.is_empty()).then(|| value.to_owned())
    }

    /// Integer id from a select value.
    pub fn id(&mut self, label: &'static str, raw: &str) -> i64 {
        let value = raw.trim();
        if value.is_empty() {
            self.errors.missing.push(label);
            return 0;
        }
        value.parse().unwrap_or_else(|_| {
            self.errors.malformed.push(label);
            0
        })
    }

    pub fn optional_id(&mut self, label: &'static str, raw: &str) -> Option<i64> {
        if raw.trim().is_empty() {
            return None;
        }
        Some(self.id(label, raw))
    }

    pub fn number(&mut self, label: &'static str, raw: &str) -> f64 {
        let value = raw.trim();
        if value.is_empty() {
            self.errors.missing.push(label);
            return 0.0;
        }
        match value.parse::<f64>() {
            Ok(n) if n.is_finite() => n,
            _ => {
                self.errors.malformed.push(label);
                0.0
            }
        }
    }

    pub fn optional_number(&mut self, label: &'static str, raw: &str) -> Option<f64> {
        if raw.trim().is_empty() {
            return None;
        }
        Some(self.number(label, raw))
    }

    /// `YYYY-MM-DD` date, passed through as text.
    pub fn date(&mut self, label: &'static str, raw: &str) -> String {
        let value = self.required_text(label, raw);
        if !value.is_empty() && !is_iso_date(&value) {
            self.errors.malformed.push(label);
        }
        value
    }

    pub fn optional_date(&mut self, label: &'static str, raw: &str) -> Option<String> {
        if raw.trim().is_empty() {
            return None;
        }
        Some(self.date(label, raw))
    }

    /// One of a fixed set of values, compared case-insensitively and
    /// normalized to the canonical spelling.
    pub fn choice(&mut self, label: &'static str, raw: &str, allowed: &[&'static str]) -> String {
        let value = self.required_text(label, raw);
        if value.is_empty() {
            return value;
        }
        match allowed.iter().find(|candidate| candidate.eq_ignore_ascii_case(&value)) {
            Some(canonical) => (*canonical).to_owned(),
            None => {
                self.errors.malformed.push(label);
                value
            }
        }
    }

    /// Finish coercion, returning `payload` only when nothing failed.
    ///
    /// # Errors
    ///
    /// Returns the accumulated [`ValidationError`].
    pub fn finish<T>(self, payload: T) -> Result<T, ValidationError> {
        if self.errors.is_empty() { Ok(payload) } else { Err(self.errors) }
    }
}

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// A real calendar date in `YYYY-MM-DD` form.
fn is_iso_date(value: &str) -> bool {
    Date::parse(value, ISO_DATE).is_ok()
}

/// Render a stored number back into an input value.
#[must_use]
pub fn number_text(value: Option<f64>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}

/// Render a stored id back into a select value.
#[must_use]
pub fn id_text(value: Option<i64>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}
