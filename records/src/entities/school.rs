#[cfg(test)]
#[path = "school_test.rs"]
mod school_test;

use serde::{Deserialize, Serialize};

use super::{opt_cell, ref_cell};
use crate::draft::{Coercer, Draft, FieldSpec, FormField, Input, ValidationError, id_text};
use crate::{Endpoint, Record, RefKind};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct School {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl Record for School {
    const ENDPOINT: Endpoint = Endpoint {
        collection: "/api/schools/",
        page: "/schools",
        title: "Schools",
    };
    const COLUMNS: &'static [&'static str] = &["Name", "Address", "Phone", "Email"];

    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            opt_cell(self.address.as_deref()),
            opt_cell(self.phone.as_deref()),
            opt_cell(self.email.as_deref()),
        ]
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.address.as_deref().unwrap_or_default()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchoolField {
    Name,
    Address,
    Phone,
    Email,
}

impl FormField for SchoolField {
    fn spec(self) -> FieldSpec {
        match self {
            Self::Name => FieldSpec { name: "name", label: "Name", input: Input::Text },
            Self::Address => FieldSpec { name: "address", label: "Address", input: Input::Text },
            Self::Phone => FieldSpec { name: "phone", label: "Phone", input: Input::Text },
            Self::Email => FieldSpec { name: "email", label: "Email", input: Input::Email },
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SchoolDraft {
    pub id: Option<i64>,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SchoolPayload {
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl Draft for SchoolDraft {
    type Field = SchoolField;
    type Record = School;
    type Payload = SchoolPayload;

    const FIELDS: &'static [SchoolField] = &[SchoolField::Name, SchoolField::Address, SchoolField::Phone, SchoolField::Email];
    const REQUIRED: &'static [SchoolField] = &[SchoolField::Name];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn value(&self, field: SchoolField) -> &str {
        match field {
            SchoolField::Name => &self.name,
            SchoolField::Address => &self.address,
            SchoolField::Phone => &self.phone,
            SchoolField::Email => &self.email,
        }
    }

    fn set_field(&mut self, field: SchoolField, value: String) {
        match field {
            SchoolField::Name => self.name = value,
            SchoolField::Address => self.address = value,
            SchoolField::Phone => self.phone = value,
            SchoolField::Email => self.email = value,
        }
    }

    fn from_record(record: &School) -> Self {
        Self {
            id: Some(record.id),
            name: record.name.clone(),
            address: record.address.clone().unwrap_or_default(),
            phone: record.phone.clone().unwrap_or_default(),
            email: record.email.clone().unwrap_or_default(),
        }
    }

    fn to_payload(&self) -> Result<SchoolPayload, ValidationError> {
        let mut c = Coercer::new();
        let payload = SchoolPayload {
            name: c.required_text("Name", &self.name),
            address: c.optional_text(&self.address),
            phone: c.optional_text(&self.phone),
            email: c.optional_text(&self.email),
        };
        c.finish(payload)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub school: Option<i64>,
    #[serde(default)]
    pub address: Option<String>,
}

impl Record for Branch {
    const ENDPOINT: Endpoint = Endpoint {
        collection: "/api/branches/",
        page: "/branches",
        title: "Branches",
    };
    const COLUMNS: &'static [&'static str] = &["Name", "School", "Address"];

    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn cells(&self) -> Vec<String> {
        vec![self.name.clone(), ref_cell(self.school), opt_cell(self.address.as_deref())]
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.address.as_deref().unwrap_or_default()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BranchField {
    Name,
    School,
    Address,
}

impl FormField for BranchField {
    fn spec(self) -> FieldSpec {
        match self {
            Self::Name => FieldSpec { name: "name", label: "Name", input: Input::Text },
            Self::School => FieldSpec { name: "school", label: "School", input: Input::Reference(RefKind::School) },
            Self::Address => FieldSpec { name: "address", label: "Address", input: Input::Text },
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BranchDraft {
    pub id: Option<i64>,
    pub name: String,
    pub school: String,
    pub address: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BranchPayload {
    pub name: String,
    pub school: i64,
    pub address: Option<String>,
}

impl Draft for BranchDraft {
    type Field = BranchField;
    type Record = Branch;
    type Payload = BranchPayload;

    const FIELDS: &'static [BranchField] = &[BranchField::Name, BranchField::School, BranchField::Address];
    const REQUIRED: &'static [BranchField] = &[BranchField::Name, BranchField::School];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn value(&self, field: BranchField) -> &str {
        match field {
            BranchField::Name => &self.name,
            BranchField::School => &self.school,
            BranchField::Address => &self.address,
        }
    }

    fn set_field(&mut self, field: BranchField, value: String) {
        match field {
            BranchField::Name => self.name = value,
            BranchField::School => self.school = value,
            BranchField::Address => self.address = value,
        }
    }

    fn from_record(record: &Branch) -> Self {
        Self {
            id: Some(record.id),
            name: record.name.clone(),
            school: id_text(record.school),
            address: record.address.clone().unwrap_or_default(),
        }
    }

    fn to_payload(&self) -> Result<BranchPayload, ValidationError> {
        let mut c = Coercer::new();
        let payload = BranchPayload {
            name: c.required_text("Name", &self.name),
            school: c.id("School", &self.school),
            address: c.optional_text(&self.address),
        };
        c.finish(payload)
    }
}
