#[cfg(test)]
#[path = "program_test.rs"]
mod program_test;

use serde::{Deserialize, Serialize};

use super::{opt_cell, ref_cell};
use crate::draft::{Coercer, Draft, FieldSpec, FormField, Input, ValidationError, id_text};
use crate::{Endpoint, Record, RefKind};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub school: Option<i64>,
}

impl Record for Program {
    const ENDPOINT: Endpoint = Endpoint {
        collection: "/api/academics/programs/",
        page: "/programs",
        title: "Programs",
    };
    const COLUMNS: &'static [&'static str] = &["Name", "School", "Description"];

    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn cells(&self) -> Vec<String> {
        vec![self.name.clone(), ref_cell(self.school), opt_cell(self.description.as_deref())]
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_deref().unwrap_or_default()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgramField {
    Name,
    Description,
    School,
}

impl FormField for ProgramField {
    fn spec(self) -> FieldSpec {
        match self {
            Self::Name => FieldSpec { name: "name", label: "Name", input: Input::Text },
            Self::Description => FieldSpec { name: "description", label: "Description", input: Input::Text },
            Self::School => FieldSpec { name: "school", label: "School", input: Input::Reference(RefKind::School) },
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgramDraft {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub school: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProgramPayload {
    pub name: String,
    pub description: Option<String>,
    pub school: Option<i64>,
}

impl Draft for ProgramDraft {
    type Field = ProgramField;
    type Record = Program;
    type Payload = ProgramPayload;

    const FIELDS: &'static [ProgramField] = &[ProgramField::Name, ProgramField::Description, ProgramField::School];
    const REQUIRED: &'static [ProgramField] = &[ProgramField::Name];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn value(&self, field: ProgramField) -> &str {
        match field {
            ProgramField::Name => &self.name,
            ProgramField::Description => &self.description,
            ProgramField::School => &self.school,
        }
    }

    fn set_field(&mut self, field: ProgramField, value: String) {
        match field {
            ProgramField::Name => self.name = value,
            ProgramField::Description => self.description = value,
            ProgramField::School => self.school = value,
        }
    }

    fn from_record(record: &Program) -> Self {
        Self {
            id: Some(record.id),
            name: record.name.clone(),
            description: record.description.clone().unwrap_or_default(),
            school: id_text(record.school),
        }
    }

    fn to_payload(&self) -> Result<ProgramPayload, ValidationError> {
        let mut c = Coercer::new();
        let payload = ProgramPayload {
            name: c.required_text("Name", &self.name),
            description: c.optional_text(&self.description),
            school: c.optional_id("School", &self.school),
        };
        c.finish(payload)
    }
}
