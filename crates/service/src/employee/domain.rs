use std::fmt;

use serde::{Deserialize, Serialize};

/// A stored employee record. `id` is assigned by the store.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

/// Full record body used by create and replace.
/// Missing fields decode to their zero value; a client `id` is ignored.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EmployeeInput {
    pub name: String,
    pub age: i64,
}

/// Partial update body. `None` means the field was absent (or `null`).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EmployeePatch {
    pub name: Option<String>,
    pub age: Option<i64>,
}

impl EmployeePatch {
    pub fn apply(self, target: &mut Employee) {
        if let Some(name) = self.name { target.name = name; }
        if let Some(age) = self.age { target.age = age; }
    }
}

/// What a lookup searched for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LookupKey {
    Id(i64),
    Name(String),
}

impl LookupKey {
    /// Interpret a path token: a positive base-10 integer is an id,
    /// anything else (including "0", negatives and overflow) is a name.
    pub fn parse(token: &str) -> Self {
        match token.parse::<i64>() {
            Ok(id) if id > 0 => LookupKey::Id(id),
            _ => LookupKey::Name(token.to_string()),
        }
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupKey::Id(id) => write!(f, "id {id}"),
            LookupKey::Name(name) => write!(f, "name {name}"),
        }
    }
}
