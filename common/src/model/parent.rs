use serde::{Deserialize, Deserializer, Serialize};

/// The columns a parent CSV row is validated against.
///
/// The order of [`ParentField::ALL`] is the column order of every parent
/// table rendered by the front-end (error table and outcome tables alike).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParentField {
    Email,
    GivenName,
    FamilyName,
    PhoneNumber,
}

impl ParentField {
    pub const ALL: [ParentField; 4] = [
        ParentField::Email,
        ParentField::GivenName,
        ParentField::FamilyName,
        ParentField::PhoneNumber,
    ];

    /// Column name as it appears in the CSV header and in JSON payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            ParentField::Email => "email",
            ParentField::GivenName => "given_name",
            ParentField::FamilyName => "family_name",
            ParentField::PhoneNumber => "phone_number",
        }
    }
}

/// A parent record as returned by the backend after a successful insert,
/// update or delete. Fields the backend adds (ids, timestamps) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parent {
    #[serde(default, deserialize_with = "scalar_or_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "scalar_or_empty")]
    pub given_name: String,
    #[serde(default, deserialize_with = "scalar_or_empty")]
    pub family_name: String,
    #[serde(default, deserialize_with = "scalar_or_empty")]
    pub phone_number: String,
}

impl Parent {
    pub fn get(&self, field: ParentField) -> &str {
        match field {
            ParentField::Email => &self.email,
            ParentField::GivenName => &self.given_name,
            ParentField::FamilyName => &self.family_name,
            ParentField::PhoneNumber => &self.phone_number,
        }
    }
}

/// Per-column values of one CSV row, any of which may be missing.
///
/// Used twice by a `RowError`: once for the submitted values and once for
/// the validation messages attached to invalid columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentColumns {
    #[serde(default, deserialize_with = "scalar_opt", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "scalar_opt", skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(default, deserialize_with = "scalar_opt", skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(default, deserialize_with = "scalar_opt", skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl ParentColumns {
    pub fn get(&self, field: ParentField) -> Option<&str> {
        match field {
            ParentField::Email => self.email.as_deref(),
            ParentField::GivenName => self.given_name.as_deref(),
            ParentField::FamilyName => self.family_name.as_deref(),
            ParentField::PhoneNumber => self.phone_number.as_deref(),
        }
    }

    pub fn set(&mut self, field: ParentField, value: impl Into<String>) {
        let slot = match field {
            ParentField::Email => &mut self.email,
            ParentField::GivenName => &mut self.given_name,
            ParentField::FamilyName => &mut self.family_name,
            ParentField::PhoneNumber => &mut self.phone_number,
        };
        *slot = Some(value.into());
    }

    pub fn is_empty(&self) -> bool {
        ParentField::ALL.iter().all(|f| self.get(*f).is_none())
    }
}

/// A CSV cell as the backend echoes it. Numbers and booleans show up when the
/// backend coerces a column before validating it; they are rendered as text.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Scalar::Text(s) => s,
            Scalar::Integer(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

fn scalar_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(Scalar::into_text))
}

fn scalar_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_opt(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_accept_scalars_and_null() {
        let cols: ParentColumns = serde_json::from_str(
            r#"{"email":"a@x.com","phone_number":998901234567,"given_name":null}"#,
        )
        .unwrap();

        assert_eq!(cols.get(ParentField::Email), Some("a@x.com"));
        assert_eq!(cols.get(ParentField::PhoneNumber), Some("998901234567"));
        assert_eq!(cols.get(ParentField::GivenName), None);
        assert_eq!(cols.get(ParentField::FamilyName), None);
    }

    #[test]
    fn columns_reject_nested_values() {
        let res = serde_json::from_str::<ParentColumns>(r#"{"email":{"value":"a@x.com"}}"#);
        assert!(res.is_err());
    }

    #[test]
    fn parent_ignores_backend_fields() {
        let parent: Parent = serde_json::from_str(
            r#"{"id":7,"email":"b@x.com","given_name":"Aziz","family_name":"Karimov","phone_number":"+998","created_at":"2024-06-01"}"#,
        )
        .unwrap();

        assert_eq!(parent.get(ParentField::GivenName), "Aziz");
        assert_eq!(parent.get(ParentField::PhoneNumber), "+998");
    }

    #[test]
    fn field_names_match_csv_header() {
        let names: Vec<_> = ParentField::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(names, ["email", "given_name", "family_name", "phone_number"]);
    }
}
