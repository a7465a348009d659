use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{Error, Result};

/// Accepts strings, numbers and booleans as display text; `null` is absent.
fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

fn lenient_text_or_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(deserializer)?.unwrap_or_default())
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn pages_or_blank<'de, D>(deserializer: D) -> std::result::Result<Vec<Page>, D::Error>
where
    D: Deserializer<'de>,
{
    let pages = Vec::<Option<Page>>::deserialize(deserializer)?;
    Ok(pages.into_iter().map(Option::unwrap_or_default).collect())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PersonField {
    Name,
    Email,
    Phone,
    Department,
    Position,
    Id,
    StartDate,
    Manager,
}

impl PersonField {
    /// Fields shown in the person block of the first page.
    pub const FIRST_PAGE: [PersonField; 4] = [
        PersonField::Name,
        PersonField::Email,
        PersonField::Phone,
        PersonField::Department,
    ];

    /// Fields shown on every page after the first.
    pub const FOLLOWING_PAGES: [PersonField; 8] = [
        PersonField::Name,
        PersonField::Email,
        PersonField::Phone,
        PersonField::Department,
        PersonField::Position,
        PersonField::Id,
        PersonField::StartDate,
        PersonField::Manager,
    ];

    pub fn for_page(is_first_page: bool) -> &'static [PersonField] {
        if is_first_page {
            &Self::FIRST_PAGE
        } else {
            &Self::FOLLOWING_PAGES
        }
    }

    /// Payload key, also used as the printed label.
    pub fn key(self) -> &'static str {
        match self {
            PersonField::Name => "name",
            PersonField::Email => "email",
            PersonField::Phone => "phone",
            PersonField::Department => "department",
            PersonField::Position => "position",
            PersonField::Id => "id",
            PersonField::StartDate => "startDate",
            PersonField::Manager => "manager",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub department: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub manager: Option<String>,
}

impl Person {
    /// Value of a field; empty strings count as missing.
    pub fn get(&self, field: PersonField) -> Option<&str> {
        let value = match field {
            PersonField::Name => &self.name,
            PersonField::Email => &self.email,
            PersonField::Phone => &self.phone,
            PersonField::Department => &self.department,
            PersonField::Position => &self.position,
            PersonField::Id => &self.id,
            PersonField::StartDate => &self.start_date,
            PersonField::Manager => &self.manager,
        };
        value.as_deref().filter(|v| !v.is_empty())
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Document {
    #[serde(default, deserialize_with = "null_as_default")]
    pub person: Person,
    #[serde(deserialize_with = "pages_or_blank")]
    pub pages: Vec<Page>,
}

/// True when the payload carries a `pages` array, the minimal shape the
/// layout engine needs.
pub fn has_page_sequence(payload: &Value) -> bool {
    payload.get("pages").is_some_and(Value::is_array)
}

impl Document {
    pub fn from_value(payload: Value) -> Result<Self> {
        if !has_page_sequence(&payload) {
            return Err(Error::InvalidDocument(
                "payload has no `pages` sequence".into(),
            ));
        }
        Ok(serde_json::from_value(payload)?)
    }

    /// Like [`Document::from_value`], but substitutes the built-in sample
    /// document when the payload lacks a page sequence.
    pub fn from_value_or_sample(payload: Value) -> Result<Self> {
        if has_page_sequence(&payload) {
            Self::from_value(payload)
        } else {
            log::info!("Payload has no page sequence, rendering sample document");
            Ok(crate::sample::sample_document())
        }
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        Self::from_value_or_sample(serde_json::from_slice(bytes)?)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Page {
    #[serde(default, deserialize_with = "null_as_default")]
    pub sections: Vec<Section>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "RawSection")]
pub struct Section {
    pub title: String,
    pub body: SectionBody,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SectionBody {
    Table(Vec<TableRow>),
    Chart(ChartSpec),
    /// A kind the layout engine does not know; rendered as title only.
    Unsupported(String),
}

impl Section {
    pub fn kind(&self) -> &str {
        match &self.body {
            SectionBody::Table(_) => "table",
            SectionBody::Chart(_) => "chart",
            SectionBody::Unsupported(kind) => kind,
        }
    }
}

#[derive(Deserialize)]
struct RawSection {
    #[serde(default, deserialize_with = "lenient_text_or_empty")]
    title: String,
    #[serde(rename = "type", alias = "kind", default)]
    kind: String,
    #[serde(default)]
    data: Value,
}

impl TryFrom<RawSection> for Section {
    type Error = serde_json::Error;

    fn try_from(raw: RawSection) -> std::result::Result<Self, Self::Error> {
        let body = match raw.kind.as_str() {
            "table" if raw.data.is_null() => SectionBody::Table(Vec::new()),
            "table" => SectionBody::Table(serde_json::from_value(raw.data)?),
            "chart" if raw.data.is_null() => SectionBody::Chart(ChartSpec::default()),
            "chart" => SectionBody::Chart(serde_json::from_value(raw.data)?),
            _ => SectionBody::Unsupported(raw.kind),
        };
        Ok(Section {
            title: raw.title,
            body,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TableRow {
    #[serde(default, deserialize_with = "lenient_text_or_empty")]
    pub key: String,
    #[serde(default, deserialize_with = "lenient_text_or_empty")]
    pub value: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    #[serde(default, deserialize_with = "lenient_text_or_empty")]
    pub title: String,
    /// Category labels for index-keyed numeric points, one per index.
    #[serde(default)]
    pub labels: Option<Vec<String>>,
    #[serde(default)]
    pub datasets: Vec<Dataset>,
    #[serde(default)]
    pub x_axis_label: Option<String>,
    #[serde(default)]
    pub y_axis_label: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Dataset {
    #[serde(default, deserialize_with = "lenient_text_or_empty")]
    pub label: String,
    /// Opaque colour token handed to the drawing surface as-is.
    #[serde(default = "default_series_color")]
    pub color: String,
    #[serde(rename = "data", alias = "points", default)]
    pub points: Vec<DataPoint>,
}

fn default_series_color() -> String {
    "black".to_string()
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DataPoint {
    /// Bare value keyed by its index in the dataset.
    Value(f64),
    Dated {
        date: String,
        value: f64,
    },
    TimeOfDay {
        #[serde(rename = "timeOfDay", alias = "timeValue")]
        time: String,
    },
}
