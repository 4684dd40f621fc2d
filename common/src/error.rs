use std::fmt::{Display, Formatter};

/// Error payload as returned by the backend.
///
/// The backend reports either a plain message (`{"detail": "CVE already exists"}`) or, for
/// request validation failures, a list of field errors.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ErrorInformation {
    pub detail: ErrorDetail,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Validation(Vec<ValidationError>),
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ValidationError {
    #[serde(default)]
    pub loc: Vec<Location>,
    pub msg: String,
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub r#type: String,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Location {
    Index(u64),
    Field(String),
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Field(field) => f.write_str(field),
        }
    }
}

impl Display for ErrorInformation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.detail {
            ErrorDetail::Message(message) => f.write_str(message),
            ErrorDetail::Validation(errors) => {
                for (n, error) in errors.iter().enumerate() {
                    if n > 0 {
                        f.write_str("; ")?;
                    }
                    let loc = error.loc.iter().map(|l| l.to_string()).collect::<Vec<_>>();
                    write!(f, "{}: {}", loc.join("."), error.msg)?;
                }
                Ok(())
            }
        }
    }
}
