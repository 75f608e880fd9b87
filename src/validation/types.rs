//! Validated request parameter records.
//!
//! Nothing downstream of [`validate_recommend`](super::validate_recommend)
//! or [`validate_score`](super::validate_score) touches raw JSON maps; the
//! validators produce these tagged records exactly once at the boundary.

use serde::Serialize;

/// Default recommendation count when `max_recs` is omitted.
pub const DEFAULT_MAX_RECS: i64 = 10;

/// The closed gender set, serialized as its single-letter names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Gender {
    M,
    F,
    O,
}

impl Gender {
    /// Valid names in alphabetical order (as enumerated in error messages).
    pub const ALL: [&'static str; 3] = ["F", "M", "O"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "M" => Some(Self::M),
            "F" => Some(Self::F),
            "O" => Some(Self::O),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::M => "M",
            Self::F => "F",
            Self::O => "O",
        }
    }
}

/// The closed 21-value occupation set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Occupation {
    Administrator,
    Artist,
    Doctor,
    Educator,
    Engineer,
    Entertainment,
    Executive,
    Healthcare,
    Homemaker,
    Lawyer,
    Librarian,
    Marketing,
    None,
    Other,
    Programmer,
    Retired,
    Salesman,
    Scientist,
    Student,
    Technician,
    Writer,
}

impl Occupation {
    /// Valid names in alphabetical order (as enumerated in error messages).
    pub const ALL: [&'static str; 21] = [
        "administrator",
        "artist",
        "doctor",
        "educator",
        "engineer",
        "entertainment",
        "executive",
        "healthcare",
        "homemaker",
        "lawyer",
        "librarian",
        "marketing",
        "none",
        "other",
        "programmer",
        "retired",
        "salesman",
        "scientist",
        "student",
        "technician",
        "writer",
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "administrator" => Some(Self::Administrator),
            "artist" => Some(Self::Artist),
            "doctor" => Some(Self::Doctor),
            "educator" => Some(Self::Educator),
            "engineer" => Some(Self::Engineer),
            "entertainment" => Some(Self::Entertainment),
            "executive" => Some(Self::Executive),
            "healthcare" => Some(Self::Healthcare),
            "homemaker" => Some(Self::Homemaker),
            "lawyer" => Some(Self::Lawyer),
            "librarian" => Some(Self::Librarian),
            "marketing" => Some(Self::Marketing),
            "none" => Some(Self::None),
            "other" => Some(Self::Other),
            "programmer" => Some(Self::Programmer),
            "retired" => Some(Self::Retired),
            "salesman" => Some(Self::Salesman),
            "scientist" => Some(Self::Scientist),
            "student" => Some(Self::Student),
            "technician" => Some(Self::Technician),
            "writer" => Some(Self::Writer),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Administrator => "administrator",
            Self::Artist => "artist",
            Self::Doctor => "doctor",
            Self::Educator => "educator",
            Self::Engineer => "engineer",
            Self::Entertainment => "entertainment",
            Self::Executive => "executive",
            Self::Healthcare => "healthcare",
            Self::Homemaker => "homemaker",
            Self::Lawyer => "lawyer",
            Self::Librarian => "librarian",
            Self::Marketing => "marketing",
            Self::None => "none",
            Self::Other => "other",
            Self::Programmer => "programmer",
            Self::Retired => "retired",
            Self::Salesman => "salesman",
            Self::Scientist => "scientist",
            Self::Student => "student",
            Self::Technician => "technician",
            Self::Writer => "writer",
        }
    }
}

/// Validated login payload.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginParams {
    /// The submitted password candidate. Any JSON type is accepted here; a
    /// non-string value is rendered to text and simply won't match the hash.
    pub session_password: String,
}

/// Validated recommend payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendParams {
    pub age: u64,
    pub gender: Gender,
    pub occupation: Occupation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_recs: Option<i64>,
}

impl RecommendParams {
    /// The requested recommendation count, defaulting to
    /// [`DEFAULT_MAX_RECS`].
    pub fn max_recs_or_default(&self) -> i64 {
        self.max_recs.unwrap_or(DEFAULT_MAX_RECS)
    }
}

/// Validated score-submission payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreParams {
    /// Correlation id of the ranking this feedback refers to (shape-checked
    /// only, see the audit module).
    pub id: String,
    pub movie: String,
    pub score: f64,
}
