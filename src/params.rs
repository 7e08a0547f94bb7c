use crate::MomentoResult;
use crate::error::{FieldError, MomentoError, field_errors_from_report};
use crate::life_table::{AGE_CEILING, Gender};
use bon::Builder;
use garde::Validate;
use std::num::IntErrorKind;

/// Query string as received. Every field is optional text so that extraction itself never
/// rejects a request; all checking happens in the parameter structs below.
#[derive(Debug, Clone, Default)]
pub struct RawExpectancyQuery {
    pub age: Option<String>,
    pub gender: Option<String>,
}

impl RawExpectancyQuery {
    /// Collect decoded query pairs. A repeated key keeps its last value; unknown keys are
    /// ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut raw = Self::default();
        for (key, value) in pairs {
            match key.as_ref() {
                "age" => raw.age = Some(value.into()),
                "gender" => raw.gender = Some(value.into()),
                _ => {}
            }
        }
        raw
    }
}

/// Validated input for a table lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupRequest {
    pub age: u32,
    pub gender: Gender,
}

/// What the page endpoint should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    Lookup(LookupRequest),
    /// Age above [`AGE_CEILING`], answered without touching the table
    TooOld { age: i64 },
}

// =======================================
// API PARAMETER STRUCT
// =======================================
#[derive(Debug, Clone, Validate, Builder)]
#[garde(allow_unvalidated)]
pub struct ApiQueryParams {
    // Age - declared bounds of the JSON API, 0 to AGE_CEILING inclusive
    #[garde(range(min = 0, max = 122))]
    pub age: i64,

    pub gender: Gender,
}

impl ApiQueryParams {
    pub fn from_raw(raw: &RawExpectancyQuery) -> MomentoResult<Self> {
        let (age, gender) = parse_fields(raw)?;
        Ok(Self { age, gender })
    }

    pub fn into_request(self) -> MomentoResult<LookupRequest> {
        self.validate().map_err(report_to_error)?;
        lookup_request(self.age, self.gender)
    }
}

// =======================================
// PAGE PARAMETER STRUCT
// =======================================
#[derive(Debug, Clone, Validate, Builder)]
#[garde(allow_unvalidated)]
pub struct PageQueryParams {
    // Age - no upper bound here, ages past the ceiling get the too-old page
    #[garde(range(min = 0))]
    pub age: i64,

    pub gender: Gender,
}

impl PageQueryParams {
    pub fn from_raw(raw: &RawExpectancyQuery) -> MomentoResult<Self> {
        let (age, gender) = parse_fields(raw)?;
        Ok(Self { age, gender })
    }

    pub fn into_request(self) -> MomentoResult<PageRequest> {
        self.validate().map_err(report_to_error)?;

        if self.age > i64::from(AGE_CEILING) {
            return Ok(PageRequest::TooOld { age: self.age });
        }

        lookup_request(self.age, self.gender).map(PageRequest::Lookup)
    }
}

/// Parse and validate the JSON API query.
pub fn parse_api_query(raw: &RawExpectancyQuery) -> MomentoResult<LookupRequest> {
    ApiQueryParams::from_raw(raw)?.into_request()
}

/// Parse and validate the HTML page query.
pub fn parse_page_query(raw: &RawExpectancyQuery) -> MomentoResult<PageRequest> {
    PageQueryParams::from_raw(raw)?.into_request()
}

// =======================================
// PRIVATE FUNCTIONS
// =======================================

/// Parse both fields, reporting every missing or unreadable one together.
fn parse_fields(raw: &RawExpectancyQuery) -> MomentoResult<(i64, Gender)> {
    let mut errors: Vec<FieldError> = Vec::new();

    let age = match raw.age.as_deref() {
        None => {
            errors.push(FieldError::new("age", "field required"));
            None
        }
        Some(text) => match parse_age(text) {
            Some(age) => Some(age),
            None => {
                errors.push(FieldError::new(
                    "age",
                    format!("value '{text}' is not a valid integer"),
                ));
                None
            }
        },
    };

    let gender = match raw.gender.as_deref() {
        None => {
            errors.push(FieldError::new("gender", "field required"));
            None
        }
        Some(text) => match text.parse::<Gender>() {
            Ok(gender) => Some(gender),
            Err(message) => {
                errors.push(FieldError::new("gender", message));
                None
            }
        },
    };

    match (age, gender) {
        (Some(age), Some(gender)) => Ok((age, gender)),
        _ => Err(MomentoError::Validation(errors)),
    }
}

/// Integers too large for `i64` saturate, so they still land beyond the age ceiling.
fn parse_age(text: &str) -> Option<i64> {
    match text.trim().parse::<i64>() {
        Ok(age) => Some(age),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

fn lookup_request(age: i64, gender: Gender) -> MomentoResult<LookupRequest> {
    let age = u32::try_from(age).map_err(|_| {
        MomentoError::Validation(vec![FieldError::new(
            "age",
            format!("age {age} is outside 0..={AGE_CEILING}"),
        )])
    })?;
    Ok(LookupRequest { age, gender })
}

fn report_to_error(report: garde::Report) -> MomentoError {
    MomentoError::Validation(field_errors_from_report(&report))
}
