//! Inbound JSON validation.
//!
//! Every entity declares its field table through [`Schema`]. [`Payload`] reads
//! the body, checks it against that table and only then deserializes, so a
//! rejected body reports every bad field at once instead of serde's first
//! failure.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use rocket::data::{self, Data, FromData};
use rocket::http::Status;
use rocket::serde::json::{self, Json};
use rocket::Request;
use serde::de::{self as de, DeserializeOwned};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::error::{reject, ApiError, FieldError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldKind {
    String,
    Integer,
    NonNegativeInteger,
    Boolean,
    /// RFC 3339 string, or a zone-less ISO 8601 date-time read as UTC.
    Timestamp,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl Field {
    pub(crate) const fn required(name: &'static str, kind: FieldKind) -> Field {
        Field {
            name,
            kind,
            required: true,
        }
    }

    pub(crate) const fn optional(name: &'static str, kind: FieldKind) -> Field {
        Field {
            name,
            kind,
            required: false,
        }
    }
}

pub(crate) trait Schema {
    const ENTITY: &'static str;
    const FIELDS: &'static [Field];
}

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses an inbound timestamp. Strings without an offset are UTC.
pub(crate) fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Some(t.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// `deserialize_with` helper for optional timestamp fields, accepting the
/// same forms as [`FieldKind::Timestamp`].
pub(crate) fn optional_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|s| {
            parse_timestamp(&s)
                .ok_or_else(|| de::Error::custom(format!("invalid timestamp `{}`", s)))
        })
        .transpose()
}

fn check_kind(kind: FieldKind, value: &Value) -> Result<(), &'static str> {
    let as_i32 = || value.as_i64().and_then(|v| i32::try_from(v).ok());

    match kind {
        FieldKind::String if value.is_string() => Ok(()),
        FieldKind::String => Err("expected a string"),
        FieldKind::Boolean if value.is_boolean() => Ok(()),
        FieldKind::Boolean => Err("expected a boolean"),
        FieldKind::Integer => as_i32().map(|_| ()).ok_or("expected a 32-bit integer"),
        FieldKind::NonNegativeInteger => match as_i32() {
            Some(v) if v >= 0 => Ok(()),
            Some(_) => Err("must not be negative"),
            None => Err("expected a 32-bit integer"),
        },
        FieldKind::Timestamp => value
            .as_str()
            .and_then(parse_timestamp)
            .map(|_| ())
            .ok_or("expected an ISO 8601 timestamp"),
    }
}

/// Checks `body` against `fields`, collecting every violation.
pub(crate) fn validate(fields: &[Field], body: &Value) -> Result<(), Vec<FieldError>> {
    let Some(object) = body.as_object() else {
        return Err(vec![FieldError::new("body", "expected a JSON object")]);
    };

    let errors = fields
        .iter()
        .filter_map(|field| check_field(field, object))
        .collect::<Vec<_>>();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_field(field: &Field, object: &Map<String, Value>) -> Option<FieldError> {
    match object.get(field.name) {
        None | Some(Value::Null) if field.required => {
            Some(FieldError::new(field.name, "field required"))
        }
        None | Some(Value::Null) => None,
        Some(value) => check_kind(field.kind, value)
            .err()
            .map(|message| FieldError::new(field.name, message)),
    }
}

/// A request body of entity `T` that passed validation.
#[derive(Debug)]
pub(crate) struct Payload<T>(pub T);

impl<T> Payload<T> {
    pub(crate) fn into_inner(self) -> T {
        self.0
    }
}

#[rocket::async_trait]
impl<'r, T: Schema + DeserializeOwned> FromData<'r> for Payload<T> {
    type Error = ApiError;

    async fn from_data(req: &'r Request<'_>, data: Data<'r>) -> data::Outcome<'r, Self> {
        let body = match Json::<Value>::from_data(req, data).await {
            data::Outcome::Success(Json(body)) => body,
            data::Outcome::Forward(f) => return data::Outcome::Forward(f),
            data::Outcome::Error((status, err)) => {
                let detail = match err {
                    json::Error::Io(_) => format!("couldn't read {} payload", T::ENTITY),
                    json::Error::Parse(_, err) => {
                        format!("malformed {} payload: {}", T::ENTITY, err)
                    }
                };
                return data::Outcome::Error(reject(
                    req,
                    status,
                    ApiError::for_entity(T::ENTITY, detail),
                ));
            }
        };

        if let Err(errors) = validate(T::FIELDS, &body) {
            let err = ApiError::for_entity(T::ENTITY, format!("invalid {} payload", T::ENTITY))
                .with_errors(errors);
            return data::Outcome::Error(reject(req, Status::UnprocessableEntity, err));
        }

        match serde_json::from_value(body) {
            Ok(value) => data::Outcome::Success(Payload(value)),
            Err(err) => data::Outcome::Error(reject(
                req,
                Status::UnprocessableEntity,
                ApiError::for_entity(T::ENTITY, format!("invalid {} payload: {}", T::ENTITY, err)),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    const FIELDS: &[Field] = &[
        Field::required("name", FieldKind::String),
        Field::required("owner_id", FieldKind::Integer),
        Field::required("quantity", FieldKind::NonNegativeInteger),
        Field::required("active", FieldKind::Boolean),
        Field::optional("time", FieldKind::Timestamp),
    ];

    fn valid() -> Value {
        json!({
            "name": "rice",
            "owner_id": 4,
            "quantity": 0,
            "active": true,
        })
    }

    fn failed_fields(body: &Value) -> Vec<String> {
        validate(FIELDS, body)
            .unwrap_err()
            .into_iter()
            .map(|e| e.field)
            .collect()
    }

    #[test]
    fn accepts_complete_body_without_optional_fields() {
        assert_eq!(validate(FIELDS, &valid()), Ok(()));
    }

    #[test]
    fn ignores_unknown_fields_and_client_ids() {
        let mut body = valid();
        body["id"] = json!(99);
        body["colour"] = json!("blue");
        assert_eq!(validate(FIELDS, &body), Ok(()));
    }

    #[test]
    fn reports_every_missing_field() {
        assert_eq!(
            failed_fields(&json!({ "name": "rice" })),
            vec!["owner_id", "quantity", "active"]
        );
    }

    #[test]
    fn null_counts_as_missing() {
        let mut body = valid();
        body["name"] = Value::Null;
        body["time"] = Value::Null;
        assert_eq!(failed_fields(&body), vec!["name"]);
    }

    #[rstest]
    #[case("name", json!(12))]
    #[case("owner_id", json!("4"))]
    #[case("owner_id", json!(1.5))]
    #[case("owner_id", json!(i64::from(i32::MAX) + 1))]
    #[case("quantity", json!(-1))]
    #[case("active", json!("yes"))]
    #[case("time", json!("yesterday"))]
    #[case("time", json!(1_700_000_000))]
    #[case("time", json!("2023-06-20"))]
    #[case("time", json!("2023-06-20T25:00:00"))]
    fn rejects_wrong_kinds(#[case] field: &str, #[case] value: Value) {
        let mut body = valid();
        body[field] = value;
        assert_eq!(failed_fields(&body), vec![field]);
    }

    #[test]
    fn accepts_rfc3339_with_offset() {
        let mut body = valid();
        body["time"] = json!("2023-06-20T18:30:00+02:00");
        assert_eq!(validate(FIELDS, &body), Ok(()));
    }

    #[rstest]
    #[case("2023-06-20T12:00:00Z", "2023-06-20T12:00:00Z")]
    #[case("2023-06-20T14:00:00+02:00", "2023-06-20T12:00:00Z")]
    #[case("2023-06-20T12:00:00", "2023-06-20T12:00:00Z")]
    #[case("2023-06-20 12:00:00", "2023-06-20T12:00:00Z")]
    #[case("2023-06-20T12:00:00.250", "2023-06-20T12:00:00.250Z")]
    fn zone_less_timestamps_are_utc(#[case] given: &str, #[case] expected: &str) {
        let expected = DateTime::parse_from_rfc3339(expected).unwrap();
        assert_eq!(parse_timestamp(given), Some(expected.with_timezone(&Utc)));

        let mut body = valid();
        body["time"] = json!(given);
        assert_eq!(validate(FIELDS, &body), Ok(()));
    }

    #[derive(Deserialize)]
    struct Stamp {
        #[serde(default, deserialize_with = "optional_timestamp")]
        time: Option<DateTime<Utc>>,
    }

    #[test]
    fn optional_timestamp_field_deserializes_every_accepted_form() {
        let naive: Stamp =
            serde_json::from_value(json!({ "time": "2023-06-20T12:00:00" })).unwrap();
        let zoned: Stamp =
            serde_json::from_value(json!({ "time": "2023-06-20T12:00:00Z" })).unwrap();
        assert!(naive.time.is_some());
        assert_eq!(naive.time, zoned.time);

        let absent: Stamp = serde_json::from_value(json!({})).unwrap();
        let null: Stamp = serde_json::from_value(json!({ "time": null })).unwrap();
        assert_eq!(absent.time, None);
        assert_eq!(null.time, None);

        assert!(serde_json::from_value::<Stamp>(json!({ "time": "noon" })).is_err());
    }

    #[test]
    fn negative_quantity_has_its_own_message() {
        let mut body = valid();
        body["quantity"] = json!(-3);
        let errors = validate(FIELDS, &body).unwrap_err();
        assert_eq!(errors[0].message, "must not be negative");
    }

    #[test]
    fn non_object_body_is_rejected() {
        assert_eq!(failed_fields(&json!([1, 2])), vec!["body"]);
    }
}
