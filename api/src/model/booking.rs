use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    booking::{event::BookingRequest, Participant},
    id::{EventId, UserId},
};
use serde::{Deserialize, Serialize};

// References are raw integers on the wire; zero (or absent, via the serde
// default) means the field is missing and fails validation.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBookingRequest {
    #[serde(default)]
    #[garde(range(min = 1))]
    pub event_id: i64,
    #[serde(default)]
    #[garde(range(min = 1))]
    pub user_id: i64,
}

impl From<CreateBookingRequest> for BookingRequest {
    fn from(value: CreateBookingRequest) -> Self {
        let CreateBookingRequest { event_id, user_id } = value;
        BookingRequest::new(EventId::new(event_id), UserId::new(user_id))
    }
}

/// 202 body: the request was queued, nothing has been persisted yet.
#[derive(Debug, Serialize)]
pub struct BookingAcceptedResponse {
    pub status: String,
}

impl Default for BookingAcceptedResponse {
    fn default() -> Self {
        Self {
            status: "booking request accepted".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ParticipantResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub booked_at: DateTime<Utc>,
}

impl From<Participant> for ParticipantResponse {
    fn from(value: Participant) -> Self {
        let Participant {
            user_id,
            name,
            email,
            booked_at,
        } = value;
        Self {
            id: user_id,
            name,
            email,
            booked_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_references() {
        let request = CreateBookingRequest {
            event_id: 0,
            user_id: 3,
        };
        assert!(request.validate(&()).is_err());

        let request = CreateBookingRequest {
            event_id: 3,
            user_id: 0,
        };
        assert!(request.validate(&()).is_err());
    }

    #[test]
    fn a_missing_field_fails_validation_instead_of_deserialization() {
        let request: CreateBookingRequest = serde_json::from_str(r#"{"event_id": 5}"#).unwrap();
        assert_eq!(request.user_id, 0);
        assert!(request.validate(&()).is_err());
    }

    #[test]
    fn participant_uses_the_wire_field_names() {
        let participant = Participant {
            user_id: UserId::new(7),
            name: "Alice".into(),
            email: "alice@example.com".into(),
            booked_at: Utc::now(),
        };
        let json = serde_json::to_value(ParticipantResponse::from(participant)).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["name"], "Alice");
        assert!(json.get("booked_at").is_some());
    }
}
