use garde::Validate;
use kernel::model::{
    event::{event::CreateEvent, Event},
    id::EventId,
};
use serde::{Deserialize, Serialize};

// Missing fields deserialize to their zero value and fail validation, so a
// partial payload is a 400 rather than a deserialization rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[serde(default)]
    #[garde(length(min = 1))]
    pub title: String,
    #[serde(default)]
    #[garde(length(min = 1))]
    pub date: String,
    #[serde(default)]
    #[garde(range(min = 1))]
    pub max_participants: i32,
}

impl From<CreateEventRequest> for CreateEvent {
    fn from(value: CreateEventRequest) -> Self {
        let CreateEventRequest {
            title,
            date,
            max_participants,
        } = value;
        CreateEvent {
            title,
            date,
            max_participants,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub id: EventId,
    pub title: String,
    pub date: String,
    pub max_participants: i32,
}

impl From<Event> for EventResponse {
    fn from(value: Event) -> Self {
        let Event {
            id,
            title,
            date,
            max_participants,
        } = value;
        Self {
            id,
            title,
            date,
            max_participants,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(title: &str, date: &str, max_participants: i32) -> CreateEventRequest {
        CreateEventRequest {
            title: title.into(),
            date: date.into(),
            max_participants,
        }
    }

    #[test]
    fn accepts_a_well_formed_event() {
        assert!(request("RustConf", "2025-09-10", 300).validate(&()).is_ok());
    }

    #[test]
    fn rejects_a_non_positive_cap() {
        assert!(request("RustConf", "2025-09-10", 0).validate(&()).is_err());
        assert!(request("RustConf", "2025-09-10", -3).validate(&()).is_err());
    }

    #[test]
    fn rejects_blank_title_and_date() {
        assert!(request("", "2025-09-10", 10).validate(&()).is_err());
        assert!(request("RustConf", "", 10).validate(&()).is_err());
    }
}
