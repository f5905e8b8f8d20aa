use serde::Serialize;
use serde_json::{to_value, Map, Value};

/// Value for the `HX-Trigger` response header.
///
/// A bare event name is sent verbatim. A payload map is serialized to JSON
/// with keys in insertion order, so the client sees events in the order they
/// were added. Pass either form to [`Hx::trigger_event`](crate::Hx::trigger_event):
///
/// ```
/// use actix_hx::TriggerEvent;
/// use serde_json::{json, Map};
///
/// let mut events = Map::new();
/// events.insert("itemSaved".to_string(), json!({ "id": 7 }));
/// let event = TriggerEvent::from(events);
/// ```
#[derive(Clone, Debug)]
pub enum TriggerEvent {
    /// A single event name with no data.
    Named(String),
    /// One or more events, each mapped to a JSON payload.
    Payload(Map<String, Value>),
}

impl TriggerEvent {
    /// Build a single-event payload from any serializable value.
    pub fn with_data<T>(name: impl Into<String>, data: T) -> serde_json::Result<Self>
    where
        T: Serialize,
    {
        let mut events = Map::new();
        events.insert(name.into(), to_value(data)?);
        Ok(TriggerEvent::Payload(events))
    }

    pub(crate) fn into_header_value(self) -> serde_json::Result<String> {
        match self {
            TriggerEvent::Named(name) => Ok(name),
            TriggerEvent::Payload(events) => serde_json::to_string(&events),
        }
    }
}

impl From<&str> for TriggerEvent {
    fn from(name: &str) -> Self {
        TriggerEvent::Named(name.to_string())
    }
}

impl From<String> for TriggerEvent {
    fn from(name: String) -> Self {
        TriggerEvent::Named(name)
    }
}

impl From<Map<String, Value>> for TriggerEvent {
    fn from(events: Map<String, Value>) -> Self {
        TriggerEvent::Payload(events)
    }
}

#[cfg(test)]
mod tests {
    use super::TriggerEvent;
    use serde_json::{json, Map};

    #[test]
    fn named_events_pass_through_verbatim() {
        let value = TriggerEvent::from("itemSaved").into_header_value().unwrap();
        assert_eq!(value, "itemSaved");
    }

    #[test]
    fn payload_maps_serialize_with_nested_values() {
        let mut events = Map::new();
        events.insert("event".to_string(), json!({ "some": "data" }));

        let value = TriggerEvent::from(events).into_header_value().unwrap();
        assert_eq!(value, r#"{"event":{"some":"data"}}"#);
    }

    #[test]
    fn payload_maps_keep_insertion_order() {
        let mut events = Map::new();
        events.insert("second".to_string(), json!(2));
        events.insert("first".to_string(), json!(1));

        let value = TriggerEvent::from(events).into_header_value().unwrap();
        assert_eq!(value, r#"{"second":2,"first":1}"#);
    }

    #[test]
    fn with_data_wraps_the_value_under_the_event_name() {
        let event = TriggerEvent::with_data("count", 3).unwrap();
        assert_eq!(event.into_header_value().unwrap(), r#"{"count":3}"#);
    }
}
