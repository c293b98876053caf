use serde::{Deserialize, Serialize};

use crate::domain::ContactId;

/// A contact record as the store returns it. A record with a missing text
/// field still deserializes; the field defaults to the empty string. A
/// missing `_id` is a hard wire error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "_id")]
    pub id: ContactId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub work: String,
    #[serde(default)]
    pub nick: String,
}

impl Contact {
    /// Copy of the editable fields, without the identifier. Used to seed an
    /// edit draft.
    pub fn fields(&self) -> ContactFields {
        ContactFields {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            work: self.work.clone(),
            nick: self.nick.clone(),
        }
    }
}

/// The editable field set. Doubles as the form draft held by the view
/// controller and as the JSON body for create/update requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub work: String,
    pub nick: String,
}

impl ContactFields {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_deserializes_store_shape() {
        let contact: Contact = serde_json::from_str(
            r#"{"_id":"65a1","name":"Ana","email":"a@x.com","phone":"123","work":"Eng","nick":"An"}"#,
        )
        .expect("valid contact");
        assert_eq!(contact.id, ContactId::from("65a1"));
        assert_eq!(contact.name, "Ana");
        assert_eq!(contact.nick, "An");
    }

    #[test]
    fn missing_text_fields_default_to_empty() {
        let contact: Contact =
            serde_json::from_str(r#"{"_id":"65a1","name":"Ana"}"#).expect("valid contact");
        assert_eq!(contact.email, "");
        assert_eq!(contact.phone, "");
        assert_eq!(contact.work, "");
        assert_eq!(contact.nick, "");
    }

    #[test]
    fn missing_id_is_rejected() {
        let result = serde_json::from_str::<Contact>(r#"{"name":"Ana"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn fields_round_trip_without_identifier() {
        let fields = ContactFields {
            name: "Ana".into(),
            email: "a@x.com".into(),
            phone: "123".into(),
            work: "Eng".into(),
            nick: "An".into(),
        };
        let json = serde_json::to_value(&fields).expect("serialize");
        assert!(json.get("_id").is_none());
        assert_eq!(json["name"], "Ana");
    }
}
