//! Lead form payloads.

use crate::error::{Result, SalonError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Envelope posted by the website forms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormRequest {
    #[serde(rename = "formType")]
    pub form_type: String,
    #[serde(default)]
    pub data: Map<String, Value>,
}

/// General contact request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

/// Offer to sell a car to the dealership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SellCarForm {
    pub brand: String,
    pub model: String,
    pub year: i64,
    pub mileage: i64,
    pub price: Option<i64>,
    pub condition: String,
    pub name: String,
    pub email: String,
}

/// A validated lead, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeadForm {
    Contact(ContactForm),
    SellCar(SellCarForm),
}

impl LeadForm {
    /// Validate the envelope and extract the type-specific fields.
    pub fn from_request(request: &FormRequest) -> Result<Self> {
        match request.form_type.as_str() {
            "contact" => ContactForm::from_data(&request.data).map(LeadForm::Contact),
            "sell-car" => SellCarForm::from_data(&request.data).map(LeadForm::SellCar),
            other => Err(SalonError::UnknownFormType(other.to_string())),
        }
    }

    /// Address replies should go to.
    pub fn reply_to(&self) -> &str {
        match self {
            LeadForm::Contact(form) => &form.email,
            LeadForm::SellCar(form) => &form.email,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            LeadForm::Contact(_) => "contact",
            LeadForm::SellCar(_) => "sell-car",
        }
    }
}

impl ContactForm {
    fn from_data(data: &Map<String, Value>) -> Result<Self> {
        let form = Self {
            name: get_string(data, &["name"]),
            email: get_string(data, &["email"]),
            phone: Some(get_string(data, &["phone"])).filter(|p| !p.is_empty()),
            subject: get_string(data, &["subject"]),
            message: get_string(data, &["message"]),
        };

        let missing: Vec<&'static str> = [
            ("name", form.name.is_empty()),
            ("email", form.email.is_empty()),
            ("subject", form.subject.is_empty()),
            ("message", form.message.is_empty()),
        ]
        .into_iter()
        .filter_map(|(field, empty)| empty.then_some(field))
        .collect();

        if missing.is_empty() {
            Ok(form)
        } else {
            Err(SalonError::MissingFields { fields: missing })
        }
    }
}

impl SellCarForm {
    fn from_data(data: &Map<String, Value>) -> Result<Self> {
        let form = Self {
            brand: get_string(data, &["brand", "marke"]),
            model: get_string(data, &["model", "modell"]),
            year: get_int(data, &["year", "baujahr"]),
            mileage: get_int(data, &["mileage", "kilometerstand"]),
            price: Some(get_int(data, &["price", "preis"])).filter(|p| *p > 0),
            condition: get_string(data, &["condition", "zustand"]),
            name: get_string(data, &["name"]),
            email: get_string(data, &["email"]),
        };

        let missing: Vec<&'static str> = [
            ("brand", form.brand.is_empty()),
            ("model", form.model.is_empty()),
            ("year", form.year == 0),
            ("mileage", form.mileage == 0),
            ("condition", form.condition.is_empty()),
            ("name", form.name.is_empty()),
            ("email", form.email.is_empty()),
        ]
        .into_iter()
        .filter_map(|(field, empty)| empty.then_some(field))
        .collect();

        if missing.is_empty() {
            Ok(form)
        } else {
            Err(SalonError::MissingFields { fields: missing })
        }
    }
}

/// First string value found under any of `keys`, trimmed. Non-strings count as absent.
fn get_string(data: &Map<String, Value>, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|key| data.get(*key).and_then(Value::as_str))
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// First numeric value found under any of `keys`; floats are truncated.
fn get_int(data: &Map<String, Value>, keys: &[&str]) -> i64 {
    keys.iter()
        .find_map(|key| {
            data.get(*key)
                .and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f as i64)))
        })
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(value: Value) -> FormRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_contact_form() {
        let req = request(json!({
            "formType": "contact",
            "data": {
                "name": "Anna Muster",
                "email": "anna@example.ch",
                "subject": "beratung",
                "message": "Hallo"
            }
        }));
        let lead = LeadForm::from_request(&req).unwrap();
        assert_eq!(lead.kind(), "contact");
        assert_eq!(lead.reply_to(), "anna@example.ch");
        match lead {
            LeadForm::Contact(form) => {
                assert_eq!(form.name, "Anna Muster");
                assert_eq!(form.phone, None);
            }
            other => panic!("unexpected form {:?}", other),
        }
    }

    #[test]
    fn test_contact_missing_fields() {
        let req = request(json!({
            "formType": "contact",
            "data": { "name": "Anna", "phone": "044 000 00 00" }
        }));
        match LeadForm::from_request(&req) {
            Err(SalonError::MissingFields { fields }) => {
                assert_eq!(fields, vec!["email", "subject", "message"]);
            }
            other => panic!("expected missing fields, got {:?}", other),
        }
    }

    #[test]
    fn test_non_string_counts_as_missing() {
        let req = request(json!({
            "formType": "contact",
            "data": { "name": 42, "email": "a@b.ch", "subject": "x", "message": "y" }
        }));
        assert!(matches!(
            LeadForm::from_request(&req),
            Err(SalonError::MissingFields { .. })
        ));
    }

    #[test]
    fn test_sell_car_form_english_keys() {
        let req = request(json!({
            "formType": "sell-car",
            "data": {
                "brand": "Audi",
                "model": "A4",
                "year": 2019,
                "mileage": 80000.7,
                "condition": "gut",
                "name": "Peter",
                "email": "peter@example.ch"
            }
        }));
        match LeadForm::from_request(&req).unwrap() {
            LeadForm::SellCar(form) => {
                assert_eq!(form.year, 2019);
                assert_eq!(form.mileage, 80000);
                assert_eq!(form.price, None);
            }
            other => panic!("unexpected form {:?}", other),
        }
    }

    #[test]
    fn test_sell_car_form_german_keys() {
        let req = request(json!({
            "formType": "sell-car",
            "data": {
                "marke": "VW",
                "modell": "Golf",
                "baujahr": 2018,
                "kilometerstand": 90000,
                "preis": 15000,
                "zustand": "sehr-gut",
                "name": "Eva",
                "email": "eva@example.ch"
            }
        }));
        match LeadForm::from_request(&req).unwrap() {
            LeadForm::SellCar(form) => {
                assert_eq!(form.brand, "VW");
                assert_eq!(form.price, Some(15000));
                assert_eq!(form.condition, "sehr-gut");
            }
            other => panic!("unexpected form {:?}", other),
        }
    }

    #[test]
    fn test_sell_car_zero_year_is_missing() {
        let req = request(json!({
            "formType": "sell-car",
            "data": {
                "brand": "VW", "model": "Golf", "year": 0, "mileage": "90000",
                "condition": "gut", "name": "Eva", "email": "eva@example.ch"
            }
        }));
        match LeadForm::from_request(&req) {
            Err(SalonError::MissingFields { fields }) => assert_eq!(fields, vec!["year", "mileage"]),
            other => panic!("expected missing fields, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_form_type() {
        let req = request(json!({ "formType": "newsletter", "data": {} }));
        assert!(matches!(
            LeadForm::from_request(&req),
            Err(SalonError::UnknownFormType(t)) if t == "newsletter"
        ));
    }
}
