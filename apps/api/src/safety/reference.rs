//! Static reference tables for Chittagong. Process-wide, immutable, safe for
//! unsynchronized concurrent reads.

use serde::Serialize;
use serde_json::{json, Value};

/// Emergency contact directory, name → dialable number.
pub const EMERGENCY_CONTACTS: &[(&str, &str)] = &[
    ("Police Emergency", "999"),
    ("Women Helpline", "109"),
    ("Ambulance", "199"),
    ("Legal Aid", "16430"),
    ("Crisis Center", "10921"),
    ("Chittagong Police", "031-619101"),
];

/// Chittagong areas grouped by risk tier.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AreaTiers {
    pub safe: &'static [&'static str],
    pub moderate: &'static [&'static str],
    pub caution_night: &'static [&'static str],
}

pub const CHITTAGONG_AREAS: AreaTiers = AreaTiers {
    safe: &["Agrabad", "GEC Circle", "Nasirabad", "Panchlaish", "CDA Avenue"],
    moderate: &["New Market", "Chawkbazar", "Sadarghat", "Reazuddin Bazar"],
    caution_night: &["Halishahar", "Bahaddarhat", "Katalganj"],
};

/// Renders the contact directory as a JSON object keyed by contact name.
pub fn contacts_json() -> Value {
    Value::Object(
        EMERGENCY_CONTACTS
            .iter()
            .map(|(name, number)| ((*name).to_string(), json!(number)))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_six_contacts() {
        assert_eq!(EMERGENCY_CONTACTS.len(), 6);
    }

    #[test]
    fn test_contacts_json_keeps_every_entry() {
        let contacts = contacts_json();
        let map = contacts.as_object().unwrap();
        assert_eq!(map.len(), 6);
        assert_eq!(map["Police Emergency"], "999");
        assert_eq!(map["Women Helpline"], "109");
        assert_eq!(map["Chittagong Police"], "031-619101");
    }

    #[test]
    fn test_three_area_tiers() {
        assert_eq!(CHITTAGONG_AREAS.safe.len(), 5);
        assert_eq!(CHITTAGONG_AREAS.moderate.len(), 4);
        assert_eq!(CHITTAGONG_AREAS.caution_night.len(), 3);
    }

    #[test]
    fn test_area_tiers_serialize_under_tier_names() {
        let v = serde_json::to_value(CHITTAGONG_AREAS).unwrap();
        assert_eq!(v["safe"][0], "Agrabad");
        assert_eq!(v["moderate"][0], "New Market");
        assert_eq!(v["caution_night"][2], "Katalganj");
    }
}
