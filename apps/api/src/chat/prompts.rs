//! System-prompt composition: a shared base block embedding the current time
//! and the emergency numbers, plus one static focus block per feature.
//! Fully reproducible given the same clock reading.

use chrono::{DateTime, Local};

use crate::safety::status::format_timestamp;

/// Client-supplied tag selecting which domain prompt the model receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Assistant,
    Legal,
    Mental,
    Route,
    Sos,
}

impl Feature {
    /// Parses a client-supplied tag. Matching is exact; anything else
    /// (including the empty string) deliberately selects the general
    /// assistant rather than erroring.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "legal" => Feature::Legal,
            "mental" => Feature::Mental,
            "route" => Feature::Route,
            "sos" => Feature::Sos,
            _ => Feature::Assistant,
        }
    }
}

const FOCUS_LEGAL: &str = r#"
FOCUS: Legal Rights & Harassment Laws
Key Bangladesh Laws:
1. Sexual Harassment at Workplace Act 2009
   - Penalties: Up to 5 years + BDT 50,000 fine
2. Women and Children Repression Prevention Act 2000
   - Death penalty or life imprisonment for serious offenses
3. Domestic Violence Prevention Act 2010
   - Protection orders, residence orders, monetary relief
4. Dowry Prohibition Act 1980
   - Up to 5 years + BDT 1,00,000 fine
How to Report:
- Police Station: File FIR
- One-Stop Crisis Center: Chittagong Medical College Hospital
- Legal Aid: Call 16430 (free)
Provide clear, actionable legal guidance."#;

const FOCUS_MENTAL: &str = r#"
FOCUS: Mental Health & Trauma Support
Immediate self-help:
1. Grounding (5-4-3-2-1)
2. Deep breathing (4-7-8)
3. Self-compassion
Support in Bangladesh:
- Crisis Center: 10921
- Kaan Pete Roi: 09678 676 778
Provide empathetic, validating support."#;

const FOCUS_ROUTE: &str = r#"
FOCUS: Route Safety & Navigation
Chittagong Safe Areas:
- Generally Safe: Agrabad, GEC Circle, Nasirabad, Panchlaish
- Moderate: New Market, Chawkbazar, Sadarghat
- Caution at Night: Halishahar, Bahaddarhat, Katalganj
Provide specific route advice for Chittagong."#;

const FOCUS_SOS: &str = r#"
FOCUS: Emergency SOS Protocol
IMMEDIATE DANGER - DO THIS NOW:
1. CALL FOR HELP - Police: 999, Women Helpline: 109
2. GET TO SAFETY - Run towards lights, crowds
3. SHARE LOCATION
4. MAKE NOISE
Provide urgent, clear, step-by-step instructions."#;

const FOCUS_ASSISTANT: &str = r#"
FOCUS: General Women's Safety Assistant
Be empowering, culturally sensitive, and action-oriented."#;

/// Composes the full system prompt for a feature. Pure given the clock
/// reading: same feature and instant, byte-identical output.
pub fn system_prompt(feature: Feature, now: DateTime<Local>) -> String {
    let base = format!(
        "You are SafeHer AI, a women's safety assistant for Chittagong, Bangladesh.\n\
         Current time: {}\n\
         Location: Chittagong, Bangladesh\n\
         Emergency Contacts:\n\
         - Police: 999\n\
         - Women Helpline: 109\n\
         - Ambulance: 199\n\
         - Legal Aid: 16430\n\
         - Crisis Center: 10921\n",
        format_timestamp(now)
    );

    let focus = match feature {
        Feature::Legal => FOCUS_LEGAL,
        Feature::Mental => FOCUS_MENTAL,
        Feature::Route => FOCUS_ROUTE,
        Feature::Sos => FOCUS_SOS,
        Feature::Assistant => FOCUS_ASSISTANT,
    };

    format!("{base}{focus}")
}
