//! # Customer Preferences
//!
//! Opt-in "remember me" storage for the customer's contact details, so the
//! form can pre-fill on the next visit. No TTL: preferences live until the
//! user unchecks the box or clears everything.

use serde::{Deserialize, Serialize};

use crate::error::StoreResult;
use crate::jar::Jar;

/// Opt-in flag key; prefs are only read back when this holds `"true"`.
pub const REMEMBER_ME_KEY: &str = "rememberMe";

/// Key for the saved customer name.
pub const CUSTOMER_NAME_KEY: &str = "customerName";

/// Key for the saved customer email.
pub const CUSTOMER_EMAIL_KEY: &str = "customerEmail";

/// Key for the saved customer phone number.
pub const CUSTOMER_PHONE_KEY: &str = "customerPhone";

/// The customer's contact details as last saved.
///
/// Raw field values, not validated: validation happens when the form is
/// submitted, exactly as if the user had typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPrefs {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Saves the preferences and marks the opt-in flag.
///
/// Field values are trimmed on the way in; whatever whitespace the inputs
/// carried is not worth persisting.
pub fn save_prefs(jar: &mut dyn Jar, prefs: &CustomerPrefs) -> StoreResult<()> {
    jar.set(REMEMBER_ME_KEY, "true", None)?;
    jar.set(CUSTOMER_NAME_KEY, prefs.name.trim(), None)?;
    jar.set(CUSTOMER_EMAIL_KEY, prefs.email.trim(), None)?;
    jar.set(CUSTOMER_PHONE_KEY, prefs.phone.trim(), None)?;
    Ok(())
}

/// Removes the opt-in flag and every saved field.
pub fn clear_prefs(jar: &mut dyn Jar) -> StoreResult<()> {
    jar.remove(REMEMBER_ME_KEY)?;
    jar.remove(CUSTOMER_NAME_KEY)?;
    jar.remove(CUSTOMER_EMAIL_KEY)?;
    jar.remove(CUSTOMER_PHONE_KEY)?;
    Ok(())
}

/// Loads the saved preferences, if the user opted in.
///
/// Missing individual fields read back as empty strings rather than
/// failing; the form simply shows an empty input.
pub fn load_prefs(jar: &dyn Jar) -> Option<CustomerPrefs> {
    if jar.get(REMEMBER_ME_KEY).as_deref() != Some("true") {
        return None;
    }

    Some(CustomerPrefs {
        name: jar.get(CUSTOMER_NAME_KEY).unwrap_or_default(),
        email: jar.get(CUSTOMER_EMAIL_KEY).unwrap_or_default(),
        phone: jar.get(CUSTOMER_PHONE_KEY).unwrap_or_default(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jar::MemoryJar;

    fn sample_prefs() -> CustomerPrefs {
        CustomerPrefs {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "5551234567".to_string(),
        }
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let mut jar = MemoryJar::new();
        save_prefs(&mut jar, &sample_prefs()).unwrap();

        assert_eq!(load_prefs(&jar), Some(sample_prefs()));
    }

    #[test]
    fn test_load_without_opt_in_is_none() {
        let mut jar = MemoryJar::new();
        // fields present but flag absent
        jar.set(CUSTOMER_NAME_KEY, "Ada Lovelace", None).unwrap();

        assert_eq!(load_prefs(&jar), None);
    }

    #[test]
    fn test_values_are_trimmed_on_save() {
        let mut jar = MemoryJar::new();
        let prefs = CustomerPrefs {
            name: "  Ada Lovelace  ".to_string(),
            email: " ada@example.com ".to_string(),
            phone: " 5551234567 ".to_string(),
        };
        save_prefs(&mut jar, &prefs).unwrap();

        assert_eq!(load_prefs(&jar), Some(sample_prefs()));
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let mut jar = MemoryJar::new();
        jar.set(REMEMBER_ME_KEY, "true", None).unwrap();
        jar.set(CUSTOMER_NAME_KEY, "Ada Lovelace", None).unwrap();

        let prefs = load_prefs(&jar).unwrap();
        assert_eq!(prefs.name, "Ada Lovelace");
        assert_eq!(prefs.email, "");
        assert_eq!(prefs.phone, "");
    }

    #[test]
    fn test_clear_prefs() {
        let mut jar = MemoryJar::new();
        save_prefs(&mut jar, &sample_prefs()).unwrap();

        clear_prefs(&mut jar).unwrap();
        assert_eq!(load_prefs(&jar), None);
        assert_eq!(jar.get(CUSTOMER_NAME_KEY), None);
    }
}
