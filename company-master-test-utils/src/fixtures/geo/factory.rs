//! Default values for geo catalog fixtures.

/// Timezone payload stored on mock countries, shaped like the catalog import.
pub const MOCK_TIMEZONES: &str = r#"[{"zoneName":"Asia/Kolkata","gmtOffset":19800,"gmtOffsetName":"UTC+05:30","abbreviation":"IST","tzName":"Indian Standard Time"},{"zoneName":"Asia/Calcutta","gmtOffset":19800,"gmtOffsetName":"UTC+05:30","abbreviation":"IST2","tzName":"Indian Standard Time"}]"#;

/// Currency code stored on mock countries.
pub const MOCK_CURRENCY: &str = "INR";

/// Currency symbol stored on mock countries.
pub const MOCK_CURRENCY_SYMBOL: &str = "₹";

/// Create a country active model with the default currency and timezone payload.
pub fn mock_country(country_id: i32, name: &str) -> entity::geo_country::ActiveModel {
    use sea_orm::ActiveValue;

    entity::geo_country::ActiveModel {
        id: ActiveValue::Set(country_id),
        name: ActiveValue::Set(name.to_string()),
        currency: ActiveValue::Set(Some(MOCK_CURRENCY.to_string())),
        currency_symbol: ActiveValue::Set(Some(MOCK_CURRENCY_SYMBOL.to_string())),
        timezones: ActiveValue::Set(Some(MOCK_TIMEZONES.to_string())),
    }
}
