/*
[INPUT]:  Caller parameters for write endpoints
[OUTPUT]: Typed Rust request bodies with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::serde_helpers::decimal_num;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshTokenRequest {
    #[serde(rename = "apiKey")]
    pub api_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FavouriteAsset {
    pub asset_id: u32,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub fav_status: bool,
}

/// Account settings accepted by `user/settings/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccountSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favourite_asset: Option<FavouriteAsset>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub analytics_opt_out: bool,
    #[serde(rename = "activeAffil", skip_serializing_if = "std::ops::Not::not")]
    pub active_affiliation: bool,
    #[serde(rename = "disableSMSRecovery", skip_serializing_if = "std::ops::Not::not")]
    pub disable_sms_recovery: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateSettingsRequest {
    pub data: AccountSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GreenIdVerification {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreGreenIdRequest {
    pub verification: GreenIdVerification,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultAssetProfile {
    #[serde(rename = "defaultAsset")]
    pub default_asset: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetCurrencyRequest {
    pub profile: DefaultAssetProfile,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAddress {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAddressRequest {
    pub address: NewAddress,
}

/// Asset pair and resolution for the latest-bar endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartAsset {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub base_asset: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub asset: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub resolution: String,
}

/// Query for `charts/getBars/`. Sent as path and query parameters, not JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChartRequest {
    pub base_asset: String,
    pub secondary_asset: String,
    pub resolution: String,
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
    pub first_data_request: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawFundsRequest {
    #[serde(with = "decimal_num")]
    pub quantity: Decimal,
    pub address_id: u64,
}

/// Quote request for `orders/rate/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExchangeRateRequest {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub buy: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sell: String,
    #[serde(with = "decimal_num", skip_serializing_if = "Decimal::is_zero")]
    pub amount: Decimal,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub limit: String,
}

/// New order for `orders/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderPlace {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub primary: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub secondary: String,
    #[serde(with = "decimal_num", skip_serializing_if = "Decimal::is_zero")]
    pub quantity: Decimal,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub asset_quantity: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub order_type: String,
    #[serde(with = "decimal_num", skip_serializing_if = "Decimal::is_zero")]
    pub trigger: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;
    use std::str::FromStr;

    fn dec(raw: &str) -> Decimal {
        Decimal::from_str(raw).unwrap()
    }

    #[test]
    fn test_order_place_omits_zero_fields() {
        let order = OrderPlace {
            primary: "AUD".to_string(),
            secondary: "BTC".to_string(),
            quantity: Decimal::new(1005, 1),
            asset_quantity: "AUD".to_string(),
            order_type: "1".to_string(),
            trigger: Decimal::ZERO,
        };

        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(
            value,
            json!({
                "primary": "AUD",
                "secondary": "BTC",
                "quantity": 100.5,
                "assetQuantity": "AUD",
                "orderType": "1"
            })
        );

        let decoded: OrderPlace = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, order);
    }

    #[test]
    fn test_settings_roundtrip() {
        let settings = AccountSettings {
            favourite_asset: Some(FavouriteAsset {
                asset_id: 3,
                fav_status: true,
            }),
            analytics_opt_out: true,
            active_affiliation: false,
            disable_sms_recovery: true,
        };

        let encoded = serde_json::to_string(&UpdateSettingsRequest {
            data: settings.clone(),
        })
        .unwrap();
        let decoded: UpdateSettingsRequest = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded.data, settings);
        assert!(!encoded.contains("activeAffil"));
    }

    #[test]
    fn test_exchange_rate_request_shape() {
        let request = ExchangeRateRequest {
            buy: "BTC".to_string(),
            sell: "AUD".to_string(),
            amount: Decimal::from(1000),
            limit: String::new(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"buy": "BTC", "sell": "AUD", "amount": 1000})
        );
    }

    #[rstest]
    #[case::crypto_amount("0.12345678", "0.00000001")]
    #[case::long_fraction("0.12345678901234567891", "51234.123456789012345")]
    #[case::tiny_step("1.00000000000000001", "100")]
    fn test_order_place_keeps_precision(#[case] quantity: &str, #[case] trigger: &str) {
        let order = OrderPlace {
            primary: "AUD".to_string(),
            secondary: "BTC".to_string(),
            quantity: dec(quantity),
            asset_quantity: "BTC".to_string(),
            order_type: "3".to_string(),
            trigger: dec(trigger),
        };

        let encoded = serde_json::to_string(&order).unwrap();
        assert!(encoded.contains(&format!(r#""quantity":{quantity},"#)));
        assert!(encoded.contains(&format!(r#""trigger":{trigger}}}"#)));

        let decoded: OrderPlace = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, order);
    }

    #[rstest]
    #[case("0.12345678")]
    #[case("98765.432109876543210987")]
    fn test_exchange_rate_request_keeps_precision(#[case] amount: &str) {
        let request = ExchangeRateRequest {
            buy: "BTC".to_string(),
            sell: "AUD".to_string(),
            amount: dec(amount),
            limit: String::new(),
        };

        let encoded = serde_json::to_string(&request).unwrap();
        assert_eq!(encoded, format!(r#"{{"buy":"BTC","sell":"AUD","amount":{amount}}}"#));

        let decoded: ExchangeRateRequest = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, request);
    }

    #[rstest]
    #[case("1.00000000000000001")]
    #[case("0.12345678")]
    fn test_withdraw_request_keeps_precision(#[case] quantity: &str) {
        let request = WithdrawFundsRequest {
            quantity: dec(quantity),
            address_id: 7,
        };

        let encoded = serde_json::to_string(&request).unwrap();
        assert_eq!(encoded, format!(r#"{{"quantity":{quantity},"address_id":7}}"#));

        let decoded: WithdrawFundsRequest = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, request);
    }

    #[test]
    fn test_chart_asset_roundtrip() {
        let asset = ChartAsset {
            base_asset: "AUD".to_string(),
            asset: "BTC".to_string(),
            resolution: "1d".to_string(),
        };
        let encoded = serde_json::to_string(&asset).unwrap();
        assert_eq!(encoded, r#"{"baseAsset":"AUD","asset":"BTC","resolution":"1d"}"#);
        assert_eq!(serde_json::from_str::<ChartAsset>(&encoded).unwrap(), asset);
    }
}
