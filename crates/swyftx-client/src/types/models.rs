/*
[INPUT]:  Swyftx JSON response shapes
[OUTPUT]: Typed Rust records with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::serde_helpers::{decimal_num, decimal_str};
use super::time::SwyftxTime;

// ### Authentication

/// Permission information for one API key action
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scope {
    pub display: String,
    #[serde(rename = "desc")]
    pub description: String,
    pub key: String,
    pub state: i32,
}

/// Scopes granted to the active API key
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppScope {
    #[serde(rename = "app.account.read")]
    pub read_account: Scope,
    #[serde(rename = "app.funds.withdraw")]
    pub withdraw_funds: Scope,
    #[serde(rename = "app.orders.delete")]
    pub delete_orders: Scope,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiKey {
    pub id: String,
    pub label: String,
    pub scope: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<SwyftxTime>,
}

// ### Account

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonName {
    pub first: String,
    pub last: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileCurrency {
    pub id: u32,
    pub code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileMetadata {
    pub mfa_enabled: bool,
    pub mfa_enrolled: bool,
}

/// Swyftx account information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<SwyftxTime>,
    pub name: PersonName,
    pub email: String,
    pub phone: String,
    pub currency: ProfileCurrency,
    pub user_hash: String,
    pub metadata: ProfileMetadata,
    /// Free-form, the exchange does not document this object
    #[serde(rename = "userSettings", skip_serializing_if = "serde_json::Value::is_null")]
    pub user_settings: serde_json::Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountVerification {
    pub status: String,
    pub email: String,
    pub mfa: String,
    pub phone: String,
    pub identity: String,
}

/// Outcome of starting or checking an email/phone verification
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserVerification {
    pub success: bool,
    #[serde(rename = "emailVerified")]
    pub email_verified: bool,
    #[serde(rename = "phoneVerified")]
    pub phone_verified: bool,
    pub msg: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountAffiliation {
    pub referral_link: String,
    pub referred_users: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountBalance {
    #[serde(rename = "assetId")]
    pub asset_id: u32,
    #[serde(rename = "availableBalance", with = "decimal_str")]
    pub available_balance: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountStatistics {
    pub orders: u64,
    pub traded: f64,
    pub deposited: f64,
    pub withdrawn: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountMilestones {
    #[serde(rename = "signUp")]
    pub sign_up: bool,
    pub verified: bool,
    pub deposit: bool,
    pub trade: bool,
    pub refer: bool,
    pub completed: bool,
}

// ### Address

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressDetails {
    pub address: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub dest_tag: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub id: u64,
    pub code: String,
    #[serde(rename = "address_details")]
    pub details: AddressDetails,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<SwyftxTime>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Verification state of an Australian BSB code
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BsbStatus {
    pub duration_ms: u64,
    pub status: String,
    pub status_description: String,
    pub address: String,
    pub bank_code: String,
    pub bsb: String,
    pub city: String,
    pub closed: bool,
    pub post_code: String,
    pub state: String,
}

// ### Chart

/// Open/close/high/low/volume/time bar
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ohlcvt {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<SwyftxTime>,
    #[serde(with = "decimal_str")]
    pub open: Decimal,
    #[serde(with = "decimal_str")]
    pub high: Decimal,
    #[serde(with = "decimal_str")]
    pub low: Decimal,
    #[serde(with = "decimal_str")]
    pub close: Decimal,
    #[serde(with = "decimal_num")]
    pub volume: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    pub supports_search: bool,
    pub supports_group_request: bool,
    pub supports_marks: bool,
    pub exchanges: Vec<String>,
    pub symbols_types: Vec<String>,
    pub supported_resolutions: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartResolveSymbol {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub session: String,
    pub exchange: String,
    pub listed_exchange: String,
    pub timezone: String,
    #[serde(rename = "minmov")]
    pub min_mov: u32,
    #[serde(rename = "pricescale")]
    pub price_scale: u64,
    #[serde(rename = "minmove2", alias = "minmive2")]
    pub min_move2: u32,
    pub has_intraday: bool,
    pub supported_resolutions: String,
    pub data_status: String,
}

// ### History

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyHistory {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<SwyftxTime>,
    #[serde(with = "decimal_str")]
    pub quantity: Decimal,
    pub address_id: u64,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionHistory {
    pub asset: u32,
    #[serde(with = "decimal_num")]
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<SwyftxTime>,
    #[serde(rename = "actionType")]
    pub action_type: String,
    pub status: String,
}

// ### Limit

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WithdrawLimit {
    #[serde(with = "decimal_num")]
    pub used: Decimal,
    #[serde(with = "decimal_num")]
    pub remaining: Decimal,
    #[serde(with = "decimal_num")]
    pub limit: Decimal,
    pub rolling_cycle_hrs: u32,
}

// ### Market

/// Current price of an asset against the account's base asset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarketRate {
    #[serde(with = "decimal_str")]
    pub daily_price_change: Decimal,
    #[serde(with = "decimal_str")]
    pub mid_price: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketAsset {
    pub id: u32,
    pub name: String,
    pub code: String,
    #[serde(with = "decimal_str")]
    pub minimum_order: Decimal,
    pub price_scale: u32,
    pub deposit_enabled: bool,
    pub withdraw_enabled: bool,
    pub min_confirmations: u32,
    #[serde(with = "decimal_num")]
    pub min_withdrawal: Decimal,
    #[serde(with = "decimal_num")]
    pub minimum_order_increment: Decimal,
    #[serde(with = "decimal_num")]
    pub mining_fee: Decimal,
    pub primary: bool,
    pub secondary: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarketBasicInfo {
    pub name: String,
    pub alt_name: String,
    pub code: String,
    pub id: u32,
    pub rank: u32,
    #[serde(with = "decimal_str")]
    pub buy: Decimal,
    #[serde(with = "decimal_str")]
    pub sell: Decimal,
    #[serde(with = "decimal_str")]
    pub spread: Decimal,
    #[serde(rename = "volume24H")]
    pub volume_24h: f64,
    pub market_cap: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketVolume {
    #[serde(rename = "24H")]
    pub day: f64,
    #[serde(rename = "1W")]
    pub week: f64,
    #[serde(rename = "1M")]
    pub month: f64,
    #[serde(rename = "marketCap")]
    pub market_cap: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarketUrls {
    pub website: String,
    pub twitter: String,
    pub reddit: String,
    pub tech_doc: String,
    pub explorer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketSupply {
    pub circulating: f64,
    pub total: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarketDetailedInfo {
    pub name: String,
    pub id: u32,
    pub description: String,
    pub category: String,
    pub mineable: u32,
    #[serde(with = "decimal_str")]
    pub spread: Decimal,
    pub rank: u32,
    pub rank_suffix: String,
    pub volume: MarketVolume,
    pub urls: MarketUrls,
    pub supply: MarketSupply,
}

// ### Order

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderExchangeRate {
    #[serde(with = "decimal_str")]
    pub mid: Decimal,
    #[serde(with = "decimal_str")]
    pub price: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    pub id: u64,
    pub order_type: String,
    pub primary_asset: String,
    pub secondary_asset: String,
    pub quantity_asset: String,
    #[serde(with = "decimal_num")]
    pub quantity: Decimal,
    #[serde(with = "decimal_num")]
    pub trigger: Decimal,
    pub status: String,
    #[serde(with = "decimal_num")]
    pub amount: Decimal,
    #[serde(with = "decimal_num")]
    pub total: Decimal,
    #[serde(with = "decimal_num")]
    pub price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_time: Option<SwyftxTime>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields_default() {
        let asset: MarketAsset = serde_json::from_value(json!({"id": 3, "code": "BTC"})).unwrap();
        assert_eq!(asset.id, 3);
        assert_eq!(asset.code, "BTC");
        assert_eq!(asset.minimum_order, Decimal::ZERO);
        assert!(!asset.deposit_enabled);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let rate: MarketRate = serde_json::from_value(json!({
            "midPrice": "51234.5",
            "dailyPriceChange": "-1.2",
            "bestBid": "51200"
        }))
        .unwrap();
        assert_eq!(rate.mid_price, Decimal::new(512345, 1));
        assert_eq!(rate.daily_price_change, Decimal::new(-12, 1));
    }

    #[test]
    fn test_app_scope_dotted_keys() {
        let scope: AppScope = serde_json::from_value(json!({
            "app.account.read": {"display": "Read account", "desc": "View details", "key": "app.account.read", "state": 1},
            "app.funds.withdraw": {"display": "Withdraw", "desc": "", "key": "app.funds.withdraw", "state": 0}
        }))
        .unwrap();
        assert_eq!(scope.read_account.description, "View details");
        assert_eq!(scope.read_account.state, 1);
        assert_eq!(scope.withdraw_funds.key, "app.funds.withdraw");
        assert_eq!(scope.delete_orders, Scope::default());
    }

    #[test]
    fn test_resolve_symbol_accepts_legacy_key() {
        let symbol: ChartResolveSymbol =
            serde_json::from_value(json!({"name": "BTC/AUD", "minmive2": 4})).unwrap();
        assert_eq!(symbol.min_move2, 4);
    }

    #[test]
    fn test_address_roundtrip_with_time() {
        let address = Address {
            id: 77,
            code: "XRP".to_string(),
            details: AddressDetails {
                address: "rEb8TK3gBgk5auZkwc6sHnwrGVJH8DuaLh".to_string(),
                dest_tag: "1234".to_string(),
            },
            time: Some("1609459200.25".parse().unwrap()),
            name: "cold".to_string(),
            kind: "deposit".to_string(),
        };

        let encoded = serde_json::to_string(&address).unwrap();
        let decoded: Address = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, address);
    }

    #[test]
    fn test_detailed_info_volume_keys() {
        let info: MarketDetailedInfo = serde_json::from_value(json!({
            "name": "Bitcoin",
            "rankSuffix": "st",
            "volume": {"24H": 1.5, "1W": 10.0, "1M": 40.0, "marketCap": 1e12},
            "urls": {"website": "https://bitcoin.org", "techDoc": "https://bitcoin.org/bitcoin.pdf"},
            "supply": {"circulating": 19000000, "max": 21000000}
        }))
        .unwrap();
        assert_eq!(info.rank_suffix, "st");
        assert_eq!(info.volume.day, 1.5);
        assert_eq!(info.urls.tech_doc, "https://bitcoin.org/bitcoin.pdf");
        assert_eq!(info.supply.max, 21_000_000.0);
        assert_eq!(info.supply.total, 0.0);
    }
}
