/*
[INPUT]:  Asset ids and asset codes
[OUTPUT]: Live rates, asset listings, basic and detailed market info
[POS]:    HTTP layer - public market data endpoints
[UPDATE]: When adding new market endpoints or changing response format
*/

use std::collections::HashMap;

use crate::http::{Result, SwyftxClient, path};
use crate::types::{LiveRateResponse, MarketAsset, MarketBasicInfo, MarketDetailedInfo, MarketRate};

#[derive(Debug, Clone, Copy)]
pub struct MarketService<'a> {
    client: &'a SwyftxClient,
}

impl SwyftxClient {
    pub fn market(&self) -> MarketService<'_> {
        MarketService { client: self }
    }
}

impl MarketService<'_> {
    /// Live rate for an asset.
    ///
    /// Reads the entry under the fixed key `"1"`; see [`MarketService::live_rates_by_asset`]
    /// for the whole map.
    ///
    /// GET live-rates/{asset}
    pub async fn live_rates(&self, asset_id: u32) -> Result<MarketRate> {
        let response: LiveRateResponse = self.client.get(&live_rates_path(asset_id)).await?;
        Ok(response.rate)
    }

    /// Every rate in the live-rates response, keyed by asset id
    ///
    /// GET live-rates/{asset}
    pub async fn live_rates_by_asset(&self, asset_id: u32) -> Result<HashMap<String, MarketRate>> {
        self.client.get(&live_rates_path(asset_id)).await
    }

    /// GET markets/assets/
    pub async fn assets(&self) -> Result<Vec<MarketAsset>> {
        self.client.get("markets/assets/").await
    }

    /// GET markets/info/basic/{code}
    pub async fn basic_info(&self, asset_code: &str) -> Result<MarketBasicInfo> {
        let endpoint = path::build(&["markets/info/basic/", asset_code]);
        self.client.get(&endpoint).await
    }

    /// GET markets/info/details/{code}
    pub async fn detailed_info(&self, asset_code: &str) -> Result<Vec<MarketDetailedInfo>> {
        let endpoint = path::build(&["markets/info/details/", asset_code]);
        self.client.get(&endpoint).await
    }
}

fn live_rates_path(asset_id: u32) -> String {
    path::build(&["live-rates/", &asset_id.to_string()])
}
