/*
[INPUT]:  Asset pairs, resolutions and time windows
[OUTPUT]: OHLCVT bars, chart settings and resolved symbols
[POS]:    HTTP layer - charting endpoints
[UPDATE]: When adding chart endpoints or changing query parameters
*/

use crate::http::{Result, SwyftxClient, path};
use crate::types::{BarChartRequest, ChartAsset, ChartResolveSymbol, ChartSettings, Ohlcvt};

#[derive(Debug, Clone, Copy)]
pub struct ChartService<'a> {
    client: &'a SwyftxClient,
}

impl SwyftxClient {
    pub fn chart(&self) -> ChartService<'_> {
        ChartService { client: self }
    }
}

impl ChartService<'_> {
    /// Price bars for an asset pair between `from` and `to`
    ///
    /// GET charts/getBars/{base}/{secondary}/{resolution}/?from={ms}&to={ms}&firstDataRequest={bool}
    pub async fn bar(&self, request: &BarChartRequest) -> Result<Vec<Ohlcvt>> {
        self.client.get(&bars_path(request)).await
    }

    /// Most recent bar for each asset pair
    ///
    /// POST charts/getLatestBar/
    pub async fn latest_bar(&self, assets: &[ChartAsset]) -> Result<Vec<Ohlcvt>> {
        self.client.post("charts/getLatestBar/", Some(assets)).await
    }

    /// GET charts/settings
    pub async fn settings(&self) -> Result<ChartSettings> {
        self.client.get("charts/settings").await
    }

    /// GET charts/resolveSymbol/{base}{secondary}
    pub async fn resolve_symbol(
        &self,
        base_asset: u32,
        secondary_asset: u32,
    ) -> Result<ChartResolveSymbol> {
        let endpoint = path::build(&[
            "charts/resolveSymbol/",
            &base_asset.to_string(),
            &secondary_asset.to_string(),
        ]);
        self.client.get(&endpoint).await
    }
}

fn bars_path(request: &BarChartRequest) -> String {
    path::build(&[
        "charts/getBars/",
        &request.base_asset,
        "/",
        &request.secondary_asset,
        "/",
        &request.resolution,
        "/?from=",
        &request.from.timestamp_millis().to_string(),
        "&to=",
        &request.to.timestamp_millis().to_string(),
        "&firstDataRequest=",
        if request.first_data_request { "true" } else { "false" },
    ])
}
