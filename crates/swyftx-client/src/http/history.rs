/*
[INPUT]:  Asset id and action type
[OUTPUT]: Deposit, withdrawal and transaction history
[POS]:    HTTP layer - history endpoints (require auth)
[UPDATE]: When history endpoints change
*/

use crate::http::{Result, SwyftxClient, path};
use crate::types::{CurrencyHistory, TransactionHistory};

#[derive(Debug, Clone, Copy)]
pub struct HistoryService<'a> {
    client: &'a SwyftxClient,
    asset_id: u32,
}

impl SwyftxClient {
    pub fn history(&self, asset_id: u32) -> HistoryService<'_> {
        HistoryService {
            client: self,
            asset_id,
        }
    }
}

impl HistoryService<'_> {
    pub fn asset_id(&self) -> u32 {
        self.asset_id
    }

    /// GET history/withdraw/{asset}
    pub async fn withdraw(&self) -> Result<CurrencyHistory> {
        self.client.get(&self.endpoint("withdraw")).await
    }

    /// GET history/deposit/{asset}
    pub async fn deposit(&self) -> Result<CurrencyHistory> {
        self.client.get(&self.endpoint("deposit")).await
    }

    /// Every event of `action_type` for the asset
    ///
    /// GET history/{action_type}/{asset}
    pub async fn all(&self, action_type: &str) -> Result<Vec<TransactionHistory>> {
        self.client.get(&self.endpoint(action_type)).await
    }

    fn endpoint(&self, action_type: &str) -> String {
        path::build(&["history/", action_type, "/", &self.asset_id.to_string()])
    }
}
