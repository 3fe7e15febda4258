/*
[INPUT]:  Saved withdrawal address id, asset id and quantity
[OUTPUT]: Withdrawal submission
[POS]:    HTTP layer - funds endpoint (require auth)
[UPDATE]: When withdrawal parameters change
*/

use rust_decimal::Decimal;

use crate::http::{Result, SwyftxClient, path};
use crate::types::WithdrawFundsRequest;

/// Withdrawals to one saved address
#[derive(Debug, Clone, Copy)]
pub struct FundsService<'a> {
    client: &'a SwyftxClient,
    address_id: u64,
}

impl SwyftxClient {
    pub fn funds(&self, address_id: u64) -> FundsService<'_> {
        FundsService {
            client: self,
            address_id,
        }
    }
}

impl FundsService<'_> {
    pub fn address_id(&self) -> u64 {
        self.address_id
    }

    /// Withdraw `quantity` of an asset to the service's address
    ///
    /// POST funds/withdraw/{asset}
    pub async fn withdraw(&self, asset_id: u32, quantity: Decimal) -> Result<()> {
        let endpoint = path::build(&["funds/withdraw/", &asset_id.to_string()]);
        let body = WithdrawFundsRequest {
            quantity,
            address_id: self.address_id,
        };
        self.client.post_discarding(&endpoint, Some(&body)).await
    }
}
