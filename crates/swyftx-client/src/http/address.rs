/*
[INPUT]:  Asset code scoping the address book, address ids, verification tokens
[OUTPUT]: Deposit/withdrawal addresses and BSB verification state
[POS]:    HTTP layer - address endpoints (require auth)
[UPDATE]: When address endpoints or identifier rules change
*/

use crate::http::{Result, SwyftxClient, SwyftxError, path};
use crate::types::{Address, BsbStatus, CreateAddressRequest, NewAddress};

const ASSET_CODE: &str = "asset code";

/// Address book for a single asset.
///
/// `create`, `active`, `saved` and `check_deposit` need a non-empty asset code.
#[derive(Debug, Clone)]
pub struct AddressService<'a> {
    client: &'a SwyftxClient,
    asset_code: String,
}

impl SwyftxClient {
    pub fn address(&self, asset_code: impl Into<String>) -> AddressService<'_> {
        AddressService {
            client: self,
            asset_code: asset_code.into(),
        }
    }
}

impl AddressService<'_> {
    pub fn asset_code(&self) -> &str {
        &self.asset_code
    }

    /// Create a deposit address and return it
    ///
    /// POST address/deposit/{asset}
    pub async fn create(&self, name: &str) -> Result<Address> {
        let asset = path::require(&self.asset_code, ASSET_CODE)?;
        let endpoint = path::build(&["address/deposit/", asset]);
        let body = CreateAddressRequest {
            address: NewAddress {
                name: name.to_string(),
            },
        };

        let addresses: Vec<Address> = self.client.post(&endpoint, Some(&body)).await?;
        addresses
            .into_iter()
            .next()
            .ok_or(SwyftxError::EmptyResponse { endpoint })
    }

    /// Active deposit addresses
    pub async fn active(&self) -> Result<Vec<Address>> {
        self.list("deposit").await
    }

    /// Saved withdrawal addresses
    pub async fn saved(&self) -> Result<Vec<Address>> {
        self.list("withdraw").await
    }

    /// GET address/{kind}/{asset}
    async fn list(&self, kind: &str) -> Result<Vec<Address>> {
        let asset = path::require(&self.asset_code, ASSET_CODE)?;
        let endpoint = path::build(&["address/", kind, "/", asset]);
        self.client.get(&endpoint).await
    }

    /// Remove a saved withdrawal address
    ///
    /// DELETE address/withdraw/{id}
    pub async fn remove(&self, address_id: u64) -> Result<()> {
        let endpoint = path::build(&["address/withdraw/", &address_id.to_string()]);
        self.client.delete(&endpoint).await
    }

    /// Confirm a withdrawal address with the emailed verification token
    ///
    /// GET address/withdraw/verify/{token}
    pub async fn verify_withdrawal(&self, token: &str) -> Result<()> {
        let endpoint = path::build(&["address/withdraw/verify/", token]);
        self.client.get_discarding(&endpoint).await
    }

    /// GET address/withdraw/bsb-verify/{bsb}
    pub async fn verify_bsb(&self, bsb: &str) -> Result<BsbStatus> {
        let endpoint = path::build(&["address/withdraw/bsb-verify/", bsb]);
        self.client.get(&endpoint).await
    }

    /// Ask the exchange to look for new deposits on an address
    ///
    /// GET address/check/{asset}/{id}
    pub async fn check_deposit(&self, address_id: u64) -> Result<()> {
        let asset = path::require(&self.asset_code, ASSET_CODE)?;
        let endpoint = path::build(&["address/check/", asset, "/", &address_id.to_string()]);
        self.client.get_discarding(&endpoint).await
    }
}
