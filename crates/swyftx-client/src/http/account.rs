/*
[INPUT]:  Bearer token and account settings
[OUTPUT]: User profile, verification state, balances and statistics
[POS]:    HTTP layer - user account endpoints (require auth)
[UPDATE]: When adding new user endpoints or changing response envelopes
*/

// ### User Endpoints

use reqwest::Method;

use crate::http::{Result, SwyftxClient, path};
use crate::types::{
    AccountAffiliation, AccountBalance, AccountMilestones, AccountProfile, AccountSettings,
    AccountStatistics, AccountVerification, DefaultAssetProfile, GreenIdVerification,
    ProfileResponse, SetCurrencyRequest, StoreGreenIdRequest, UpdateSettingsRequest,
    UserVerification, VerificationResponse,
};

#[derive(Debug, Clone, Copy)]
pub struct AccountService<'a> {
    client: &'a SwyftxClient,
}

impl SwyftxClient {
    pub fn account(&self) -> AccountService<'_> {
        AccountService { client: self }
    }
}

impl AccountService<'_> {
    /// GET user/
    pub async fn profile(&self) -> Result<AccountProfile> {
        let account: ProfileResponse = self.client.get("user/").await?;
        Ok(account.profile)
    }

    /// Update account settings and return the resulting profile
    ///
    /// POST user/settings/
    pub async fn update_settings(&self, settings: &AccountSettings) -> Result<AccountProfile> {
        let body = UpdateSettingsRequest {
            data: settings.clone(),
        };
        let account: ProfileResponse = self.client.post("user/settings/", Some(&body)).await?;
        Ok(account.profile)
    }

    /// GET user/verification/
    pub async fn verification_info(&self) -> Result<AccountVerification> {
        let account: VerificationResponse = self.client.get("user/verification/").await?;
        Ok(account.verification)
    }

    /// Store a GreenID verification id.
    ///
    /// The exchange expects this as a GET carrying a JSON body.
    ///
    /// GET user/verification/storeGreenId/
    pub async fn save_green_id(&self, green_id: &str) -> Result<()> {
        let body = StoreGreenIdRequest {
            verification: GreenIdVerification {
                id: green_id.to_string(),
            },
        };
        self.client
            .request_discarding(Method::GET, "user/verification/storeGreenId/", Some(&body))
            .await
    }

    /// Send a verification email
    pub async fn start_email_verification(&self) -> Result<UserVerification> {
        self.start_verification("email", "").await
    }

    pub async fn check_email_verification(&self) -> Result<UserVerification> {
        self.check_verification("email", "").await
    }

    /// Confirm access to a phone with the token received by SMS
    pub async fn start_phone_verification(&self, token: &str) -> Result<UserVerification> {
        self.start_verification("phone", token).await
    }

    /// Send a verification SMS to `phone`
    pub async fn check_phone_verification(&self, phone: &str) -> Result<UserVerification> {
        self.check_verification("phone", phone).await
    }

    /// POST user/verification/{kind}/{token}
    async fn start_verification(&self, kind: &str, token: &str) -> Result<UserVerification> {
        let endpoint = path::build(&["user/verification/", kind, "/", token]);
        self.client.post::<(), _>(&endpoint, None).await
    }

    /// GET user/verification/{kind}/{phone}
    async fn check_verification(&self, kind: &str, phone: &str) -> Result<UserVerification> {
        let endpoint = path::build(&["user/verification/", kind, "/", phone]);
        self.client.get(&endpoint).await
    }

    /// GET user/affiliations/
    pub async fn affiliation(&self) -> Result<AccountAffiliation> {
        self.client.get("user/affiliations/").await
    }

    /// GET user/balance/
    pub async fn balances(&self) -> Result<Vec<AccountBalance>> {
        self.client.get("user/balance/").await
    }

    /// Change the default currency to the given asset id
    ///
    /// POST user/currency/
    pub async fn set_currency(&self, asset_id: u32) -> Result<AccountProfile> {
        let body = SetCurrencyRequest {
            profile: DefaultAssetProfile {
                default_asset: asset_id,
            },
        };
        let account: ProfileResponse = self.client.post("user/currency/", Some(&body)).await?;
        Ok(account.profile)
    }

    /// GET user/statistics/
    pub async fn statistics(&self) -> Result<AccountStatistics> {
        self.client.get("user/statistics/").await
    }

    /// Completion state of account milestones
    ///
    /// GET user/progress/
    pub async fn progress(&self) -> Result<AccountMilestones> {
        self.client.get("user/progress/").await
    }
}
