/*
[INPUT]:  Order parameters and order ids
[OUTPUT]: Exchange rate quotes, new order ids and order listings
[POS]:    HTTP layer - trading endpoints (require auth)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use crate::http::{Result, SwyftxClient, path};
use crate::types::{ExchangeRateRequest, Order, OrderExchangeRate, OrderIdResponse, OrderPlace};

#[derive(Debug, Clone, Copy)]
pub struct OrderService<'a> {
    client: &'a SwyftxClient,
}

impl SwyftxClient {
    pub fn order(&self) -> OrderService<'_> {
        OrderService { client: self }
    }
}

impl OrderService<'_> {
    /// Quote the exchange rate for a pair
    ///
    /// POST orders/rate/
    pub async fn exchange_rate(&self, request: &ExchangeRateRequest) -> Result<OrderExchangeRate> {
        self.client.post("orders/rate/", Some(request)).await
    }

    /// Place an order and return its id
    ///
    /// POST orders/
    pub async fn place(&self, order: &OrderPlace) -> Result<u64> {
        let response: OrderIdResponse = self.client.post("orders/", Some(order)).await?;
        Ok(response.order_id)
    }

    /// DELETE orders/{id}
    pub async fn cancel(&self, order_id: u64) -> Result<()> {
        let endpoint = path::build(&["orders/", &order_id.to_string()]);
        self.client.delete(&endpoint).await
    }

    /// Orders for an asset code; an empty code lists every order
    ///
    /// GET orders/{asset}
    pub async fn list(&self, asset: &str) -> Result<Vec<Order>> {
        let endpoint = path::build(&["orders/", asset]);
        self.client.get(&endpoint).await
    }
}
