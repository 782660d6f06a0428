use std::time::Duration;

use anyhow::Context as _;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::UpcSettings;
use crate::domain::repository::BarcodeLookup;
use crate::domain::types::BarcodeProduct;
use crate::error::InventoryServiceError;

const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = "Dalvik/2.1.0";

#[derive(Serialize)]
struct LookupBody<'a> {
    barcode_number: &'a str,
    token: &'a str,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LookupResponse {
    product: Product,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Product {
    name: String,
    image_url: String,
    category: Category,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Category {
    name: String,
}

fn product_from_response(barcode: &str, res: LookupResponse) -> BarcodeProduct {
    BarcodeProduct {
        id: barcode.to_owned(),
        name: res.product.name,
        category: res.product.category.name,
        picture_url: res.product.image_url,
    }
}

/// HTTP client for the third-party barcode database. Without settings every
/// lookup fails with `BarcodeUnavailable`.
#[derive(Clone)]
pub struct HttpBarcodeClient {
    client: Client,
    settings: Option<UpcSettings>,
}

impl HttpBarcodeClient {
    pub fn new(settings: Option<UpcSettings>) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(LOOKUP_TIMEOUT)
            .user_agent(USER_AGENT)
            .gzip(true)
            .build()
            .context("build barcode http client")?;
        Ok(Self { client, settings })
    }
}

impl BarcodeLookup for HttpBarcodeClient {
    async fn lookup(&self, barcode: &str) -> Result<BarcodeProduct, InventoryServiceError> {
        let settings = self
            .settings
            .as_ref()
            .ok_or(InventoryServiceError::BarcodeUnavailable)?;

        let res: LookupResponse = self
            .client
            .post(&settings.url)
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .json(&LookupBody {
                barcode_number: barcode,
                token: &settings.token,
            })
            .send()
            .await
            .context("send barcode lookup")?
            .error_for_status()
            .context("barcode lookup status")?
            .json()
            .await
            .context("decode barcode lookup")?;

        tracing::debug!(barcode, name = %res.product.name, "barcode resolved");
        Ok(product_from_response(barcode, res))
    }
}
