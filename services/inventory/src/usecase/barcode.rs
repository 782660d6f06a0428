use crate::domain::repository::BarcodeLookup;
use crate::domain::types::BarcodeProduct;
use crate::error::InventoryServiceError;

pub struct LookupBarcodeUseCase<B: BarcodeLookup> {
    pub client: B,
}

impl<B: BarcodeLookup> LookupBarcodeUseCase<B> {
    pub async fn execute(&self, barcode: &str) -> Result<BarcodeProduct, InventoryServiceError> {
        let barcode = barcode.trim();
        if barcode.is_empty() {
            return Err(InventoryServiceError::missing("barcode"));
        }
        let mut product = self.client.lookup(barcode).await?;
        product.id = barcode.to_owned();
        Ok(product)
    }
}
