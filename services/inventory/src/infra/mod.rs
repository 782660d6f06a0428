pub mod barcode;
pub mod db;
pub mod email;
