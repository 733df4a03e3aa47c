// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://samanwaya.kite.kerala.gov.in/index.php/Publicview/";
pub const LISTING_PATH: &str = "getRosterData/";
pub const DETAIL_PATH: &str = "getManagementList/";
pub const TIMEOUT_SECS: u64 = 30;
pub const USER_AGENT: &str = concat!("roster_scrape/", env!("CARGO_PKG_VERSION"));

// Output
pub const OUTPUT_FILE: &str = "roster_data.json";
pub const JSON_INDENT: &[u8] = b"    ";
