//! Query parameters for listing short links.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

/// Optional cap on how many links are returned.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<usize>,
}
