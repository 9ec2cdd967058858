use yew::prelude::*;

use crate::api::ApiClient;
use crate::query_cache::QueryCache;

/// Properties for the `CsvImportComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct CsvImportProps {
    pub client: ApiClient,
    /// Cache whose `parents` entries are invalidated after an accepted upload.
    pub cache: QueryCache,
    /// Called with the path to open after an accepted upload.
    pub on_navigate: Callback<String>,
}
