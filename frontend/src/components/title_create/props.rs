use yew::prelude::*;

use crate::api::ApiClient;
use crate::storage::StoreHandle;

/// Properties for the `TitleCreateComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct TitleCreateProps {
    pub client: ApiClient,
    /// Where the draft and the preset list live.
    pub store: StoreHandle,
    pub on_navigate: Callback<String>,
}
