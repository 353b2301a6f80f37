use derive_getters::Getters;
use serde::Deserialize;

/// Body returned by a time server's `/time` endpoint
#[derive(Debug, Deserialize, Getters)]
pub struct TimeEndpointResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Option<ToolPayload>,
}

/// Tool result envelope carried in `data`
#[derive(Debug, Deserialize, Getters)]
pub struct ToolPayload {
    #[serde(default)]
    content: Vec<ContentItem>,
}

#[derive(Debug, Deserialize, Getters)]
pub struct ContentItem {
    #[serde(default)]
    text: Option<String>,
}

impl TimeEndpointResponse {
    /// Text of the first content item, if the server reported success
    pub fn first_text(&self) -> Option<&str> {
        if !*self.success() {
            return None;
        }

        self.data()
            .as_ref()?
            .content()
            .first()?
            .text()
            .as_deref()
            .filter(|text| !text.is_empty())
    }
}
