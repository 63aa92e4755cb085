use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub genre: String,
    pub duration: u32,
    pub rating: String,
    pub cover_image: String,
    pub description: String,
}
