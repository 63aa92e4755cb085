use serde::{Deserialize, Serialize};

// `features` is an unordered set of tags; nothing downstream depends on
// its order.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Hall {
    pub id: String,
    pub name: String,
    pub capacity: u32,
    pub features: Vec<String>,
}
