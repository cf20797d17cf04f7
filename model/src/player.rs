use aws_sdk_dynamodb::types::AttributeValue;
use maplit::hashmap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

pub const ID: &str = "id";
pub const LAST_UPDATED: &str = "lastUpdated";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AttributeError {
    #[error("`{0}` attribute is missing in the player entry")]
    Missing(&'static str),
    #[error("`{0}` attribute is not a string in the player entry")]
    NotAString(&'static str),
}

/// A player record, keyed by the player's RSN.
///
/// `last_updated` is an RFC 3339 UTC timestamp. It is `None` only on records
/// that have not been through `PlayerService::save_player` yet.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

impl Player {
    pub fn new(id: impl Into<String>) -> Player {
        Player {
            id: id.into(),
            last_updated: None,
        }
    }

    pub fn from_dynamo_item(item: &HashMap<String, AttributeValue>) -> Result<Player, AttributeError> {
        Ok(Player {
            id: string_attribute(item, ID)?,
            last_updated: Some(string_attribute(item, LAST_UPDATED)?),
        })
    }

    pub fn to_dynamo_item(&self) -> Result<HashMap<String, AttributeValue>, AttributeError> {
        let last_updated = self
            .last_updated
            .as_ref()
            .ok_or(AttributeError::Missing(LAST_UPDATED))?;

        Ok(hashmap! {
            ID.to_string() => AttributeValue::S(self.id.clone()),
            LAST_UPDATED.to_string() => AttributeValue::S(last_updated.clone()),
        })
    }
}

fn string_attribute(
    item: &HashMap<String, AttributeValue>,
    name: &'static str,
) -> Result<String, AttributeError> {
    item.get(name)
        .ok_or(AttributeError::Missing(name))?
        .as_s()
        .map(|value| value.to_owned())
        .map_err(|_| AttributeError::NotAString(name))
}
