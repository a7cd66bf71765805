use serde::{Deserialize, Serialize};

use crate::ads::repo_types::Ad;
use crate::common::{non_blank, positive_id, unix_seconds};
use crate::error::AppResult;

#[derive(Debug, Deserialize)]
pub struct CreateAdRequest {
    pub title: String,
    pub description: String,
    pub user_id: i32,
}

/// Validated fields ready for insert.
#[derive(Debug, PartialEq)]
pub struct NewAd {
    pub title: String,
    pub description: String,
    pub user_id: i32,
}

impl CreateAdRequest {
    pub fn validate(self) -> AppResult<NewAd> {
        non_blank("description", &self.description)?;
        Ok(NewAd {
            title: non_blank("title", &self.title)?,
            description: self.description,
            user_id: positive_id("user_id", self.user_id)?,
        })
    }
}

/// Request body for `PATCH /ads/{id}`. Absent keys leave the column as is.
#[derive(Debug, Default, Deserialize)]
pub struct AdPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub user_id: Option<i32>,
}

impl AdPatch {
    pub fn validate(&mut self) -> AppResult<()> {
        self.title = self.title.as_deref().map(|t| non_blank("title", t)).transpose()?;
        if let Some(description) = &self.description {
            non_blank("description", description)?;
        }
        if let Some(user_id) = self.user_id {
            positive_id("user_id", user_id)?;
        }
        Ok(())
    }

    pub fn apply_to(self, ad: &mut Ad) {
        if let Some(title) = self.title {
            ad.title = title;
        }
        if let Some(description) = self.description {
            ad.description = description;
        }
        if let Some(user_id) = self.user_id {
            ad.user_id = user_id;
        }
    }
}

/// Body of a successful create. `ad` is the historical key, `id` matches the
/// other mutations.
#[derive(Debug, Serialize)]
pub struct CreatedAd {
    pub id: i32,
    pub ad: i32,
}

#[derive(Debug, Serialize)]
pub struct PublicAd {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub creation_time: i64,
    pub user_id: i32,
}

impl From<Ad> for PublicAd {
    fn from(a: Ad) -> Self {
        Self {
            id: a.id,
            title: a.title,
            description: a.description,
            creation_time: unix_seconds(a.creation_time),
            user_id: a.user_id,
        }
    }
}
