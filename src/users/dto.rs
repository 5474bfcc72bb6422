use serde::{Deserialize, Deserializer};

use super::repo_types::User;

/// Request body for create and update.
///
/// Missing or `null` fields decode to their zero value. `id` is never
/// written to the table; update echoes it back as sent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPayload {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
}

impl UserPayload {
    pub fn into_user(self, id: i32) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
        }
    }

    /// The submitted body as a `User`, id included.
    pub fn echo(&self) -> User {
        self.clone().into_user(self.id)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
