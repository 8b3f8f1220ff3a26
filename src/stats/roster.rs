use super::records::{LeagueUser, RosterRecord};
use std::collections::HashMap;

/// Entity id (player id or team code) -> owning manager's display name.
#[derive(Debug, Clone, Default)]
pub struct RosterIndex {
    owners: HashMap<String, Option<String>>,
}

impl RosterIndex {
    pub fn build(rosters: &[RosterRecord], users: &[LeagueUser]) -> Self {
        let names: HashMap<&str, &str> = users
            .iter()
            .filter_map(|u| Some((u.user_id.as_str(), u.display_name.as_deref()?)))
            .collect();

        let mut owners = HashMap::new();
        for roster in rosters {
            let owner = roster
                .owner_id
                .as_deref()
                .and_then(|id| names.get(id))
                .map(|s| s.to_string());
            for player in roster.players.iter().flatten() {
                // Later rosters overwrite earlier ones for the same id.
                owners.insert(player.clone(), owner.clone());
            }
        }
        Self { owners }
    }

    pub fn is_rostered(&self, entity_id: &str) -> bool {
        self.owners.contains_key(entity_id)
    }

    pub fn owner(&self, entity_id: &str) -> Option<&str> {
        self.owners.get(entity_id).and_then(|o| o.as_deref())
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}
