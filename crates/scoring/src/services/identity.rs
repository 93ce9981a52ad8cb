use std::collections::HashMap;
use std::sync::Arc;

use crate::models::{Club, ClubKey, Gender, Swimmer, SwimmerKey};

/// Canonical club and swimmer records for one meet.
///
/// The first entry that mentions a key registers the record; every later
/// entry gets a clone of the same `Arc`, so all results of a swimmer point at
/// one `Swimmer`.
#[derive(Debug, Clone, Default)]
pub struct IdentityRegistry {
    clubs: HashMap<String, Arc<Club>>,
    swimmers: HashMap<String, Arc<Swimmer>>,
}

impl IdentityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn club(&mut self, club_name: &str) -> Arc<Club> {
        let key = ClubKey::new(club_name).into_string();
        let name = club_name.trim();

        Arc::clone(self.clubs.entry(key.clone()).or_insert_with(|| {
            Arc::new(Club {
                id: key,
                name: name.to_string(),
                short_name: Club::short_name_of(name),
            })
        }))
    }

    pub fn swimmer(
        &mut self,
        name: &str,
        birth_year: Option<i32>,
        gender: Gender,
        club: &Club,
    ) -> Arc<Swimmer> {
        let key = SwimmerKey::new(name, birth_year).into_string();
        let name = name.trim();

        Arc::clone(self.swimmers.entry(key.clone()).or_insert_with(|| {
            let (last_name, first_name) = Swimmer::split_name(name);
            Arc::new(Swimmer {
                id: key,
                name: name.to_string(),
                first_name,
                last_name,
                birth_year,
                gender,
                club_id: club.id.clone(),
            })
        }))
    }

    pub fn get_club(&self, id: &str) -> Option<&Arc<Club>> {
        self.clubs.get(id)
    }

    pub fn get_swimmer(&self, id: &str) -> Option<&Arc<Swimmer>> {
        self.swimmers.get(id)
    }

    pub fn club_count(&self) -> usize {
        self.clubs.len()
    }

    pub fn swimmer_count(&self) -> usize {
        self.swimmers.len()
    }
}
