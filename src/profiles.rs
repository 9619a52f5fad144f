use serde::{Deserialize, Serialize};

/// Named bundle of settings overrides for a game genre. Plain CRUD entity,
/// no versioning.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameProfile {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub dpi: u32,
    pub polling_rate: u32,
    pub lift_off_distance: u8,
    pub angle_snapping: bool,
    pub acceleration: bool,
}

/// Insert or replace by id, preserving list order for existing entries.
pub fn upsert_profile(profiles: &mut Vec<GameProfile>, profile: GameProfile) {
    match profiles.iter_mut().find(|p| p.id == profile.id) {
        Some(existing) => *existing = profile,
        None => profiles.push(profile),
    }
}

pub fn delete_profile(profiles: &mut Vec<GameProfile>, id: &str) -> bool {
    let before = profiles.len();
    profiles.retain(|p| p.id != id);
    profiles.len() != before
}

pub fn default_profiles() -> Vec<GameProfile> {
    vec![
        GameProfile {
            id: "1".to_string(),
            name: "FPS Games".to_string(),
            icon: "crosshair".to_string(),
            dpi: 800,
            polling_rate: 1000,
            lift_off_distance: 2,
            angle_snapping: false,
            acceleration: false,
        },
        GameProfile {
            id: "2".to_string(),
            name: "MOBA Games".to_string(),
            icon: "map".to_string(),
            dpi: 1200,
            polling_rate: 500,
            lift_off_distance: 1,
            angle_snapping: true,
            acceleration: false,
        },
        GameProfile {
            id: "3".to_string(),
            name: "RTS Games".to_string(),
            icon: "castle".to_string(),
            dpi: 1600,
            polling_rate: 250,
            lift_off_distance: 1,
            angle_snapping: true,
            acceleration: true,
        },
    ]
}
