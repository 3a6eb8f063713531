use ftm_achievement_nft::msg::MetadataRequest;

pub const SOURCE_NAME: &str = "The Fantom Dungeon";

/// Achievements of "The Fantom Dungeon", in the order an adventure earns them.
pub fn dungeon_catalog() -> Vec<MetadataRequest> {
    vec![
        entry(
            0,
            "Defeated first monster",
            "You have been brave enough to defeat the first monster of 'The Fantom Dungeon'",
            5,
        ),
        entry(
            1,
            "Defeated first miniboss",
            "You have been brave enough to defeat the Eruptus, the mini boss of 'The Fantom Dungeon'",
            10,
        ),
        entry(
            3,
            "Defeated final boss",
            "You have been brave enough to defeat Iced Giant, the final boss of 'The Fantom Dungeon'",
            50,
        ),
    ]
}

fn entry(rarity: u32, title: &str, description: &str, points: u64) -> MetadataRequest {
    MetadataRequest {
        source_name: SOURCE_NAME.to_string(),
        rarity,
        title: title.to_string(),
        description: description.to_string(),
        points,
    }
}
